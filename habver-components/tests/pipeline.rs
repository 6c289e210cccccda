//! Classify two model states and verify one against the other.

use habver_components::classifier::{Classifier, ClassifierInputs};
use habver_components::classifiers::{MulticellularClassifier, TemperatureWaterClassifier};
use habver_core::field::{FloatValue, GriddedField};
use habver_core::units::TemperatureUnit;
use habver_core::verification::{ContingencyTableBuilder, VerificationMode};
use is_close::is_close;
use ndarray::array;

fn latlon(values: ndarray::Array2<FloatValue>, lats: Vec<FloatValue>) -> GriddedField {
    GriddedField::new(values.into_dyn(), &["lat", "lon"])
        .unwrap()
        .with_coord("lat", lats)
        .unwrap()
}

#[test]
fn classify_then_verify() {
    let lats = vec![-45.0, 0.0, 45.0];

    // "Model" state: a warm band around the equator
    let model_tas = latlon(
        array![
            [250.0, 260.0, 300.0],
            [300.0, 310.0, 295.0],
            [260.0, 240.0, 250.0]
        ],
        lats.clone(),
    );
    // "Reference" state: slightly shifted temperatures
    let reference_tas = latlon(
        array![
            [255.0, 250.0, 295.0],
            [305.0, 300.0, 300.0],
            [250.0, 245.0, 260.0]
        ],
        lats.clone(),
    );

    let classifier = TemperatureWaterClassifier::new(TemperatureUnit::Kelvin);
    let predicted = classifier
        .classify(&ClassifierInputs::new().with_field("tas", model_tas))
        .unwrap();
    let observed = classifier
        .classify(&ClassifierInputs::new().with_field("tas", reference_tas))
        .unwrap();

    let table = ContingencyTableBuilder::new(VerificationMode::All)
        .build(&predicted, &observed)
        .unwrap();
    let scores = table.skill_scores();

    // predicted = [[1,2,3],[3,3,3],[2,1,1]], observed = [[2,1,3],[3,3,3],[1,1,2]]
    // Mid-latitude rows weigh cos(45 deg) each; per-pair rounded counts:
    // (1,1): 1, (1,2): 1, (2,1): 1, (3,3): round(2*cos45 + 3) = 4
    assert!(is_close!(table.count(0, 0), 1.0));
    assert!(is_close!(table.count(0, 1), 1.0));
    assert!(is_close!(table.count(1, 0), 1.0));
    assert!(is_close!(table.count(2, 2), 4.0));
    assert!(is_close!(table.total(), 7.0));

    assert!(is_close!(scores.proportion_correct, 5.0 / 7.0));
    assert!(scores.gerrity.is_some());

    // The microbial collapse carries the same total weight
    let collapsed = ContingencyTableBuilder::new(VerificationMode::Microbial)
        .build(&predicted, &observed)
        .unwrap();
    assert!(is_close!(collapsed.total(), table.total()));
}

#[test]
fn classifiers_disagreeing_on_category_scheme_still_verify() {
    let lats = vec![0.0];
    let tas = latlon(array![[280.0, 300.0, 330.0, 400.0]], lats.clone());

    // Composite classifier produces {1, 2, 3}; multicellular produces {1, 3}
    let predicted = TemperatureWaterClassifier::new(TemperatureUnit::Kelvin)
        .classify(&ClassifierInputs::new().with_field("tas", tas.clone()))
        .unwrap();
    let observed = MulticellularClassifier
        .classify(&ClassifierInputs::new().with_field("tas", tas))
        .unwrap();

    let table = ContingencyTableBuilder::new(VerificationMode::Complex)
        .build(&predicted, &observed)
        .unwrap();

    // 280 K and 300 K are complex in both schemes; 330 K is microbial for
    // the composite (collapsed to limited) and limited for multicellular;
    // 400 K is limited in both
    assert!(is_close!(table.count(1, 1), 2.0));
    assert!(is_close!(table.count(0, 0), 2.0));
    assert!(is_close!(table.total(), 4.0));
}

#[test]
fn classifier_configuration_survives_serialization() {
    let classifier: Box<dyn Classifier> =
        Box::new(TemperatureWaterClassifier::new(TemperatureUnit::Celsius));
    let json = serde_json::to_string(&classifier).unwrap();
    let restored: Box<dyn Classifier> = serde_json::from_str(&json).unwrap();

    assert_eq!(restored.name(), "temperature-water");

    let tas = latlon(array![[25.0]], vec![0.0]);
    let result = restored
        .classify(&ClassifierInputs::new().with_field("tas", tas))
        .unwrap();
    assert_eq!(result.field().data()[[0, 0]], 3.0);
}
