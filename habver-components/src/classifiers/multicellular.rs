//! Complex-life temperature classifier.
//!
//! Multicellular poikilotherms tolerate a narrower window (0-50 degC) than
//! liquid water allows; cells inside it score the full complex category.

use crate::classifier::{Classifier, ClassifierInputs};
use habver_core::category::{CategoricalField, Category};
use habver_core::errors::HabverResult;
use habver_core::field::FloatValue;
use habver_core::variables::VAR_SURFACE_TEMPERATURE;
use serde::{Deserialize, Serialize};

/// Multicellular temperature window, K (inclusive on both ends).
pub const MULTICELLULAR_T_MIN: FloatValue = 273.15;
pub const MULTICELLULAR_T_MAX: FloatValue = 323.15;

/// Habitability for complex multicellular life from surface temperature.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MulticellularClassifier;

#[typetag::serde]
impl Classifier for MulticellularClassifier {
    fn name(&self) -> &str {
        "complex-multicellular"
    }

    fn classify(&self, inputs: &ClassifierInputs) -> HabverResult<CategoricalField> {
        let tas = inputs.get(VAR_SURFACE_TEMPERATURE.name)?;

        let field = tas.map_cells(|t| {
            t.map(|t| {
                if (MULTICELLULAR_T_MIN..=MULTICELLULAR_T_MAX).contains(&t) {
                    Category::Complex.value()
                } else {
                    Category::Limited.value()
                }
            })
        });
        CategoricalField::new(field)
    }
}
