//! Sea-ice concentration classifier.

use crate::classifier::{Classifier, ClassifierInputs};
use habver_core::category::{CategoricalField, Category};
use habver_core::errors::HabverResult;
use habver_core::field::FloatValue;
use habver_core::variables::VAR_SEA_ICE_CONCENTRATION;
use serde::{Deserialize, Serialize};

/// Default sea-ice concentration below which a cell counts as ice-free.
pub const DEFAULT_ICE_FREE_THRESHOLD: FloatValue = 0.15;

/// Habitability of ocean cells based on ice-free area.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IceFreeClassifier {
    threshold: FloatValue,
}

impl IceFreeClassifier {
    pub fn new(threshold: FloatValue) -> Self {
        Self { threshold }
    }
}

impl Default for IceFreeClassifier {
    fn default() -> Self {
        Self::new(DEFAULT_ICE_FREE_THRESHOLD)
    }
}

#[typetag::serde]
impl Classifier for IceFreeClassifier {
    fn name(&self) -> &str {
        "ice-free"
    }

    fn classify(&self, inputs: &ClassifierInputs) -> HabverResult<CategoricalField> {
        let siconc = inputs.get(VAR_SEA_ICE_CONCENTRATION.name)?;

        let field = siconc.map_cells(|v| {
            v.map(|concentration| {
                if concentration <= self.threshold {
                    Category::Microbial.value()
                } else {
                    Category::Limited.value()
                }
            })
        });
        CategoricalField::new(field)
    }
}
