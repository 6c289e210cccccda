//! Aridity index classifiers.
//!
//! Two thresholds on the same dryness index: the stricter one asks for humid
//! conditions, the looser one only excludes arid cells.

use crate::classifier::{Classifier, ClassifierInputs};
use habver_core::category::{CategoricalField, Category};
use habver_core::errors::HabverResult;
use habver_core::field::FloatValue;
use habver_core::variables::VAR_ARIDITY_INDEX;
use serde::{Deserialize, Serialize};

/// Aridity index above which a cell counts as humid.
pub const HUMID_THRESHOLD: FloatValue = 0.39;

/// Aridity index below which a cell counts as arid.
pub const ARID_THRESHOLD: FloatValue = 0.17;

/// Which aridity threshold to classify against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AridityScheme {
    /// Habitable only where humid (index > 0.39)
    Humid,
    /// Habitable everywhere not arid (index >= 0.17)
    NonArid,
}

/// Habitability from the aridity index.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AridityClassifier {
    scheme: AridityScheme,
}

impl AridityClassifier {
    pub fn new(scheme: AridityScheme) -> Self {
        Self { scheme }
    }

    pub fn humid() -> Self {
        Self::new(AridityScheme::Humid)
    }

    pub fn non_arid() -> Self {
        Self::new(AridityScheme::NonArid)
    }
}

#[typetag::serde]
impl Classifier for AridityClassifier {
    fn name(&self) -> &str {
        match self.scheme {
            AridityScheme::Humid => "aridity-humid",
            AridityScheme::NonArid => "aridity-nonarid",
        }
    }

    fn classify(&self, inputs: &ClassifierInputs) -> HabverResult<CategoricalField> {
        let index = inputs.get(VAR_ARIDITY_INDEX.name)?;
        let scheme = self.scheme;

        let field = index.map_cells(|v| {
            v.map(|index| {
                let habitable = match scheme {
                    AridityScheme::Humid => index > HUMID_THRESHOLD,
                    AridityScheme::NonArid => index >= ARID_THRESHOLD,
                };
                if habitable {
                    Category::Microbial.value()
                } else {
                    Category::Limited.value()
                }
            })
        });
        CategoricalField::new(field)
    }
}
