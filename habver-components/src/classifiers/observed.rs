//! Observation-based vegetation and ocean-productivity classifier.
//!
//! Land habitability comes from the annual-mean vegetation index; ocean
//! habitability from chlorophyll, where year-round productivity (monthly
//! minimum above threshold) scores higher than a seasonal mean above the
//! same threshold. The land result is preferred, with the ocean result
//! filling cells the vegetation index leaves undefined.

use crate::classifier::{Classifier, ClassifierInputs};
use habver_core::category::{CategoricalField, Category};
use habver_core::errors::HabverResult;
use habver_core::field::FloatValue;
use habver_core::variables::{VAR_CHLOROPHYLL, VAR_VEGETATION_INDEX};
use serde::{Deserialize, Serialize};

/// Annual-mean NDVI above which a cell supports complex life.
pub const NDVI_COMPLEX_THRESHOLD: FloatValue = 0.3;

/// Annual-mean NDVI above which a cell supports microbial life.
pub const NDVI_MICROBIAL_THRESHOLD: FloatValue = 0.15;

/// Chlorophyll-a threshold for both the monthly-minimum and monthly-mean
/// tiers, mg m^-3.
pub const CHLA_THRESHOLD: FloatValue = 0.15;

/// Habitability from observed vegetation and ocean productivity.
///
/// Both inputs are monthly climatologies carrying a month dimension, which
/// is reduced internally.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservedClassifier {
    month_dim: String,
}

impl ObservedClassifier {
    pub fn new() -> Self {
        Self {
            month_dim: "month".to_string(),
        }
    }

    /// Use a different name for the monthly dimension.
    pub fn with_month_dim(month_dim: impl Into<String>) -> Self {
        Self {
            month_dim: month_dim.into(),
        }
    }
}

impl Default for ObservedClassifier {
    fn default() -> Self {
        Self::new()
    }
}

#[typetag::serde]
impl Classifier for ObservedClassifier {
    fn name(&self) -> &str {
        "observed"
    }

    fn classify(&self, inputs: &ClassifierInputs) -> HabverResult<CategoricalField> {
        let ndvi = inputs.get(VAR_VEGETATION_INDEX.name)?;
        let chla = inputs.get(VAR_CHLOROPHYLL.name)?;

        let ndvi_mean = ndvi.mean_over(&self.month_dim)?;
        let chla_mean = chla.mean_over(&self.month_dim)?;
        let chla_min = chla.min_over(&self.month_dim)?;

        // Terrestrial habitability from the annual-mean vegetation index
        let land = ndvi_mean.map_cells(|v| {
            v.map(|ndvi| {
                if ndvi > NDVI_COMPLEX_THRESHOLD {
                    Category::Complex.value()
                } else if ndvi > NDVI_MICROBIAL_THRESHOLD {
                    Category::Microbial.value()
                } else {
                    Category::Limited.value()
                }
            })
        });

        // Marine habitability: year-round productivity outranks a seasonal
        // mean above the same threshold
        let ocean = chla_min.zip_map2(&chla_mean, |min, mean| {
            let min = min?;
            let mean = mean?;
            let category = if min > CHLA_THRESHOLD {
                Category::Complex
            } else if mean > CHLA_THRESHOLD {
                Category::Microbial
            } else {
                Category::Limited
            };
            Some(category.value())
        })?;

        let land = CategoricalField::new(land)?;
        let ocean = CategoricalField::new(ocean)?;
        land.fill_missing(&ocean)
    }
}
