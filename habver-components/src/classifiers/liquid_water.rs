//! Liquid-water temperature classifiers.
//!
//! Habitability from surface temperatures compatible with liquid water
//! (0-100 degC), optionally requiring a minimum annual precipitation.

use crate::classifier::{Classifier, ClassifierInputs};
use habver_core::category::{CategoricalField, Category};
use habver_core::errors::HabverResult;
use habver_core::field::FloatValue;
use habver_core::units::mm_per_year_as_rate;
use habver_core::variables::{VAR_PRECIPITATION, VAR_SURFACE_TEMPERATURE};
use serde::{Deserialize, Serialize};

/// Liquid-water temperature window, K (inclusive on both ends).
pub const LIQUID_WATER_T_MIN: FloatValue = 273.15;
pub const LIQUID_WATER_T_MAX: FloatValue = 373.15;

fn in_liquid_water_window(temperature: FloatValue) -> bool {
    (LIQUID_WATER_T_MIN..=LIQUID_WATER_T_MAX).contains(&temperature)
}

/// Habitability from liquid-water temperatures alone.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LiquidWaterClassifier;

#[typetag::serde]
impl Classifier for LiquidWaterClassifier {
    fn name(&self) -> &str {
        "liquid-water"
    }

    fn classify(&self, inputs: &ClassifierInputs) -> HabverResult<CategoricalField> {
        let tas = inputs.get(VAR_SURFACE_TEMPERATURE.name)?;

        let field = tas.map_cells(|t| {
            t.map(|t| {
                if in_liquid_water_window(t) {
                    Category::Microbial.value()
                } else {
                    Category::Limited.value()
                }
            })
        });
        CategoricalField::new(field)
    }
}

/// Habitability from liquid-water temperatures and a minimum annual
/// precipitation of 300 mm per Earth year.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LiquidWaterPrecipClassifier {
    /// Minimum precipitation rate, kg m^-2 s^-1
    min_precipitation: FloatValue,
}

impl LiquidWaterPrecipClassifier {
    pub fn new() -> Self {
        Self {
            min_precipitation: mm_per_year_as_rate(300.0),
        }
    }

    /// Override the precipitation threshold (as a rate in kg m^-2 s^-1).
    pub fn with_min_precipitation(min_precipitation: FloatValue) -> Self {
        Self { min_precipitation }
    }
}

impl Default for LiquidWaterPrecipClassifier {
    fn default() -> Self {
        Self::new()
    }
}

#[typetag::serde]
impl Classifier for LiquidWaterPrecipClassifier {
    fn name(&self) -> &str {
        "liquid-water-precipitation"
    }

    fn classify(&self, inputs: &ClassifierInputs) -> HabverResult<CategoricalField> {
        let tas = inputs.get(VAR_SURFACE_TEMPERATURE.name)?;
        let pr = inputs.get(VAR_PRECIPITATION.name)?;

        let field = tas.zip_map2(pr, |t, p| {
            let t = t?;
            let p = p?;
            let habitable = in_liquid_water_window(t) && p >= self.min_precipitation;
            Some(if habitable {
                Category::Microbial.value()
            } else {
                Category::Limited.value()
            })
        })?;
        CategoricalField::new(field)
    }
}
