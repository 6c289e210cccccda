//! Composite temperature and water-balance classifier.
//!
//! Two temperature windows are evaluated from the same input: a narrow
//! window compatible with complex life and a wide window compatible with
//! microbial life. When precipitation and evapotranspiration are both
//! supplied, cells additionally need a non-negative net precipitation and a
//! minimum annual precipitation. The tiers override each other in a fixed
//! order: complex over microbial over the limited default.

use crate::classifier::{Classifier, ClassifierInputs};
use habver_core::category::{CategoricalField, Category};
use habver_core::errors::HabverResult;
use habver_core::field::FloatValue;
use habver_core::units::{mm_per_year_as_rate, TemperatureUnit};
use habver_core::variables::{VAR_EVAPOTRANSPIRATION, VAR_PRECIPITATION, VAR_SURFACE_TEMPERATURE};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Minimum annual precipitation for the water-balance filter, mm/yr.
pub const MIN_PRECIPITATION_MM_PER_YEAR: FloatValue = 250.0;

/// A half-open temperature interval `[min, max)`.
#[derive(Debug, Clone, Copy)]
struct Window {
    min: FloatValue,
    max: FloatValue,
}

impl Window {
    const fn new(min: FloatValue, max: FloatValue) -> Self {
        Self { min, max }
    }

    fn contains(&self, value: FloatValue) -> bool {
        value >= self.min && value < self.max
    }
}

/// The complex and microbial temperature windows for one unit.
#[derive(Debug, Clone, Copy)]
struct TemperatureWindows {
    complex: Window,
    microbial: Window,
}

fn windows_for(unit: TemperatureUnit) -> TemperatureWindows {
    match unit {
        TemperatureUnit::Kelvin => TemperatureWindows {
            complex: Window::new(273.15, 323.15),
            microbial: Window::new(251.15, 393.15),
        },
        TemperatureUnit::Celsius => TemperatureWindows {
            complex: Window::new(0.0, 50.0),
            microbial: Window::new(-22.0, 120.0),
        },
    }
}

/// Resolve a cell's category from its temperature and water validity.
///
/// The tiers are an ordered list evaluated first-match-wins, from the
/// highest category down; the limited default applies when no window
/// matches. This ordering is load-bearing: a cell inside both windows must
/// come out complex, never microbial.
fn tier_category(temperature: FloatValue, water_ok: bool, windows: &TemperatureWindows) -> Category {
    let tiers = [
        (windows.complex, Category::Complex),
        (windows.microbial, Category::Microbial),
    ];
    for (window, category) in tiers {
        if water_ok && window.contains(temperature) {
            return category;
        }
    }
    Category::Limited
}

/// Complex + microbial habitability from temperature, precipitation and
/// evapotranspiration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemperatureWaterClassifier {
    unit: TemperatureUnit,
}

impl TemperatureWaterClassifier {
    pub fn new(unit: TemperatureUnit) -> Self {
        Self { unit }
    }

    /// Parse the unit flag, reporting anything outside {K, C} as a typed
    /// error so callers can short-circuit before classification.
    pub fn with_unit(unit: &str) -> HabverResult<Self> {
        match unit.parse() {
            Ok(unit) => Ok(Self::new(unit)),
            Err(e) => {
                warn!(unit, "rejected temperature unit for composite classifier");
                Err(e)
            }
        }
    }
}

#[typetag::serde]
impl Classifier for TemperatureWaterClassifier {
    fn name(&self) -> &str {
        "temperature-water"
    }

    fn classify(&self, inputs: &ClassifierInputs) -> HabverResult<CategoricalField> {
        let tas = inputs.get(VAR_SURFACE_TEMPERATURE.name)?;
        let windows = windows_for(self.unit);

        let pr = inputs.get_optional(VAR_PRECIPITATION.name);
        let evspsbl = inputs.get_optional(VAR_EVAPOTRANSPIRATION.name);

        // The water-balance filter only applies when both fields are present
        let field = match (pr, evspsbl) {
            (Some(pr), Some(evspsbl)) => {
                let min_precipitation = mm_per_year_as_rate(MIN_PRECIPITATION_MM_PER_YEAR);
                tas.zip_map3(pr, evspsbl, |t, p, e| {
                    let t = t?;
                    let p = p?;
                    let e = e?;
                    let water_ok = (p - e) >= 0.0 && p >= min_precipitation;
                    Some(tier_category(t, water_ok, &windows).value())
                })?
            }
            _ => tas.map_cells(|t| t.map(|t| tier_category(t, true, &windows).value())),
        };
        CategoricalField::new(field)
    }
}
