//! Unit handling for the physical input fields.
//!
//! Precipitation and evapotranspiration arrive as mass-flux rates
//! (kg m^-2 s^-1, numerically equal to mm s^-1), while the habitability
//! thresholds in the literature are quoted in mm per Earth year. The
//! conversion between the two lives here, along with the temperature unit
//! flag used by the composite temperature-water classifier.

use crate::errors::HabverError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Seconds in one Earth year (365 days), the denominator used to express
/// mm/yr precipitation thresholds as per-second rates.
pub const SECONDS_PER_YEAR: f64 = 365.0 * 24.0 * 60.0 * 60.0;

/// Convert a threshold in mm per Earth year to a rate in kg m^-2 s^-1.
pub fn mm_per_year_as_rate(mm_per_year: f64) -> f64 {
    mm_per_year / SECONDS_PER_YEAR
}

/// Temperature unit flag for classifiers that accept either Kelvin or
/// Celsius input.
///
/// Parsing accepts exactly `"K"` or `"C"`; anything else is an
/// [`HabverError::InvalidUnit`] so callers can short-circuit before any
/// classification is attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TemperatureUnit {
    Kelvin,
    Celsius,
}

impl FromStr for TemperatureUnit {
    type Err = HabverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "K" => Ok(TemperatureUnit::Kelvin),
            "C" => Ok(TemperatureUnit::Celsius),
            other => Err(HabverError::InvalidUnit(other.to_string())),
        }
    }
}

impl std::fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TemperatureUnit::Kelvin => write!(f, "K"),
            TemperatureUnit::Celsius => write!(f, "C"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use is_close::is_close;

    #[test]
    fn mm_per_year_rate_conversion() {
        // 300 mm/yr is the liquid-water precipitation threshold
        let rate = mm_per_year_as_rate(300.0);
        assert!(is_close!(rate, 300.0 / 31_536_000.0));
    }

    #[test]
    fn parse_valid_units() {
        assert_eq!("K".parse::<TemperatureUnit>().unwrap(), TemperatureUnit::Kelvin);
        assert_eq!("C".parse::<TemperatureUnit>().unwrap(), TemperatureUnit::Celsius);
    }

    #[test]
    fn parse_invalid_unit() {
        let result = "F".parse::<TemperatureUnit>();
        assert!(matches!(result, Err(HabverError::InvalidUnit(u)) if u == "F"));
    }

    #[test]
    fn lowercase_is_rejected() {
        assert!("k".parse::<TemperatureUnit>().is_err());
    }

    #[test]
    fn unit_display_roundtrips() {
        for unit in [TemperatureUnit::Kelvin, TemperatureUnit::Celsius] {
            let parsed: TemperatureUnit = unit.to_string().parse().unwrap();
            assert_eq!(parsed, unit);
        }
    }
}
