//! Area fractions of a classified field.

use crate::category::{CategoricalField, Category};
use crate::errors::HabverResult;
use crate::field::FloatValue;
use crate::weighting::weighted_sum;
use serde::{Deserialize, Serialize};

/// Latitude-weighted area fractions of the classified (non-missing) cells.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HabitableFractions {
    /// Fraction of classified area supporting at least microbial life
    pub microbial: FloatValue,
    /// Fraction of classified area supporting complex life
    pub complex: FloatValue,
}

/// Compute the habitable area fractions of a categorical field.
///
/// Fractions are relative to the total weighted area of cells that carry a
/// category at all; a field with no classified cells yields NaN fractions.
pub fn habitable_fractions(
    field: &CategoricalField,
    weight_dim: &str,
) -> HabverResult<HabitableFractions> {
    let total = weighted_sum(&field.indicator(|_| true), weight_dim)?;
    let microbial = weighted_sum(&field.indicator(|c| c >= Category::Microbial), weight_dim)?;
    let complex = weighted_sum(&field.indicator(|c| c == Category::Complex), weight_dim)?;

    Ok(HabitableFractions {
        microbial: microbial / total,
        complex: complex / total,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::GriddedField;
    use is_close::is_close;
    use ndarray::array;

    fn classified(values: ndarray::Array2<FloatValue>, lats: Vec<FloatValue>) -> CategoricalField {
        let field = GriddedField::new(values.into_dyn(), &["lat", "lon"])
            .unwrap()
            .with_coord("lat", lats)
            .unwrap();
        CategoricalField::new(field).unwrap()
    }

    #[test]
    fn fractions_on_equal_weight_grid() {
        // Equator-only grid: all weights are cos(0) = 1
        let field = classified(array![[1.0, 2.0, 3.0, 3.0]], vec![0.0]);
        let fractions = habitable_fractions(&field, "lat").unwrap();

        assert!(is_close!(fractions.microbial, 0.75));
        assert!(is_close!(fractions.complex, 0.5));
    }

    #[test]
    fn missing_cells_shrink_the_total() {
        let field = classified(array![[2.0, FloatValue::NAN]], vec![0.0]);
        let fractions = habitable_fractions(&field, "lat").unwrap();

        assert!(is_close!(fractions.microbial, 1.0));
        assert!(is_close!(fractions.complex, 0.0));
    }

    #[test]
    fn all_missing_yields_nan_fractions() {
        let field = classified(array![[FloatValue::NAN, FloatValue::NAN]], vec![0.0]);
        let fractions = habitable_fractions(&field, "lat").unwrap();

        assert!(fractions.microbial.is_nan());
        assert!(fractions.complex.is_nan());
    }
}
