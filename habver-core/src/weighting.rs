//! Latitude-cosine weighted aggregation.
//!
//! On a regular longitude-latitude grid the area of a cell scales with the
//! cosine of its latitude, so cosine weights stand in for cell area when
//! summing or averaging over the globe. Missing cells contribute to neither
//! the weighted numerator nor the weight total, giving
//! weighted-mean-with-missing-data semantics rather than treating missing
//! values as zero.

use crate::errors::{HabverError, HabverResult};
use crate::field::{FloatValue, GriddedField};
use ndarray::Axis;
use num::Float;

/// Weighted accumulation over every cell of the field.
///
/// Returns the weighted sum, the total weight over valid cells and the valid
/// cell count.
fn accumulate(field: &GriddedField, weight_dim: &str) -> HabverResult<(FloatValue, FloatValue, usize)> {
    let axis = field.axis_of(weight_dim)?;
    let coords = field
        .coord(weight_dim)
        .ok_or_else(|| HabverError::MissingCoordinate(weight_dim.to_string()))?;

    let mut sum = 0.0;
    let mut weight_total = 0.0;
    let mut count = 0usize;
    for (subview, &latitude) in field.data().axis_iter(Axis(axis)).zip(coords.iter()) {
        let weight = latitude.to_radians().cos();
        for &v in subview.iter() {
            if !v.is_nan() {
                sum += weight * v;
                weight_total += weight;
                count += 1;
            }
        }
    }
    Ok((sum, weight_total, count))
}

/// Latitude-weighted sum over all dimensions of the field.
///
/// Each value is weighted by the cosine of its coordinate along
/// `weight_dim`. Missing cells are excluded; an all-missing field sums to
/// NaN.
pub fn weighted_sum(field: &GriddedField, weight_dim: &str) -> HabverResult<FloatValue> {
    let (sum, _, count) = accumulate(field, weight_dim)?;
    if count == 0 {
        Ok(FloatValue::nan())
    } else {
        Ok(sum)
    }
}

/// Latitude-weighted mean over all dimensions of the field.
///
/// The divisor is the weight total over valid cells only, so missing data
/// does not bias the result towards zero.
pub fn weighted_mean(field: &GriddedField, weight_dim: &str) -> HabverResult<FloatValue> {
    let (sum, weight_total, count) = accumulate(field, weight_dim)?;
    if count == 0 || weight_total == 0.0 {
        Ok(FloatValue::nan())
    } else {
        Ok(sum / weight_total)
    }
}
