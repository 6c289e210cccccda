//! Gridded data fields with explicit missing-data semantics.
//!
//! A [`GriddedField`] is an N-dimensional array of floating point values
//! indexed by named dimensions, with optional per-dimension coordinate values
//! (degrees latitude for the weighting dimension). Missing data is carried as
//! NaN in storage, but all cell-level operations go through [`Option`] so
//! that a missing operand always produces a missing result rather than
//! falling through a comparison to a default branch.
//!
//! Dimensions other than the one used for weighting (longitude, time,
//! ensemble member) are passed through unexamined.

use crate::errors::{HabverError, HabverResult};
use ndarray::{ArrayD, Axis, Zip};
use num::Float;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Floating point value type used throughout.
pub type FloatValue = f64;

/// Lift a stored cell value into the explicit missing-data representation.
///
/// NaN is the storage sentinel for "no value at this cell"; everything else
/// is a valid observation.
pub fn valid(value: FloatValue) -> Option<FloatValue> {
    if value.is_nan() {
        None
    } else {
        Some(value)
    }
}

/// An N-dimensional gridded data field with named dimensions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GriddedField {
    data: ArrayD<FloatValue>,
    dims: Vec<String>,
    coords: HashMap<String, Vec<FloatValue>>,
}

impl GriddedField {
    /// Create a field from an array and one dimension name per array axis.
    pub fn new(data: ArrayD<FloatValue>, dims: &[&str]) -> HabverResult<Self> {
        if dims.len() != data.ndim() {
            return Err(HabverError::DimensionCountMismatch {
                provided: dims.len(),
                ndim: data.ndim(),
            });
        }
        Ok(Self {
            data,
            dims: dims.iter().map(|d| d.to_string()).collect(),
            coords: HashMap::new(),
        })
    }

    /// Attach coordinate values to a named dimension.
    ///
    /// Coordinates are required on the latitude dimension before any
    /// area-weighted aggregation; other dimensions may leave them off.
    pub fn with_coord(mut self, dim: &str, values: Vec<FloatValue>) -> HabverResult<Self> {
        let axis = self.axis_of(dim)?;
        let dim_len = self.data.shape()[axis];
        if values.len() != dim_len {
            return Err(HabverError::CoordinateLengthMismatch {
                dim: dim.to_string(),
                coord_len: values.len(),
                dim_len,
            });
        }
        self.coords.insert(dim.to_string(), values);
        Ok(self)
    }

    pub fn data(&self) -> &ArrayD<FloatValue> {
        &self.data
    }

    pub fn dims(&self) -> &[String] {
        &self.dims
    }

    pub fn shape(&self) -> &[usize] {
        self.data.shape()
    }

    /// Coordinate values for a dimension, if attached.
    pub fn coord(&self, dim: &str) -> Option<&[FloatValue]> {
        self.coords.get(dim).map(|v| v.as_slice())
    }

    /// Axis index of a named dimension.
    pub fn axis_of(&self, dim: &str) -> HabverResult<usize> {
        self.dims
            .iter()
            .position(|d| d == dim)
            .ok_or_else(|| HabverError::UnknownDimension(dim.to_string()))
    }

    /// Check that another field shares this field's dimensions and shape.
    ///
    /// Fields from different grids must never be combined silently; this is
    /// the hard configuration check performed before any element-wise
    /// combination or verification step.
    pub fn same_layout(&self, other: &GriddedField) -> HabverResult<()> {
        if self.dims != other.dims {
            return Err(HabverError::Error(format!(
                "Field dimensions do not match: {:?} vs {:?}",
                self.dims, other.dims
            )));
        }
        if self.data.shape() != other.data.shape() {
            return Err(HabverError::ShapeMismatch {
                lhs: self.data.shape().to_vec(),
                rhs: other.data.shape().to_vec(),
            });
        }
        Ok(())
    }

    /// Element-wise map with explicit missing-data handling.
    ///
    /// The closure receives `None` for missing cells and returns `None` to
    /// mark the output cell missing.
    pub fn map_cells<F>(&self, f: F) -> GriddedField
    where
        F: Fn(Option<FloatValue>) -> Option<FloatValue>,
    {
        let data = self
            .data
            .mapv(|v| f(valid(v)).unwrap_or_else(FloatValue::nan));
        GriddedField {
            data,
            dims: self.dims.clone(),
            coords: self.coords.clone(),
        }
    }

    /// Element-wise combination of two fields on the same grid.
    pub fn zip_map2<F>(&self, other: &GriddedField, f: F) -> HabverResult<GriddedField>
    where
        F: Fn(Option<FloatValue>, Option<FloatValue>) -> Option<FloatValue>,
    {
        self.same_layout(other)?;
        let data = Zip::from(&self.data)
            .and(&other.data)
            .map_collect(|&a, &b| f(valid(a), valid(b)).unwrap_or_else(FloatValue::nan));
        Ok(GriddedField {
            data,
            dims: self.dims.clone(),
            coords: self.coords.clone(),
        })
    }

    /// Element-wise combination of three fields on the same grid.
    pub fn zip_map3<F>(
        &self,
        second: &GriddedField,
        third: &GriddedField,
        f: F,
    ) -> HabverResult<GriddedField>
    where
        F: Fn(Option<FloatValue>, Option<FloatValue>, Option<FloatValue>) -> Option<FloatValue>,
    {
        self.same_layout(second)?;
        self.same_layout(third)?;
        let data = Zip::from(&self.data)
            .and(&second.data)
            .and(&third.data)
            .map_collect(|&a, &b, &c| {
                f(valid(a), valid(b), valid(c)).unwrap_or_else(FloatValue::nan)
            });
        Ok(GriddedField {
            data,
            dims: self.dims.clone(),
            coords: self.coords.clone(),
        })
    }

    /// Mean over a named dimension, skipping missing cells.
    ///
    /// A cell of the reduced field is missing only when every value along the
    /// reduced dimension was missing.
    pub fn mean_over(&self, dim: &str) -> HabverResult<GriddedField> {
        let axis = self.axis_of(dim)?;
        let data = self.data.map_axis(Axis(axis), |lane| {
            let mut sum = 0.0;
            let mut count = 0usize;
            for &v in lane.iter() {
                if !v.is_nan() {
                    sum += v;
                    count += 1;
                }
            }
            if count == 0 {
                FloatValue::nan()
            } else {
                sum / count as FloatValue
            }
        });
        Ok(self.reduced(axis, data))
    }

    /// Minimum over a named dimension, skipping missing cells.
    pub fn min_over(&self, dim: &str) -> HabverResult<GriddedField> {
        let axis = self.axis_of(dim)?;
        let data = self.data.map_axis(Axis(axis), |lane| {
            let mut min = FloatValue::infinity();
            let mut count = 0usize;
            for &v in lane.iter() {
                if !v.is_nan() {
                    min = min.min(v);
                    count += 1;
                }
            }
            if count == 0 {
                FloatValue::nan()
            } else {
                min
            }
        });
        Ok(self.reduced(axis, data))
    }

    fn reduced(&self, axis: usize, data: ArrayD<FloatValue>) -> GriddedField {
        let mut dims = self.dims.clone();
        let removed = dims.remove(axis);
        let mut coords = self.coords.clone();
        coords.remove(&removed);
        GriddedField { data, dims, coords }
    }
}
