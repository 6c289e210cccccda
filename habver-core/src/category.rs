//! Ordinal habitability categories and categorical fields.
//!
//! Categories are ordinal: a higher value means "more habitable". The legend
//! labels and colors consumed by the plotting collaborator are fixed per
//! category and exposed here as plain data; no rendering happens in this
//! crate.

use crate::errors::{HabverError, HabverResult};
use crate::field::{FloatValue, GriddedField};
use serde::{Deserialize, Serialize};

/// Ordinal habitability category of a grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Habitability limited: no considered life form is supported
    Limited = 1,
    /// Microbial life only
    Microbial = 2,
    /// Complex (multicellular) life, which implies microbial life as well
    Complex = 3,
}

impl Category {
    /// All categories in ordinal order.
    pub const ALL: [Category; 3] = [Category::Limited, Category::Microbial, Category::Complex];

    /// Numeric value stored in a categorical field.
    pub fn value(&self) -> FloatValue {
        *self as u8 as FloatValue
    }

    /// Map a stored cell value back to a category.
    ///
    /// Returns `None` for NaN (category undefined at that cell) and for any
    /// value outside the category set.
    pub fn from_value(value: FloatValue) -> Option<Category> {
        Category::ALL.into_iter().find(|c| c.value() == value)
    }

    /// Fixed legend label used by the plotting collaborator.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Limited => "Limited",
            Category::Microbial => "Microbial only",
            Category::Complex => "Complex + Microbial",
        }
    }

    /// Fixed legend color used by the plotting collaborator.
    pub fn legend_color(&self) -> &'static str {
        match self {
            Category::Limited => "#D9F0A3",
            Category::Microbial => "#77C679",
            Category::Complex => "#3C8444",
        }
    }
}

/// A gridded field restricted to the ordinal category set.
///
/// Missing cells mean "category undefined here" (no land, no ocean, missing
/// input) and are excluded from verification entirely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoricalField {
    field: GriddedField,
}

impl CategoricalField {
    /// Wrap a gridded field, validating that every cell holds a category
    /// value or is missing.
    pub fn new(field: GriddedField) -> HabverResult<Self> {
        for &v in field.data().iter() {
            if !v.is_nan() && Category::from_value(v).is_none() {
                return Err(HabverError::InvalidCategory(v));
            }
        }
        Ok(Self { field })
    }

    pub fn field(&self) -> &GriddedField {
        &self.field
    }

    pub fn into_field(self) -> GriddedField {
        self.field
    }

    /// Remap one category onto another, preserving missing cells.
    ///
    /// Used to collapse the three-category scheme to two before building a
    /// 2x2 contingency table (e.g. microbial folded into limited for the
    /// complex-life comparison).
    pub fn remap(&self, from: Category, to: Category) -> CategoricalField {
        let field = self.field.map_cells(|v| {
            v.map(|x| if x == from.value() { to.value() } else { x })
        });
        CategoricalField { field }
    }

    /// Prefer this field's categories, filling missing cells from `fallback`.
    ///
    /// This is the land-preferred/ocean-filled combination used by the
    /// observation-based classifier.
    pub fn fill_missing(&self, fallback: &CategoricalField) -> HabverResult<CategoricalField> {
        let field = self
            .field
            .zip_map2(&fallback.field, |primary, secondary| primary.or(secondary))?;
        Ok(CategoricalField { field })
    }

    /// Indicator field: 1 where the cell's category satisfies the predicate,
    /// 0 elsewhere (including missing cells).
    ///
    /// Missing cells become 0 so they drop out of weighted counts.
    pub fn indicator<F>(&self, pred: F) -> GriddedField
    where
        F: Fn(Category) -> bool,
    {
        self.field.map_cells(|v| {
            let matched = v.and_then(Category::from_value).map(&pred).unwrap_or(false);
            Some(if matched { 1.0 } else { 0.0 })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn categorical(values: ndarray::Array2<FloatValue>) -> CategoricalField {
        let field = GriddedField::new(values.into_dyn(), &["lat", "lon"]).unwrap();
        CategoricalField::new(field).unwrap()
    }

    #[test]
    fn category_values_are_ordinal() {
        assert_eq!(Category::Limited.value(), 1.0);
        assert_eq!(Category::Microbial.value(), 2.0);
        assert_eq!(Category::Complex.value(), 3.0);
        assert!(Category::Limited < Category::Microbial);
        assert!(Category::Microbial < Category::Complex);
    }

    #[test]
    fn from_value_rejects_out_of_set() {
        assert_eq!(Category::from_value(2.0), Some(Category::Microbial));
        assert_eq!(Category::from_value(4.0), None);
        assert_eq!(Category::from_value(FloatValue::NAN), None);
    }

    #[test]
    fn labels_match_legend() {
        assert_eq!(Category::Limited.label(), "Limited");
        assert_eq!(Category::Microbial.label(), "Microbial only");
        assert_eq!(Category::Complex.label(), "Complex + Microbial");
    }

    #[test]
    fn new_rejects_invalid_values() {
        let field = GriddedField::new(array![[1.0, 5.0]].into_dyn(), &["lat", "lon"]).unwrap();
        let result = CategoricalField::new(field);
        assert!(matches!(result, Err(HabverError::InvalidCategory(v)) if v == 5.0));
    }

    #[test]
    fn new_accepts_missing_cells() {
        let field =
            GriddedField::new(array![[1.0, FloatValue::NAN]].into_dyn(), &["lat", "lon"]).unwrap();
        assert!(CategoricalField::new(field).is_ok());
    }

    #[test]
    fn remap_collapses_category_and_preserves_missing() {
        let field = categorical(array![[1.0, 2.0], [3.0, FloatValue::NAN]]);
        let collapsed = field.remap(Category::Microbial, Category::Limited);

        assert_eq!(collapsed.field().data()[[0, 0]], 1.0);
        assert_eq!(collapsed.field().data()[[0, 1]], 1.0);
        assert_eq!(collapsed.field().data()[[1, 0]], 3.0);
        assert!(collapsed.field().data()[[1, 1]].is_nan());
    }

    #[test]
    fn fill_missing_prefers_primary() {
        let land = categorical(array![[3.0, FloatValue::NAN]]);
        let ocean = categorical(array![[1.0, 2.0]]);

        let merged = land.fill_missing(&ocean).unwrap();
        assert_eq!(merged.field().data()[[0, 0]], 3.0);
        assert_eq!(merged.field().data()[[0, 1]], 2.0);
    }

    #[test]
    fn fill_missing_keeps_missing_when_both_missing() {
        let land = categorical(array![[FloatValue::NAN]]);
        let ocean = categorical(array![[FloatValue::NAN]]);

        let merged = land.fill_missing(&ocean).unwrap();
        assert!(merged.field().data()[[0, 0]].is_nan());
    }

    #[test]
    fn indicator_excludes_missing_cells() {
        let field = categorical(array![[2.0, FloatValue::NAN], [3.0, 1.0]]);
        let habitable = field.indicator(|c| c >= Category::Microbial);

        assert_eq!(habitable.data()[[0, 0]], 1.0);
        assert_eq!(habitable.data()[[0, 1]], 0.0);
        assert_eq!(habitable.data()[[1, 0]], 1.0);
        assert_eq!(habitable.data()[[1, 1]], 0.0);
    }
}
