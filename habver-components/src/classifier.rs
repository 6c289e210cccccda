//! The classifier component interface.

use habver_core::category::CategoricalField;
use habver_core::errors::{HabverError, HabverResult};
use habver_core::field::GriddedField;
use std::collections::HashMap;
use std::fmt::Debug;

/// Named input fields for a classification run.
///
/// Fields are keyed by the standard variable names defined in
/// `habver_core::variables`. A classifier asks for the fields it needs;
/// asking for an absent field is a configuration error, while optional
/// fields are simply skipped when absent.
#[derive(Debug, Clone, Default)]
pub struct ClassifierInputs {
    fields: HashMap<String, GriddedField>,
}

impl ClassifierInputs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field, builder style.
    pub fn with_field(mut self, name: &str, field: GriddedField) -> Self {
        self.fields.insert(name.to_string(), field);
        self
    }

    pub fn insert(&mut self, name: &str, field: GriddedField) {
        self.fields.insert(name.to_string(), field);
    }

    /// Get a required field.
    pub fn get(&self, name: &str) -> HabverResult<&GriddedField> {
        self.fields
            .get(name)
            .ok_or_else(|| HabverError::MissingVariable(name.to_string()))
    }

    /// Get an optional field.
    pub fn get_optional(&self, name: &str) -> Option<&GriddedField> {
        self.fields.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }
}

/// A threshold-based habitability classifier.
///
/// Classifiers are pure: the same inputs always give the same categorical
/// field, and no state is carried between calls. A missing input value at a
/// cell always yields a missing category at that cell, never a default.
#[typetag::serde]
pub trait Classifier: Debug + Send + Sync {
    /// Short name identifying the classification scheme.
    fn name(&self) -> &str;

    /// Classify the input fields into an ordinal categorical field.
    fn classify(&self, inputs: &ClassifierInputs) -> HabverResult<CategoricalField>;
}
