//! Habitability classification and categorical forecast verification.
//!
//! This facade crate re-exports the two workspace members:
//!
//! - [`habver_core`]: gridded field types, latitude-weighted aggregation,
//!   contingency tables and multi-category skill scores
//! - [`habver_components`]: the threshold-based habitability classifiers and
//!   classification mergers

pub use habver_components;
pub use habver_core;

pub use habver_core::category::{CategoricalField, Category};
pub use habver_core::errors::{HabverError, HabverResult};
pub use habver_core::field::GriddedField;
pub use habver_core::verification::{ContingencyTable, SkillScores, VerificationMode};

pub use habver_components::classifier::{Classifier, ClassifierInputs};
