//! Core types for habitability classification and categorical forecast
//! verification.
//!
//! This crate provides the gridded data model with explicit missing-data
//! semantics, latitude-cosine area weighting, and the contingency-table /
//! skill-score machinery used to verify one categorical field against
//! another. The classification rules themselves live in
//! `habver-components`.

pub mod category;
pub mod coverage;
pub mod field;
pub mod units;
pub mod variables;
pub mod verification;
pub mod weighting;

pub mod errors;
