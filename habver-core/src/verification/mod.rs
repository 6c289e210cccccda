//! Categorical forecast verification.
//!
//! Agreement between a predicted and an observed categorical field is
//! quantified by building a latitude-weighted contingency table and deriving
//! multi-category skill scores from it. The verification mode decides which
//! categories stay distinct: the full three-way comparison, or one of the
//! two-way collapses focused on complex or microbial habitability.

pub mod contingency;
pub mod skill;

pub use contingency::{ContingencyTable, ContingencyTableBuilder, VerificationMode};
pub use skill::SkillScores;
