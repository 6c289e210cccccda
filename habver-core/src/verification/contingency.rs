//! Weighted contingency tables for categorical field pairs.

use crate::category::{CategoricalField, Category};
use crate::errors::{HabverError, HabverResult};
use crate::field::FloatValue;
use crate::weighting::weighted_sum;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Which categories stay distinct when comparing two categorical fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VerificationMode {
    /// Keep all three categories apart (3x3 table)
    All,
    /// Collapse microbial into limited, comparing complex against the rest
    /// (2x2 table over {limited, complex})
    Complex,
    /// Collapse complex into microbial, comparing at-least-microbial against
    /// limited (2x2 table over {limited, microbial})
    Microbial,
}

impl FromStr for VerificationMode {
    type Err = HabverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(VerificationMode::All),
            "complex" => Ok(VerificationMode::Complex),
            "microbial" => Ok(VerificationMode::Microbial),
            other => Err(HabverError::UnknownMode(other.to_string())),
        }
    }
}

impl std::fmt::Display for VerificationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VerificationMode::All => write!(f, "all"),
            VerificationMode::Complex => write!(f, "complex"),
            VerificationMode::Microbial => write!(f, "microbial"),
        }
    }
}

/// A square table of weighted co-occurrence counts.
///
/// `count(p, o)` is the rounded latitude-weighted frequency of the predicted
/// field holding the row category while the observed field holds the column
/// category at the same cell. Cells missing in either field contribute
/// nowhere. The table size is fixed by the verification mode, so the 2x2 and
/// 3x3 score paths are selected by variant rather than by inspecting the
/// data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ContingencyTable {
    TwoByTwo {
        /// The two categories left distinct by the collapse, in ordinal order
        categories: [Category; 2],
        counts: [[FloatValue; 2]; 2],
    },
    ThreeByThree {
        counts: [[FloatValue; 3]; 3],
    },
}

impl ContingencyTable {
    /// Number of categories (rows/columns).
    pub fn size(&self) -> usize {
        match self {
            ContingencyTable::TwoByTwo { .. } => 2,
            ContingencyTable::ThreeByThree { .. } => 3,
        }
    }

    /// Categories labelling the rows and columns, in order.
    pub fn categories(&self) -> Vec<Category> {
        match self {
            ContingencyTable::TwoByTwo { categories, .. } => categories.to_vec(),
            ContingencyTable::ThreeByThree { .. } => Category::ALL.to_vec(),
        }
    }

    /// Weighted count of predicted-row, observed-column co-occurrence.
    pub fn count(&self, row: usize, col: usize) -> FloatValue {
        match self {
            ContingencyTable::TwoByTwo { counts, .. } => counts[row][col],
            ContingencyTable::ThreeByThree { counts } => counts[row][col],
        }
    }

    /// Sum of all entries: the total weighted count of cells classified in
    /// both fields.
    pub fn total(&self) -> FloatValue {
        let n = self.size();
        let mut total = 0.0;
        for row in 0..n {
            for col in 0..n {
                total += self.count(row, col);
            }
        }
        total
    }

    /// Row (predicted-category) marginal count.
    pub fn row_sum(&self, row: usize) -> FloatValue {
        (0..self.size()).map(|col| self.count(row, col)).sum()
    }

    /// Column (observed-category) marginal count.
    pub fn col_sum(&self, col: usize) -> FloatValue {
        (0..self.size()).map(|row| self.count(row, col)).sum()
    }
}

/// Builds contingency tables from pairs of categorical fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContingencyTableBuilder {
    mode: VerificationMode,
    weight_dim: String,
}

impl ContingencyTableBuilder {
    /// Create a builder weighting along the conventional `lat` dimension.
    pub fn new(mode: VerificationMode) -> Self {
        Self {
            mode,
            weight_dim: "lat".to_string(),
        }
    }

    /// Use a different dimension name for the area weighting.
    pub fn with_weight_dim(mut self, weight_dim: impl Into<String>) -> Self {
        self.weight_dim = weight_dim.into();
        self
    }

    /// Build the weighted contingency table for a predicted/observed pair.
    ///
    /// The two fields must share dimensions and shape; this is validated
    /// before any counting. The mode's category collapse is applied to both
    /// fields first, preserving missing cells.
    pub fn build(
        &self,
        predicted: &CategoricalField,
        observed: &CategoricalField,
    ) -> HabverResult<ContingencyTable> {
        predicted.field().same_layout(observed.field())?;

        match self.mode {
            VerificationMode::All => {
                let counts = self.counts(predicted, observed, &Category::ALL)?;
                Ok(ContingencyTable::ThreeByThree { counts })
            }
            VerificationMode::Complex => {
                let predicted = predicted.remap(Category::Microbial, Category::Limited);
                let observed = observed.remap(Category::Microbial, Category::Limited);
                let categories = [Category::Limited, Category::Complex];
                let counts = self.counts(&predicted, &observed, &categories)?;
                Ok(ContingencyTable::TwoByTwo { categories, counts })
            }
            VerificationMode::Microbial => {
                let predicted = predicted.remap(Category::Complex, Category::Microbial);
                let observed = observed.remap(Category::Complex, Category::Microbial);
                let categories = [Category::Limited, Category::Microbial];
                let counts = self.counts(&predicted, &observed, &categories)?;
                Ok(ContingencyTable::TwoByTwo { categories, counts })
            }
        }
    }

    fn counts<const N: usize>(
        &self,
        predicted: &CategoricalField,
        observed: &CategoricalField,
        categories: &[Category; N],
    ) -> HabverResult<[[FloatValue; N]; N]> {
        let mut counts = [[0.0; N]; N];
        for (row, p) in categories.iter().enumerate() {
            for (col, o) in categories.iter().enumerate() {
                let joint = predicted.field().zip_map2(observed.field(), |pv, ov| {
                    let matched = pv == Some(p.value()) && ov == Some(o.value());
                    Some(if matched { 1.0 } else { 0.0 })
                })?;
                counts[row][col] = weighted_sum(&joint, &self.weight_dim)?.round();
            }
        }
        Ok(counts)
    }
}
