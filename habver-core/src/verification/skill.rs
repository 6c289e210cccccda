//! Multi-category skill scores derived from a contingency table.
//!
//! All scores compare the achieved proportion correct against a
//! random-reference forecast built from the table's own marginals. A
//! category that never occurs in one of the fields makes one of the
//! denominators degenerate; the affected score becomes NaN and callers must
//! tolerate NaN propagating into downstream aggregates.

use super::contingency::ContingencyTable;
use crate::field::FloatValue;
use num::Float;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Scalar verification metrics for one contingency table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SkillScores {
    /// Fraction of weighted cells where predicted and observed agree
    pub proportion_correct: FloatValue,
    /// Heidke skill score: improvement over the random reference,
    /// normalised by a perfect forecast's improvement
    pub heidke: FloatValue,
    /// Peirce skill score: improvement over the random reference,
    /// normalised by the unbiased-random complement
    pub peirce: FloatValue,
    /// Gerrity (Gandin-Murphy) skill score, weighting distant-category
    /// misses as worse; only defined for the three-category table
    pub gerrity: Option<FloatValue>,
}

/// Guarded division: a zero or non-finite denominator marks the metric
/// undefined instead of producing an infinity.
fn ratio(numerator: FloatValue, denominator: FloatValue) -> FloatValue {
    if denominator == 0.0 || !denominator.is_finite() || !numerator.is_finite() {
        debug!(numerator, denominator, "degenerate skill score denominator");
        FloatValue::nan()
    } else {
        numerator / denominator
    }
}

impl ContingencyTable {
    /// Compute the skill scores for this table.
    pub fn skill_scores(&self) -> SkillScores {
        let n = self.size();
        let total = self.total();

        let diagonal: FloatValue = (0..n).map(|i| self.count(i, i)).sum();
        let proportion_correct = ratio(diagonal, total);

        // Marginal probabilities of each category in the two fields
        let p_model: Vec<FloatValue> = (0..n).map(|i| self.row_sum(i) / total).collect();
        let p_obs: Vec<FloatValue> = (0..n).map(|i| self.col_sum(i) / total).collect();

        // Proportion correct for the random reference forecast
        let expected: FloatValue = p_model.iter().zip(&p_obs).map(|(m, o)| m * o).sum();

        // Proportion correct for a perfect forecast is 1
        let heidke = ratio(proportion_correct - expected, 1.0 - expected);

        let unbiased_random: FloatValue = p_obs.iter().map(|p| p * p).sum();
        let peirce = ratio(proportion_correct - expected, 1.0 - unbiased_random);

        let gerrity = match self {
            ContingencyTable::ThreeByThree { .. } => Some(self.gerrity_score(&p_obs)),
            ContingencyTable::TwoByTwo { .. } => None,
        };

        SkillScores {
            proportion_correct,
            heidke,
            peirce,
            gerrity,
        }
    }

    /// Gerrity skill score for the three-category table.
    ///
    /// The weight matrix is built from the cumulative observed marginals via
    /// the Gerrity (1992) closed form; the off-corner weights come out to -1
    /// after the global 0.5 factor.
    fn gerrity_score(&self, p_obs: &[FloatValue]) -> FloatValue {
        let total = self.total();
        let p_o1 = p_obs[0];
        let p_o12 = p_obs[0] + p_obs[1];

        let d_1 = (1.0 - p_o1) / p_o1;
        let d_2 = (1.0 - p_o12) / p_o12;

        if total == 0.0 || !d_1.is_finite() || !d_2.is_finite() || d_1 == 0.0 || d_2 == 0.0 {
            debug!(p_o1, p_o12, "degenerate observed marginals for Gerrity score");
            return FloatValue::nan();
        }

        let weights = [
            [0.5 * (d_1 + d_2), 0.5 * (d_2 - 1.0), -1.0],
            [
                0.5 * (d_2 - 1.0),
                0.5 * (1.0 / d_1 + d_2),
                0.5 * (1.0 / d_1 - 1.0),
            ],
            [
                -1.0,
                0.5 * (1.0 / d_1 - 1.0),
                0.5 * (1.0 / d_1 + 1.0 / d_2),
            ],
        ];

        let mut score = 0.0;
        for row in 0..3 {
            for col in 0..3 {
                score += self.count(row, col) * weights[row][col];
            }
        }
        score / total
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::Category;
    use is_close::is_close;

    fn two_by_two(counts: [[FloatValue; 2]; 2]) -> ContingencyTable {
        ContingencyTable::TwoByTwo {
            categories: [Category::Limited, Category::Microbial],
            counts,
        }
    }

    #[test]
    fn perfect_diagonal_scores_one() {
        let table = two_by_two([[10.0, 0.0], [0.0, 5.0]]);
        let scores = table.skill_scores();

        assert!(is_close!(scores.proportion_correct, 1.0));
        assert!(is_close!(scores.heidke, 1.0));
        assert!(is_close!(scores.peirce, 1.0));
        assert!(scores.gerrity.is_none());
    }

    #[test]
    fn independent_fields_score_zero_heidke() {
        // Table proportional to the outer product of its marginals:
        // p_model = [0.5, 0.5], p_obs = [0.6, 0.4]
        let table = two_by_two([[30.0, 20.0], [30.0, 20.0]]);
        let scores = table.skill_scores();

        assert!(is_close!(scores.proportion_correct, 0.5));
        assert!(is_close!(scores.heidke, 0.0, abs_tol = 1e-12));
        assert!(is_close!(scores.peirce, 0.0, abs_tol = 1e-12));
    }

    #[test]
    fn concrete_two_by_two_scenario() {
        let table = two_by_two([[10.0, 2.0], [3.0, 15.0]]);
        let scores = table.skill_scores();

        // total = 30, diagonal = 25
        assert!(is_close!(scores.proportion_correct, 25.0 / 30.0));
        // expected = (12*13 + 18*17) / 900 = 462/900
        // heidke = (750/900 - 462/900) / (438/900) = 288/438
        assert!(is_close!(scores.heidke, 288.0 / 438.0));
        // unbiased = (13^2 + 17^2) / 900 = 458/900
        // peirce = (288/900) / (442/900) = 288/442
        assert!(is_close!(scores.peirce, 288.0 / 442.0));
    }

    #[test]
    fn degenerate_marginals_yield_nan() {
        // Only one category ever occurs: expected-by-chance is 1 and both
        // skill denominators vanish
        let table = two_by_two([[5.0, 0.0], [0.0, 0.0]]);
        let scores = table.skill_scores();

        assert!(is_close!(scores.proportion_correct, 1.0));
        assert!(scores.heidke.is_nan());
        assert!(scores.peirce.is_nan());
    }

    #[test]
    fn empty_table_yields_nan_everywhere() {
        let table = two_by_two([[0.0, 0.0], [0.0, 0.0]]);
        let scores = table.skill_scores();

        assert!(scores.proportion_correct.is_nan());
        assert!(scores.heidke.is_nan());
        assert!(scores.peirce.is_nan());
    }

    #[test]
    fn perfect_three_by_three_gerrity_is_one() {
        let table = ContingencyTable::ThreeByThree {
            counts: [[10.0, 0.0, 0.0], [0.0, 10.0, 0.0], [0.0, 0.0, 10.0]],
        };
        let scores = table.skill_scores();

        // Equal marginals: d_1 = 2, d_2 = 0.5; weights on the diagonal are
        // [1.25, 0.5, 1.25] and every cell mass sits on the diagonal
        assert!(is_close!(scores.proportion_correct, 1.0));
        assert!(is_close!(scores.heidke, 1.0));
        assert!(is_close!(scores.gerrity.unwrap(), 1.0));
    }

    #[test]
    fn gerrity_penalises_distant_misses_more() {
        let near_miss = ContingencyTable::ThreeByThree {
            counts: [[8.0, 2.0, 0.0], [2.0, 8.0, 2.0], [0.0, 2.0, 8.0]],
        };
        let far_miss = ContingencyTable::ThreeByThree {
            counts: [[8.0, 0.0, 2.0], [2.0, 8.0, 2.0], [2.0, 0.0, 8.0]],
        };

        let near = near_miss.skill_scores().gerrity.unwrap();
        let far = far_miss.skill_scores().gerrity.unwrap();
        assert!(near > far);
    }

    #[test]
    fn gerrity_with_absent_observed_category_is_nan() {
        // Observed category 1 never occurs: d_1 is infinite
        let table = ContingencyTable::ThreeByThree {
            counts: [[0.0, 5.0, 0.0], [0.0, 10.0, 0.0], [0.0, 0.0, 10.0]],
        };
        let scores = table.skill_scores();
        assert!(scores.gerrity.unwrap().is_nan());
    }

    #[test]
    fn two_by_two_has_no_gerrity() {
        let table = two_by_two([[1.0, 2.0], [3.0, 4.0]]);
        assert!(table.skill_scores().gerrity.is_none());
    }
}
