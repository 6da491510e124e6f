//! Weighted spec matching over catalog candidates.

use serde::{Deserialize, Serialize};

use crate::domain::product::{CandidateProduct, CatalogEntry};
use crate::domain::requirement::RequirementSpec;

/// Relative importance of each requirement criterion.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchWeights {
    pub voltage: f64,
    pub insulation: f64,
    pub min_length: f64,
}

/// Deployment default: voltage compliance dominates, insulation family next,
/// length last.
pub const DEFAULT_WEIGHTS: MatchWeights =
    MatchWeights { voltage: 0.50, insulation: 0.30, min_length: 0.20 };

impl Default for MatchWeights {
    fn default() -> Self {
        DEFAULT_WEIGHTS
    }
}

impl MatchWeights {
    pub fn total(&self) -> f64 {
        self.voltage + self.insulation + self.min_length
    }

    /// A weight table is usable when every weight is non-negative and the
    /// total is 1.0 within floating-point tolerance.
    pub fn is_normalized(&self) -> bool {
        self.voltage >= 0.0
            && self.insulation >= 0.0
            && self.min_length >= 0.0
            && (self.total() - 1.0).abs() < 1e-9
    }
}

/// Scores candidates against a requirement and tracks the running best.
#[derive(Clone, Debug, Default)]
pub struct SpecMatcher {
    weights: MatchWeights,
}

impl SpecMatcher {
    pub fn new() -> Self {
        Self { weights: MatchWeights::default() }
    }

    pub fn with_weights(weights: MatchWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &MatchWeights {
        &self.weights
    }

    /// Match percentage for a single candidate, 0-100, unrounded.
    pub fn score(&self, candidate: &CandidateProduct, requirement: &RequirementSpec) -> f64 {
        let mut awarded = 0.0;

        if candidate.voltage_rating >= requirement.voltage {
            awarded += self.weights.voltage;
        }
        if candidate.insulation_type == requirement.insulation_normalized() {
            awarded += self.weights.insulation;
        }
        if candidate.length >= requirement.min_length {
            awarded += self.weights.min_length;
        }

        (awarded / self.weights.total()) * 100.0
    }

    /// Walk the catalog in order, skip entries that refuse coercion, and keep
    /// the first candidate with the strictly highest score.
    ///
    /// Ties keep the earlier entry. Callers that care about tie resolution
    /// control it through catalog ordering; the outcome is deterministic for
    /// a given ordering.
    pub fn best_match(
        &self,
        catalog: &[CatalogEntry],
        requirement: &RequirementSpec,
    ) -> Option<(CandidateProduct, f64)> {
        let mut best: Option<(CandidateProduct, f64)> = None;

        for entry in catalog {
            let Some(candidate) = CandidateProduct::from_entry(entry) else {
                continue;
            };

            let score = self.score(&candidate, requirement);
            match &best {
                Some((_, best_score)) if score <= *best_score => {}
                _ => best = Some((candidate, score)),
            }
        }

        best
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{MatchWeights, SpecMatcher, DEFAULT_WEIGHTS};
    use crate::domain::product::CatalogEntry;
    use crate::domain::requirement::RequirementSpec;

    fn requirement() -> RequirementSpec {
        RequirementSpec {
            voltage: 1100.0,
            insulation: "XLPE".to_string(),
            quantity: 5000,
            min_length: 0.0,
        }
    }

    fn catalog(rows: serde_json::Value) -> Vec<CatalogEntry> {
        serde_json::from_value(rows).expect("catalog rows should deserialize")
    }

    #[test]
    fn default_weights_are_normalized() {
        assert!(DEFAULT_WEIGHTS.is_normalized());
        assert!((DEFAULT_WEIGHTS.total() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn denormalized_weights_are_rejected() {
        let skewed = MatchWeights { voltage: 0.9, insulation: 0.3, min_length: 0.2 };
        assert!(!skewed.is_normalized());

        let negative = MatchWeights { voltage: 1.2, insulation: -0.4, min_length: 0.2 };
        assert!(!negative.is_normalized());
    }

    #[test]
    fn full_match_scores_one_hundred() {
        let entries = catalog(json!([{
            "sku_id": "P-1100-XL",
            "voltage_rating": 1100,
            "insulation_type": "XLPE",
            "length": 6000,
            "unit_cost": 15.00
        }]));

        let (winner, score) = SpecMatcher::new()
            .best_match(&entries, &requirement())
            .expect("a valid entry should win");
        assert_eq!(winner.sku.0, "P-1100-XL");
        assert!((score - 100.0).abs() < 1e-9);
    }

    #[test]
    fn partial_match_awards_only_satisfied_weights() {
        let entries = catalog(json!([{
            "sku_id": "P-650-PVC",
            "voltage_rating": 650,
            "insulation_type": "PVC",
            "length": 4000,
            "unit_cost": 8.00
        }]));

        // Only the min_length criterion is satisfied.
        let (_, score) = SpecMatcher::new()
            .best_match(&entries, &requirement())
            .expect("a valid entry should score");
        assert!((score - 20.0).abs() < 1e-6);
    }

    #[test]
    fn tie_break_keeps_the_earlier_entry() {
        let entries = catalog(json!([
            {
                "sku_id": "P-FIRST",
                "voltage_rating": 1100,
                "insulation_type": "XLPE",
                "length": 6000,
                "unit_cost": 15.00
            },
            {
                "sku_id": "P-SECOND",
                "voltage_rating": 1200,
                "insulation_type": "XLPE",
                "length": 7000,
                "unit_cost": 12.00
            }
        ]));

        let (winner, _) = SpecMatcher::new()
            .best_match(&entries, &requirement())
            .expect("tied entries should still produce a winner");
        assert_eq!(winner.sku.0, "P-FIRST");
    }

    #[test]
    fn uncoercible_entries_cannot_win() {
        let entries = catalog(json!([
            {
                "sku_id": "P-DOMINANT",
                "voltage_rating": 9999,
                "insulation_type": "XLPE",
                "length": 9999,
                "unit_cost": "N/A"
            },
            {
                "sku_id": "P-MODEST",
                "voltage_rating": 1100,
                "insulation_type": "PVC",
                "length": 100,
                "unit_cost": 5.00
            }
        ]));

        let (winner, _) = SpecMatcher::new()
            .best_match(&entries, &requirement())
            .expect("the coercible entry should win");
        assert_eq!(winner.sku.0, "P-MODEST");
    }

    #[test]
    fn all_invalid_entries_produce_no_winner() {
        let entries = catalog(json!([{
            "sku_id": "P-BAD",
            "voltage_rating": "unknown",
            "insulation_type": "XLPE",
            "length": 6000,
            "unit_cost": "bad"
        }]));

        assert!(SpecMatcher::new().best_match(&entries, &requirement()).is_none());
    }

    #[test]
    fn custom_weights_change_the_score_granularity() {
        let entries = catalog(json!([{
            "sku_id": "P-1100-PVC",
            "voltage_rating": 1100,
            "insulation_type": "PVC",
            "length": 6000,
            "unit_cost": 10.00
        }]));

        let matcher = SpecMatcher::with_weights(MatchWeights {
            voltage: 0.25,
            insulation: 0.50,
            min_length: 0.25,
        });
        let (_, score) = matcher
            .best_match(&entries, &requirement())
            .expect("a valid entry should score");
        // Voltage and length satisfied, insulation not: 0.50 of the total.
        assert!((score - 50.0).abs() < 1e-6);
    }
}
