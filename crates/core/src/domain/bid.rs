use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::product::SkuId;
use crate::domain::requirement::RequirementSpec;

/// Outcome of matching one requirement against a catalog and pricing the
/// winning product. Built as a fresh value; the catalog input is never
/// mutated.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub best_sku: SkuId,
    /// Weighted share of criteria satisfied, 0-100, rounded to 2 decimals.
    pub match_percentage: f64,
    pub material_cost: Decimal,
    pub total_test_cost: Decimal,
    pub final_price: Decimal,
}

/// One material line of a multi-material bid request.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BidLine {
    pub label: String,
    pub requirement: RequirementSpec,
    #[serde(default)]
    pub required_tests: Vec<String>,
}

/// A complete RFP response request: one or more material lines priced
/// against the same catalog and test-cost table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BidRequest {
    pub lines: Vec<BidLine>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BidLineResult {
    pub label: String,
    #[serde(flatten)]
    pub result: MatchResult,
}

/// Combined bid across all request lines.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BidSummary {
    pub lines: Vec<BidLineResult>,
    pub total_bid_price: Decimal,
}
