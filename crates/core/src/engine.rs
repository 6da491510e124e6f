//! Single-call spec match and pricing.

use rust_decimal::Decimal;

use crate::domain::bid::{BidLineResult, BidRequest, BidSummary, MatchResult};
use crate::domain::product::CatalogEntry;
use crate::domain::requirement::RequirementSpec;
use crate::domain::test_cost::{TestCostEntry, TestCostTable};
use crate::errors::EvaluationError;
use crate::matcher::{MatchWeights, SpecMatcher};
use crate::pricing;

/// Matches one requirement against a catalog and prices the winning product.
///
/// Pure and deterministic: identical inputs give identical results, nothing
/// is mutated, and concurrent callers need no coordination.
#[derive(Clone, Debug, Default)]
pub struct SpecMatchPricer {
    matcher: SpecMatcher,
}

impl SpecMatchPricer {
    pub fn new() -> Self {
        Self { matcher: SpecMatcher::new() }
    }

    pub fn with_weights(weights: MatchWeights) -> Self {
        Self { matcher: SpecMatcher::with_weights(weights) }
    }

    pub fn evaluate(
        &self,
        requirement: &RequirementSpec,
        catalog: &[CatalogEntry],
        test_costs: &TestCostTable,
        required_tests: &[String],
    ) -> Result<MatchResult, EvaluationError> {
        if catalog.is_empty() {
            return Err(EvaluationError::EmptyCatalog);
        }

        let (winner, score) = self
            .matcher
            .best_match(catalog, requirement)
            .ok_or(EvaluationError::NoViableProduct)?;

        let material_cost = pricing::material_cost(&winner, requirement.quantity);
        let total_test_cost = pricing::total_test_cost(test_costs, required_tests);
        let final_price = pricing::final_price(material_cost, total_test_cost);

        Ok(MatchResult {
            best_sku: winner.sku,
            match_percentage: round2(score),
            material_cost,
            total_test_cost,
            final_price,
        })
    }

    /// The upload boundary: four serialized JSON documents in, one result
    /// out. A document that fails to deserialize aborts the evaluation with
    /// `InvalidInput` naming the offending argument.
    pub fn evaluate_json(
        &self,
        requirement_json: &str,
        catalog_json: &str,
        test_costs_json: &str,
        required_tests_json: &str,
    ) -> Result<MatchResult, EvaluationError> {
        let requirement = parse_requirement(requirement_json)?;
        let catalog = parse_catalog(catalog_json)?;
        let test_costs = parse_test_costs(test_costs_json)?;
        let required_tests = parse_required_tests(required_tests_json)?;

        self.evaluate(&requirement, &catalog, &test_costs, &required_tests)
    }

    /// Price every line of a multi-material bid against the same catalog and
    /// test-cost table, then combine into one bid total. Fails on the first
    /// line that cannot be priced, naming that line.
    pub fn evaluate_bid(
        &self,
        request: &BidRequest,
        catalog: &[CatalogEntry],
        test_costs: &TestCostTable,
    ) -> Result<BidSummary, EvaluationError> {
        if request.lines.is_empty() {
            return Err(EvaluationError::invalid_input(
                "bid_request",
                "bid request has no lines",
            ));
        }

        let mut lines = Vec::with_capacity(request.lines.len());
        let mut total = Decimal::ZERO;

        for line in &request.lines {
            let result = self
                .evaluate(&line.requirement, catalog, test_costs, &line.required_tests)
                .map_err(|error| EvaluationError::for_line(line.label.clone(), error))?;

            total += result.final_price;
            lines.push(BidLineResult { label: line.label.clone(), result });
        }

        Ok(BidSummary { lines, total_bid_price: total.round_dp(2) })
    }
}

pub fn parse_requirement(json: &str) -> Result<RequirementSpec, EvaluationError> {
    serde_json::from_str(json)
        .map_err(|error| EvaluationError::invalid_input("requirement", error))
}

pub fn parse_catalog(json: &str) -> Result<Vec<CatalogEntry>, EvaluationError> {
    serde_json::from_str(json).map_err(|error| EvaluationError::invalid_input("catalog", error))
}

pub fn parse_test_costs(json: &str) -> Result<TestCostTable, EvaluationError> {
    let entries: Vec<TestCostEntry> = serde_json::from_str(json)
        .map_err(|error| EvaluationError::invalid_input("test_costs", error))?;
    Ok(TestCostTable::new(entries))
}

pub fn parse_required_tests(json: &str) -> Result<Vec<String>, EvaluationError> {
    serde_json::from_str(json)
        .map_err(|error| EvaluationError::invalid_input("required_tests", error))
}

pub fn parse_bid_request(json: &str) -> Result<BidRequest, EvaluationError> {
    serde_json::from_str(json)
        .map_err(|error| EvaluationError::invalid_input("bid_request", error))
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
