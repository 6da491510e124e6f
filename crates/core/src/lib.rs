mod coerce;

pub mod config;
pub mod domain;
pub mod engine;
pub mod errors;
pub mod matcher;
pub mod pricing;

pub use domain::bid::{BidLine, BidLineResult, BidRequest, BidSummary, MatchResult};
pub use domain::product::{CandidateProduct, CatalogEntry, SkuId};
pub use domain::requirement::RequirementSpec;
pub use domain::test_cost::{TestCostEntry, TestCostTable};
pub use engine::SpecMatchPricer;
pub use errors::{EvaluationError, InterfaceError};
pub use matcher::{MatchWeights, SpecMatcher};
