use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::coerce;

/// One row of the uploaded test-cost table. The cost cell stays loosely
/// typed for the same reason catalog cells do.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TestCostEntry {
    #[serde(alias = "Test_Name")]
    pub test_name: String,
    #[serde(default, alias = "Base_Cost")]
    pub base_cost: Value,
}

/// Lookup table over test-cost rows.
///
/// Lookups are exact and case-sensitive; duplicate names resolve to the
/// first row in upload order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TestCostTable {
    entries: Vec<TestCostEntry>,
}

impl TestCostTable {
    pub fn new(entries: Vec<TestCostEntry>) -> Self {
        Self { entries }
    }

    pub fn find(&self, test_name: &str) -> Option<&TestCostEntry> {
        self.entries.iter().find(|entry| entry.test_name == test_name)
    }

    /// Cost charged for a named test. Unknown names and rows whose cost
    /// refuses numeric coercion charge nothing.
    pub fn cost_of(&self, test_name: &str) -> Decimal {
        self.find(test_name)
            .and_then(|entry| coerce::money_or(&entry.base_cost, Decimal::ZERO))
            .unwrap_or(Decimal::ZERO)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
