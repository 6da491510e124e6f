//! Material and test pricing for a selected catalog product.

use rust_decimal::Decimal;

use crate::domain::product::CandidateProduct;
use crate::domain::test_cost::TestCostTable;

/// Unit cost times required quantity, rounded to cents.
pub fn material_cost(product: &CandidateProduct, quantity: u32) -> Decimal {
    (product.unit_cost * Decimal::from(quantity)).round_dp(2)
}

/// Sum of base costs for every required test. Unknown test names and
/// uncoercible cost cells contribute nothing.
pub fn total_test_cost(table: &TestCostTable, required_tests: &[String]) -> Decimal {
    required_tests.iter().map(|name| table.cost_of(name)).sum()
}

/// Material plus testing, rounded to cents. Only the final figure is
/// rounded here; the inputs carry their own scale.
pub fn final_price(material_cost: Decimal, total_test_cost: Decimal) -> Decimal {
    (material_cost + total_test_cost).round_dp(2)
}
