pub mod bid;
pub mod product;
pub mod requirement;
pub mod test_cost;
