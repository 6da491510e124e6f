use serde::{Deserialize, Serialize};

/// Buyer-side specification captured from an RFP for one material.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RequirementSpec {
    /// Minimum voltage rating the product must satisfy, in volts.
    pub voltage: f64,
    /// Required insulation family, compared case-insensitively.
    pub insulation: String,
    /// Quantity to purchase, in catalog units.
    pub quantity: u32,
    /// Minimum acceptable product length. Absent means no length constraint,
    /// so any non-negative length satisfies the criterion.
    #[serde(default)]
    pub min_length: f64,
}

impl RequirementSpec {
    pub fn insulation_normalized(&self) -> String {
        self.insulation.trim().to_uppercase()
    }
}
