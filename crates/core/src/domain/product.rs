use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::coerce;

/// Stock keeping unit identifier, unique within one uploaded catalog.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SkuId(pub String);

impl fmt::Display for SkuId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One catalog row as it arrives from a tabular upload.
///
/// Numeric columns stay loosely typed on purpose: spreadsheet exports
/// routinely deliver numbers as strings, and placeholder text such as "N/A"
/// must skip the single row rather than reject the whole catalog. The field
/// aliases accept the column headers used by the upstream catalog sheets.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    #[serde(alias = "SKU_ID")]
    pub sku_id: String,
    #[serde(default, alias = "Voltage_Rating")]
    pub voltage_rating: Value,
    #[serde(default, alias = "Insulation_Type")]
    pub insulation_type: Value,
    #[serde(default, alias = "Length_M")]
    pub length: Value,
    #[serde(default, alias = "Unit_Cost")]
    pub unit_cost: Value,
}

/// A catalog entry whose fields all coerced cleanly. Only candidates are
/// eligible for scoring; entries that refuse coercion never win.
#[derive(Clone, Debug, PartialEq)]
pub struct CandidateProduct {
    pub sku: SkuId,
    pub voltage_rating: f64,
    pub insulation_type: String,
    pub length: f64,
    pub unit_cost: Decimal,
}

impl CandidateProduct {
    /// Coerce a raw entry into a scorable candidate. Missing cells fall back
    /// to zero (or empty text); any cell that refuses coercion drops the
    /// whole entry.
    pub fn from_entry(entry: &CatalogEntry) -> Option<Self> {
        let voltage_rating = coerce::numeric_or(&entry.voltage_rating, 0.0)?;
        let insulation_type = coerce::text_upper_or(&entry.insulation_type, "")?;
        let length = coerce::numeric_or(&entry.length, 0.0)?;
        let unit_cost = coerce::money_or(&entry.unit_cost, Decimal::ZERO)?;

        Some(Self {
            sku: SkuId(entry.sku_id.clone()),
            voltage_rating,
            insulation_type,
            length,
            unit_cost,
        })
    }
}
