//! Lenient coercion for fields that arrive from tabular uploads.
//!
//! Spreadsheet exports deliver numeric columns inconsistently: JSON numbers,
//! numeric strings, or placeholder text such as "N/A". Coercion returns
//! `None` for values that refuse the target type so the caller can skip the
//! row; a `null` (missing cell) falls back to the caller's default.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde_json::Value;

pub(crate) fn numeric_or(value: &Value, default: f64) -> Option<f64> {
    match value {
        Value::Null => Some(default),
        Value::Number(number) => number.as_f64(),
        Value::String(raw) => f64::from_str(raw.trim()).ok(),
        _ => None,
    }
}

pub(crate) fn money_or(value: &Value, default: Decimal) -> Option<Decimal> {
    match value {
        Value::Null => Some(default),
        Value::Number(number) => Decimal::from_str(&number.to_string()).ok(),
        Value::String(raw) => Decimal::from_str(raw.trim()).ok(),
        _ => None,
    }
}

pub(crate) fn text_upper_or(value: &Value, default: &str) -> Option<String> {
    match value {
        Value::Null => Some(default.to_uppercase()),
        Value::String(raw) => Some(raw.trim().to_uppercase()),
        _ => None,
    }
}
