//! Helpers for columns stored as text.
//!
//! Amounts are kept as decimal strings so no precision is lost in SQLite.

use log::warn;
use rust_decimal::Decimal;
use std::str::FromStr;

pub fn decimal_to_text(value: Decimal) -> String {
    value.normalize().to_string()
}

/// Parses a stored amount. A corrupt value reads as zero and is logged.
pub fn text_to_decimal(value: &str) -> Decimal {
    Decimal::from_str(value).unwrap_or_else(|e| {
        warn!("Invalid decimal '{}' in database: {}", value, e);
        Decimal::ZERO
    })
}

pub fn optional_text_to_decimal(value: Option<&str>) -> Option<Decimal> {
    value.map(text_to_decimal)
}
