//! Parsing of human-entered subscription fields.
//!
//! Front-ends read raw text for each field and hand it here. Nothing is
//! added to a ledger until every field has parsed.

use crate::error::InputError;
use crate::types::Subscription;
use chrono::NaiveDate;

/// Expected date format for entered dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a monthly cost such as `9.99`.
///
/// Rejects non-numeric, non-finite and negative values.
pub fn parse_cost(input: &str) -> Result<f64, InputError> {
    let trimmed = input.trim();
    let cost: f64 = trimmed
        .parse()
        .map_err(|_| InputError::InvalidCost(trimmed.to_string()))?;

    if !cost.is_finite() || cost < 0.0 {
        return Err(InputError::InvalidCost(trimmed.to_string()));
    }
    Ok(cost)
}

/// Parse a `YYYY-MM-DD` date.
pub fn parse_date(input: &str) -> Result<NaiveDate, InputError> {
    let trimmed = input.trim();
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
        .map_err(|_| InputError::InvalidDate(trimmed.to_string()))
}

/// Build a subscription from three raw fields.
pub fn parse_subscription(
    name: &str,
    cost: &str,
    renewal_date: &str,
) -> Result<Subscription, InputError> {
    let cost = parse_cost(cost)?;
    let renewal_date = parse_date(renewal_date)?;
    Ok(Subscription::new(name.trim(), cost, renewal_date))
}
