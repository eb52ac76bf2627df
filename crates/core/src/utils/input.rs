//! Parse-and-validate helpers applied to raw form text at the service boundary.

use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::constants::{ISO_DATE_FORMAT, MAX_AMOUNT_SCALE, MAX_AMOUNT_UNITS};
use crate::errors::{Result, ValidationError};

/// Returns the trimmed value, or `MissingField` when it is blank.
pub fn require_field<'a>(name: &str, value: &'a str) -> Result<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::MissingField(name.to_string()).into());
    }
    Ok(trimmed)
}

/// Parses a money amount. Rejects blanks, non-numeric text, negatives,
/// more than two decimal places and anything above [`MAX_AMOUNT_UNITS`].
pub fn parse_amount(raw: &str) -> Result<Decimal> {
    let text = require_field("amount", raw)?;
    let amount = Decimal::from_str(text)
        .map_err(|_| {
            ValidationError::InvalidInput(format!("'{}' is not a valid amount", text))
        })?
        .normalize();
    if amount < Decimal::ZERO {
        return Err(ValidationError::InvalidInput("Amount cannot be negative".to_string()).into());
    }
    if amount.scale() > MAX_AMOUNT_SCALE {
        return Err(ValidationError::InvalidInput(format!(
            "Amount can have at most {} decimal places",
            MAX_AMOUNT_SCALE
        ))
        .into());
    }
    if amount > Decimal::new(MAX_AMOUNT_UNITS, 0) {
        return Err(ValidationError::InvalidInput(format!(
            "Amount cannot exceed {}",
            MAX_AMOUNT_UNITS
        ))
        .into());
    }
    Ok(amount)
}

/// Parses a calendar date in `YYYY-MM-DD` form.
pub fn parse_date(raw: &str) -> Result<NaiveDate> {
    let text = require_field("date", raw)?;
    NaiveDate::parse_from_str(text, ISO_DATE_FORMAT).map_err(|_| {
        ValidationError::InvalidInput(format!("'{}' is not a valid date (YYYY-MM-DD)", text))
            .into()
    })
}
