//! Conversions for values SQLite stores as TEXT.

use std::str::FromStr;

use budgetbook_core::constants::ISO_DATE_FORMAT;
use chrono::NaiveDate;
use log::error;
use rust_decimal::Decimal;

/// Parses a stored decimal. Corrupt values are logged and read as zero.
pub(crate) fn decimal_from_text(value: &str, field_name: &str) -> Decimal {
    Decimal::from_str(value).unwrap_or_else(|e| {
        error!("Failed to parse stored {} '{}': {}", field_name, value, e);
        Decimal::ZERO
    })
}

/// Parses a stored ISO date. Corrupt values are logged and read as the default date.
pub(crate) fn date_from_text(value: &str, field_name: &str) -> NaiveDate {
    NaiveDate::parse_from_str(value, ISO_DATE_FORMAT).unwrap_or_else(|e| {
        error!("Failed to parse stored {} '{}': {}", field_name, value, e);
        NaiveDate::default()
    })
}

pub(crate) fn date_to_text(date: NaiveDate) -> String {
    date.format(ISO_DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decimal_from_text_keeps_scale() {
        assert_eq!(decimal_from_text("49.99", "amount").to_string(), "49.99");
    }

    #[test]
    fn test_corrupt_decimal_reads_as_zero() {
        assert_eq!(decimal_from_text("abc", "amount"), Decimal::ZERO);
    }

    #[test]
    fn test_dates_round_trip_through_iso_text() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 3).unwrap();
        assert_eq!(date_to_text(date), "2026-10-03");
        assert_eq!(date_from_text("2026-10-03", "date"), date);
    }
}
