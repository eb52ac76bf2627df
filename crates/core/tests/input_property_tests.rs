//! Property-based tests for form parsing and report periods.

use budgetbook_core::constants::MAX_AMOUNT_UNITS;
use budgetbook_core::utils::{parse_amount, parse_date, ReportPeriod};
use chrono::{Datelike, Duration, NaiveDate};
use proptest::prelude::*;
use rust_decimal::Decimal;

fn arb_date() -> impl Strategy<Value = NaiveDate> {
    (1970i32..2100, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

proptest! {
    #[test]
    fn prop_non_negative_cents_parse_back_exactly(cents in 0i64..10_000_000_000) {
        let amount = Decimal::new(cents, 2);
        let parsed = parse_amount(&amount.to_string()).unwrap();
        prop_assert_eq!(parsed, amount);
    }

    #[test]
    fn prop_negative_amounts_are_rejected(cents in 1i64..10_000_000_000) {
        let amount = Decimal::new(-cents, 2);
        prop_assert!(parse_amount(&amount.to_string()).is_err());
    }

    #[test]
    fn prop_amounts_above_the_limit_are_rejected(extra_cents in 1i64..10_000_000_000) {
        let amount = Decimal::new(MAX_AMOUNT_UNITS, 0) + Decimal::new(extra_cents, 2);
        prop_assert!(parse_amount(&amount.to_string()).is_err());
    }

    #[test]
    fn prop_iso_dates_parse_to_themselves(date in arb_date()) {
        let text = date.format("%Y-%m-%d").to_string();
        prop_assert_eq!(parse_date(&text).unwrap(), date);
    }

    #[test]
    fn prop_period_bounds_cover_exactly_one_month(date in arb_date()) {
        let period = ReportPeriod::containing(date);
        let first = period.first_day();
        let next = period.next_first_day();

        prop_assert!(period.contains(date));
        prop_assert!(first <= date && date < next);
        prop_assert_eq!(first.day(), 1);
        prop_assert!(period.contains(next - Duration::days(1)));
        prop_assert!(!period.contains(next));
        prop_assert!(!period.contains(first - Duration::days(1)));
    }
}
