use chrono::{Datelike, Local, NaiveDate, NaiveDateTime};

use crate::constants::MONTH_NAME_FORMAT;

/// Source of the server wall-clock.
///
/// Every "current month" decision goes through this trait so services can be
/// exercised against a fixed date.
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;

    fn today(&self) -> NaiveDate {
        self.now().date()
    }
}

/// Local time of the host running the server.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock frozen at a given instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl FixedClock {
    pub fn on(date: NaiveDate) -> Self {
        FixedClock(date.and_hms_opt(12, 0, 0).unwrap_or_default())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

/// A calendar month of a given year, as seen by the server clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportPeriod {
    pub year: i32,
    pub month: u32,
}

impl ReportPeriod {
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn current(clock: &dyn Clock) -> Self {
        Self::containing(clock.today())
    }

    /// English month name used as the budget key, e.g. "October".
    pub fn month_name(&self) -> String {
        self.first_day().format(MONTH_NAME_FORMAT).to_string()
    }

    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or_default()
    }

    /// First day of the following month (exclusive upper bound).
    pub fn next_first_day(&self) -> NaiveDate {
        let (year, month) = if self.month == 12 {
            (self.year + 1, 1)
        } else {
            (self.year, self.month + 1)
        };
        NaiveDate::from_ymd_opt(year, month, 1).unwrap_or_default()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

/// Formats an instant for display on the report page.
pub fn format_timestamp(instant: NaiveDateTime) -> String {
    instant.format("%Y-%m-%d %H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_month_name_is_english_full_name() {
        assert_eq!(ReportPeriod::containing(date(2026, 10, 19)).month_name(), "October");
        assert_eq!(ReportPeriod::containing(date(2026, 1, 31)).month_name(), "January");
    }

    #[test]
    fn test_period_bounds_roll_over_year() {
        let period = ReportPeriod::containing(date(2025, 12, 5));
        assert_eq!(period.first_day(), date(2025, 12, 1));
        assert_eq!(period.next_first_day(), date(2026, 1, 1));
    }

    #[test]
    fn test_contains_checks_month_and_year() {
        let period = ReportPeriod::containing(date(2026, 10, 19));
        assert!(period.contains(date(2026, 10, 1)));
        assert!(period.contains(date(2026, 10, 31)));
        assert!(!period.contains(date(2025, 10, 19)));
        assert!(!period.contains(date(2026, 11, 1)));
    }

    #[test]
    fn test_fixed_clock_reports_its_date() {
        let clock = FixedClock::on(date(2026, 3, 14));
        assert_eq!(clock.today(), date(2026, 3, 14));
        assert_eq!(ReportPeriod::current(&clock).month, 3);
    }
}
