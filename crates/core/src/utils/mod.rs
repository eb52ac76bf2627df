pub mod input;
pub mod time_utils;

pub use input::{parse_amount, parse_date, require_field};
pub use time_utils::{Clock, FixedClock, ReportPeriod, SystemClock};
