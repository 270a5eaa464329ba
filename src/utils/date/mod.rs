// Date utility functions
// Plain chrono arithmetic, independent of the locale-aware generator

use chrono::{Datelike, Local, NaiveDate};

/// The current year in the host's local calendar
pub fn current_year() -> i32 {
    Local::now().year()
}

/// Number of days in a given month (1-12), or `None` if the date is out of range
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    u32::try_from(next.signed_duration_since(first).num_days()).ok()
}

/// Number of days in a year, or `None` if the year is out of range
pub fn days_in_year(year: i32) -> Option<u32> {
    (1..=12).map(|month| days_in_month(year, month)).sum()
}
