//! Calendar generation: year -> twelve months of locale-named days.

mod error;
mod generator;
mod narrow;
mod provider;

pub use error::{CalendarError, LookupError};
pub use generator::CalendarGenerator;
pub use narrow::{narrow, narrow_day_labels};
pub use provider::{ChronoLocalCalendar, LocalCalendar};

use crate::models::calendar::Calendar;

/// Generate `year` using the host's local calendar and environment locale
pub fn generate(year: i32) -> Result<Calendar, CalendarError> {
    let provider = ChronoLocalCalendar::from_environment()?;
    CalendarGenerator::new(provider).generate(year)
}
