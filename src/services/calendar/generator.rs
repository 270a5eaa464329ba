use crate::models::calendar::{Calendar, Day, DayName, Month};

use super::error::CalendarError;
use super::provider::LocalCalendar;

const MONTHS_PER_YEAR: u32 = 12;

/// Upper bound on days in any month; a cursor that stays in one month longer
/// than this is not rolling over.
const MAX_DAYS_PER_MONTH: usize = 31;

/// Builds a [`Calendar`] for a year by walking a day cursor through the
/// provider's local calendar.
pub struct CalendarGenerator<P> {
    provider: P,
}

impl<P: LocalCalendar> CalendarGenerator<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Generate every day of `year`, grouped into its twelve months.
    ///
    /// Month lengths are never computed: each month ends when advancing the
    /// cursor by one day rolls it into the next month index.
    ///
    /// # Examples
    /// ```
    /// use year_planner::services::calendar::{CalendarGenerator, ChronoLocalCalendar};
    ///
    /// let generator = CalendarGenerator::new(ChronoLocalCalendar::default());
    /// let calendar = generator.generate(2024).unwrap();
    /// assert_eq!(calendar.months[1].days.len(), 29);
    /// ```
    pub fn generate(&self, year: i32) -> Result<Calendar, CalendarError> {
        let provider = &self.provider;
        let mut cursor = provider.first_moment_of_year(year)?;

        let first_index = provider.month_index(&cursor);
        if first_index != 0 {
            return Err(CalendarError::Configuration(format!(
                "First moment of {year} falls in month index {first_index} instead of January"
            )));
        }

        let mut months = Vec::with_capacity(MONTHS_PER_YEAR as usize);

        for index in 0..MONTHS_PER_YEAR {
            let name = provider.month_name(&cursor);
            let mut days = Vec::with_capacity(MAX_DAYS_PER_MONTH);

            let is_last_month = index == MONTHS_PER_YEAR - 1;

            while provider.month_index(&cursor) == index {
                if days.len() == MAX_DAYS_PER_MONTH {
                    return Err(CalendarError::Configuration(format!(
                        "Month index {index} of {year} did not roll over after {MAX_DAYS_PER_MONTH} days"
                    )));
                }

                days.push(Day {
                    name: DayName {
                        short: provider.weekday_short_name(&cursor),
                        long: provider.weekday_long_name(&cursor),
                    },
                    date: provider.day_of_month(&cursor),
                });
                cursor = match provider.advance_by_one_day(&cursor) {
                    Ok(next) => next,
                    // The last day of the provider's range still belongs to this year
                    Err(CalendarError::UnsupportedYear(_)) if is_last_month => break,
                    Err(e) => return Err(e),
                };
            }

            if days.is_empty() {
                return Err(CalendarError::Configuration(format!(
                    "Month index {index} of {year} has no days"
                )));
            }

            log::trace!("{} {}: {} days", name, year, days.len());
            months.push(Month { name, days });
        }

        let calendar = Calendar { year, months };
        log::debug!(
            "Generated calendar for {} with {} days",
            year,
            calendar.total_days()
        );
        Ok(calendar)
    }
}
