use chrono::{DateTime, Datelike, Local, Locale, NaiveDate, TimeZone};
use std::env;

use super::error::CalendarError;

/// Environment variables consulted for the host locale, highest priority first
const LOCALE_ENV_VARS: [&str; 3] = ["LC_ALL", "LC_TIME", "LANG"];

/// Local hour at which the generation cursor sits on every day
const CURSOR_HOUR: u32 = 12;

/// Consecutive days a timezone may drop from its calendar before the
/// local calendar is considered broken
const MAX_SKIPPED_DAYS: u32 = 7;

/// Date arithmetic and naming facility the calendar generator is written against.
///
/// Implementations decide what a "date" is; the generator only moves a cursor
/// forward one day at a time and reads its month, day and names.
#[cfg_attr(test, mockall::automock(type Date = chrono::NaiveDate;))]
pub trait LocalCalendar {
    type Date;

    /// The first moment of `year`, which must fall in month index 0
    fn first_moment_of_year(&self, year: i32) -> Result<Self::Date, CalendarError>;

    /// The same moment one calendar day later
    fn advance_by_one_day(&self, date: &Self::Date) -> Result<Self::Date, CalendarError>;

    /// Zero-based month index, 0 = January
    fn month_index(&self, date: &Self::Date) -> u32;

    /// 1-based day of month
    fn day_of_month(&self, date: &Self::Date) -> u32;

    fn month_name(&self, date: &Self::Date) -> String;

    fn weekday_short_name(&self, date: &Self::Date) -> String;

    fn weekday_long_name(&self, date: &Self::Date) -> String;
}

/// Host local calendar backed by chrono's `Local` timezone and locale tables.
///
/// The cursor is kept at local noon so that DST transitions, which happen
/// around midnight in most zones, can never move it onto a neighbouring day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChronoLocalCalendar {
    locale: Locale,
}

impl ChronoLocalCalendar {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    /// Build a calendar from a locale name such as `en_US`, `de_DE.UTF-8`,
    /// `en-GB` or `POSIX`.
    ///
    /// # Examples
    /// ```
    /// use year_planner::services::calendar::ChronoLocalCalendar;
    ///
    /// assert!(ChronoLocalCalendar::from_locale_name("en_US.UTF-8").is_ok());
    /// assert!(ChronoLocalCalendar::from_locale_name("xx_YY").is_err());
    /// ```
    pub fn from_locale_name(name: &str) -> Result<Self, CalendarError> {
        parse_locale(name).map(Self::new)
    }

    /// Build a calendar for the locale named by `LC_ALL`, `LC_TIME` or `LANG`.
    ///
    /// Falls back to the POSIX locale (English names) when none are set.
    pub fn from_environment() -> Result<Self, CalendarError> {
        let values: Vec<Option<String>> = LOCALE_ENV_VARS
            .iter()
            .map(|var| env::var(var).ok())
            .collect();

        match resolve_locale_name(&values) {
            Some(name) => {
                log::debug!("Using locale {:?} from environment", name);
                Self::from_locale_name(&name)
            }
            None => {
                log::debug!("No locale set in environment, using POSIX");
                Ok(Self::new(Locale::POSIX))
            }
        }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// The cursor moment on `date`, or on the first following day the local
    /// timezone actually has. Days removed by a zone change (Samoa dropped
    /// 2011-12-30) are skipped, just as the host calendar skips them.
    fn at_cursor_hour(&self, date: NaiveDate) -> Result<DateTime<Local>, CalendarError> {
        let mut day = date;
        for _ in 0..=MAX_SKIPPED_DAYS {
            let naive = day.and_hms_opt(CURSOR_HOUR, 0, 0).ok_or_else(|| {
                CalendarError::Configuration(format!("Invalid time of day on {day}"))
            })?;

            if let Some(moment) = Local.from_local_datetime(&naive).earliest() {
                return Ok(moment);
            }

            log::debug!("Local timezone has no {naive}, skipping {day}");
            day = day
                .succ_opt()
                .ok_or(CalendarError::UnsupportedYear(day.year()))?;
        }

        Err(CalendarError::Configuration(format!(
            "Local timezone has no days between {date} and {day}"
        )))
    }
}

impl Default for ChronoLocalCalendar {
    fn default() -> Self {
        Self::new(Locale::POSIX)
    }
}

impl LocalCalendar for ChronoLocalCalendar {
    type Date = DateTime<Local>;

    fn first_moment_of_year(&self, year: i32) -> Result<Self::Date, CalendarError> {
        let new_year =
            NaiveDate::from_ymd_opt(year, 1, 1).ok_or(CalendarError::UnsupportedYear(year))?;
        self.at_cursor_hour(new_year)
    }

    fn advance_by_one_day(&self, date: &Self::Date) -> Result<Self::Date, CalendarError> {
        let next = date
            .date_naive()
            .succ_opt()
            .ok_or(CalendarError::UnsupportedYear(date.year()))?;
        self.at_cursor_hour(next)
    }

    fn month_index(&self, date: &Self::Date) -> u32 {
        date.month0()
    }

    fn day_of_month(&self, date: &Self::Date) -> u32 {
        date.day()
    }

    fn month_name(&self, date: &Self::Date) -> String {
        date.format_localized("%B", self.locale).to_string()
    }

    fn weekday_short_name(&self, date: &Self::Date) -> String {
        date.format_localized("%a", self.locale).to_string()
    }

    fn weekday_long_name(&self, date: &Self::Date) -> String {
        date.format_localized("%A", self.locale).to_string()
    }
}

/// Pick the first usable locale name out of the `LC_ALL`, `LC_TIME`, `LANG`
/// values. Empty values are skipped; `C` and `POSIX` resolve to `None`.
pub(crate) fn resolve_locale_name(values: &[Option<String>]) -> Option<String> {
    let value = values
        .iter()
        .flatten()
        .map(|v| v.trim())
        .find(|v| !v.is_empty())?;

    let name = normalize_locale_name(value);
    match name.as_str() {
        "C" | "POSIX" => None,
        _ => Some(name),
    }
}

/// Strip encoding and modifier suffixes and convert BCP 47 dashes:
/// `de_DE.UTF-8@euro` -> `de_DE`, `en-GB` -> `en_GB`
fn normalize_locale_name(name: &str) -> String {
    let base = name.split(['.', '@']).next().unwrap_or(name);
    base.trim().replace('-', "_")
}

fn parse_locale(name: &str) -> Result<Locale, CalendarError> {
    let normalized = normalize_locale_name(name);
    if normalized == "C" {
        return Ok(Locale::POSIX);
    }

    Locale::try_from(normalized.as_str())
        .map_err(|_| CalendarError::Configuration(format!("Unknown locale {name:?}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn some(values: &[&str]) -> Vec<Option<String>> {
        values
            .iter()
            .map(|v| (!v.is_empty()).then(|| v.to_string()))
            .collect()
    }

    #[test]
    fn test_normalize_strips_encoding_and_modifier() {
        assert_eq!(normalize_locale_name("de_DE.UTF-8@euro"), "de_DE");
        assert_eq!(normalize_locale_name("fr_FR@euro"), "fr_FR");
        assert_eq!(normalize_locale_name("en-GB"), "en_GB");
        assert_eq!(normalize_locale_name("POSIX"), "POSIX");
    }

    #[test]
    fn test_resolve_prefers_first_non_empty() {
        assert_eq!(
            resolve_locale_name(&some(&["", "de_DE.UTF-8", "en_US.UTF-8"])),
            Some("de_DE".to_string())
        );
        assert_eq!(
            resolve_locale_name(&some(&["fr_FR", "de_DE", "en_US"])),
            Some("fr_FR".to_string())
        );
    }

    #[test]
    fn test_resolve_c_and_unset_mean_posix() {
        assert_eq!(resolve_locale_name(&some(&["", "", "C.UTF-8"])), None);
        assert_eq!(resolve_locale_name(&some(&["POSIX", "", ""])), None);
        assert_eq!(resolve_locale_name(&[None, None, None]), None);
    }

    #[test]
    fn test_parse_locale_names() {
        assert_eq!(parse_locale("POSIX").unwrap(), Locale::POSIX);
        assert_eq!(parse_locale("C").unwrap(), Locale::POSIX);
        assert_eq!(parse_locale("en_US.UTF-8").unwrap(), Locale::en_US);
        assert_eq!(parse_locale("de-DE").unwrap(), Locale::de_DE);
        assert!(matches!(
            parse_locale("klingon"),
            Err(CalendarError::Configuration(_))
        ));
    }

    #[test]
    fn test_first_moment_is_new_year_at_noon() {
        let calendar = ChronoLocalCalendar::default();
        let first = calendar.first_moment_of_year(2021).unwrap();
        assert_eq!(first.date_naive(), NaiveDate::from_ymd_opt(2021, 1, 1).unwrap());
        assert_eq!(calendar.month_index(&first), 0);
        assert_eq!(calendar.day_of_month(&first), 1);
    }

    #[test]
    fn test_advance_rolls_over_month_and_year() {
        let calendar = ChronoLocalCalendar::default();
        let first = calendar.first_moment_of_year(2021).unwrap();
        let jan_31 = calendar
            .at_cursor_hour(NaiveDate::from_ymd_opt(2021, 1, 31).unwrap())
            .unwrap();
        let feb_1 = calendar.advance_by_one_day(&jan_31).unwrap();
        assert_eq!((calendar.month_index(&feb_1), calendar.day_of_month(&feb_1)), (1, 1));

        let dec_31 = calendar
            .at_cursor_hour(NaiveDate::from_ymd_opt(2021, 12, 31).unwrap())
            .unwrap();
        let next_year = calendar.advance_by_one_day(&dec_31).unwrap();
        assert_eq!(next_year.year(), 2022);
        assert_eq!(calendar.month_index(&next_year), 0);
        assert_ne!(first, next_year);
    }

    #[test]
    fn test_posix_names_are_english() {
        let calendar = ChronoLocalCalendar::default();
        let first = calendar.first_moment_of_year(2021).unwrap();
        assert_eq!(calendar.month_name(&first), "January");
        assert_eq!(calendar.weekday_short_name(&first), "Fri");
        assert_eq!(calendar.weekday_long_name(&first), "Friday");
    }

    #[test]
    fn test_unrepresentable_year() {
        let calendar = ChronoLocalCalendar::default();
        assert_eq!(
            calendar.first_moment_of_year(i32::MAX),
            Err(CalendarError::UnsupportedYear(i32::MAX))
        );
    }
}
