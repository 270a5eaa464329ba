//! Two-letter weekday labels for compact day cells.

use phf::phf_ordered_map;

use super::error::LookupError;

/// Short weekday names paired with their narrow labels, Sunday first
static NARROW_DAYS: phf::OrderedMap<&'static str, &'static str> = phf_ordered_map! {
    "Sun" => "Su",
    "Mon" => "Mo",
    "Tue" => "Tu",
    "Wed" => "We",
    "Thu" => "Th",
    "Fri" => "Fr",
    "Sat" => "Sa",
};

/// Map a short weekday name ("Mon") to its narrow label ("Mo").
///
/// Only the seven canonical short names are accepted; anything else,
/// including localized abbreviations, is a `LookupError`.
///
/// # Examples
/// ```
/// use year_planner::services::calendar::narrow;
///
/// assert_eq!(narrow("Fri").unwrap(), "Fr");
/// assert!(narrow("Fr.").is_err());
/// ```
pub fn narrow(short_name: &str) -> Result<&'static str, LookupError> {
    NARROW_DAYS
        .get(short_name)
        .copied()
        .ok_or_else(|| LookupError(short_name.to_string()))
}

/// Every `(short name, narrow label)` pair, Sunday first
pub fn narrow_day_labels() -> impl Iterator<Item = (&'static str, &'static str)> {
    NARROW_DAYS.entries().map(|(short, label)| (*short, *label))
}
