use thiserror::Error;

/// Errors raised while generating a calendar
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalendarError {
    /// The local calendar or locale facility is unavailable or misbehaving.
    #[error("Calendar configuration error: {0}")]
    Configuration(String),

    /// The year lies outside the range the local calendar can represent.
    #[error("Year {0} cannot be represented by the local calendar")]
    UnsupportedYear(i32),
}

/// A weekday name that has no narrow label
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("No narrow label for weekday name {0:?}")]
pub struct LookupError(pub String);
