// Test fixtures - reusable test data
// Provides consistent generators and reference values across test files

#![allow(dead_code)]

use chrono::Locale;
use year_planner::services::calendar::{CalendarGenerator, ChronoLocalCalendar};

/// Month names in the POSIX reference locale
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Short weekday names in the POSIX reference locale, Sunday first
pub const SHORT_WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Generator using the host timezone and the POSIX (English) locale
pub fn reference_generator() -> CalendarGenerator<ChronoLocalCalendar> {
    CalendarGenerator::new(ChronoLocalCalendar::new(Locale::POSIX))
}

/// Sample years for testing
pub mod years {
    /// Divisible by 4
    pub const LEAP: i32 = 2024;
    pub const COMMON: i32 = 2023;
    /// Divisible by 100 but not 400
    pub const CENTURY_COMMON: i32 = 1900;
    /// Divisible by 400
    pub const CENTURY_LEAP: i32 = 2000;
    /// Starts on a Friday
    pub const FRIDAY_START: i32 = 2021;
}
