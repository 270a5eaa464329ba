// Calendar module
// Year -> months -> days structure consumed by the planner views

use serde::{Deserialize, Serialize};

/// Abbreviated and full weekday names in the active locale
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DayName {
    /// Abbreviated weekday name, e.g. "Mon"
    pub short: String,
    /// Full weekday name, e.g. "Monday"
    pub long: String,
}

impl DayName {
    pub fn new(short: impl Into<String>, long: impl Into<String>) -> Self {
        Self {
            short: short.into(),
            long: long.into(),
        }
    }
}

/// A single day of a month
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Day {
    pub name: DayName,
    /// 1-based day of month
    pub date: u32,
}

/// A month with every one of its days in calendar order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Month {
    /// Full month name in the active locale
    pub name: String,
    pub days: Vec<Day>,
}

impl Month {
    /// Number of days in this month
    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

/// A full year of months, January through December
///
/// # Examples
/// ```
/// use year_planner::models::calendar::{Calendar, Day, DayName, Month};
///
/// let calendar = Calendar {
///     year: 2021,
///     months: vec![Month {
///         name: "January".to_string(),
///         days: vec![Day { name: DayName::new("Fri", "Friday"), date: 1 }],
///     }],
/// };
/// assert_eq!(calendar.total_days(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Calendar {
    pub year: i32,
    pub months: Vec<Month>,
}

impl Calendar {
    /// Total number of days across all months
    pub fn total_days(&self) -> usize {
        self.months.iter().map(Month::len).sum()
    }

    /// Every day paired with its month, in month order then day order.
    ///
    /// This is also the order in which the planner reveals its cells.
    pub fn days(&self) -> impl Iterator<Item = (&Month, &Day)> + '_ {
        self.months
            .iter()
            .flat_map(|month| month.days.iter().map(move |day| (month, day)))
    }
}
