// Property-based tests for calendar generation
// Checks structural invariants of generated calendars over random years

mod fixtures;

use std::collections::HashSet;

use chrono::NaiveDate;
use fixtures::{reference_generator, MONTH_NAMES};
use proptest::prelude::*;
use year_planner::services::calendar::narrow;
use year_planner::utils::date::{days_in_month, days_in_year};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    /// Property: twelve months, January to December, each with contiguous dates from 1
    #[test]
    fn prop_months_ordered_and_contiguous(year in 1i32..=9999) {
        let calendar = reference_generator().generate(year).unwrap();
        prop_assert_eq!(calendar.months.len(), 12);

        for (index, month) in calendar.months.iter().enumerate() {
            prop_assert_eq!(month.name.as_str(), MONTH_NAMES[index]);
            prop_assert!(!month.days.is_empty());

            let expected = days_in_month(year, index as u32 + 1).unwrap();
            prop_assert_eq!(month.days.len(), expected as usize);
            for (offset, day) in month.days.iter().enumerate() {
                prop_assert_eq!(day.date, offset as u32 + 1);
            }
        }
    }

    /// Property: days span the year exactly once (365 or 366 distinct dates)
    #[test]
    fn prop_every_date_exactly_once(year in 1i32..=4000) {
        let calendar = reference_generator().generate(year).unwrap();

        let mut seen = HashSet::new();
        for (index, month) in calendar.months.iter().enumerate() {
            for day in &month.days {
                let date = NaiveDate::from_ymd_opt(year, index as u32 + 1, day.date);
                prop_assert!(date.is_some());
                prop_assert!(seen.insert(date));
            }
        }

        prop_assert_eq!(seen.len() as u32, days_in_year(year).unwrap());
        prop_assert_eq!(calendar.total_days(), seen.len());
    }

    /// Property: every generated short name has a two-character narrow label
    #[test]
    fn prop_narrow_label_defined_for_every_day(year in 1i32..=9999) {
        let calendar = reference_generator().generate(year).unwrap();
        let mut labels = HashSet::new();

        for (_, day) in calendar.days() {
            let label = narrow(&day.name.short);
            prop_assert!(label.is_ok(), "no label for {:?}", day.name.short);
            let label = label.unwrap();
            prop_assert_eq!(label.chars().count(), 2);
            labels.insert(label);
        }

        prop_assert_eq!(labels.len(), 7);
    }
}
