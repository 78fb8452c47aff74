// Property-based tests for grid generation
// Checks the structural invariants of month and week templates over random inputs

use calendar_grid::{
    get_first_day, get_total_days, get_weeks_of_month, get_whole_weekday, DateRef, FixedClock,
    TemplateBuilder,
};
use chrono::NaiveDate;
use proptest::prelude::*;

fn is_leap(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

fn builder() -> TemplateBuilder<FixedClock> {
    TemplateBuilder::with_clock(FixedClock(NaiveDate::from_ymd_opt(2000, 1, 1).unwrap()))
}

proptest! {
    /// Property: first weekday is a valid index and totals follow the Gregorian calendar
    #[test]
    fn prop_month_primitives_in_range(year in 1600..2400i32, month in 1..=12u32) {
        let first = get_first_day(year, month).unwrap();
        prop_assert!(first <= 6);

        let total = get_total_days(year, month).unwrap();
        let expected = match month {
            2 if is_leap(year) => 29,
            2 => 28,
            4 | 6 | 9 | 11 => 30,
            _ => 31,
        };
        prop_assert_eq!(total, expected);
    }

    /// Property: the month grid is rectangular and holds every day exactly once
    #[test]
    fn prop_month_grid_is_rectangular(year in 1900..2200i32, month in 1..=12u32) {
        let cells = builder().month_cells::<()>(year, month).unwrap();
        let weeks = get_weeks_of_month(year, month).unwrap();

        prop_assert_eq!(cells.len() as u32, weeks * 7);
        prop_assert!((4..=6).contains(&weeks));

        let days: Vec<u32> = cells.iter().filter_map(|c| c.day).collect();
        let expected: Vec<u32> = (1..=get_total_days(year, month).unwrap()).collect();
        prop_assert_eq!(days, expected);

        let first = get_first_day(year, month).unwrap() as usize;
        prop_assert!(cells[..first].iter().all(|c| c.is_blank()));
        prop_assert!(!cells[first].is_blank());
    }

    /// Property: every populated cell sits in the column of its weekday and the row of its week
    #[test]
    fn prop_cells_line_up_with_weekdays(year in 1900..2200i32, month in 1..=12u32) {
        let cells = builder().month_cells::<()>(year, month).unwrap();
        for (i, cell) in cells.iter().enumerate() {
            if let Some(info) = cell.date_info.as_ref() {
                prop_assert_eq!(info.weekday as usize, i % 7);
                let week = info.week.and_then(|w| w.index());
                prop_assert_eq!(week, Some((i / 7 + 1) as u8));
            }
        }
    }

    /// Property: a week always has seven entries with weekdays (start + k) % 7
    #[test]
    fn prop_whole_week_weekdays(
        year in 1970..2100i32,
        month in 1..=12u32,
        day in 1..=28u32,
        start in 0..=6i32,
    ) {
        let week = get_whole_weekday(&DateRef::new(year, month, day), start).unwrap();
        prop_assert_eq!(week.len(), 7);
        for (k, entry) in week.iter().enumerate() {
            prop_assert_eq!(entry.weekday as i32, (start + k as i32) % 7);
        }
        let anchor = format!("{:04}/{:02}/{:02}", year, month, day);
        prop_assert!(week.iter().any(|e| e.full_date == anchor));
    }
}
