// Test fixtures - reusable test data
// Provides consistent dates and clocks across the integration tests

#![allow(dead_code)]

use calendar_grid::{DateRef, FixedClock, TemplateBuilder};
use chrono::NaiveDate;

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// Returns Feb 1, 2024 (leap-year February, starts on a Thursday)
    pub fn leap_february_2024() -> DateRef {
        DateRef::month(2024, 2)
    }

    /// Returns Mar 15, 2024 (a Friday)
    pub fn mid_march_2024() -> DateRef {
        DateRef::new(2024, 3, 15)
    }

    /// Returns Jun 1, 2024 (a Saturday; the month spans six rows)
    pub fn june_2024() -> DateRef {
        DateRef::month(2024, 6)
    }

    /// Returns Dec 31, 2024 (New Year's Eve, week crosses into 2025)
    pub fn new_years_eve_2024() -> DateRef {
        DateRef::new(2024, 12, 31)
    }
}

/// Builder whose "today" is pinned to the given date.
pub fn builder_on(year: i32, month: u32, day: u32) -> TemplateBuilder<FixedClock> {
    TemplateBuilder::with_clock(FixedClock(
        NaiveDate::from_ymd_opt(year, month, day).expect("valid fixture date"),
    ))
}
