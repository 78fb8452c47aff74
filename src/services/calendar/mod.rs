//! Date primitives for calendar grids.
//!
//! Weekdays are numbered 0 (Sunday) through 6 (Saturday). Every primitive
//! returns a [`Result`]; on failure it also logs the function name and its
//! inputs at `warn` level before handing the error back.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use log::warn;

use crate::error::{CalendarError, Result};
use crate::models::cell::WeekOfMonth;
use crate::models::date_ref::DateRef;
use crate::services::clock::{Clock, SystemClock};
use crate::utils::date;

pub(crate) fn logged<T>(
    result: Result<T>,
    function: &str,
    params: fmt::Arguments<'_>,
) -> Result<T> {
    if let Err(e) = &result {
        warn!("calendar_grid: {} failed ({}); params: {}", function, e, params);
    }
    result
}

/// Weekday of the 1st of the month.
pub fn get_first_day(year: i32, month: u32) -> Result<u8> {
    let result = date::first_of_month(year, month)
        .map(date::weekday_index)
        .ok_or(CalendarError::InvalidMonth { year, month });
    logged(result, "get_first_day", format_args!("year: {}, month: {}", year, month))
}

/// Number of days in the month (28-31).
pub fn get_total_days(year: i32, month: u32) -> Result<u32> {
    let result = date::last_of_month(year, month)
        .map(|last| last.day())
        .ok_or(CalendarError::InvalidMonth { year, month });
    logged(result, "get_total_days", format_args!("year: {}, month: {}", year, month))
}

/// Number of seven-day rows the month spans, counting leading blanks.
pub fn get_weeks_of_month(year: i32, month: u32) -> Result<u32> {
    let result = date::first_of_month(year, month)
        .zip(date::last_of_month(year, month))
        .map(|(first, last)| (date::weekday_index(first) as u32 + last.day()).div_ceil(7))
        .ok_or(CalendarError::InvalidMonth { year, month });
    logged(result, "get_weeks_of_month", format_args!("year: {}, month: {}", year, month))
}

pub fn get_weekday(date: &DateRef) -> Result<u8> {
    let result = date.to_naive().map(date::weekday_index);
    logged(result, "get_weekday", format_args!("date: {}", date))
}

/// Row of the Sunday-first month grid that holds the date at `timestamp`
/// (epoch milliseconds, interpreted in local time).
pub fn get_week_index_of_month(timestamp: i64) -> Result<WeekOfMonth> {
    let result = date::local_date_from_ms(timestamp)
        .map(week_index_of_date)
        .ok_or(CalendarError::InvalidTimestamp(timestamp));
    logged(result, "get_week_index_of_month", format_args!("timestamp: {}", timestamp))
}

/// Dates in the first seven days are placed by the day-of-month of their
/// week's Saturday; later dates by their week's Sunday.
pub(crate) fn week_index_of_date(day: NaiveDate) -> WeekOfMonth {
    let index = if day.day() <= 7 {
        date::week_end(day).and_then(|end| by_week_end(end.day()))
    } else {
        date::week_start(day, 0).and_then(|start| by_week_start(start.day()))
    };
    index.map_or(WeekOfMonth::Indeterminate, WeekOfMonth::Index)
}

fn by_week_end(end: u32) -> Option<u8> {
    match end {
        1..=7 => Some(1),
        8..=14 => Some(2),
        _ => None,
    }
}

fn by_week_start(start: u32) -> Option<u8> {
    match start {
        2..=8 => Some(2),
        9..=15 => Some(3),
        16..=22 => Some(4),
        23..=29 => Some(5),
        30.. => Some(6),
        _ => None,
    }
}

/// Whether `date` is the current local day.
pub fn is_today(date: &DateRef) -> Result<bool> {
    is_today_with(date, &SystemClock)
}

/// Whether `date` is the clock's current day.
pub fn is_today_with<C: Clock + ?Sized>(date: &DateRef, clock: &C) -> Result<bool> {
    let result = date.to_naive().map(|day| day == clock.today());
    logged(result, "is_today", format_args!("date: {}", date))
}

/// Whether both dates fall in the same year and month.
pub fn is_the_same_month(current: &DateRef, target: &DateRef) -> Result<bool> {
    let result = current.to_naive().and_then(|current_day| {
        let target_day = target.to_naive()?;
        Ok(current_day.year() == target_day.year() && current_day.month() == target_day.month())
    });
    logged(
        result,
        "is_the_same_month",
        format_args!("current: {}, target: {}", current, target),
    )
}
