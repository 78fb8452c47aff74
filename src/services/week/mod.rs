//! Week unroller: the seven dates of a week, starting on a configurable day.

use chrono::{Duration, NaiveDate};

use crate::error::{CalendarError, Result};
use crate::models::date_ref::DateRef;
use crate::models::week::WeekDayEntry;
use crate::services::calendar::logged;
use crate::utils::date;

/// Fold any week-start offset into 0..=6, whatever its sign.
pub fn normalize_weekday(offset: i32) -> u8 {
    offset.rem_euclid(7) as u8
}

/// The week containing `date`, beginning on `start_day` (0 = Sunday).
///
/// Entry `k` always has weekday `(start_day + k) % 7`.
pub fn get_whole_weekday(date: &DateRef, start_day: i32) -> Result<Vec<WeekDayEntry>> {
    let result = date.to_naive().and_then(|anchor| unroll(anchor, normalize_weekday(start_day)));
    logged(
        result,
        "get_whole_weekday",
        format_args!("date: {}, start_day: {}", date, start_day),
    )
}

pub(crate) fn unroll(anchor: NaiveDate, start_day: u8) -> Result<Vec<WeekDayEntry>> {
    let first = date::week_start(anchor, start_day).ok_or_else(|| invalid(anchor))?;
    (0..7i64)
        .map(|offset| -> Result<WeekDayEntry> {
            let day = first
                .checked_add_signed(Duration::days(offset))
                .ok_or_else(|| invalid(anchor))?;
            entry(day, normalize_weekday(start_day as i32 + offset as i32))
        })
        .collect()
}

fn entry(day: NaiveDate, weekday: u8) -> Result<WeekDayEntry> {
    let ms = date::local_midnight_ms(day).ok_or_else(|| invalid(day))?;
    let (year, month, day_of_month) = date::padded_parts(day);
    let full_date = format!("{}/{}/{}", year, month, day_of_month);
    Ok(WeekDayEntry {
        weekday,
        ms,
        year,
        month,
        day: day_of_month,
        full_date,
    })
}

fn invalid(day: NaiveDate) -> CalendarError {
    let DateRef { year, month, day } = DateRef::from_naive(day);
    CalendarError::InvalidDate { year, month, day }
}
