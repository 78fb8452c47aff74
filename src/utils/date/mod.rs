// Date utility functions
// The only place the grid code touches chrono directly

use chrono::{Datelike, Duration, Local, NaiveDate, NaiveTime, TimeZone};

/// 0 = Sunday .. 6 = Saturday
pub fn weekday_index(date: NaiveDate) -> u8 {
    date.weekday().num_days_from_sunday() as u8
}

pub fn first_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, 1)
}

pub fn last_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    let (next_year, next_month) = if month == 12 {
        (year.checked_add(1)?, 1)
    } else {
        (year, month + 1)
    };
    first_of_month(year, month)?;
    NaiveDate::from_ymd_opt(next_year, next_month, 1)?.pred_opt()
}

/// Calculate the start of the week containing the given date.
///
/// # Arguments
/// * `date` - The date to find the week start for
/// * `first_day_of_week` - 0 = Sunday, 1 = Monday, etc.
///
/// Returns `None` when the week start falls before `NaiveDate::MIN`.
pub fn week_start(date: NaiveDate, first_day_of_week: u8) -> Option<NaiveDate> {
    let weekday = weekday_index(date) as i64;
    let offset = (weekday - first_day_of_week as i64 + 7) % 7;
    date.checked_sub_signed(Duration::days(offset))
}

/// Last day of the Sunday-first week containing `date`.
pub fn week_end(date: NaiveDate) -> Option<NaiveDate> {
    week_start(date, 0)?.checked_add_signed(Duration::days(6))
}

/// Epoch milliseconds of the first instant of `date` in local time.
///
/// When midnight does not exist locally (a DST jump at 00:00) the first hour
/// after the gap is used instead.
pub fn local_midnight_ms(date: NaiveDate) -> Option<i64> {
    (0..=2)
        .filter_map(|hour| NaiveTime::from_hms_opt(hour, 0, 0))
        .find_map(|time| Local.from_local_datetime(&date.and_time(time)).earliest())
        .map(|datetime| datetime.timestamp_millis())
}

/// Local calendar date of an epoch-millisecond timestamp.
pub fn local_date_from_ms(ms: i64) -> Option<NaiveDate> {
    Local
        .timestamp_millis_opt(ms)
        .single()
        .map(|datetime| datetime.date_naive())
}

/// `YYYY/M/D`
pub fn format_unpadded(date: NaiveDate) -> String {
    format!("{}/{}/{}", date.year(), date.month(), date.day())
}

/// (`YYYY`, `MM`, `DD`)
pub fn padded_parts(date: NaiveDate) -> (String, String, String) {
    (
        format!("{:04}", date.year()),
        format!("{:02}", date.month()),
        format!("{:02}", date.day()),
    )
}
