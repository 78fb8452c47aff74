// Week view entries

use serde::Serialize;

/// One day of an unrolled week.
///
/// Year, month and day are carried as zero-padded strings (`"2024"`, `"03"`,
/// `"05"`) so a view can print them without further formatting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekDayEntry {
    /// 0 = Sunday .. 6 = Saturday, always normalized
    pub weekday: u8,
    pub ms: i64,
    pub year: String,
    pub month: String,
    pub day: String,
    /// `YYYY/MM/DD`
    pub full_date: String,
}
