//! Month grid cells.
//!
//! A month template is a flat, row-major list of [`DayCell`]s whose length is
//! always a multiple of seven. Cells before the 1st and after the last day of
//! the month are blank: no day number, no date info, no content.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Position of a date's row inside its month grid (Sunday-first rows).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WeekOfMonth {
    /// 1-6
    Index(u8),
    /// The lookup tables have no entry for this date.
    Indeterminate,
}

impl WeekOfMonth {
    pub fn index(&self) -> Option<u8> {
        match self {
            WeekOfMonth::Index(n) => Some(*n),
            WeekOfMonth::Indeterminate => None,
        }
    }
}

impl Serialize for WeekOfMonth {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            WeekOfMonth::Index(n) => serializer.serialize_u8(*n),
            WeekOfMonth::Indeterminate => serializer.serialize_none(),
        }
    }
}

/// Everything a populated cell knows about its date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DateInfo {
    /// Local midnight, epoch milliseconds
    pub ms: i64,
    /// Unpadded `YYYY/M/D`
    pub full_date: String,
    pub year: i32,
    pub month: u32,
    pub day: u32,
    /// 0 = Sunday .. 6 = Saturday
    pub weekday: u8,
    /// Absent in the legacy layout
    #[serde(skip_serializing_if = "Option::is_none")]
    pub week: Option<WeekOfMonth>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayCell<T> {
    #[serde(serialize_with = "serialize_day")]
    pub day: Option<u32>,
    pub today: bool,
    #[serde(serialize_with = "serialize_date_info")]
    pub date_info: Option<DateInfo>,
    pub content: Vec<T>,
}

impl<T> DayCell<T> {
    /// Padding cell with no corresponding calendar day.
    pub fn blank() -> Self {
        Self {
            day: None,
            today: false,
            date_info: None,
            content: Vec::new(),
        }
    }

    pub fn populated(date_info: DateInfo, today: bool) -> Self {
        Self {
            day: Some(date_info.day),
            today,
            date_info: Some(date_info),
            content: Vec::new(),
        }
    }

    pub fn is_blank(&self) -> bool {
        self.day.is_none()
    }
}

// Blank cells render their day as an empty string
fn serialize_day<S: Serializer>(day: &Option<u32>, serializer: S) -> Result<S::Ok, S::Error> {
    match day {
        Some(day) => serializer.serialize_u32(*day),
        None => serializer.serialize_str(""),
    }
}

// ...and their date info as an empty object
fn serialize_date_info<S: Serializer>(
    info: &Option<DateInfo>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match info {
        Some(info) => info.serialize(serializer),
        None => serializer.serialize_map(Some(0))?.end(),
    }
}
