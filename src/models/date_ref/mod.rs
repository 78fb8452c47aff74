//! Year/month/day triple used as input to every grid helper.
//!
//! A `DateRef` is not validated on construction. Invalid combinations such as
//! February 30 are only rejected when a computation needs a real date, which
//! happens through [`DateRef::to_naive`].

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{CalendarError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRef {
    pub year: i32,
    /// 1-12
    pub month: u32,
    /// 1-31
    pub day: u32,
}

impl DateRef {
    pub fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    /// First day of the given month.
    pub fn month(year: i32, month: u32) -> Self {
        Self::new(year, month, 1)
    }

    pub fn from_naive(date: NaiveDate) -> Self {
        Self::new(date.year(), date.month(), date.day())
    }

    /// Resolve to a real calendar date.
    pub fn to_naive(&self) -> Result<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day).ok_or(CalendarError::InvalidDate {
            year: self.year,
            month: self.month,
            day: self.day,
        })
    }
}

impl From<NaiveDate> for DateRef {
    fn from(date: NaiveDate) -> Self {
        Self::from_naive(date)
    }
}

impl fmt::Display for DateRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.year, self.month, self.day)
    }
}

/// Accepts `YYYY-M-D` and `YYYY/M/D`, with or without zero padding.
impl FromStr for DateRef {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let separator = if trimmed.contains('/') { '/' } else { '-' };
        let parts: Vec<&str> = trimmed.split(separator).collect();
        if parts.len() != 3 {
            return Err(CalendarError::parse(s, "expected year, month and day"));
        }

        let year = parts[0]
            .parse::<i32>()
            .map_err(|e| CalendarError::parse(s, format!("year: {}", e)))?;
        let month = parts[1]
            .parse::<u32>()
            .map_err(|e| CalendarError::parse(s, format!("month: {}", e)))?;
        let day = parts[2]
            .parse::<u32>()
            .map_err(|e| CalendarError::parse(s, format!("day: {}", e)))?;

        Ok(Self::new(year, month, day))
    }
}
