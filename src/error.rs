//! Error type shared by every grid computation.

use thiserror::Error;

use crate::models::ui::ViewType;

/// A failed date computation.
///
/// Primitives log a diagnostic before returning one of these, so callers get
/// both an explicit error value and a trace of the offending inputs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalendarError {
    #[error("invalid month: year {year}, month {month}")]
    InvalidMonth { year: i32, month: u32 },

    #[error("invalid date: {year}-{month}-{day}")]
    InvalidDate { year: i32, month: u32, day: u32 },

    #[error("timestamp {0} ms is out of range")]
    InvalidTimestamp(i64),

    #[error("hour {0} is outside 0..=23")]
    InvalidHour(u32),

    #[error("start hour {start} is after end hour {end}")]
    InvalidHourRange { start: u32, end: u32 },

    #[error("{0} template requires a date")]
    MissingDate(ViewType),

    #[error("{0} template is not supported by this layout")]
    UnsupportedView(ViewType),

    #[error("cannot parse {input:?}: {reason}")]
    Parse { input: String, reason: String },
}

impl CalendarError {
    pub(crate) fn parse(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Parse {
            input: input.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CalendarError>;
