// UI models module
// View types a calendar component can request a template for

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CalendarError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ViewType {
    Year,
    #[default]
    Month,
    Week,
    Day,
}

impl ViewType {
    pub const ALL: [ViewType; 4] = [ViewType::Year, ViewType::Month, ViewType::Week, ViewType::Day];

    pub fn as_str(&self) -> &'static str {
        match self {
            ViewType::Year => "Year",
            ViewType::Month => "Month",
            ViewType::Week => "Week",
            ViewType::Day => "Day",
        }
    }
}

impl fmt::Display for ViewType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewType {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Year" => Ok(ViewType::Year),
            "Month" => Ok(ViewType::Month),
            "Week" => Ok(ViewType::Week),
            "Day" => Ok(ViewType::Day),
            other => Err(CalendarError::parse(other, "expected Year, Month, Week or Day")),
        }
    }
}
