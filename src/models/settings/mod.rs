// Settings module
// Template options and the on-disk grid configuration

use serde::{Deserialize, Serialize};

use super::date_ref::DateRef;
use super::ui::ViewType;

pub const DEFAULT_START_HOUR: u32 = 0;
pub const DEFAULT_END_HOUR: u32 = 23;

/// Per-call options for the template builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TemplateOptions {
    /// First column of the week view; 0 = Sunday. Normalized modulo 7.
    pub week_start_at: i32,
    /// First hour of the day view, inclusive
    pub start_hour: u32,
    /// Last hour of the day view, inclusive
    pub end_hour: u32,
}

impl Default for TemplateOptions {
    fn default() -> Self {
        Self {
            week_start_at: 0, // Sunday
            start_hour: DEFAULT_START_HOUR,
            end_hour: DEFAULT_END_HOUR,
        }
    }
}

impl TemplateOptions {
    pub fn week_starting_at(week_start_at: i32) -> Self {
        Self {
            week_start_at,
            ..Self::default()
        }
    }

    pub fn hours(start_hour: u32, end_hour: u32) -> Self {
        Self {
            start_hour,
            end_hour,
            ..Self::default()
        }
    }
}

/// Grid configuration as read from `config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridSettings {
    pub view: ViewType,
    pub week_start_at: i32,
    pub start_hour: u32,
    pub end_hour: u32,
    /// Anchor for Month and Week views; kept last so it serializes as a trailing table
    pub date: Option<DateRef>,
}

impl Default for GridSettings {
    fn default() -> Self {
        let options = TemplateOptions::default();
        Self {
            view: ViewType::default(),
            week_start_at: options.week_start_at,
            start_hour: options.start_hour,
            end_hour: options.end_hour,
            date: None,
        }
    }
}

impl GridSettings {
    pub fn options(&self) -> TemplateOptions {
        TemplateOptions {
            week_start_at: self.week_start_at,
            start_hour: self.start_hour,
            end_hour: self.end_hour,
        }
    }
}

impl From<&GridSettings> for TemplateOptions {
    fn from(settings: &GridSettings) -> Self {
        settings.options()
    }
}
