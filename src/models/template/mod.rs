//! Output of the grid template builder.

use serde::Serialize;

use super::cell::DayCell;
use super::hour::HourSlot;
use super::ui::ViewType;
use super::week::WeekDayEntry;

/// An empty grid for one view, ready for a UI to fill in `content`.
///
/// Serializes as a bare JSON array, whatever the view.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Template<T> {
    /// Always empty; year layouts are composed from month grids by the caller.
    Year(Vec<DayCell<T>>),
    Month(Vec<DayCell<T>>),
    Week(Vec<WeekDayEntry>),
    Day(Vec<HourSlot<T>>),
}

impl<T> Template<T> {
    pub fn view_type(&self) -> ViewType {
        match self {
            Template::Year(_) => ViewType::Year,
            Template::Month(_) => ViewType::Month,
            Template::Week(_) => ViewType::Week,
            Template::Day(_) => ViewType::Day,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Template::Year(cells) | Template::Month(cells) => cells.len(),
            Template::Week(days) => days.len(),
            Template::Day(slots) => slots.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn into_cells(self) -> Option<Vec<DayCell<T>>> {
        match self {
            Template::Year(cells) | Template::Month(cells) => Some(cells),
            _ => None,
        }
    }

    pub fn into_week(self) -> Option<Vec<WeekDayEntry>> {
        match self {
            Template::Week(days) => Some(days),
            _ => None,
        }
    }

    pub fn into_hours(self) -> Option<Vec<HourSlot<T>>> {
        match self {
            Template::Day(slots) => Some(slots),
            _ => None,
        }
    }
}
