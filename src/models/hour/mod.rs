// Day view hour slots

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HourSlot<T> {
    /// `HH:00`
    pub clock: String,
    pub hour_content: Vec<T>,
}

impl<T> HourSlot<T> {
    pub fn new(hour: u32) -> Self {
        Self {
            clock: format!("{:02}:00", hour),
            hour_content: Vec::new(),
        }
    }
}
