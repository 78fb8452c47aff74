// Calendar Grid Library
// Date primitives and empty grid templates for calendar views

pub mod error;
pub mod models;
pub mod services;
pub mod utils;

pub use error::{CalendarError, Result};
pub use models::cell::{DateInfo, DayCell, WeekOfMonth};
pub use models::date_ref::DateRef;
pub use models::hour::HourSlot;
pub use models::settings::{GridSettings, TemplateOptions};
pub use models::template::Template;
pub use models::ui::ViewType;
pub use models::week::WeekDayEntry;
pub use services::calendar::{
    get_first_day, get_total_days, get_week_index_of_month, get_weekday, get_weeks_of_month,
    is_the_same_month, is_today, is_today_with,
};
pub use services::clock::{Clock, FixedClock, SystemClock};
#[allow(deprecated)]
pub use services::template::{get_empty_template, get_legacy_empty_template, TemplateBuilder};
pub use services::week::get_whole_weekday;
