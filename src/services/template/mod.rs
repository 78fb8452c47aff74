// Grid template service
// Builds the empty Year/Month/Week/Day structures a calendar view fills in

use chrono::{Datelike, NaiveDate};
use log::debug;

use crate::error::{CalendarError, Result};
use crate::models::cell::{DateInfo, DayCell};
use crate::models::date_ref::DateRef;
use crate::models::hour::HourSlot;
use crate::models::settings::{GridSettings, TemplateOptions};
use crate::models::template::Template;
use crate::models::ui::ViewType;
use crate::services::calendar::{self, logged};
use crate::services::clock::{Clock, SystemClock};
use crate::services::week;
use crate::utils::date;

/// Builds grid templates, reading "today" from its clock.
pub struct TemplateBuilder<C: Clock = SystemClock> {
    clock: C,
}

impl TemplateBuilder<SystemClock> {
    pub fn new() -> Self {
        Self { clock: SystemClock }
    }
}

impl Default for TemplateBuilder<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> TemplateBuilder<C> {
    pub fn with_clock(clock: C) -> Self {
        Self { clock }
    }

    /// Build the empty template for `view`.
    ///
    /// Month and Week need a date; Year and Day ignore it.
    pub fn build<T>(
        &self,
        view: ViewType,
        date: Option<&DateRef>,
        options: &TemplateOptions,
    ) -> Result<Template<T>> {
        let template = match view {
            ViewType::Year => Template::Year(Vec::new()),
            ViewType::Month => {
                let date = date.ok_or(CalendarError::MissingDate(view))?;
                Template::Month(self.month_cells(date.year, date.month)?)
            }
            ViewType::Week => {
                let date = date.ok_or(CalendarError::MissingDate(view))?;
                Template::Week(week::get_whole_weekday(date, options.week_start_at)?)
            }
            ViewType::Day => Template::Day(hour_slots(options.start_hour, options.end_hour)?),
        };
        debug!("Built {} template with {} entries", view, template.len());
        Ok(template)
    }

    /// Build the template described by a settings file.
    ///
    /// Without a configured date, Month and Week views anchor on today.
    pub fn build_from_settings<T>(&self, settings: &GridSettings) -> Result<Template<T>> {
        let date = settings
            .date
            .unwrap_or_else(|| DateRef::from_naive(self.clock.today()));
        self.build(settings.view, Some(&date), &settings.options())
    }

    /// `weeks × 7` cells; days sit at `first_weekday .. first_weekday + total_days`.
    pub fn month_cells<T>(&self, year: i32, month: u32) -> Result<Vec<DayCell<T>>> {
        let first_weekday = calendar::get_first_day(year, month)? as u32;
        let total_days = calendar::get_total_days(year, month)?;
        let weeks = calendar::get_weeks_of_month(year, month)?;
        let today = self.clock.today();

        (0..weeks * 7)
            .map(|i| -> Result<DayCell<T>> {
                if i < first_weekday || i >= first_weekday + total_days {
                    return Ok(DayCell::blank());
                }
                let day = i - first_weekday + 1;
                let naive = NaiveDate::from_ymd_opt(year, month, day)
                    .ok_or(CalendarError::InvalidDate { year, month, day })?;
                Ok(DayCell::populated(date_info(naive)?, naive == today))
            })
            .collect()
    }

    /// The twelve month grids of `year`, January first.
    pub fn months_of_year<T>(&self, year: i32) -> Result<Vec<Vec<DayCell<T>>>> {
        (1..=12).map(|month| self.month_cells(year, month)).collect()
    }
}

fn date_info(day: NaiveDate) -> Result<DateInfo> {
    let ms = date::local_midnight_ms(day).ok_or(CalendarError::InvalidDate {
        year: day.year(),
        month: day.month(),
        day: day.day(),
    })?;
    Ok(DateInfo {
        ms,
        full_date: date::format_unpadded(day),
        year: day.year(),
        month: day.month(),
        day: day.day(),
        weekday: date::weekday_index(day),
        week: Some(calendar::week_index_of_date(day)),
    })
}

fn hour_slots<T>(start_hour: u32, end_hour: u32) -> Result<Vec<HourSlot<T>>> {
    let result = if let Some(bad) = [start_hour, end_hour].into_iter().find(|h| *h > 23) {
        Err(CalendarError::InvalidHour(bad))
    } else if start_hour > end_hour {
        Err(CalendarError::InvalidHourRange {
            start: start_hour,
            end: end_hour,
        })
    } else {
        Ok((start_hour..=end_hour).map(HourSlot::new).collect())
    };
    logged(
        result,
        "hour_slots",
        format_args!("start_hour: {}, end_hour: {}", start_hour, end_hour),
    )
}

/// Build an empty template with the system clock.
pub fn get_empty_template<T>(
    view: ViewType,
    date: Option<&DateRef>,
    options: &TemplateOptions,
) -> Result<Template<T>> {
    TemplateBuilder::new().build(view, date, options)
}

/// The older grid layout: no Day view and no `week` field on cells.
#[deprecated(note = "use get_empty_template; this layout has no Day view and no week index")]
pub fn get_legacy_empty_template<T>(
    view: ViewType,
    date: Option<&DateRef>,
    options: &TemplateOptions,
) -> Result<Template<T>> {
    if view == ViewType::Day {
        return logged(
            Err(CalendarError::UnsupportedView(view)),
            "get_legacy_empty_template",
            format_args!("view: {}", view),
        );
    }
    Ok(match get_empty_template(view, date, options)? {
        Template::Month(cells) => Template::Month(
            cells
                .into_iter()
                .map(|mut cell: DayCell<T>| {
                    if let Some(info) = cell.date_info.as_mut() {
                        info.week = None;
                    }
                    cell
                })
                .collect(),
        ),
        other => other,
    })
}
