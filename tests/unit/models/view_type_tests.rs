// Unit tests for the ViewType enum
// Parsing and display must agree for every view a template can be built for

use calendar_grid::{CalendarError, ViewType};
use test_case::test_case;

#[test_case(ViewType::Year, "Year"; "year view")]
#[test_case(ViewType::Month, "Month"; "month view")]
#[test_case(ViewType::Week, "Week"; "week view")]
#[test_case(ViewType::Day, "Day"; "day view")]
fn test_view_type_names(view: ViewType, name: &str) {
    assert_eq!(view.to_string(), name);
    assert_eq!(name.parse::<ViewType>(), Ok(view));
}

#[test]
fn test_default_view_is_month() {
    assert_eq!(ViewType::default(), ViewType::Month);
}

#[test]
fn test_unknown_view_is_parse_error() {
    assert!(matches!(
        "Quarter".parse::<ViewType>(),
        Err(CalendarError::Parse { .. })
    ));
}

#[test]
fn test_all_views_listed_once() {
    let mut names: Vec<&str> = ViewType::ALL.iter().map(ViewType::as_str).collect();
    names.dedup();
    assert_eq!(names.len(), 4);
}
