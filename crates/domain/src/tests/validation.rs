// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    DomainError, Event, EventType, validate_event_times, validate_id_number, validate_new_event,
};
use chrono::{Duration, TimeZone, Utc};

fn valid_event() -> Event {
    let start = Utc.with_ymd_and_hms(2024, 6, 3, 20, 0, 0).unwrap();
    Event::new(
        String::from("Turno"),
        String::from("Evening shift"),
        EventType::Shift,
        start,
        start + Duration::hours(2),
        1,
        None,
    )
}

#[test]
fn test_valid_event_passes() {
    assert!(validate_new_event(&valid_event()).is_ok());
}

#[test]
fn test_empty_title_is_rejected() {
    let mut event = valid_event();
    event.title = String::from("   ");

    let err = validate_new_event(&event).unwrap_err();
    let DomainError::InvalidEvent { issues } = err else {
        panic!("expected InvalidEvent");
    };
    assert_eq!(issues, vec![String::from("title cannot be empty")]);
}

#[test]
fn test_all_violations_are_collected() {
    // Empty title AND end before start: both must be reported at once
    let mut event = valid_event();
    event.title = String::new();
    event.end_time = event.start_time - Duration::hours(1);

    let err = validate_new_event(&event).unwrap_err();
    let DomainError::InvalidEvent { issues } = err else {
        panic!("expected InvalidEvent");
    };
    assert_eq!(issues.len(), 2);
    assert!(issues.iter().any(|i| i.contains("title")));
    assert!(issues.iter().any(|i| i.contains("endTime")));
}

#[test]
fn test_zero_duration_is_rejected() {
    let mut event = valid_event();
    event.end_time = event.start_time;
    assert!(validate_new_event(&event).is_err());
}

#[test]
fn test_zero_capacity_means_unlimited_not_invalid() {
    let mut event = valid_event();
    event.max_capacity = 0;
    assert!(validate_new_event(&event).is_ok());
    assert!(event.is_unlimited());
}

#[test]
fn test_empty_description_is_allowed() {
    let mut event = valid_event();
    event.description = String::new();
    assert!(validate_new_event(&event).is_ok());
}

#[test]
fn test_validate_event_times_pair() {
    let start = Utc.with_ymd_and_hms(2024, 6, 3, 20, 0, 0).unwrap();
    assert!(validate_event_times(start, start + Duration::minutes(1)).is_ok());
    assert!(validate_event_times(start, start).is_err());
    assert!(validate_event_times(start, start - Duration::minutes(1)).is_err());
}

#[test]
fn test_id_number_format() {
    assert!(validate_id_number("123").is_ok());
    assert!(validate_id_number("1234567890").is_ok());

    assert!(validate_id_number("12").is_err());
    assert!(validate_id_number("12345678901").is_err());
    assert!(validate_id_number("12a4").is_err());
    assert!(validate_id_number("").is_err());
}
