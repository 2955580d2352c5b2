// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::Event;
use chrono::{DateTime, Utc};

/// Validates the field constraints of a new event.
///
/// Unlike most validators in this workspace, this one collects every
/// violation before failing so a form submission can surface all problems
/// in one round trip.
///
/// # Errors
///
/// Returns `DomainError::InvalidEvent` listing each violated rule:
/// - the title is empty (or whitespace only)
/// - the end time is not after the start time
pub fn validate_new_event(event: &Event) -> Result<(), DomainError> {
    let mut issues: Vec<String> = Vec::new();

    // Rule: title must not be empty
    if event.title.trim().is_empty() {
        issues.push(String::from("title cannot be empty"));
    }

    // Rule: the event must span a positive duration
    if event.end_time <= event.start_time {
        issues.push(String::from("endTime must be after startTime"));
    }

    // max_capacity is non-negative by construction (unsigned); zero is
    // the documented "unlimited" value, not an error.

    if issues.is_empty() {
        Ok(())
    } else {
        Err(DomainError::InvalidEvent { issues })
    }
}

/// Validates a start/end instant pair in isolation.
///
/// Used when re-validating a patched event where only the times changed.
///
/// # Errors
///
/// Returns `DomainError::InvalidEvent` if `end` is not after `start`.
pub fn validate_event_times(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<(), DomainError> {
    if end <= start {
        return Err(DomainError::InvalidEvent {
            issues: vec![String::from("endTime must be after startTime")],
        });
    }
    Ok(())
}

/// Validates a human-facing id number.
///
/// Id numbers are 3 to 10 ASCII digits.
///
/// # Errors
///
/// Returns `DomainError::InvalidIdNumber` if the format does not match.
pub fn validate_id_number(id_number: &str) -> Result<(), DomainError> {
    let len: usize = id_number.len();
    if !(3..=10).contains(&len) || !id_number.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DomainError::InvalidIdNumber(format!(
            "Id number must be 3 to 10 digits, got '{id_number}'"
        )));
    }
    Ok(())
}
