// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::DomainError;

#[test]
fn test_invalid_event_lists_every_issue() {
    let err = DomainError::InvalidEvent {
        issues: vec![
            String::from("title cannot be empty"),
            String::from("endTime must be after startTime"),
        ],
    };
    assert_eq!(
        err.to_string(),
        "Invalid event: title cannot be empty; endTime must be after startTime"
    );
}

#[test]
fn test_display_messages() {
    assert_eq!(
        DomainError::InvalidEventType(String::from("Unknown event type: Party")).to_string(),
        "Invalid event type: Unknown event type: Party"
    );
    assert_eq!(
        DomainError::InvalidTimezone(String::from("Mars/Olympus")).to_string(),
        "Invalid timezone: Mars/Olympus"
    );
    assert_eq!(
        DomainError::InvalidSupervisor("A supervisor requires an id or a name").to_string(),
        "Invalid supervisor: A supervisor requires an id or a name"
    );
}
