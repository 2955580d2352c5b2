// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Event lifecycle transitions.
//!
//! Transitions are pure: they take the current event value and return the
//! transitioned value without side effects. Persistence happens at the
//! store gateway after a transition succeeds, so a failed write never
//! leaves a half-applied event in memory.

use crate::error::CoreError;
use chrono::{DateTime, Utc};
use linha_domain::{Event, EventStatus, EventType, Supervisor, validate_new_event};

/// A merge-update applied to an existing event.
///
/// Absent fields leave the stored value untouched. The merged event is
/// re-validated with the same rules as creation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EventPatch {
    /// Replacement title.
    pub title: Option<String>,
    /// Replacement description.
    pub description: Option<String>,
    /// Replacement event type.
    pub event_type: Option<EventType>,
    /// Replacement start instant.
    pub start_time: Option<DateTime<Utc>>,
    /// Replacement end instant.
    pub end_time: Option<DateTime<Utc>>,
    /// Replacement roster capacity.
    pub max_capacity: Option<u32>,
    /// Replacement supervisor assignment.
    pub supervisor: Option<Supervisor>,
}

impl EventPatch {
    /// Returns whether the patch changes nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.event_type.is_none()
            && self.start_time.is_none()
            && self.end_time.is_none()
            && self.max_capacity.is_none()
            && self.supervisor.is_none()
    }
}

/// Publishes an event.
///
/// Sets the status to `Published` and stamps `published_at` with the
/// given instant. Republishing overwrites the previous stamp.
#[must_use]
pub fn publish(event: &Event, now: DateTime<Utc>) -> Event {
    let mut published: Event = event.clone();
    published.status = EventStatus::Published;
    published.published_at = Some(now);
    published
}

/// Unpublishes an event, returning it to draft.
///
/// `published_at` is deliberately retained: it records the most recent
/// publish, not whether the event is currently published.
#[must_use]
pub fn unpublish(event: &Event) -> Event {
    let mut drafted: Event = event.clone();
    drafted.status = EventStatus::Draft;
    drafted
}

/// Assigns a supervisor to an event.
#[must_use]
pub fn assign_supervisor(event: &Event, supervisor: Supervisor) -> Event {
    let mut assigned: Event = event.clone();
    assigned.supervisor = Some(supervisor);
    assigned
}

/// Applies a merge-update to an event and re-validates the result.
///
/// # Errors
///
/// Returns a `DomainViolation` if the merged event fails the creation
/// rules (empty title, non-positive duration).
pub fn apply_patch(event: &Event, patch: &EventPatch) -> Result<Event, CoreError> {
    let mut patched: Event = event.clone();

    if let Some(title) = &patch.title {
        patched.title = title.clone();
    }
    if let Some(description) = &patch.description {
        patched.description = description.clone();
    }
    if let Some(event_type) = patch.event_type {
        patched.event_type = event_type;
    }
    if let Some(start_time) = patch.start_time {
        patched.start_time = start_time;
    }
    if let Some(end_time) = patch.end_time {
        patched.end_time = end_time;
    }
    if let Some(max_capacity) = patch.max_capacity {
        patched.max_capacity = max_capacity;
    }
    if let Some(supervisor) = &patch.supervisor {
        patched.supervisor = Some(supervisor.clone());
    }

    validate_new_event(&patched)?;
    Ok(patched)
}
