// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.

use chrono::{DateTime, Utc};
use linha_domain::{Event, RestrictionRule, SignUp, Supervisor, User};
use time::Date;

use crate::error::ApiError;

/// API request to create a single event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateEventRequest {
    /// Event title.
    pub title: String,
    /// Event description (may be empty).
    pub description: String,
    /// Event type name (e.g. "Shift", "OpenEvent").
    pub event_type: String,
    /// Start instant.
    pub start_time: DateTime<Utc>,
    /// End instant.
    pub end_time: DateTime<Utc>,
    /// Roster capacity; 0 means unlimited. Negative values are invalid.
    pub max_capacity: i64,
}

/// API response for a successful event creation.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CreateEventResponse {
    /// The store-assigned event id.
    pub event_id: String,
    /// A success message.
    pub message: String,
}

/// API request to generate recurring shifts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateShiftsRequest {
    /// Description stamped on every generated shift.
    pub description: String,
    /// First candidate date (inclusive).
    pub start_date: Date,
    /// Last candidate date (inclusive).
    pub end_date: Date,
    /// Weekday pattern name ("weekdays", "weekends", "all").
    pub pattern: String,
    /// Exclusion rules.
    pub restrictions: Vec<RestrictionRule>,
}

/// API response for a completed shift generation.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct GenerateShiftsResponse {
    /// The number of draft shifts written.
    pub created: usize,
    /// A success message.
    pub message: String,
}

/// Supervisor fields as supplied by callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupervisorInput {
    /// The supervisor's user id, if they are a registered user.
    pub id: Option<String>,
    /// The supervisor's display name.
    pub name: Option<String>,
    /// The supervisor's emoji.
    pub emoji: Option<String>,
}

/// API request to merge-update an event.
///
/// Absent fields leave the stored value untouched.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UpdateEventRequest {
    /// The event to update.
    pub event_id: String,
    /// Replacement title.
    pub title: Option<String>,
    /// Replacement description.
    pub description: Option<String>,
    /// Replacement event type name.
    pub event_type: Option<String>,
    /// Replacement start instant.
    pub start_time: Option<DateTime<Utc>>,
    /// Replacement end instant.
    pub end_time: Option<DateTime<Utc>>,
    /// Replacement roster capacity.
    pub max_capacity: Option<i64>,
    /// Replacement supervisor assignment.
    pub supervisor: Option<SupervisorInput>,
}

/// API response for a successful event update.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct UpdateEventResponse {
    /// The event after the update.
    pub event: EventInfo,
    /// A success message.
    pub message: String,
}

/// API response for a successful event deletion.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DeleteEventResponse {
    /// The deleted event id.
    pub event_id: String,
    /// The number of sign-ups removed with the event.
    pub removed_sign_ups: usize,
    /// A success message.
    pub message: String,
}

/// API request to sign a user up for an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignUpRequest {
    /// The target event id.
    pub event_id: String,
    /// The user joining the roster.
    pub user_id: String,
    /// Privileged capacity override.
    pub forced: bool,
}

/// API response for a successful sign-up.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SignUpResponse {
    /// The store-assigned sign-up id.
    pub sign_up_id: String,
    /// The event joined.
    pub event_id: String,
    /// The user on the roster.
    pub user_id: String,
    /// The recorded instant (RFC 3339).
    pub signed_up_at: String,
    /// A success message.
    pub message: String,
}

/// API request to cancel a sign-up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CancelSignUpRequest {
    /// The event id.
    pub event_id: String,
    /// The user leaving the roster.
    pub user_id: String,
}

/// API response for a successful cancellation.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CancelSignUpResponse {
    /// The event id.
    pub event_id: String,
    /// The user removed from the roster.
    pub user_id: String,
    /// The number of sign-up rows removed.
    pub removed: usize,
    /// A success message.
    pub message: String,
}

/// Serializable event view.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct EventInfo {
    /// The event id.
    pub event_id: String,
    /// Event title.
    pub title: String,
    /// Event description.
    pub description: String,
    /// Event type name.
    pub event_type: String,
    /// Start instant (RFC 3339).
    pub start_time: String,
    /// End instant (RFC 3339).
    pub end_time: String,
    /// Roster capacity; 0 means unlimited.
    pub max_capacity: u32,
    /// Lifecycle status ("draft" or "published").
    pub status: String,
    /// The creating coordinator, if known.
    pub coordinator_id: Option<String>,
    /// The assigned supervisor, if any.
    pub supervisor: Option<SupervisorInfo>,
    /// Most recent publish instant (RFC 3339), if ever published.
    pub published_at: Option<String>,
    /// Creation instant (RFC 3339).
    pub created_at: Option<String>,
    /// Last modification instant (RFC 3339).
    pub updated_at: Option<String>,
}

/// Serializable supervisor view.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SupervisorInfo {
    /// The supervisor's user id, if they are a registered user.
    pub id: Option<String>,
    /// The supervisor's display name.
    pub name: Option<String>,
    /// The supervisor's emoji.
    pub emoji: Option<String>,
}

impl SupervisorInfo {
    /// Builds the view from the domain record.
    #[must_use]
    pub fn from_supervisor(supervisor: &Supervisor) -> Self {
        Self {
            id: supervisor.id().map(|id| id.value().to_string()),
            name: supervisor.name().map(ToString::to_string),
            emoji: supervisor.emoji().map(ToString::to_string),
        }
    }
}

impl EventInfo {
    /// Builds the view from a persisted domain event.
    #[must_use]
    pub fn from_event(event: &Event) -> Self {
        Self {
            event_id: event
                .event_id
                .as_ref()
                .map(|id| id.value().to_string())
                .unwrap_or_default(),
            title: event.title.clone(),
            description: event.description.clone(),
            event_type: event.event_type.as_str().to_string(),
            start_time: event.start_time.to_rfc3339(),
            end_time: event.end_time.to_rfc3339(),
            max_capacity: event.max_capacity,
            status: event.status.as_str().to_string(),
            coordinator_id: event
                .coordinator_id
                .as_ref()
                .map(|id| id.value().to_string()),
            supervisor: event.supervisor.as_ref().map(SupervisorInfo::from_supervisor),
            published_at: event.published_at.map(|t| t.to_rfc3339()),
            created_at: event.created_at.map(|t| t.to_rfc3339()),
            updated_at: event.updated_at.map(|t| t.to_rfc3339()),
        }
    }
}

/// API response for a role-filtered event listing.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ListEventsResponse {
    /// The role the listing was filtered for.
    pub role: String,
    /// The visible events, ascending by start time.
    pub events: Vec<EventInfo>,
}

/// Serializable sign-up view.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SignUpInfo {
    /// The sign-up id.
    pub sign_up_id: String,
    /// The event id.
    pub event_id: String,
    /// The user id.
    pub user_id: String,
    /// The recorded instant (RFC 3339).
    pub signed_up_at: String,
}

impl SignUpInfo {
    /// Builds the view from a persisted domain sign-up.
    #[must_use]
    pub fn from_sign_up(sign_up: &SignUp) -> Self {
        Self {
            sign_up_id: sign_up.sign_up_id.clone().unwrap_or_default(),
            event_id: sign_up.event_id.value().to_string(),
            user_id: sign_up.user_id.value().to_string(),
            signed_up_at: sign_up.signed_up_at.to_rfc3339(),
        }
    }
}

/// API response for sign-up listings.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ListSignUpsResponse {
    /// The matching sign-ups, oldest first.
    pub sign_ups: Vec<SignUpInfo>,
}

/// Serializable user view.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct UserInfo {
    /// The provider uid.
    pub user_id: String,
    /// The human-facing id number.
    pub id_number: String,
    /// Display name.
    pub name: String,
    /// Role name.
    pub role: String,
}

impl UserInfo {
    /// Builds the view from the domain user.
    #[must_use]
    pub fn from_user(user: &User) -> Self {
        Self {
            user_id: user.user_id.value().to_string(),
            id_number: user.id_number.clone(),
            name: user.name.clone(),
            role: user.role.as_str().to_string(),
        }
    }
}

/// API response for the users collection listing.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ListUsersResponse {
    /// The users, ordered by id number.
    pub users: Vec<UserInfo>,
}

/// API request to create or overwrite a user record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpsertUserRequest {
    /// The provider uid.
    pub user_id: String,
    /// The human-facing id number (3-10 digits).
    pub id_number: String,
    /// Display name.
    pub name: String,
    /// Role name.
    pub role: String,
}

/// API response for a successful user write.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct UpsertUserResponse {
    /// The provider uid.
    pub user_id: String,
    /// A success message.
    pub message: String,
}

/// API request naming the events a batch operation targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchEventIdsRequest {
    /// The target event ids.
    pub event_ids: Vec<String>,
}

/// API request to assign one supervisor across many events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchAssignSupervisorRequest {
    /// The target event ids.
    pub event_ids: Vec<String>,
    /// The supervisor to assign.
    pub supervisor: SupervisorInput,
}

/// The outcome of one item in a batch operation.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct BatchOutcome {
    /// The event id the outcome refers to.
    pub event_id: String,
    /// Whether the item succeeded.
    pub success: bool,
    /// The failure message, when `success` is false.
    pub error: Option<String>,
}

impl BatchOutcome {
    /// Records a per-item result.
    #[must_use]
    pub fn from_result(event_id: &str, result: &Result<(), ApiError>) -> Self {
        match result {
            Ok(()) => Self {
                event_id: event_id.to_string(),
                success: true,
                error: None,
            },
            Err(err) => Self {
                event_id: event_id.to_string(),
                success: false,
                error: Some(err.to_string()),
            },
        }
    }
}

/// The structured result of a batch operation.
///
/// Items are independent: one failure never rolls back or blocks the
/// others, and every requested id appears exactly once in `outcomes`.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct BatchReport {
    /// The number of ids requested.
    pub requested: usize,
    /// The number of items that succeeded.
    pub succeeded: usize,
    /// One outcome per requested id, in request order.
    pub outcomes: Vec<BatchOutcome>,
}

impl BatchReport {
    /// Builds a report from per-item outcomes.
    #[must_use]
    pub fn new(outcomes: Vec<BatchOutcome>) -> Self {
        let succeeded: usize = outcomes.iter().filter(|o| o.success).count();
        Self {
            requested: outcomes.len(),
            succeeded,
            outcomes,
        }
    }

    /// Returns whether every item succeeded.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.succeeded == self.requested
    }
}
