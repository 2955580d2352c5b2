// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::{Date, Time, Weekday};

/// Represents the lifecycle state of an event.
///
/// Events begin as drafts, visible only to coordinators and admins.
/// Publishing makes an event visible to lower-privileged roles; a
/// published event can be pulled back to draft at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    /// Initial state after creation. Hidden from volunteers and visitors.
    #[default]
    Draft,
    /// Visible to roles permitted by the event type.
    Published,
}

impl FromStr for EventStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(Self::Draft),
            "published" => Ok(Self::Published),
            _ => Err(DomainError::InvalidStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for EventStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl EventStatus {
    /// Converts this status to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Published => "published",
        }
    }

    /// Returns whether the event is visible to non-privileged roles.
    #[must_use]
    pub const fn is_published(&self) -> bool {
        matches!(self, Self::Published)
    }
}

/// Represents an event type classification.
///
/// Event types are fixed domain constants. `Shift` is the high-volume
/// type generated in bulk via recurrence rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventType {
    /// A helpline duty shift.
    Shift,
    /// A teambuilding activity.
    Teambuilding,
    /// An event open to the general public.
    OpenEvent,
    /// A coordination team meeting.
    CoordinationMeeting,
    /// A general assembly of the whole organization.
    GeneralMeeting,
}

impl EventType {
    /// Parses an event type from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the string does not match a valid event type.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s {
            "Shift" => Ok(Self::Shift),
            "Teambuilding" => Ok(Self::Teambuilding),
            "OpenEvent" => Ok(Self::OpenEvent),
            "CoordinationMeeting" => Ok(Self::CoordinationMeeting),
            "GeneralMeeting" => Ok(Self::GeneralMeeting),
            _ => Err(DomainError::InvalidEventType(format!(
                "Unknown event type: {s}"
            ))),
        }
    }

    /// Returns the string representation of this event type.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Shift => "Shift",
            Self::Teambuilding => "Teambuilding",
            Self::OpenEvent => "OpenEvent",
            Self::CoordinationMeeting => "CoordinationMeeting",
            Self::GeneralMeeting => "GeneralMeeting",
        }
    }

    /// Returns whether events of this type may be shown to visitors
    /// once published.
    #[must_use]
    pub const fn open_to_visitors(&self) -> bool {
        matches!(self, Self::OpenEvent | Self::GeneralMeeting)
    }
}

impl std::fmt::Display for EventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Represents the role of an acting principal.
///
/// Roles are supplied by the identity provider and trusted as-is;
/// the scheduling core performs no independent verification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Full administrative authority, including user management.
    Admin,
    /// May create, publish, and manage events and act on behalf of users.
    Coordinator,
    /// May view published events and join rosters.
    Volunteer,
    /// May view published open events only. Cannot join rosters.
    Visitor,
}

impl Role {
    /// Parses a role from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the string does not match a valid role.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s {
            "Admin" => Ok(Self::Admin),
            "Coordinator" => Ok(Self::Coordinator),
            "Volunteer" => Ok(Self::Volunteer),
            "Visitor" => Ok(Self::Visitor),
            _ => Err(DomainError::InvalidRole(format!("Unknown role: {s}"))),
        }
    }

    /// Returns the string representation of this role.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::Coordinator => "Coordinator",
            Self::Volunteer => "Volunteer",
            Self::Visitor => "Visitor",
        }
    }

    /// Returns whether this role may create and manage events.
    #[must_use]
    pub const fn can_manage_events(&self) -> bool {
        matches!(self, Self::Admin | Self::Coordinator)
    }

    /// Returns whether this role may join event rosters.
    #[must_use]
    pub const fn can_sign_up(&self) -> bool {
        !matches!(self, Self::Visitor)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Opaque identifier of an event document, assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EventId {
    value: String,
}

impl EventId {
    /// Creates a new `EventId` from its string form.
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self {
            value: value.to_string(),
        }
    }

    /// Returns the identifier value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for EventId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Opaque identifier of a user, keyed by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId {
    value: String,
}

impl UserId {
    /// Creates a new `UserId` from its string form.
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self {
            value: value.to_string(),
        }
    }

    /// Returns the identifier value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// A supervisor assigned to an event.
///
/// Supervisors may reference a registered user by id, or be recorded by
/// name only (for people outside the system). At least one of id/name
/// must be present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Supervisor {
    id: Option<UserId>,
    name: Option<String>,
    emoji: Option<String>,
}

impl Supervisor {
    /// Creates a new `Supervisor`.
    ///
    /// # Errors
    ///
    /// Returns an error if both `id` and `name` are absent.
    pub fn new(
        id: Option<UserId>,
        name: Option<String>,
        emoji: Option<String>,
    ) -> Result<Self, DomainError> {
        if id.is_none() && name.is_none() {
            return Err(DomainError::InvalidSupervisor(
                "A supervisor requires an id or a name",
            ));
        }
        Ok(Self { id, name, emoji })
    }

    /// Returns the supervisor's user id, if they are a registered user.
    #[must_use]
    pub const fn id(&self) -> Option<&UserId> {
        self.id.as_ref()
    }

    /// Returns the supervisor's display name, if recorded.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns the supervisor's emoji, if recorded.
    #[must_use]
    pub fn emoji(&self) -> Option<&str> {
        self.emoji.as_deref()
    }
}

/// A schedulable event: a shift, meeting, or activity with a time window
/// and an optional capacity bound.
///
/// `event_id`, `created_at`, and `updated_at` are assigned by the store
/// and are `None` until the event has been persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Store-assigned identifier. `None` before first persistence.
    pub event_id: Option<EventId>,
    /// Short human-readable title. Never empty.
    pub title: String,
    /// Free-form description. May be empty.
    pub description: String,
    /// The event type classification.
    pub event_type: EventType,
    /// Start instant (UTC).
    pub start_time: DateTime<Utc>,
    /// End instant (UTC). Always after `start_time`.
    pub end_time: DateTime<Utc>,
    /// Roster capacity. Zero means unlimited.
    pub max_capacity: u32,
    /// Lifecycle state.
    pub status: EventStatus,
    /// The user who created the event, if known.
    pub coordinator_id: Option<UserId>,
    /// The supervisor on duty, if assigned.
    pub supervisor: Option<Supervisor>,
    /// Instant of the most recent publish. Retained across unpublish.
    pub published_at: Option<DateTime<Utc>>,
    /// Store-managed creation instant.
    pub created_at: Option<DateTime<Utc>>,
    /// Store-managed last-modification instant.
    pub updated_at: Option<DateTime<Utc>>,
}

impl Event {
    /// Creates a new draft `Event` without a persisted id.
    ///
    /// Store-managed fields start empty and are populated on insert.
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        title: String,
        description: String,
        event_type: EventType,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
        max_capacity: u32,
        coordinator_id: Option<UserId>,
    ) -> Self {
        Self {
            event_id: None,
            title,
            description,
            event_type,
            start_time,
            end_time,
            max_capacity,
            status: EventStatus::Draft,
            coordinator_id,
            supervisor: None,
            published_at: None,
            created_at: None,
            updated_at: None,
        }
    }

    /// Returns whether the event accepts any number of sign-ups.
    #[must_use]
    pub const fn is_unlimited(&self) -> bool {
        self.max_capacity == 0
    }
}

/// A record linking one user to one event's roster.
///
/// At most one sign-up may exist per `(event, user)` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignUp {
    /// Store-assigned identifier. `None` before first persistence.
    pub sign_up_id: Option<String>,
    /// The event joined.
    pub event_id: EventId,
    /// The user on the roster.
    pub user_id: UserId,
    /// Instant the sign-up was recorded.
    pub signed_up_at: DateTime<Utc>,
}

impl SignUp {
    /// Creates a new `SignUp` without a persisted id.
    #[must_use]
    pub const fn new(event_id: EventId, user_id: UserId, signed_up_at: DateTime<Utc>) -> Self {
        Self {
            sign_up_id: None,
            event_id,
            user_id,
            signed_up_at,
        }
    }
}

/// A user record, consumed read-mostly by the scheduling core.
///
/// Identity and role are owned by the identity provider; this is the
/// projection the scheduler needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Identity-provider key.
    pub user_id: UserId,
    /// Human-facing identifier (3-10 digits).
    pub id_number: String,
    /// Display name.
    pub name: String,
    /// Role claim.
    pub role: Role,
}

/// A caller-supplied exclusion applied during recurrence expansion.
///
/// Rules are combined with OR semantics: a date excluded by any rule is
/// excluded. Rules are ephemeral inputs and never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RestrictionRule {
    /// Excludes exactly one calendar date.
    Day {
        /// The excluded date.
        date: Date,
    },
    /// Excludes every date in an inclusive range.
    Interval {
        /// First excluded date.
        start: Date,
        /// Last excluded date.
        end: Date,
    },
}

impl RestrictionRule {
    /// Returns whether this rule excludes the given date.
    #[must_use]
    pub fn covers(&self, date: Date) -> bool {
        match self {
            Self::Day { date: excluded } => *excluded == date,
            Self::Interval { start, end } => *start <= date && date <= *end,
        }
    }
}

/// The weekday pattern applied during recurrence expansion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecurrencePattern {
    /// Monday through Friday.
    Weekdays,
    /// Saturday and Sunday.
    Weekends,
    /// Every day.
    All,
}

impl RecurrencePattern {
    /// Parses a pattern from its wizard string form.
    ///
    /// # Errors
    ///
    /// Returns an error if the string does not match a valid pattern.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s {
            "weekdays" => Ok(Self::Weekdays),
            "weekends" => Ok(Self::Weekends),
            "all" => Ok(Self::All),
            _ => Err(DomainError::InvalidPattern(format!(
                "Unknown recurrence pattern: {s}"
            ))),
        }
    }

    /// Returns the string representation of this pattern.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Weekdays => "weekdays",
            Self::Weekends => "weekends",
            Self::All => "all",
        }
    }

    /// Returns whether a weekday matches this pattern.
    #[must_use]
    pub const fn matches(&self, weekday: Weekday) -> bool {
        match self {
            Self::Weekdays => !matches!(weekday, Weekday::Saturday | Weekday::Sunday),
            Self::Weekends => matches!(weekday, Weekday::Saturday | Weekday::Sunday),
            Self::All => true,
        }
    }
}

impl std::fmt::Display for RecurrencePattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One daily shift window as wall-clock times.
///
/// A window whose end time is not after its start time ends on the next
/// calendar day (e.g. 22:30-01:00).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftWindowSpec {
    start: Time,
    end: Time,
}

impl ShiftWindowSpec {
    /// Creates a new `ShiftWindowSpec`.
    #[must_use]
    pub const fn new(start: Time, end: Time) -> Self {
        Self { start, end }
    }

    /// Returns the wall-clock start time.
    #[must_use]
    pub const fn start(&self) -> Time {
        self.start
    }

    /// Returns the wall-clock end time.
    #[must_use]
    pub const fn end(&self) -> Time {
        self.end
    }

    /// Returns whether the window ends on the following calendar day.
    #[must_use]
    pub fn ends_next_day(&self) -> bool {
        self.end <= self.start
    }
}

/// The shift-generation policy.
///
/// Everything the recurring generator hardcoded in earlier revisions
/// lives here so the policy is testable and substitutable: the declared
/// timezone, the generated title and per-shift capacity, and the ordered
/// daily windows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftPolicy {
    timezone: String,
    title: String,
    capacity: u32,
    windows: Vec<ShiftWindowSpec>,
}

impl ShiftPolicy {
    /// Creates a new `ShiftPolicy`.
    ///
    /// # Arguments
    ///
    /// * `timezone` - IANA timezone name the wall-clock times refer to
    /// * `title` - Title stamped on every generated shift
    /// * `capacity` - Roster capacity per generated shift (0 = unlimited)
    /// * `windows` - Ordered daily shift windows
    ///
    /// # Errors
    ///
    /// Returns an error if the timezone cannot be parsed, the title is
    /// empty, the window list is empty, or any window is zero-length.
    pub fn new(
        timezone: String,
        title: String,
        capacity: u32,
        windows: Vec<ShiftWindowSpec>,
    ) -> Result<Self, DomainError> {
        if timezone.parse::<chrono_tz::Tz>().is_err() {
            return Err(DomainError::InvalidTimezone(timezone));
        }
        if title.trim().is_empty() {
            return Err(DomainError::InvalidShiftPolicy {
                reason: String::from("Generated shift title cannot be empty"),
            });
        }
        if windows.is_empty() {
            return Err(DomainError::InvalidShiftPolicy {
                reason: String::from("At least one daily shift window is required"),
            });
        }
        if windows.iter().any(|w| w.start() == w.end()) {
            return Err(DomainError::InvalidShiftPolicy {
                reason: String::from("Shift windows cannot be zero-length"),
            });
        }
        Ok(Self {
            timezone,
            title,
            capacity,
            windows,
        })
    }

    /// Returns the IANA timezone name.
    #[must_use]
    pub fn timezone(&self) -> &str {
        &self.timezone
    }

    /// Returns the title stamped on generated shifts.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the roster capacity of generated shifts.
    #[must_use]
    pub const fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Returns the ordered daily shift windows.
    #[must_use]
    pub fn windows(&self) -> &[ShiftWindowSpec] {
        &self.windows
    }
}

impl Default for ShiftPolicy {
    /// The observed production policy: two nightly helpline shifts,
    /// 20:00-22:30 and 22:30-01:00 Lisbon time, one volunteer each.
    fn default() -> Self {
        Self {
            timezone: String::from("Europe/Lisbon"),
            title: String::from("Turno"),
            capacity: 1,
            windows: vec![
                ShiftWindowSpec::new(time::macros::time!(20:00), time::macros::time!(22:30)),
                ShiftWindowSpec::new(time::macros::time!(22:30), time::macros::time!(1:00)),
            ],
        }
    }
}
