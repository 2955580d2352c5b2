// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Row representations of the document collections and their
//! conversions to and from domain types.
//!
//! Instants are stored as RFC 3339 text in UTC so that lexicographic
//! ordering in SQL matches chronological ordering.

use crate::diesel_schema::{event_sign_ups, events, users};
use crate::error::StoreError;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use linha_domain::{Event, EventId, EventStatus, EventType, Role, SignUp, Supervisor, User, UserId};
use std::str::FromStr;

/// Diesel row struct for the `events` collection.
#[derive(Debug, Clone, Queryable, Selectable, Insertable)]
#[diesel(table_name = events)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct EventRow {
    pub event_id: String,
    pub title: String,
    pub description: String,
    pub event_type: String,
    pub start_time: String,
    pub end_time: String,
    pub max_capacity: i32,
    pub status: String,
    pub coordinator_id: Option<String>,
    pub supervisor_json: Option<String>,
    pub published_at: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// Diesel row struct for the `event_sign_ups` collection.
#[derive(Debug, Clone, Queryable, Selectable, Insertable)]
#[diesel(table_name = event_sign_ups)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct SignUpRow {
    pub sign_up_id: String,
    pub event_id: String,
    pub user_id: String,
    pub signed_up_at: String,
}

/// Diesel row struct for the `users` collection.
#[derive(Debug, Clone, Queryable, Selectable, Insertable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct UserRow {
    pub user_id: String,
    pub id_number: String,
    pub name: String,
    pub role: String,
}

/// Formats an instant for storage.
#[must_use]
pub fn format_instant(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339()
}

/// Parses a stored instant.
///
/// # Errors
///
/// Returns a `SerializationError` naming the offending value.
pub fn parse_instant(value: &str) -> Result<DateTime<Utc>, StoreError> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| StoreError::SerializationError(format!("Invalid stored instant '{value}': {e}")))
}

impl EventRow {
    /// Builds a row from a domain event and store-assigned metadata.
    ///
    /// # Errors
    ///
    /// Returns an error if the supervisor sub-document cannot be
    /// serialized or the capacity does not fit the column type.
    pub fn from_event(
        event: &Event,
        event_id: &str,
        created_at: &str,
        updated_at: &str,
    ) -> Result<Self, StoreError> {
        let supervisor_json: Option<String> = match &event.supervisor {
            Some(supervisor) => Some(serde_json::to_string(supervisor)?),
            None => None,
        };
        let max_capacity: i32 = i32::try_from(event.max_capacity).map_err(|_| {
            StoreError::SerializationError(format!(
                "Event capacity {} exceeds the storable range",
                event.max_capacity
            ))
        })?;

        Ok(Self {
            event_id: event_id.to_string(),
            title: event.title.clone(),
            description: event.description.clone(),
            event_type: event.event_type.as_str().to_string(),
            start_time: format_instant(event.start_time),
            end_time: format_instant(event.end_time),
            max_capacity,
            status: event.status.as_str().to_string(),
            coordinator_id: event.coordinator_id.as_ref().map(|id| id.value().to_string()),
            supervisor_json,
            published_at: event.published_at.map(format_instant),
            created_at: created_at.to_string(),
            updated_at: updated_at.to_string(),
        })
    }

    /// Reconstructs the domain event from this row.
    ///
    /// # Errors
    ///
    /// Returns a `SerializationError` if any stored field fails to parse.
    pub fn into_event(self) -> Result<Event, StoreError> {
        let event_type: EventType = EventType::parse(&self.event_type)
            .map_err(|e| StoreError::SerializationError(e.to_string()))?;
        let status: EventStatus = EventStatus::from_str(&self.status)
            .map_err(|e| StoreError::SerializationError(e.to_string()))?;
        let supervisor: Option<Supervisor> = match &self.supervisor_json {
            Some(json) => Some(serde_json::from_str(json)?),
            None => None,
        };
        let max_capacity: u32 = u32::try_from(self.max_capacity).map_err(|_| {
            StoreError::SerializationError(format!(
                "Stored capacity {} is negative",
                self.max_capacity
            ))
        })?;

        Ok(Event {
            event_id: Some(EventId::new(&self.event_id)),
            title: self.title,
            description: self.description,
            event_type,
            start_time: parse_instant(&self.start_time)?,
            end_time: parse_instant(&self.end_time)?,
            max_capacity,
            status,
            coordinator_id: self.coordinator_id.as_deref().map(UserId::new),
            supervisor,
            published_at: self
                .published_at
                .as_deref()
                .map(parse_instant)
                .transpose()?,
            created_at: Some(parse_instant(&self.created_at)?),
            updated_at: Some(parse_instant(&self.updated_at)?),
        })
    }
}

impl SignUpRow {
    /// Reconstructs the domain sign-up from this row.
    ///
    /// # Errors
    ///
    /// Returns a `SerializationError` if the stored instant fails to parse.
    pub fn into_sign_up(self) -> Result<SignUp, StoreError> {
        Ok(SignUp {
            sign_up_id: Some(self.sign_up_id),
            event_id: EventId::new(&self.event_id),
            user_id: UserId::new(&self.user_id),
            signed_up_at: parse_instant(&self.signed_up_at)?,
        })
    }
}

impl UserRow {
    /// Builds a row from a domain user.
    #[must_use]
    pub fn from_user(user: &User) -> Self {
        Self {
            user_id: user.user_id.value().to_string(),
            id_number: user.id_number.clone(),
            name: user.name.clone(),
            role: user.role.as_str().to_string(),
        }
    }

    /// Reconstructs the domain user from this row.
    ///
    /// # Errors
    ///
    /// Returns a `SerializationError` if the stored role fails to parse.
    pub fn into_user(self) -> Result<User, StoreError> {
        let role: Role =
            Role::parse(&self.role).map_err(|e| StoreError::SerializationError(e.to_string()))?;
        Ok(User {
            user_id: UserId::new(&self.user_id),
            id_number: self.id_number,
            name: self.name,
            role,
        })
    }
}
