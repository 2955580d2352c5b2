// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Queries on the `events` collection.

use diesel::prelude::*;
use diesel::SqliteConnection;
use tracing::debug;

use crate::data_models::EventRow;
use crate::diesel_schema::events;
use crate::error::StoreError;
use linha_domain::{Event, EventId, EventStatus, EventType, Role};

/// Retrieves an event by id.
///
/// # Errors
///
/// Returns `EventNotFound` if no document carries the id.
pub fn get_event(conn: &mut SqliteConnection, event_id: &EventId) -> Result<Event, StoreError> {
    let row: Option<EventRow> = events::table
        .filter(events::event_id.eq(event_id.value()))
        .select(EventRow::as_select())
        .first(conn)
        .optional()?;

    match row {
        Some(row) => row.into_event(),
        None => Err(StoreError::EventNotFound(event_id.value().to_string())),
    }
}

/// Lists every event, ascending by start time.
///
/// # Errors
///
/// Returns an error if the query fails or a document fails to parse.
pub fn list_events(conn: &mut SqliteConnection) -> Result<Vec<Event>, StoreError> {
    let rows: Vec<EventRow> = events::table
        .order(events::start_time.asc())
        .select(EventRow::as_select())
        .load(conn)?;

    rows.into_iter().map(EventRow::into_event).collect()
}

/// Lists the events visible to a role, ascending by start time.
///
/// This is a capability filter applied at query time, not a separate
/// stored state:
/// - Visitors see published events of the open types only
/// - Volunteers see every published event
/// - Coordinators and admins see everything, drafts included
///
/// # Errors
///
/// Returns an error if the query fails or a document fails to parse.
pub fn list_events_for_role(
    conn: &mut SqliteConnection,
    role: Role,
) -> Result<Vec<Event>, StoreError> {
    let query = events::table
        .order(events::start_time.asc())
        .select(EventRow::as_select());

    let rows: Vec<EventRow> = match role {
        Role::Visitor => query
            .filter(events::status.eq(EventStatus::Published.as_str()))
            .filter(events::event_type.eq_any([
                EventType::OpenEvent.as_str(),
                EventType::GeneralMeeting.as_str(),
            ]))
            .load(conn)?,
        Role::Volunteer => query
            .filter(events::status.eq(EventStatus::Published.as_str()))
            .load(conn)?,
        Role::Admin | Role::Coordinator => query.load(conn)?,
    };

    debug!(role = %role, count = rows.len(), "Listed events for role");
    rows.into_iter().map(EventRow::into_event).collect()
}
