// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Mutations on the `events` collection.

use chrono::Utc;
use diesel::prelude::*;
use diesel::{Connection, SqliteConnection};
use tracing::{debug, info};

use crate::BATCH_WRITE_LIMIT;
use crate::data_models::{EventRow, format_instant};
use crate::diesel_schema::{event_sign_ups, events};
use crate::error::StoreError;
use crate::mutations::generate_document_id;
use linha_domain::{Event, EventId};

/// Inserts a single event document.
///
/// The store assigns the document id and the `created_at`/`updated_at`
/// instants.
///
/// # Errors
///
/// Returns an error if the insert fails or the event cannot be
/// serialized.
pub fn insert_event(conn: &mut SqliteConnection, event: &Event) -> Result<EventId, StoreError> {
    let document_id: String = generate_document_id();
    let now: String = format_instant(Utc::now());
    let row: EventRow = EventRow::from_event(event, &document_id, &now, &now)?;

    diesel::insert_into(events::table)
        .values(&row)
        .execute(conn)?;

    info!(event_id = %document_id, title = %event.title, "Event created");
    Ok(EventId::new(&document_id))
}

/// Inserts a batch of event documents in store-sized chunks.
///
/// Each chunk of at most `BATCH_WRITE_LIMIT` documents commits in its
/// own transaction. A failing chunk aborts that chunk only: previously
/// committed chunks remain, and the error propagates to the caller.
///
/// # Returns
///
/// The number of documents written (all of them, on success).
///
/// # Errors
///
/// Returns the first chunk error encountered.
pub fn insert_events_batched(
    conn: &mut SqliteConnection,
    batch: &[Event],
) -> Result<usize, StoreError> {
    let mut written: usize = 0;

    for chunk in batch.chunks(BATCH_WRITE_LIMIT) {
        conn.transaction::<(), StoreError, _>(|conn| {
            for event in chunk {
                insert_event(conn, event)?;
            }
            Ok(())
        })?;
        written += chunk.len();
        debug!(written, total = batch.len(), "Committed generation chunk");
    }

    Ok(written)
}

/// Replaces an event document in full, refreshing `updated_at`.
///
/// `created_at` is preserved from the stored document.
///
/// # Errors
///
/// Returns `EventNotFound` if no document carries the event's id, or
/// `UnpersistedDocument` if the event has never been persisted.
pub fn replace_event(conn: &mut SqliteConnection, event: &Event) -> Result<(), StoreError> {
    let event_id: &str = event
        .event_id
        .as_ref()
        .ok_or(StoreError::UnpersistedDocument(
            "replace_event requires a persisted event",
        ))?
        .value();

    let updated: usize = diesel::update(events::table)
        .filter(events::event_id.eq(event_id))
        .set((
            events::title.eq(&event.title),
            events::description.eq(&event.description),
            events::event_type.eq(event.event_type.as_str()),
            events::start_time.eq(format_instant(event.start_time)),
            events::end_time.eq(format_instant(event.end_time)),
            events::max_capacity.eq(i32::try_from(event.max_capacity).map_err(|_| {
                StoreError::SerializationError(format!(
                    "Event capacity {} exceeds the storable range",
                    event.max_capacity
                ))
            })?),
            events::status.eq(event.status.as_str()),
            events::coordinator_id.eq(event.coordinator_id.as_ref().map(|id| id.value().to_string())),
            events::supervisor_json.eq(match &event.supervisor {
                Some(supervisor) => Some(serde_json::to_string(supervisor)?),
                None => None,
            }),
            events::published_at.eq(event.published_at.map(format_instant)),
            events::updated_at.eq(format_instant(Utc::now())),
        ))
        .execute(conn)?;

    if updated == 0 {
        return Err(StoreError::EventNotFound(event_id.to_string()));
    }

    debug!(event_id = %event_id, "Event replaced");
    Ok(())
}

/// Deletes an event and its sign-ups in one transaction.
///
/// Sign-ups are removed first so a failure never strands orphan roster
/// rows pointing at a missing event.
///
/// # Returns
///
/// The number of sign-ups removed alongside the event.
///
/// # Errors
///
/// Returns `EventNotFound` if the event does not exist; nothing is
/// deleted in that case.
pub fn delete_event(conn: &mut SqliteConnection, event_id: &EventId) -> Result<usize, StoreError> {
    conn.transaction::<usize, StoreError, _>(|conn| {
        let removed_sign_ups: usize = diesel::delete(event_sign_ups::table)
            .filter(event_sign_ups::event_id.eq(event_id.value()))
            .execute(conn)?;

        let removed_events: usize = diesel::delete(events::table)
            .filter(events::event_id.eq(event_id.value()))
            .execute(conn)?;

        if removed_events == 0 {
            return Err(StoreError::EventNotFound(event_id.value().to_string()));
        }

        info!(
            event_id = %event_id,
            removed_sign_ups,
            "Event deleted with its sign-ups"
        );
        Ok(removed_sign_ups)
    })
}
