// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Mutations on the `event_sign_ups` collection.
//!
//! Sign-up creation runs the admission policy inside the write
//! transaction. Earlier revisions of this system checked capacity with a
//! separate read before an unconditional insert; two concurrent sign-ups
//! could both pass the check and overfill the roster. Running the check
//! at the serialization point removes that window.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use diesel::{Connection, SqliteConnection};
use tracing::info;

use crate::data_models::{SignUpRow, format_instant};
use crate::diesel_schema::event_sign_ups;
use crate::error::StoreError;
use crate::mutations::generate_document_id;
use crate::queries;
use linha::check_admission;
use linha_domain::{Event, EventId, SignUp, UserId};

/// Creates a sign-up, enforcing capacity and uniqueness transactionally.
///
/// # Arguments
///
/// * `event_id` - The target event
/// * `user_id` - The user joining the roster
/// * `forced` - Privileged override; bypasses the capacity check only
///
/// # Errors
///
/// Returns:
/// - `EventNotFound` if the event does not exist
/// - `Rejected(CapacityExceeded)` for a full roster without `forced`
/// - `Rejected(AlreadySignedUp)` for a duplicate pair, forced or not
pub fn create_sign_up(
    conn: &mut SqliteConnection,
    event_id: &EventId,
    user_id: &UserId,
    forced: bool,
) -> Result<SignUp, StoreError> {
    conn.transaction::<SignUp, StoreError, _>(|conn| {
        let event: Event = queries::events::get_event(conn, event_id)?;
        let current: usize = queries::sign_ups::count_for_event(conn, event_id)?;
        let already_signed_up: bool = queries::sign_ups::exists_for_pair(conn, event_id, user_id)?;

        check_admission(&event, user_id, current, already_signed_up, forced)
            .map_err(StoreError::Rejected)?;

        let signed_up_at: DateTime<Utc> = Utc::now();
        let row: SignUpRow = SignUpRow {
            sign_up_id: generate_document_id(),
            event_id: event_id.value().to_string(),
            user_id: user_id.value().to_string(),
            signed_up_at: format_instant(signed_up_at),
        };

        diesel::insert_into(event_sign_ups::table)
            .values(&row)
            .execute(conn)?;

        info!(
            event_id = %event_id,
            user_id = %user_id,
            forced,
            "Sign-up recorded"
        );

        Ok(SignUp {
            sign_up_id: Some(row.sign_up_id),
            event_id: event_id.clone(),
            user_id: user_id.clone(),
            signed_up_at,
        })
    })
}

/// Deletes every sign-up for an event/user pair.
///
/// Deleting all matching rows is deliberate: should the uniqueness
/// invariant ever have been violated, cancellation still clears the
/// whole pair.
///
/// # Returns
///
/// The number of rows removed (at least one).
///
/// # Errors
///
/// Returns `SignUpNotFound` if no sign-up exists for the pair; the
/// store is left unchanged.
pub fn delete_sign_ups(
    conn: &mut SqliteConnection,
    event_id: &EventId,
    user_id: &UserId,
) -> Result<usize, StoreError> {
    let removed: usize = diesel::delete(event_sign_ups::table)
        .filter(event_sign_ups::event_id.eq(event_id.value()))
        .filter(event_sign_ups::user_id.eq(user_id.value()))
        .execute(conn)?;

    if removed == 0 {
        return Err(StoreError::SignUpNotFound {
            event_id: event_id.value().to_string(),
            user_id: user_id.value().to_string(),
        });
    }

    info!(event_id = %event_id, user_id = %user_id, removed, "Sign-up cancelled");
    Ok(removed)
}

/// Clears every sign-up for one event in a single transaction.
///
/// The event must exist; resetting a missing event is an error rather
/// than a silent no-op so batch callers can report it.
///
/// # Returns
///
/// The number of sign-ups removed (possibly zero).
///
/// # Errors
///
/// Returns `EventNotFound` if the event does not exist.
pub fn reset_sign_ups_for_event(
    conn: &mut SqliteConnection,
    event_id: &EventId,
) -> Result<usize, StoreError> {
    conn.transaction::<usize, StoreError, _>(|conn| {
        // Existence check keeps "reset an absent event" an error
        let _event: Event = queries::events::get_event(conn, event_id)?;

        let removed: usize = diesel::delete(event_sign_ups::table)
            .filter(event_sign_ups::event_id.eq(event_id.value()))
            .execute(conn)?;

        info!(event_id = %event_id, removed, "Roster reset");
        Ok(removed)
    })
}
