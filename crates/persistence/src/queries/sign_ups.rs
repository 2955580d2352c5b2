// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Queries on the `event_sign_ups` collection.

use diesel::prelude::*;
use diesel::SqliteConnection;

use crate::data_models::SignUpRow;
use crate::diesel_schema::event_sign_ups;
use crate::error::StoreError;
use linha_domain::{EventId, SignUp, UserId};

/// Counts the sign-ups for one event.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn count_for_event(
    conn: &mut SqliteConnection,
    event_id: &EventId,
) -> Result<usize, StoreError> {
    let count: i64 = event_sign_ups::table
        .filter(event_sign_ups::event_id.eq(event_id.value()))
        .count()
        .get_result(conn)?;

    usize::try_from(count)
        .map_err(|_| StoreError::QueryFailed(format!("Negative sign-up count: {count}")))
}

/// Returns whether a sign-up exists for an event/user pair.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn exists_for_pair(
    conn: &mut SqliteConnection,
    event_id: &EventId,
    user_id: &UserId,
) -> Result<bool, StoreError> {
    let count: i64 = event_sign_ups::table
        .filter(event_sign_ups::event_id.eq(event_id.value()))
        .filter(event_sign_ups::user_id.eq(user_id.value()))
        .count()
        .get_result(conn)?;

    Ok(count > 0)
}

/// Lists the sign-ups for one event, oldest first.
///
/// # Errors
///
/// Returns an error if the query fails or a document fails to parse.
pub fn for_event(
    conn: &mut SqliteConnection,
    event_id: &EventId,
) -> Result<Vec<SignUp>, StoreError> {
    let rows: Vec<SignUpRow> = event_sign_ups::table
        .filter(event_sign_ups::event_id.eq(event_id.value()))
        .order(event_sign_ups::signed_up_at.asc())
        .select(SignUpRow::as_select())
        .load(conn)?;

    rows.into_iter().map(SignUpRow::into_sign_up).collect()
}

/// Lists the sign-ups for one user, oldest first.
///
/// # Errors
///
/// Returns an error if the query fails or a document fails to parse.
pub fn for_user(conn: &mut SqliteConnection, user_id: &UserId) -> Result<Vec<SignUp>, StoreError> {
    let rows: Vec<SignUpRow> = event_sign_ups::table
        .filter(event_sign_ups::user_id.eq(user_id.value()))
        .order(event_sign_ups::signed_up_at.asc())
        .select(SignUpRow::as_select())
        .load(conn)?;

    rows.into_iter().map(SignUpRow::into_sign_up).collect()
}

/// Lists every sign-up across all events.
///
/// Used by roster dashboards that join against the event list in one
/// round trip instead of querying per event.
///
/// # Errors
///
/// Returns an error if the query fails or a document fails to parse.
pub fn list_all(conn: &mut SqliteConnection) -> Result<Vec<SignUp>, StoreError> {
    let rows: Vec<SignUpRow> = event_sign_ups::table
        .order(event_sign_ups::signed_up_at.asc())
        .select(SignUpRow::as_select())
        .load(conn)?;

    rows.into_iter().map(SignUpRow::into_sign_up).collect()
}
