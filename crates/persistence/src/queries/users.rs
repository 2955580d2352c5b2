// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Queries on the `users` collection.

use diesel::prelude::*;
use diesel::SqliteConnection;

use crate::data_models::UserRow;
use crate::diesel_schema::users;
use crate::error::StoreError;
use linha_domain::{User, UserId};

/// Retrieves a user by provider uid.
///
/// # Errors
///
/// Returns an error if the query fails or the document fails to parse.
/// Returns `Ok(None)` if the user is not found.
pub fn get_user(
    conn: &mut SqliteConnection,
    user_id: &UserId,
) -> Result<Option<User>, StoreError> {
    let row: Option<UserRow> = users::table
        .filter(users::user_id.eq(user_id.value()))
        .select(UserRow::as_select())
        .first(conn)
        .optional()?;

    row.map(UserRow::into_user).transpose()
}

/// Lists every user, ordered by id number.
///
/// # Errors
///
/// Returns an error if the query fails or a document fails to parse.
pub fn list_users(conn: &mut SqliteConnection) -> Result<Vec<User>, StoreError> {
    let rows: Vec<UserRow> = users::table
        .order(users::id_number.asc())
        .select(UserRow::as_select())
        .load(conn)?;

    rows.into_iter().map(UserRow::into_user).collect()
}
