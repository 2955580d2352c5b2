// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Mutations on the `users` collection.
//!
//! User records mirror the identity provider and are written with
//! create-or-overwrite semantics (the provider is the source of truth).

use diesel::prelude::*;
use diesel::SqliteConnection;
use tracing::info;

use crate::data_models::UserRow;
use crate::diesel_schema::users;
use crate::error::StoreError;
use linha_domain::{User, validate_id_number};

/// Creates or overwrites a user document keyed by the provider uid.
///
/// # Errors
///
/// Returns an error if the id number is malformed or the write fails.
pub fn upsert_user(conn: &mut SqliteConnection, user: &User) -> Result<(), StoreError> {
    validate_id_number(&user.id_number)
        .map_err(|e| StoreError::SerializationError(e.to_string()))?;

    let row: UserRow = UserRow::from_user(user);

    diesel::replace_into(users::table)
        .values(&row)
        .execute(conn)?;

    info!(user_id = %user.user_id, role = %user.role, "User record written");
    Ok(())
}
