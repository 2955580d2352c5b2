// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Document-store gateway for the Linha scheduler.
//!
//! This crate persists the `events`, `event_sign_ups`, and `users`
//! collections. It is built on Diesel over `SQLite` with embedded
//! migrations.
//!
//! ## Document semantics
//!
//! The collections behave like a hosted document store, not a relational
//! schema:
//!
//! - Document ids are store-assigned opaque strings
//! - Instants are RFC 3339 text in UTC
//! - The supervisor record is a JSON sub-document
//! - There are no cross-collection foreign keys; the event deletion
//!   cascade is performed explicitly in a transaction
//!
//! ## Write guarantees
//!
//! - Bulk generation writes commit in chunks of at most
//!   [`BATCH_WRITE_LIMIT`] documents, one transaction per chunk. A
//!   failing chunk aborts that chunk only; earlier chunks remain.
//! - Sign-up creation runs the admission policy inside its transaction,
//!   so the capacity and uniqueness invariants hold under concurrent
//!   callers instead of relying on a separate check-then-act read.
//!
//! ## Testing
//!
//! Tests run against unique in-memory databases; an atomic counter
//! (not a timestamp) names them, eliminating collision flakes.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

use diesel::SqliteConnection;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

use linha_domain::{Event, EventId, Role, SignUp, User, UserId};

mod backend;
mod data_models;
mod diesel_schema;
mod error;
mod mutations;
mod queries;

#[cfg(test)]
mod tests;

pub use error::StoreError;

/// Maximum writes per committed chunk.
///
/// Hosted document stores bound batched writes around 500 operations;
/// staying at 400 leaves headroom, matching the behavior this store
/// replaces.
pub const BATCH_WRITE_LIMIT: usize = 400;

/// Atomic counter for generating unique in-memory database names.
///
/// This ensures deterministic test isolation by eliminating time-based
/// collisions. Each call to `new_in_memory()` receives a unique
/// sequential ID.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Store adapter over the document collections.
///
/// All operations suspend the caller until the store responds and
/// propagate the first error encountered; nothing is retried here.
pub struct Store {
    conn: SqliteConnection,
}

impl Store {
    /// Creates a store over an in-memory `SQLite` database.
    ///
    /// Each call receives a unique database instance via atomic counter,
    /// ensuring deterministic test isolation.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, StoreError> {
        let db_id: u64 = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let db_name: String = format!("linha_memdb_{db_id}");
        let shared_memory_url: String = format!("file:{db_name}?mode=memory&cache=shared");

        let mut conn: SqliteConnection = backend::initialize_database(&shared_memory_url)?;
        backend::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn })
    }

    /// Creates a store over a file-based `SQLite` database.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let path_str: &str = path
            .as_ref()
            .to_str()
            .ok_or_else(|| StoreError::InitializationError("Invalid database path".to_string()))?;

        let mut conn: SqliteConnection = backend::initialize_database(path_str)?;
        backend::enable_wal_mode(&mut conn)?;
        backend::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn })
    }

    // ========================================================================
    // Events collection
    // ========================================================================

    /// Inserts a single event document and returns the assigned id.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    pub fn insert_event(&mut self, event: &Event) -> Result<EventId, StoreError> {
        mutations::events::insert_event(&mut self.conn, event)
    }

    /// Inserts many event documents in bounded chunks.
    ///
    /// Each chunk commits atomically; cross-chunk atomicity is not
    /// provided. Returns the number of documents written.
    ///
    /// # Errors
    ///
    /// Returns the first chunk error; earlier chunks remain committed.
    pub fn insert_events_batched(&mut self, batch: &[Event]) -> Result<usize, StoreError> {
        mutations::events::insert_events_batched(&mut self.conn, batch)
    }

    /// Retrieves an event by id.
    ///
    /// # Errors
    ///
    /// Returns `EventNotFound` if the id is absent.
    pub fn get_event(&mut self, event_id: &EventId) -> Result<Event, StoreError> {
        queries::events::get_event(&mut self.conn, event_id)
    }

    /// Replaces a persisted event document, refreshing `updated_at`.
    ///
    /// # Errors
    ///
    /// Returns `EventNotFound` if the id is absent.
    pub fn replace_event(&mut self, event: &Event) -> Result<(), StoreError> {
        mutations::events::replace_event(&mut self.conn, event)
    }

    /// Deletes an event and its sign-ups in one transaction.
    ///
    /// Returns the number of sign-ups removed with the event.
    ///
    /// # Errors
    ///
    /// Returns `EventNotFound` if the id is absent.
    pub fn delete_event(&mut self, event_id: &EventId) -> Result<usize, StoreError> {
        mutations::events::delete_event(&mut self.conn, event_id)
    }

    /// Lists every event, ascending by start time.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_events(&mut self) -> Result<Vec<Event>, StoreError> {
        queries::events::list_events(&mut self.conn)
    }

    /// Lists the events visible to a role, ascending by start time.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_events_for_role(&mut self, role: Role) -> Result<Vec<Event>, StoreError> {
        queries::events::list_events_for_role(&mut self.conn, role)
    }

    // ========================================================================
    // Sign-ups collection
    // ========================================================================

    /// Creates a sign-up, enforcing admission transactionally.
    ///
    /// # Errors
    ///
    /// Returns `EventNotFound`, or `Rejected` with the admission
    /// failure (capacity or duplicate).
    pub fn create_sign_up(
        &mut self,
        event_id: &EventId,
        user_id: &UserId,
        forced: bool,
    ) -> Result<SignUp, StoreError> {
        mutations::sign_ups::create_sign_up(&mut self.conn, event_id, user_id, forced)
    }

    /// Deletes every sign-up for an event/user pair.
    ///
    /// # Errors
    ///
    /// Returns `SignUpNotFound` if the pair has no sign-up.
    pub fn delete_sign_ups(
        &mut self,
        event_id: &EventId,
        user_id: &UserId,
    ) -> Result<usize, StoreError> {
        mutations::sign_ups::delete_sign_ups(&mut self.conn, event_id, user_id)
    }

    /// Clears every sign-up for one event.
    ///
    /// # Errors
    ///
    /// Returns `EventNotFound` if the event is absent.
    pub fn reset_sign_ups_for_event(&mut self, event_id: &EventId) -> Result<usize, StoreError> {
        mutations::sign_ups::reset_sign_ups_for_event(&mut self.conn, event_id)
    }

    /// Counts the sign-ups for one event.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn count_sign_ups_for_event(&mut self, event_id: &EventId) -> Result<usize, StoreError> {
        queries::sign_ups::count_for_event(&mut self.conn, event_id)
    }

    /// Lists the sign-ups for one event, oldest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn sign_ups_for_event(&mut self, event_id: &EventId) -> Result<Vec<SignUp>, StoreError> {
        queries::sign_ups::for_event(&mut self.conn, event_id)
    }

    /// Lists the sign-ups for one user, oldest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn sign_ups_for_user(&mut self, user_id: &UserId) -> Result<Vec<SignUp>, StoreError> {
        queries::sign_ups::for_user(&mut self.conn, user_id)
    }

    /// Lists every sign-up across all events.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_all_sign_ups(&mut self) -> Result<Vec<SignUp>, StoreError> {
        queries::sign_ups::list_all(&mut self.conn)
    }

    // ========================================================================
    // Users collection
    // ========================================================================

    /// Creates or overwrites a user document.
    ///
    /// # Errors
    ///
    /// Returns an error if the id number is malformed or the write fails.
    pub fn upsert_user(&mut self, user: &User) -> Result<(), StoreError> {
        mutations::users::upsert_user(&mut self.conn, user)
    }

    /// Retrieves a user by provider uid.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_user(&mut self, user_id: &UserId) -> Result<Option<User>, StoreError> {
        queries::users::get_user(&mut self.conn, user_id)
    }

    /// Lists every user, ordered by id number.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_users(&mut self) -> Result<Vec<User>, StoreError> {
        queries::users::list_users(&mut self.conn)
    }
}
