// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use linha::CoreError;

/// Errors that can occur during store operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A database error occurred.
    DatabaseError(String),
    /// Database connection failed.
    DatabaseConnectionFailed(String),
    /// Database migration failed.
    MigrationFailed(String),
    /// Query execution failed.
    QueryFailed(String),
    /// Initialization error.
    InitializationError(String),
    /// Foreign key enforcement is not enabled.
    ForeignKeyEnforcementNotEnabled,
    /// The requested event does not exist.
    EventNotFound(String),
    /// No sign-up exists for the given event/user pair.
    SignUpNotFound {
        /// The event id.
        event_id: String,
        /// The user id.
        user_id: String,
    },
    /// A sign-up was refused by the admission policy inside the
    /// sign-up transaction.
    Rejected(CoreError),
    /// A document was written or read with an invalid shape.
    SerializationError(String),
    /// A document was expected to carry a store-assigned id but did not.
    UnpersistedDocument(&'static str),
    /// The requested resource was not found.
    NotFound(String),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DatabaseError(msg) => write!(f, "Database error: {msg}"),
            Self::DatabaseConnectionFailed(msg) => {
                write!(f, "Database connection failed: {msg}")
            }
            Self::MigrationFailed(msg) => write!(f, "Migration failed: {msg}"),
            Self::QueryFailed(msg) => write!(f, "Query failed: {msg}"),
            Self::InitializationError(msg) => write!(f, "Initialization error: {msg}"),
            Self::ForeignKeyEnforcementNotEnabled => {
                write!(f, "Foreign key enforcement is not enabled")
            }
            Self::EventNotFound(id) => write!(f, "Event not found: {id}"),
            Self::SignUpNotFound { event_id, user_id } => {
                write!(
                    f,
                    "No sign-up found for user '{user_id}' on event '{event_id}'"
                )
            }
            Self::Rejected(err) => write!(f, "Sign-up rejected: {err}"),
            Self::SerializationError(msg) => write!(f, "Serialization error: {msg}"),
            Self::UnpersistedDocument(msg) => {
                write!(f, "Document has no store-assigned id: {msg}")
            }
            Self::NotFound(msg) => write!(f, "Not found: {msg}"),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<diesel::result::Error> for StoreError {
    fn from(err: diesel::result::Error) -> Self {
        match err {
            diesel::result::Error::NotFound => Self::NotFound("Record not found".to_string()),
            _ => Self::DatabaseError(err.to_string()),
        }
    }
}

impl From<diesel::ConnectionError> for StoreError {
    fn from(err: diesel::ConnectionError) -> Self {
        Self::DatabaseConnectionFailed(err.to_string())
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}
