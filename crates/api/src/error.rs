// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use linha::CoreError;
use linha_domain::DomainError;
use linha_persistence::StoreError;

/// Authentication and authorization errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Authentication failed.
    AuthenticationFailed {
        /// The reason authentication failed.
        reason: String,
    },
    /// Authorization failed.
    Unauthorized {
        /// The action that was attempted.
        action: String,
        /// The role required for this action.
        required_role: String,
    },
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AuthenticationFailed { reason } => {
                write!(f, "Authentication failed: {reason}")
            }
            Self::Unauthorized {
                action,
                required_role,
            } => {
                write!(f, "Unauthorized: '{action}' requires {required_role} role")
            }
        }
    }
}

impl std::error::Error for AuthError {}

/// API-level errors.
///
/// These are distinct from domain/core/store errors and represent the
/// API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Authentication failed.
    AuthenticationFailed {
        /// The reason authentication failed.
        reason: String,
    },
    /// Authorization failed - the actor does not have permission.
    Unauthorized {
        /// The action that was attempted.
        action: String,
        /// The role required for this action.
        required_role: String,
    },
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A domain rule was violated.
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// A sign-up was refused because the roster is full.
    CapacityExceeded {
        /// The event's roster capacity.
        max_capacity: u32,
        /// The roster size at refusal time.
        current: usize,
    },
    /// A sign-up was refused because the user is already on the roster.
    DuplicateSignUp {
        /// The user already signed up.
        user_id: String,
    },
    /// The document store could not be reached or failed the request.
    StoreUnavailable {
        /// A description of the store failure.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AuthenticationFailed { reason } => {
                write!(f, "Authentication failed: {reason}")
            }
            Self::Unauthorized {
                action,
                required_role,
            } => {
                write!(f, "Unauthorized: '{action}' requires {required_role} role")
            }
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::DomainRuleViolation { rule, message } => {
                write!(f, "Domain rule violation ({rule}): {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::CapacityExceeded {
                max_capacity,
                current,
            } => {
                write!(
                    f,
                    "Event is at capacity: {current} of {max_capacity} places taken"
                )
            }
            Self::DuplicateSignUp { user_id } => {
                write!(f, "User '{user_id}' is already signed up for this event")
            }
            Self::StoreUnavailable { message } => {
                write!(f, "Store unavailable: {message}")
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::AuthenticationFailed { reason } => Self::AuthenticationFailed { reason },
            AuthError::Unauthorized {
                action,
                required_role,
            } => Self::Unauthorized {
                action,
                required_role,
            },
        }
    }
}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not
/// leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::InvalidEvent { issues } => ApiError::InvalidInput {
            field: String::from("event"),
            message: issues.join("; "),
        },
        DomainError::InvalidEventType(msg) => ApiError::InvalidInput {
            field: String::from("eventType"),
            message: msg,
        },
        DomainError::InvalidStatus(msg) => ApiError::InvalidInput {
            field: String::from("status"),
            message: msg,
        },
        DomainError::InvalidRole(msg) => ApiError::InvalidInput {
            field: String::from("role"),
            message: msg,
        },
        DomainError::InvalidPattern(msg) => ApiError::InvalidInput {
            field: String::from("recurrence"),
            message: msg,
        },
        DomainError::InvalidSupervisor(msg) => ApiError::InvalidInput {
            field: String::from("supervisor"),
            message: msg.to_string(),
        },
        DomainError::InvalidIdNumber(msg) => ApiError::InvalidInput {
            field: String::from("idNumber"),
            message: msg,
        },
        DomainError::InvalidTimezone(msg) => ApiError::InvalidInput {
            field: String::from("timezone"),
            message: format!("Invalid timezone: {msg}"),
        },
        DomainError::InvalidShiftPolicy { reason } => ApiError::InvalidInput {
            field: String::from("shiftPolicy"),
            message: reason,
        },
        DomainError::UnresolvableLocalTime { reason } => ApiError::DomainRuleViolation {
            rule: String::from("resolvable_local_time"),
            message: reason,
        },
        DomainError::DateConversion { reason } => ApiError::InvalidInput {
            field: String::from("date"),
            message: reason,
        },
    }
}

/// Translates a core error into an API error.
///
/// This translation is explicit and ensures core errors are not leaked
/// directly.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
        CoreError::CapacityExceeded {
            max_capacity,
            current,
        } => ApiError::CapacityExceeded {
            max_capacity,
            current,
        },
        CoreError::AlreadySignedUp { user_id } => ApiError::DuplicateSignUp { user_id },
    }
}

/// Translates a store error into an API error.
///
/// Admission refusals surfaced through the store's sign-up transaction
/// translate like their core counterparts; infrastructure failures
/// surface as `StoreUnavailable` for the caller to retry manually.
#[must_use]
pub fn translate_store_error(err: StoreError) -> ApiError {
    match err {
        StoreError::EventNotFound(id) => ApiError::ResourceNotFound {
            resource_type: String::from("Event"),
            message: format!("Event '{id}' does not exist"),
        },
        StoreError::SignUpNotFound { event_id, user_id } => ApiError::ResourceNotFound {
            resource_type: String::from("Sign-up"),
            message: format!("No sign-up found for user '{user_id}' on event '{event_id}'"),
        },
        StoreError::NotFound(msg) => ApiError::ResourceNotFound {
            resource_type: String::from("Resource"),
            message: msg,
        },
        StoreError::Rejected(core_err) => translate_core_error(core_err),
        StoreError::SerializationError(msg) => ApiError::Internal {
            message: format!("Store document error: {msg}"),
        },
        StoreError::UnpersistedDocument(msg) => ApiError::Internal {
            message: format!("Store document error: {msg}"),
        },
        StoreError::DatabaseError(_)
        | StoreError::DatabaseConnectionFailed(_)
        | StoreError::MigrationFailed(_)
        | StoreError::QueryFailed(_)
        | StoreError::InitializationError(_)
        | StoreError::ForeignKeyEnforcementNotEnabled => ApiError::StoreUnavailable {
            message: err.to_string(),
        },
    }
}
