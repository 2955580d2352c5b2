// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use linha_domain::DomainError;

/// Errors that can occur while applying scheduling rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A domain rule was violated.
    DomainViolation(DomainError),
    /// A sign-up was refused because the roster is full.
    CapacityExceeded {
        /// The event's roster capacity.
        max_capacity: u32,
        /// The roster size observed at admission time.
        current: usize,
    },
    /// A sign-up was refused because the user is already on the roster.
    AlreadySignedUp {
        /// The user already signed up.
        user_id: String,
    },
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
            Self::CapacityExceeded {
                max_capacity,
                current,
            } => {
                write!(
                    f,
                    "Event is at capacity: {current} of {max_capacity} places taken"
                )
            }
            Self::AlreadySignedUp { user_id } => {
                write!(f, "User '{user_id}' is already signed up for this event")
            }
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}
