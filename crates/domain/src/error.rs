// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An event failed field validation. Every violation is listed so the
    /// caller sees all problems at once, not just the first.
    InvalidEvent {
        /// One entry per violated rule.
        issues: Vec<String>,
    },
    /// Event type string is not recognized.
    InvalidEventType(String),
    /// Event status string is not recognized.
    InvalidStatus(String),
    /// Role string is not recognized.
    InvalidRole(String),
    /// Recurrence pattern string is not recognized.
    InvalidPattern(String),
    /// Supervisor record is missing both an id and a name.
    InvalidSupervisor(&'static str),
    /// A user id number failed format validation.
    InvalidIdNumber(String),
    /// Timezone name could not be parsed.
    InvalidTimezone(String),
    /// Shift policy configuration is invalid.
    InvalidShiftPolicy {
        /// Description of the configuration error.
        reason: String,
    },
    /// A wall-clock time could not be resolved in the declared timezone
    /// (ambiguous or non-existent due to a DST transition).
    UnresolvableLocalTime {
        /// Description of the unresolvable datetime.
        reason: String,
    },
    /// A calendar date could not be converted between representations.
    DateConversion {
        /// Description of the conversion failure.
        reason: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidEvent { issues } => {
                write!(f, "Invalid event: {}", issues.join("; "))
            }
            Self::InvalidEventType(msg) => write!(f, "Invalid event type: {msg}"),
            Self::InvalidStatus(msg) => write!(f, "Invalid event status: {msg}"),
            Self::InvalidRole(msg) => write!(f, "Invalid role: {msg}"),
            Self::InvalidPattern(msg) => write!(f, "Invalid recurrence pattern: {msg}"),
            Self::InvalidSupervisor(msg) => write!(f, "Invalid supervisor: {msg}"),
            Self::InvalidIdNumber(msg) => write!(f, "Invalid id number: {msg}"),
            Self::InvalidTimezone(msg) => write!(f, "Invalid timezone: {msg}"),
            Self::InvalidShiftPolicy { reason } => {
                write!(f, "Invalid shift policy: {reason}")
            }
            Self::UnresolvableLocalTime { reason } => {
                write!(f, "Could not resolve local time: {reason}")
            }
            Self::DateConversion { reason } => {
                write!(f, "Date conversion failed: {reason}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
