// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

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

mod error;
mod recurrence;
mod shift_window;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use error::DomainError;
pub use recurrence::expand_recurrence;
pub use shift_window::{ShiftWindow, derive_shift_windows};
pub use types::{
    Event, EventId, EventStatus, EventType, RecurrencePattern, RestrictionRule, Role, ShiftPolicy,
    ShiftWindowSpec, SignUp, Supervisor, User, UserId,
};
pub use validation::{validate_event_times, validate_id_number, validate_new_event};
