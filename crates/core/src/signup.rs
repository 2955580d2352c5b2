// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Sign-up admission policy.
//!
//! This is the decision kernel the store gateway runs inside its
//! sign-up transaction, so the capacity and uniqueness invariants are
//! checked at the serialization point rather than in a separate
//! read-then-write step.

use crate::error::CoreError;
use linha_domain::{Event, UserId};

/// Decides whether a sign-up may be admitted.
///
/// # Arguments
///
/// * `event` - The target event
/// * `user_id` - The user joining the roster
/// * `current_count` - Roster size observed inside the transaction
/// * `already_signed_up` - Whether a sign-up already exists for the pair
/// * `forced` - Privileged override; bypasses the capacity check ONLY
///
/// # Rules
///
/// 1. A full roster (`max_capacity > 0` and `current_count` at or above
///    it) refuses non-forced sign-ups. `max_capacity == 0` is unlimited
///    and never refuses for capacity.
/// 2. A duplicate `(event, user)` pair is always refused, forced or not.
///
/// # Errors
///
/// Returns `CapacityExceeded` or `AlreadySignedUp` accordingly.
pub fn check_admission(
    event: &Event,
    user_id: &UserId,
    current_count: usize,
    already_signed_up: bool,
    forced: bool,
) -> Result<(), CoreError> {
    if !forced && event.max_capacity > 0 && current_count >= event.max_capacity as usize {
        return Err(CoreError::CapacityExceeded {
            max_capacity: event.max_capacity,
            current: current_count,
        });
    }

    if already_signed_up {
        return Err(CoreError::AlreadySignedUp {
            user_id: user_id.value().to_string(),
        });
    }

    Ok(())
}
