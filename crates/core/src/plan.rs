// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Recurring shift planning.
//!
//! Planning composes the recurrence expander and the shift-window
//! derivation into a list of draft events ready for a batched store
//! write. Planning is pure; nothing is persisted here.

use crate::error::CoreError;
use linha_domain::{
    Event, EventType, RecurrencePattern, RestrictionRule, ShiftPolicy, ShiftWindow, UserId,
    derive_shift_windows, expand_recurrence,
};
use time::Date;

/// The caller-customizable part of generated shifts.
///
/// Everything else (title, capacity, clock times) comes from the
/// `ShiftPolicy`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ShiftTemplate {
    /// Description stamped on every generated shift.
    pub description: String,
}

/// Plans the draft shift events for a recurrence specification.
///
/// Each accepted date yields one draft `Shift` event per policy window,
/// carrying the policy title and capacity and the template description.
///
/// # Arguments
///
/// * `template` - Customizable fields for the generated shifts
/// * `start` - First candidate date (inclusive)
/// * `end` - Last candidate date (inclusive)
/// * `pattern` - Weekday pattern accepted dates must match
/// * `restrictions` - Exclusion rules
/// * `policy` - The shift-generation policy
/// * `coordinator_id` - The coordinator creating the shifts
///
/// # Returns
///
/// The planned draft events in chronological order. An empty plan (no
/// date survives the filters) is a valid result, not an error.
///
/// # Errors
///
/// Returns an error if a shift window cannot be derived (bad timezone,
/// DST-unresolvable wall-clock time).
pub fn plan_recurring_shifts(
    template: &ShiftTemplate,
    start: Date,
    end: Date,
    pattern: RecurrencePattern,
    restrictions: &[RestrictionRule],
    policy: &ShiftPolicy,
    coordinator_id: Option<UserId>,
) -> Result<Vec<Event>, CoreError> {
    let dates: Vec<Date> = expand_recurrence(start, end, pattern, restrictions);
    let windows: Vec<ShiftWindow> = derive_shift_windows(&dates, policy)?;

    let events: Vec<Event> = windows
        .into_iter()
        .map(|window| {
            Event::new(
                policy.title().to_string(),
                template.description.clone(),
                EventType::Shift,
                window.start_utc,
                window.end_utc,
                policy.capacity(),
                coordinator_id.clone(),
            )
        })
        .collect();

    Ok(events)
}
