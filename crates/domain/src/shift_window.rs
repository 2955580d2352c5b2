// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Shift window derivation for generated shifts.
//!
//! Each accepted calendar date yields one window per `ShiftPolicy` entry.
//! Windows are declared as wall-clock times in the policy timezone and
//! materialized as UTC instants for storage.
//!
//! ## Invariants
//!
//! - Windows are emitted in date order, policy order within a date
//! - A window whose end clock time is not after its start rolls the end
//!   instant to the next calendar day (e.g. 22:30-01:00)
//! - A wall-clock time that is ambiguous or non-existent in the declared
//!   timezone (DST transition) is an error, never a silent guess

use crate::error::DomainError;
use crate::types::{ShiftPolicy, ShiftWindowSpec};
use chrono::{NaiveDate, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;
use time::Date;

/// A concrete shift window derived from a calendar date and the policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShiftWindow {
    /// The calendar date the shift belongs to (its start date).
    pub date: Date,
    /// Start instant (UTC).
    pub start_utc: chrono::DateTime<Utc>,
    /// End instant (UTC).
    pub end_utc: chrono::DateTime<Utc>,
}

/// Derives the concrete shift windows for a list of accepted dates.
///
/// # Arguments
///
/// * `dates` - Accepted calendar dates, ascending (the expander's output)
/// * `policy` - The shift-generation policy
///
/// # Returns
///
/// One `ShiftWindow` per date per policy window, in input order.
///
/// # Errors
///
/// Returns an error if:
/// - The policy timezone cannot be parsed
/// - A date cannot be converted between calendar representations
/// - A wall-clock time cannot be resolved in the timezone (DST)
pub fn derive_shift_windows(
    dates: &[Date],
    policy: &ShiftPolicy,
) -> Result<Vec<ShiftWindow>, DomainError> {
    let tz: Tz = policy
        .timezone()
        .parse()
        .map_err(|_| DomainError::InvalidTimezone(policy.timezone().to_string()))?;

    let mut windows: Vec<ShiftWindow> = Vec::with_capacity(dates.len() * policy.windows().len());

    for date in dates {
        let start_date: NaiveDate = to_naive_date(*date)?;
        for spec in policy.windows() {
            let end_date: NaiveDate = if spec.ends_next_day() {
                start_date
                    .succ_opt()
                    .ok_or_else(|| DomainError::DateConversion {
                        reason: format!("No day after {start_date}"),
                    })?
            } else {
                start_date
            };

            let start_utc = resolve_local(tz, start_date, spec.start())?;
            let end_utc = resolve_local(tz, end_date, spec.end())?;

            windows.push(ShiftWindow {
                date: *date,
                start_utc,
                end_utc,
            });
        }
    }

    Ok(windows)
}

/// Converts a `time::Date` to a `chrono::NaiveDate`.
fn to_naive_date(date: Date) -> Result<NaiveDate, DomainError> {
    NaiveDate::from_ymd_opt(date.year(), date.month() as u32, u32::from(date.day())).ok_or_else(
        || DomainError::DateConversion {
            reason: format!("Invalid calendar date: {date}"),
        },
    )
}

/// Resolves a wall-clock time on a date in the given timezone to UTC.
fn resolve_local(
    tz: Tz,
    date: NaiveDate,
    clock: time::Time,
) -> Result<chrono::DateTime<Utc>, DomainError> {
    let naive_time: NaiveTime = NaiveTime::from_hms_opt(
        u32::from(clock.hour()),
        u32::from(clock.minute()),
        u32::from(clock.second()),
    )
    .ok_or_else(|| DomainError::DateConversion {
        reason: format!("Invalid clock time: {clock}"),
    })?;

    tz.from_local_datetime(&date.and_time(naive_time))
        .single()
        .map(|dt| dt.with_timezone(&Utc))
        .ok_or_else(|| DomainError::UnresolvableLocalTime {
            reason: format!(
                "{date} at {naive_time} is ambiguous or non-existent in {tz} (DST transition)"
            ),
        })
}
