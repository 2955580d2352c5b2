// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Recurrence expansion for bulk shift generation.
//!
//! Expansion turns a date range, a weekday pattern, and a list of
//! restriction rules into the concrete calendar dates shifts should be
//! generated for.
//!
//! ## Invariants
//!
//! - Output is ascending and duplicate-free
//! - A date appears iff its weekday matches the pattern and no
//!   restriction rule covers it (restrictions combine with OR semantics)
//! - The same inputs always produce the same output; no hidden state

use crate::types::{RecurrencePattern, RestrictionRule};
use time::Date;

/// Expands a recurrence specification into concrete calendar dates.
///
/// # Arguments
///
/// * `start` - First candidate date (inclusive)
/// * `end` - Last candidate date (inclusive)
/// * `pattern` - Weekday pattern a candidate must match
/// * `restrictions` - Exclusion rules; any covering rule excludes a date
///
/// # Returns
///
/// The matching dates in ascending order. An inverted range (`end`
/// before `start`) produces an empty list rather than an error.
#[must_use]
pub fn expand_recurrence(
    start: Date,
    end: Date,
    pattern: RecurrencePattern,
    restrictions: &[RestrictionRule],
) -> Vec<Date> {
    let mut dates: Vec<Date> = Vec::new();
    if end < start {
        return dates;
    }

    let mut current: Date = start;
    loop {
        let excluded: bool = restrictions.iter().any(|rule| rule.covers(current));
        if pattern.matches(current.weekday()) && !excluded {
            dates.push(current);
        }
        if current >= end {
            break;
        }
        match current.next_day() {
            Some(next) => current = next,
            // Calendar overflow; nothing beyond Date::MAX to visit.
            None => break,
        }
    }

    dates
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use time::Month;

    fn date(year: i32, month: Month, day: u8) -> Date {
        Date::from_calendar_date(year, month, day).unwrap()
    }

    #[test]
    fn test_weekday_pattern_with_day_restriction() {
        // Mon 2024-06-03 .. Sun 2024-06-09, weekdays, Wednesday excluded
        let restrictions = vec![RestrictionRule::Day {
            date: date(2024, Month::June, 5),
        }];
        let dates = expand_recurrence(
            date(2024, Month::June, 3),
            date(2024, Month::June, 9),
            RecurrencePattern::Weekdays,
            &restrictions,
        );
        assert_eq!(
            dates,
            vec![
                date(2024, Month::June, 3),
                date(2024, Month::June, 4),
                date(2024, Month::June, 6),
                date(2024, Month::June, 7),
            ]
        );
    }

    #[test]
    fn test_empty_restrictions_is_pure_weekday_filter() {
        let dates = expand_recurrence(
            date(2024, Month::June, 3),
            date(2024, Month::June, 9),
            RecurrencePattern::Weekends,
            &[],
        );
        assert_eq!(
            dates,
            vec![date(2024, Month::June, 8), date(2024, Month::June, 9)]
        );
    }

    #[test]
    fn test_all_pattern_covers_every_day() {
        let dates = expand_recurrence(
            date(2024, Month::June, 3),
            date(2024, Month::June, 9),
            RecurrencePattern::All,
            &[],
        );
        assert_eq!(dates.len(), 7);
    }

    #[test]
    fn test_inverted_range_is_empty() {
        let dates = expand_recurrence(
            date(2024, Month::June, 9),
            date(2024, Month::June, 3),
            RecurrencePattern::All,
            &[],
        );
        assert!(dates.is_empty());
    }

    #[test]
    fn test_single_day_range() {
        // A Monday: matches weekdays, not weekends
        let monday = date(2024, Month::June, 3);
        assert_eq!(
            expand_recurrence(monday, monday, RecurrencePattern::Weekdays, &[]),
            vec![monday]
        );
        assert!(expand_recurrence(monday, monday, RecurrencePattern::Weekends, &[]).is_empty());
    }

    #[test]
    fn test_interval_restriction_is_inclusive() {
        let restrictions = vec![RestrictionRule::Interval {
            start: date(2024, Month::June, 4),
            end: date(2024, Month::June, 6),
        }];
        let dates = expand_recurrence(
            date(2024, Month::June, 3),
            date(2024, Month::June, 7),
            RecurrencePattern::Weekdays,
            &restrictions,
        );
        assert_eq!(
            dates,
            vec![date(2024, Month::June, 3), date(2024, Month::June, 7)]
        );
    }

    #[test]
    fn test_overlapping_restrictions_combine_with_or() {
        let restrictions = vec![
            RestrictionRule::Interval {
                start: date(2024, Month::June, 3),
                end: date(2024, Month::June, 5),
            },
            RestrictionRule::Interval {
                start: date(2024, Month::June, 5),
                end: date(2024, Month::June, 6),
            },
            RestrictionRule::Day {
                date: date(2024, Month::June, 6),
            },
        ];
        let dates = expand_recurrence(
            date(2024, Month::June, 3),
            date(2024, Month::June, 7),
            RecurrencePattern::Weekdays,
            &restrictions,
        );
        assert_eq!(dates, vec![date(2024, Month::June, 7)]);
    }

    #[test]
    fn test_restriction_outside_range_has_no_effect() {
        let restrictions = vec![RestrictionRule::Day {
            date: date(2024, Month::May, 31),
        }];
        let dates = expand_recurrence(
            date(2024, Month::June, 3),
            date(2024, Month::June, 4),
            RecurrencePattern::Weekdays,
            &restrictions,
        );
        assert_eq!(dates.len(), 2);
    }

    #[test]
    fn test_output_is_ascending_across_month_boundary() {
        let dates = expand_recurrence(
            date(2024, Month::June, 28),
            date(2024, Month::July, 2),
            RecurrencePattern::All,
            &[],
        );
        assert_eq!(dates.len(), 5);
        assert!(dates.windows(2).all(|pair| pair[0] < pair[1]));
    }
}
