// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::create_test_event;
use crate::{CoreError, check_admission};
use linha_domain::UserId;

#[test]
fn test_admits_below_capacity() {
    let event = create_test_event(2);
    let user = UserId::new("vol-1");

    assert!(check_admission(&event, &user, 0, false, false).is_ok());
    assert!(check_admission(&event, &user, 1, false, false).is_ok());
}

#[test]
fn test_refuses_at_capacity() {
    let event = create_test_event(2);
    let user = UserId::new("vol-1");

    let err = check_admission(&event, &user, 2, false, false).unwrap_err();
    assert_eq!(
        err,
        CoreError::CapacityExceeded {
            max_capacity: 2,
            current: 2,
        }
    );
}

#[test]
fn test_refuses_over_capacity() {
    // A forced sign-up may have pushed the roster past the bound already
    let event = create_test_event(2);
    let user = UserId::new("vol-1");

    assert!(check_admission(&event, &user, 3, false, false).is_err());
}

#[test]
fn test_forced_bypasses_capacity() {
    let event = create_test_event(1);
    let user = UserId::new("vol-2");

    assert!(check_admission(&event, &user, 1, false, true).is_ok());
    assert!(check_admission(&event, &user, 5, false, true).is_ok());
}

#[test]
fn test_unlimited_capacity_never_refuses() {
    let event = create_test_event(0);
    let user = UserId::new("vol-1");

    assert!(check_admission(&event, &user, 0, false, false).is_ok());
    assert!(check_admission(&event, &user, 10_000, false, false).is_ok());
}

#[test]
fn test_duplicate_is_refused() {
    let event = create_test_event(5);
    let user = UserId::new("vol-1");

    let err = check_admission(&event, &user, 1, true, false).unwrap_err();
    assert_eq!(
        err,
        CoreError::AlreadySignedUp {
            user_id: String::from("vol-1"),
        }
    );
}

#[test]
fn test_forced_does_not_bypass_duplicate() {
    let event = create_test_event(5);
    let user = UserId::new("vol-1");

    let err = check_admission(&event, &user, 1, true, true).unwrap_err();
    assert!(matches!(err, CoreError::AlreadySignedUp { .. }));
}

#[test]
fn test_capacity_is_reported_before_duplicate_when_not_forced() {
    // Full roster AND duplicate: the capacity refusal wins, matching the
    // order callers observe from the sign-up flow.
    let event = create_test_event(1);
    let user = UserId::new("vol-1");

    let err = check_admission(&event, &user, 1, true, false).unwrap_err();
    assert!(matches!(err, CoreError::CapacityExceeded { .. }));
}
