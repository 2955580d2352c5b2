// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::StoreError;
use crate::tests::helpers::{create_test_store, insert_test_event};
use linha::CoreError;
use linha_domain::{EventId, UserId};

#[test]
fn test_sign_up_and_roster_listing() {
    let mut store = create_test_store();
    let event_id = insert_test_event(&mut store, 3);
    let user = UserId::new("vol-1");

    let sign_up = store.create_sign_up(&event_id, &user, false).unwrap();
    assert!(sign_up.sign_up_id.is_some());
    assert_eq!(sign_up.event_id, event_id);
    assert_eq!(sign_up.user_id, user);

    let roster = store.sign_ups_for_event(&event_id).unwrap();
    assert_eq!(roster.len(), 1);
    assert_eq!(roster[0].user_id, user);

    assert_eq!(store.count_sign_ups_for_event(&event_id).unwrap(), 1);
}

#[test]
fn test_sign_up_missing_event_fails() {
    let mut store = create_test_store();

    let result = store.create_sign_up(&EventId::new("no-such-event"), &UserId::new("vol-1"), false);
    assert!(matches!(result, Err(StoreError::EventNotFound(_))));
}

#[test]
fn test_capacity_is_enforced() {
    let mut store = create_test_store();
    let event_id = insert_test_event(&mut store, 1);

    store
        .create_sign_up(&event_id, &UserId::new("vol-1"), false)
        .unwrap();

    let refused = store
        .create_sign_up(&event_id, &UserId::new("vol-2"), false)
        .unwrap_err();
    assert_eq!(
        refused,
        StoreError::Rejected(CoreError::CapacityExceeded {
            max_capacity: 1,
            current: 1,
        })
    );

    // The refused attempt wrote nothing
    assert_eq!(store.count_sign_ups_for_event(&event_id).unwrap(), 1);
}

#[test]
fn test_forced_sign_up_bypasses_capacity() {
    let mut store = create_test_store();
    let event_id = insert_test_event(&mut store, 1);

    store
        .create_sign_up(&event_id, &UserId::new("vol-1"), false)
        .unwrap();
    store
        .create_sign_up(&event_id, &UserId::new("vol-2"), true)
        .unwrap();

    assert_eq!(store.count_sign_ups_for_event(&event_id).unwrap(), 2);
}

#[test]
fn test_unlimited_capacity_never_refuses() {
    let mut store = create_test_store();
    let event_id = insert_test_event(&mut store, 0);

    for i in 0..10 {
        store
            .create_sign_up(&event_id, &UserId::new(&format!("vol-{i}")), false)
            .unwrap();
    }

    assert_eq!(store.count_sign_ups_for_event(&event_id).unwrap(), 10);
}

#[test]
fn test_duplicate_sign_up_is_refused_even_forced() {
    let mut store = create_test_store();
    let event_id = insert_test_event(&mut store, 5);
    let user = UserId::new("vol-1");

    store.create_sign_up(&event_id, &user, false).unwrap();

    let plain = store.create_sign_up(&event_id, &user, false).unwrap_err();
    assert!(matches!(
        plain,
        StoreError::Rejected(CoreError::AlreadySignedUp { .. })
    ));

    let forced = store.create_sign_up(&event_id, &user, true).unwrap_err();
    assert!(matches!(
        forced,
        StoreError::Rejected(CoreError::AlreadySignedUp { .. })
    ));

    assert_eq!(store.count_sign_ups_for_event(&event_id).unwrap(), 1);
}

#[test]
fn test_cancel_removes_the_pair() {
    let mut store = create_test_store();
    let event_id = insert_test_event(&mut store, 3);
    let user = UserId::new("vol-1");
    let other = UserId::new("vol-2");

    store.create_sign_up(&event_id, &user, false).unwrap();
    store.create_sign_up(&event_id, &other, false).unwrap();

    let removed = store.delete_sign_ups(&event_id, &user).unwrap();
    assert_eq!(removed, 1);

    let roster = store.sign_ups_for_event(&event_id).unwrap();
    assert_eq!(roster.len(), 1);
    assert_eq!(roster[0].user_id, other);
}

#[test]
fn test_cancel_without_sign_up_fails_and_changes_nothing() {
    let mut store = create_test_store();
    let event_id = insert_test_event(&mut store, 3);
    store
        .create_sign_up(&event_id, &UserId::new("vol-1"), false)
        .unwrap();

    let result = store.delete_sign_ups(&event_id, &UserId::new("vol-9"));
    assert_eq!(
        result.unwrap_err(),
        StoreError::SignUpNotFound {
            event_id: event_id.value().to_string(),
            user_id: String::from("vol-9"),
        }
    );

    assert_eq!(store.count_sign_ups_for_event(&event_id).unwrap(), 1);
}

#[test]
fn test_cancel_after_cancel_fails() {
    let mut store = create_test_store();
    let event_id = insert_test_event(&mut store, 3);
    let user = UserId::new("vol-1");

    store.create_sign_up(&event_id, &user, false).unwrap();
    store.delete_sign_ups(&event_id, &user).unwrap();

    assert!(matches!(
        store.delete_sign_ups(&event_id, &user),
        Err(StoreError::SignUpNotFound { .. })
    ));
}

#[test]
fn test_sign_up_again_after_cancel_succeeds() {
    let mut store = create_test_store();
    let event_id = insert_test_event(&mut store, 1);
    let user = UserId::new("vol-1");

    store.create_sign_up(&event_id, &user, false).unwrap();
    store.delete_sign_ups(&event_id, &user).unwrap();
    store.create_sign_up(&event_id, &user, false).unwrap();

    assert_eq!(store.count_sign_ups_for_event(&event_id).unwrap(), 1);
}

#[test]
fn test_reset_clears_roster_for_one_event() {
    let mut store = create_test_store();
    let event_id = insert_test_event(&mut store, 0);
    let other_event = insert_test_event(&mut store, 0);

    store
        .create_sign_up(&event_id, &UserId::new("vol-1"), false)
        .unwrap();
    store
        .create_sign_up(&event_id, &UserId::new("vol-2"), false)
        .unwrap();
    store
        .create_sign_up(&other_event, &UserId::new("vol-1"), false)
        .unwrap();

    let removed = store.reset_sign_ups_for_event(&event_id).unwrap();
    assert_eq!(removed, 2);

    assert_eq!(store.count_sign_ups_for_event(&event_id).unwrap(), 0);
    // Other events' rosters are untouched
    assert_eq!(store.count_sign_ups_for_event(&other_event).unwrap(), 1);
}

#[test]
fn test_reset_missing_event_fails() {
    let mut store = create_test_store();

    assert!(matches!(
        store.reset_sign_ups_for_event(&EventId::new("no-such-event")),
        Err(StoreError::EventNotFound(_))
    ));
}

#[test]
fn test_reset_empty_roster_is_ok() {
    let mut store = create_test_store();
    let event_id = insert_test_event(&mut store, 3);

    assert_eq!(store.reset_sign_ups_for_event(&event_id).unwrap(), 0);
}

#[test]
fn test_sign_ups_for_user_spans_events() {
    let mut store = create_test_store();
    let first = insert_test_event(&mut store, 0);
    let second = insert_test_event(&mut store, 0);
    let user = UserId::new("vol-1");

    store.create_sign_up(&first, &user, false).unwrap();
    store.create_sign_up(&second, &user, false).unwrap();
    store
        .create_sign_up(&first, &UserId::new("vol-2"), false)
        .unwrap();

    let mine = store.sign_ups_for_user(&user).unwrap();
    assert_eq!(mine.len(), 2);
    assert!(mine.iter().all(|s| s.user_id == user));

    assert_eq!(store.list_all_sign_ups().unwrap().len(), 3);
}
