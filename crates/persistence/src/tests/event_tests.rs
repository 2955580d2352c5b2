// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::StoreError;
use crate::tests::helpers::{create_test_event, create_test_store, insert_test_event, shift_start};
use chrono::Duration;
use linha_domain::{Event, EventId, EventStatus, Supervisor, UserId};

#[test]
fn test_insert_assigns_document_id_and_timestamps() {
    let mut store = create_test_store();

    let event_id = store.insert_event(&create_test_event(1)).unwrap();
    assert_eq!(event_id.value().len(), 20);

    let stored: Event = store.get_event(&event_id).unwrap();
    assert_eq!(stored.event_id, Some(event_id));
    assert!(stored.created_at.is_some());
    assert!(stored.updated_at.is_some());
    assert_eq!(stored.title, "Turno");
    assert_eq!(stored.status, EventStatus::Draft);
    assert_eq!(stored.start_time, shift_start());
}

#[test]
fn test_get_missing_event_fails() {
    let mut store = create_test_store();

    let result = store.get_event(&EventId::new("no-such-event"));
    assert_eq!(
        result.unwrap_err(),
        StoreError::EventNotFound(String::from("no-such-event"))
    );
}

#[test]
fn test_replace_event_persists_changes_and_bumps_updated_at() {
    let mut store = create_test_store();
    let event_id = insert_test_event(&mut store, 1);

    let mut event: Event = store.get_event(&event_id).unwrap();
    let created_at = event.created_at;
    event.title = String::from("Turno da noite");
    event.max_capacity = 3;
    event.supervisor =
        Some(Supervisor::new(Some(UserId::new("sup-1")), None, Some(String::from("🌙"))).unwrap());

    store.replace_event(&event).unwrap();

    let stored: Event = store.get_event(&event_id).unwrap();
    assert_eq!(stored.title, "Turno da noite");
    assert_eq!(stored.max_capacity, 3);
    assert_eq!(
        stored.supervisor.as_ref().unwrap().id().unwrap().value(),
        "sup-1"
    );
    // created_at preserved, updated_at refreshed
    assert_eq!(stored.created_at, created_at);
    assert!(stored.updated_at >= stored.created_at);
}

#[test]
fn test_replace_missing_event_fails() {
    let mut store = create_test_store();

    let mut event = create_test_event(1);
    event.event_id = Some(EventId::new("no-such-event"));

    assert!(matches!(
        store.replace_event(&event),
        Err(StoreError::EventNotFound(_))
    ));
}

#[test]
fn test_replace_unpersisted_event_fails() {
    let mut store = create_test_store();
    let event = create_test_event(1);

    assert!(matches!(
        store.replace_event(&event),
        Err(StoreError::UnpersistedDocument(_))
    ));
}

#[test]
fn test_delete_event_cascades_to_sign_ups() {
    let mut store = create_test_store();
    let event_id = insert_test_event(&mut store, 0);

    store
        .create_sign_up(&event_id, &UserId::new("vol-1"), false)
        .unwrap();
    store
        .create_sign_up(&event_id, &UserId::new("vol-2"), false)
        .unwrap();

    let removed = store.delete_event(&event_id).unwrap();
    assert_eq!(removed, 2);

    assert!(matches!(
        store.get_event(&event_id),
        Err(StoreError::EventNotFound(_))
    ));
    // No orphan roster rows survive the cascade
    assert!(store.sign_ups_for_event(&event_id).unwrap().is_empty());
    assert!(store.list_all_sign_ups().unwrap().is_empty());
}

#[test]
fn test_delete_missing_event_fails() {
    let mut store = create_test_store();

    assert!(matches!(
        store.delete_event(&EventId::new("no-such-event")),
        Err(StoreError::EventNotFound(_))
    ));
}

#[test]
fn test_list_events_is_ascending_by_start_time() {
    let mut store = create_test_store();

    let mut late = create_test_event(1);
    late.start_time = shift_start() + Duration::days(2);
    late.end_time = late.start_time + Duration::hours(2);

    let mut early = create_test_event(1);
    early.start_time = shift_start() - Duration::days(2);
    early.end_time = early.start_time + Duration::hours(2);

    store.insert_event(&late).unwrap();
    store.insert_event(&create_test_event(1)).unwrap();
    store.insert_event(&early).unwrap();

    let events = store.list_events().unwrap();
    assert_eq!(events.len(), 3);
    assert!(
        events
            .windows(2)
            .all(|pair| pair[0].start_time <= pair[1].start_time)
    );
}

#[test]
fn test_published_at_round_trips() {
    let mut store = create_test_store();
    let event_id = insert_test_event(&mut store, 1);

    let mut event: Event = store.get_event(&event_id).unwrap();
    event.status = EventStatus::Published;
    event.published_at = Some(shift_start() - Duration::days(1));
    store.replace_event(&event).unwrap();

    let stored: Event = store.get_event(&event_id).unwrap();
    assert_eq!(stored.status, EventStatus::Published);
    assert_eq!(stored.published_at, Some(shift_start() - Duration::days(1)));
}
