// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::ApiError;
use crate::request_response::{
    BatchAssignSupervisorRequest, BatchEventIdsRequest, SignUpRequest, SupervisorInput,
};
use crate::tests::helpers::{coordinator, create_event_via_api, create_test_store, volunteer};
use crate::{
    batch_assign_supervisor, batch_delete, batch_publish, batch_reset_sign_ups, batch_unpublish,
    get_event, list_sign_ups_for_event, sign_up,
};
use linha_domain::Role;

fn ids(ids: &[&String]) -> BatchEventIdsRequest {
    BatchEventIdsRequest {
        event_ids: ids.iter().map(|id| (*id).clone()).collect(),
    }
}

#[test]
fn test_batch_publish_with_missing_id_publishes_the_rest() {
    // A missing id in the middle must not block its neighbors
    let mut store = create_test_store();
    let e1 = create_event_via_api(&mut store, 1);
    let e3 = create_event_via_api(&mut store, 1);
    let missing = String::from("no-such-event");

    let report = batch_publish(&mut store, &ids(&[&e1, &missing, &e3]), &coordinator()).unwrap();

    assert_eq!(report.requested, 3);
    assert_eq!(report.succeeded, 2);
    assert!(!report.is_complete());

    assert!(report.outcomes[0].success);
    assert!(!report.outcomes[1].success);
    assert!(report.outcomes[1].error.as_deref().unwrap().contains("not found"));
    assert!(report.outcomes[2].success);

    assert_eq!(
        get_event(&mut store, &e1, Role::Coordinator).unwrap().status,
        "published"
    );
    assert_eq!(
        get_event(&mut store, &e3, Role::Coordinator).unwrap().status,
        "published"
    );
}

#[test]
fn test_batch_publish_stamps_published_at_like_single_publish() {
    let mut store = create_test_store();
    let event_id = create_event_via_api(&mut store, 1);

    batch_publish(&mut store, &ids(&[&event_id]), &coordinator()).unwrap();

    let event = get_event(&mut store, &event_id, Role::Coordinator).unwrap();
    assert_eq!(event.status, "published");
    assert!(event.published_at.is_some());
}

#[test]
fn test_batch_unpublish_returns_events_to_draft() {
    let mut store = create_test_store();
    let e1 = create_event_via_api(&mut store, 1);
    let e2 = create_event_via_api(&mut store, 1);

    batch_publish(&mut store, &ids(&[&e1, &e2]), &coordinator()).unwrap();
    let report = batch_unpublish(&mut store, &ids(&[&e1, &e2]), &coordinator()).unwrap();

    assert!(report.is_complete());
    for id in [&e1, &e2] {
        let event = get_event(&mut store, id, Role::Coordinator).unwrap();
        assert_eq!(event.status, "draft");
        // Stamp retained across batch unpublish too
        assert!(event.published_at.is_some());
    }
}

#[test]
fn test_batch_delete_reports_per_id_outcomes() {
    let mut store = create_test_store();
    let e1 = create_event_via_api(&mut store, 1);
    let missing = String::from("no-such-event");

    let report = batch_delete(&mut store, &ids(&[&e1, &missing]), &coordinator()).unwrap();

    assert_eq!(report.succeeded, 1);
    assert!(matches!(
        get_event(&mut store, &e1, Role::Coordinator),
        Err(ApiError::ResourceNotFound { .. })
    ));
}

#[test]
fn test_batch_assign_supervisor() {
    let mut store = create_test_store();
    let e1 = create_event_via_api(&mut store, 1);
    let e2 = create_event_via_api(&mut store, 1);

    let report = batch_assign_supervisor(
        &mut store,
        &BatchAssignSupervisorRequest {
            event_ids: vec![e1.clone(), e2.clone()],
            supervisor: SupervisorInput {
                id: Some(String::from("sup-1")),
                name: Some(String::from("Rita")),
                emoji: Some(String::from("🌙")),
            },
        },
        &coordinator(),
    )
    .unwrap();

    assert!(report.is_complete());
    for id in [&e1, &e2] {
        let event = get_event(&mut store, id, Role::Coordinator).unwrap();
        let supervisor = event.supervisor.unwrap();
        assert_eq!(supervisor.id.as_deref(), Some("sup-1"));
        assert_eq!(supervisor.name.as_deref(), Some("Rita"));
    }
}

#[test]
fn test_batch_assign_supervisor_rejects_empty_record_up_front() {
    let mut store = create_test_store();
    let e1 = create_event_via_api(&mut store, 1);

    let err = batch_assign_supervisor(
        &mut store,
        &BatchAssignSupervisorRequest {
            event_ids: vec![e1.clone()],
            supervisor: SupervisorInput {
                id: None,
                name: None,
                emoji: Some(String::from("🌙")),
            },
        },
        &coordinator(),
    )
    .unwrap_err();

    assert!(matches!(err, ApiError::InvalidInput { field, .. } if field == "supervisor"));
    // Nothing was assigned
    assert!(
        get_event(&mut store, &e1, Role::Coordinator)
            .unwrap()
            .supervisor
            .is_none()
    );
}

#[test]
fn test_batch_reset_sign_ups_clears_rosters_independently() {
    let mut store = create_test_store();
    let e1 = create_event_via_api(&mut store, 0);
    let e2 = create_event_via_api(&mut store, 0);
    let missing = String::from("no-such-event");

    for (event, user) in [(&e1, "vol-1"), (&e1, "vol-2"), (&e2, "vol-1")] {
        sign_up(
            &mut store,
            SignUpRequest {
                event_id: event.clone(),
                user_id: user.to_string(),
                forced: false,
            },
            &volunteer(user),
        )
        .unwrap();
    }

    let report =
        batch_reset_sign_ups(&mut store, &ids(&[&e1, &missing, &e2]), &coordinator()).unwrap();

    assert_eq!(report.requested, 3);
    assert_eq!(report.succeeded, 2);
    assert!(
        list_sign_ups_for_event(&mut store, &e1)
            .unwrap()
            .sign_ups
            .is_empty()
    );
    assert!(
        list_sign_ups_for_event(&mut store, &e2)
            .unwrap()
            .sign_ups
            .is_empty()
    );
}

#[test]
fn test_empty_batch_is_a_complete_report() {
    let mut store = create_test_store();

    let report = batch_publish(
        &mut store,
        &BatchEventIdsRequest { event_ids: vec![] },
        &coordinator(),
    )
    .unwrap();

    assert_eq!(report.requested, 0);
    assert_eq!(report.succeeded, 0);
    assert!(report.is_complete());
}
