// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::auth::actor_from_claims;
use crate::error::ApiError;
use crate::request_response::{
    BatchEventIdsRequest, SignUpRequest, UpsertUserRequest,
};
use crate::tests::helpers::{
    admin, coordinator, create_event_via_api, create_test_store, valid_create_request, visitor,
    volunteer,
};
use crate::{batch_publish, create_event, delete_event, publish_event, sign_up, upsert_user};
use linha_domain::Role;

#[test]
fn test_actor_from_claims_rejects_empty_uid() {
    assert!(actor_from_claims("", Role::Admin).is_err());
    let actor = actor_from_claims("uid-1", Role::Volunteer).unwrap();
    assert_eq!(actor.uid.value(), "uid-1");
    assert_eq!(actor.role, Role::Volunteer);
}

#[test]
fn test_volunteer_cannot_create_events() {
    let mut store = create_test_store();

    let err = create_event(&mut store, valid_create_request(), &volunteer("vol-1")).unwrap_err();
    let ApiError::Unauthorized {
        action,
        required_role,
    } = err
    else {
        panic!("expected Unauthorized");
    };
    assert_eq!(action, "create_event");
    assert_eq!(required_role, "Coordinator or Admin");
}

#[test]
fn test_visitor_cannot_create_events() {
    let mut store = create_test_store();
    assert!(create_event(&mut store, valid_create_request(), &visitor()).is_err());
}

#[test]
fn test_volunteer_cannot_publish_or_delete() {
    let mut store = create_test_store();
    let event_id = create_event_via_api(&mut store, 1);

    assert!(matches!(
        publish_event(&mut store, &event_id, &volunteer("vol-1")),
        Err(ApiError::Unauthorized { .. })
    ));
    assert!(matches!(
        delete_event(&mut store, &event_id, &volunteer("vol-1")),
        Err(ApiError::Unauthorized { .. })
    ));
}

#[test]
fn test_volunteer_cannot_run_batch_operations() {
    let mut store = create_test_store();
    let event_id = create_event_via_api(&mut store, 1);

    let err = batch_publish(
        &mut store,
        &BatchEventIdsRequest {
            event_ids: vec![event_id],
        },
        &volunteer("vol-1"),
    )
    .unwrap_err();

    assert!(matches!(err, ApiError::Unauthorized { .. }));
}

#[test]
fn test_visitor_cannot_sign_up() {
    let mut store = create_test_store();
    let event_id = create_event_via_api(&mut store, 1);

    let err = sign_up(
        &mut store,
        SignUpRequest {
            event_id,
            user_id: String::from("visitor-1"),
            forced: false,
        },
        &visitor(),
    )
    .unwrap_err();

    let ApiError::Unauthorized { action, .. } = err else {
        panic!("expected Unauthorized");
    };
    assert_eq!(action, "sign_up");
}

#[test]
fn test_volunteer_cannot_sign_up_someone_else() {
    let mut store = create_test_store();
    let event_id = create_event_via_api(&mut store, 3);

    let err = sign_up(
        &mut store,
        SignUpRequest {
            event_id,
            user_id: String::from("vol-2"),
            forced: false,
        },
        &volunteer("vol-1"),
    )
    .unwrap_err();

    let ApiError::Unauthorized { action, .. } = err else {
        panic!("expected Unauthorized");
    };
    assert_eq!(action, "sign_up_on_behalf");
}

#[test]
fn test_volunteer_cannot_force_their_own_sign_up() {
    let mut store = create_test_store();
    let event_id = create_event_via_api(&mut store, 0);

    let err = sign_up(
        &mut store,
        SignUpRequest {
            event_id,
            user_id: String::from("vol-1"),
            forced: true,
        },
        &volunteer("vol-1"),
    )
    .unwrap_err();

    let ApiError::Unauthorized { action, .. } = err else {
        panic!("expected Unauthorized");
    };
    assert_eq!(action, "forced_sign_up");
}

#[test]
fn test_only_admins_write_user_records() {
    let mut store = create_test_store();
    let request = UpsertUserRequest {
        user_id: String::from("uid-1"),
        id_number: String::from("12345"),
        name: String::from("Rita"),
        role: String::from("Volunteer"),
    };

    assert!(matches!(
        upsert_user(&mut store, request.clone(), &coordinator()),
        Err(ApiError::Unauthorized { .. })
    ));

    assert!(upsert_user(&mut store, request, &admin()).is_ok());
}

#[test]
fn test_unauthorized_create_writes_nothing() {
    let mut store = create_test_store();

    let _ = create_event(&mut store, valid_create_request(), &volunteer("vol-1"));

    assert!(
        crate::list_events(&mut store, Role::Admin)
            .unwrap()
            .events
            .is_empty()
    );
}
