// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::auth::AuthenticatedActor;
use crate::request_response::CreateEventRequest;
use chrono::{DateTime, Duration, TimeZone, Utc};
use linha_domain::{Role, UserId};
use linha_persistence::Store;

pub fn create_test_store() -> Store {
    Store::new_in_memory().expect("Failed to create in-memory store")
}

pub fn admin() -> AuthenticatedActor {
    AuthenticatedActor::new(UserId::new("admin-1"), Role::Admin)
}

pub fn coordinator() -> AuthenticatedActor {
    AuthenticatedActor::new(UserId::new("coord-1"), Role::Coordinator)
}

pub fn volunteer(uid: &str) -> AuthenticatedActor {
    AuthenticatedActor::new(UserId::new(uid), Role::Volunteer)
}

pub fn visitor() -> AuthenticatedActor {
    AuthenticatedActor::new(UserId::new("visitor-1"), Role::Visitor)
}

pub fn shift_start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 3, 19, 0, 0).unwrap()
}

pub fn valid_create_request() -> CreateEventRequest {
    CreateEventRequest {
        title: String::from("Turno"),
        description: String::from("Evening helpline shift"),
        event_type: String::from("Shift"),
        start_time: shift_start(),
        end_time: shift_start() + Duration::hours(2) + Duration::minutes(30),
        max_capacity: 1,
    }
}

/// Creates an event through the API and returns its id.
pub fn create_event_via_api(store: &mut Store, max_capacity: i64) -> String {
    let request = CreateEventRequest {
        max_capacity,
        ..valid_create_request()
    };
    crate::create_event(store, request, &coordinator())
        .expect("Failed to create test event")
        .event_id
}
