// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

mod auth;
mod error;
mod handlers;
mod request_response;

#[cfg(test)]
mod tests;

pub use auth::{AuthenticatedActor, AuthorizationService, actor_from_claims};
pub use error::{ApiError, AuthError, translate_core_error, translate_store_error};
pub use handlers::{
    batch_assign_supervisor, batch_delete, batch_publish, batch_reset_sign_ups, batch_unpublish,
    cancel_sign_up, create_event, delete_event, generate_recurring_shifts, get_event, list_events,
    list_sign_ups, list_sign_ups_for_event, list_sign_ups_for_user, list_users, publish_event,
    sign_up, unpublish_event, update_event, upsert_user,
};
pub use request_response::{
    BatchAssignSupervisorRequest, BatchEventIdsRequest, BatchOutcome, BatchReport,
    CancelSignUpRequest, CancelSignUpResponse, CreateEventRequest, CreateEventResponse,
    DeleteEventResponse, EventInfo, GenerateShiftsRequest, GenerateShiftsResponse,
    ListEventsResponse, ListSignUpsResponse, ListUsersResponse, SignUpInfo, SignUpRequest,
    SignUpResponse, SupervisorInfo, SupervisorInput, UpdateEventRequest, UpdateEventResponse,
    UpsertUserRequest, UpsertUserResponse, UserInfo,
};
