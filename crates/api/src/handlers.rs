// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handler functions for state-changing and read-only operations.
//!
//! Every state-changing handler enforces authorization before touching
//! the store, translates layer errors explicitly, and returns a DTO.
//! Batch handlers apply the corresponding single-item operation to each
//! id independently and report a per-id outcome; one failure never
//! blocks or rolls back the others.

use chrono::Utc;
use tracing::info;

use linha::{
    EventPatch, ShiftTemplate, apply_patch, assign_supervisor, plan_recurring_shifts, publish,
    unpublish,
};
use linha_domain::{
    Event, EventId, EventType, RecurrencePattern, Role, ShiftPolicy, Supervisor, User, UserId,
    validate_new_event,
};
use linha_persistence::Store;

use crate::auth::{AuthenticatedActor, AuthorizationService};
use crate::error::{ApiError, translate_core_error, translate_domain_error, translate_store_error};
use crate::request_response::{
    BatchAssignSupervisorRequest, BatchEventIdsRequest, BatchOutcome, BatchReport,
    CancelSignUpRequest, CancelSignUpResponse, CreateEventRequest, CreateEventResponse,
    DeleteEventResponse, EventInfo, GenerateShiftsRequest, GenerateShiftsResponse,
    ListEventsResponse, ListSignUpsResponse, ListUsersResponse, SignUpInfo, SignUpRequest,
    SignUpResponse, SupervisorInput, UpdateEventRequest, UpdateEventResponse, UpsertUserRequest,
    UpsertUserResponse, UserInfo,
};

/// Validates a caller-supplied capacity value.
///
/// Zero is the documented "unlimited" value; negatives are rejected
/// before any write.
fn parse_capacity(value: i64) -> Result<u32, ApiError> {
    u32::try_from(value).map_err(|_| ApiError::InvalidInput {
        field: String::from("maxCapacity"),
        message: String::from("maxCapacity must be a non-negative number (0 = unlimited)"),
    })
}

/// Builds a domain supervisor from caller-supplied fields.
fn parse_supervisor(input: &SupervisorInput) -> Result<Supervisor, ApiError> {
    Supervisor::new(
        input.id.as_deref().map(UserId::new),
        input.name.clone(),
        input.emoji.clone(),
    )
    .map_err(translate_domain_error)
}

/// Returns whether an event is visible to a role.
///
/// The same capability rule the role-filtered listing applies at query
/// time, used for single-event reads.
const fn event_visible_to(event: &Event, role: Role) -> bool {
    match role {
        Role::Admin | Role::Coordinator => true,
        Role::Volunteer => event.status.is_published(),
        Role::Visitor => event.status.is_published() && event.event_type.open_to_visitors(),
    }
}

/// Creates a single event via the API boundary with authorization.
///
/// The event is persisted as a draft attributed to the acting
/// coordinator.
///
/// # Errors
///
/// Returns an error if:
/// - The actor cannot manage events
/// - Any field validation fails (all violations are reported at once)
/// - The store write fails
pub fn create_event(
    store: &mut Store,
    request: CreateEventRequest,
    actor: &AuthenticatedActor,
) -> Result<CreateEventResponse, ApiError> {
    AuthorizationService::authorize_manage_events(actor, "create_event")?;

    let event_type: EventType =
        EventType::parse(&request.event_type).map_err(translate_domain_error)?;
    let max_capacity: u32 = parse_capacity(request.max_capacity)?;

    let event: Event = Event::new(
        request.title,
        request.description,
        event_type,
        request.start_time,
        request.end_time,
        max_capacity,
        Some(actor.uid.clone()),
    );

    // Validation happens before any write and reports every violation
    validate_new_event(&event).map_err(translate_domain_error)?;

    let event_id: EventId = store.insert_event(&event).map_err(translate_store_error)?;

    info!(event_id = %event_id, actor = %actor.uid, "Event created");
    Ok(CreateEventResponse {
        event_id: event_id.value().to_string(),
        message: format!("Successfully created event '{}'", event.title),
    })
}

/// Generates recurring draft shifts via the API boundary.
///
/// Expands the recurrence specification, derives the policy shift
/// windows, and writes the drafts in bounded chunks.
///
/// # Errors
///
/// Returns an error if:
/// - The actor cannot manage events
/// - The pattern or a shift window is invalid
/// - A chunk write fails (earlier chunks remain committed)
pub fn generate_recurring_shifts(
    store: &mut Store,
    request: GenerateShiftsRequest,
    policy: &ShiftPolicy,
    actor: &AuthenticatedActor,
) -> Result<GenerateShiftsResponse, ApiError> {
    AuthorizationService::authorize_manage_events(actor, "generate_recurring_shifts")?;

    let pattern: RecurrencePattern =
        RecurrencePattern::parse(&request.pattern).map_err(translate_domain_error)?;

    let template: ShiftTemplate = ShiftTemplate {
        description: request.description,
    };

    let plan: Vec<Event> = plan_recurring_shifts(
        &template,
        request.start_date,
        request.end_date,
        pattern,
        &request.restrictions,
        policy,
        Some(actor.uid.clone()),
    )
    .map_err(translate_core_error)?;

    let created: usize = store
        .insert_events_batched(&plan)
        .map_err(translate_store_error)?;

    info!(created, actor = %actor.uid, "Generated recurring shifts");
    Ok(GenerateShiftsResponse {
        created,
        message: format!("Generated {created} draft shifts"),
    })
}

/// Merge-updates an event via the API boundary with authorization.
///
/// # Errors
///
/// Returns an error if:
/// - The actor cannot manage events
/// - The event does not exist
/// - The merged event fails re-validation
pub fn update_event(
    store: &mut Store,
    request: UpdateEventRequest,
    actor: &AuthenticatedActor,
) -> Result<UpdateEventResponse, ApiError> {
    AuthorizationService::authorize_manage_events(actor, "update_event")?;

    let event_id: EventId = EventId::new(&request.event_id);
    let event: Event = store.get_event(&event_id).map_err(translate_store_error)?;

    let patch: EventPatch = EventPatch {
        title: request.title,
        description: request.description,
        event_type: request
            .event_type
            .as_deref()
            .map(EventType::parse)
            .transpose()
            .map_err(translate_domain_error)?,
        start_time: request.start_time,
        end_time: request.end_time,
        max_capacity: request.max_capacity.map(parse_capacity).transpose()?,
        supervisor: request
            .supervisor
            .as_ref()
            .map(parse_supervisor)
            .transpose()?,
    };

    let patched: Event = apply_patch(&event, &patch).map_err(translate_core_error)?;
    store
        .replace_event(&patched)
        .map_err(translate_store_error)?;

    // Reload so the response carries the refreshed updated_at
    let stored: Event = store.get_event(&event_id).map_err(translate_store_error)?;

    info!(event_id = %event_id, actor = %actor.uid, "Event updated");
    Ok(UpdateEventResponse {
        event: EventInfo::from_event(&stored),
        message: format!("Successfully updated event '{}'", stored.title),
    })
}

/// Deletes an event and its sign-ups via the API boundary.
///
/// # Errors
///
/// Returns an error if the actor cannot manage events or the event does
/// not exist.
pub fn delete_event(
    store: &mut Store,
    event_id: &str,
    actor: &AuthenticatedActor,
) -> Result<DeleteEventResponse, ApiError> {
    AuthorizationService::authorize_manage_events(actor, "delete_event")?;

    let id: EventId = EventId::new(event_id);
    let removed_sign_ups: usize = store.delete_event(&id).map_err(translate_store_error)?;

    info!(event_id = %id, removed_sign_ups, actor = %actor.uid, "Event deleted");
    Ok(DeleteEventResponse {
        event_id: event_id.to_string(),
        removed_sign_ups,
        message: format!("Successfully deleted event '{event_id}'"),
    })
}

/// Publishes an event via the API boundary.
///
/// # Errors
///
/// Returns an error if the actor cannot manage events or the event does
/// not exist.
pub fn publish_event(
    store: &mut Store,
    event_id: &str,
    actor: &AuthenticatedActor,
) -> Result<UpdateEventResponse, ApiError> {
    AuthorizationService::authorize_manage_events(actor, "publish_event")?;

    let id: EventId = EventId::new(event_id);
    let event: Event = store.get_event(&id).map_err(translate_store_error)?;
    let published: Event = publish(&event, Utc::now());
    store
        .replace_event(&published)
        .map_err(translate_store_error)?;
    let stored: Event = store.get_event(&id).map_err(translate_store_error)?;

    info!(event_id = %id, actor = %actor.uid, "Event published");
    Ok(UpdateEventResponse {
        event: EventInfo::from_event(&stored),
        message: format!("Successfully published event '{}'", stored.title),
    })
}

/// Unpublishes an event via the API boundary.
///
/// The event returns to draft; its `published_at` stamp is retained.
///
/// # Errors
///
/// Returns an error if the actor cannot manage events or the event does
/// not exist.
pub fn unpublish_event(
    store: &mut Store,
    event_id: &str,
    actor: &AuthenticatedActor,
) -> Result<UpdateEventResponse, ApiError> {
    AuthorizationService::authorize_manage_events(actor, "unpublish_event")?;

    let id: EventId = EventId::new(event_id);
    let event: Event = store.get_event(&id).map_err(translate_store_error)?;
    let drafted: Event = unpublish(&event);
    store
        .replace_event(&drafted)
        .map_err(translate_store_error)?;
    let stored: Event = store.get_event(&id).map_err(translate_store_error)?;

    info!(event_id = %id, actor = %actor.uid, "Event unpublished");
    Ok(UpdateEventResponse {
        event: EventInfo::from_event(&stored),
        message: format!("Successfully unpublished event '{}'", stored.title),
    })
}

/// Retrieves one event, subject to the caller's visibility.
///
/// An event hidden from the role reads as not found rather than
/// leaking its existence.
///
/// # Errors
///
/// Returns `ResourceNotFound` if the event is absent or invisible.
pub fn get_event(store: &mut Store, event_id: &str, role: Role) -> Result<EventInfo, ApiError> {
    let id: EventId = EventId::new(event_id);
    let event: Event = store.get_event(&id).map_err(translate_store_error)?;

    if !event_visible_to(&event, role) {
        return Err(ApiError::ResourceNotFound {
            resource_type: String::from("Event"),
            message: format!("Event '{event_id}' does not exist"),
        });
    }

    Ok(EventInfo::from_event(&event))
}

/// Lists the events visible to a role.
///
/// This is a read-only operation that requires no authorization; the
/// role itself is the capability filter.
///
/// # Errors
///
/// Returns an error if the store query fails.
pub fn list_events(store: &mut Store, role: Role) -> Result<ListEventsResponse, ApiError> {
    let events: Vec<Event> = store
        .list_events_for_role(role)
        .map_err(translate_store_error)?;

    Ok(ListEventsResponse {
        role: role.as_str().to_string(),
        events: events.iter().map(EventInfo::from_event).collect(),
    })
}

/// Signs a user up for an event via the API boundary.
///
/// Self sign-up requires a roster-eligible role; signing someone else
/// up, or forcing past capacity, requires event-management authority.
/// Admission itself (capacity, duplicates) is enforced inside the
/// store transaction.
///
/// # Errors
///
/// Returns an error if authorization fails, the event does not exist,
/// the roster is full (without `forced`), or the pair already exists.
pub fn sign_up(
    store: &mut Store,
    request: SignUpRequest,
    actor: &AuthenticatedActor,
) -> Result<SignUpResponse, ApiError> {
    let target: UserId = UserId::new(&request.user_id);

    AuthorizationService::authorize_sign_up(actor, &target)?;
    if request.forced {
        AuthorizationService::authorize_forced_sign_up(actor)?;
    }

    let event_id: EventId = EventId::new(&request.event_id);
    let sign_up = store
        .create_sign_up(&event_id, &target, request.forced)
        .map_err(translate_store_error)?;

    info!(
        event_id = %event_id,
        user_id = %target,
        forced = request.forced,
        actor = %actor.uid,
        "Sign-up recorded"
    );
    Ok(SignUpResponse {
        sign_up_id: sign_up.sign_up_id.unwrap_or_default(),
        event_id: request.event_id,
        user_id: request.user_id,
        signed_up_at: sign_up.signed_up_at.to_rfc3339(),
        message: String::from("Successfully signed up"),
    })
}

/// Cancels a sign-up via the API boundary.
///
/// Every row for the pair is removed, defensively plural.
///
/// # Errors
///
/// Returns an error if authorization fails or no sign-up exists for
/// the pair.
pub fn cancel_sign_up(
    store: &mut Store,
    request: CancelSignUpRequest,
    actor: &AuthenticatedActor,
) -> Result<CancelSignUpResponse, ApiError> {
    let target: UserId = UserId::new(&request.user_id);
    AuthorizationService::authorize_sign_up(actor, &target)?;

    let event_id: EventId = EventId::new(&request.event_id);
    let removed: usize = store
        .delete_sign_ups(&event_id, &target)
        .map_err(translate_store_error)?;

    info!(
        event_id = %event_id,
        user_id = %target,
        removed,
        actor = %actor.uid,
        "Sign-up cancelled"
    );
    Ok(CancelSignUpResponse {
        event_id: request.event_id,
        user_id: request.user_id,
        removed,
        message: String::from("Successfully cancelled sign-up"),
    })
}

/// Lists the sign-ups for one event.
///
/// # Errors
///
/// Returns an error if the store query fails.
pub fn list_sign_ups_for_event(
    store: &mut Store,
    event_id: &str,
) -> Result<ListSignUpsResponse, ApiError> {
    let sign_ups = store
        .sign_ups_for_event(&EventId::new(event_id))
        .map_err(translate_store_error)?;

    Ok(ListSignUpsResponse {
        sign_ups: sign_ups.iter().map(SignUpInfo::from_sign_up).collect(),
    })
}

/// Lists the sign-ups for one user.
///
/// # Errors
///
/// Returns an error if the store query fails.
pub fn list_sign_ups_for_user(
    store: &mut Store,
    user_id: &str,
) -> Result<ListSignUpsResponse, ApiError> {
    let sign_ups = store
        .sign_ups_for_user(&UserId::new(user_id))
        .map_err(translate_store_error)?;

    Ok(ListSignUpsResponse {
        sign_ups: sign_ups.iter().map(SignUpInfo::from_sign_up).collect(),
    })
}

/// Lists every sign-up across all events.
///
/// # Errors
///
/// Returns an error if the store query fails.
pub fn list_sign_ups(store: &mut Store) -> Result<ListSignUpsResponse, ApiError> {
    let sign_ups = store.list_all_sign_ups().map_err(translate_store_error)?;

    Ok(ListSignUpsResponse {
        sign_ups: sign_ups.iter().map(SignUpInfo::from_sign_up).collect(),
    })
}

/// Publishes a batch of events independently.
///
/// Each id gets exactly the single-item publish transition; the report
/// carries one outcome per id.
///
/// # Errors
///
/// Returns an error only if the actor cannot manage events; per-item
/// failures land in the report.
pub fn batch_publish(
    store: &mut Store,
    request: &BatchEventIdsRequest,
    actor: &AuthenticatedActor,
) -> Result<BatchReport, ApiError> {
    AuthorizationService::authorize_manage_events(actor, "batch_publish")?;

    let now = Utc::now();
    let mut outcomes: Vec<BatchOutcome> = Vec::with_capacity(request.event_ids.len());
    for event_id in &request.event_ids {
        let id: EventId = EventId::new(event_id);
        let result: Result<(), ApiError> = store
            .get_event(&id)
            .and_then(|event| store.replace_event(&publish(&event, now)))
            .map_err(translate_store_error);
        outcomes.push(BatchOutcome::from_result(event_id, &result));
    }

    let report: BatchReport = BatchReport::new(outcomes);
    info!(
        requested = report.requested,
        succeeded = report.succeeded,
        actor = %actor.uid,
        "Batch publish finished"
    );
    Ok(report)
}

/// Unpublishes a batch of events independently.
///
/// # Errors
///
/// Returns an error only if the actor cannot manage events; per-item
/// failures land in the report.
pub fn batch_unpublish(
    store: &mut Store,
    request: &BatchEventIdsRequest,
    actor: &AuthenticatedActor,
) -> Result<BatchReport, ApiError> {
    AuthorizationService::authorize_manage_events(actor, "batch_unpublish")?;

    let mut outcomes: Vec<BatchOutcome> = Vec::with_capacity(request.event_ids.len());
    for event_id in &request.event_ids {
        let id: EventId = EventId::new(event_id);
        let result: Result<(), ApiError> = store
            .get_event(&id)
            .and_then(|event| store.replace_event(&unpublish(&event)))
            .map_err(translate_store_error);
        outcomes.push(BatchOutcome::from_result(event_id, &result));
    }

    let report: BatchReport = BatchReport::new(outcomes);
    info!(
        requested = report.requested,
        succeeded = report.succeeded,
        actor = %actor.uid,
        "Batch unpublish finished"
    );
    Ok(report)
}

/// Deletes a batch of events independently, cascading each one's
/// sign-ups.
///
/// # Errors
///
/// Returns an error only if the actor cannot manage events; per-item
/// failures land in the report.
pub fn batch_delete(
    store: &mut Store,
    request: &BatchEventIdsRequest,
    actor: &AuthenticatedActor,
) -> Result<BatchReport, ApiError> {
    AuthorizationService::authorize_manage_events(actor, "batch_delete")?;

    let mut outcomes: Vec<BatchOutcome> = Vec::with_capacity(request.event_ids.len());
    for event_id in &request.event_ids {
        let id: EventId = EventId::new(event_id);
        let result: Result<(), ApiError> = store
            .delete_event(&id)
            .map(|_| ())
            .map_err(translate_store_error);
        outcomes.push(BatchOutcome::from_result(event_id, &result));
    }

    let report: BatchReport = BatchReport::new(outcomes);
    info!(
        requested = report.requested,
        succeeded = report.succeeded,
        actor = %actor.uid,
        "Batch delete finished"
    );
    Ok(report)
}

/// Assigns one supervisor across a batch of events independently.
///
/// The supervisor record is validated once, before any item runs; a
/// malformed record fails the whole request rather than half the
/// batch.
///
/// # Errors
///
/// Returns an error if the actor cannot manage events or the
/// supervisor record is invalid; per-item failures land in the report.
pub fn batch_assign_supervisor(
    store: &mut Store,
    request: &BatchAssignSupervisorRequest,
    actor: &AuthenticatedActor,
) -> Result<BatchReport, ApiError> {
    AuthorizationService::authorize_manage_events(actor, "batch_assign_supervisor")?;

    let supervisor: Supervisor = parse_supervisor(&request.supervisor)?;

    let mut outcomes: Vec<BatchOutcome> = Vec::with_capacity(request.event_ids.len());
    for event_id in &request.event_ids {
        let id: EventId = EventId::new(event_id);
        let result: Result<(), ApiError> = store
            .get_event(&id)
            .and_then(|event| store.replace_event(&assign_supervisor(&event, supervisor.clone())))
            .map_err(translate_store_error);
        outcomes.push(BatchOutcome::from_result(event_id, &result));
    }

    let report: BatchReport = BatchReport::new(outcomes);
    info!(
        requested = report.requested,
        succeeded = report.succeeded,
        actor = %actor.uid,
        "Batch supervisor assignment finished"
    );
    Ok(report)
}

/// Clears the rosters of a batch of events.
///
/// Atomicity is per event: each roster clears in its own transaction,
/// and the batch is best-effort across events.
///
/// # Errors
///
/// Returns an error only if the actor cannot manage events; per-item
/// failures land in the report.
pub fn batch_reset_sign_ups(
    store: &mut Store,
    request: &BatchEventIdsRequest,
    actor: &AuthenticatedActor,
) -> Result<BatchReport, ApiError> {
    AuthorizationService::authorize_manage_events(actor, "batch_reset_sign_ups")?;

    let mut outcomes: Vec<BatchOutcome> = Vec::with_capacity(request.event_ids.len());
    for event_id in &request.event_ids {
        let id: EventId = EventId::new(event_id);
        let result: Result<(), ApiError> = store
            .reset_sign_ups_for_event(&id)
            .map(|_| ())
            .map_err(translate_store_error);
        outcomes.push(BatchOutcome::from_result(event_id, &result));
    }

    let report: BatchReport = BatchReport::new(outcomes);
    info!(
        requested = report.requested,
        succeeded = report.succeeded,
        actor = %actor.uid,
        "Batch roster reset finished"
    );
    Ok(report)
}

/// Creates or overwrites a user record via the API boundary.
///
/// # Errors
///
/// Returns an error if the actor is not an Admin or a field fails
/// validation.
pub fn upsert_user(
    store: &mut Store,
    request: UpsertUserRequest,
    actor: &AuthenticatedActor,
) -> Result<UpsertUserResponse, ApiError> {
    AuthorizationService::authorize_manage_users(actor, "upsert_user")?;

    let role: Role = Role::parse(&request.role).map_err(translate_domain_error)?;
    linha_domain::validate_id_number(&request.id_number).map_err(translate_domain_error)?;

    let user: User = User {
        user_id: UserId::new(&request.user_id),
        id_number: request.id_number,
        name: request.name,
        role,
    };

    store.upsert_user(&user).map_err(translate_store_error)?;

    info!(user_id = %user.user_id, role = %user.role, actor = %actor.uid, "User record written");
    Ok(UpsertUserResponse {
        user_id: request.user_id,
        message: String::from("Successfully wrote user record"),
    })
}

/// Lists the users collection.
///
/// # Errors
///
/// Returns an error if the store query fails.
pub fn list_users(store: &mut Store) -> Result<ListUsersResponse, ApiError> {
    let users: Vec<User> = store.list_users().map_err(translate_store_error)?;

    Ok(ListUsersResponse {
        users: users.iter().map(UserInfo::from_user).collect(),
    })
}
