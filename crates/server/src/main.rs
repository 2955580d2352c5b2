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
#![allow(clippy::multiple_crate_versions)]

use axum::{
    Json, Router,
    extract::{Path, Query, State as AxumState},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::info;

use linha_api::{
    ApiError, AuthenticatedActor, BatchAssignSupervisorRequest, BatchEventIdsRequest, BatchReport,
    CancelSignUpRequest, CancelSignUpResponse, CreateEventRequest, CreateEventResponse,
    DeleteEventResponse, EventInfo, GenerateShiftsRequest, GenerateShiftsResponse,
    ListEventsResponse, ListSignUpsResponse, ListUsersResponse, SignUpRequest, SignUpResponse,
    SupervisorInput, UpdateEventRequest, UpdateEventResponse, UpsertUserRequest,
    UpsertUserResponse, actor_from_claims, batch_assign_supervisor, batch_delete, batch_publish,
    batch_reset_sign_ups, batch_unpublish, cancel_sign_up, create_event, delete_event,
    generate_recurring_shifts, get_event, list_events, list_sign_ups, list_sign_ups_for_event,
    list_sign_ups_for_user, list_users, publish_event, sign_up, unpublish_event, update_event,
    upsert_user,
};
use linha_domain::{RestrictionRule, Role, ShiftPolicy};
use linha_persistence::Store;
use time::Date;
use time::macros::format_description;

/// Linha Server - HTTP server for the helpline scheduling backend.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses an
    /// in-memory database.
    #[arg(short, long)]
    database: Option<String>,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,
}

/// Application state shared across handlers.
#[derive(Clone)]
struct AppState {
    /// The document-store gateway.
    store: Arc<Mutex<Store>>,
    /// The shift-generation policy.
    policy: ShiftPolicy,
}

/// Actor claims carried by every state-changing request.
///
/// The identity provider has already verified these; the backend
/// trusts them as-is.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct ActorClaims {
    /// The provider uid of the actor.
    actor_uid: String,
    /// The role claim of the actor.
    actor_role: String,
}

/// API request for creating a single event.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct CreateEventApiRequest {
    #[serde(flatten)]
    claims: ActorClaims,
    /// Event title.
    title: String,
    /// Event description (may be empty).
    description: String,
    /// Event type name.
    event_type: String,
    /// Start instant (RFC 3339).
    start_time: chrono::DateTime<chrono::Utc>,
    /// End instant (RFC 3339).
    end_time: chrono::DateTime<chrono::Utc>,
    /// Roster capacity; 0 means unlimited.
    max_capacity: i64,
}

/// One exclusion rule as the scheduling wizard submits it.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct RestrictionDto {
    /// "day" or "interval".
    #[serde(rename = "type")]
    kind: String,
    /// The excluded date (day rules), `YYYY-MM-DD`.
    #[serde(skip_serializing_if = "Option::is_none")]
    date: Option<String>,
    /// First excluded date (interval rules), `YYYY-MM-DD`.
    #[serde(skip_serializing_if = "Option::is_none")]
    start: Option<String>,
    /// Last excluded date (interval rules), `YYYY-MM-DD`.
    #[serde(skip_serializing_if = "Option::is_none")]
    end: Option<String>,
}

/// API request for generating recurring shifts.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct GenerateShiftsApiRequest {
    #[serde(flatten)]
    claims: ActorClaims,
    /// Description stamped on every generated shift.
    description: String,
    /// First candidate date, `YYYY-MM-DD`.
    start_date: String,
    /// Last candidate date, `YYYY-MM-DD`.
    end_date: String,
    /// Weekday pattern ("weekdays", "weekends", "all").
    pattern: String,
    /// Exclusion rules.
    #[serde(default)]
    restrictions: Vec<RestrictionDto>,
}

/// Supervisor fields as submitted by callers.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct SupervisorDto {
    /// The supervisor's user id, if they are a registered user.
    id: Option<String>,
    /// The supervisor's display name.
    name: Option<String>,
    /// The supervisor's emoji.
    emoji: Option<String>,
}

/// API request for merge-updating an event.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct UpdateEventApiRequest {
    #[serde(flatten)]
    claims: ActorClaims,
    /// Replacement title.
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    /// Replacement description.
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    /// Replacement event type name.
    #[serde(skip_serializing_if = "Option::is_none")]
    event_type: Option<String>,
    /// Replacement start instant (RFC 3339).
    #[serde(skip_serializing_if = "Option::is_none")]
    start_time: Option<chrono::DateTime<chrono::Utc>>,
    /// Replacement end instant (RFC 3339).
    #[serde(skip_serializing_if = "Option::is_none")]
    end_time: Option<chrono::DateTime<chrono::Utc>>,
    /// Replacement roster capacity.
    #[serde(skip_serializing_if = "Option::is_none")]
    max_capacity: Option<i64>,
    /// Replacement supervisor assignment.
    #[serde(skip_serializing_if = "Option::is_none")]
    supervisor: Option<SupervisorDto>,
}

/// API request carrying only actor claims (publish, unpublish, delete).
#[derive(Debug, Clone, Deserialize, Serialize)]
struct ActionApiRequest {
    #[serde(flatten)]
    claims: ActorClaims,
}

/// API request for signing a user up.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct SignUpApiRequest {
    #[serde(flatten)]
    claims: ActorClaims,
    /// The target event id.
    event_id: String,
    /// The user joining the roster.
    user_id: String,
    /// Privileged capacity override.
    #[serde(default)]
    forced: bool,
}

/// API request for cancelling a sign-up.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct CancelSignUpApiRequest {
    #[serde(flatten)]
    claims: ActorClaims,
    /// The event id.
    event_id: String,
    /// The user leaving the roster.
    user_id: String,
}

/// API request naming the events a batch operation targets.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct BatchApiRequest {
    #[serde(flatten)]
    claims: ActorClaims,
    /// The target event ids.
    event_ids: Vec<String>,
}

/// API request for assigning a supervisor across events.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct BatchAssignSupervisorApiRequest {
    #[serde(flatten)]
    claims: ActorClaims,
    /// The target event ids.
    event_ids: Vec<String>,
    /// The supervisor's user id, if they are a registered user.
    supervisor_id: Option<String>,
    /// The supervisor's display name.
    supervisor_name: Option<String>,
    /// The supervisor's emoji.
    supervisor_emoji: Option<String>,
}

/// API request for writing a user record.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct UpsertUserApiRequest {
    #[serde(flatten)]
    claims: ActorClaims,
    /// The provider uid of the record being written.
    user_id: String,
    /// The human-facing id number (3-10 digits).
    id_number: String,
    /// Display name.
    name: String,
    /// Role name.
    role: String,
}

/// Query parameters for event listings and single-event reads.
#[derive(Debug, Deserialize)]
struct RoleQuery {
    /// The reader's role.
    role: String,
}

/// Query parameters for sign-up listings.
#[derive(Debug, Deserialize)]
struct SignUpsQuery {
    /// Restrict the listing to one user.
    user_id: Option<String>,
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        let status: StatusCode = match err {
            ApiError::AuthenticationFailed { .. } => StatusCode::UNAUTHORIZED,
            ApiError::Unauthorized { .. } => StatusCode::FORBIDDEN,
            ApiError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            ApiError::DomainRuleViolation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::ResourceNotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::CapacityExceeded { .. } | ApiError::DuplicateSignUp { .. } => {
                StatusCode::CONFLICT
            }
            ApiError::StoreUnavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

/// Parses a role string into a Role enum.
fn parse_role(role_str: &str) -> Result<Role, HttpError> {
    Role::parse(role_str).map_err(|_| HttpError {
        status: StatusCode::BAD_REQUEST,
        message: format!(
            "Invalid role: '{role_str}'. Must be 'Admin', 'Coordinator', 'Volunteer', or 'Visitor'"
        ),
    })
}

/// Builds an authenticated actor from request claims.
fn actor_from(claims: &ActorClaims) -> Result<AuthenticatedActor, HttpError> {
    let role: Role = parse_role(&claims.actor_role)?;
    actor_from_claims(&claims.actor_uid, role).map_err(|e| HttpError {
        status: StatusCode::UNAUTHORIZED,
        message: e.to_string(),
    })
}

/// Parses a `YYYY-MM-DD` date from a request body.
fn parse_date(field: &str, value: &str) -> Result<Date, HttpError> {
    let format = format_description!("[year]-[month]-[day]");
    Date::parse(value, &format).map_err(|_| HttpError {
        status: StatusCode::BAD_REQUEST,
        message: format!("Invalid date for '{field}': '{value}'. Expected YYYY-MM-DD"),
    })
}

/// Converts wizard restriction rows into domain rules.
fn parse_restrictions(rows: &[RestrictionDto]) -> Result<Vec<RestrictionRule>, HttpError> {
    let mut rules: Vec<RestrictionRule> = Vec::with_capacity(rows.len());
    for row in rows {
        match row.kind.as_str() {
            "day" => {
                let date_str: &str = row.date.as_deref().ok_or_else(|| HttpError {
                    status: StatusCode::BAD_REQUEST,
                    message: String::from("Day restrictions require a 'date' field"),
                })?;
                rules.push(RestrictionRule::Day {
                    date: parse_date("date", date_str)?,
                });
            }
            "interval" => {
                let start_str: &str = row.start.as_deref().ok_or_else(|| HttpError {
                    status: StatusCode::BAD_REQUEST,
                    message: String::from("Interval restrictions require a 'start' field"),
                })?;
                let end_str: &str = row.end.as_deref().ok_or_else(|| HttpError {
                    status: StatusCode::BAD_REQUEST,
                    message: String::from("Interval restrictions require an 'end' field"),
                })?;
                rules.push(RestrictionRule::Interval {
                    start: parse_date("start", start_str)?,
                    end: parse_date("end", end_str)?,
                });
            }
            other => {
                return Err(HttpError {
                    status: StatusCode::BAD_REQUEST,
                    message: format!(
                        "Unknown restriction type '{other}'. Must be 'day' or 'interval'"
                    ),
                });
            }
        }
    }
    Ok(rules)
}

/// Handler for POST `/events` endpoint.
///
/// Creates a single draft event.
async fn handle_create_event(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<CreateEventApiRequest>,
) -> Result<Json<CreateEventResponse>, HttpError> {
    info!(
        actor_uid = %req.claims.actor_uid,
        role = %req.claims.actor_role,
        title = %req.title,
        "Handling create_event request"
    );

    let actor: AuthenticatedActor = actor_from(&req.claims)?;
    let request: CreateEventRequest = CreateEventRequest {
        title: req.title,
        description: req.description,
        event_type: req.event_type,
        start_time: req.start_time,
        end_time: req.end_time,
        max_capacity: req.max_capacity,
    };

    let mut store = app_state.store.lock().await;
    let response: CreateEventResponse = create_event(&mut store, request, &actor)?;
    drop(store);

    Ok(Json(response))
}

/// Handler for POST `/events/generate` endpoint.
///
/// Generates recurring draft shifts from a recurrence specification.
async fn handle_generate_shifts(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<GenerateShiftsApiRequest>,
) -> Result<Json<GenerateShiftsResponse>, HttpError> {
    info!(
        actor_uid = %req.claims.actor_uid,
        start_date = %req.start_date,
        end_date = %req.end_date,
        pattern = %req.pattern,
        restrictions = req.restrictions.len(),
        "Handling generate_shifts request"
    );

    let actor: AuthenticatedActor = actor_from(&req.claims)?;
    let request: GenerateShiftsRequest = GenerateShiftsRequest {
        description: req.description,
        start_date: parse_date("start_date", &req.start_date)?,
        end_date: parse_date("end_date", &req.end_date)?,
        pattern: req.pattern,
        restrictions: parse_restrictions(&req.restrictions)?,
    };

    let mut store = app_state.store.lock().await;
    let response: GenerateShiftsResponse =
        generate_recurring_shifts(&mut store, request, &app_state.policy, &actor)?;
    drop(store);

    Ok(Json(response))
}

/// Handler for GET `/events` endpoint.
///
/// Lists the events visible to the given role.
async fn handle_list_events(
    AxumState(app_state): AxumState<AppState>,
    Query(params): Query<RoleQuery>,
) -> Result<Json<ListEventsResponse>, HttpError> {
    let role: Role = parse_role(&params.role)?;

    let mut store = app_state.store.lock().await;
    let response: ListEventsResponse = list_events(&mut store, role)?;
    drop(store);

    Ok(Json(response))
}

/// Handler for GET `/events/{event_id}` endpoint.
///
/// Fetches one event, subject to the reader's visibility.
async fn handle_get_event(
    AxumState(app_state): AxumState<AppState>,
    Path(event_id): Path<String>,
    Query(params): Query<RoleQuery>,
) -> Result<Json<EventInfo>, HttpError> {
    let role: Role = parse_role(&params.role)?;

    let mut store = app_state.store.lock().await;
    let response: EventInfo = get_event(&mut store, &event_id, role)?;
    drop(store);

    Ok(Json(response))
}

/// Handler for POST `/events/{event_id}/update` endpoint.
///
/// Merge-updates an event.
async fn handle_update_event(
    AxumState(app_state): AxumState<AppState>,
    Path(event_id): Path<String>,
    Json(req): Json<UpdateEventApiRequest>,
) -> Result<Json<UpdateEventResponse>, HttpError> {
    info!(
        actor_uid = %req.claims.actor_uid,
        event_id = %event_id,
        "Handling update_event request"
    );

    let actor: AuthenticatedActor = actor_from(&req.claims)?;
    let request: UpdateEventRequest = UpdateEventRequest {
        event_id,
        title: req.title,
        description: req.description,
        event_type: req.event_type,
        start_time: req.start_time,
        end_time: req.end_time,
        max_capacity: req.max_capacity,
        supervisor: req.supervisor.map(|s| SupervisorInput {
            id: s.id,
            name: s.name,
            emoji: s.emoji,
        }),
    };

    let mut store = app_state.store.lock().await;
    let response: UpdateEventResponse = update_event(&mut store, request, &actor)?;
    drop(store);

    Ok(Json(response))
}

/// Handler for POST `/events/{event_id}/delete` endpoint.
///
/// Deletes an event and its sign-ups.
async fn handle_delete_event(
    AxumState(app_state): AxumState<AppState>,
    Path(event_id): Path<String>,
    Json(req): Json<ActionApiRequest>,
) -> Result<Json<DeleteEventResponse>, HttpError> {
    info!(
        actor_uid = %req.claims.actor_uid,
        event_id = %event_id,
        "Handling delete_event request"
    );

    let actor: AuthenticatedActor = actor_from(&req.claims)?;

    let mut store = app_state.store.lock().await;
    let response: DeleteEventResponse = delete_event(&mut store, &event_id, &actor)?;
    drop(store);

    Ok(Json(response))
}

/// Handler for POST `/events/{event_id}/publish` endpoint.
async fn handle_publish_event(
    AxumState(app_state): AxumState<AppState>,
    Path(event_id): Path<String>,
    Json(req): Json<ActionApiRequest>,
) -> Result<Json<UpdateEventResponse>, HttpError> {
    info!(
        actor_uid = %req.claims.actor_uid,
        event_id = %event_id,
        "Handling publish_event request"
    );

    let actor: AuthenticatedActor = actor_from(&req.claims)?;

    let mut store = app_state.store.lock().await;
    let response: UpdateEventResponse = publish_event(&mut store, &event_id, &actor)?;
    drop(store);

    Ok(Json(response))
}

/// Handler for POST `/events/{event_id}/unpublish` endpoint.
async fn handle_unpublish_event(
    AxumState(app_state): AxumState<AppState>,
    Path(event_id): Path<String>,
    Json(req): Json<ActionApiRequest>,
) -> Result<Json<UpdateEventResponse>, HttpError> {
    info!(
        actor_uid = %req.claims.actor_uid,
        event_id = %event_id,
        "Handling unpublish_event request"
    );

    let actor: AuthenticatedActor = actor_from(&req.claims)?;

    let mut store = app_state.store.lock().await;
    let response: UpdateEventResponse = unpublish_event(&mut store, &event_id, &actor)?;
    drop(store);

    Ok(Json(response))
}

/// Handler for POST `/signups` endpoint.
///
/// Signs a user up for an event, self or on behalf.
async fn handle_sign_up(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<SignUpApiRequest>,
) -> Result<Json<SignUpResponse>, HttpError> {
    info!(
        actor_uid = %req.claims.actor_uid,
        event_id = %req.event_id,
        user_id = %req.user_id,
        forced = req.forced,
        "Handling sign_up request"
    );

    let actor: AuthenticatedActor = actor_from(&req.claims)?;
    let request: SignUpRequest = SignUpRequest {
        event_id: req.event_id,
        user_id: req.user_id,
        forced: req.forced,
    };

    let mut store = app_state.store.lock().await;
    let response: SignUpResponse = sign_up(&mut store, request, &actor)?;
    drop(store);

    Ok(Json(response))
}

/// Handler for POST `/signups/cancel` endpoint.
async fn handle_cancel_sign_up(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<CancelSignUpApiRequest>,
) -> Result<Json<CancelSignUpResponse>, HttpError> {
    info!(
        actor_uid = %req.claims.actor_uid,
        event_id = %req.event_id,
        user_id = %req.user_id,
        "Handling cancel_sign_up request"
    );

    let actor: AuthenticatedActor = actor_from(&req.claims)?;
    let request: CancelSignUpRequest = CancelSignUpRequest {
        event_id: req.event_id,
        user_id: req.user_id,
    };

    let mut store = app_state.store.lock().await;
    let response: CancelSignUpResponse = cancel_sign_up(&mut store, request, &actor)?;
    drop(store);

    Ok(Json(response))
}

/// Handler for GET `/events/{event_id}/signups` endpoint.
async fn handle_list_event_sign_ups(
    AxumState(app_state): AxumState<AppState>,
    Path(event_id): Path<String>,
) -> Result<Json<ListSignUpsResponse>, HttpError> {
    let mut store = app_state.store.lock().await;
    let response: ListSignUpsResponse = list_sign_ups_for_event(&mut store, &event_id)?;
    drop(store);

    Ok(Json(response))
}

/// Handler for GET `/signups` endpoint.
///
/// Lists sign-ups for one user, or every sign-up when no user is given.
async fn handle_list_sign_ups(
    AxumState(app_state): AxumState<AppState>,
    Query(params): Query<SignUpsQuery>,
) -> Result<Json<ListSignUpsResponse>, HttpError> {
    let mut store = app_state.store.lock().await;
    let response: ListSignUpsResponse = match params.user_id.as_deref() {
        Some(user_id) => list_sign_ups_for_user(&mut store, user_id)?,
        None => list_sign_ups(&mut store)?,
    };
    drop(store);

    Ok(Json(response))
}

/// Handler for POST `/events/batch/publish` endpoint.
async fn handle_batch_publish(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<BatchApiRequest>,
) -> Result<Json<BatchReport>, HttpError> {
    info!(
        actor_uid = %req.claims.actor_uid,
        count = req.event_ids.len(),
        "Handling batch_publish request"
    );

    let actor: AuthenticatedActor = actor_from(&req.claims)?;
    let request: BatchEventIdsRequest = BatchEventIdsRequest {
        event_ids: req.event_ids,
    };

    let mut store = app_state.store.lock().await;
    let report: BatchReport = batch_publish(&mut store, &request, &actor)?;
    drop(store);

    Ok(Json(report))
}

/// Handler for POST `/events/batch/unpublish` endpoint.
async fn handle_batch_unpublish(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<BatchApiRequest>,
) -> Result<Json<BatchReport>, HttpError> {
    info!(
        actor_uid = %req.claims.actor_uid,
        count = req.event_ids.len(),
        "Handling batch_unpublish request"
    );

    let actor: AuthenticatedActor = actor_from(&req.claims)?;
    let request: BatchEventIdsRequest = BatchEventIdsRequest {
        event_ids: req.event_ids,
    };

    let mut store = app_state.store.lock().await;
    let report: BatchReport = batch_unpublish(&mut store, &request, &actor)?;
    drop(store);

    Ok(Json(report))
}

/// Handler for POST `/events/batch/delete` endpoint.
async fn handle_batch_delete(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<BatchApiRequest>,
) -> Result<Json<BatchReport>, HttpError> {
    info!(
        actor_uid = %req.claims.actor_uid,
        count = req.event_ids.len(),
        "Handling batch_delete request"
    );

    let actor: AuthenticatedActor = actor_from(&req.claims)?;
    let request: BatchEventIdsRequest = BatchEventIdsRequest {
        event_ids: req.event_ids,
    };

    let mut store = app_state.store.lock().await;
    let report: BatchReport = batch_delete(&mut store, &request, &actor)?;
    drop(store);

    Ok(Json(report))
}

/// Handler for POST `/events/batch/assign_supervisor` endpoint.
async fn handle_batch_assign_supervisor(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<BatchAssignSupervisorApiRequest>,
) -> Result<Json<BatchReport>, HttpError> {
    info!(
        actor_uid = %req.claims.actor_uid,
        count = req.event_ids.len(),
        "Handling batch_assign_supervisor request"
    );

    let actor: AuthenticatedActor = actor_from(&req.claims)?;
    let request: BatchAssignSupervisorRequest = BatchAssignSupervisorRequest {
        event_ids: req.event_ids,
        supervisor: SupervisorInput {
            id: req.supervisor_id,
            name: req.supervisor_name,
            emoji: req.supervisor_emoji,
        },
    };

    let mut store = app_state.store.lock().await;
    let report: BatchReport = batch_assign_supervisor(&mut store, &request, &actor)?;
    drop(store);

    Ok(Json(report))
}

/// Handler for POST `/events/batch/reset_signups` endpoint.
async fn handle_batch_reset_sign_ups(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<BatchApiRequest>,
) -> Result<Json<BatchReport>, HttpError> {
    info!(
        actor_uid = %req.claims.actor_uid,
        count = req.event_ids.len(),
        "Handling batch_reset_signups request"
    );

    let actor: AuthenticatedActor = actor_from(&req.claims)?;
    let request: BatchEventIdsRequest = BatchEventIdsRequest {
        event_ids: req.event_ids,
    };

    let mut store = app_state.store.lock().await;
    let report: BatchReport = batch_reset_sign_ups(&mut store, &request, &actor)?;
    drop(store);

    Ok(Json(report))
}

/// Handler for GET `/users` endpoint.
async fn handle_list_users(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<ListUsersResponse>, HttpError> {
    let mut store = app_state.store.lock().await;
    let response: ListUsersResponse = list_users(&mut store)?;
    drop(store);

    Ok(Json(response))
}

/// Handler for POST `/users` endpoint.
///
/// Creates or overwrites a user record (admin only).
async fn handle_upsert_user(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<UpsertUserApiRequest>,
) -> Result<Json<UpsertUserResponse>, HttpError> {
    info!(
        actor_uid = %req.claims.actor_uid,
        user_id = %req.user_id,
        "Handling upsert_user request"
    );

    let actor: AuthenticatedActor = actor_from(&req.claims)?;
    let request: UpsertUserRequest = UpsertUserRequest {
        user_id: req.user_id,
        id_number: req.id_number,
        name: req.name,
        role: req.role,
    };

    let mut store = app_state.store.lock().await;
    let response: UpsertUserResponse = upsert_user(&mut store, request, &actor)?;
    drop(store);

    Ok(Json(response))
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/events", post(handle_create_event))
        .route("/events", get(handle_list_events))
        .route("/events/generate", post(handle_generate_shifts))
        .route("/events/batch/publish", post(handle_batch_publish))
        .route("/events/batch/unpublish", post(handle_batch_unpublish))
        .route("/events/batch/delete", post(handle_batch_delete))
        .route(
            "/events/batch/assign_supervisor",
            post(handle_batch_assign_supervisor),
        )
        .route(
            "/events/batch/reset_signups",
            post(handle_batch_reset_sign_ups),
        )
        .route("/events/{event_id}", get(handle_get_event))
        .route("/events/{event_id}/update", post(handle_update_event))
        .route("/events/{event_id}/delete", post(handle_delete_event))
        .route("/events/{event_id}/publish", post(handle_publish_event))
        .route("/events/{event_id}/unpublish", post(handle_unpublish_event))
        .route("/events/{event_id}/signups", get(handle_list_event_sign_ups))
        .route("/signups", post(handle_sign_up))
        .route("/signups", get(handle_list_sign_ups))
        .route("/signups/cancel", post(handle_cancel_sign_up))
        .route("/users", post(handle_upsert_user))
        .route("/users", get(handle_list_users))
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Linha Server");

    // Initialize the store (in-memory or file-based based on CLI argument)
    let store: Store = if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path);
        Store::new_with_file(db_path)?
    } else {
        info!("Using in-memory database");
        Store::new_in_memory()?
    };

    let app_state: AppState = AppState {
        store: Arc::new(Mutex::new(store)),
        policy: ShiftPolicy::default(),
    };

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: std::net::SocketAddr = format!("127.0.0.1:{}", args.port).parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
