//! User and exercise log API routes

use crate::error::ApiError;
use crate::services::users::{AddExerciseInput, UserService};
use crate::state::AppState;
use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use exercise_tracker_shared::types::{
    AddExerciseRequest, CreateUserRequest, ExerciseResponse, LogEntry, LogsQuery, LogsResponse,
    UserResponse,
};
use exercise_tracker_shared::validation::format_log_date;

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", post(create_user).get(list_users))
        .route("/users/:id/exercises", post(add_exercise))
        .route("/users/:id/logs", get(get_logs))
}

/// Collapse any body rejection into the standard 400 envelope.
fn invalid_body(_: JsonRejection) -> ApiError {
    ApiError::Validation("invalid request body".to_string())
}

/// POST /api/users - Create a user
///
/// The username is trimmed; duplicates are allowed and receive their own id.
async fn create_user(
    State(state): State<AppState>,
    body: Result<Json<CreateUserRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    let Json(req) = body.map_err(invalid_body)?;

    let user = UserService::create_user(state.store(), req.username.as_deref()).await?;

    Ok((
        StatusCode::CREATED,
        Json(UserResponse {
            id: user.id.to_string(),
            username: user.username,
        }),
    ))
}

/// GET /api/users - List every user in creation order
async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<UserResponse>>, ApiError> {
    let users = UserService::list_users(state.store()).await?;

    let response: Vec<UserResponse> = users
        .into_iter()
        .map(|user| UserResponse {
            id: user.id.to_string(),
            username: user.username,
        })
        .collect();

    Ok(Json(response))
}

/// POST /api/users/:id/exercises - Append an exercise to a user's log
async fn add_exercise(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<AddExerciseRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ExerciseResponse>), ApiError> {
    let Json(req) = body.map_err(invalid_body)?;

    let input = AddExerciseInput {
        description: req.description,
        duration: req.duration,
        date: req.date,
    };

    let added = UserService::add_exercise(state.store(), &id, input).await?;

    Ok((
        StatusCode::CREATED,
        Json(ExerciseResponse {
            id: added.user_id.to_string(),
            username: added.username,
            description: added.entry.description,
            duration: added.entry.duration,
            date: format_log_date(added.entry.date),
        }),
    ))
}

/// GET /api/users/:id/logs - A user's exercise log, optionally filtered
async fn get_logs(
    State(state): State<AppState>,
    Path(id): Path<String>,
    query: Result<Query<LogsQuery>, QueryRejection>,
) -> Result<Json<LogsResponse>, ApiError> {
    // Filters are lenient all the way down: a query string that does not
    // even deserialize counts as no filters at all.
    let query = query.map(|Query(query)| query).unwrap_or_default();

    let log = UserService::get_logs(state.store(), &id, &query).await?;

    let entries: Vec<LogEntry> = log
        .entries
        .into_iter()
        .map(|entry| LogEntry {
            description: entry.description,
            duration: entry.duration,
            date: format_log_date(entry.date),
        })
        .collect();

    Ok(Json(LogsResponse {
        id: log.user_id.to_string(),
        username: log.username,
        count: entries.len(),
        log: entries,
    }))
}
