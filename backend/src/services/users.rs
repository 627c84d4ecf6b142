//! User and exercise log operations
//!
//! All checks run in a fixed order before anything is written: required
//! body fields first, then identifier syntax, then existence, then the
//! per-field parses. Log filters are the one deliberate exception to
//! strictness: an unparseable `from`, `to` or `limit` is ignored rather
//! than rejected.

use chrono::{NaiveDate, Utc};
use exercise_tracker_shared::models::{Exercise, User};
use exercise_tracker_shared::types::{DurationField, LogsQuery};
use exercise_tracker_shared::validation::{parse_date, parse_limit, trimmed_non_empty};
use uuid::Uuid;

use crate::error::{ApiError, ApiResult};
use crate::store::UserStore;

/// Body of an add-exercise call, prior to validation.
///
/// Every field is optional here; the service decides which absences are
/// errors and in what order they are reported.
#[derive(Debug, Clone, Default)]
pub struct AddExerciseInput {
    pub description: Option<String>,
    pub duration: Option<DurationField>,
    pub date: Option<String>,
}

/// A stored exercise together with the identity of its owner.
#[derive(Debug, Clone)]
pub struct AddedExercise {
    pub user_id: Uuid,
    pub username: String,
    pub entry: Exercise,
}

/// A user's log after filtering, still in stored order.
#[derive(Debug, Clone)]
pub struct UserLog {
    pub user_id: Uuid,
    pub username: String,
    pub entries: Vec<Exercise>,
}

/// Service for user accounts and their exercise logs.
pub struct UserService;

impl UserService {
    /// Create a user from a raw username.
    ///
    /// The name is trimmed before storage; a missing or blank name is a
    /// validation error. Duplicate names are allowed.
    pub async fn create_user(store: &dyn UserStore, username: Option<&str>) -> ApiResult<User> {
        let username = username
            .and_then(trimmed_non_empty)
            .ok_or_else(|| ApiError::Validation("username is required".to_string()))?;

        store.insert(&username).await.map_err(ApiError::Internal)
    }

    /// Every user, in creation order, logs omitted.
    pub async fn list_users(store: &dyn UserStore) -> ApiResult<Vec<User>> {
        store.find_all().await.map_err(ApiError::Internal)
    }

    /// Append an exercise to a user's log.
    ///
    /// Date defaults to today (UTC) when absent; duration accepts an
    /// integer or a string holding one, never a fractional value.
    pub async fn add_exercise(
        store: &dyn UserStore,
        id: &str,
        input: AddExerciseInput,
    ) -> ApiResult<AddedExercise> {
        // Required fields are checked before the id is even looked at.
        let description = input.description.as_deref().and_then(trimmed_non_empty);
        let duration = input.duration.as_ref().filter(|d| !d.is_blank());
        let (description, duration) = match (description, duration) {
            (Some(description), Some(duration)) => (description, duration),
            _ => {
                return Err(ApiError::Validation(
                    "description and duration are required".to_string(),
                ))
            }
        };

        let user_id = parse_user_id(id)?;
        let mut user = store
            .find_by_id(user_id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("user not found".to_string()))?;

        let date = match input.date.as_deref().and_then(trimmed_non_empty) {
            Some(raw) => {
                parse_date(&raw).ok_or_else(|| ApiError::Validation("invalid date".to_string()))?
            }
            None => Utc::now().date_naive(),
        };

        let minutes = duration
            .as_minutes()
            .ok_or_else(|| ApiError::Validation("duration must be an integer".to_string()))?;

        let entry = Exercise {
            description,
            duration: minutes,
            date,
        };
        user.log.push(entry.clone());
        let updated = store.update(&user).await.map_err(ApiError::Internal)?;

        Ok(AddedExercise {
            user_id: updated.id,
            username: updated.username,
            entry,
        })
    }

    /// Fetch a user's log, narrowed by the optional query filters.
    pub async fn get_logs(
        store: &dyn UserStore,
        id: &str,
        query: &LogsQuery,
    ) -> ApiResult<UserLog> {
        let user_id = parse_user_id(id)?;
        let user = store
            .find_by_id(user_id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("user not found".to_string()))?;

        let from = query.from.as_deref().and_then(parse_date);
        let to = query.to.as_deref().and_then(parse_date);
        let limit = query.limit.as_deref().and_then(parse_limit);

        let entries = Self::filter_log(&user.log, from, to, limit);
        Ok(UserLog {
            user_id: user.id,
            username: user.username,
            entries,
        })
    }

    /// Apply an inclusive date window and a head limit to a log.
    ///
    /// Entries keep their stored order; `limit` truncates after the
    /// window has been applied.
    pub fn filter_log(
        log: &[Exercise],
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
        limit: Option<usize>,
    ) -> Vec<Exercise> {
        log.iter()
            .filter(|entry| from.map_or(true, |from| entry.date >= from))
            .filter(|entry| to.map_or(true, |to| entry.date <= to))
            .take(limit.unwrap_or(usize::MAX))
            .cloned()
            .collect()
    }
}

/// Syntax check for a path identifier, shared by both id-taking operations.
fn parse_user_id(raw: &str) -> ApiResult<Uuid> {
    Uuid::parse_str(raw.trim()).map_err(|_| ApiError::Validation("invalid id format".to_string()))
}
