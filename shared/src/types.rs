//! API request and response types
//!
//! Request bodies keep every field optional: required-field checks run in
//! the service layer so that a missing `username` yields the contract's
//! 400 envelope instead of a deserializer rejection.

use serde::{Deserialize, Serialize};

/// Create-user request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserRequest {
    #[serde(default)]
    pub username: Option<String>,
}

/// User identity as returned by create/list; the log is never included.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub username: String,
}

/// Add-exercise request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddExerciseRequest {
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub duration: Option<DurationField>,
    /// Calendar date string; omitted or blank means "today".
    #[serde(default)]
    pub date: Option<String>,
}

/// Duration as sent on the wire: a JSON integer or its string form.
///
/// Form-style clients submit every field as a string, so `"30"` must be
/// as acceptable as `30`. Fractional numbers fail both variants and are
/// rejected at deserialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DurationField {
    Minutes(i64),
    Text(String),
}

impl DurationField {
    /// The parsed minute count, if this value holds one.
    pub fn as_minutes(&self) -> Option<i64> {
        match self {
            Self::Minutes(n) => Some(*n),
            Self::Text(s) => s.trim().parse().ok(),
        }
    }

    /// True for an empty or whitespace-only string, which counts as a
    /// missing field rather than a malformed one.
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Minutes(_) => false,
            Self::Text(s) => s.trim().is_empty(),
        }
    }
}

/// Add-exercise response: the new entry flattened beside the user
/// identity. Deliberately not the full log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExerciseResponse {
    pub id: String,
    pub username: String,
    pub description: String,
    pub duration: i64,
    /// Human-readable, e.g. `"Sun Jan 15 2023"`.
    pub date: String,
}

/// Query parameters for the log endpoint.
///
/// All three arrive as raw strings and are parsed leniently: a value that
/// does not parse is ignored, never an error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LogsQuery {
    #[serde(default)]
    pub from: Option<String>,
    #[serde(default)]
    pub to: Option<String>,
    #[serde(default)]
    pub limit: Option<String>,
}

/// One rendered entry in a logs response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub description: String,
    pub duration: i64,
    pub date: String,
}

/// Logs response: user identity, the filtered entries, and their count.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogsResponse {
    pub id: String,
    pub username: String,
    pub count: usize,
    pub log: Vec<LogEntry>,
}

/// The error envelope used by every failure response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_accepts_number_and_string() {
        let n: DurationField = serde_json::from_value(serde_json::json!(30)).unwrap();
        assert_eq!(n.as_minutes(), Some(30));

        let s: DurationField = serde_json::from_value(serde_json::json!("30")).unwrap();
        assert_eq!(s.as_minutes(), Some(30));

        let padded: DurationField = serde_json::from_value(serde_json::json!(" 45 ")).unwrap();
        assert_eq!(padded.as_minutes(), Some(45));
    }

    #[test]
    fn duration_rejects_fractional_numbers() {
        let result: Result<DurationField, _> = serde_json::from_value(serde_json::json!(30.5));
        assert!(result.is_err());
    }

    #[test]
    fn duration_text_that_is_not_a_number_has_no_minutes() {
        let bad: DurationField = serde_json::from_value(serde_json::json!("half an hour")).unwrap();
        assert_eq!(bad.as_minutes(), None);
        assert!(!bad.is_blank());
    }

    #[test]
    fn blank_duration_counts_as_missing() {
        let blank: DurationField = serde_json::from_value(serde_json::json!("   ")).unwrap();
        assert!(blank.is_blank());
        assert_eq!(blank.as_minutes(), None);
    }

    #[test]
    fn add_exercise_request_tolerates_absent_fields() {
        let req: AddExerciseRequest = serde_json::from_str("{}").unwrap();
        assert!(req.description.is_none());
        assert!(req.duration.is_none());
        assert!(req.date.is_none());
    }
}
