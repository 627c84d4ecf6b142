//! Data models for the Exercise Tracker application
//!
//! A [`User`] is the single stored document: identity plus an embedded,
//! append-ordered exercise log. These shapes also define the JSON layout
//! of the persisted document, so field names here are load-bearing.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A tracked user with their embedded exercise log.
///
/// The log is part of the document itself: the store reads and writes the
/// whole user, it never addresses individual entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Assigned by the store on creation; rendered as a string on the wire.
    pub id: Uuid,
    /// Non-empty, stored without surrounding whitespace. Not unique.
    pub username: String,
    /// Insertion-ordered exercise entries; empty for a fresh user.
    #[serde(default)]
    pub log: Vec<Exercise>,
}

/// One exercise entry embedded in a user's log.
///
/// Entries have no identity of their own and are never edited after being
/// appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    pub description: String,
    /// Whole minutes.
    pub duration: i64,
    /// Calendar date only; time of day is not tracked.
    pub date: NaiveDate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exercise_document_shape() {
        let entry = Exercise {
            description: "run".to_string(),
            duration: 30,
            date: NaiveDate::from_ymd_opt(2023, 1, 15).unwrap(),
        };

        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "description": "run",
                "duration": 30,
                "date": "2023-01-15",
            })
        );
    }

    #[test]
    fn user_log_defaults_to_empty_on_deserialize() {
        let user: User = serde_json::from_value(serde_json::json!({
            "id": "67e55044-10b1-426f-9247-bb680e5fe0c8",
            "username": "alice",
        }))
        .unwrap();

        assert!(user.log.is_empty());
    }
}
