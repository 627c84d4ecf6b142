//! The store capability
//!
//! The API service persists users through this trait rather than an
//! ambient database handle; [`crate::state::AppState`] injects a concrete
//! implementation. The contract is document-shaped: users are read and
//! written whole, including their embedded exercise log, and the store is
//! the party that assigns identifiers.

mod memory;
mod postgres;

pub use memory::MemoryUserStore;
pub use postgres::PgUserStore;

use anyhow::Result;
use async_trait::async_trait;
use exercise_tracker_shared::models::User;
use uuid::Uuid;

/// Persistent collection of users.
///
/// `update` replaces the stored document in full, so two writers racing
/// on the same user resolve as last-write-wins; callers that need the
/// current log must `find_by_id` first (the read-modify-write shape of
/// the add-exercise operation).
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Persist a new user with an empty log and a freshly assigned id.
    async fn insert(&self, username: &str) -> Result<User>;

    /// Every stored user, in insertion order.
    async fn find_all(&self) -> Result<Vec<User>>;

    /// Look up a single user. `Ok(None)` when the id is unknown.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>>;

    /// Replace the stored document. Errors when the id is unknown.
    async fn update(&self, user: &User) -> Result<User>;
}
