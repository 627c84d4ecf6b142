//! In-memory user store
//!
//! Backs the integration test harness and keeps the same observable
//! behavior as the PostgreSQL store: insertion order on `find_all`,
//! whole-document replacement on `update`.

use anyhow::{bail, Result};
use async_trait::async_trait;
use exercise_tracker_shared::models::User;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::UserStore;

/// User store held entirely in memory.
#[derive(Debug, Default)]
pub struct MemoryUserStore {
    users: RwLock<Vec<User>>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn insert(&self, username: &str) -> Result<User> {
        let user = User {
            id: Uuid::new_v4(),
            username: username.to_string(),
            log: Vec::new(),
        };

        self.users.write().await.push(user.clone());
        Ok(user)
    }

    async fn find_all(&self) -> Result<Vec<User>> {
        Ok(self.users.read().await.clone())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>> {
        Ok(self
            .users
            .read()
            .await
            .iter()
            .find(|user| user.id == id)
            .cloned())
    }

    async fn update(&self, user: &User) -> Result<User> {
        let mut users = self.users.write().await;
        match users.iter_mut().find(|stored| stored.id == user.id) {
            Some(stored) => {
                *stored = user.clone();
                Ok(user.clone())
            }
            None => bail!("user {} does not exist in the store", user.id),
        }
    }
}
