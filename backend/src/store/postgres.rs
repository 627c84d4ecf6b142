//! PostgreSQL-backed user store
//!
//! One row per user; the exercise log is a JSONB array column read and
//! written together with the rest of the document.

use anyhow::Result;
use async_trait::async_trait;
use exercise_tracker_shared::models::{Exercise, User};
use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

use super::UserStore;

/// Row shape for the users table.
#[derive(Debug, sqlx::FromRow)]
struct UserRow {
    id: Uuid,
    username: String,
    log: Json<Vec<Exercise>>,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self {
            id: row.id,
            username: row.username,
            log: row.log.0,
        }
    }
}

/// User store backed by PostgreSQL.
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn insert(&self, username: &str) -> Result<User> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            INSERT INTO users (id, username)
            VALUES ($1, $2)
            RETURNING id, username, log
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(username)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    async fn find_all(&self) -> Result<Vec<User>> {
        let rows = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, username, log
            FROM users
            ORDER BY created_at, id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(User::from).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, username, log
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(User::from))
    }

    // Whole-document write: the log column is replaced, not appended to,
    // so concurrent updates of the same user resolve as last-write-wins.
    async fn update(&self, user: &User) -> Result<User> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            UPDATE users
            SET username = $2, log = $3
            WHERE id = $1
            RETURNING id, username, log
            "#,
        )
        .bind(user.id)
        .bind(&user.username)
        .bind(Json(&user.log))
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }
}
