//! PostgreSQL implementation of SessionStore.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::foundation::{DomainError, UserId};
use crate::ports::SessionStore;

/// PostgreSQL implementation of SessionStore.
#[derive(Clone)]
pub struct PostgresSessionStore {
    pool: PgPool,
}

impl PostgresSessionStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SessionStore for PostgresSessionStore {
    async fn is_active(&self, token: &str, user_id: &UserId) -> Result<bool, DomainError> {
        let result: (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM sessions WHERE token = $1 AND user_id = $2)",
        )
        .bind(token)
        .bind(user_id.as_i32())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to look up session", e))?;

        Ok(result.0)
    }
}
