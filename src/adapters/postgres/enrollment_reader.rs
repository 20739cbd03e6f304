//! PostgreSQL implementation of EnrollmentReader.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::enrollment::Enrollment;
use crate::domain::foundation::{DomainError, EnrollmentId, UserId};
use crate::ports::EnrollmentReader;

use super::rows::id;

/// PostgreSQL implementation of EnrollmentReader.
#[derive(Clone)]
pub struct PostgresEnrollmentReader {
    pool: PgPool,
}

impl PostgresEnrollmentReader {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EnrollmentReader for PostgresEnrollmentReader {
    async fn find_by_user(&self, user_id: &UserId) -> Result<Option<Enrollment>, DomainError> {
        let row = sqlx::query("SELECT id, user_id FROM enrollments WHERE user_id = $1")
            .bind(user_id.as_i32())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to fetch enrollment", e))?;

        match row {
            Some(row) => Ok(Some(Enrollment::new(
                id::<EnrollmentId>(&row, "id")?,
                id::<UserId>(&row, "user_id")?,
            ))),
            None => Ok(None),
        }
    }
}
