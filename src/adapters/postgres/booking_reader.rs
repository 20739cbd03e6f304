//! PostgreSQL implementation of BookingReader.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::booking::BookingWithRoom;
use crate::domain::foundation::{BookingId, DomainError, UserId};
use crate::ports::BookingReader;

use super::rows::{id, row_to_room};

/// PostgreSQL implementation of BookingReader.
#[derive(Clone)]
pub struct PostgresBookingReader {
    pool: PgPool,
}

impl PostgresBookingReader {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookingReader for PostgresBookingReader {
    async fn get_by_user(&self, user_id: &UserId) -> Result<Option<BookingWithRoom>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT b.id AS booking_id,
                   r.id, r.name, r.capacity, r.hotel_id, r.created_at, r.updated_at,
                   (SELECT COUNT(*) FROM bookings o WHERE o.room_id = r.id) AS occupancy
            FROM bookings b
            JOIN rooms r ON r.id = b.room_id
            WHERE b.user_id = $1
            ORDER BY b.id
            LIMIT 1
            "#,
        )
        .bind(user_id.as_i32())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to fetch booking", e))?;

        match row {
            Some(row) => Ok(Some(BookingWithRoom {
                id: id::<BookingId>(&row, "booking_id")?,
                room: row_to_room(&row)?,
            })),
            None => Ok(None),
        }
    }
}
