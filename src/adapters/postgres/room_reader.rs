//! PostgreSQL implementation of RoomReader.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::foundation::{DomainError, RoomId};
use crate::domain::hotel::Room;
use crate::ports::RoomReader;

use super::rows::row_to_room;

/// PostgreSQL implementation of RoomReader.
///
/// Occupancy is counted in the same statement that reads the room.
#[derive(Clone)]
pub struct PostgresRoomReader {
    pool: PgPool,
}

impl PostgresRoomReader {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RoomReader for PostgresRoomReader {
    async fn find_by_id(&self, room_id: &RoomId) -> Result<Option<Room>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT r.id, r.name, r.capacity, r.hotel_id, r.created_at, r.updated_at,
                   (SELECT COUNT(*) FROM bookings b WHERE b.room_id = r.id) AS occupancy
            FROM rooms r
            WHERE r.id = $1
            "#,
        )
        .bind(room_id.as_i32())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to fetch room", e))?;

        row.as_ref().map(row_to_room).transpose()
    }
}
