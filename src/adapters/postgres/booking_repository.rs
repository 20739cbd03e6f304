//! PostgreSQL implementation of BookingRepository.
//!
//! Writes are capacity-checked inside a transaction: the target room row is
//! locked with `SELECT ... FOR UPDATE`, its bookings are counted, and the
//! insert or update only proceeds while the count is below capacity.
//! Concurrent writers for the same room therefore queue on the row lock and
//! each sees the occupancy left by the previous one.

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, Transaction};

use crate::domain::booking::Booking;
use crate::domain::foundation::{BookingId, DomainError, ErrorCode, RoomId, UserId};
use crate::ports::BookingRepository;

use super::rows::row_to_booking;

/// PostgreSQL implementation of BookingRepository.
#[derive(Clone)]
pub struct PostgresBookingRepository {
    pool: PgPool,
}

impl PostgresBookingRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookingRepository for PostgresBookingRepository {
    async fn find_by_user(&self, user_id: &UserId) -> Result<Option<Booking>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, user_id, room_id, created_at, updated_at
            FROM bookings
            WHERE user_id = $1
            ORDER BY id
            LIMIT 1
            "#,
        )
        .bind(user_id.as_i32())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to fetch booking", e))?;

        row.as_ref().map(row_to_booking).transpose()
    }

    async fn create(&self, room_id: &RoomId, user_id: &UserId) -> Result<Booking, DomainError> {
        let mut tx = begin(&self.pool).await?;

        lock_room_with_vacancy(&mut tx, room_id).await?;

        let row = sqlx::query(
            r#"
            INSERT INTO bookings (user_id, room_id)
            VALUES ($1, $2)
            RETURNING id, user_id, room_id, created_at, updated_at
            "#,
        )
        .bind(user_id.as_i32())
        .bind(room_id.as_i32())
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| DomainError::database("Failed to insert booking", e))?;

        let booking = row_to_booking(&row)?;
        commit(tx).await?;

        Ok(booking)
    }

    async fn update_room(
        &self,
        booking_id: &BookingId,
        room_id: &RoomId,
    ) -> Result<Booking, DomainError> {
        let mut tx = begin(&self.pool).await?;

        let exists: Option<(i32,)> =
            sqlx::query_as("SELECT id FROM bookings WHERE id = $1 FOR UPDATE")
                .bind(booking_id.as_i32())
                .fetch_optional(&mut *tx)
                .await
                .map_err(|e| DomainError::database("Failed to lock booking", e))?;

        if exists.is_none() {
            return Err(DomainError::new(
                ErrorCode::BookingNotFound,
                format!("Booking not found: {}", booking_id),
            ));
        }

        lock_room_with_vacancy(&mut tx, room_id).await?;

        let row = sqlx::query(
            r#"
            UPDATE bookings SET
                room_id = $2,
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, user_id, room_id, created_at, updated_at
            "#,
        )
        .bind(booking_id.as_i32())
        .bind(room_id.as_i32())
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| DomainError::database("Failed to update booking", e))?;

        let booking = row_to_booking(&row)?;
        commit(tx).await?;

        Ok(booking)
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Helper functions
// ════════════════════════════════════════════════════════════════════════════

async fn begin(pool: &PgPool) -> Result<Transaction<'static, Postgres>, DomainError> {
    pool.begin()
        .await
        .map_err(|e| DomainError::database("Failed to begin transaction", e))
}

async fn commit(tx: Transaction<'static, Postgres>) -> Result<(), DomainError> {
    tx.commit()
        .await
        .map_err(|e| DomainError::database("Failed to commit transaction", e))
}

/// Locks the room row and fails unless another booking fits.
///
/// A booking already in the room counts toward occupancy, including the
/// one being moved when source and target are the same room.
async fn lock_room_with_vacancy(
    tx: &mut Transaction<'static, Postgres>,
    room_id: &RoomId,
) -> Result<(), DomainError> {
    let capacity: Option<(i32,)> =
        sqlx::query_as("SELECT capacity FROM rooms WHERE id = $1 FOR UPDATE")
            .bind(room_id.as_i32())
            .fetch_optional(&mut **tx)
            .await
            .map_err(|e| DomainError::database("Failed to lock room", e))?;

    let Some((capacity,)) = capacity else {
        return Err(
            DomainError::new(ErrorCode::RoomNotFound, format!("Room not found: {}", room_id))
                .with_detail("room_id", room_id.to_string()),
        );
    };

    let (occupancy,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM bookings WHERE room_id = $1")
        .bind(room_id.as_i32())
        .fetch_one(&mut **tx)
        .await
        .map_err(|e| DomainError::database("Failed to count room bookings", e))?;

    if occupancy >= i64::from(capacity) {
        return Err(DomainError::new(
            ErrorCode::RoomFull,
            format!("Room {} is full", room_id),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    async fn pool() -> PgPool {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
        let pool = PgPool::connect(&url).await.expect("connect");
        sqlx::migrate!("./migrations").run(&pool).await.expect("migrate");
        pool
    }

    async fn seed_room(pool: &PgPool, capacity: i32) -> RoomId {
        let (hotel_id,): (i32,) =
            sqlx::query_as("INSERT INTO hotels (name, image) VALUES ('Test', '') RETURNING id")
                .fetch_one(pool)
                .await
                .unwrap();
        let (room_id,): (i32,) = sqlx::query_as(
            "INSERT INTO rooms (name, capacity, hotel_id) VALUES ('101', $1, $2) RETURNING id",
        )
        .bind(capacity)
        .bind(hotel_id)
        .fetch_one(pool)
        .await
        .unwrap();
        RoomId::new(room_id).unwrap()
    }

    async fn seed_user(pool: &PgPool) -> UserId {
        let (user_id,): (i32,) = sqlx::query_as(
            "INSERT INTO users (email, password) VALUES (md5(random()::text) || '@test', 'x') RETURNING id",
        )
        .fetch_one(pool)
        .await
        .unwrap();
        UserId::new(user_id).unwrap()
    }

    #[tokio::test]
    #[ignore = "Requires PostgreSQL at DATABASE_URL"]
    async fn concurrent_creates_never_exceed_capacity() {
        let pool = pool().await;
        let room_id = seed_room(&pool, 2).await;
        let repository = Arc::new(PostgresBookingRepository::new(pool.clone()));

        let mut tasks = Vec::new();
        for _ in 0..6 {
            let user_id = seed_user(&pool).await;
            let repository = repository.clone();
            tasks.push(tokio::spawn(async move {
                repository.create(&room_id, &user_id).await
            }));
        }

        let mut admitted = 0;
        for task in tasks {
            match task.await.unwrap() {
                Ok(_) => admitted += 1,
                Err(err) => assert_eq!(err.code, ErrorCode::RoomFull),
            }
        }

        assert_eq!(admitted, 2);
    }

    #[tokio::test]
    #[ignore = "Requires PostgreSQL at DATABASE_URL"]
    async fn update_into_unknown_room_is_room_not_found() {
        let pool = pool().await;
        let room_id = seed_room(&pool, 1).await;
        let user_id = seed_user(&pool).await;
        let repository = PostgresBookingRepository::new(pool);
        let booking = repository.create(&room_id, &user_id).await.unwrap();

        let err = repository
            .update_room(&booking.id, &RoomId::new(i32::MAX).unwrap())
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::RoomNotFound);
    }
}
