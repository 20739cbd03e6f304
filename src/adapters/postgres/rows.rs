//! Row decoding helpers shared by the PostgreSQL adapters.

use sqlx::postgres::{PgRow, Postgres};
use sqlx::{Decode, Row, Type};

use crate::domain::booking::Booking;
use crate::domain::foundation::{
    BookingId, DomainError, HotelId, RoomId, Timestamp, UserId, ValidationError,
};
use crate::domain::hotel::Room;

/// Reads a column, reporting a decode failure as a database error.
pub(super) fn column<'r, T>(row: &'r PgRow, name: &str) -> Result<T, DomainError>
where
    T: Decode<'r, Postgres> + Type<Postgres>,
{
    row.try_get(name)
        .map_err(|e| DomainError::database(&format!("Failed to get {}", name), e))
}

/// Reads an integer id column into its typed identifier.
pub(super) fn id<T>(row: &PgRow, name: &str) -> Result<T, DomainError>
where
    T: TryFrom<i32, Error = ValidationError>,
{
    let raw: i32 = column(row, name)?;
    T::try_from(raw).map_err(|e| DomainError::database(&format!("Invalid {}", name), e))
}

pub(super) fn timestamp(row: &PgRow, name: &str) -> Result<Timestamp, DomainError> {
    let value: chrono::DateTime<chrono::Utc> = column(row, name)?;
    Ok(Timestamp::from_datetime(value))
}

/// Decodes a row selected with the room columns plus an `occupancy` count.
pub(super) fn row_to_room(row: &PgRow) -> Result<Room, DomainError> {
    let capacity: i32 = column(row, "capacity")?;
    let occupancy: i64 = column(row, "occupancy")?;

    Ok(Room {
        id: id::<RoomId>(row, "id")?,
        name: column(row, "name")?,
        capacity: u32::try_from(capacity)
            .map_err(|e| DomainError::database("Invalid room capacity", e))?,
        hotel_id: id::<HotelId>(row, "hotel_id")?,
        occupancy: u32::try_from(occupancy)
            .map_err(|e| DomainError::database("Invalid room occupancy", e))?,
        created_at: timestamp(row, "created_at")?,
        updated_at: timestamp(row, "updated_at")?,
    })
}

pub(super) fn row_to_booking(row: &PgRow) -> Result<Booking, DomainError> {
    Ok(Booking {
        id: id::<BookingId>(row, "id")?,
        user_id: id::<UserId>(row, "user_id")?,
        room_id: id::<RoomId>(row, "room_id")?,
        created_at: timestamp(row, "created_at")?,
        updated_at: timestamp(row, "updated_at")?,
    })
}
