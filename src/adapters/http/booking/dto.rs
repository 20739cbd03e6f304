//! HTTP DTOs for booking endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::booking::{Booking, BookingWithRoom};
use crate::domain::foundation::{RoomId, ValidationError};
use crate::domain::hotel::Room;

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Body of `POST /booking` and `PUT /booking/:bookingId`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub room_id: NumericInput,
}

/// A number that clients may also send as a numeric string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum NumericInput {
    Number(serde_json::Number),
    Text(String),
}

impl BookingRequest {
    /// Coerces `roomId` into a room id.
    pub fn room_id(&self) -> Result<RoomId, ValidationError> {
        let value = match &self.room_id {
            NumericInput::Number(n) => n.as_i64(),
            NumericInput::Text(s) => s.trim().parse::<i64>().ok(),
        }
        .ok_or_else(|| ValidationError::invalid_format("roomId", "must be an integer"))?;

        let value = i32::try_from(value)
            .map_err(|_| ValidationError::invalid_format("roomId", "out of range"))?;

        RoomId::new(value)
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Response for booking writes.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingIdResponse {
    pub booking_id: i32,
}

impl From<Booking> for BookingIdResponse {
    fn from(booking: Booking) -> Self {
        Self {
            booking_id: booking.id.as_i32(),
        }
    }
}

/// A user's booking with the room it occupies.
#[derive(Debug, Clone, Serialize)]
pub struct BookingResponse {
    pub id: i32,
    #[serde(rename = "Room")]
    pub room: RoomResponse,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomResponse {
    pub id: i32,
    pub name: String,
    pub capacity: u32,
    pub hotel_id: i32,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Room> for RoomResponse {
    fn from(room: Room) -> Self {
        Self {
            id: room.id.as_i32(),
            name: room.name,
            capacity: room.capacity,
            hotel_id: room.hotel_id.as_i32(),
            created_at: room.created_at.to_rfc3339(),
            updated_at: room.updated_at.to_rfc3339(),
        }
    }
}

impl From<BookingWithRoom> for BookingResponse {
    fn from(view: BookingWithRoom) -> Self {
        Self {
            id: view.id.as_i32(),
            room: view.room.into(),
        }
    }
}
