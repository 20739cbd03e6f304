//! Booking record and its read view.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{BookingId, RoomId, Timestamp, UserId};
use crate::domain::hotel::Room;

/// The assignment of one user to one room.
///
/// Created once all eligibility gates pass; afterwards only the room
/// reference changes. Id and owner are fixed for the record's lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub id: BookingId,
    pub user_id: UserId,
    pub room_id: RoomId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Booking {
    /// Returns true if this booking is the one identified by `id`.
    pub fn is(&self, id: BookingId) -> bool {
        self.id == id
    }
}

/// A user's booking joined with the room it occupies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingWithRoom {
    pub id: BookingId,
    pub room: Room,
}
