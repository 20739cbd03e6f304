//! Hotel domain module.
//!
//! Rooms are the bookable unit. A room carries its fixed capacity and the
//! number of bookings currently occupying it, as read at lookup time.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{HotelId, RoomId, Timestamp};

/// A hotel room together with its occupancy at the moment it was read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub id: RoomId,
    pub name: String,
    /// Maximum number of bookings; always positive.
    pub capacity: u32,
    pub hotel_id: HotelId,
    /// Number of bookings referencing this room.
    pub occupancy: u32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Room {
    /// Returns true if another booking can be admitted.
    pub fn has_vacancy(&self) -> bool {
        self.occupancy < self.capacity
    }
}
