//! Booking repository port (write side).
//!
//! Defines the contract for persisting bookings and the ownership lookup
//! used by the rebooking path.
//!
//! # Design
//!
//! - **User-scoped lookup**: ownership is established by `find_by_user`,
//!   never by fetching the requested booking id directly
//! - **Conditional writes**: `create` and `update_room` admit a booking only
//!   while the target room is under capacity, checked atomically with the
//!   write

use crate::domain::booking::Booking;
use crate::domain::foundation::{BookingId, DomainError, RoomId, UserId};
use async_trait::async_trait;

/// Repository port for booking persistence.
///
/// Implementations must ensure the capacity check and the write happen in
/// one atomic step, so that concurrent admissions can never push a room's
/// booking count past its capacity.
#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Find the booking held by a user.
    ///
    /// Returns `None` if the user has no booking.
    async fn find_by_user(&self, user_id: &UserId) -> Result<Option<Booking>, DomainError>;

    /// Create a booking linking `user_id` to `room_id`.
    ///
    /// # Errors
    ///
    /// - `RoomFull` if the room reached capacity before the write
    /// - `RoomNotFound` if the room no longer exists
    /// - `DatabaseError` on persistence failure
    async fn create(&self, room_id: &RoomId, user_id: &UserId) -> Result<Booking, DomainError>;

    /// Move an existing booking to another room.
    ///
    /// Only the room reference changes; id and owner are preserved.
    ///
    /// # Errors
    ///
    /// - `RoomFull` if the target room reached capacity before the write
    /// - `BookingNotFound` if the booking no longer exists
    /// - `DatabaseError` on persistence failure
    async fn update_room(
        &self,
        booking_id: &BookingId,
        room_id: &RoomId,
    ) -> Result<Booking, DomainError>;
}
