//! CreateBookingHandler - Command handler for reserving a room.

use std::sync::Arc;

use tracing::debug;

use crate::domain::booking::{Booking, BookingError};
use crate::domain::foundation::{RoomId, UserId};
use crate::ports::BookingRepository;

use super::BookingEligibility;

/// Command to book a room for a user.
#[derive(Debug, Clone)]
pub struct CreateBookingCommand {
    pub user_id: UserId,
    pub room_id: RoomId,
}

/// Handler for creating bookings.
///
/// Does not refuse a user who already holds a booking; the one-booking-per-user
/// pattern is kept by callers moving an existing booking through
/// `UpdateBookingHandler`, and reads return the lowest booking id.
pub struct CreateBookingHandler {
    eligibility: BookingEligibility,
    repository: Arc<dyn BookingRepository>,
}

impl CreateBookingHandler {
    pub fn new(eligibility: BookingEligibility, repository: Arc<dyn BookingRepository>) -> Self {
        Self {
            eligibility,
            repository,
        }
    }

    pub async fn handle(&self, cmd: CreateBookingCommand) -> Result<Booking, BookingError> {
        // 1. Eligibility gates (enrollment, ticket, room, vacancy)
        self.eligibility.check(&cmd.user_id, &cmd.room_id).await?;

        // 2. Capacity-checked insert; a concurrent writer may have filled the room
        let booking = self.repository.create(&cmd.room_id, &cmd.user_id).await?;

        debug!(
            booking_id = %booking.id,
            room_id = %booking.room_id,
            user_id = %booking.user_id,
            "Booking created"
        );

        Ok(booking)
    }
}
