//! UpdateBookingHandler - Command handler for moving a booking to another room.
//!
//! Runs the same gates as creation, then requires that the user holds a
//! booking and that it is the one named in the request.

use std::sync::Arc;

use tracing::debug;

use crate::domain::booking::eligibility::check_ownership;
use crate::domain::booking::{Booking, BookingError};
use crate::domain::foundation::{BookingId, RoomId, UserId};
use crate::ports::BookingRepository;

use super::BookingEligibility;

/// Command to move an existing booking to a new room.
#[derive(Debug, Clone)]
pub struct UpdateBookingCommand {
    pub booking_id: BookingId,
    pub room_id: RoomId,
    pub user_id: UserId,
}

/// Handler for changing a booking's room.
pub struct UpdateBookingHandler {
    eligibility: BookingEligibility,
    repository: Arc<dyn BookingRepository>,
}

impl UpdateBookingHandler {
    pub fn new(eligibility: BookingEligibility, repository: Arc<dyn BookingRepository>) -> Self {
        Self {
            eligibility,
            repository,
        }
    }

    pub async fn handle(&self, cmd: UpdateBookingCommand) -> Result<Booking, BookingError> {
        // 1. Eligibility gates against the target room
        self.eligibility.check(&cmd.user_id, &cmd.room_id).await?;

        // 2. The user must hold the booking being moved
        let current = self.repository.find_by_user(&cmd.user_id).await?;
        let owned = check_ownership(current, cmd.booking_id)?;

        // 3. Capacity-checked room change
        let booking = self.repository.update_room(&owned.id, &cmd.room_id).await?;

        debug!(
            booking_id = %booking.id,
            room_id = %booking.room_id,
            user_id = %booking.user_id,
            "Booking moved"
        );

        Ok(booking)
    }
}
