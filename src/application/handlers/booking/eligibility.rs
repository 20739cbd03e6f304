//! BookingEligibility - the shared gate sequence for booking writes.
//!
//! Runs gates 1–7 against fresh reads, strictly in order:
//!
//! ```text
//! enrollment ─▶ ticket ─▶ (paid, not remote, includes hotel) ─▶ room ─▶ vacancy
//! ```
//!
//! Each lookup depends on the previous gate passing, so a failure stops
//! before any further read is issued.

use std::sync::Arc;

use crate::domain::booking::eligibility::{check_enrollment, check_ticket, check_vacancy};
use crate::domain::booking::{BookingError, MissingResource};
use crate::domain::foundation::{RoomId, UserId};
use crate::domain::hotel::Room;
use crate::ports::{EnrollmentReader, RoomReader, TicketReader};

/// Evaluates whether a user may occupy a room.
#[derive(Clone)]
pub struct BookingEligibility {
    enrollments: Arc<dyn EnrollmentReader>,
    tickets: Arc<dyn TicketReader>,
    rooms: Arc<dyn RoomReader>,
}

impl BookingEligibility {
    pub fn new(
        enrollments: Arc<dyn EnrollmentReader>,
        tickets: Arc<dyn TicketReader>,
        rooms: Arc<dyn RoomReader>,
    ) -> Self {
        Self {
            enrollments,
            tickets,
            rooms,
        }
    }

    /// Runs gates 1–7 and returns the target room on success.
    pub async fn check(&self, user_id: &UserId, room_id: &RoomId) -> Result<Room, BookingError> {
        let enrollment = check_enrollment(self.enrollments.find_by_user(user_id).await?)?;

        let ticket = self.tickets.find_by_enrollment(&enrollment.id).await?;
        check_ticket(ticket.as_ref())?;

        let room = self
            .rooms
            .find_by_id(room_id)
            .await?
            .ok_or(BookingError::NotFound(MissingResource::Room(*room_id)))?;
        check_vacancy(&room)?;

        Ok(room)
    }
}
