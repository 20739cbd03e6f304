//! Pure eligibility gates.
//!
//! Each function evaluates one group of gates against already-fetched state
//! and returns the first failing reason. Lookups and their ordering live in
//! the application layer; these functions never touch a port.

use crate::domain::booking::{Booking, ForbiddenReason};
use crate::domain::enrollment::Enrollment;
use crate::domain::foundation::BookingId;
use crate::domain::hotel::Room;
use crate::domain::ticket::Ticket;

/// Gate 1: the user must be enrolled in the event.
pub fn check_enrollment(enrollment: Option<Enrollment>) -> Result<Enrollment, ForbiddenReason> {
    enrollment.ok_or(ForbiddenReason::EnrollmentNotFound)
}

/// Gates 2–5: a paid, in-person ticket that includes the hotel.
///
/// Checked in order: existence, payment, remote flag, hotel flag. A remote
/// ticket is refused as remote even when its type also includes the hotel.
pub fn check_ticket(ticket: Option<&Ticket>) -> Result<(), ForbiddenReason> {
    let ticket = ticket.ok_or(ForbiddenReason::TicketNotFound)?;

    if !ticket.is_paid() {
        return Err(ForbiddenReason::TicketNotPaid);
    }
    if ticket.ticket_type.is_remote {
        return Err(ForbiddenReason::TicketIsRemote);
    }
    if !ticket.ticket_type.includes_hotel {
        return Err(ForbiddenReason::TicketWithoutHotel);
    }

    Ok(())
}

/// Gate 7: the room must have a free seat.
pub fn check_vacancy(room: &Room) -> Result<(), ForbiddenReason> {
    if room.has_vacancy() {
        Ok(())
    } else {
        Err(ForbiddenReason::RoomIsFull)
    }
}

/// Gates 8–9: the user's own booking must exist and be the one requested.
///
/// `current` is looked up by user, so a guessed id that belongs to someone
/// else fails here as not owned.
pub fn check_ownership(
    current: Option<Booking>,
    requested: BookingId,
) -> Result<Booking, ForbiddenReason> {
    let booking = current.ok_or(ForbiddenReason::BookingNotFound)?;

    if !booking.is(requested) {
        return Err(ForbiddenReason::BookingNotOwned);
    }

    Ok(booking)
}
