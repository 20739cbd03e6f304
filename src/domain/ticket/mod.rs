//! Ticket domain module.
//!
//! A ticket is proof of admission tied to an enrollment. Its payment status
//! and ticket type decide whether the holder may book a hotel room.

mod status;

pub use status::TicketStatus;

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{EnrollmentId, TicketId, TicketTypeId};

/// A class of ticket: remote or in-person, with or without hotel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketType {
    pub id: TicketTypeId,
    pub name: String,
    /// Price in whole currency units.
    pub price: i32,
    /// Remote tickets never grant hotel access.
    pub is_remote: bool,
    /// Must be true for the holder to book a room.
    pub includes_hotel: bool,
}

/// An enrollment's ticket together with its type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    pub id: TicketId,
    pub enrollment_id: EnrollmentId,
    pub status: TicketStatus,
    pub ticket_type: TicketType,
}

impl Ticket {
    /// Returns true if the ticket has been paid for.
    pub fn is_paid(&self) -> bool {
        self.status.is_paid()
    }
}
