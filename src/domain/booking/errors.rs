//! Booking-specific error types.
//!
//! # HTTP Status Mapping
//!
//! | Error | HTTP Status |
//! |-------|-------------|
//! | NotFound | 404 |
//! | Forbidden | 403 |
//! | Infrastructure | 500 |

use std::fmt;

use crate::domain::foundation::{DomainError, ErrorCode, RoomId, UserId};

/// Why an eligibility gate refused a booking write.
///
/// One variant per gate, in evaluation order. The message strings are
/// diagnostic only; callers treat every reason as the same class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ForbiddenReason {
    EnrollmentNotFound,
    TicketNotFound,
    TicketNotPaid,
    TicketIsRemote,
    TicketWithoutHotel,
    RoomIsFull,
    BookingNotFound,
    BookingNotOwned,
}

impl ForbiddenReason {
    pub fn message(&self) -> &'static str {
        match self {
            ForbiddenReason::EnrollmentNotFound => "enrollment not found",
            ForbiddenReason::TicketNotFound => "ticket not found",
            ForbiddenReason::TicketNotPaid => "ticket not paid",
            ForbiddenReason::TicketIsRemote => "ticket is remote",
            ForbiddenReason::TicketWithoutHotel => "ticket does not include hotel",
            ForbiddenReason::RoomIsFull => "room is full",
            ForbiddenReason::BookingNotFound => "booking not found",
            ForbiddenReason::BookingNotOwned => "booking does not belong to user",
        }
    }
}

impl fmt::Display for ForbiddenReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// The entity a `NotFound` error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingResource {
    /// The requested room does not exist.
    Room(RoomId),
    /// The user has no booking.
    BookingForUser(UserId),
    /// A booking vanished between the ownership check and the write.
    Booking,
}

impl fmt::Display for MissingResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MissingResource::Room(id) => write!(f, "room {}", id),
            MissingResource::BookingForUser(user_id) => write!(f, "booking for user {}", user_id),
            MissingResource::Booking => f.write_str("booking"),
        }
    }
}

/// Booking-specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookingError {
    /// The referenced room or booking does not exist.
    NotFound(MissingResource),
    /// An eligibility precondition failed.
    Forbidden(ForbiddenReason),
    /// Infrastructure error.
    Infrastructure(String),
}

impl BookingError {
    pub fn not_found(resource: MissingResource) -> Self {
        BookingError::NotFound(resource)
    }
    pub fn forbidden(reason: ForbiddenReason) -> Self {
        BookingError::Forbidden(reason)
    }
    pub fn infrastructure(message: impl Into<String>) -> Self {
        BookingError::Infrastructure(message.into())
    }
    pub fn code(&self) -> ErrorCode {
        match self {
            BookingError::NotFound(MissingResource::Room(_)) => ErrorCode::RoomNotFound,
            BookingError::NotFound(_) => ErrorCode::BookingNotFound,
            BookingError::Forbidden(_) => ErrorCode::Forbidden,
            BookingError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }
    pub fn message(&self) -> String {
        match self {
            BookingError::NotFound(resource) => format!("No result for this search: {}", resource),
            BookingError::Forbidden(reason) => format!("Forbidden! {}", reason),
            BookingError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl fmt::Display for BookingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for BookingError {}

impl From<ForbiddenReason> for BookingError {
    fn from(reason: ForbiddenReason) -> Self {
        BookingError::Forbidden(reason)
    }
}

impl From<DomainError> for BookingError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::RoomFull => BookingError::Forbidden(ForbiddenReason::RoomIsFull),
            ErrorCode::BookingNotFound => BookingError::NotFound(MissingResource::Booking),
            ErrorCode::RoomNotFound => match err.details.get("room_id").and_then(|id| id.parse().ok()) {
                Some(room_id) => BookingError::NotFound(MissingResource::Room(room_id)),
                None => BookingError::Infrastructure(err.to_string()),
            },
            _ => BookingError::Infrastructure(err.to_string()),
        }
    }
}
