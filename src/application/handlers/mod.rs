//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod booking;

pub use booking::{
    BookingEligibility, CreateBookingCommand, CreateBookingHandler, GetBookingHandler,
    GetBookingQuery, UpdateBookingCommand, UpdateBookingHandler,
};
