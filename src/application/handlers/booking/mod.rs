//! Booking command and query handlers.

mod create_booking;
mod eligibility;
mod get_booking;
mod update_booking;

#[cfg(test)]
pub(crate) mod test_support;

pub use create_booking::{CreateBookingCommand, CreateBookingHandler};
pub use eligibility::BookingEligibility;
pub use get_booking::{GetBookingHandler, GetBookingQuery};
pub use update_booking::{UpdateBookingCommand, UpdateBookingHandler};
