//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors, auth)
//! - `enrollment` - A user's event registration
//! - `ticket` - Tickets, ticket types, and payment status
//! - `hotel` - Rooms and their occupancy
//! - `booking` - Bookings, eligibility gates, and booking errors

pub mod booking;
pub mod enrollment;
pub mod foundation;
pub mod hotel;
pub mod ticket;
