//! Booking domain module.
//!
//! A booking assigns one user to one hotel room. The lifecycle is short:
//!
//! ```text
//! Nonexistent ──create──▶ Active ──update (room changes)──▶ Active
//! ```
//!
//! There is no cancel transition. Every write is gated by the eligibility
//! checks in [`eligibility`].

mod aggregate;
pub mod eligibility;
mod errors;

pub use aggregate::{Booking, BookingWithRoom};
pub use errors::{BookingError, ForbiddenReason, MissingResource};
