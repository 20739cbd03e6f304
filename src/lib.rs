//! Hotel Booking - room reservations for event enrollees
//!
//! Users holding a paid, in-person ticket that includes lodging can reserve
//! one room in a partner hotel and later move that booking to another room.
//! Every write passes an ordered sequence of eligibility gates, and room
//! capacity is enforced atomically at the store.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
