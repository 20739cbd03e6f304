//! In-memory adapters.
//!
//! `InMemoryHotelStore` backs every directory and store port from a single
//! shared state, so capacity checks and writes see one consistent view.

mod hotel_store;

pub use hotel_store::{InMemoryHotelStore, ReadCounts};
