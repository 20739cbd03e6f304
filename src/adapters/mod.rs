//! Adapters - Implementations of port interfaces.
//!
//! - `auth` - bearer token validation (JWT + session store, mock)
//! - `http` - axum REST surface
//! - `memory` - in-memory store for tests
//! - `postgres` - sqlx-backed directories and booking store

pub mod auth;
pub mod http;
pub mod memory;
pub mod postgres;

pub use auth::{JwtSessionValidator, MockSessionValidator};
pub use memory::InMemoryHotelStore;
