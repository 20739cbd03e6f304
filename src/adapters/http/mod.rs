//! HTTP adapters - REST API implementations.
//!
//! - `booking` - `/booking` endpoints
//! - `health` - `/health` liveness probe
//! - `middleware` - bearer token authentication
//! - `router` - assembles the full application router

pub mod booking;
pub mod error;
pub mod health;
pub mod middleware;
pub mod router;

pub use booking::{booking_routes, BookingHandlers};
pub use error::ErrorResponse;
pub use router::{api_router, with_server_layers};
