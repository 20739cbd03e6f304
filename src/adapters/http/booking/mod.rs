//! HTTP adapter for booking endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{BookingIdResponse, BookingRequest, BookingResponse, RoomResponse};
pub use handlers::BookingHandlers;
pub use routes::booking_routes;
