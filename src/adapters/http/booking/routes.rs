//! HTTP routes for booking endpoints.

use axum::{
    routing::{get, put},
    Router,
};

use super::handlers::{create_booking, get_booking, update_booking, BookingHandlers};

/// Creates the booking router, to be nested under `/booking`.
pub fn booking_routes(handlers: BookingHandlers) -> Router {
    Router::new()
        .route("/", get(get_booking).post(create_booking))
        .route("/:bookingId", put(update_booking))
        .with_state(handlers)
}
