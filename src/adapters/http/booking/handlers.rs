//! HTTP handlers for booking endpoints.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::ErrorResponse;
use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::booking::{
    CreateBookingCommand, CreateBookingHandler, GetBookingHandler, GetBookingQuery,
    UpdateBookingCommand, UpdateBookingHandler,
};
use crate::domain::booking::BookingError;
use crate::domain::foundation::{BookingId, RoomId};

use super::dto::{BookingIdResponse, BookingRequest, BookingResponse};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct BookingHandlers {
    get_handler: Arc<GetBookingHandler>,
    create_handler: Arc<CreateBookingHandler>,
    update_handler: Arc<UpdateBookingHandler>,
}

impl BookingHandlers {
    pub fn new(
        get_handler: Arc<GetBookingHandler>,
        create_handler: Arc<CreateBookingHandler>,
        update_handler: Arc<UpdateBookingHandler>,
    ) -> Self {
        Self {
            get_handler,
            create_handler,
            update_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET /booking - The caller's booking with its room
pub async fn get_booking(
    State(handlers): State<BookingHandlers>,
    RequireAuth(user): RequireAuth,
) -> Response {
    let query = GetBookingQuery { user_id: user.id };

    match handlers.get_handler.handle(query).await {
        Ok(view) => (StatusCode::OK, Json(BookingResponse::from(view))).into_response(),
        Err(e) => handle_booking_error(e),
    }
}

/// POST /booking - Book a room
pub async fn create_booking(
    State(handlers): State<BookingHandlers>,
    RequireAuth(user): RequireAuth,
    body: Result<Json<BookingRequest>, JsonRejection>,
) -> Response {
    let room_id = match room_id_from_body(body) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let cmd = CreateBookingCommand {
        user_id: user.id,
        room_id,
    };

    match handlers.create_handler.handle(cmd).await {
        Ok(booking) => (StatusCode::OK, Json(BookingIdResponse::from(booking))).into_response(),
        Err(e) => handle_booking_error(e),
    }
}

/// PUT /booking/:bookingId - Move a booking to another room
pub async fn update_booking(
    State(handlers): State<BookingHandlers>,
    RequireAuth(user): RequireAuth,
    Path(booking_id): Path<String>,
    body: Result<Json<BookingRequest>, JsonRejection>,
) -> Response {
    let booking_id = match booking_id.parse::<BookingId>() {
        Ok(id) => id,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::bad_request("Invalid booking ID")),
            )
                .into_response()
        }
    };

    let room_id = match room_id_from_body(body) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let cmd = UpdateBookingCommand {
        booking_id,
        room_id,
        user_id: user.id,
    };

    match handlers.update_handler.handle(cmd).await {
        Ok(booking) => (StatusCode::OK, Json(BookingIdResponse::from(booking))).into_response(),
        Err(e) => handle_booking_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Request validation
// ════════════════════════════════════════════════════════════════════════════

fn room_id_from_body(body: Result<Json<BookingRequest>, JsonRejection>) -> Result<RoomId, Response> {
    let bad_request = |message: String| {
        (StatusCode::BAD_REQUEST, Json(ErrorResponse::bad_request(message))).into_response()
    };

    let Json(request) = body.map_err(|rejection| bad_request(rejection.body_text()))?;
    request.room_id().map_err(|e| bad_request(e.to_string()))
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn handle_booking_error(error: BookingError) -> Response {
    let status = match &error {
        BookingError::NotFound(_) => StatusCode::NOT_FOUND,
        BookingError::Forbidden(_) => StatusCode::FORBIDDEN,
        BookingError::Infrastructure(msg) => {
            tracing::error!("Booking request failed: {}", msg);
            return (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorResponse::internal()))
                .into_response();
        }
    };

    (status, Json(ErrorResponse::new(error.code(), error.message()))).into_response()
}
