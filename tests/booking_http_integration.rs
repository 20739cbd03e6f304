//! Integration tests for the booking HTTP endpoints.
//!
//! Drives the full axum router (auth middleware, DTO validation, handlers,
//! error mapping) against the in-memory store and a mock session validator.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use hotel_booking::adapters::auth::MockSessionValidator;
use hotel_booking::adapters::http::middleware::AuthState;
use hotel_booking::adapters::http::{api_router, BookingHandlers};
use hotel_booking::adapters::memory::InMemoryHotelStore;
use hotel_booking::application::{
    BookingEligibility, CreateBookingHandler, GetBookingHandler, UpdateBookingHandler,
};
use hotel_booking::domain::foundation::{HotelId, RoomId, UserId};
use hotel_booking::domain::ticket::TicketStatus;

// =============================================================================
// Test Infrastructure
// =============================================================================

struct TestApp {
    store: InMemoryHotelStore,
    router: Router,
    hotel: HotelId,
}

impl TestApp {
    async fn new(validator: MockSessionValidator) -> Self {
        let store = InMemoryHotelStore::new();
        let hotel = store.add_hotel("Driven Resort").await.unwrap();

        let shared = Arc::new(store.clone());
        let eligibility = BookingEligibility::new(shared.clone(), shared.clone(), shared.clone());
        let handlers = BookingHandlers::new(
            Arc::new(GetBookingHandler::new(shared.clone())),
            Arc::new(CreateBookingHandler::new(eligibility.clone(), shared.clone())),
            Arc::new(UpdateBookingHandler::new(eligibility, shared)),
        );
        let validator: AuthState = Arc::new(validator);

        Self {
            store,
            router: api_router(handlers, validator),
            hotel,
        }
    }

    /// An app where `token-1` authenticates user 1 and `token-2` user 2.
    async fn with_two_users() -> Self {
        Self::new(
            MockSessionValidator::new()
                .with_test_user("token-1", user(1))
                .with_test_user("token-2", user(2)),
        )
        .await
    }

    async fn room(&self, capacity: u32) -> RoomId {
        self.store.add_room(self.hotel, "Room", capacity).await.unwrap()
    }

    async fn eligible(&self, user_id: UserId) {
        self.ticketed(user_id, TicketStatus::Paid, false, true).await;
    }

    async fn ticketed(&self, user_id: UserId, status: TicketStatus, remote: bool, hotel: bool) {
        let enrollment = self.store.add_enrollment(user_id).await.unwrap();
        self.store
            .add_ticket(enrollment, status, remote, hotel)
            .await
            .unwrap();
    }

    async fn send(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header("Authorization", format!("Bearer {}", token));
        }
        let request = match body {
            Some(body) => builder
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, json)
    }

    async fn get_booking(&self, token: &str) -> (StatusCode, Value) {
        self.send(Method::GET, "/booking", Some(token), None).await
    }

    async fn post_booking(&self, token: &str, room_id: RoomId) -> (StatusCode, Value) {
        self.send(
            Method::POST,
            "/booking",
            Some(token),
            Some(json!({ "roomId": room_id.as_i32() })),
        )
        .await
    }

    async fn put_booking(&self, token: &str, booking_id: i64, room_id: RoomId) -> (StatusCode, Value) {
        self.send(
            Method::PUT,
            &format!("/booking/{}", booking_id),
            Some(token),
            Some(json!({ "roomId": room_id.as_i32() })),
        )
        .await
    }
}

fn user(id: i32) -> UserId {
    UserId::new(id).unwrap()
}

// =============================================================================
// Authentication
// =============================================================================

#[tokio::test]
async fn every_booking_route_requires_a_token() {
    let app = TestApp::with_two_users().await;
    let body = Some(json!({ "roomId": 1 }));

    let (get, _) = app.send(Method::GET, "/booking", None, None).await;
    let (post, _) = app.send(Method::POST, "/booking", None, body.clone()).await;
    let (put, _) = app.send(Method::PUT, "/booking/1", None, body).await;

    assert_eq!(get, StatusCode::UNAUTHORIZED);
    assert_eq!(post, StatusCode::UNAUTHORIZED);
    assert_eq!(put, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn token_without_session_is_401() {
    let app = TestApp::with_two_users().await;

    let (status, body) = app.get_booking("revoked-token").await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn authentication_is_checked_before_body_validation() {
    let app = TestApp::with_two_users().await;

    let (status, _) = app
        .send(Method::POST, "/booking", None, Some(json!({ "roomId": "nope" })))
        .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn health_needs_no_token() {
    let app = TestApp::with_two_users().await;

    let (status, body) = app.send(Method::GET, "/health", None, None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok" }));
}

// =============================================================================
// GET /booking
// =============================================================================

#[tokio::test]
async fn get_before_booking_is_404() {
    let app = TestApp::with_two_users().await;
    app.eligible(user(1)).await;

    let (status, body) = app.get_booking("token-1").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "BOOKING_NOT_FOUND");
}

#[tokio::test]
async fn get_returns_booking_id_and_room() {
    let app = TestApp::with_two_users().await;
    let room = app.room(3).await;
    let booking_id = app.store.add_booking(user(1), room).await.unwrap();

    let (status, body) = app.get_booking("token-1").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], booking_id.as_i32());
    assert_eq!(body["Room"]["id"], room.as_i32());
    assert_eq!(body["Room"]["name"], "Room");
    assert_eq!(body["Room"]["capacity"], 3);
    assert_eq!(body["Room"]["hotelId"], app.hotel.as_i32());
    assert!(body["Room"]["createdAt"].is_string());
    assert!(body["Room"]["updatedAt"].is_string());
}

#[tokio::test]
async fn get_is_idempotent() {
    let app = TestApp::with_two_users().await;
    let room = app.room(3).await;
    app.store.add_booking(user(1), room).await.unwrap();

    let first = app.get_booking("token-1").await;
    let second = app.get_booking("token-1").await;

    assert_eq!(first, second);
}

// =============================================================================
// POST /booking
// =============================================================================

#[tokio::test]
async fn post_without_enrollment_is_403() {
    let app = TestApp::with_two_users().await;
    let room = app.room(3).await;

    let (status, body) = app.post_booking("token-1", room).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["message"], "Forbidden! enrollment not found");
    assert_eq!(app.store.booking_count().await, 0);
}

#[tokio::test]
async fn post_books_room_for_eligible_user() {
    let app = TestApp::with_two_users().await;
    app.eligible(user(1)).await;
    let room = app.room(3).await;

    let (status, body) = app.post_booking("token-1", room).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["bookingId"].as_i64().unwrap() > 0);
    assert_eq!(app.store.occupancy(&room).await, 1);
}

#[tokio::test]
async fn post_with_unpaid_ticket_is_403() {
    let app = TestApp::with_two_users().await;
    app.ticketed(user(1), TicketStatus::Reserved, false, true).await;
    let room = app.room(3).await;

    let (status, _) = app.post_booking("token-1", room).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn post_with_remote_ticket_is_403() {
    let app = TestApp::with_two_users().await;
    app.ticketed(user(1), TicketStatus::Paid, true, true).await;
    let room = app.room(3).await;

    let (status, body) = app.post_booking("token-1", room).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["message"], "Forbidden! ticket is remote");
}

#[tokio::test]
async fn post_to_unknown_room_is_404() {
    let app = TestApp::with_two_users().await;
    app.eligible(user(1)).await;

    let (status, body) = app.post_booking("token-1", RoomId::new(9_999).unwrap()).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "ROOM_NOT_FOUND");
}

#[tokio::test]
async fn post_to_full_room_is_403() {
    let app = TestApp::with_two_users().await;
    app.eligible(user(1)).await;
    let room = app.room(1).await;
    app.store.add_booking(user(2), room).await.unwrap();

    let (status, body) = app.post_booking("token-1", room).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["message"], "Forbidden! room is full");
}

#[tokio::test]
async fn post_accepts_numeric_string_room_id() {
    let app = TestApp::with_two_users().await;
    app.eligible(user(1)).await;
    let room = app.room(3).await;

    let (status, _) = app
        .send(
            Method::POST,
            "/booking",
            Some("token-1"),
            Some(json!({ "roomId": room.as_i32().to_string() })),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn post_with_invalid_body_is_400() {
    let app = TestApp::with_two_users().await;
    app.eligible(user(1)).await;

    for body in [json!({}), json!({ "roomId": "abc" }), json!({ "roomId": 0 })] {
        let (status, response) = app
            .send(Method::POST, "/booking", Some("token-1"), Some(body))
            .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(response["code"], "BAD_REQUEST");
    }
    assert_eq!(app.store.read_counts().enrollments, 0);
}

// =============================================================================
// PUT /booking/:bookingId
// =============================================================================

#[tokio::test]
async fn put_moves_booking_and_keeps_its_id() {
    let app = TestApp::with_two_users().await;
    app.eligible(user(1)).await;
    let first = app.room(3).await;
    let second = app.room(2).await;
    let (_, created) = app.post_booking("token-1", first).await;
    let booking_id = created["bookingId"].as_i64().unwrap();

    let (status, body) = app.put_booking("token-1", booking_id, second).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["bookingId"], booking_id);
    let (_, view) = app.get_booking("token-1").await;
    assert_eq!(view["Room"]["id"], second.as_i32());
    assert_eq!(app.store.occupancy(&first).await, 0);
}

#[tokio::test]
async fn put_of_someone_elses_booking_is_403() {
    let app = TestApp::with_two_users().await;
    app.eligible(user(1)).await;
    let room = app.room(3).await;
    let target = app.room(3).await;
    app.store.add_booking(user(1), room).await.unwrap();
    let others = app.store.add_booking(user(2), room).await.unwrap();

    let (status, body) = app
        .put_booking("token-1", i64::from(others.as_i32()), target)
        .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["message"], "Forbidden! booking does not belong to user");
}

#[tokio::test]
async fn put_without_existing_booking_is_403() {
    let app = TestApp::with_two_users().await;
    app.eligible(user(1)).await;
    let room = app.room(3).await;

    let (status, body) = app.put_booking("token-1", 1, room).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["message"], "Forbidden! booking not found");
}

#[tokio::test]
async fn put_with_invalid_booking_id_is_400() {
    let app = TestApp::with_two_users().await;
    app.eligible(user(1)).await;
    let room = app.room(3).await;

    for path in ["/booking/abc", "/booking/0", "/booking/-4"] {
        let (status, _) = app
            .send(
                Method::PUT,
                path,
                Some("token-1"),
                Some(json!({ "roomId": room.as_i32() })),
            )
            .await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "path {}", path);
    }
}
