//! Top-level router assembly.

use axum::{http::HeaderValue, middleware, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tower_http::LatencyUnit;
use tracing::Level;

use crate::config::ServerConfig;

use super::booking::{booking_routes, BookingHandlers};
use super::health::health_routes;
use super::middleware::{auth_middleware, AuthState};

/// Builds the API: authenticated `/booking` routes plus `/health`,
/// wrapped in per-request tracing.
pub fn api_router(bookings: BookingHandlers, validator: AuthState) -> Router {
    let booking = booking_routes(bookings)
        .layer(middleware::from_fn_with_state(validator, auth_middleware));

    Router::new()
        .nest("/booking", booking)
        .merge(health_routes())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_request(DefaultOnRequest::new().level(Level::DEBUG))
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .latency_unit(LatencyUnit::Millis),
                ),
        )
}

/// Adds the server-level timeout and CORS policy from configuration.
pub fn with_server_layers(router: Router, server: &ServerConfig) -> Router {
    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    let cors = if origins.is_empty() {
        CorsLayer::new()
    } else {
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    };

    router
        .layer(TimeoutLayer::new(server.request_timeout()))
        .layer(cors)
}
