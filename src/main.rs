use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::net::TcpListener;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use hotel_booking::adapters::auth::JwtSessionValidator;
use hotel_booking::adapters::http::middleware::AuthState;
use hotel_booking::adapters::http::{api_router, with_server_layers, BookingHandlers};
use hotel_booking::adapters::postgres::{
    PostgresBookingReader, PostgresBookingRepository, PostgresEnrollmentReader,
    PostgresRoomReader, PostgresSessionStore, PostgresTicketReader,
};
use hotel_booking::application::{
    BookingEligibility, CreateBookingHandler, GetBookingHandler, UpdateBookingHandler,
};
use hotel_booking::config::{AppConfig, ServerConfig};

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::load().context("Failed to load configuration")?;
    init_logger(&config.server)?;
    config.validate().context("Invalid configuration")?;
    bootstrap(config).await
}

fn init_logger(server: &ServerConfig) -> Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&server.log_level));

    let registry = tracing_subscriber::registry().with(env_filter);

    if server.is_production() {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_target(true))
            .try_init()?;
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_file(true)
                    .with_line_number(true)
                    .with_target(false),
            )
            .try_init()?;
    }

    Ok(())
}

async fn bootstrap(config: AppConfig) -> Result<()> {
    let pool = config
        .database
        .connect()
        .await
        .context("Failed to connect to database")?;

    if config.database.run_migrations {
        tracing::info!("Running database migrations");
        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .context("Failed to run migrations")?;
    }

    let eligibility = BookingEligibility::new(
        Arc::new(PostgresEnrollmentReader::new(pool.clone())),
        Arc::new(PostgresTicketReader::new(pool.clone())),
        Arc::new(PostgresRoomReader::new(pool.clone())),
    );
    let bookings = Arc::new(PostgresBookingRepository::new(pool.clone()));

    let handlers = BookingHandlers::new(
        Arc::new(GetBookingHandler::new(Arc::new(PostgresBookingReader::new(
            pool.clone(),
        )))),
        Arc::new(CreateBookingHandler::new(eligibility.clone(), bookings.clone())),
        Arc::new(UpdateBookingHandler::new(eligibility, bookings)),
    );

    let validator: AuthState = Arc::new(JwtSessionValidator::new(
        &config.auth.jwt_secret,
        Arc::new(PostgresSessionStore::new(pool)),
    ));

    let app = with_server_layers(api_router(handlers, validator), &config.server);

    let addr = config.server.socket_addr()?;
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app)
        .await
        .context("Unexpected error happened in server")
}
