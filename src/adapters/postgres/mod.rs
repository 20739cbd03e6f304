//! PostgreSQL adapters - Database implementations for the booking ports.
//!
//! - `PostgresEnrollmentReader`, `PostgresTicketReader`, `PostgresRoomReader` -
//!   directory lookups
//! - `PostgresBookingReader` - booking with its room, for display
//! - `PostgresBookingRepository` - ownership lookup and capacity-checked writes
//! - `PostgresSessionStore` - issued session tokens

mod booking_reader;
mod booking_repository;
mod enrollment_reader;
mod room_reader;
mod rows;
mod session_store;
mod ticket_reader;

pub use booking_reader::PostgresBookingReader;
pub use booking_repository::PostgresBookingRepository;
pub use enrollment_reader::PostgresEnrollmentReader;
pub use room_reader::PostgresRoomReader;
pub use session_store::PostgresSessionStore;
pub use ticket_reader::PostgresTicketReader;
