//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Directory Ports (read only)
//!
//! - `EnrollmentReader` - user → enrollment
//! - `TicketReader` - enrollment → ticket with ticket type
//! - `RoomReader` - room id → room with occupancy
//! - `BookingReader` - user → booking with room details
//!
//! ## Store Ports
//!
//! - `BookingRepository` - ownership lookup and capacity-checked writes
//!
//! ## Auth Ports
//!
//! - `SessionValidator` - bearer token → authenticated user
//! - `SessionStore` - issued-session lookup backing token validation

mod booking_reader;
mod booking_repository;
mod enrollment_reader;
mod room_reader;
mod session_store;
mod session_validator;
mod ticket_reader;

pub use booking_reader::BookingReader;
pub use booking_repository::BookingRepository;
pub use enrollment_reader::EnrollmentReader;
pub use room_reader::RoomReader;
pub use session_store::SessionStore;
pub use session_validator::SessionValidator;
pub use ticket_reader::TicketReader;
