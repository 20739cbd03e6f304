//! Booking reader port (read side / CQRS queries).
//!
//! Serves the "my booking" view: the user's booking joined with the room it
//! occupies.

use async_trait::async_trait;

use crate::domain::booking::BookingWithRoom;
use crate::domain::foundation::{DomainError, UserId};

/// Reader port for booking queries.
#[async_trait]
pub trait BookingReader: Send + Sync {
    /// Get the user's booking with its room details.
    ///
    /// Returns `None` if the user has no booking.
    async fn get_by_user(&self, user_id: &UserId) -> Result<Option<BookingWithRoom>, DomainError>;
}
