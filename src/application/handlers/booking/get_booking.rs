//! GetBookingHandler - Query handler for a user's current booking.

use std::sync::Arc;

use crate::domain::booking::{BookingError, BookingWithRoom, MissingResource};
use crate::domain::foundation::UserId;
use crate::ports::BookingReader;

/// Query to fetch the booking held by a user.
#[derive(Debug, Clone)]
pub struct GetBookingQuery {
    pub user_id: UserId,
}

/// Handler for retrieving a user's booking with its room.
pub struct GetBookingHandler {
    reader: Arc<dyn BookingReader>,
}

impl GetBookingHandler {
    pub fn new(reader: Arc<dyn BookingReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(&self, query: GetBookingQuery) -> Result<BookingWithRoom, BookingError> {
        self.reader
            .get_by_user(&query.user_id)
            .await?
            .ok_or(BookingError::NotFound(MissingResource::BookingForUser(
                query.user_id,
            )))
    }
}
