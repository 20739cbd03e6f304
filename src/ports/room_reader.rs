//! Room reader port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, RoomId};
use crate::domain::hotel::Room;

/// Reader port for room lookups.
///
/// The returned room carries its occupancy as counted at read time. The
/// count is advisory: the authoritative capacity check happens inside the
/// conditional writes of [`BookingRepository`](super::BookingRepository).
#[async_trait]
pub trait RoomReader: Send + Sync {
    /// Find a room with its current occupancy.
    ///
    /// Returns `None` if the room does not exist.
    async fn find_by_id(&self, room_id: &RoomId) -> Result<Option<Room>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Trait object safety test
    #[test]
    fn room_reader_is_object_safe() {
        fn _accepts_dyn(_reader: &dyn RoomReader) {}
    }
}
