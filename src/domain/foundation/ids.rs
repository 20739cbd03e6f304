//! Strongly-typed identifier value objects.
//!
//! Every entity in the booking domain is keyed by a positive integer
//! assigned by the store. Wrapping them in distinct types keeps a room id
//! from being passed where a booking id is expected.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// Generates a positive-integer identifier newtype.
///
/// The generated type:
/// - rejects zero and negative values in `new`
/// - serializes transparently as a JSON number
/// - parses from a decimal string (used for path segments)
macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident, $field:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(try_from = "i32", into = "i32")]
        pub struct $name(i32);

        impl $name {
            /// Creates the identifier, rejecting non-positive values.
            pub fn new(value: i32) -> Result<Self, ValidationError> {
                if value <= 0 {
                    return Err(ValidationError::not_positive($field, i64::from(value)));
                }
                Ok(Self(value))
            }

            /// Returns the raw integer value.
            pub fn as_i32(&self) -> i32 {
                self.0
            }
        }

        impl TryFrom<i32> for $name {
            type Error = ValidationError;

            fn try_from(value: i32) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for i32 {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let value: i32 = s
                    .trim()
                    .parse()
                    .map_err(|_| ValidationError::invalid_format($field, "expected an integer"))?;
                Self::new(value)
            }
        }
    };
}

define_id!(
    /// Identifier of an authenticated user.
    UserId,
    "user_id"
);

define_id!(
    /// Identifier of a user's event enrollment.
    EnrollmentId,
    "enrollment_id"
);

define_id!(
    /// Identifier of an event ticket.
    TicketId,
    "ticket_id"
);

define_id!(
    /// Identifier of a ticket type (remote/in-person, with or without hotel).
    TicketTypeId,
    "ticket_type_id"
);

define_id!(
    /// Identifier of a partner hotel.
    HotelId,
    "hotel_id"
);

define_id!(
    /// Identifier of a bookable hotel room.
    RoomId,
    "room_id"
);

define_id!(
    /// Identifier of a room booking.
    BookingId,
    "booking_id"
);
