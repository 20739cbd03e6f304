//! Enrollment domain module.
//!
//! An enrollment is a user's registration for the event. Holding one is the
//! first precondition for any hotel booking.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{EnrollmentId, UserId};

/// A user's event enrollment record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enrollment {
    pub id: EnrollmentId,
    pub user_id: UserId,
}

impl Enrollment {
    pub fn new(id: EnrollmentId, user_id: UserId) -> Self {
        Self { id, user_id }
    }
}
