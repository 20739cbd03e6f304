//! Enrollment reader port.
//!
//! Resolves a user to their event enrollment. Existence of an enrollment is
//! the first gate of every booking write.

use async_trait::async_trait;

use crate::domain::enrollment::Enrollment;
use crate::domain::foundation::{DomainError, UserId};

/// Reader port for enrollment lookups.
#[async_trait]
pub trait EnrollmentReader: Send + Sync {
    /// Find the enrollment owned by a user.
    ///
    /// Returns `None` if the user has not enrolled.
    async fn find_by_user(&self, user_id: &UserId) -> Result<Option<Enrollment>, DomainError>;
}
