//! Ticket reader port.
//!
//! Resolves an enrollment to its ticket, joined with the ticket type so the
//! payment, remote, and hotel gates can be evaluated from one read.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, EnrollmentId};
use crate::domain::ticket::Ticket;

/// Reader port for ticket lookups.
#[async_trait]
pub trait TicketReader: Send + Sync {
    /// Find the ticket (with its type) belonging to an enrollment.
    ///
    /// Returns `None` if no ticket has been issued for the enrollment.
    async fn find_by_enrollment(
        &self,
        enrollment_id: &EnrollmentId,
    ) -> Result<Option<Ticket>, DomainError>;
}
