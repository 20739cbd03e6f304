//! TicketStatus enum for tracking ticket payment.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Payment status of an event ticket.
///
/// Only `Paid` tickets are eligible for a hotel booking; every other status
/// is treated the same way. The `tickets.status` CHECK constraint limits
/// stored values to these variants, so an unknown string read back from the
/// database is a data fault rather than an ineligible ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TicketStatus {
    #[default]
    Reserved,
    Paid,
}

impl TicketStatus {
    /// Returns true if the ticket has been paid for.
    pub fn is_paid(&self) -> bool {
        matches!(self, TicketStatus::Paid)
    }

    /// Storage representation, as written to the `tickets.status` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            TicketStatus::Reserved => "RESERVED",
            TicketStatus::Paid => "PAID",
        }
    }
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TicketStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "RESERVED" => Ok(TicketStatus::Reserved),
            "PAID" => Ok(TicketStatus::Paid),
            other => Err(ValidationError::invalid_format(
                "ticket_status",
                format!("unknown status '{}'", other),
            )),
        }
    }
}
