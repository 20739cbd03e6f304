//! PostgreSQL implementation of TicketReader.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;

use crate::domain::foundation::{DomainError, EnrollmentId, TicketId, TicketTypeId};
use crate::domain::ticket::{Ticket, TicketStatus, TicketType};
use crate::ports::TicketReader;

use super::rows::{column, id};

/// PostgreSQL implementation of TicketReader.
#[derive(Clone)]
pub struct PostgresTicketReader {
    pool: PgPool,
}

impl PostgresTicketReader {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TicketReader for PostgresTicketReader {
    async fn find_by_enrollment(
        &self,
        enrollment_id: &EnrollmentId,
    ) -> Result<Option<Ticket>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT t.id, t.enrollment_id, t.status,
                   tt.id AS ticket_type_id, tt.name, tt.price, tt.is_remote, tt.includes_hotel
            FROM tickets t
            JOIN ticket_types tt ON tt.id = t.ticket_type_id
            WHERE t.enrollment_id = $1
            "#,
        )
        .bind(enrollment_id.as_i32())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to fetch ticket", e))?;

        row.as_ref().map(row_to_ticket).transpose()
    }
}

fn row_to_ticket(row: &PgRow) -> Result<Ticket, DomainError> {
    let status: String = column(row, "status")?;
    let status: TicketStatus = status
        .parse()
        .map_err(|e| DomainError::database("Invalid ticket status", e))?;

    Ok(Ticket {
        id: id::<TicketId>(row, "id")?,
        enrollment_id: id::<EnrollmentId>(row, "enrollment_id")?,
        status,
        ticket_type: TicketType {
            id: id::<TicketTypeId>(row, "ticket_type_id")?,
            name: column(row, "name")?,
            price: column(row, "price")?,
            is_remote: column(row, "is_remote")?,
            includes_hotel: column(row, "includes_hotel")?,
        },
    })
}
