use crate::db::Db;
use crate::models::enums::TicketStatus;
use crate::utils::errors::{DatabaseError, ErrorCode};
use crate::utils::rand::random_alpha_string;
use chrono::prelude::Utc;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

const TICKET_CODE_LENGTH: usize = 9;

/// An admission type for exactly one event. `code` is the externally facing
/// ticket identifier printed on badges and used by the check-in flow; it is
/// distinct from the row id.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Ticket {
    pub id: Uuid,
    pub code: String,
    pub event_id: Uuid,
    pub title: String,
    pub ticket_type: String,
    pub price_in_cents: i64,
    pub status: TicketStatus,
    pub checked_in_at: Option<NaiveDateTime>,
    pub created_at: NaiveDateTime,
}

#[derive(Clone, Debug, Deserialize, Validate)]
pub struct NewTicket {
    pub event_id: Uuid,
    pub code: Option<String>,
    #[validate(length(min = 1, message = "Title cannot be blank"))]
    pub title: String,
    pub ticket_type: String,
    #[validate(range(min = 0, message = "Price cannot be negative"))]
    pub price_in_cents: i64,
    pub status: TicketStatus,
}

impl NewTicket {
    pub fn commit(&self, conn: &Db) -> Result<Ticket, DatabaseError> {
        self.validate()?;

        let mut tables = conn.write()?;
        if !tables.events.contains_key(&self.event_id) {
            return DatabaseError::reference_not_found("Event does not exist");
        }

        let code = match &self.code {
            Some(code) => {
                if tables.tickets.values().any(|t| t.code == *code) {
                    return DatabaseError::duplicate_key("Ticket code is already in use");
                }
                code.clone()
            }
            None => random_alpha_string(TICKET_CODE_LENGTH),
        };

        let ticket = Ticket {
            id: Uuid::new_v4(),
            code,
            event_id: self.event_id,
            title: self.title.clone(),
            ticket_type: self.ticket_type.clone(),
            price_in_cents: self.price_in_cents,
            status: self.status,
            checked_in_at: None,
            created_at: Utc::now().naive_utc(),
        };
        tables.tickets.insert(ticket.id, ticket.clone());
        Ok(ticket)
    }
}

impl Ticket {
    pub fn create(event_id: Uuid, title: &str, ticket_type: &str, price_in_cents: i64) -> NewTicket {
        NewTicket {
            event_id,
            code: None,
            title: title.to_string(),
            ticket_type: ticket_type.to_string(),
            price_in_cents,
            status: TicketStatus::Pending,
        }
    }

    pub fn find(id: Uuid, conn: &Db) -> Result<Ticket, DatabaseError> {
        conn.read()?
            .tickets
            .get(&id)
            .cloned()
            .ok_or_else(|| DatabaseError::new(ErrorCode::NoResults, Some("Error loading ticket".to_string())))
    }

    pub fn find_by_code(code: &str, conn: &Db) -> Result<Ticket, DatabaseError> {
        conn.read()?
            .tickets
            .values()
            .find(|t| t.code == code)
            .cloned()
            .ok_or_else(|| DatabaseError::new(ErrorCode::NoResults, Some("Error loading ticket".to_string())))
    }

    pub fn exists(id: Uuid, conn: &Db) -> Result<bool, DatabaseError> {
        Ok(conn.read()?.tickets.contains_key(&id))
    }

    /// Marks the holder as present at the door. The check-in moment gets its
    /// own timestamp; status still moves to `Confirmed` because that is the
    /// value dashboards filter on.
    pub fn check_in(id: Uuid, conn: &Db) -> Result<Ticket, DatabaseError> {
        let mut tables = conn.write()?;
        let ticket = tables
            .tickets
            .get_mut(&id)
            .ok_or_else(|| DatabaseError::new(ErrorCode::NoResults, Some("Error loading ticket".to_string())))?;
        ticket.checked_in_at = Some(Utc::now().naive_utc());
        ticket.status = TicketStatus::Confirmed;
        Ok(ticket.clone())
    }

    /// Removes the ticket and every purchase referencing it. Returns the
    /// number of rows removed.
    pub fn destroy(id: Uuid, conn: &Db) -> Result<usize, DatabaseError> {
        let mut tables = conn.write()?;
        if tables.tickets.remove(&id).is_none() {
            return DatabaseError::no_results("Error loading ticket");
        }
        let before = tables.purchases.len();
        tables.purchases.retain(|key, _| key.ticket_id != id);
        Ok(1 + before - tables.purchases.len())
    }
}
