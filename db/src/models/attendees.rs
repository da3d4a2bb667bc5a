use crate::db::{Db, Tables};
use crate::models::enums::TicketStatus;
use crate::models::purchases::{Purchase, PurchaseFilter};
use crate::utils::dates::time_ago_in_words;
use crate::utils::errors::{DatabaseError, ErrorCode};
use crate::utils::money::format_cents;
use chrono::prelude::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

const MISSING: &str = "N/A";

/// Display projection of a purchase joined to its user, ticket and event.
/// Ticket-centric: `id` is the ticket the row is about. Never persisted.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AttendeeRow {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub status: String,
    pub registered: String,
    pub ticket_type: String,
    pub event_title: String,
    pub price: String,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct AttendeeFilters {
    pub search: Option<String>,
    pub status: Option<String>,
    pub ticket_type: Option<String>,
}

impl AttendeeRow {
    /// Joins every ledger entry to the catalog and identity data and applies
    /// the dashboard filters (AND-composed). Rows with missing joined data
    /// degrade to "N/A" fields instead of failing the listing, though such
    /// rows can no longer match a search or filter on the missing fields.
    pub fn list(filters: &AttendeeFilters, conn: &Db) -> Result<Vec<AttendeeRow>, DatabaseError> {
        let purchases = Purchase::all(&PurchaseFilter::default(), conn)?;
        let tables = conn.read()?;

        let search = filters
            .search
            .as_ref()
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty());
        let status = effective_status_filter(&filters.status);
        let ticket_type = effective_ticket_type_filter(&filters.ticket_type);

        let mut rows = Vec::new();
        for purchase in purchases {
            let user = tables.users.get(&purchase.user_id);
            let ticket = tables.tickets.get(&purchase.ticket_id);

            if let Some(ref term) = search {
                let matched = user.map(|u| u.name.to_lowercase().contains(term)).unwrap_or(false)
                    || user.map(|u| u.email.to_lowercase().contains(term)).unwrap_or(false)
                    || ticket.map(|t| t.title.to_lowercase().contains(term)).unwrap_or(false);
                if !matched {
                    continue;
                }
            }
            match status {
                StatusFilter::Any => {}
                StatusFilter::Only(wanted) => {
                    if ticket.map(|t| t.status) != Some(wanted) {
                        continue;
                    }
                }
                StatusFilter::Nothing => continue,
            }
            if let Some(ref wanted) = ticket_type {
                if ticket.map(|t| t.ticket_type.as_str()) != Some(wanted.as_str()) {
                    continue;
                }
            }

            rows.push(project(&purchase, &tables));
        }
        Ok(rows)
    }

    /// Single-row variant keyed by the ticket's externally facing code:
    /// "who holds this ticket". NoResults when the ticket is unknown or
    /// nobody has registered for it.
    pub fn find_by_ticket_code(code: &str, conn: &Db) -> Result<AttendeeRow, DatabaseError> {
        let tables = conn.read()?;
        let ticket = tables
            .tickets
            .values()
            .find(|t| t.code == code)
            .ok_or_else(|| DatabaseError::new(ErrorCode::NoResults, Some("Error loading ticket".to_string())))?;

        let mut holders: Vec<&Purchase> = tables.purchases.values().filter(|p| p.ticket_id == ticket.id).collect();
        holders.sort_by_key(|p| (p.created_at, p.user_id));
        let purchase = holders
            .first()
            .ok_or_else(|| DatabaseError::new(ErrorCode::NoResults, Some("Ticket has no registration".to_string())))?;

        Ok(project(purchase, &tables))
    }
}

#[derive(Clone, Copy)]
enum StatusFilter {
    Any,
    Only(TicketStatus),
    Nothing,
}

/// "all" and "all attendees" are the dashboard's no-op sentinels; anything
/// else is translated from the display label back to the stored status. An
/// unknown label stays a filter that matches nothing rather than being
/// dropped.
fn effective_status_filter(filter: &Option<String>) -> StatusFilter {
    let filter = match filter.as_ref().map(|s| s.trim().to_lowercase()).filter(|s| !s.is_empty()) {
        Some(f) => f,
        None => return StatusFilter::Any,
    };
    if filter == "all" || filter == "all attendees" {
        return StatusFilter::Any;
    }
    match TicketStatus::from_display_label(&filter) {
        Some(status) => StatusFilter::Only(status),
        None => StatusFilter::Nothing,
    }
}

/// "ticket type" is the type dropdown's placeholder sentinel; real values
/// match the stored type exactly, case included.
fn effective_ticket_type_filter(filter: &Option<String>) -> Option<String> {
    filter
        .as_ref()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty() && s.to_lowercase() != "ticket type")
}

fn project(purchase: &Purchase, tables: &Tables) -> AttendeeRow {
    let user = tables.users.get(&purchase.user_id);
    let ticket = tables.tickets.get(&purchase.ticket_id);
    let event = ticket.and_then(|t| tables.events.get(&t.event_id));

    AttendeeRow {
        id: purchase.ticket_id,
        name: user.map(|u| u.name.clone()).unwrap_or_else(|| MISSING.to_string()),
        email: user.map(|u| u.email.clone()).unwrap_or_else(|| MISSING.to_string()),
        status: ticket
            .map(|t| t.status.display_label().to_string())
            .unwrap_or_else(|| MISSING.to_string()),
        registered: time_ago_in_words(purchase.purchase_date, Utc::now().naive_utc()),
        ticket_type: ticket.map(|t| t.ticket_type.clone()).unwrap_or_else(|| MISSING.to_string()),
        event_title: event.map(|e| e.title.clone()).unwrap_or_else(|| MISSING.to_string()),
        price: ticket
            .map(|t| format_cents(t.price_in_cents))
            .unwrap_or_else(|| MISSING.to_string()),
    }
}
