use crate::db::Db;
use crate::utils::errors::{DatabaseError, ErrorCode};
use chrono::prelude::Utc;
use chrono::NaiveDateTime;
use log::Level::Debug;
use logging::jlog;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The composite identity of a purchase. There is no surrogate id: a user
/// holds a given ticket at most once, and this pair is the storage key that
/// enforces it.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct PurchaseKey {
    pub user_id: Uuid,
    pub ticket_id: Uuid,
}

/// A ledger row: "this user has claimed this ticket".
#[derive(Clone, Debug, Deserialize, PartialEq, PartialOrd, Serialize)]
pub struct Purchase {
    pub user_id: Uuid,
    pub ticket_id: Uuid,
    pub purchase_date: NaiveDateTime,
    pub created_at: NaiveDateTime,
}

pub struct NewPurchase {
    pub user_id: Uuid,
    pub ticket_id: Uuid,
    pub purchase_date: Option<NaiveDateTime>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct PurchaseFilter {
    pub user_id: Option<Uuid>,
    pub ticket_id: Option<Uuid>,
}

impl NewPurchase {
    /// Registers the purchase. Both references are checked against their
    /// stores, and the duplicate check happens under the same write lock as
    /// the insert, so two concurrent commits for one key cannot both land.
    /// When the caller omits a purchase date the server clock is used;
    /// supplied dates are stored as-is, past or future.
    pub fn commit(&self, conn: &Db) -> Result<Purchase, DatabaseError> {
        let mut tables = conn.write()?;

        if !tables.users.contains_key(&self.user_id) {
            return DatabaseError::reference_not_found("User does not exist");
        }
        if !tables.tickets.contains_key(&self.ticket_id) {
            return DatabaseError::reference_not_found("Ticket does not exist");
        }

        let key = PurchaseKey {
            user_id: self.user_id,
            ticket_id: self.ticket_id,
        };
        if tables.purchases.contains_key(&key) {
            jlog!(Debug, "evently_db::purchases", "Duplicate registration rejected", {
                "user_id": self.user_id.to_string(),
                "ticket_id": self.ticket_id.to_string()
            });
            return DatabaseError::duplicate_key("User is already registered for this ticket");
        }

        let now = Utc::now().naive_utc();
        let purchase = Purchase {
            user_id: self.user_id,
            ticket_id: self.ticket_id,
            purchase_date: self.purchase_date.unwrap_or(now),
            created_at: now,
        };
        tables.purchases.insert(key, purchase.clone());
        Ok(purchase)
    }
}

impl Purchase {
    pub fn create(user_id: Uuid, ticket_id: Uuid, purchase_date: Option<NaiveDateTime>) -> NewPurchase {
        NewPurchase {
            user_id,
            ticket_id,
            purchase_date,
        }
    }

    pub fn key(&self) -> PurchaseKey {
        PurchaseKey {
            user_id: self.user_id,
            ticket_id: self.ticket_id,
        }
    }

    pub fn find(user_id: Uuid, ticket_id: Uuid, conn: &Db) -> Result<Purchase, DatabaseError> {
        conn.read()?
            .purchases
            .get(&PurchaseKey { user_id, ticket_id })
            .cloned()
            .ok_or_else(|| DatabaseError::new(ErrorCode::NoResults, Some("Error loading purchase".to_string())))
    }

    /// Same-row mutation; the uniqueness invariant is untouched.
    pub fn update_purchase_date(
        user_id: Uuid,
        ticket_id: Uuid,
        new_date: NaiveDateTime,
        conn: &Db,
    ) -> Result<Purchase, DatabaseError> {
        let mut tables = conn.write()?;
        let purchase = tables
            .purchases
            .get_mut(&PurchaseKey { user_id, ticket_id })
            .ok_or_else(|| DatabaseError::new(ErrorCode::NoResults, Some("Error loading purchase".to_string())))?;
        purchase.purchase_date = new_date;
        Ok(purchase.clone())
    }

    /// Cancellation is a hard delete. A second cancel for the same pair
    /// reports NoResults so callers can tell "already cancelled" apart from
    /// "cancelled now". Returns the number of rows removed.
    pub fn cancel(user_id: Uuid, ticket_id: Uuid, conn: &Db) -> Result<usize, DatabaseError> {
        let mut tables = conn.write()?;
        match tables.purchases.remove(&PurchaseKey { user_id, ticket_id }) {
            Some(_) => Ok(1),
            None => DatabaseError::no_results("Error loading purchase"),
        }
    }

    /// All purchases matching the filter, in a stable order for a fixed
    /// snapshot of the ledger (creation time, key as tiebreak). No other
    /// ordering is promised.
    pub fn all(filter: &PurchaseFilter, conn: &Db) -> Result<Vec<Purchase>, DatabaseError> {
        let tables = conn.read()?;
        let mut purchases: Vec<Purchase> = tables
            .purchases
            .values()
            .filter(|p| filter.user_id.map(|id| p.user_id == id).unwrap_or(true))
            .filter(|p| filter.ticket_id.map(|id| p.ticket_id == id).unwrap_or(true))
            .cloned()
            .collect();
        purchases.sort_by(|a, b| {
            (a.created_at, a.user_id, a.ticket_id).cmp(&(b.created_at, b.user_id, b.ticket_id))
        });
        Ok(purchases)
    }
}
