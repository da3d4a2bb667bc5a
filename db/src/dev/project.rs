use crate::db::Db;
use crate::dev::builders::*;
use crate::models::{Purchase, PurchaseKey};
use chrono::prelude::Utc;
use uuid::Uuid;

/// A fresh, empty store plus builder entry points for wiring up fixtures.
pub struct TestProject {
    db: Db,
}

#[allow(dead_code)]
impl TestProject {
    pub fn new() -> Self {
        TestProject { db: Db::new() }
    }

    pub fn connection(&self) -> &Db {
        &self.db
    }

    pub fn create_event(&self) -> EventBuilder {
        EventBuilder::new(&self.db)
    }

    pub fn create_purchase(&self) -> PurchaseBuilder {
        PurchaseBuilder::new(&self.db)
    }

    pub fn create_ticket(&self) -> TicketBuilder {
        TicketBuilder::new(&self.db)
    }

    pub fn create_user(&self) -> UserBuilder {
        UserBuilder::new(&self.db)
    }

    /// Inserts a ledger row directly, bypassing reference checks. Lets tests
    /// reproduce legacy rows whose user or ticket has since disappeared.
    pub fn create_purchase_raw(&self, user_id: Uuid, ticket_id: Uuid) -> Purchase {
        let now = Utc::now().naive_utc();
        let purchase = Purchase {
            user_id,
            ticket_id,
            purchase_date: now,
            created_at: now,
        };
        self.db
            .write()
            .unwrap()
            .purchases
            .insert(PurchaseKey { user_id, ticket_id }, purchase.clone());
        purchase
    }
}

impl Default for TestProject {
    fn default() -> Self {
        TestProject::new()
    }
}
