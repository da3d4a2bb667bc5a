use crate::db::Db;
use crate::dev::builders::{TicketBuilder, UserBuilder};
use crate::models::{Purchase, Ticket, User};
use chrono::NaiveDateTime;
use uuid::Uuid;

pub struct PurchaseBuilder<'a> {
    user_id: Option<Uuid>,
    ticket_id: Option<Uuid>,
    purchase_date: Option<NaiveDateTime>,
    connection: &'a Db,
}

impl<'a> PurchaseBuilder<'a> {
    pub fn new(connection: &'a Db) -> PurchaseBuilder<'a> {
        PurchaseBuilder {
            connection,
            user_id: None,
            ticket_id: None,
            purchase_date: None,
        }
    }

    pub fn with_user(mut self, user: &User) -> PurchaseBuilder<'a> {
        self.user_id = Some(user.id);
        self
    }

    pub fn with_ticket(mut self, ticket: &Ticket) -> PurchaseBuilder<'a> {
        self.ticket_id = Some(ticket.id);
        self
    }

    pub fn with_purchase_date(mut self, purchase_date: NaiveDateTime) -> PurchaseBuilder<'a> {
        self.purchase_date = Some(purchase_date);
        self
    }

    pub fn finish(mut self) -> Purchase {
        if self.user_id.is_none() {
            let user = UserBuilder::new(self.connection).finish();
            self.user_id = Some(user.id);
        }
        if self.ticket_id.is_none() {
            let ticket = TicketBuilder::new(self.connection).finish();
            self.ticket_id = Some(ticket.id);
        }
        Purchase::create(self.user_id.unwrap(), self.ticket_id.unwrap(), self.purchase_date)
            .commit(self.connection)
            .unwrap()
    }
}
