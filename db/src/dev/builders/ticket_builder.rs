use crate::db::Db;
use crate::dev::builders::EventBuilder;
use crate::models::{Event, Ticket};
use uuid::Uuid;

pub struct TicketBuilder<'a> {
    event_id: Option<Uuid>,
    title: String,
    ticket_type: String,
    price_in_cents: i64,
    connection: &'a Db,
}

impl<'a> TicketBuilder<'a> {
    pub fn new(connection: &'a Db) -> TicketBuilder<'a> {
        TicketBuilder {
            connection,
            event_id: None,
            title: "General admission".to_string(),
            ticket_type: "Regular".to_string(),
            price_in_cents: 2500,
        }
    }

    pub fn with_event(mut self, event: &Event) -> TicketBuilder<'a> {
        self.event_id = Some(event.id);
        self
    }

    pub fn with_title(mut self, title: &str) -> TicketBuilder<'a> {
        self.title = title.to_string();
        self
    }

    pub fn with_ticket_type(mut self, ticket_type: &str) -> TicketBuilder<'a> {
        self.ticket_type = ticket_type.to_string();
        self
    }

    pub fn with_price_in_cents(mut self, price_in_cents: i64) -> TicketBuilder<'a> {
        self.price_in_cents = price_in_cents;
        self
    }

    pub fn finish(mut self) -> Ticket {
        if self.event_id.is_none() {
            let event = EventBuilder::new(self.connection).finish();
            self.event_id = Some(event.id);
        }
        Ticket::create(
            self.event_id.unwrap(),
            &self.title,
            &self.ticket_type,
            self.price_in_cents,
        )
        .commit(self.connection)
        .unwrap()
    }
}
