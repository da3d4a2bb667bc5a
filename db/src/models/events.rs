use crate::db::Db;
use crate::models::enums::EventStatus;
use crate::utils::errors::{DatabaseError, ErrorCode};
use chrono::prelude::Utc;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Event {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub country: String,
    pub city: String,
    pub speaker_name: String,
    pub speaker_image: Option<String>,
    pub start_datetime: NaiveDateTime,
    pub status: EventStatus,
    pub created_at: NaiveDateTime,
}

#[derive(Clone, Debug, Deserialize, Validate)]
pub struct NewEvent {
    #[validate(length(min = 1, message = "Title cannot be blank"))]
    pub title: String,
    pub description: String,
    pub country: String,
    pub city: String,
    pub speaker_name: String,
    pub speaker_image: Option<String>,
    pub start_datetime: NaiveDateTime,
    pub status: EventStatus,
}

impl NewEvent {
    pub fn commit(&self, conn: &Db) -> Result<Event, DatabaseError> {
        self.validate()?;

        let event = Event {
            id: Uuid::new_v4(),
            title: self.title.clone(),
            description: self.description.clone(),
            country: self.country.clone(),
            city: self.city.clone(),
            speaker_name: self.speaker_name.clone(),
            speaker_image: self.speaker_image.clone(),
            start_datetime: self.start_datetime,
            status: self.status,
            created_at: Utc::now().naive_utc(),
        };
        conn.write()?.events.insert(event.id, event.clone());
        Ok(event)
    }
}

impl Event {
    pub fn create(title: &str, country: &str, city: &str, start_datetime: NaiveDateTime) -> NewEvent {
        NewEvent {
            title: title.to_string(),
            description: "".to_string(),
            country: country.to_string(),
            city: city.to_string(),
            speaker_name: "".to_string(),
            speaker_image: None,
            start_datetime,
            status: EventStatus::Published,
        }
    }

    pub fn find(id: Uuid, conn: &Db) -> Result<Event, DatabaseError> {
        conn.read()?
            .events
            .get(&id)
            .cloned()
            .ok_or_else(|| DatabaseError::new(ErrorCode::NoResults, Some("Error loading event".to_string())))
    }

    /// Removes the event and cascades through its tickets to their
    /// purchases. Returns the number of rows removed.
    pub fn destroy(id: Uuid, conn: &Db) -> Result<usize, DatabaseError> {
        let mut tables = conn.write()?;
        if tables.events.remove(&id).is_none() {
            return DatabaseError::no_results("Error loading event");
        }

        let ticket_ids: Vec<Uuid> = tables
            .tickets
            .values()
            .filter(|t| t.event_id == id)
            .map(|t| t.id)
            .collect();
        tables.tickets.retain(|_, t| t.event_id != id);
        let before = tables.purchases.len();
        tables.purchases.retain(|key, _| !ticket_ids.contains(&key.ticket_id));

        Ok(1 + ticket_ids.len() + before - tables.purchases.len())
    }
}
