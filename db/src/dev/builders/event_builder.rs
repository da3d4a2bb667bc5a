use crate::db::Db;
use crate::models::Event;
use crate::utils::dates;
use crate::utils::rand::random_alpha_string;

pub struct EventBuilder<'a> {
    title: String,
    country: String,
    city: String,
    speaker_name: String,
    connection: &'a Db,
}

impl<'a> EventBuilder<'a> {
    pub fn new(connection: &'a Db) -> EventBuilder<'a> {
        EventBuilder {
            connection,
            title: format!("Event {}", random_alpha_string(6)),
            country: "ZA".to_string(),
            city: "Cape Town".to_string(),
            speaker_name: "Ada Jones".to_string(),
        }
    }

    pub fn with_title(mut self, title: &str) -> EventBuilder<'a> {
        self.title = title.to_string();
        self
    }

    pub fn with_location(mut self, country: &str, city: &str) -> EventBuilder<'a> {
        self.country = country.to_string();
        self.city = city.to_string();
        self
    }

    pub fn finish(self) -> Event {
        let mut new_event = Event::create(
            &self.title,
            &self.country,
            &self.city,
            dates::now().add_days(7).finish(),
        );
        new_event.speaker_name = self.speaker_name.clone();
        new_event.commit(self.connection).unwrap()
    }
}
