use serde::Deserialize;
use uuid::Uuid;

#[derive(Deserialize)]
pub struct RegistrationPathParameters {
    pub user_id: Uuid,
    pub ticket_id: Uuid,
}

#[derive(Deserialize)]
pub struct TicketCodePathParameters {
    pub code: String,
}
