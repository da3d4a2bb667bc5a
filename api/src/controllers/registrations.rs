use crate::errors::*;
use crate::models::*;
use crate::server::AppState;
use actix_web::{
    web::{Data, Json, Path},
    HttpResponse,
};
use chrono::NaiveDateTime;
use db::prelude::*;
use log::Level::Info;
use logging::jlog;
use serde::{Deserialize, Serialize};
use serde_json::json;
use uuid::Uuid;

#[derive(Deserialize, Serialize)]
pub struct NewRegistrationRequest {
    pub user_id: Uuid,
    pub ticket_id: Uuid,
    pub purchase_date: Option<NaiveDateTime>,
}

#[derive(Deserialize, Serialize)]
pub struct UpdateRegistrationRequest {
    pub user_id: Uuid,
    pub ticket_id: Uuid,
    pub purchase_date: NaiveDateTime,
}

pub async fn create(
    (state, json): (Data<AppState>, Json<NewRegistrationRequest>),
) -> Result<HttpResponse, ApiError> {
    let connection = state.database.get_connection();
    let purchase = Purchase::create(json.user_id, json.ticket_id, json.purchase_date).commit(connection)?;
    jlog!(Info, "evently_api::registrations", "Registration created", {
        "user_id": purchase.user_id.to_string(),
        "ticket_id": purchase.ticket_id.to_string()
    });

    Ok(HttpResponse::Created().json(json!(purchase)))
}

pub async fn update(
    (state, json): (Data<AppState>, Json<UpdateRegistrationRequest>),
) -> Result<HttpResponse, ApiError> {
    let connection = state.database.get_connection();
    let purchase = Purchase::update_purchase_date(json.user_id, json.ticket_id, json.purchase_date, connection)?;

    Ok(HttpResponse::Ok().json(json!(purchase)))
}

pub async fn destroy(
    (state, path): (Data<AppState>, Path<RegistrationPathParameters>),
) -> Result<HttpResponse, ApiError> {
    let connection = state.database.get_connection();
    Purchase::cancel(path.user_id, path.ticket_id, connection)?;
    jlog!(Info, "evently_api::registrations", "Registration cancelled", {
        "user_id": path.user_id.to_string(),
        "ticket_id": path.ticket_id.to_string()
    });

    Ok(HttpResponse::Ok().json(json!({})))
}
