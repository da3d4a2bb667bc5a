use crate::errors::*;
use crate::models::*;
use crate::server::AppState;
use actix_web::{
    web::{Data, Path, Query},
    HttpResponse,
};
use db::prelude::*;
use serde_json::json;

pub async fn index(
    (state, query): (Data<AppState>, Query<AttendeeFilters>),
) -> Result<HttpResponse, ApiError> {
    let connection = state.database.get_connection();
    let attendees = AttendeeRow::list(&query.into_inner(), connection)?;

    Ok(HttpResponse::Ok().json(json!(attendees)))
}

pub async fn show(
    (state, path): (Data<AppState>, Path<TicketCodePathParameters>),
) -> Result<HttpResponse, ApiError> {
    let connection = state.database.get_connection();
    let attendee = AttendeeRow::find_by_ticket_code(&path.code, connection)?;

    Ok(HttpResponse::Ok().json(json!(attendee)))
}
