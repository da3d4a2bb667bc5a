use crate::errors::*;
use crate::server::AppState;
use actix_web::{web::Data, HttpResponse};
use db::prelude::*;
use serde_json::json;

pub async fn demographics(state: Data<AppState>) -> Result<HttpResponse, ApiError> {
    let connection = state.database.get_connection();
    let report = Demographics::report(connection)?;

    Ok(HttpResponse::Ok().json(json!(report)))
}
