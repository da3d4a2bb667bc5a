use crate::errors::*;
use crate::server::AppState;
use actix_web::{web::Data, HttpResponse};

/// Liveness probe: a readable store is a healthy server.
pub async fn check(state: Data<AppState>) -> Result<HttpResponse, ApiError> {
    drop(state.database.get_connection().read()?);
    Ok(HttpResponse::Ok().finish())
}
