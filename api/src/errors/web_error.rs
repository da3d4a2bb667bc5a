use crate::errors::*;
use actix_web::{http::StatusCode, HttpResponse};
use db::prelude::ErrorCode::ValidationError;
use db::prelude::*;
use log::error;
use serde_json::json;
use std::error::Error;
use std::fmt::Debug;
use std::string::ToString;

pub trait ConvertToWebError: Debug + Error + ToString {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }
    fn to_response(&self) -> HttpResponse;
}

fn internal_error(message: &str) -> HttpResponse {
    status_code_and_message(StatusCode::INTERNAL_SERVER_ERROR, message)
}

fn not_found() -> HttpResponse {
    status_code_and_message(StatusCode::NOT_FOUND, "Not found")
}

fn status_code_and_message(code: StatusCode, message: &str) -> HttpResponse {
    HttpResponse::build(code).json(json!({ "error": message.to_string() }))
}

impl ConvertToWebError for NotFoundError {
    fn status_code(&self) -> StatusCode {
        StatusCode::NOT_FOUND
    }
    fn to_response(&self) -> HttpResponse {
        not_found()
    }
}

impl ConvertToWebError for ApplicationError {
    fn to_response(&self) -> HttpResponse {
        error!("Application error: {}", self.reason);
        internal_error("Internal error")
    }
}

impl ConvertToWebError for DatabaseError {
    fn status_code(&self) -> StatusCode {
        match self.code {
            1000 | 1100 => StatusCode::BAD_REQUEST,
            2000 => StatusCode::NOT_FOUND,
            2200 | 7200 => StatusCode::UNPROCESSABLE_ENTITY,
            3400 => StatusCode::CONFLICT,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
    fn to_response(&self) -> HttpResponse {
        let message = match self.code {
            1000 => "Invalid input",
            1100 => "Missing input",
            2000 => "No results",
            2200 => self
                .cause
                .as_ref()
                .map(|s| s.as_str())
                .unwrap_or("Referenced record does not exist"),
            3400 => self
                .cause
                .as_ref()
                .map(|s| s.as_str())
                .unwrap_or("Duplicate record exists"),
            4000 => "Connection error",
            7200 => match &self.error_code {
                ValidationError { errors } => {
                    return HttpResponse::UnprocessableEntity()
                        .json(json!({"error": "Validation error".to_string(), "fields": errors}))
                }
                _ => "Validation error",
            },
            5000 => "Internal error",
            _ => "Unknown error",
        };
        status_code_and_message(self.status_code(), message)
    }
}
