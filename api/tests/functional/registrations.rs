use crate::support;
use crate::support::database::TestDatabase;
use actix_web::http::StatusCode;
use actix_web::web::{Json, Path};
use actix_web::ResponseError;
use db::prelude::*;
use evently_api::controllers::registrations;
use evently_api::controllers::registrations::{NewRegistrationRequest, UpdateRegistrationRequest};
use evently_api::models::RegistrationPathParameters;
use serde_json::Value;
use uuid::Uuid;

#[actix_rt::test]
async fn create() {
    let database = TestDatabase::new();
    let user = database.project().create_user().finish();
    let ticket = database.project().create_ticket().finish();

    let json = Json(NewRegistrationRequest {
        user_id: user.id,
        ticket_id: ticket.id,
        purchase_date: None,
    });

    let response = registrations::create((database.state(), json)).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = support::unwrap_body_to_string(response).await;
    let purchase: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(purchase["user_id"], Value::String(user.id.to_string()));
    assert_eq!(purchase["ticket_id"], Value::String(ticket.id.to_string()));

    let stored = Purchase::find(user.id, ticket.id, database.project().connection()).unwrap();
    assert_eq!(stored.user_id, user.id);
}

#[actix_rt::test]
async fn create_with_explicit_purchase_date() {
    let database = TestDatabase::new();
    let user = database.project().create_user().finish();
    let ticket = database.project().create_ticket().finish();
    let purchase_date = dates::now().add_days(-3).finish();

    let json = Json(NewRegistrationRequest {
        user_id: user.id,
        ticket_id: ticket.id,
        purchase_date: Some(purchase_date),
    });

    let response = registrations::create((database.state(), json)).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let stored = Purchase::find(user.id, ticket.id, database.project().connection()).unwrap();
    assert_eq!(stored.purchase_date, purchase_date);
}

#[actix_rt::test]
async fn create_duplicate_registration() {
    let database = TestDatabase::new();
    let user = database.project().create_user().finish();
    let ticket = database.project().create_ticket().finish();
    database
        .project()
        .create_purchase()
        .with_user(&user)
        .with_ticket(&ticket)
        .finish();

    let json = Json(NewRegistrationRequest {
        user_id: user.id,
        ticket_id: ticket.id,
        purchase_date: None,
    });

    let error = registrations::create((database.state(), json)).await.err().unwrap();
    assert_eq!(error.status_code(), StatusCode::CONFLICT);
}

#[actix_rt::test]
async fn create_with_unknown_references() {
    let database = TestDatabase::new();
    let ticket = database.project().create_ticket().finish();

    let json = Json(NewRegistrationRequest {
        user_id: Uuid::new_v4(),
        ticket_id: ticket.id,
        purchase_date: None,
    });

    let error = registrations::create((database.state(), json)).await.err().unwrap();
    assert_eq!(error.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[actix_rt::test]
async fn update() {
    let database = TestDatabase::new();
    let purchase = database.project().create_purchase().finish();
    let new_date = dates::now().add_days(-1).finish();

    let json = Json(UpdateRegistrationRequest {
        user_id: purchase.user_id,
        ticket_id: purchase.ticket_id,
        purchase_date: new_date,
    });

    let response = registrations::update((database.state(), json)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let stored = Purchase::find(purchase.user_id, purchase.ticket_id, database.project().connection()).unwrap();
    assert_eq!(stored.purchase_date, new_date);
}

#[actix_rt::test]
async fn update_missing_registration() {
    let database = TestDatabase::new();

    let json = Json(UpdateRegistrationRequest {
        user_id: Uuid::new_v4(),
        ticket_id: Uuid::new_v4(),
        purchase_date: dates::now().finish(),
    });

    let error = registrations::update((database.state(), json)).await.err().unwrap();
    assert_eq!(error.status_code(), StatusCode::NOT_FOUND);
}

#[actix_rt::test]
async fn destroy() {
    let database = TestDatabase::new();
    let purchase = database.project().create_purchase().finish();

    let path = Path::from(RegistrationPathParameters {
        user_id: purchase.user_id,
        ticket_id: purchase.ticket_id,
    });

    let response = registrations::destroy((database.state(), path)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(Purchase::find(purchase.user_id, purchase.ticket_id, database.project().connection()).is_err());

    // Cancelling the same registration again reports it as gone
    let path = Path::from(RegistrationPathParameters {
        user_id: purchase.user_id,
        ticket_id: purchase.ticket_id,
    });
    let error = registrations::destroy((database.state(), path)).await.err().unwrap();
    assert_eq!(error.status_code(), StatusCode::NOT_FOUND);
}

#[actix_rt::test]
async fn destroy_then_register_again() {
    let database = TestDatabase::new();
    let purchase = database.project().create_purchase().finish();

    let path = Path::from(RegistrationPathParameters {
        user_id: purchase.user_id,
        ticket_id: purchase.ticket_id,
    });
    registrations::destroy((database.state(), path)).await.unwrap();

    let json = Json(NewRegistrationRequest {
        user_id: purchase.user_id,
        ticket_id: purchase.ticket_id,
        purchase_date: None,
    });
    let response = registrations::create((database.state(), json)).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
}
