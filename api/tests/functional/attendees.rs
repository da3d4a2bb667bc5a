use crate::support;
use crate::support::database::TestDatabase;
use actix_web::http::StatusCode;
use actix_web::web::{Path, Query};
use actix_web::ResponseError;
use db::prelude::*;
use evently_api::controllers::attendees;
use evently_api::models::TicketCodePathParameters;
use macros::assert_equiv;
use serde_json::Value;

fn no_filters() -> Query<AttendeeFilters> {
    Query(AttendeeFilters {
        search: None,
        status: None,
        ticket_type: None,
    })
}

#[actix_rt::test]
async fn index() {
    let database = TestDatabase::new();
    let project = database.project();
    let event = project.create_event().with_title("Launch party").finish();
    let ticket = project
        .create_ticket()
        .with_event(&event)
        .with_title("VIP pass")
        .with_ticket_type("VIP")
        .with_price_in_cents(5000)
        .finish();
    let user = project
        .create_user()
        .with_name("Jane Mercer")
        .with_email("jane@example.com")
        .finish();
    project.create_purchase().with_user(&user).with_ticket(&ticket).finish();

    let response = attendees::index((database.state(), no_filters())).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = support::unwrap_body_to_string(response).await;
    let rows: Vec<Value> = serde_json::from_str(&body).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["name"], "Jane Mercer");
    assert_eq!(rows[0]["email"], "jane@example.com");
    assert_eq!(rows[0]["status"], "Pending");
    assert_eq!(rows[0]["ticket_type"], "VIP");
    assert_eq!(rows[0]["event_title"], "Launch party");
    assert_eq!(rows[0]["price"], "50.00");
}

#[actix_rt::test]
async fn index_with_search() {
    let database = TestDatabase::new();
    let project = database.project();
    let ticket = project.create_ticket().finish();
    let jane = project
        .create_user()
        .with_name("Jane Mercer")
        .with_email("jane@example.com")
        .finish();
    let rob = project
        .create_user()
        .with_name("Rob Morrett")
        .with_email("rob@damnis.com")
        .finish();
    project.create_purchase().with_user(&jane).with_ticket(&ticket).finish();
    project.create_purchase().with_user(&rob).with_ticket(&ticket).finish();

    let query = Query(AttendeeFilters {
        search: Some("damnis".to_string()),
        status: None,
        ticket_type: None,
    });
    let response = attendees::index((database.state(), query)).await.unwrap();
    let body = support::unwrap_body_to_string(response).await;
    let rows: Vec<Value> = serde_json::from_str(&body).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["name"], "Rob Morrett");
}

#[actix_rt::test]
async fn index_with_status_filter() {
    let database = TestDatabase::new();
    let project = database.project();
    let pending = project.create_ticket().finish();
    let checked_in = project.create_ticket().finish();
    Ticket::check_in(checked_in.id, project.connection()).unwrap();
    project.create_purchase().with_ticket(&pending).finish();
    project.create_purchase().with_ticket(&checked_in).finish();

    let query = Query(AttendeeFilters {
        search: None,
        status: Some("Checked in".to_string()),
        ticket_type: None,
    });
    let response = attendees::index((database.state(), query)).await.unwrap();
    let body = support::unwrap_body_to_string(response).await;
    let rows: Vec<Value> = serde_json::from_str(&body).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["status"], "Checked in");

    // "all" is the placeholder the dropdown sends when no status is picked
    let query = Query(AttendeeFilters {
        search: None,
        status: Some("all".to_string()),
        ticket_type: None,
    });
    let response = attendees::index((database.state(), query)).await.unwrap();
    let body = support::unwrap_body_to_string(response).await;
    let rows: Vec<Value> = serde_json::from_str(&body).unwrap();
    let statuses: Vec<String> = rows.iter().map(|r| r["status"].as_str().unwrap().to_string()).collect();
    assert_equiv!(statuses, vec!["Pending".to_string(), "Checked in".to_string()]);
}

#[actix_rt::test]
async fn index_with_ticket_type_filter() {
    let database = TestDatabase::new();
    let project = database.project();
    let regular = project.create_ticket().with_ticket_type("Regular").finish();
    let vip = project.create_ticket().with_ticket_type("VIP").finish();
    project.create_purchase().with_ticket(&regular).finish();
    project.create_purchase().with_ticket(&vip).finish();

    let query = Query(AttendeeFilters {
        search: None,
        status: None,
        ticket_type: Some("VIP".to_string()),
    });
    let response = attendees::index((database.state(), query)).await.unwrap();
    let body = support::unwrap_body_to_string(response).await;
    let rows: Vec<Value> = serde_json::from_str(&body).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["ticket_type"], "VIP");
}

#[actix_rt::test]
async fn index_after_cancellation() {
    let database = TestDatabase::new();
    let project = database.project();
    let purchase = project.create_purchase().finish();

    Purchase::cancel(purchase.user_id, purchase.ticket_id, project.connection()).unwrap();

    let response = attendees::index((database.state(), no_filters())).await.unwrap();
    let body = support::unwrap_body_to_string(response).await;
    let rows: Vec<Value> = serde_json::from_str(&body).unwrap();
    assert!(rows.is_empty());
}

#[actix_rt::test]
async fn show() {
    let database = TestDatabase::new();
    let project = database.project();
    let ticket = project.create_ticket().with_title("Gala dinner").finish();
    let user = project.create_user().with_name("Jane Mercer").finish();
    project.create_purchase().with_user(&user).with_ticket(&ticket).finish();

    let path = Path::from(TicketCodePathParameters {
        code: ticket.code.clone(),
    });
    let response = attendees::show((database.state(), path)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = support::unwrap_body_to_string(response).await;
    let attendee: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(attendee["name"], "Jane Mercer");
    assert_eq!(attendee["id"], Value::String(ticket.id.to_string()));
}

#[actix_rt::test]
async fn show_unknown_code() {
    let database = TestDatabase::new();

    let path = Path::from(TicketCodePathParameters {
        code: "NOSUCHCOD".to_string(),
    });
    let error = attendees::show((database.state(), path)).await.err().unwrap();
    assert_eq!(error.status_code(), StatusCode::NOT_FOUND);
}
