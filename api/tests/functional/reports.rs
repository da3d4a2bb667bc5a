use crate::support;
use crate::support::database::TestDatabase;
use actix_web::http::StatusCode;
use evently_api::controllers::reports;
use serde_json::Value;

#[actix_rt::test]
async fn demographics() {
    let database = TestDatabase::new();
    let project = database.project();
    project
        .create_user()
        .with_demographics(Some(22), Some("female"), Some("Norway"))
        .finish();
    project
        .create_user()
        .with_demographics(Some(40), Some("male"), Some("Norway"))
        .finish();
    project.create_user().with_demographics(None, None, None).finish();

    let response = reports::demographics(database.state()).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = support::unwrap_body_to_string(response).await;
    let report: Value = serde_json::from_str(&body).unwrap();

    let age = report["age"].as_array().unwrap();
    let bucket = age.iter().find(|b| b["label"] == "18-24").unwrap();
    assert_eq!(bucket["count"], 1);
    assert_eq!(bucket["percentage"], 33.33);
    let unspecified = age.iter().find(|b| b["label"] == "Unspecified").unwrap();
    assert_eq!(unspecified["count"], 1);

    let domicile = report["domicile"].as_array().unwrap();
    let norway = domicile.iter().find(|b| b["label"] == "Norway").unwrap();
    assert_eq!(norway["count"], 2);
    assert_eq!(norway["percentage"], 66.67);
}

#[actix_rt::test]
async fn demographics_with_empty_store() {
    let database = TestDatabase::new();

    let response = reports::demographics(database.state()).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = support::unwrap_body_to_string(response).await;
    let report: Value = serde_json::from_str(&body).unwrap();
    assert!(report["gender"].as_array().unwrap().is_empty());
}
