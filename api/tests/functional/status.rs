use crate::support::database::TestDatabase;
use actix_web::http::StatusCode;
use evently_api::controllers::status;

#[actix_rt::test]
async fn check() {
    let database = TestDatabase::new();
    let response = status::check(database.state()).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
