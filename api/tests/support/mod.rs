pub mod database;

use actix_web::body::to_bytes;
use actix_web::HttpResponse;

pub async fn unwrap_body_to_string(response: HttpResponse) -> String {
    let bytes = to_bytes(response.into_body()).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}
