use crate::controllers::*;
use actix_web::web;

pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/status").route(web::get().to(status::check)))
        .service(
            web::resource("/registrations")
                .route(web::post().to(registrations::create))
                .route(web::put().to(registrations::update)),
        )
        .service(
            web::resource("/registrations/{user_id}/{ticket_id}").route(web::delete().to(registrations::destroy)),
        )
        .service(web::resource("/attendees").route(web::get().to(attendees::index)))
        .service(web::resource("/attendees/{code}").route(web::get().to(attendees::show)))
        .service(web::resource("/reports/demographics").route(web::get().to(reports::demographics)));
}
