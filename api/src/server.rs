use crate::config::Config;
use crate::database::Database;
use crate::routing;
use actix_cors::Cors;
use actix_web::middleware::Logger;
use actix_web::{web::Data, App, HttpServer};
use log::Level::Info;
use logging::jlog;

// Must be valid JSON
const LOGGER_FORMAT: &str = r#"{"level": "INFO", "target":"evently::request", "remote_ip":"%a", "user_agent": "%{User-Agent}i", "request": "%r", "status_code": %s, "response_time": %D }"#;

pub struct AppState {
    pub config: Config,
    pub database: Database,
}

impl AppState {
    pub fn new(config: Config, database: Database) -> AppState {
        AppState { config, database }
    }
}

pub struct Server {
    pub config: Config,
}

impl Server {
    pub async fn start(config: Config) -> std::io::Result<()> {
        let bind_addr = format!("{}:{}", config.api_url, config.api_port);
        jlog!(Info, "evently_api::server", "Server starting", { "bind": bind_addr.clone() });

        let database = Database::new();
        let data = Data::new(AppState::new(config.clone(), database));
        let allowed_origins = config.allowed_origins.clone();

        HttpServer::new(move || {
            let cors = match allowed_origins.as_str() {
                "*" => Cors::permissive(),
                origins => {
                    let mut cors = Cors::default().allow_any_method().allow_any_header();
                    for origin in origins.split(',') {
                        cors = cors.allowed_origin(origin.trim());
                    }
                    cors
                }
            };

            App::new()
                .app_data(data.clone())
                .wrap(Logger::new(LOGGER_FORMAT))
                .wrap(cors)
                .configure(routing::routes)
        })
        .bind(bind_addr)?
        .run()
        .await
    }
}
