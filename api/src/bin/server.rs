use dotenv::dotenv;
use evently_api::config::{Config, Environment};
use evently_api::server::Server;
use log::Level::Info;
use logging::jlog;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    logging::setup_logger();
    dotenv().ok();
    jlog!(Info, "Environment loaded");
    let config = Config::new(Environment::Development);
    jlog!(Info, "Starting server", { "app_name": config.app_name.clone() });
    Server::start(config).await
}
