use dotenv::dotenv;
use std::env;

#[derive(Clone, Debug, PartialEq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

#[derive(Clone)]
pub struct Config {
    pub allowed_origins: String,
    pub api_url: String,
    pub api_port: String,
    pub app_name: String,
    pub environment: Environment,
}

const ALLOWED_ORIGINS: &str = "ALLOWED_ORIGINS";
const APP_NAME: &str = "APP_NAME";
const API_URL: &str = "API_URL";
const API_PORT: &str = "API_PORT";

impl Config {
    pub fn new(environment: Environment) -> Self {
        dotenv().ok();

        let app_name = env::var(APP_NAME).unwrap_or_else(|_| "Evently".to_string());
        let allowed_origins = env::var(ALLOWED_ORIGINS).unwrap_or_else(|_| "*".to_string());
        let api_url = env::var(API_URL).unwrap_or_else(|_| "127.0.0.1".to_string());
        let api_port = env::var(API_PORT).unwrap_or_else(|_| "8088".to_string());

        Config {
            allowed_origins,
            api_url,
            api_port,
            app_name,
            environment,
        }
    }
}
