use std::env;
use dotenvy::dotenv;

#[derive(Clone)]
pub struct Config {
    pub api_base_url: String,
    pub http_timeout_secs: u64,
    pub log_dir: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        Self {
            api_base_url: env::var("API_BASE_URL").expect("API_BASE_URL must be set"),
            http_timeout_secs: env::var("HTTP_TIMEOUT_SECS")
                .unwrap_or_else(|_| "30".to_string()) // transport default
                .parse()
                .unwrap(),
            log_dir: env::var("LOG_DIR").unwrap_or_else(|_| "logs".to_string()),
        }
    }
}
