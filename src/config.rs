use crate::error::{env_error, AppResult};
use dotenvy::dotenv;
use std::env;

/// Marker color that tags events eligible for a reminder (Lavender)
pub const DEFAULT_TARGET_COLOR_ID: &str = "1";

const DEFAULT_CALENDAR_ID: &str = "primary";
const DEFAULT_TOKEN_PATH: &str = "token.json";
const DEFAULT_CREDENTIALS_PATH: &str = "credentials.json";
const GOOGLE_TOKEN_ENDPOINT: &str = "https://oauth2.googleapis.com/token";
const CALENDAR_API_BASE: &str = "https://www.googleapis.com/calendar/v3";

/// Main configuration structure for the reminder run
#[derive(Debug, Clone)]
pub struct Config {
    /// Outbound webhook that delivers the reminder text message
    pub webhook_url: String,
    /// Path to the stored OAuth token file
    pub token_path: String,
    /// Path to the OAuth client credentials file
    pub credentials_path: String,
    /// Only events carrying this color id (or none at all) get a reminder
    pub target_color_id: String,
    /// Calendar to query for tomorrow's appointments
    pub calendar_id: String,
    /// OAuth token refresh endpoint
    pub token_endpoint: String,
    /// Base URL of the Calendar REST API
    pub api_base_url: String,
}

impl Config {
    /// Load configuration from the environment
    pub fn load() -> AppResult<Self> {
        // Load .env file if it exists
        dotenv().ok();

        // The webhook URL is the only required setting; without it the
        // run must stop before any API call is made
        let webhook_url = env::var("WEBHOOK_URL").map_err(|_| env_error("WEBHOOK_URL"))?;

        let token_path =
            env::var("TOKEN_PATH").unwrap_or_else(|_| String::from(DEFAULT_TOKEN_PATH));
        let credentials_path = env::var("CREDENTIALS_PATH")
            .unwrap_or_else(|_| String::from(DEFAULT_CREDENTIALS_PATH));
        let target_color_id = env::var("TARGET_COLOR_ID")
            .unwrap_or_else(|_| String::from(DEFAULT_TARGET_COLOR_ID));
        let calendar_id =
            env::var("CALENDAR_ID").unwrap_or_else(|_| String::from(DEFAULT_CALENDAR_ID));

        Ok(Config {
            webhook_url,
            token_path,
            credentials_path,
            target_color_id,
            calendar_id,
            token_endpoint: String::from(GOOGLE_TOKEN_ENDPOINT),
            api_base_url: String::from(CALENDAR_API_BASE),
        })
    }
}
