use chrono::Utc;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::error::{auth_error, AppResult};
use crate::secrets::{AppSecret, StoredToken};

/// Scope the stored token is expected to carry
pub const CALENDAR_SCOPE: &str = "https://www.googleapis.com/auth/calendar.readonly";

/// Produces a usable access token from the stored secret files,
/// refreshing an expired one through the OAuth token endpoint
pub struct TokenManager {
    config: Config,
    client: Client,
}

impl TokenManager {
    pub fn new(config: Config, client: Client) -> Self {
        Self { config, client }
    }

    /// Get the access token for this run. Every failure path here is
    /// terminal: a headless run cannot fall back to interactive consent.
    pub async fn access_token(&self) -> AppResult<String> {
        let token = match StoredToken::load(&self.config.token_path) {
            Ok(token) => token,
            Err(e) => {
                warn!("Failed to load {}: {}", self.config.token_path, e);
                return Err(auth_error(
                    "No valid token found and refresh is not possible in a headless run",
                ));
            }
        };

        if !token.scopes.is_empty() && !token.scopes.iter().any(|s| s == CALENDAR_SCOPE) {
            warn!("Stored token does not list the read-only calendar scope");
        }

        if !token.is_expired(Utc::now()) {
            debug!("Loaded valid credentials from {}", self.config.token_path);
            return Ok(token.token);
        }

        match &token.refresh_token {
            Some(refresh_token) => {
                info!("Access token expired, refreshing");
                self.refresh(refresh_token).await
            }
            None => Err(auth_error(
                "No valid token found and refresh is not possible in a headless run",
            )),
        }
    }

    /// Refresh an expired token. Single attempt, no retry. The refreshed
    /// token is used in memory only; persisting the token file is the
    /// OAuth flow's job, not ours.
    async fn refresh(&self, refresh_token: &str) -> AppResult<String> {
        let secret = AppSecret::load(&self.config.credentials_path)
            .map_err(|e| auth_error(&format!("Failed to load client credentials: {}", e)))?;

        let params = [
            ("client_id", secret.installed.client_id.as_str()),
            ("client_secret", secret.installed.client_secret.as_str()),
            ("refresh_token", refresh_token),
            ("grant_type", "refresh_token"),
        ];

        let response = self
            .client
            .post(&self.config.token_endpoint)
            .form(&params)
            .send()
            .await
            .map_err(|e| auth_error(&format!("Failed to refresh token: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "Could not read error response".to_string());
            return Err(auth_error(&format!(
                "Failed to refresh token: HTTP {} - {}",
                status, error_body
            )));
        }

        let new_token: Value = response
            .json()
            .await
            .map_err(|e| auth_error(&format!("Failed to parse token response: {}", e)))?;

        let access_token = new_token
            .get("access_token")
            .and_then(|t| t.as_str())
            .ok_or_else(|| auth_error("Token response missing 'access_token' field"))?;

        info!("Token refreshed successfully");
        Ok(access_token.to_string())
    }
}
