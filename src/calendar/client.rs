use reqwest::Client;
use std::collections::HashMap;
use tracing::debug;
use url::Url;

use super::models::CalendarEvent;
use crate::config::Config;
use crate::error::{calendar_error, AppResult};

/// Thin client over the Calendar events-listing API, bound to one
/// access token for the duration of a run
pub struct CalendarClient {
    config: Config,
    client: Client,
    access_token: String,
}

impl CalendarClient {
    pub fn new(config: Config, client: Client, access_token: String) -> Self {
        Self {
            config,
            client,
            access_token,
        }
    }

    /// List events on the configured calendar within [time_min, time_max],
    /// with recurring events expanded and ordered by start time
    pub async fn list_events(
        &self,
        time_min: &str,
        time_max: &str,
    ) -> AppResult<Vec<CalendarEvent>> {
        let url_str = format!(
            "{}/calendars/{}/events",
            self.config.api_base_url, self.config.calendar_id
        );

        let mut url = Url::parse(&url_str)
            .map_err(|e| calendar_error(&format!("Failed to parse URL: {}", e)))?;

        let mut query_params = HashMap::new();
        query_params.insert("timeMin", time_min.to_string());
        query_params.insert("timeMax", time_max.to_string());
        query_params.insert("singleEvents", "true".to_string());
        query_params.insert("orderBy", "startTime".to_string());

        for (key, value) in query_params {
            url.query_pairs_mut().append_pair(key, &value);
        }

        let response = self
            .client
            .get(url)
            .header("Authorization", format!("Bearer {}", self.access_token))
            .send()
            .await
            .map_err(|e| calendar_error(&format!("Failed to fetch events: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "Could not read error response".to_string());
            return Err(calendar_error(&format!(
                "Failed to fetch events: HTTP {} - {}",
                status, error_body
            )));
        }

        let response_data: serde_json::Value = response
            .json()
            .await
            .map_err(|e| calendar_error(&format!("Failed to parse events response: {}", e)))?;

        // A response with no items array means an empty window, not an error
        let events = match response_data.get("items").and_then(|i| i.as_array()) {
            Some(items) => items,
            None => return Ok(Vec::new()),
        };

        let calendar_events = events
            .iter()
            .map(|event| {
                let id = event
                    .get("id")
                    .and_then(|id| id.as_str())
                    .unwrap_or("")
                    .to_string();
                let summary = event
                    .get("summary")
                    .and_then(|s| s.as_str())
                    .map(|s| s.to_string());
                let description = event
                    .get("description")
                    .and_then(|s| s.as_str())
                    .map(|s| s.to_string());
                let color_id = event
                    .get("colorId")
                    .and_then(|c| c.as_str())
                    .map(|s| s.to_string());

                // All-day events carry "date" instead of "dateTime"; they
                // surface as a missing start instant and get the all-day
                // placeholder downstream
                let start_date_time = event
                    .get("start")
                    .and_then(|start| start.get("dateTime"))
                    .and_then(|dt| dt.as_str())
                    .map(|s| s.to_string());

                CalendarEvent {
                    id,
                    summary,
                    description,
                    color_id,
                    start_date_time,
                }
            })
            .collect();

        debug!("Fetched events for {} to {}", time_min, time_max);
        Ok(calendar_events)
    }
}
