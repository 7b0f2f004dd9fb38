use reqwest::Client;
use tracing::info;
use url::Url;

use crate::error::{webhook_error, AppResult};

/// Fixed reminder text for the client, Hebrew only, with exactly two
/// substitutions: the event title and the display time
pub fn reminder_message(summary: &str, display_time: &str) -> String {
    format!("היי {summary}, תזכורת לתור שלך מחר בשעה {display_time} לתספורת אצלי! נתראה :)")
}

/// Sends reminder messages through the outbound webhook
pub struct Notifier {
    webhook_url: String,
    client: Client,
}

impl Notifier {
    pub fn new(webhook_url: String, client: Client) -> Self {
        Self {
            webhook_url,
            client,
        }
    }

    /// Fire one webhook call for one reminder. Single attempt, no retry;
    /// the caller decides whether a failure stops the batch.
    pub async fn send(&self, phone: &str, message: &str) -> AppResult<u16> {
        let mut url = Url::parse(&self.webhook_url)
            .map_err(|e| webhook_error(&format!("Invalid webhook URL: {}", e)))?;

        url.query_pairs_mut()
            .append_pair("phone", phone)
            .append_pair("msg", message);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| webhook_error(&format!("Failed to send webhook: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(webhook_error(&format!("Webhook returned HTTP {}", status)));
        }

        info!("Webhook sent, status {}", status);
        Ok(status.as_u16())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_contains_title_and_time() {
        let message = reminder_message("Dana", "14:30");
        assert!(message.contains("Dana"));
        assert!(message.contains("14:30"));
    }

    #[test]
    fn message_works_with_the_all_day_placeholder() {
        let message = reminder_message("Dana", crate::calendar::time::ALL_DAY_PLACEHOLDER);
        assert!(message.contains("במהלך היום"));
    }
}
