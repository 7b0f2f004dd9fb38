use reqwest::Client;
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use crate::calendar::filter::reminders;
use crate::calendar::time::tomorrow_range;
use crate::calendar::{CalendarClient, TokenManager};
use crate::config::Config;
use crate::error::{env_error, AppResult, Error};
use crate::notify::{reminder_message, Notifier};
use crate::secrets::check_files_integrity;

/// Initialize logging with environment-based configuration
pub fn init_logging() -> miette::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| Error::Other(format!("Failed to set up logging: {}", e)))?;

    Ok(())
}

/// Load and initialize the application config
pub fn load_config() -> miette::Result<Config> {
    match Config::load() {
        Ok(config) => Ok(config),
        Err(e) => {
            error!("Failed to load configuration: {:?}", e);
            Err(e.into())
        }
    }
}

/// Run the reminder pipeline once: check secrets, authenticate, query
/// tomorrow's window, and fire one webhook call per matching event
pub async fn run(config: &Config) -> AppResult<()> {
    // Nothing may touch the network without a webhook to deliver to
    if config.webhook_url.is_empty() {
        return Err(env_error("WEBHOOK_URL"));
    }

    // Advisory report on the secret files; failures here never stop the run
    check_files_integrity(&[config.token_path.as_str(), config.credentials_path.as_str()]);

    let client = Client::new();

    let token_manager = TokenManager::new(config.clone(), client.clone());
    let access_token = token_manager.access_token().await?;

    let calendar = CalendarClient::new(config.clone(), client.clone(), access_token);
    let (time_min, time_max) = tomorrow_range();
    info!("Querying range {} to {}", time_min, time_max);

    let events = calendar.list_events(&time_min, &time_max).await?;
    info!("Events found: {}", events.len());

    if events.is_empty() {
        info!("No events found in range");
        return Ok(());
    }

    let notifier = Notifier::new(config.webhook_url.clone(), client);
    for reminder in reminders(&events, &config.target_color_id) {
        let message = reminder_message(&reminder.summary, &reminder.display_time);
        info!(
            "Sending reminder for '{}' to {}",
            reminder.summary, reminder.phone
        );

        // One failed webhook must not stop the remaining reminders
        if let Err(e) = notifier.send(&reminder.phone, &message).await {
            warn!("Failed to notify {}: {}", reminder.phone, e);
        }
    }

    Ok(())
}
