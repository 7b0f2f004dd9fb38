use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

use super::models::CalendarEvent;
use super::time::event_display_time;

/// Mobile numbers in the form 05X-XXXXXXX, hyphen optional
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"05\d-?\d{7}").expect("phone pattern is valid"));

/// One reminder ready to be sent
#[derive(Debug, Clone)]
pub struct Reminder {
    pub summary: String,
    pub phone: String,
    pub display_time: String,
}

/// First phone number found in the text, if any
pub fn extract_phone(text: &str) -> Option<String> {
    PHONE_RE.find(text).map(|m| m.as_str().to_string())
}

/// An event is skipped only when it carries a marker color different from
/// the target. Uncolored events pass.
pub fn passes_color_filter(event: &CalendarEvent, target_color_id: &str) -> bool {
    match &event.color_id {
        Some(color_id) => color_id == target_color_id,
        None => true,
    }
}

/// Lazily yield a reminder for every event that passes the marker filter
/// and has a phone number in its description
pub fn reminders<'a>(
    events: &'a [CalendarEvent],
    target_color_id: &'a str,
) -> impl Iterator<Item = Reminder> + 'a {
    events.iter().filter_map(move |event| {
        let summary = event
            .summary
            .clone()
            .unwrap_or_else(|| String::from("No Title"));

        debug!("Checking event: {} | color: {:?}", summary, event.color_id);

        if !passes_color_filter(event, target_color_id) {
            debug!("Skipped (color mismatch)");
            return None;
        }

        let phone = match event.description.as_deref().and_then(extract_phone) {
            Some(phone) => phone,
            None => {
                debug!("Skipped (no phone number)");
                return None;
            }
        };

        let display_time = event_display_time(event);
        Some(Reminder {
            summary,
            phone,
            display_time,
        })
    })
}
