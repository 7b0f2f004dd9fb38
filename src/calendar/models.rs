/// Simplified calendar event representation
#[derive(Debug, Clone, serde::Deserialize, Default)]
pub struct CalendarEvent {
    pub id: String,
    pub summary: Option<String>,
    pub description: Option<String>,
    /// Opaque marker color id, absent when the event is uncolored
    pub color_id: Option<String>,
    /// Start instant as the API returned it; all-day events have none
    pub start_date_time: Option<String>,
}
