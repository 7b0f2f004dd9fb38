use chrono::{DateTime, Duration, Utc};

use super::models::CalendarEvent;

/// Placeholder shown when an event has no concrete start time
pub const ALL_DAY_PLACEHOLDER: &str = "במהלך היום";

/// Fixed offset used only to decide which calendar date counts as tomorrow
const LOCAL_OFFSET_HOURS: i64 = 2;

/// Compute the query window bounding tomorrow.
///
/// The +2h offset shifts which date is "tomorrow", but the emitted bounds
/// stay literal UTC midnight-to-midnight for that date. Near local midnight
/// the window therefore does not line up with local midnight. Known quirk,
/// kept as-is because the webhook consumer is tuned against it.
pub fn tomorrow_range_at(now: DateTime<Utc>) -> (String, String) {
    let local_now = now + Duration::hours(LOCAL_OFFSET_HOURS);
    let tomorrow = local_now.date_naive() + Duration::days(1);

    let time_min = format!("{}T00:00:00Z", tomorrow);
    let time_max = format!("{}T23:59:59Z", tomorrow);
    (time_min, time_max)
}

/// Window for tomorrow relative to the current instant
pub fn tomorrow_range() -> (String, String) {
    tomorrow_range_at(Utc::now())
}

/// Format an event's start time for the reminder text as HH:MM, in
/// whatever offset the API returned. Events with no start time, or an
/// unparseable one, get the all-day placeholder.
pub fn event_display_time(event: &CalendarEvent) -> String {
    match &event.start_date_time {
        Some(start) => DateTime::parse_from_rfc3339(start)
            .map(|dt| dt.format("%H:%M").to_string())
            .unwrap_or_else(|_| ALL_DAY_PLACEHOLDER.to_string()),
        None => ALL_DAY_PLACEHOLDER.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn tomorrow_range_is_deterministic() {
        let now = Utc.with_ymd_and_hms(2026, 8, 23, 10, 0, 0).unwrap();
        assert_eq!(tomorrow_range_at(now), tomorrow_range_at(now));
    }

    #[test]
    fn tomorrow_is_next_local_date() {
        let now = Utc.with_ymd_and_hms(2026, 8, 23, 10, 0, 0).unwrap();
        let (time_min, time_max) = tomorrow_range_at(now);
        assert_eq!(time_min, "2026-08-24T00:00:00Z");
        assert_eq!(time_max, "2026-08-24T23:59:59Z");
    }

    // Late UTC evening: the +2h offset already puts the local clock on the
    // next date, so "tomorrow" skips a day relative to the UTC date. The
    // bounds are still emitted as plain UTC instants for that date.
    #[test]
    fn offset_shifts_date_but_not_bounds() {
        let now = Utc.with_ymd_and_hms(2026, 8, 23, 22, 30, 0).unwrap();
        let (time_min, time_max) = tomorrow_range_at(now);
        assert_eq!(time_min, "2026-08-25T00:00:00Z");
        assert_eq!(time_max, "2026-08-25T23:59:59Z");
    }

    #[test]
    fn month_rollover() {
        let now = Utc.with_ymd_and_hms(2026, 8, 31, 10, 0, 0).unwrap();
        let (time_min, _) = tomorrow_range_at(now);
        assert_eq!(time_min, "2026-09-01T00:00:00Z");
    }

    #[test]
    fn display_time_uses_the_events_own_offset() {
        let event = CalendarEvent {
            start_date_time: Some("2026-08-24T14:30:00+02:00".to_string()),
            ..Default::default()
        };
        assert_eq!(event_display_time(&event), "14:30");

        // A different offset is kept, not normalized
        let event = CalendarEvent {
            start_date_time: Some("2026-08-24T14:30:00+05:00".to_string()),
            ..Default::default()
        };
        assert_eq!(event_display_time(&event), "14:30");
    }

    // All-day events come back from the API without a start instant
    #[test]
    fn events_without_a_start_instant_get_the_placeholder() {
        let event = CalendarEvent::default();
        assert_eq!(event_display_time(&event), ALL_DAY_PLACEHOLDER);
    }

    #[test]
    fn unparseable_start_falls_back_to_placeholder() {
        let event = CalendarEvent {
            start_date_time: Some("yesterday-ish".to_string()),
            ..Default::default()
        };
        assert_eq!(event_display_time(&event), ALL_DAY_PLACEHOLDER);
    }
}
