use crate::calendar::parse_time_to_minutes;
use crate::models::{Attendance, CalendarEvent};

pub const MAX_DURATION_MINUTES: u32 = 600;

/// Validates a calendar event
pub fn validate_event(event: &CalendarEvent) -> Result<(), String> {
    if event.title.trim().is_empty() {
        return Err("Event title is required".to_string());
    }

    if parse_time_to_minutes(&event.time).is_none() {
        return Err("Time must be in HH:MM format".to_string());
    }

    if event.duration == 0 || event.duration > MAX_DURATION_MINUTES {
        return Err(format!(
            "Duration must be between 1 and {} minutes",
            MAX_DURATION_MINUTES
        ));
    }

    if event.attendance == Attendance::Selected && event.selected_players.is_empty() {
        return Err("Select at least one player for this event".to_string());
    }

    if let Some(end) = event.recurrence.end_date {
        if end < event.date {
            return Err("Recurrence end date cannot be before the event date".to_string());
        }
    }

    if let Some(day) = event.recurrence.selected_days.iter().find(|&&d| d > 6) {
        return Err(format!("Invalid weekday: {}", day));
    }

    Ok(())
}
