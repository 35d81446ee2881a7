use chrono::NaiveDate;
use serde::Serialize;

use super::recurrence::Occurrences;
use super::time::{minutes_to_time_string, parse_time_to_minutes};
use crate::models::{CalendarEvent, EventType};

/// One concrete date of a (possibly recurring) event.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Occurrence {
    pub event_id: u32,
    pub title: String,
    #[serde(rename = "type")]
    pub event_type: EventType,
    pub date: NaiveDate,
    pub time: String,
    pub end_time: String,
    pub location: String,
}

impl Occurrence {
    fn new(event: &CalendarEvent, date: NaiveDate) -> Self {
        let end_time = parse_time_to_minutes(&event.time)
            .map(|start| minutes_to_time_string(start + event.duration))
            .unwrap_or_default();
        Self {
            event_id: event.id,
            title: event.title.clone(),
            event_type: event.event_type,
            date,
            time: event.time.clone(),
            end_time,
            location: event.location.clone(),
        }
    }
}

/// Every date of a single event.
pub fn event_occurrences(event: &CalendarEvent) -> Vec<Occurrence> {
    Occurrences::new(event.date, &event.recurrence)
        .map(|date| Occurrence::new(event, date))
        .collect()
}

/// All occurrences of `events` within `from..=to`, ordered by date then time.
pub fn occurrences_between(
    events: &[CalendarEvent],
    from: NaiveDate,
    to: NaiveDate,
) -> Vec<Occurrence> {
    let mut result: Vec<Occurrence> = events
        .iter()
        .flat_map(|event| {
            Occurrences::new(event.date, &event.recurrence)
                .take_while(move |date| *date <= to)
                .filter(move |date| *date >= from)
                .map(move |date| Occurrence::new(event, date))
        })
        .collect();

    result.sort_by(|a, b| {
        a.date
            .cmp(&b.date)
            .then_with(|| parse_time_to_minutes(&a.time).cmp(&parse_time_to_minutes(&b.time)))
            .then_with(|| a.event_id.cmp(&b.event_id))
    });
    result
}
