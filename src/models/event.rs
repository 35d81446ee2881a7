use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    Training,
    Match,
    Meeting,
    Medical,
    Social,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Attendance {
    Mandatory,
    Optional,
    /// Only the players listed in `selected_players`.
    Selected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecurrenceType {
    #[default]
    None,
    Daily,
    Weekly,
    Monthly,
    Custom,
}

/// How a single event repeats.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recurrence {
    #[serde(rename = "type", default)]
    pub kind: RecurrenceType,
    #[serde(default = "default_interval")]
    pub interval: u32,
    /// Inclusive.
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    /// Weekday numbers, 0 = Sunday through 6 = Saturday.
    #[serde(default)]
    pub selected_days: Vec<u8>,
}

fn default_interval() -> u32 {
    1
}

impl Default for Recurrence {
    fn default() -> Self {
        Self {
            kind: RecurrenceType::None,
            interval: 1,
            end_date: None,
            selected_days: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    pub id: u32,
    pub title: String,
    #[serde(rename = "type")]
    pub event_type: EventType,
    pub date: NaiveDate,
    /// `HH:MM`.
    pub time: String,
    /// Minutes.
    pub duration: u32,
    pub location: String,
    pub attendance: Attendance,
    pub selected_players: Vec<u32>,
    pub recurrence: Recurrence,
}

impl CalendarEvent {
    pub fn from_draft(id: u32, draft: EventDraft) -> Self {
        Self {
            id,
            title: draft.title.trim().to_string(),
            event_type: draft.event_type,
            date: draft.date,
            time: draft.time.trim().to_string(),
            duration: draft.duration,
            location: draft.location,
            attendance: draft.attendance,
            selected_players: draft.selected_players,
            recurrence: draft.recurrence,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDraft {
    pub title: String,
    #[serde(rename = "type")]
    pub event_type: EventType,
    pub date: NaiveDate,
    pub time: String,
    pub duration: u32,
    #[serde(default)]
    pub location: String,
    pub attendance: Attendance,
    #[serde(default)]
    pub selected_players: Vec<u32>,
    #[serde(default)]
    pub recurrence: Recurrence,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recurrence_defaults_when_missing() {
        let draft: EventDraft = serde_json::from_str(
            r#"{"title":"Recovery","type":"training","date":"2025-03-03",
                "time":"09:00","duration":60,"attendance":"mandatory"}"#,
        )
        .unwrap();
        assert_eq!(draft.recurrence, Recurrence::default());
        assert_eq!(draft.recurrence.interval, 1);
    }

    #[test]
    fn test_recurrence_uses_type_key() {
        let rule: Recurrence = serde_json::from_str(
            r#"{"type":"weekly","interval":2,"endDate":"2025-06-30","selectedDays":[1,3]}"#,
        )
        .unwrap();
        assert_eq!(rule.kind, RecurrenceType::Weekly);
        assert_eq!(rule.interval, 2);
        assert_eq!(rule.selected_days, vec![1, 3]);
        assert_eq!(rule.end_date, NaiveDate::from_ymd_opt(2025, 6, 30));
    }
}
