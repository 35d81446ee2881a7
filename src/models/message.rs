use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A chat message posted to a channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: u32,
    pub channel: String,
    pub sender: String,
    pub body: String,
    pub sent_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageDraft {
    #[serde(default = "default_channel")]
    pub channel: String,
    pub body: String,
}

fn default_channel() -> String {
    "general".to_string()
}
