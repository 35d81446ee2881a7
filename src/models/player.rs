use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::House;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayerStatus {
    Active,
    Injured,
    OnTrial,
    Inactive,
}

impl PlayerStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlayerStatus::Active => "active",
            PlayerStatus::Injured => "injured",
            PlayerStatus::OnTrial => "on_trial",
            PlayerStatus::Inactive => "inactive",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().replace(' ', "_").as_str() {
            "active" => Some(PlayerStatus::Active),
            "injured" => Some(PlayerStatus::Injured),
            "on_trial" | "trial" => Some(PlayerStatus::OnTrial),
            "inactive" => Some(PlayerStatus::Inactive),
            _ => None,
        }
    }
}

/// A roster entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: u32,
    pub first_name: String,
    pub last_name: String,
    pub position: String,
    pub age: u8,
    pub nationality: String,
    pub house: House,
    pub room: String,
    pub contract_period: String,
    pub status: PlayerStatus,
    pub phone_number: String,
    pub emergency_contact: String,
    pub medical_info: String,
    pub special_notes: String,
    pub join_date: NaiveDate,
}

impl Player {
    pub fn from_draft(id: u32, draft: PlayerDraft) -> Self {
        Self {
            id,
            first_name: draft.first_name.trim().to_string(),
            last_name: draft.last_name.trim().to_string(),
            position: draft.position,
            age: draft.age,
            nationality: draft.nationality,
            house: draft.house,
            room: draft.room,
            contract_period: draft.contract_period,
            status: draft.status,
            phone_number: draft.phone_number,
            emergency_contact: draft.emergency_contact,
            medical_info: draft.medical_info,
            special_notes: draft.special_notes,
            join_date: draft.join_date,
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self.status, PlayerStatus::Active | PlayerStatus::OnTrial)
    }
}

/// Player form as submitted by the page; everything but the id.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerDraft {
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub position: String,
    pub age: u8,
    #[serde(default)]
    pub nationality: String,
    pub house: House,
    #[serde(default)]
    pub room: String,
    #[serde(default)]
    pub contract_period: String,
    pub status: PlayerStatus,
    pub phone_number: String,
    #[serde(default)]
    pub emergency_contact: String,
    #[serde(default)]
    pub medical_info: String,
    #[serde(default)]
    pub special_notes: String,
    pub join_date: NaiveDate,
}
