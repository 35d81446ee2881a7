use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::House;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChorePriority {
    Low,
    Medium,
    High,
    Urgent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssignmentType {
    /// A single named player.
    Individual,
    /// A hand-picked set of players.
    Group,
    /// Everyone living in the house.
    House,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChoreStatus {
    Pending,
    InProgress,
    Completed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chore {
    pub id: u32,
    pub title: String,
    pub priority: ChorePriority,
    pub house: House,
    pub assignment_type: AssignmentType,
    /// Player ids.
    pub assigned_players: Vec<u32>,
    pub deadline: NaiveDate,
    pub points: u32,
    pub description: String,
    pub status: ChoreStatus,
}

impl Chore {
    pub fn from_draft(id: u32, draft: ChoreDraft) -> Self {
        Self {
            id,
            title: draft.title.trim().to_string(),
            priority: draft.priority,
            house: draft.house,
            assignment_type: draft.assignment_type,
            assigned_players: draft.assigned_players,
            deadline: draft.deadline,
            points: draft.points,
            description: draft.description,
            status: ChoreStatus::Pending,
        }
    }

    pub fn is_open(&self) -> bool {
        self.status != ChoreStatus::Completed
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChoreDraft {
    pub title: String,
    pub priority: ChorePriority,
    pub house: House,
    pub assignment_type: AssignmentType,
    #[serde(default)]
    pub assigned_players: Vec<u32>,
    pub deadline: NaiveDate,
    pub points: u32,
    #[serde(default)]
    pub description: String,
}
