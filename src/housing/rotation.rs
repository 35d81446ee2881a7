//! Chore rotation within one house.
//!
//! Open chores are dealt out to the house's available players in deadline
//! order, wrapping around the player list. `House` assignments always go to
//! everyone; `Group` chores keep their previous group size.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::models::{AssignmentType, Chore, House, Player};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RotationStrategy {
    /// Players in last-name order.
    #[default]
    RoundRobin,
    /// Players in random order.
    Shuffle,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChoreAssignment {
    pub chore_id: u32,
    pub assigned_players: Vec<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RotationSummary {
    pub house: House,
    pub players: usize,
    pub assignments: Vec<ChoreAssignment>,
}

/// Reassigns the open chores of `house` in place.
pub fn rotate_chores<R: Rng + ?Sized>(
    chores: &mut [Chore],
    players: &[Player],
    house: House,
    strategy: RotationStrategy,
    rng: &mut R,
) -> Result<RotationSummary, String> {
    let mut roster: Vec<&Player> = players
        .iter()
        .filter(|p| p.house == house && p.is_available())
        .collect();

    if roster.is_empty() {
        return Err(format!("No available players in {}", house));
    }

    roster.sort_by(|a, b| {
        a.last_name
            .cmp(&b.last_name)
            .then_with(|| a.first_name.cmp(&b.first_name))
            .then_with(|| a.id.cmp(&b.id))
    });
    if strategy == RotationStrategy::Shuffle {
        roster.shuffle(rng);
    }
    let roster_ids: Vec<u32> = roster.iter().map(|p| p.id).collect();

    // Earliest deadline first, most urgent first on ties
    let mut open: Vec<&mut Chore> = chores
        .iter_mut()
        .filter(|c| c.house == house && c.is_open())
        .collect();
    open.sort_by(|a, b| {
        a.deadline
            .cmp(&b.deadline)
            .then_with(|| b.priority.cmp(&a.priority))
            .then_with(|| a.id.cmp(&b.id))
    });

    let mut next = 0usize;
    let mut assignments = Vec::with_capacity(open.len());
    for chore in open {
        let assigned = match chore.assignment_type {
            AssignmentType::House => roster_ids.clone(),
            AssignmentType::Individual => {
                let id = roster_ids[next % roster_ids.len()];
                next += 1;
                vec![id]
            }
            AssignmentType::Group => {
                let size = chore.assigned_players.len().clamp(1, roster_ids.len());
                let group: Vec<u32> = (0..size)
                    .map(|i| roster_ids[(next + i) % roster_ids.len()])
                    .collect();
                next += size;
                group
            }
        };
        chore.assigned_players = assigned.clone();
        assignments.push(ChoreAssignment {
            chore_id: chore.id,
            assigned_players: assigned,
        });
    }

    Ok(RotationSummary {
        house,
        players: roster_ids.len(),
        assignments,
    })
}
