use serde::Serialize;

use crate::models::{Chore, ChoreStatus, House, Player};

/// Per-house numbers shown on the housing panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HouseSummary {
    pub house: House,
    pub slug: &'static str,
    pub players: usize,
    pub pending_chores: usize,
    pub in_progress_chores: usize,
    pub completed_chores: usize,
    /// Points earned from completed chores.
    pub points_earned: u32,
}

pub fn summarize_houses(players: &[Player], chores: &[Chore]) -> Vec<HouseSummary> {
    House::ALL
        .into_iter()
        .map(|house| {
            let house_chores = || chores.iter().filter(move |c| c.house == house);
            let count = |status: ChoreStatus| house_chores().filter(|c| c.status == status).count();

            HouseSummary {
                house,
                slug: house.slug(),
                players: players.iter().filter(|p| p.house == house).count(),
                pending_chores: count(ChoreStatus::Pending),
                in_progress_chores: count(ChoreStatus::InProgress),
                completed_chores: count(ChoreStatus::Completed),
                points_earned: house_chores()
                    .filter(|c| c.status == ChoreStatus::Completed)
                    .map(|c| c.points)
                    .sum(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::seed;

    #[test]
    fn test_summaries_cover_every_house() {
        let players = seed::players();
        let mut chores = seed::chores();
        chores[0].status = ChoreStatus::Completed;
        let completed_house = chores[0].house;
        let completed_points = chores[0].points;

        let summaries = summarize_houses(&players, &chores);

        assert_eq!(summaries.len(), 3);
        let total_players: usize = summaries.iter().map(|s| s.players).sum();
        assert_eq!(total_players, players.len());
        let total_chores: usize = summaries
            .iter()
            .map(|s| s.pending_chores + s.in_progress_chores + s.completed_chores)
            .sum();
        assert_eq!(total_chores, chores.len());

        let summary = summaries.iter().find(|s| s.house == completed_house).unwrap();
        assert!(summary.completed_chores >= 1);
        assert!(summary.points_earned >= completed_points);
    }
}
