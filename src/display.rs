use crate::models::{Chore, House, Player};

/// Formats a player name with house tag, e.g. `[W1] Max Müller`
pub fn format_player_name(player: &Player) -> String {
    format!("[{}] {} {}", house_tag(player.house), player.first_name, player.last_name)
}

/// Short tag used in chat and chore lists
pub fn house_tag(house: House) -> &'static str {
    match house {
        House::Widdersdorf1 => "W1",
        House::Widdersdorf2 => "W2",
        House::Widdersdorf3 => "W3",
    }
}

/// Formats a cent amount as euros, e.g. `3499` -> `€34.99`
pub fn format_euros(cents: u32) -> String {
    format!("€{}.{:02}", cents / 100, cents % 100)
}

/// Names of the players a chore is assigned to, in assignment order.
/// Ids with no matching player are shown as `#<id>`.
pub fn format_assignees(chore: &Chore, players: &[Player]) -> Vec<String> {
    chore
        .assigned_players
        .iter()
        .map(|id| {
            players
                .iter()
                .find(|p| p.id == *id)
                .map(format_player_name)
                .unwrap_or_else(|| format!("#{}", id))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_euros() {
        assert_eq!(format_euros(0), "€0.00");
        assert_eq!(format_euros(5), "€0.05");
        assert_eq!(format_euros(3499), "€34.99");
        assert_eq!(format_euros(3500), "€35.00");
    }

    #[test]
    fn test_house_tags() {
        assert_eq!(house_tag(House::Widdersdorf3), "W3");
    }
}
