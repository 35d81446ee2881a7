use crate::models::{AssignmentType, Chore};

pub const MAX_POINTS: u32 = 100;

/// Validates a chore; `known_players` are the ids currently on the roster
pub fn validate_chore(chore: &Chore, known_players: &[u32]) -> Result<(), String> {
    if chore.title.trim().is_empty() {
        return Err("Chore title is required".to_string());
    }

    if chore.points > MAX_POINTS {
        return Err(format!("Points must be at most {}", MAX_POINTS));
    }

    match chore.assignment_type {
        AssignmentType::Individual if chore.assigned_players.len() != 1 => {
            return Err("Individual chores need exactly one assigned player".to_string());
        }
        AssignmentType::Group if chore.assigned_players.is_empty() => {
            return Err("Group chores need at least one assigned player".to_string());
        }
        _ => {}
    }

    if let Some(unknown) = chore
        .assigned_players
        .iter()
        .find(|id| !known_players.contains(id))
    {
        return Err(format!("Unknown player: {}", unknown));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::seed;

    fn known() -> Vec<u32> {
        seed::players().iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_seed_chores_are_valid() {
        for chore in seed::chores() {
            assert!(validate_chore(&chore, &known()).is_ok(), "{}", chore.title);
        }
    }

    #[test]
    fn test_title_and_points() {
        let mut chore = seed::chores()[0].clone();
        chore.title = String::new();
        assert!(validate_chore(&chore, &known()).is_err());

        let mut chore = seed::chores()[0].clone();
        chore.points = 101;
        assert!(validate_chore(&chore, &known()).is_err());
    }

    #[test]
    fn test_assignment_rules() {
        let mut chore = seed::chores()[0].clone();
        chore.assignment_type = AssignmentType::Individual;
        chore.assigned_players = vec![];
        assert!(validate_chore(&chore, &known()).is_err());

        chore.assignment_type = AssignmentType::Group;
        assert!(validate_chore(&chore, &known()).is_err());

        chore.assignment_type = AssignmentType::House;
        assert!(validate_chore(&chore, &known()).is_ok());

        chore.assigned_players = vec![999];
        assert_eq!(
            validate_chore(&chore, &known()).unwrap_err(),
            "Unknown player: 999"
        );
    }
}
