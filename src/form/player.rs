use crate::models::Player;

pub const MIN_AGE: u8 = 14;
pub const MAX_AGE: u8 = 40;

/// Validates a player record
pub fn validate_player(player: &Player) -> Result<(), String> {
    if player.first_name.trim().is_empty() {
        return Err("First name is required".to_string());
    }
    if player.last_name.trim().is_empty() {
        return Err("Last name is required".to_string());
    }

    if player.age < MIN_AGE || player.age > MAX_AGE {
        return Err(format!("Age must be between {} and {}", MIN_AGE, MAX_AGE));
    }

    let phone = player.phone_number.trim();
    if phone.is_empty() {
        return Err("Phone number is required".to_string());
    }
    if !phone
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | ' ' | '-' | '(' | ')' | '/'))
    {
        return Err("Phone number may only contain digits, spaces and + - ( ) /".to_string());
    }

    Ok(())
}
