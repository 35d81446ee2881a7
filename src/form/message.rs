pub const MAX_MESSAGE_LENGTH: usize = 2000;

/// Validates a chat message body and channel name
pub fn validate_message(channel: &str, body: &str) -> Result<(), String> {
    if channel.trim().is_empty() {
        return Err("Channel is required".to_string());
    }
    if body.trim().is_empty() {
        return Err("Message cannot be empty".to_string());
    }
    if body.chars().count() > MAX_MESSAGE_LENGTH {
        return Err(format!(
            "Message is too long (max {} characters)",
            MAX_MESSAGE_LENGTH
        ));
    }
    Ok(())
}
