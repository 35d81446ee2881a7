use csv::WriterBuilder;

use super::ROSTER_HEADER;
use crate::error::{AppError, Result};
use crate::models::Player;

/// Writes the roster as CSV, one row per player, in `ROSTER_HEADER` order
pub fn export_roster_csv(players: &[Player]) -> Result<Vec<u8>> {
    let mut wtr = WriterBuilder::new().has_headers(false).from_writer(Vec::new());

    wtr.write_record(ROSTER_HEADER)?;

    for player in players {
        let id = player.id.to_string();
        let age = player.age.to_string();
        let join_date = player.join_date.format("%Y-%m-%d").to_string();

        wtr.write_record([
            id.as_str(),
            player.first_name.as_str(),
            player.last_name.as_str(),
            player.position.as_str(),
            age.as_str(),
            player.nationality.as_str(),
            player.house.label(),
            player.room.as_str(),
            player.contract_period.as_str(),
            player.status.as_str(),
            player.phone_number.as_str(),
            player.emergency_contact.as_str(),
            player.medical_info.as_str(),
            player.special_notes.as_str(),
            join_date.as_str(),
        ])?;
    }

    wtr.flush().map_err(csv::Error::from)?;
    wtr.into_inner()
        .map_err(|e| AppError::Csv(csv::Error::from(e.into_error())))
}
