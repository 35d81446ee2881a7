use chrono::{NaiveDate, Utc};
use csv::{ReaderBuilder, StringRecord, Trim};
use serde::Serialize;

use crate::error::Result;
use crate::models::{House, PlayerDraft, PlayerStatus};

/// One usable row from an uploaded roster.
#[derive(Debug, Clone)]
pub struct RosterRow {
    /// Blank ids create a new player.
    pub id: Option<u32>,
    pub draft: PlayerDraft,
}

#[derive(Debug, Clone, Default)]
pub struct ParsedRoster {
    pub rows: Vec<RosterRow>,
    /// Human-readable reasons for rows that were dropped.
    pub skipped: Vec<String>,
}

/// Result of applying an import to the store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportSummary {
    pub created: usize,
    pub updated: usize,
    pub skipped: Vec<String>,
}

/// Parses a number, returning 0 if empty or invalid
fn parse_number(value: &str) -> u32 {
    value.trim().parse().unwrap_or(0)
}

/// Finds a column by header name, ignoring case and separators
fn column(headers: &StringRecord, name: &str) -> Option<usize> {
    let wanted = normalize(name);
    headers.iter().position(|h| normalize(h) == wanted)
}

fn normalize(header: &str) -> String {
    header
        .chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Parses an uploaded roster CSV
///
/// The header row decides column positions, so columns may appear in any
/// order. `firstName`, `lastName` and `house` columns are required; rows
/// missing a first or last name, or naming an unknown house, are skipped.
pub fn parse_roster_csv(data: &[u8]) -> Result<ParsedRoster> {
    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_reader(data);

    let headers = reader.headers()?.clone();
    let col = |name: &str| column(&headers, name);

    let (first_name_col, last_name_col, house_col) =
        match (col("firstName"), col("lastName"), col("house")) {
            (Some(f), Some(l), Some(h)) => (f, l, h),
            _ => {
                return Err(crate::error::AppError::Validation(
                    "Roster CSV needs firstName, lastName and house columns".to_string(),
                ))
            }
        };
    let id_col = col("id");
    let position_col = col("position");
    let age_col = col("age");
    let nationality_col = col("nationality");
    let room_col = col("room");
    let contract_col = col("contractPeriod");
    let status_col = col("status");
    let phone_col = col("phoneNumber");
    let emergency_col = col("emergencyContact");
    let medical_col = col("medicalInfo");
    let notes_col = col("specialNotes");
    let join_col = col("joinDate");

    let mut parsed = ParsedRoster::default();
    let today = Utc::now().date_naive();

    for (index, result) in reader.records().enumerate() {
        let record = result?;
        // Header is line 1
        let line = index + 2;
        let get = |c: Option<usize>| -> String {
            c.and_then(|c| record.get(c)).unwrap_or("").to_string()
        };

        let first_name = get(Some(first_name_col));
        let last_name = get(Some(last_name_col));
        if first_name.is_empty() || last_name.is_empty() {
            parsed
                .skipped
                .push(format!("line {}: first and last name are required", line));
            continue;
        }

        let house = match get(Some(house_col)).parse::<House>() {
            Ok(house) => house,
            Err(e) => {
                parsed.skipped.push(format!("line {}: {}", line, e));
                continue;
            }
        };

        let id = get(id_col).parse::<u32>().ok();
        let age = parse_number(&get(age_col)).min(u8::MAX as u32) as u8;
        let status = PlayerStatus::parse(&get(status_col)).unwrap_or(PlayerStatus::Active);
        let join_date = NaiveDate::parse_from_str(&get(join_col), "%Y-%m-%d").unwrap_or(today);

        parsed.rows.push(RosterRow {
            id,
            draft: PlayerDraft {
                first_name,
                last_name,
                position: get(position_col),
                age,
                nationality: get(nationality_col),
                house,
                room: get(room_col),
                contract_period: get(contract_col),
                status,
                phone_number: get(phone_col),
                emergency_contact: get(emergency_col),
                medical_info: get(medical_col),
                special_notes: get(notes_col),
                join_date,
            },
        });
    }

    Ok(parsed)
}
