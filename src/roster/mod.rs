//! Roster CSV import and export for the admin panel.

pub mod export;
pub mod import;

pub use export::export_roster_csv;
pub use import::{parse_roster_csv, ImportSummary};

/// Column order written by the exporter and expected by the importer.
pub const ROSTER_HEADER: [&str; 15] = [
    "id",
    "firstName",
    "lastName",
    "position",
    "age",
    "nationality",
    "house",
    "room",
    "contractPeriod",
    "status",
    "phoneNumber",
    "emergencyContact",
    "medicalInfo",
    "specialNotes",
    "joinDate",
];
