pub mod occurrences;
pub mod recurrence;
pub mod time;

pub use occurrences::{event_occurrences, occurrences_between, Occurrence};
pub use time::parse_time_to_minutes;
