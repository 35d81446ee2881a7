//! Required-field checks for everything the dashboard forms submit.
//!
//! Each validator returns the first problem found as a message suitable for
//! showing to the user.

pub mod chore;
pub mod event;
pub mod message;
pub mod player;

pub use chore::validate_chore;
pub use event::validate_event;
pub use message::validate_message;
pub use player::validate_player;
