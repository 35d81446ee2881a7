pub mod rotation;
pub mod summary;

pub use rotation::{rotate_chores, RotationStrategy, RotationSummary};
pub use summary::{summarize_houses, HouseSummary};
