pub mod chore;
pub mod event;
pub mod food;
pub mod house;
pub mod message;
pub mod player;

pub use chore::{AssignmentType, Chore, ChoreDraft, ChorePriority, ChoreStatus};
pub use event::{Attendance, CalendarEvent, EventDraft, EventType, Recurrence, RecurrenceType};
pub use food::{FoodOrder, GroceryItem, OrderDraft, OrderLine};
pub use house::House;
pub use message::{Message, MessageDraft};
pub use player::{Player, PlayerDraft, PlayerStatus};
