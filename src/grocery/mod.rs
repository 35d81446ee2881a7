pub mod budget;
pub mod catalog;

pub use budget::{check_order, BudgetCheck};
pub use catalog::default_catalog;
