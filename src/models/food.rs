use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::House;

/// An entry in the grocery catalogue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroceryItem {
    pub id: u32,
    pub name: String,
    pub category: String,
    pub price_cents: u32,
}

/// A checked item on the order form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    pub item_id: u32,
    pub quantity: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodOrder {
    pub id: u32,
    pub player_id: u32,
    pub house: House,
    pub delivery_date: NaiveDate,
    pub lines: Vec<OrderLine>,
    pub total_cents: u32,
    pub submitted_at: DateTime<Utc>,
}

/// Order form as submitted by the page.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDraft {
    pub player_id: u32,
    pub delivery_date: NaiveDate,
    pub lines: Vec<OrderLine>,
}
