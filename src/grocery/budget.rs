//! Weekly grocery budget checks for the food-order form.
//!
//! Amounts are integer euro cents. An order above the cap cannot be
//! submitted; an order above 80% of the cap is flagged but still allowed.

use serde::{Deserialize, Serialize};

use crate::display::format_euros;
use crate::models::{GroceryItem, OrderLine};

/// Share of the cap, in percent, above which the form shows a warning.
const WARNING_THRESHOLD_PERCENT: u64 = 80;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetLevel {
    Ok,
    Warning,
    Exceeded,
}

/// Outcome of checking an order total against the cap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetCheck {
    pub total_cents: u32,
    pub cap_cents: u32,
    /// Negative once the cap is exceeded.
    pub remaining_cents: i64,
    pub level: BudgetLevel,
    /// Mirrors the submit button's enabled state.
    pub can_submit: bool,
    pub message: Option<String>,
}

/// Classifies `total_cents` against `cap_cents`.
pub fn evaluate(total_cents: u32, cap_cents: u32) -> BudgetCheck {
    let total = total_cents as u64;
    let cap = cap_cents as u64;

    let level = if total > cap {
        BudgetLevel::Exceeded
    } else if total * 100 > cap * WARNING_THRESHOLD_PERCENT {
        BudgetLevel::Warning
    } else {
        BudgetLevel::Ok
    };

    let message = match level {
        BudgetLevel::Ok => None,
        BudgetLevel::Warning => Some(format!(
            "Approaching budget limit: {} of {} used",
            format_euros(total_cents),
            format_euros(cap_cents)
        )),
        BudgetLevel::Exceeded => Some(format!(
            "Budget exceeded by {}. Remove items to submit.",
            format_euros(total_cents - cap_cents)
        )),
    };

    BudgetCheck {
        total_cents,
        cap_cents,
        remaining_cents: cap as i64 - total as i64,
        level,
        can_submit: level != BudgetLevel::Exceeded,
        message,
    }
}

/// Sums `price x quantity` over the checked lines.
pub fn order_total(lines: &[OrderLine], catalog: &[GroceryItem]) -> Result<u32, String> {
    if lines.is_empty() {
        return Err("Select at least one item".to_string());
    }

    let mut total: u32 = 0;
    for line in lines {
        if line.quantity == 0 {
            return Err(format!("Quantity for item {} must be at least 1", line.item_id));
        }
        let item = catalog
            .iter()
            .find(|item| item.id == line.item_id)
            .ok_or_else(|| format!("Unknown grocery item: {}", line.item_id))?;
        let line_total = item
            .price_cents
            .checked_mul(line.quantity)
            .ok_or_else(|| format!("Quantity for {} is too large", item.name))?;
        total = total
            .checked_add(line_total)
            .ok_or_else(|| "Order total is too large".to_string())?;
    }
    Ok(total)
}

/// Totals the order and checks it against the cap.
pub fn check_order(
    lines: &[OrderLine],
    catalog: &[GroceryItem],
    cap_cents: u32,
) -> Result<BudgetCheck, String> {
    let total = order_total(lines, catalog)?;
    Ok(evaluate(total, cap_cents))
}
