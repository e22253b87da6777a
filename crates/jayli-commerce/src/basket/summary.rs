//! Basket pricing summary.

use crate::ids::LineItemId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Totals for the whole basket.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BasketSummary {
    /// Per-line pricing, in basket order.
    pub lines: Vec<LinePricing>,
    /// Sum of line totals.
    pub subtotal: Money,
    /// Flat delivery fee. Zero for an empty basket.
    pub delivery_fee: Money,
    /// subtotal + delivery_fee.
    pub grand_total: Money,
}

impl BasketSummary {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of quantities across lines.
    pub fn item_count(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }
}

/// Pricing for a single basket line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LinePricing {
    pub line_item_id: LineItemId,
    pub name: String,
    pub unit_price: Money,
    pub quantity: i64,
    pub total: Money,
}
