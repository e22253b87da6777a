//! The customer's basket.
//!
//! Standard lines are keyed by product id, so adding the same cake twice
//! increments one line. Custom cakes always get a fresh line.

mod line;
mod summary;

pub use line::{BasketLine, LineKind};
pub use summary::{BasketSummary, LinePricing};

use crate::builder::CustomConfiguration;
use crate::catalog::CatalogItem;
use crate::error::CommerceError;
use crate::ids::LineItemId;
use crate::money::{Currency, Money};
use crate::pricing::PricingRules;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Maximum quantity allowed per line.
pub const MAX_QUANTITY_PER_LINE: i64 = 99;

/// An in-session basket.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Basket {
    lines: Vec<BasketLine>,
}

impl Basket {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of a catalog cake, merging into its existing line.
    pub fn add_product(&mut self, item: &CatalogItem) -> Result<LineItemId, CommerceError> {
        let id = LineItemId::for_product(&item.id);

        if let Some(existing) = self.lines.iter_mut().find(|l| l.id == id) {
            let quantity = existing
                .quantity
                .checked_add(1)
                .ok_or(CommerceError::Overflow)?;
            if quantity > MAX_QUANTITY_PER_LINE {
                return Err(CommerceError::QuantityExceedsLimit(
                    quantity,
                    MAX_QUANTITY_PER_LINE,
                ));
            }
            existing.quantity = quantity;
            debug!(line = %id, quantity, "incremented basket line");
            return Ok(id);
        }

        self.lines.push(BasketLine::standard(item));
        debug!(line = %id, product = %item.name, "added basket line");
        Ok(id)
    }

    /// Add a catalog cake only if it is not already in the basket.
    ///
    /// Returns the line id either way, for jumping straight to checkout.
    pub fn buy_now(&mut self, item: &CatalogItem) -> Result<LineItemId, CommerceError> {
        let id = LineItemId::for_product(&item.id);
        if self.contains(&id) {
            return Ok(id);
        }
        self.add_product(item)
    }

    /// Append a committed custom cake with its engine-computed total.
    pub(crate) fn add_custom(&mut self, configuration: CustomConfiguration, total: Money) -> LineItemId {
        let line = BasketLine::custom(configuration, total);
        let id = line.id.clone();
        debug!(line = %id, total = %total, "added custom cake");
        self.lines.push(line);
        id
    }

    /// Change a line's quantity by `delta`, never dropping below 1.
    ///
    /// Custom lines stay at quantity 1. Returns the resulting quantity.
    pub fn update_quantity(&mut self, id: &LineItemId, delta: i64) -> Result<i64, CommerceError> {
        let line = self
            .lines
            .iter_mut()
            .find(|l| &l.id == id)
            .ok_or_else(|| CommerceError::ItemNotInBasket(id.to_string()))?;

        if line.is_custom() {
            return Ok(line.quantity);
        }

        let quantity = line.quantity.saturating_add(delta).max(1);
        if quantity > MAX_QUANTITY_PER_LINE {
            return Err(CommerceError::QuantityExceedsLimit(
                quantity,
                MAX_QUANTITY_PER_LINE,
            ));
        }
        line.quantity = quantity;
        debug!(line = %id, quantity, "updated basket quantity");
        Ok(quantity)
    }

    /// Remove a line. Returns whether anything was removed.
    pub fn remove(&mut self, id: &LineItemId) -> bool {
        let len_before = self.lines.len();
        self.lines.retain(|l| &l.id != id);
        let removed = self.lines.len() < len_before;
        if removed {
            debug!(line = %id, "removed basket line");
        }
        removed
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn lines(&self) -> &[BasketLine] {
        &self.lines
    }

    pub fn get(&self, id: &LineItemId) -> Option<&BasketLine> {
        self.lines.iter().find(|l| &l.id == id)
    }

    pub fn contains(&self, id: &LineItemId) -> bool {
        self.get(id).is_some()
    }

    /// Number of lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of quantities across lines (the header badge count).
    pub fn item_count(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Sum of line totals, excluding delivery.
    pub fn subtotal(&self, currency: Currency) -> Result<Money, CommerceError> {
        let totals = self
            .lines
            .iter()
            .map(|l| l.total())
            .collect::<Result<Vec<_>, _>>()?;
        sum_in(&totals, currency)
    }

    /// Price every line and add the delivery fee once.
    pub fn summary(&self, rules: &PricingRules) -> Result<BasketSummary, CommerceError> {
        let currency = rules.currency();

        let lines = self
            .lines
            .iter()
            .map(|l| {
                Ok(LinePricing {
                    line_item_id: l.id.clone(),
                    name: l.name.clone(),
                    unit_price: l.unit_price(),
                    quantity: l.quantity,
                    total: l.total()?,
                })
            })
            .collect::<Result<Vec<_>, CommerceError>>()?;

        let totals: Vec<Money> = lines.iter().map(|l| l.total).collect();
        let subtotal = sum_in(&totals, currency)?;

        let delivery_fee = if lines.is_empty() {
            Money::zero(currency)
        } else {
            rules.delivery_fee
        };

        let grand_total = subtotal
            .try_add(&delivery_fee)
            .ok_or(CommerceError::Overflow)?;

        Ok(BasketSummary {
            lines,
            subtotal,
            delivery_fee,
            grand_total,
        })
    }
}

fn sum_in(amounts: &[Money], currency: Currency) -> Result<Money, CommerceError> {
    Money::try_sum(amounts.iter(), currency).ok_or(CommerceError::Overflow)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::BuilderMenu;
    use crate::catalog::Catalog;
    use crate::ids::ProductId;

    fn cake(catalog: &Catalog, id: &str) -> CatalogItem {
        catalog.get(&ProductId::new(id)).unwrap().clone()
    }

    #[test]
    fn test_same_product_merges() {
        let catalog = Catalog::standard();
        let mut basket = Basket::new();
        let black_forest = cake(&catalog, "1");

        let first = basket.add_product(&black_forest).unwrap();
        let second = basket.add_product(&black_forest).unwrap();

        assert_eq!(first, second);
        assert_eq!(basket.len(), 1);
        assert_eq!(basket.lines()[0].quantity, 2);
        assert_eq!(basket.lines()[0].total().unwrap(), Money::kes(5000));
    }

    #[test]
    fn test_buy_now_does_not_increment() {
        let catalog = Catalog::standard();
        let mut basket = Basket::new();
        let unicorn = cake(&catalog, "7");

        basket.add_product(&unicorn).unwrap();
        basket.buy_now(&unicorn).unwrap();
        assert_eq!(basket.item_count(), 1);

        let funfetti = cake(&catalog, "6");
        basket.buy_now(&funfetti).unwrap();
        assert_eq!(basket.len(), 2);
    }

    #[test]
    fn test_update_quantity_floors_at_one() {
        let catalog = Catalog::standard();
        let mut basket = Basket::new();
        let id = basket.add_product(&cake(&catalog, "8")).unwrap();

        assert_eq!(basket.update_quantity(&id, 2).unwrap(), 3);
        assert_eq!(basket.update_quantity(&id, -1).unwrap(), 2);
        assert_eq!(basket.update_quantity(&id, -10).unwrap(), 1);
    }

    #[test]
    fn test_update_quantity_limit() {
        let catalog = Catalog::standard();
        let mut basket = Basket::new();
        let id = basket.add_product(&cake(&catalog, "8")).unwrap();

        assert_eq!(
            basket.update_quantity(&id, 99),
            Err(CommerceError::QuantityExceedsLimit(100, MAX_QUANTITY_PER_LINE))
        );
        assert_eq!(basket.get(&id).unwrap().quantity, 1);
    }

    #[test]
    fn test_update_missing_line() {
        let mut basket = Basket::new();
        assert_eq!(
            basket.update_quantity(&LineItemId::new("nope"), 1),
            Err(CommerceError::ItemNotInBasket("nope".to_string()))
        );
    }

    #[test]
    fn test_custom_lines_never_merge() {
        let menu = BuilderMenu::standard();
        let config = CustomConfiguration::initial(&menu);
        let mut basket = Basket::new();

        let a = basket.add_custom(config.clone(), Money::kes(2000));
        let b = basket.add_custom(config, Money::kes(2000));

        assert_ne!(a, b);
        assert!(a.is_custom() && b.is_custom());
        assert_eq!(basket.len(), 2);
        assert_eq!(basket.update_quantity(&a, 3).unwrap(), 1);
        assert_eq!(basket.get(&a).unwrap().name, "Custom Classic Vanilla Cake");
    }

    #[test]
    fn test_summary_adds_delivery_once() {
        let catalog = Catalog::standard();
        let menu = BuilderMenu::standard();
        let rules = PricingRules::default();
        let mut basket = Basket::new();

        let id = basket.add_product(&cake(&catalog, "2")).unwrap();
        basket.update_quantity(&id, 1).unwrap();
        basket.add_custom(CustomConfiguration::initial(&menu), Money::kes(5000));

        let summary = basket.summary(&rules).unwrap();
        assert_eq!(summary.lines.len(), 2);
        assert_eq!(summary.lines[0].total, Money::kes(9000));
        assert_eq!(summary.subtotal, Money::kes(14000));
        assert_eq!(summary.delivery_fee, Money::kes(300));
        assert_eq!(summary.grand_total, Money::kes(14300));

        // Lines themselves never carry the fee.
        let line_sum: i64 = basket.lines().iter().map(|l| l.total().unwrap().amount_cents).sum();
        assert_eq!(line_sum, summary.subtotal.amount_cents);
    }

    #[test]
    fn test_empty_summary() {
        let summary = Basket::new().summary(&PricingRules::default()).unwrap();
        assert!(summary.is_empty());
        assert!(summary.grand_total.is_zero());
    }

    #[test]
    fn test_remove_and_clear() {
        let catalog = Catalog::standard();
        let mut basket = Basket::new();
        let id = basket.add_product(&cake(&catalog, "1")).unwrap();
        basket.add_product(&cake(&catalog, "9")).unwrap();

        assert!(basket.remove(&id));
        assert!(!basket.remove(&id));
        assert_eq!(basket.len(), 1);

        basket.clear();
        assert!(basket.is_empty());
    }
}
