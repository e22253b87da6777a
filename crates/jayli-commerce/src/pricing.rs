//! Pricing engine.
//!
//! Prices are pure functions of the current field values and are recomputed on
//! every read. Nothing here caches a total.

use crate::builder::CustomConfiguration;
use crate::catalog::CatalogItem;
use crate::error::CommerceError;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Shop-wide pricing inputs.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PricingRules {
    /// Base rate for custom cakes before option modifiers.
    pub base_price_per_kg: Money,
    /// Flat delivery fee added once per order.
    pub delivery_fee: Money,
}

impl PricingRules {
    pub const DEFAULT_BASE_PRICE_PER_KG: i64 = 2000;
    pub const DEFAULT_DELIVERY_FEE: i64 = 300;

    pub fn new(base_price_per_kg: Money, delivery_fee: Money) -> Self {
        Self {
            base_price_per_kg,
            delivery_fee,
        }
    }

    pub fn currency(&self) -> Currency {
        self.base_price_per_kg.currency
    }

    /// Per-kilogram rate for a configuration: base plus the three modifiers.
    pub fn rate_per_kg(&self, config: &CustomConfiguration) -> Result<Money, CommerceError> {
        let parts = [
            self.base_price_per_kg,
            config.flavor.price_modifier_per_kg,
            config.filling.price_modifier_per_kg,
            config.frosting.price_modifier_per_kg,
        ];
        Money::try_sum(parts.iter(), self.currency()).ok_or(CommerceError::Overflow)
    }
}

impl Default for PricingRules {
    fn default() -> Self {
        Self {
            base_price_per_kg: Money::kes(Self::DEFAULT_BASE_PRICE_PER_KG),
            delivery_fee: Money::kes(Self::DEFAULT_DELIVERY_FEE),
        }
    }
}

/// Where a custom cake's price comes from.
///
/// Each contribution is already multiplied by the weight, so the four parts
/// always sum to `total`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PriceBreakdown {
    pub base: Money,
    pub flavor: Money,
    pub filling: Money,
    pub frosting: Money,
    pub total: Money,
}

impl PriceBreakdown {
    /// Total of the option surcharges, excluding the base rate.
    pub fn surcharges(&self) -> Money {
        Money::new(
            self.flavor.amount_cents + self.filling.amount_cents + self.frosting.amount_cents,
            self.total.currency,
        )
    }
}

/// Price of `quantity` one-kilogram units of a catalog cake.
pub fn price_of(item: &CatalogItem, quantity: i64) -> Result<Money, CommerceError> {
    item.unit_price
        .try_multiply(quantity)
        .ok_or(CommerceError::Overflow)
}

/// Price of a custom cake: `(base + flavor + filling + frosting) × weight`.
pub fn price_of_configuration(
    rules: &PricingRules,
    config: &CustomConfiguration,
) -> Result<Money, CommerceError> {
    let rate = rules.rate_per_kg(config)?;
    config.weight.scale(&rate).ok_or(CommerceError::Overflow)
}

/// Itemized price of a custom cake.
pub fn breakdown(
    rules: &PricingRules,
    config: &CustomConfiguration,
) -> Result<PriceBreakdown, CommerceError> {
    let scale = |per_kg: &Money| config.weight.scale(per_kg).ok_or(CommerceError::Overflow);

    let base = scale(&rules.base_price_per_kg)?;
    let flavor = scale(&config.flavor.price_modifier_per_kg)?;
    let filling = scale(&config.filling.price_modifier_per_kg)?;
    let frosting = scale(&config.frosting.price_modifier_per_kg)?;
    let total = price_of_configuration(rules, config)?;

    Ok(PriceBreakdown {
        base,
        flavor,
        filling,
        frosting,
        total,
    })
}
