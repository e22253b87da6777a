//! Basket lines.

use crate::builder::CustomConfiguration;
use crate::catalog::{CatalogItem, CUSTOM_CAKE_IMAGE};
use crate::error::CommerceError;
use crate::ids::{LineItemId, ProductId};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// What a basket line holds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LineKind {
    /// A catalog cake, priced per 1 kg unit.
    Standard {
        product_id: ProductId,
        unit_price: Money,
    },
    /// A configured cake. The total was computed by the pricing engine when the
    /// configuration was committed and is not re-derived.
    Custom {
        configuration: CustomConfiguration,
        total: Money,
    },
}

/// A line in the basket.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BasketLine {
    pub id: LineItemId,
    /// Name shown to the customer (denormalized).
    pub name: String,
    pub description: String,
    pub image_url: String,
    /// Units of 1 kg for standard lines; always 1 for custom lines.
    pub quantity: i64,
    pub kind: LineKind,
}

impl BasketLine {
    pub(crate) fn standard(item: &CatalogItem) -> Self {
        Self {
            id: LineItemId::for_product(&item.id),
            name: item.name.clone(),
            description: item.description.clone(),
            image_url: item.image_url.clone(),
            quantity: 1,
            kind: LineKind::Standard {
                product_id: item.id.clone(),
                unit_price: item.unit_price,
            },
        }
    }

    pub(crate) fn custom(configuration: CustomConfiguration, total: Money) -> Self {
        Self {
            id: LineItemId::custom(),
            name: configuration.display_name(),
            description: configuration.summary(),
            image_url: CUSTOM_CAKE_IMAGE.to_string(),
            quantity: 1,
            kind: LineKind::Custom {
                configuration,
                total,
            },
        }
    }

    pub fn is_custom(&self) -> bool {
        matches!(self.kind, LineKind::Custom { .. })
    }

    /// The configuration behind a custom line.
    pub fn configuration(&self) -> Option<&CustomConfiguration> {
        match &self.kind {
            LineKind::Custom { configuration, .. } => Some(configuration),
            LineKind::Standard { .. } => None,
        }
    }

    /// Price of one unit: the catalog price, or the whole custom cake.
    pub fn unit_price(&self) -> Money {
        match &self.kind {
            LineKind::Standard { unit_price, .. } => *unit_price,
            LineKind::Custom { total, .. } => *total,
        }
    }

    /// Line total. Custom lines report their stored total.
    pub fn total(&self) -> Result<Money, CommerceError> {
        match &self.kind {
            LineKind::Standard { unit_price, .. } => unit_price
                .try_multiply(self.quantity)
                .ok_or(CommerceError::Overflow),
            LineKind::Custom { total, .. } => Ok(*total),
        }
    }
}
