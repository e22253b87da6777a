//! Catalog items.

use crate::catalog::CakeCategory;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A ready-made cake on the menu.
///
/// Prices are per 1 kg unit; a basket quantity of 3 means 3 kg.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogItem {
    /// Unique product identifier.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Marketing description.
    pub description: String,
    /// Price of one 1 kg unit.
    pub unit_price: Money,
    /// Occasion category.
    pub category: CakeCategory,
    /// Image URL.
    pub image_url: String,
    /// Average customer rating out of 5.
    pub rating: f32,
}

impl CatalogItem {
    /// Create a catalog item with no image and a neutral rating.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        unit_price: Money,
        category: CakeCategory,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            unit_price,
            category,
            image_url: String::new(),
            rating: 0.0,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.image_url = url.into();
        self
    }

    pub fn with_rating(mut self, rating: f32) -> Self {
        self.rating = rating;
        self
    }
}
