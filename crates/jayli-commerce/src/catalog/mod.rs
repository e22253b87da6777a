//! Product catalog module.
//!
//! Contains the ready-made cakes, their categories, and customer reviews.

mod category;
mod product;
mod review;
mod seed;

pub use category::CakeCategory;
pub use product::CatalogItem;
pub use review::Review;
pub use seed::CUSTOM_CAKE_IMAGE;

use crate::error::CommerceError;
use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// The immutable menu of ready-made cakes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Catalog {
    items: Vec<CatalogItem>,
    reviews: Vec<Review>,
}

impl Catalog {
    /// Create a catalog from explicit items.
    pub fn new(items: Vec<CatalogItem>) -> Self {
        Self {
            items,
            reviews: Vec::new(),
        }
    }

    /// The bakery's standard menu and published reviews.
    pub fn standard() -> Self {
        Self {
            items: seed::cakes(),
            reviews: seed::reviews(),
        }
    }

    /// All items in menu order.
    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    /// Items in a category, or everything when `category` is `None`.
    pub fn browse(&self, category: Option<CakeCategory>) -> Vec<&CatalogItem> {
        self.items
            .iter()
            .filter(|item| category.map_or(true, |c| item.category == c))
            .collect()
    }

    /// Look up an item by id.
    pub fn get(&self, id: &ProductId) -> Result<&CatalogItem, CommerceError> {
        self.items
            .iter()
            .find(|item| &item.id == id)
            .ok_or_else(|| CommerceError::ProductNotFound(id.to_string()))
    }

    pub fn reviews(&self) -> &[Review] {
        &self.reviews
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}
