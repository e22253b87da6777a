//! Domain types and logic for the Jayli bakery storefront.
//!
//! - **Catalog**: ready-made cakes, categories, reviews
//! - **Builder**: custom cake options, the configuration and its four-step wizard
//! - **Pricing**: per-line and per-configuration prices
//! - **Basket**: lines, quantities, summary with delivery
//! - **Checkout**: form, orders, WhatsApp handoff, order lookup
//!
//! # Example
//!
//! ```rust
//! use jayli_commerce::prelude::*;
//!
//! let catalog = Catalog::standard();
//! let menu = BuilderMenu::standard();
//! let rules = PricingRules::default();
//! let mut basket = Basket::new();
//!
//! let cake = catalog.get(&ProductId::new("1")).unwrap();
//! basket.add_product(cake).unwrap();
//!
//! let mut builder = Configurator::new(&menu);
//! builder.set_weight(Weight::kg(2).unwrap());
//! builder.next().unwrap();
//! builder.next().unwrap();
//! builder.next().unwrap();
//! builder.commit(&mut basket, &rules).unwrap();
//!
//! let summary = basket.summary(&rules).unwrap();
//! assert_eq!(summary.grand_total.display(), "KES 6,800");
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod basket;
pub mod builder;
pub mod catalog;
pub mod checkout;
pub mod pricing;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{CakeCategory, Catalog, CatalogItem, Review};

    // Builder
    pub use crate::builder::{
        BuilderMenu, BuilderOption, BuilderStep, Configurator, CustomConfiguration, OptionFamily,
        Weight,
    };

    // Pricing
    pub use crate::pricing::{PriceBreakdown, PricingRules};

    // Basket
    pub use crate::basket::{Basket, BasketLine, BasketSummary, LineKind, LinePricing};

    // Checkout
    pub use crate::checkout::{
        CheckoutForm, Order, OrderBook, OrderStatus, PaymentMethod, Receipt, WhatsAppHandoff,
    };
}
