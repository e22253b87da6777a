//! Commerce error types.

use thiserror::Error;

/// Errors that can occur in storefront operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CommerceError {
    /// Product not found in the catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Builder option not found in its family.
    #[error("Unknown {family} option: {id}")]
    OptionNotFound { family: String, id: String },

    /// A builder option family was configured with no options.
    #[error("No {0} options configured")]
    EmptyOptionFamily(String),

    /// Order not found in this session.
    #[error("Order not found: {0}. Please check the ID.")]
    OrderNotFound(String),

    /// Line not in the basket.
    #[error("Item not in basket: {0}")]
    ItemNotInBasket(String),

    /// Quantity exceeds maximum allowed per line.
    #[error("Quantity {0} exceeds maximum allowed ({1})")]
    QuantityExceedsLimit(i64, i64),

    /// Weight outside the bakeable range or off the half-kilogram step.
    #[error("Invalid cake weight {0} kg: must be 1 to 5 kg in 0.5 kg steps")]
    InvalidWeight(f64),

    /// Invalid configurator step transition.
    #[error("Invalid builder transition from {from} to {to}")]
    InvalidStepTransition { from: String, to: String },

    /// Checkout form missing required fields.
    #[error("Checkout incomplete: missing {0}")]
    CheckoutIncomplete(String),

    /// Every order reference is already in use this session.
    #[error("No order references left in this session")]
    OrderIdsExhausted,

    /// Checkout attempted with nothing in the basket.
    #[error("Basket is empty")]
    EmptyBasket,

    /// Unknown cake category name.
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// Arithmetic overflow.
    #[error("Arithmetic overflow in money calculation")]
    Overflow,
}
