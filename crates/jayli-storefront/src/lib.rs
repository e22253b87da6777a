//! The Jayli storefront session.
//!
//! [`Storefront`] owns a shopper's basket, cake builder, orders and chat, and
//! is the only entry point front ends use. [`StorefrontConfig`] supplies the
//! shop's pricing, WhatsApp number and assistant settings.
//!
//! # Example
//!
//! ```rust,ignore
//! use jayli_storefront::{Storefront, StorefrontConfig};
//! use jayli_commerce::checkout::CheckoutForm;
//!
//! let config = StorefrontConfig::default();
//! let mut shop = Storefront::from_config(&config, config.gemini_client()?)?;
//!
//! shop.add_to_basket("1")?;
//! let receipt = shop.checkout(&CheckoutForm::new("Akinyi", "0712345678", "Mbita"))?;
//! println!("Open {}", receipt.whatsapp_url);
//! ```

pub mod config;
mod error;
mod storefront;

pub use config::{generate_default_config, StorefrontConfig, CONFIG_FILE_NAMES};
pub use error::StorefrontError;
pub use storefront::Storefront;
