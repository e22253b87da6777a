//! Checkout module.
//!
//! Contains the checkout form, orders, the WhatsApp handoff and the session
//! order book.

mod form;
mod handoff;
mod order;
mod order_book;

pub use form::{CheckoutForm, PaymentMethod};
pub use handoff::{WhatsAppHandoff, DEFAULT_WHATSAPP_NUMBER};
pub use order::{Order, OrderStatus};
pub use order_book::{OrderBook, Receipt};
