//! Session order book: placing orders and looking them up.

use crate::basket::Basket;
use crate::checkout::order::current_timestamp;
use crate::checkout::{CheckoutForm, Order, OrderStatus, WhatsAppHandoff};
use crate::error::CommerceError;
use crate::ids::{OrderId, ORDER_NUMBERS};
use crate::pricing::PricingRules;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{info, warn};

/// Everything produced by a successful checkout.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Receipt {
    pub order: Order,
    /// Plain-text summary sent to the bakery.
    pub message: String,
    /// `wa.me` link carrying the summary.
    pub whatsapp_url: String,
}

/// Orders placed during this session, oldest first.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct OrderBook {
    orders: Vec<Order>,
}

impl OrderBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Turn the basket into an order and hand it off.
    ///
    /// On success the order is recorded and the basket is cleared. On error
    /// nothing changes.
    pub fn place(
        &mut self,
        basket: &mut Basket,
        form: &CheckoutForm,
        rules: &PricingRules,
        handoff: &WhatsAppHandoff,
    ) -> Result<Receipt, CommerceError> {
        if basket.is_empty() {
            return Err(CommerceError::EmptyBasket);
        }
        form.validate()?;

        let order = Order {
            id: self.fresh_id()?,
            items: basket.lines().to_vec(),
            total: basket.subtotal(rules.currency())?,
            delivery_fee: rules.delivery_fee,
            status: OrderStatus::Pending,
            customer_name: form.name.trim().to_string(),
            created_at: current_timestamp(),
        };

        let message = handoff.message(&order, form)?;
        let whatsapp_url = handoff.link(&message);

        info!(
            order = %order.id,
            lines = order.items.len(),
            total = %order.total,
            "order placed"
        );

        self.orders.push(order.clone());
        basket.clear();

        Ok(Receipt {
            order,
            message,
            whatsapp_url,
        })
    }

    /// Find an order placed in this session. Surrounding whitespace is ignored.
    pub fn track(&self, id: &str) -> Result<&Order, CommerceError> {
        let id = id.trim();
        self.orders
            .iter()
            .find(|o| o.id.as_str() == id)
            .ok_or_else(|| {
                warn!(order = %id, "order lookup missed");
                CommerceError::OrderNotFound(id.to_string())
            })
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// A random unused reference, or the lowest free one once random picks
    /// keep colliding.
    fn fresh_id(&self) -> Result<OrderId, CommerceError> {
        const RANDOM_ATTEMPTS: usize = 32;

        let taken: HashSet<&OrderId> = self.orders.iter().map(|o| &o.id).collect();
        for _ in 0..RANDOM_ATTEMPTS {
            let id = OrderId::generate();
            if !taken.contains(&id) {
                return Ok(id);
            }
        }

        ORDER_NUMBERS
            .map(OrderId::from_number)
            .find(|id| !taken.contains(id))
            .ok_or(CommerceError::OrderIdsExhausted)
    }
}
