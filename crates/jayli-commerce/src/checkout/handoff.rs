//! WhatsApp order handoff.
//!
//! The bakery confirms orders by chat. Checkout produces a `wa.me` link whose
//! text is a plain-text order summary using WhatsApp's `*bold*` markup.

use crate::basket::{BasketLine, LineKind};
use crate::checkout::{CheckoutForm, Order};
use crate::error::CommerceError;
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// Business number orders are sent to, in international format without `+`.
pub const DEFAULT_WHATSAPP_NUMBER: &str = "254706816485";

const WA_ME: &str = "https://wa.me/";

/// Formats order summaries and links for one business number.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WhatsAppHandoff {
    number: String,
}

impl WhatsAppHandoff {
    /// Create a handoff for a number. Spaces, dashes and a leading `+` are dropped.
    pub fn new(number: impl AsRef<str>) -> Self {
        let number = number
            .as_ref()
            .chars()
            .filter(|c| c.is_ascii_digit())
            .collect();
        Self { number }
    }

    pub fn number(&self) -> &str {
        &self.number
    }

    /// The order summary sent to the bakery.
    ///
    /// The customer is named as recorded on the order; phone and location
    /// are trimmed.
    pub fn message(&self, order: &Order, form: &CheckoutForm) -> Result<String, CommerceError> {
        let mut items = String::new();
        for line in &order.items {
            write_line(&mut items, line)?;
        }

        Ok(format!(
            "*NEW ORDER {}* 🎂\n\n*Customer:* {}\n*Phone:* {}\n*Location:* {}\n\n*Order Details:*\n{}\n\n*Total:* {}\n*Payment:* {}\n\nPlease confirm order.",
            order.id,
            order.customer_name,
            form.phone.trim(),
            form.address.trim(),
            items,
            order.total.display(),
            form.payment_method,
        ))
    }

    /// `https://wa.me/<number>?text=<percent-encoded message>`.
    pub fn link(&self, message: &str) -> String {
        format!("{}{}?text={}", WA_ME, self.number, urlencoding::encode(message))
    }
}

impl Default for WhatsAppHandoff {
    fn default() -> Self {
        Self::new(DEFAULT_WHATSAPP_NUMBER)
    }
}

fn write_line(out: &mut String, line: &BasketLine) -> Result<(), CommerceError> {
    let total = line.total()?;
    // Writing to a String cannot fail.
    match &line.kind {
        LineKind::Custom { configuration, .. } => {
            let _ = writeln!(out, "• *CUSTOM CAKE* ({}kg)", configuration.weight);
            let _ = writeln!(out, "  - Flavor: {}", configuration.flavor.name);
            let _ = writeln!(out, "  - Filling: {}", configuration.filling.name);
            let _ = writeln!(out, "  - Finish: {}", configuration.frosting.name);
            if !configuration.message().is_empty() {
                let _ = writeln!(out, "  - Message: \"{}\"", configuration.message());
            }
            let _ = writeln!(out, "  @ {}", total.display());
        }
        LineKind::Standard { .. } => {
            let _ = writeln!(
                out,
                "• {} ({} x 1kg) @ {}",
                line.name,
                line.quantity,
                total.display()
            );
        }
    }
    Ok(())
}
