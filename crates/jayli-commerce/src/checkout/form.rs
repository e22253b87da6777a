//! Checkout form.

use crate::error::CommerceError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How the customer pays. M-Pesa is the only option offered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PaymentMethod {
    #[default]
    #[serde(rename = "MPESA")]
    Mpesa,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Mpesa => "MPESA",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PaymentMethod::Mpesa => "M-Pesa",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Delivery details collected before handing the order to WhatsApp.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CheckoutForm {
    pub name: String,
    pub phone: String,
    /// Delivery location, e.g. "Mbita town, near the pier".
    pub address: String,
    #[serde(default)]
    pub payment_method: PaymentMethod,
}

impl CheckoutForm {
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            address: address.into(),
            payment_method: PaymentMethod::Mpesa,
        }
    }

    /// Required fields that are blank.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.name.trim().is_empty() {
            missing.push("name");
        }
        if self.phone.trim().is_empty() {
            missing.push("phone");
        }
        if self.address.trim().is_empty() {
            missing.push("address");
        }
        missing
    }

    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    pub fn validate(&self) -> Result<(), CommerceError> {
        let missing = self.missing_fields();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(CommerceError::CheckoutIncomplete(missing.join(", ")))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complete_form() {
        let form = CheckoutForm::new("Akinyi", "0712345678", "Mbita");
        assert!(form.is_complete());
        assert_eq!(form.payment_method.as_str(), "MPESA");
    }

    #[test]
    fn test_blank_fields_reported() {
        let form = CheckoutForm::new("  ", "0712345678", "");
        assert_eq!(
            form.validate(),
            Err(CommerceError::CheckoutIncomplete("name, address".to_string()))
        );
    }
}
