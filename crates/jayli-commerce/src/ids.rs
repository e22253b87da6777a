//! Newtype IDs for type-safe identifiers.
//!
//! Using newtypes prevents accidentally mixing up different ID types,
//! e.g., passing a ProductId where an OrderId is expected.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Macro to generate newtype ID structs.
macro_rules! define_id {
    ($name:ident) => {
        /// A unique identifier.
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from a string.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the ID as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(ProductId);
define_id!(OptionId);
define_id!(ReviewId);
define_id!(LineItemId);
define_id!(OrderId);

/// Prefix of every order reference handed to customers.
pub const ORDER_ID_PREFIX: &str = "JL-";

/// Numbers an order reference can carry.
pub const ORDER_NUMBERS: std::ops::RangeInclusive<u16> = 1000..=9999;

impl LineItemId {
    /// Line id for a standard catalog line: the product id itself, so repeated
    /// adds of the same product land on the same line.
    pub fn for_product(product_id: &ProductId) -> Self {
        Self(product_id.as_str().to_string())
    }

    /// Line id for a custom cake, derived from the creation time in milliseconds.
    ///
    /// Two custom lines created within the same millisecond get consecutive
    /// values, so ids stay unique for the life of the process.
    pub fn custom() -> Self {
        Self(format!("custom-{}", next_custom_millis()))
    }

    /// Whether this id was issued for a custom cake.
    pub fn is_custom(&self) -> bool {
        self.0.starts_with("custom-")
    }
}

impl OrderId {
    /// Generate a short customer-facing reference, `JL-` plus four digits.
    pub fn generate() -> Self {
        use rand::Rng;
        Self::from_number(rand::thread_rng().gen_range(ORDER_NUMBERS))
    }

    pub fn from_number(n: u16) -> Self {
        Self(format!("{}{}", ORDER_ID_PREFIX, n))
    }
}

fn next_custom_millis() -> u64 {
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::time::{SystemTime, UNIX_EPOCH};

    static LAST: AtomicU64 = AtomicU64::new(0);

    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);

    let mut last = LAST.load(Ordering::SeqCst);
    loop {
        let candidate = if now > last { now } else { last + 1 };
        match LAST.compare_exchange(last, candidate, Ordering::SeqCst, Ordering::SeqCst) {
            Ok(_) => return candidate,
            Err(actual) => last = actual,
        }
    }
}
