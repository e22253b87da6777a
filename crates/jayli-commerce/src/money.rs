//! Money type for representing monetary values.
//!
//! Uses cents-based integer representation so that per-kilogram rates scaled
//! by half-kilogram weights stay exact.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported currencies.
///
/// The menu is priced in shillings, so Kenyan shillings are the only currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    /// Kenyan shilling.
    #[default]
    KES,
}

impl Currency {
    /// Get the currency code (e.g., "KES").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::KES => "KES",
        }
    }

    /// Get the number of decimal places for this currency.
    pub fn decimal_places(&self) -> u32 {
        2
    }

    /// Parse a currency code string.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_uppercase().as_str() {
            "KES" => Some(Currency::KES),
            _ => None,
        }
    }

    fn minor_per_major(&self) -> i64 {
        10_i64.pow(self.decimal_places())
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A monetary value with currency.
///
/// Amounts are stored in the smallest unit of the currency (cents for KES).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in smallest currency unit.
    pub amount_cents: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value from cents.
    pub fn new(amount_cents: i64, currency: Currency) -> Self {
        Self {
            amount_cents,
            currency,
        }
    }

    /// Create a Money value from a whole-unit amount (e.g., shillings).
    ///
    /// ```
    /// use jayli_commerce::money::{Currency, Money};
    /// let price = Money::from_major(2500, Currency::KES);
    /// assert_eq!(price.amount_cents, 250_000);
    /// ```
    ///
    /// Saturates at the `i64` limits; use [`Money::try_from_major`] for
    /// amounts that come from outside the program.
    pub fn from_major(amount: i64, currency: Currency) -> Self {
        Self::new(amount.saturating_mul(currency.minor_per_major()), currency)
    }

    /// Like [`Money::from_major`], returning None when the amount does not fit.
    pub fn try_from_major(amount: i64, currency: Currency) -> Option<Self> {
        amount
            .checked_mul(currency.minor_per_major())
            .map(|cents| Self::new(cents, currency))
    }

    /// Shorthand for a whole-shilling amount.
    pub fn kes(amount: i64) -> Self {
        Self::from_major(amount, Currency::KES)
    }

    /// Create a zero amount in the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount_cents == 0
    }

    /// Check if this is positive.
    pub fn is_positive(&self) -> bool {
        self.amount_cents > 0
    }

    /// Format as a display string (e.g., "KES 5,000").
    ///
    /// The fractional part is only shown when it is non-zero.
    pub fn display(&self) -> String {
        format!("{} {}", self.currency.code(), self.display_amount())
    }

    /// Format without the currency code (e.g., "5,000" or "3,375.50").
    pub fn display_amount(&self) -> String {
        let per_major = self.currency.minor_per_major();
        let sign = if self.amount_cents < 0 { "-" } else { "" };
        let abs = self.amount_cents.unsigned_abs();
        let major = abs / per_major as u64;
        let minor = abs % per_major as u64;

        let grouped = group_thousands(major);
        if minor == 0 {
            format!("{}{}", sign, grouped)
        } else {
            let places = self.currency.decimal_places() as usize;
            format!("{}{}.{:0places$}", sign, grouped, minor)
        }
    }

    /// Try to add another Money value, returning None on currency mismatch or overflow.
    pub fn try_add(&self, other: &Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        self.amount_cents
            .checked_add(other.amount_cents)
            .map(|amount| Money::new(amount, self.currency))
    }

    /// Try to subtract another Money value.
    pub fn try_subtract(&self, other: &Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        self.amount_cents
            .checked_sub(other.amount_cents)
            .map(|amount| Money::new(amount, self.currency))
    }

    /// Multiply by a scalar, returning None on overflow.
    pub fn try_multiply(&self, factor: i64) -> Option<Money> {
        self.amount_cents
            .checked_mul(factor)
            .map(|amount| Money::new(amount, self.currency))
    }

    /// Sum an iterator of Money values, returning None on mismatch or overflow.
    pub fn try_sum<'a>(mut iter: impl Iterator<Item = &'a Money>, currency: Currency) -> Option<Money> {
        iter.try_fold(Money::zero(currency), |acc, m| acc.try_add(m))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_from_major() {
        let m = Money::from_major(2500, Currency::KES);
        assert_eq!(m.amount_cents, 250_000);

        assert_eq!(Money::try_from_major(300, Currency::KES), Some(Money::kes(300)));
        assert_eq!(Money::try_from_major(i64::MAX, Currency::KES), None);
        assert_eq!(Money::from_major(i64::MAX, Currency::KES).amount_cents, i64::MAX);
    }

    #[test]
    fn test_money_display() {
        assert_eq!(Money::kes(5000).display(), "KES 5,000");
        assert_eq!(Money::kes(14500).display(), "KES 14,500");
        assert_eq!(Money::kes(300).display(), "KES 300");
        assert_eq!(Money::new(337_550, Currency::KES).display(), "KES 3,375.50");
        assert_eq!(Money::kes(1_250_000).display_amount(), "1,250,000");
        assert_eq!(Money::kes(-300).display_amount(), "-300");
    }

    #[test]
    fn test_money_addition() {
        let a = Money::kes(1000);
        let b = Money::kes(500);
        assert_eq!(a.try_add(&b), Some(Money::kes(1500)));
    }

    #[test]
    fn test_money_add_overflow() {
        let max = Money::new(i64::MAX, Currency::KES);
        assert!(max.try_add(&Money::kes(1)).is_none());
        assert_eq!(Money::kes(1000).try_subtract(&Money::kes(300)), Some(Money::kes(700)));
    }

    #[test]
    fn test_money_multiply_overflow() {
        let m = Money::new(i64::MAX, Currency::KES);
        assert!(m.try_multiply(2).is_none());
        assert_eq!(Money::kes(2500).try_multiply(3), Some(Money::kes(7500)));
    }

    #[test]
    fn test_money_sum() {
        let values = [Money::kes(100), Money::kes(200), Money::kes(300)];
        assert_eq!(
            Money::try_sum(values.iter(), Currency::KES),
            Some(Money::kes(600))
        );
        assert_eq!(
            Money::try_sum([].iter(), Currency::KES),
            Some(Money::zero(Currency::KES))
        );
    }

    #[test]
    fn test_currency_from_code() {
        assert_eq!(Currency::from_code("KES"), Some(Currency::KES));
        assert_eq!(Currency::from_code(" kes "), Some(Currency::KES));
        assert_eq!(Currency::from_code("USD"), None);
        assert_eq!(Currency::from_code("INVALID"), None);
    }
}
