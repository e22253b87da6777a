//! The custom cake being authored in the builder.

use crate::builder::{BuilderMenu, BuilderOption, OptionFamily};
use crate::error::CommerceError;
use crate::money::Money;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Longest message the bakery will pipe onto a cake.
pub const MAX_MESSAGE_CHARS: usize = 30;

/// Cake weight in kilograms, 1 to 5 kg in 0.5 kg steps.
///
/// Stored as a count of half kilograms so that scaling a per-kilogram rate is
/// exact integer arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Weight {
    half_kg: u8,
}

impl Weight {
    pub const MIN: Weight = Weight { half_kg: 2 };
    pub const MAX: Weight = Weight { half_kg: 10 };

    /// Parse a weight in kilograms.
    pub fn from_kg(kg: f64) -> Result<Self, CommerceError> {
        let halves = kg * 2.0;
        if !halves.is_finite() || halves.fract() != 0.0 {
            return Err(CommerceError::InvalidWeight(kg));
        }
        if halves < Self::MIN.half_kg as f64 || halves > Self::MAX.half_kg as f64 {
            return Err(CommerceError::InvalidWeight(kg));
        }
        Ok(Self {
            half_kg: halves as u8,
        })
    }

    /// Whole kilograms, e.g. `Weight::kg(2)`.
    pub fn kg(kg: u8) -> Result<Self, CommerceError> {
        Self::from_kg(kg as f64)
    }

    pub fn as_kg(&self) -> f64 {
        self.half_kg as f64 / 2.0
    }

    pub fn half_kilograms(&self) -> u8 {
        self.half_kg
    }

    /// Scale a per-kilogram rate by this weight.
    ///
    /// Returns `None` on overflow. Odd cent amounts at half-kilogram weights
    /// round down to the cent.
    pub fn scale(&self, per_kg: &Money) -> Option<Money> {
        per_kg
            .amount_cents
            .checked_mul(self.half_kg as i64)
            .map(|doubled| Money::new(doubled / 2, per_kg.currency))
    }

    /// Approximate number of guests served, as a (low, high) range.
    pub fn servings(&self) -> (u32, u32) {
        let halves = self.half_kg as u32;
        (halves * 3, halves * 4)
    }
}

impl Default for Weight {
    fn default() -> Self {
        Self::MIN
    }
}

impl TryFrom<f64> for Weight {
    type Error = CommerceError;

    fn try_from(kg: f64) -> Result<Self, Self::Error> {
        Weight::from_kg(kg)
    }
}

impl From<Weight> for f64 {
    fn from(weight: Weight) -> f64 {
        weight.as_kg()
    }
}

impl fmt::Display for Weight {
    /// Prints "2" for whole kilograms and "1.5" otherwise.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.half_kg % 2 == 0 {
            write!(f, "{}", self.half_kg / 2)
        } else {
            write!(f, "{}.5", self.half_kg / 2)
        }
    }
}

/// A custom cake as chosen in the builder.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CustomConfiguration {
    pub flavor: BuilderOption,
    pub filling: BuilderOption,
    pub frosting: BuilderOption,
    /// Decorations requested on top. Carried through to the order but not priced.
    pub toppers: BTreeSet<String>,
    pub weight: Weight,
    message: String,
}

impl CustomConfiguration {
    /// The starting configuration: first option of each family, 1 kg, no message.
    pub fn initial(menu: &BuilderMenu) -> Self {
        Self {
            flavor: menu.default_for(OptionFamily::Flavor).clone(),
            filling: menu.default_for(OptionFamily::Filling).clone(),
            frosting: menu.default_for(OptionFamily::Frosting).clone(),
            toppers: BTreeSet::new(),
            weight: Weight::MIN,
            message: String::new(),
        }
    }

    /// Message piped on the cake; empty when none was requested.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Set the message, keeping at most [`MAX_MESSAGE_CHARS`] characters.
    pub fn set_message(&mut self, message: impl AsRef<str>) {
        self.message = message.as_ref().chars().take(MAX_MESSAGE_CHARS).collect();
    }

    /// Name shown in the basket, e.g. "Custom Red Velvet Cake".
    pub fn display_name(&self) -> String {
        format!("Custom {} Cake", self.flavor.name)
    }

    /// Short description, e.g. "Cream Cheese, Fondant Finish".
    pub fn summary(&self) -> String {
        format!("{}, {}", self.filling.name, self.frosting.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weight_bounds_and_steps() {
        assert_eq!(Weight::from_kg(1.0).unwrap(), Weight::MIN);
        assert_eq!(Weight::from_kg(5.0).unwrap(), Weight::MAX);
        assert_eq!(Weight::from_kg(2.5).unwrap().half_kilograms(), 5);

        assert_eq!(Weight::from_kg(0.5), Err(CommerceError::InvalidWeight(0.5)));
        assert_eq!(Weight::from_kg(5.5), Err(CommerceError::InvalidWeight(5.5)));
        assert_eq!(Weight::from_kg(1.25), Err(CommerceError::InvalidWeight(1.25)));
        assert!(Weight::from_kg(f64::NAN).is_err());
    }

    #[test]
    fn test_weight_display() {
        assert_eq!(Weight::from_kg(2.0).unwrap().to_string(), "2");
        assert_eq!(Weight::from_kg(1.5).unwrap().to_string(), "1.5");
    }

    #[test]
    fn test_weight_scale() {
        let w = Weight::from_kg(1.5).unwrap();
        assert_eq!(w.scale(&Money::kes(2000)), Some(Money::kes(3000)));
        assert_eq!(w.scale(&Money::kes(250)), Some(Money::new(37_500, crate::money::Currency::KES)));
    }

    #[test]
    fn test_weight_serde_as_kilograms() {
        let w = Weight::from_kg(3.5).unwrap();
        assert_eq!(serde_json::to_string(&w).unwrap(), "3.5");
        let back: Weight = serde_json::from_str("3.5").unwrap();
        assert_eq!(back, w);
        assert!(serde_json::from_str::<Weight>("7").is_err());
    }

    #[test]
    fn test_servings() {
        assert_eq!(Weight::kg(2).unwrap().servings(), (12, 16));
        assert_eq!(Weight::from_kg(1.5).unwrap().servings(), (9, 12));
    }

    #[test]
    fn test_initial_configuration() {
        let menu = BuilderMenu::standard();
        let config = CustomConfiguration::initial(&menu);
        assert_eq!(config.flavor.id.as_str(), "vanilla");
        assert_eq!(config.filling.id.as_str(), "buttercream");
        assert_eq!(config.frosting.id.as_str(), "semi_naked");
        assert_eq!(config.weight, Weight::MIN);
        assert!(config.message().is_empty());
        assert!(config.toppers.is_empty());
    }

    #[test]
    fn test_message_truncated() {
        let menu = BuilderMenu::standard();
        let mut config = CustomConfiguration::initial(&menu);
        config.set_message("Happy Graduation Dr. Achieng Odhiambo!");
        assert_eq!(config.message().chars().count(), MAX_MESSAGE_CHARS);
        assert_eq!(config.message(), "Happy Graduation Dr. Achieng O");

        config.set_message("Hongera!");
        assert_eq!(config.message(), "Hongera!");
    }
}
