//! Custom cake configurator state machine.

use crate::basket::Basket;
use crate::builder::{BuilderMenu, BuilderOption, CustomConfiguration, Weight};
use crate::error::CommerceError;
use crate::ids::LineItemId;
use crate::money::Money;
use crate::pricing::{self, PriceBreakdown, PricingRules};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Steps in the configurator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BuilderStep {
    /// Choose the sponge.
    Flavor,
    /// Choose filling and outer finish.
    FillingAndFrosting,
    /// Choose weight and piped message.
    SizeAndMessage,
    /// Confirm and add to basket.
    Review,
}

impl BuilderStep {
    /// Every step, in order.
    pub const ALL: [BuilderStep; 4] = [
        BuilderStep::Flavor,
        BuilderStep::FillingAndFrosting,
        BuilderStep::SizeAndMessage,
        BuilderStep::Review,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BuilderStep::Flavor => "flavor",
            BuilderStep::FillingAndFrosting => "filling_and_frosting",
            BuilderStep::SizeAndMessage => "size_and_message",
            BuilderStep::Review => "review",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            BuilderStep::Flavor => "Choose Flavor",
            BuilderStep::FillingAndFrosting => "Filling & Finish",
            BuilderStep::SizeAndMessage => "Size & Message",
            BuilderStep::Review => "Review",
        }
    }

    /// Get the step number (1-indexed).
    pub fn number(&self) -> u8 {
        match self {
            BuilderStep::Flavor => 1,
            BuilderStep::FillingAndFrosting => 2,
            BuilderStep::SizeAndMessage => 3,
            BuilderStep::Review => 4,
        }
    }

    fn next(&self) -> Option<BuilderStep> {
        match self {
            BuilderStep::Flavor => Some(BuilderStep::FillingAndFrosting),
            BuilderStep::FillingAndFrosting => Some(BuilderStep::SizeAndMessage),
            BuilderStep::SizeAndMessage => Some(BuilderStep::Review),
            BuilderStep::Review => None,
        }
    }

    fn previous(&self) -> Option<BuilderStep> {
        match self {
            BuilderStep::Flavor => None,
            BuilderStep::FillingAndFrosting => Some(BuilderStep::Flavor),
            BuilderStep::SizeAndMessage => Some(BuilderStep::FillingAndFrosting),
            BuilderStep::Review => Some(BuilderStep::SizeAndMessage),
        }
    }
}

/// The configurator: current step plus the configuration being built.
///
/// Field setters are allowed at any step; only navigation is checked.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Configurator {
    step: BuilderStep,
    config: CustomConfiguration,
    initial: CustomConfiguration,
}

impl Configurator {
    /// Open the configurator at step 1 with the menu's defaults.
    pub fn new(menu: &BuilderMenu) -> Self {
        let initial = CustomConfiguration::initial(menu);
        Self {
            step: BuilderStep::Flavor,
            config: initial.clone(),
            initial,
        }
    }

    pub fn step(&self) -> BuilderStep {
        self.step
    }

    pub fn configuration(&self) -> &CustomConfiguration {
        &self.config
    }

    /// Advance one step.
    pub fn next(&mut self) -> Result<BuilderStep, CommerceError> {
        let next = self.step.next().ok_or_else(|| CommerceError::InvalidStepTransition {
            from: self.step.as_str().to_string(),
            to: "none".to_string(),
        })?;
        self.step = next;
        Ok(next)
    }

    /// Go back one step, keeping every field.
    pub fn back(&mut self) -> Result<BuilderStep, CommerceError> {
        let previous = self
            .step
            .previous()
            .ok_or_else(|| CommerceError::InvalidStepTransition {
                from: self.step.as_str().to_string(),
                to: "none".to_string(),
            })?;
        self.step = previous;
        Ok(previous)
    }

    pub fn set_flavor(&mut self, option: BuilderOption) {
        self.config.flavor = option;
    }

    pub fn set_filling(&mut self, option: BuilderOption) {
        self.config.filling = option;
    }

    pub fn set_frosting(&mut self, option: BuilderOption) {
        self.config.frosting = option;
    }

    pub fn set_weight(&mut self, weight: Weight) {
        self.config.weight = weight;
    }

    /// Set the piped message; long messages are cut to fit.
    pub fn set_message(&mut self, message: impl AsRef<str>) {
        self.config.set_message(message);
    }

    /// Toggle a topper on or off. Returns whether it is now selected.
    pub fn toggle_topper(&mut self, topper: impl Into<String>) -> bool {
        let topper = topper.into();
        if self.config.toppers.remove(&topper) {
            false
        } else {
            self.config.toppers.insert(topper);
            true
        }
    }

    /// Live price of the configuration as it stands.
    pub fn current_price(&self, rules: &PricingRules) -> Result<Money, CommerceError> {
        pricing::price_of_configuration(rules, &self.config)
    }

    pub fn breakdown(&self, rules: &PricingRules) -> Result<PriceBreakdown, CommerceError> {
        pricing::breakdown(rules, &self.config)
    }

    /// Price the configuration, add it to the basket and start over.
    ///
    /// Only allowed from the review step.
    pub fn commit(
        &mut self,
        basket: &mut Basket,
        rules: &PricingRules,
    ) -> Result<LineItemId, CommerceError> {
        if self.step != BuilderStep::Review {
            return Err(CommerceError::InvalidStepTransition {
                from: self.step.as_str().to_string(),
                to: "basket".to_string(),
            });
        }

        let total = self.current_price(rules)?;
        let config = std::mem::replace(&mut self.config, self.initial.clone());
        let name = config.display_name();
        let id = basket.add_custom(config, total);
        self.step = BuilderStep::Flavor;

        info!(line = %id, cake = %name, total = %total, "custom cake added to basket");
        Ok(id)
    }

    /// Discard the configuration and return to step 1.
    pub fn reset(&mut self) {
        self.step = BuilderStep::Flavor;
        self.config = self.initial.clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::OptionFamily;

    fn opened() -> (BuilderMenu, Configurator) {
        let menu = BuilderMenu::standard();
        let configurator = Configurator::new(&menu);
        (menu, configurator)
    }

    #[test]
    fn test_steps_numbered_in_order() {
        for (i, step) in BuilderStep::ALL.iter().enumerate() {
            assert_eq!(step.number() as usize, i + 1);
        }
    }

    #[test]
    fn test_step_navigation() {
        let (_, mut c) = opened();
        assert_eq!(c.step().number(), 1);

        assert_eq!(c.next().unwrap(), BuilderStep::FillingAndFrosting);
        assert_eq!(c.next().unwrap(), BuilderStep::SizeAndMessage);
        assert_eq!(c.next().unwrap(), BuilderStep::Review);
        assert!(matches!(c.next(), Err(CommerceError::InvalidStepTransition { .. })));
        assert_eq!(c.step(), BuilderStep::Review);

        c.back().unwrap();
        c.back().unwrap();
        c.back().unwrap();
        assert!(c.back().is_err());
        assert_eq!(c.step(), BuilderStep::Flavor);
    }

    #[test]
    fn test_back_then_next_is_lossless() {
        let (menu, mut c) = opened();
        c.set_flavor(menu.find(OptionFamily::Flavor, "blueberry").unwrap().clone());
        c.next().unwrap();
        c.set_filling(menu.find(OptionFamily::Filling, "lemon").unwrap().clone());
        c.set_frosting(menu.find(OptionFamily::Frosting, "rosette").unwrap().clone());
        c.next().unwrap();
        c.set_weight(Weight::from_kg(3.5).unwrap());
        c.set_message("Karibu");

        let before = c.configuration().clone();
        for _ in 0..2 {
            c.back().unwrap();
        }
        c.next().unwrap();
        c.next().unwrap();
        assert_eq!(c.step(), BuilderStep::SizeAndMessage);
        assert_eq!(c.configuration(), &before);
    }

    #[test]
    fn test_commit_prices_and_resets() {
        let (menu, mut c) = opened();
        let rules = PricingRules::default();
        let mut basket = Basket::new();

        c.set_flavor(menu.find(OptionFamily::Flavor, "chocolate").unwrap().clone());
        c.set_filling(menu.find(OptionFamily::Filling, "choc_ganache").unwrap().clone());
        c.set_weight(Weight::kg(2).unwrap());
        c.set_message("Happy Birthday Amani");
        for _ in 0..3 {
            c.next().unwrap();
        }

        let id = c.commit(&mut basket, &rules).unwrap();
        let line = basket.get(&id).unwrap();
        assert_eq!(line.total().unwrap(), Money::kes(5000));
        assert_eq!(line.quantity, 1);
        assert_eq!(line.name, "Custom Rich Chocolate Cake");
        assert_eq!(line.configuration().unwrap().message(), "Happy Birthday Amani");

        assert_eq!(c.step(), BuilderStep::Flavor);
        assert_eq!(c.configuration(), &CustomConfiguration::initial(&menu));
    }

    #[test]
    fn test_commit_outside_review_rejected() {
        let (_, mut c) = opened();
        let mut basket = Basket::new();
        c.next().unwrap();
        let err = c.commit(&mut basket, &PricingRules::default()).unwrap_err();
        assert_eq!(
            err,
            CommerceError::InvalidStepTransition {
                from: "filling_and_frosting".to_string(),
                to: "basket".to_string(),
            }
        );
        assert!(basket.is_empty());
    }

    #[test]
    fn test_setters_allowed_at_any_step() {
        let (menu, mut c) = opened();
        for _ in 0..3 {
            c.next().unwrap();
        }
        c.set_flavor(menu.find(OptionFamily::Flavor, "fruit").unwrap().clone());
        assert_eq!(c.configuration().flavor.id.as_str(), "fruit");
        assert_eq!(c.current_price(&PricingRules::default()).unwrap(), Money::kes(2500));
    }

    #[test]
    fn test_toggle_topper() {
        let (_, mut c) = opened();
        let price = c.current_price(&PricingRules::default()).unwrap();
        assert!(c.toggle_topper("Candles"));
        assert!(c.configuration().toppers.contains("Candles"));
        assert!(!c.toggle_topper("Candles"));
        assert!(c.configuration().toppers.is_empty());
        assert_eq!(c.current_price(&PricingRules::default()).unwrap(), price);
    }

    #[test]
    fn test_reset_discards_configuration() {
        let (menu, mut c) = opened();
        c.set_frosting(menu.find(OptionFamily::Frosting, "fondant").unwrap().clone());
        c.set_message("Hongera");
        c.toggle_topper("Sparklers");
        c.next().unwrap();
        c.next().unwrap();

        c.reset();
        assert_eq!(c.step(), BuilderStep::Flavor);
        assert_eq!(c.configuration(), &CustomConfiguration::initial(&menu));
    }
}
