//! Options offered by the custom cake builder.

use crate::error::CommerceError;
use crate::ids::OptionId;
use crate::money::Money;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which list an option belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OptionFamily {
    Flavor,
    Filling,
    Frosting,
}

impl OptionFamily {
    pub fn as_str(&self) -> &'static str {
        match self {
            OptionFamily::Flavor => "flavor",
            OptionFamily::Filling => "filling",
            OptionFamily::Frosting => "frosting",
        }
    }
}

impl fmt::Display for OptionFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A selectable sponge, filling or finish.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BuilderOption {
    pub id: OptionId,
    pub name: String,
    /// Added to the base rate for every kilogram of cake.
    pub price_modifier_per_kg: Money,
    pub description: Option<String>,
}

impl BuilderOption {
    pub fn new(id: impl Into<OptionId>, name: impl Into<String>, price_modifier_per_kg: Money) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price_modifier_per_kg,
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Whether choosing this option changes the price.
    pub fn has_surcharge(&self) -> bool {
        self.price_modifier_per_kg.is_positive()
    }
}

/// The three option lists. Each list is non-empty; the first entry of each is
/// the configurator's default.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct BuilderMenu {
    flavors: Vec<BuilderOption>,
    fillings: Vec<BuilderOption>,
    frostings: Vec<BuilderOption>,
}

impl BuilderMenu {
    /// Create a menu from explicit option lists.
    pub fn new(
        flavors: Vec<BuilderOption>,
        fillings: Vec<BuilderOption>,
        frostings: Vec<BuilderOption>,
    ) -> Result<Self, CommerceError> {
        for (family, list) in [
            (OptionFamily::Flavor, &flavors),
            (OptionFamily::Filling, &fillings),
            (OptionFamily::Frosting, &frostings),
        ] {
            if list.is_empty() {
                return Err(CommerceError::EmptyOptionFamily(family.to_string()));
            }
        }
        Ok(Self {
            flavors,
            fillings,
            frostings,
        })
    }

    /// The bakery's standard option lists.
    pub fn standard() -> Self {
        let flavors = vec![
            BuilderOption::new("vanilla", "Classic Vanilla", Money::kes(0))
                .with_description("Light, fluffy, and timeless."),
            BuilderOption::new("chocolate", "Rich Chocolate", Money::kes(200))
                .with_description("Decadent dark cocoa sponge."),
            BuilderOption::new("redvelvet", "Red Velvet", Money::kes(300))
                .with_description("Mild cocoa with a buttermilk tang."),
            BuilderOption::new("fruit", "Kenyan Fruit Cake", Money::kes(500))
                .with_description("Traditional spiced fruit cake."),
            BuilderOption::new("blueberry", "Blueberry Burst", Money::kes(400))
                .with_description("Infused with real blueberries."),
        ];

        let fillings = vec![
            BuilderOption::new("buttercream", "Vanilla Buttercream", Money::kes(0)),
            BuilderOption::new("choc_ganache", "Dark Chocolate Ganache", Money::kes(300)),
            BuilderOption::new("creamcheese", "Cream Cheese", Money::kes(400)),
            BuilderOption::new("freshcream", "Fresh Whipped Cream", Money::kes(200)),
            BuilderOption::new("lemon", "Lemon Curd", Money::kes(250)),
        ];

        let frostings = vec![
            BuilderOption::new("semi_naked", "Semi-Naked (Rustic)", Money::kes(0)),
            BuilderOption::new("smooth", "Smooth Buttercream", Money::kes(200)),
            BuilderOption::new("fondant", "Fondant Finish", Money::kes(800)),
            BuilderOption::new("rosette", "Rosette Texture", Money::kes(400)),
        ];

        Self {
            flavors,
            fillings,
            frostings,
        }
    }

    pub fn family(&self, family: OptionFamily) -> &[BuilderOption] {
        match family {
            OptionFamily::Flavor => &self.flavors,
            OptionFamily::Filling => &self.fillings,
            OptionFamily::Frosting => &self.frostings,
        }
    }

    /// Look up an option by id within one family.
    pub fn find(&self, family: OptionFamily, id: &str) -> Result<&BuilderOption, CommerceError> {
        self.family(family)
            .iter()
            .find(|o| o.id.as_str() == id)
            .ok_or_else(|| CommerceError::OptionNotFound {
                family: family.to_string(),
                id: id.to_string(),
            })
    }

    /// First option of a family, used as the default selection.
    pub fn default_for(&self, family: OptionFamily) -> &BuilderOption {
        // Lists are checked non-empty on construction.
        &self.family(family)[0]
    }
}

impl Default for BuilderMenu {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_menu_defaults_are_free() {
        let menu = BuilderMenu::standard();
        for family in [OptionFamily::Flavor, OptionFamily::Filling, OptionFamily::Frosting] {
            let first = menu.default_for(family);
            assert!(!first.has_surcharge(), "{} default should be free", family);
        }
    }

    #[test]
    fn test_empty_family_rejected() {
        let flavors = vec![BuilderOption::new("vanilla", "Vanilla", Money::kes(0))];
        let fillings = vec![BuilderOption::new("jam", "Jam", Money::kes(0))];
        assert_eq!(
            BuilderMenu::new(flavors, fillings, Vec::new()),
            Err(CommerceError::EmptyOptionFamily("frosting".to_string()))
        );
    }

    #[test]
    fn test_find_option() {
        let menu = BuilderMenu::standard();
        let fondant = menu.find(OptionFamily::Frosting, "fondant").unwrap();
        assert_eq!(fondant.price_modifier_per_kg, Money::kes(800));

        let err = menu.find(OptionFamily::Flavor, "fondant").unwrap_err();
        assert_eq!(
            err,
            CommerceError::OptionNotFound {
                family: "flavor".to_string(),
                id: "fondant".to_string(),
            }
        );
    }
}
