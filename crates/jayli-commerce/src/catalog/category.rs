//! Cake categories used to group the catalog.

use crate::error::CommerceError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Occasion a cake is sold for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CakeCategory {
    Graduation,
    Wedding,
    /// Shown to customers as "Kids Corner".
    Kids,
    Birthday,
    General,
}

impl CakeCategory {
    /// All categories in menu order.
    pub const ALL: [CakeCategory; 5] = [
        CakeCategory::Graduation,
        CakeCategory::Wedding,
        CakeCategory::Kids,
        CakeCategory::Birthday,
        CakeCategory::General,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CakeCategory::Graduation => "graduation",
            CakeCategory::Wedding => "wedding",
            CakeCategory::Kids => "kids",
            CakeCategory::Birthday => "birthday",
            CakeCategory::General => "general",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            CakeCategory::Graduation => "Graduation",
            CakeCategory::Wedding => "Wedding",
            CakeCategory::Kids => "Kids Corner",
            CakeCategory::Birthday => "Birthday",
            CakeCategory::General => "General",
        }
    }
}

impl fmt::Display for CakeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for CakeCategory {
    type Err = CommerceError;

    /// Accepts either the slug ("kids") or the display name ("Kids Corner").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        CakeCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == needle || c.display_name().to_lowercase() == needle)
            .ok_or_else(|| CommerceError::UnknownCategory(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_slug_and_display_name() {
        assert_eq!("wedding".parse::<CakeCategory>(), Ok(CakeCategory::Wedding));
        assert_eq!("Kids Corner".parse::<CakeCategory>(), Ok(CakeCategory::Kids));
        assert_eq!(" KIDS ".parse::<CakeCategory>(), Ok(CakeCategory::Kids));
    }

    #[test]
    fn test_parse_unknown() {
        assert!(matches!(
            "pastry".parse::<CakeCategory>(),
            Err(CommerceError::UnknownCategory(_))
        ));
    }
}
