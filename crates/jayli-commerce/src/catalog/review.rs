//! Customer reviews shown alongside the menu.

use crate::ids::ReviewId;
use serde::{Deserialize, Serialize};

/// A published customer review.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Review {
    pub id: ReviewId,
    pub customer_name: String,
    /// Stars out of 5.
    pub rating: u8,
    pub comment: String,
    /// ISO date (YYYY-MM-DD).
    pub date: String,
}

impl Review {
    /// Star string for terminal display, e.g. "★★★★☆".
    pub fn stars(&self) -> String {
        let filled = self.rating.min(5) as usize;
        format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stars() {
        let review = Review {
            id: ReviewId::new("r1"),
            customer_name: "Otieno J.".to_string(),
            rating: 4,
            comment: String::new(),
            date: "2023-12-02".to_string(),
        };
        assert_eq!(review.stars(), "★★★★☆");
    }
}
