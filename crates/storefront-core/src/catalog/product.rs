//! Product records.

use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Highest rating a product can carry.
pub const MAX_RATING: f32 = 5.0;

/// Normalize a free-text query for [`Product::matches_text`].
///
/// The term is trimmed and lowercased. A blank term yields `None`, meaning
/// no text restriction.
pub fn search_needle(query: &str) -> Option<String> {
    let term = query.trim();
    (!term.is_empty()).then(|| term.to_lowercase())
}

/// A product in the catalog.
///
/// Products are created once when the catalog is loaded and are never
/// mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Unit price.
    pub price: Money,
    /// Image URI.
    pub image: String,
    /// Category name (e.g. "Footwear").
    pub category: String,
    /// Brand name.
    pub brand: String,
    /// Average rating, 0.0 to 5.0.
    pub rating: f32,
    /// Long-form description.
    pub description: String,
}

impl Product {
    /// Create a product, clamping the price to non-negative and the rating to
    /// the 0-5 range.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        price: Money,
        image: impl Into<String>,
        category: impl Into<String>,
        brand: impl Into<String>,
        rating: f32,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price: price.non_negative(),
            image: image.into(),
            category: category.into(),
            brand: brand.into(),
            rating: clamp_rating(rating),
            description: description.into(),
        }
    }

    /// Case-insensitive substring match against name, description, category
    /// and brand.
    ///
    /// `needle` must already be lowercase; callers lowercase once per query
    /// rather than once per product.
    pub fn matches_text(&self, needle: &str) -> bool {
        [
            &self.name,
            &self.description,
            &self.category,
            &self.brand,
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
    }

    /// Number of filled stars when rendering the rating out of five.
    ///
    /// A star is filled when its position is at or below the rating, so 4.5
    /// shows four filled stars.
    pub fn filled_stars(&self) -> u8 {
        self.rating.floor().clamp(0.0, MAX_RATING) as u8
    }
}

fn clamp_rating(rating: f32) -> f32 {
    if rating.is_nan() {
        0.0
    } else {
        rating.clamp(0.0, MAX_RATING)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headphones() -> Product {
        Product::new(
            "wireless-headphones-001",
            "Premium Wireless Headphones",
            Money::usd(19999),
            "https://example.com/headphones.jpg",
            "Electronics",
            "SoundWave",
            4.8,
            "Immersive sound with active noise cancellation.",
        )
    }

    #[test]
    fn test_matches_text_across_fields() {
        let p = headphones();
        assert!(p.matches_text("wireless"));
        assert!(p.matches_text("noise"));
        assert!(p.matches_text("electronics"));
        assert!(p.matches_text("soundwave"));
        assert!(!p.matches_text("shoes"));
    }

    #[test]
    fn test_search_needle() {
        assert_eq!(search_needle("  Running ").as_deref(), Some("running"));
        assert_eq!(search_needle("   "), None);
        assert_eq!(search_needle(""), None);
    }

    #[test]
    fn test_new_clamps_inputs() {
        let p = Product::new("x", "X", Money::usd(-5), "", "C", "B", 7.5, "");
        assert_eq!(p.price, Money::usd(0));
        assert_eq!(p.rating, 5.0);

        let p = Product::new("y", "Y", Money::usd(100), "", "C", "B", f32::NAN, "");
        assert_eq!(p.rating, 0.0);
    }

    #[test]
    fn test_filled_stars() {
        assert_eq!(headphones().filled_stars(), 4);
        let mut p = headphones();
        p.rating = 4.0;
        assert_eq!(p.filled_stars(), 4);
        p.rating = 0.0;
        assert_eq!(p.filled_stars(), 0);
    }
}
