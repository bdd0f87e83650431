//! Product entity for the storefront catalog.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;

/// Shop category a product is listed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Flowers,
    Nonflower,
    Bulk,
}

impl Category {
    /// Database representation (`products.category` column).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Flowers => "flowers",
            Self::Nonflower => "nonflower",
            Self::Bulk => "bulk",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "flowers" => Ok(Self::Flowers),
            "nonflower" => Ok(Self::Nonflower),
            "bulk" => Ok(Self::Bulk),
            other => Err(format!("unknown category '{other}'")),
        }
    }
}

/// A catalog product with its media URLs.
#[derive(Debug, Clone)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub category: Category,
    pub price: Decimal,
    /// Star rating shown on product cards, 0..=10.
    pub rate: i32,
    pub flavour: String,
    /// Durable media URLs; always at least one.
    pub images: Vec<String>,
    pub video: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input data for creating a new product.
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub category: Category,
    pub price: Decimal,
    pub rate: i32,
    pub flavour: String,
    pub images: Vec<String>,
    pub video: Option<String>,
}

/// Partial update for an existing product.
///
/// `None` fields are left unchanged.
/// `video: Some(None)` clears the video; `Some(Some(url))` replaces it.
#[derive(Debug, Clone, Default)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub category: Option<Category>,
    pub price: Option<Decimal>,
    pub rate: Option<i32>,
    pub flavour: Option<String>,
    pub images: Option<Vec<String>>,
    pub video: Option<Option<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_round_trip() {
        for category in [Category::Flowers, Category::Nonflower, Category::Bulk] {
            assert_eq!(category.as_str().parse::<Category>().unwrap(), category);
        }
    }

    #[test]
    fn test_category_rejects_unknown() {
        assert!("gadgets".parse::<Category>().is_err());
    }

    #[test]
    fn test_category_serde_lowercase() {
        assert_eq!(
            serde_json::to_string(&Category::Nonflower).unwrap(),
            "\"nonflower\""
        );
        let parsed: Category = serde_json::from_str("\"bulk\"").unwrap();
        assert_eq!(parsed, Category::Bulk);
    }

    #[test]
    fn test_patch_default_changes_nothing() {
        let patch = ProductPatch::default();
        assert!(patch.name.is_none());
        assert!(patch.video.is_none());
    }
}
