//! Catalog product and brand types

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unique product identifier
///
/// Product ids on the wire are short decimal strings ("1", "10"). The
/// constructor enforces that shape so path parameters like `1z` are rejected
/// before any store lookup happens.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

/// Error returned when a string is not a well-formed product id
#[derive(Debug, Error, PartialEq, Eq)]
#[error("malformed product id: {0:?}")]
pub struct ParseProductIdError(pub String);

impl ProductId {
    /// Parse a product id from a raw string
    ///
    /// Accepts non-empty ASCII-digit strings only.
    pub fn parse(s: &str) -> Result<Self, ParseProductIdError> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseProductIdError(s.to_string()));
        }
        Ok(Self(s.to_string()))
    }

    /// The id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A catalog product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    /// Brand the product belongs to (brands double as categories)
    pub category_id: String,
    pub name: String,
    pub description: String,
    pub price: u32,
    pub image_urls: Vec<String>,
}

/// A catalog brand
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Brand {
    pub id: String,
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_id_accepts_digits() {
        assert_eq!(ProductId::parse("1").unwrap().as_str(), "1");
        assert_eq!(ProductId::parse("10").unwrap().as_str(), "10");
        assert_eq!(ProductId::parse("0042").unwrap().as_str(), "0042");
    }

    #[test]
    fn test_product_id_rejects_malformed() {
        assert!(ProductId::parse("").is_err());
        assert!(ProductId::parse("1z").is_err());
        assert!(ProductId::parse("z1").is_err());
        assert!(ProductId::parse("-1").is_err());
        assert!(ProductId::parse("1.5").is_err());
        assert!(ProductId::parse("١٢").is_err()); // non-ASCII digits
    }

    #[test]
    fn test_product_serializes_camel_case() {
        let product = Product {
            id: ProductId::parse("10").unwrap(),
            category_id: "5".to_string(),
            name: "Peanut Butter".to_string(),
            description: "The stickiest glasses in the world".to_string(),
            price: 103,
            image_urls: vec!["https://example.com/a.jpg".to_string()],
        };

        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["id"], "10");
        assert_eq!(json["categoryId"], "5");
        assert_eq!(json["imageUrls"][0], "https://example.com/a.jpg");
    }
}
