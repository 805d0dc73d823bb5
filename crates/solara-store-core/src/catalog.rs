//! Product catalog
//!
//! Read-only store of brands and products, loaded from the seeded fixtures
//! at startup. The cart only ever asks it one question - does this product id
//! exist - but the catalog also backs the public listing endpoints.

use std::collections::HashMap;
use std::path::Path;

use solara_types::{Brand, Product, ProductId};

use crate::error::DataError;

/// Read-only product and brand lookup
pub trait ProductCatalog: Send + Sync {
    /// Find a product by exact id
    fn find_product(&self, id: &ProductId) -> Option<Product>;

    /// All products for a brand, in catalog order; empty for unknown brands
    fn find_by_brand(&self, brand_id: &str) -> Vec<Product>;

    /// All brands, in catalog order
    fn brands(&self) -> Vec<Brand>;

    /// All products, in catalog order
    fn products(&self) -> Vec<Product>;
}

/// In-memory catalog backed by the brands and products fixtures
#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    brands: Vec<Brand>,
    products: Vec<Product>,
    by_id: HashMap<ProductId, usize>,
}

impl InMemoryCatalog {
    /// Build a catalog from already-loaded records
    pub fn from_parts(brands: Vec<Brand>, products: Vec<Product>) -> Self {
        let by_id = products
            .iter()
            .enumerate()
            .map(|(idx, product)| (product.id.clone(), idx))
            .collect();
        Self {
            brands,
            products,
            by_id,
        }
    }

    /// Load a catalog from JSON fixture files (arrays of brands and products)
    pub fn from_json_files(
        brands_path: impl AsRef<Path>,
        products_path: impl AsRef<Path>,
    ) -> Result<Self, DataError> {
        let brands: Vec<Brand> = serde_json::from_str(&std::fs::read_to_string(brands_path)?)?;
        let products: Vec<Product> =
            serde_json::from_str(&std::fs::read_to_string(products_path)?)?;
        Ok(Self::from_parts(brands, products))
    }

    /// Number of loaded products
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl ProductCatalog for InMemoryCatalog {
    fn find_product(&self, id: &ProductId) -> Option<Product> {
        self.by_id.get(id).map(|&idx| self.products[idx].clone())
    }

    fn find_by_brand(&self, brand_id: &str) -> Vec<Product> {
        self.products
            .iter()
            .filter(|product| product.category_id == brand_id)
            .cloned()
            .collect()
    }

    fn brands(&self) -> Vec<Brand> {
        self.brands.clone()
    }

    fn products(&self) -> Vec<Product> {
        self.products.clone()
    }
}
