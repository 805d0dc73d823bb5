//! Catalog handlers
//!
//! Read-only listing endpoints over the seeded catalog. No session required.

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;

use solara_types::{Brand, Product};

use crate::state::AppState;

/// Query parameters for the products listing
#[derive(Debug, Deserialize)]
pub struct ProductsQuery {
    /// Accepted for API compatibility; the reference server returns the full
    /// catalog regardless of keywords, and so does this one.
    #[allow(dead_code)]
    pub keywords: Option<String>,
}

/// GET /api/brands
pub async fn list_brands(State(state): State<AppState>) -> Json<Vec<Brand>> {
    Json(state.store.brands())
}

/// GET /api/brands/:id/products
pub async fn brand_products(
    State(state): State<AppState>,
    Path(brand_id): Path<String>,
) -> Json<Vec<Product>> {
    Json(state.store.brand_products(&brand_id))
}

/// GET /api/products
pub async fn list_products(
    State(state): State<AppState>,
    Query(_query): Query<ProductsQuery>,
) -> Json<Vec<Product>> {
    Json(state.store.products())
}
