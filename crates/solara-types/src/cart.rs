//! Cart types

use serde::{Deserialize, Serialize};

use crate::product::ProductId;

/// A single cart line: one product and how many of it
///
/// A cart holds at most one entry per product id; quantity is always >= 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartEntry {
    pub product_id: ProductId,
    pub quantity: u32,
}

impl CartEntry {
    /// Create an entry with the default quantity of one
    pub fn new(product_id: ProductId) -> Self {
        Self {
            product_id,
            quantity: 1,
        }
    }
}
