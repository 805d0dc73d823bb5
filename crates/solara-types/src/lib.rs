//! Solara Types - Shared domain types
//!
//! This crate contains domain types used across the Solara storefront:
//! - Catalog products and brands
//! - User identity and credentials
//! - Cart entries

pub mod cart;
pub mod product;
pub mod user;

pub use cart::*;
pub use product::*;
pub use user::*;
