//! HTTP handlers

mod auth;
mod cart;
mod catalog;
mod health;

pub use auth::login;
pub use cart::{add_to_cart, get_cart, remove_from_cart, update_quantity};
pub use catalog::{brand_products, list_brands, list_products};
pub use health::health;
