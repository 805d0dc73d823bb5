//! Cart store
//!
//! Per-session carts keyed by session token. Every operation takes an
//! already-validated session; validation happens before any mutation, so a
//! failed call leaves the cart untouched.

use dashmap::DashMap;

use solara_types::{CartEntry, ProductId};

use crate::catalog::ProductCatalog;
use crate::error::CartError;
use crate::session::Session;

/// Per-session cart storage
///
/// Carts are created lazily on first successful add; a session with no cart
/// reads as an empty one. Entries keep insertion order so responses are
/// stable, and each `(session, product)` pair appears at most once. All
/// mutation for one cart happens under a single map-entry guard, which is the
/// per-session mutual exclusion the store needs - there is no cross-session
/// contention.
#[derive(Debug, Default)]
pub struct CartStore {
    carts: DashMap<String, Vec<CartEntry>>,
}

impl CartStore {
    /// Create an empty cart store
    pub fn new() -> Self {
        Self::default()
    }

    /// The session's cart in insertion order; empty if unset
    pub fn get(&self, session: &Session) -> Vec<CartEntry> {
        self.carts
            .get(&session.token)
            .map(|cart| cart.value().clone())
            .unwrap_or_default()
    }

    /// Add a product to the cart with quantity one
    ///
    /// The product id must exist in the catalog; the check is existence-only
    /// and never inspects other payload fields. Adding an id already in the
    /// cart leaves its quantity unchanged - add only creates entries.
    pub fn add<C: ProductCatalog>(
        &self,
        session: &Session,
        product_id: Option<&str>,
        catalog: &C,
    ) -> Result<Vec<CartEntry>, CartError> {
        let raw_id = match product_id {
            Some(id) if !id.is_empty() => id,
            _ => return Err(CartError::MissingProduct),
        };

        let product_id =
            ProductId::parse(raw_id).map_err(|_| CartError::InvalidProduct)?;
        if catalog.find_product(&product_id).is_none() {
            tracing::debug!(product_id = %product_id, "add rejected, not in catalog");
            return Err(CartError::InvalidProduct);
        }

        let mut cart = self.carts.entry(session.token.clone()).or_default();
        if !cart.iter().any(|entry| entry.product_id == product_id) {
            cart.push(CartEntry::new(product_id));
        }
        Ok(cart.clone())
    }

    /// Set a product's quantity, inserting the entry if absent
    ///
    /// Upsert on purpose: an id not yet in the cart is added with the given
    /// quantity rather than erroring, and no catalog lookup happens here.
    /// The quantity arrives as the raw query value and must parse as an
    /// integer >= 1.
    pub fn set_quantity(
        &self,
        session: &Session,
        product_id: &ProductId,
        quantity: Option<&str>,
    ) -> Result<Vec<CartEntry>, CartError> {
        let quantity: i64 = quantity
            .ok_or(CartError::InvalidQuantity)?
            .parse()
            .map_err(|_| CartError::InvalidQuantity)?;
        if quantity < 1 {
            return Err(CartError::InvalidQuantity);
        }
        let quantity = quantity as u32;

        let mut cart = self.carts.entry(session.token.clone()).or_default();
        match cart.iter_mut().find(|entry| entry.product_id == *product_id) {
            Some(entry) => entry.quantity = quantity,
            None => cart.push(CartEntry {
                product_id: product_id.clone(),
                quantity,
            }),
        }
        Ok(cart.clone())
    }

    /// Remove a product from the cart
    ///
    /// The id must currently be in the cart; remaining entries keep their
    /// original relative order.
    pub fn remove(
        &self,
        session: &Session,
        product_id: &ProductId,
    ) -> Result<Vec<CartEntry>, CartError> {
        let mut cart = self
            .carts
            .get_mut(&session.token)
            .ok_or(CartError::NotInCart)?;

        let position = cart
            .iter()
            .position(|entry| entry.product_id == *product_id)
            .ok_or(CartError::NotInCart)?;
        cart.remove(position);
        Ok(cart.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::InMemoryCatalog;
    use chrono::Utc;
    use solara_types::{Brand, Product, UserId};

    fn session(token: &str) -> Session {
        Session {
            token: token.to_string(),
            user_id: UserId::new("yellowleopard753"),
            created_at: Utc::now(),
        }
    }

    fn catalog() -> InMemoryCatalog {
        let product = |id: &str| Product {
            id: ProductId::parse(id).unwrap(),
            category_id: "1".to_string(),
            name: format!("Product {id}"),
            description: String::new(),
            price: 100,
            image_urls: vec![],
        };
        InMemoryCatalog::from_parts(
            vec![Brand {
                id: "1".to_string(),
                name: "Oakley".to_string(),
            }],
            vec![product("1"), product("2"), product("10")],
        )
    }

    fn pid(id: &str) -> ProductId {
        ProductId::parse(id).unwrap()
    }

    #[test]
    fn test_fresh_session_reads_empty() {
        let store = CartStore::new();
        assert!(store.get(&session("t1")).is_empty());
    }

    #[test]
    fn test_add_creates_entry_with_quantity_one() {
        let store = CartStore::new();
        let cart = store.add(&session("t1"), Some("10"), &catalog()).unwrap();
        assert_eq!(cart, vec![CartEntry::new(pid("10"))]);
    }

    #[test]
    fn test_add_twice_does_not_duplicate() {
        let store = CartStore::new();
        let s = session("t1");
        let catalog = catalog();
        store.add(&s, Some("10"), &catalog).unwrap();
        let cart = store.add(&s, Some("10"), &catalog).unwrap();
        assert_eq!(cart.len(), 1);
        assert_eq!(cart[0].quantity, 1);
    }

    #[test]
    fn test_add_leaves_updated_quantity_alone() {
        let store = CartStore::new();
        let s = session("t1");
        let catalog = catalog();
        store.add(&s, Some("10"), &catalog).unwrap();
        store.set_quantity(&s, &pid("10"), Some("3")).unwrap();

        let cart = store.add(&s, Some("10"), &catalog).unwrap();
        assert_eq!(cart[0].quantity, 3);
    }

    #[test]
    fn test_add_rejects_missing_and_unknown_products() {
        let store = CartStore::new();
        let s = session("t1");
        let catalog = catalog();
        assert_eq!(
            store.add(&s, None, &catalog),
            Err(CartError::MissingProduct)
        );
        assert_eq!(
            store.add(&s, Some("99"), &catalog),
            Err(CartError::InvalidProduct)
        );
        assert!(store.get(&s).is_empty());
    }

    #[test]
    fn test_set_quantity_upserts() {
        let store = CartStore::new();
        let s = session("t1");

        // Absent id: inserted with the exact requested quantity
        let cart = store.set_quantity(&s, &pid("10"), Some("3")).unwrap();
        assert_eq!(cart, vec![CartEntry { product_id: pid("10"), quantity: 3 }]);

        // Present id: only that entry's quantity changes
        store.set_quantity(&s, &pid("1"), Some("6")).unwrap();
        let cart = store.set_quantity(&s, &pid("10"), Some("5")).unwrap();
        assert_eq!(cart.len(), 2);
        assert_eq!(cart[0].quantity, 5);
        assert_eq!(cart[1].quantity, 6);
    }

    #[test]
    fn test_set_quantity_rejects_bad_quantities() {
        let store = CartStore::new();
        let s = session("t1");
        for bad in [None, Some("-3"), Some("0"), Some("three"), Some("1.5")] {
            assert_eq!(
                store.set_quantity(&s, &pid("10"), bad),
                Err(CartError::InvalidQuantity)
            );
        }
        // Failed calls never mutate
        assert!(store.get(&s).is_empty());
    }

    #[test]
    fn test_remove_preserves_relative_order() {
        let store = CartStore::new();
        let s = session("t1");
        store.set_quantity(&s, &pid("1"), Some("1")).unwrap();
        store.set_quantity(&s, &pid("2"), Some("2")).unwrap();
        store.set_quantity(&s, &pid("10"), Some("3")).unwrap();

        let cart = store.remove(&s, &pid("2")).unwrap();
        let ids: Vec<&str> = cart.iter().map(|e| e.product_id.as_str()).collect();
        assert_eq!(ids, vec!["1", "10"]);
    }

    #[test]
    fn test_remove_twice_is_not_in_cart() {
        let store = CartStore::new();
        let s = session("t1");
        store.set_quantity(&s, &pid("10"), Some("1")).unwrap();
        store.remove(&s, &pid("10")).unwrap();
        assert_eq!(store.remove(&s, &pid("10")), Err(CartError::NotInCart));
    }

    #[test]
    fn test_remove_from_unset_cart_is_not_in_cart() {
        let store = CartStore::new();
        assert_eq!(
            store.remove(&session("t1"), &pid("2")),
            Err(CartError::NotInCart)
        );
    }

    #[test]
    fn test_carts_are_isolated_per_session() {
        let store = CartStore::new();
        let catalog = catalog();
        let a = session("aaaa");
        let b = session("bbbb");
        store.add(&a, Some("1"), &catalog).unwrap();
        assert!(store.get(&b).is_empty());
        store.add(&b, Some("10"), &catalog).unwrap();
        assert_eq!(store.get(&a)[0].product_id, pid("1"));
        assert_eq!(store.get(&b)[0].product_id, pid("10"));
    }
}
