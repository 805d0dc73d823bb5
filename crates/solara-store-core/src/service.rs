//! Store service - ties together credentials, sessions, carts, and catalog

use std::sync::Arc;

use solara_types::{Brand, CartEntry, Product, ProductId};

use crate::{
    cart::CartStore,
    catalog::ProductCatalog,
    credentials::CredentialStore,
    error::{AuthError, CartError},
    session::{Session, SessionManager},
    token::TokenGenerator,
};

/// Storefront service
///
/// Single owner of all mutable state (sessions and carts), explicitly
/// constructed at startup and handed to the HTTP layer. Every cart call goes
/// through `authorize` first; only a validated [`Session`] reaches the cart
/// store.
pub struct StoreService<C: ProductCatalog, U: CredentialStore> {
    catalog: Arc<C>,
    sessions: SessionManager<U>,
    carts: CartStore,
}

impl<C: ProductCatalog, U: CredentialStore> StoreService<C, U> {
    /// Create a new service with empty session and cart state
    pub fn new(
        catalog: Arc<C>,
        credentials: Arc<U>,
        token_gen: impl TokenGenerator + 'static,
    ) -> Self {
        Self {
            catalog,
            sessions: SessionManager::new(credentials, token_gen),
            carts: CartStore::new(),
        }
    }

    // =========================================================================
    // Sessions
    // =========================================================================

    /// Authenticate and issue a session token
    pub fn login(
        &self,
        email: Option<&str>,
        password: Option<&str>,
    ) -> Result<Session, AuthError> {
        self.sessions.authenticate(email, password)
    }

    /// Resolve a request token to its session
    pub fn authorize(&self, token: Option<&str>) -> Result<Session, AuthError> {
        self.sessions.validate(token)
    }

    /// Number of active sessions
    pub fn session_count(&self) -> usize {
        self.sessions.session_count()
    }

    // =========================================================================
    // Cart
    // =========================================================================

    /// The session's cart
    pub fn cart(&self, session: &Session) -> Vec<CartEntry> {
        self.carts.get(session)
    }

    /// Add a product (by body id) to the session's cart
    pub fn add_to_cart(
        &self,
        session: &Session,
        product_id: Option<&str>,
    ) -> Result<Vec<CartEntry>, CartError> {
        self.carts.add(session, product_id, self.catalog.as_ref())
    }

    /// Set the quantity for a product, inserting it if absent
    ///
    /// `raw_id` is the unparsed path segment; a malformed shape is rejected
    /// here, before any quantity or cart processing.
    pub fn update_quantity(
        &self,
        session: &Session,
        raw_id: &str,
        quantity: Option<&str>,
    ) -> Result<Vec<CartEntry>, CartError> {
        let product_id = Self::parse_id(raw_id)?;
        self.carts.set_quantity(session, &product_id, quantity)
    }

    /// Remove a product (by path id) from the session's cart
    pub fn remove_from_cart(
        &self,
        session: &Session,
        raw_id: &str,
    ) -> Result<Vec<CartEntry>, CartError> {
        let product_id = Self::parse_id(raw_id)?;
        self.carts.remove(session, &product_id)
    }

    fn parse_id(raw_id: &str) -> Result<ProductId, CartError> {
        ProductId::parse(raw_id).map_err(|err| {
            tracing::debug!(%err, "rejecting malformed product id");
            CartError::MalformedProductId
        })
    }

    // =========================================================================
    // Catalog
    // =========================================================================

    /// All brands
    pub fn brands(&self) -> Vec<Brand> {
        self.catalog.brands()
    }

    /// Products for one brand; empty for unknown brand ids
    pub fn brand_products(&self, brand_id: &str) -> Vec<Product> {
        self.catalog.find_by_brand(brand_id)
    }

    /// The full catalog
    ///
    /// The keyword search the public endpoint advertises is not applied;
    /// callers always receive every product, matching the reference server.
    pub fn products(&self) -> Vec<Product> {
        self.catalog.products()
    }
}

impl<C: ProductCatalog, U: CredentialStore> std::fmt::Debug for StoreService<C, U> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoreService")
            .field("sessions", &self.sessions)
            .finish_non_exhaustive()
    }
}
