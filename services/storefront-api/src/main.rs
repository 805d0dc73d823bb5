//! Solara Storefront API
//!
//! Product-catalog microservice with session-based authentication and
//! per-session shopping carts. All state is in-memory: sessions and carts
//! start empty and live until the process exits.

use axum::routing::{get, post};
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use solara_store_core::{
    InMemoryCatalog, InMemoryCredentials, ProductCatalog, RandomTokenGenerator, StoreService,
};

mod config;
mod error;
mod extractors;
mod handlers;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    tracing::info!("Starting Solara Storefront API");

    let config = Config::from_env()?;
    let http_port = config.http_port;

    // Load the seeded catalog and credential fixtures
    let catalog = InMemoryCatalog::from_json_files(config.brands_path(), config.products_path())?;
    let credentials = InMemoryCredentials::from_json_file(config.users_path())?;
    tracing::info!(
        brands = catalog.brands().len(),
        products = catalog.len(),
        users = credentials.len(),
        "Fixtures loaded"
    );

    let store = StoreService::new(
        Arc::new(catalog),
        Arc::new(credentials),
        RandomTokenGenerator,
    );
    let app = router(AppState::new(store, config));

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], http_port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Build the API router
fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/api/login", post(handlers::login))
        .route(
            "/api/me/cart",
            get(handlers::get_cart).post(handlers::add_to_cart),
        )
        .route(
            "/api/me/cart/:product_id",
            post(handlers::update_quantity).delete(handlers::remove_from_cart),
        )
        .route("/api/brands", get(handlers::list_brands))
        .route("/api/brands/:brand_id/products", get(handlers::brand_products))
        .route("/api/products", get(handlers::list_products))
        .with_state(state)
}
