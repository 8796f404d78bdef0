//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Home page
//! GET  /health                 - Health check
//!
//! # Catalog
//! GET  /catalog                - Filterable product grid (?categoria=token)
//! GET  /catalog/grid           - Grid fragment for filter swaps (HTMX)
//! GET  /products/{handle}/quick-view - Product modal fragment (HTMX)
//!
//! # Cart (HTMX fragments)
//! GET  /cart                   - Cart sidebar contents
//! POST /cart/add               - Add one unit (returns toast, triggers cart-updated)
//! POST /cart/increase          - Increase line quantity (returns cart_items fragment)
//! POST /cart/decrease          - Decrease line quantity, floored at 1
//! POST /cart/remove            - Remove line item
//! GET  /cart/count             - Cart count badge (fragment)
//!
//! # Checkout
//! GET  /checkout               - Order summary and payment form
//! POST /checkout               - Validate, simulate payment, confirm
//! ```

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod home;
pub mod products;

use axum::{
    Router,
    routing::{get, post},
};

use crate::middleware;
use crate::state::AppState;

/// Create the catalog routes router.
pub fn catalog_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(catalog::index))
        .route("/grid", get(catalog::grid))
}

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new().route("/{handle}/quick-view", get(products::quick_view))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/increase", post(cart::increase))
        .route("/decrease", post(cart::decrease))
        .route("/remove", post(cart::remove))
        .route("/count", get(cart::count))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Home page
        .route("/", get(home::home))
        // Catalog routes
        .nest("/catalog", catalog_routes())
        // Product routes
        .nest("/products", product_routes())
        // Cart routes
        .nest("/cart", cart_routes())
        // Checkout
        .route("/checkout", get(checkout::show).post(checkout::submit))
}

/// Build the full application with session layer and state applied.
///
/// Used by both the binary and the router-level tests.
pub fn app(state: AppState) -> Router {
    let session_layer = middleware::create_session_layer(state.config());

    Router::new()
        .route("/health", get(health))
        .merge(routes())
        .layer(session_layer)
        .with_state(state)
}

/// Liveness health check endpoint.
async fn health() -> &'static str {
    "ok"
}
