//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                         - Home page
//! GET  /health                   - Liveness check
//! GET  /health/ready             - Readiness check
//!
//! # Products
//! GET  /products                 - Product listing (?category=&type=&q=)
//! GET  /products/{id}            - Product detail
//! POST /products/{id}/cart       - Add to cart
//! POST /products/{id}/reserve    - Reserve at a store
//!
//! # Cart and orders
//! GET  /cart                     - Cart page
//! POST /cart/remove              - Remove a line
//! POST /checkout                 - Place an order from the cart
//! GET  /orders                   - Order history (?q=)
//! GET  /orders/{id}              - Order detail with timelines
//!
//! # Account (requires login)
//! GET  /account                  - Profile, reservations, journey timeline
//! GET  /reservation-confirmation - Latest reservation
//!
//! # Information
//! GET  /store-locator            - Stores
//! GET  /help                     - FAQ
//! GET  /chat                     - Concierge conversation
//! POST /chat                     - Send a message
//! POST /preferences/language     - Switch language
//!
//! # Auth
//! GET  /auth/login               - Login page
//! POST /auth/login               - Login action (rate limited)
//! POST /auth/logout              - Logout action
//!
//! # Admin
//! GET  /admin                    - Dashboard (?tab=&q=&period=&logs=)
//! ```

pub mod account;
pub mod admin;
pub mod auth;
pub mod cart;
pub mod chat;
pub mod home;
pub mod orders;
pub mod pages;
pub mod preferences;
pub mod products;

use axum::{
    Router,
    extract::State,
    http::StatusCode,
    middleware::from_fn,
    routing::{get, post},
};
use tower_http::services::ServeDir;
use tower_http::trace::{DefaultOnResponse, OnResponse, TraceLayer};
use tracing::Span;

use crate::middleware::{
    auth_rate_limiter, create_session_layer, csp_nonce_middleware, request_id_middleware,
    security_headers_middleware,
};
use crate::state::AppState;

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", get(auth::login_page))
        .route("/login", post(auth::login).layer(auth_rate_limiter()))
        .route("/logout", post(auth::logout))
}

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::index))
        .route("/{id}", get(products::show))
        .route("/{id}/cart", post(products::add_to_cart))
        .route("/{id}/reserve", post(products::reserve))
}

/// Create the order routes router.
pub fn order_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(orders::index))
        .route("/{id}", get(orders::show))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Home page
        .route("/", get(home::home))
        // Product routes
        .nest("/products", product_routes())
        // Cart and checkout
        .route("/cart", get(cart::show))
        .route("/cart/remove", post(cart::remove))
        .route("/checkout", post(cart::checkout))
        // Orders
        .nest("/orders", order_routes())
        // Account
        .route("/account", get(account::index))
        .route(
            "/reservation-confirmation",
            get(account::reservation_confirmation),
        )
        // Information pages
        .route("/store-locator", get(pages::store_locator))
        .route("/help", get(pages::help))
        .route("/chat", get(chat::show).post(chat::send))
        .route("/preferences/language", post(preferences::set_language))
        // Auth routes
        .nest("/auth", auth_routes())
        // Admin dashboard
        .route("/admin", get(admin::dashboard))
}

/// Build the complete application with every middleware layer.
pub fn app(state: AppState) -> Router {
    let session_layer = create_session_layer(state.config());
    let static_dir = ServeDir::new(&state.config().static_dir);

    Router::new()
        .route("/health", get(health))
        .route("/health/ready", get(readiness))
        .merge(routes())
        .nest_service("/static", static_dir)
        .fallback(pages::not_found)
        .layer(session_layer)
        .layer(from_fn(security_headers_middleware))
        .layer(from_fn(csp_nonce_middleware))
        .layer(from_fn(request_id_middleware))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        uri = %request.uri(),
                        request_id = tracing::field::Empty,
                        status = tracing::field::Empty,
                        latency_ms = tracing::field::Empty,
                    )
                })
                .on_response(
                    |response: &axum::http::Response<_>,
                     latency: std::time::Duration,
                     span: &Span| {
                        span.record("status", response.status().as_u16());
                        span.record(
                            "latency_ms",
                            u64::try_from(latency.as_millis()).unwrap_or(u64::MAX),
                        );
                        DefaultOnResponse::default().on_response(response, latency, span);
                    },
                ),
        )
        .with_state(state)
        // Sentry layers (outermost for full request coverage)
        .layer(sentry_tower::NewSentryLayer::new_from_top())
        .layer(sentry_tower::SentryHttpLayer::new().enable_transaction())
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running.
async fn health() -> &'static str {
    "ok"
}

/// Readiness health check endpoint.
///
/// Ready once the catalog has been generated.
async fn readiness(State(state): State<AppState>) -> StatusCode {
    if state.catalog().products().is_empty() {
        StatusCode::SERVICE_UNAVAILABLE
    } else {
        StatusCode::OK
    }
}
