//! Integration tests for the Jiniso storefront.
//!
//! Tests drive the complete router in-process with
//! [`tower::ServiceExt::oneshot`]; no server or network is involved.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p jiniso-integration-tests
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! let mut app = TestApp::new();
//! app.login_customer().await;
//! let cart = app.get("/cart").await;
//! assert_eq!(cart.status, StatusCode::OK);
//! ```

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use secrecy::ExposeSecret;
use tower::ServiceExt;

use jiniso_storefront::config::StorefrontConfig;
use jiniso_storefront::middleware::session::SESSION_COOKIE_NAME;
use jiniso_storefront::state::AppState;

/// Seed used for every test catalog so product IDs and prices are stable.
pub const TEST_CATALOG_SEED: u64 = 42;

/// Client address sent with every request; the login limiter keys on it.
const TEST_CLIENT_IP: &str = "203.0.113.10";

/// A fully rendered response.
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub location: Option<String>,
    pub body: String,
}

impl TestResponse {
    /// Assert a 303 redirect and return its target.
    ///
    /// # Panics
    ///
    /// Panics if the response is not a See Other redirect.
    #[must_use]
    pub fn redirect_target(&self) -> &str {
        assert_eq!(self.status, StatusCode::SEE_OTHER, "body: {}", self.body);
        self.location.as_deref().unwrap_or_default()
    }
}

/// The storefront router plus one visitor's session cookie.
pub struct TestApp {
    state: AppState,
    router: Router,
    cookie: Option<String>,
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}

impl TestApp {
    /// Build the app with local defaults and a seeded catalog.
    #[must_use]
    pub fn new() -> Self {
        let config = StorefrontConfig {
            catalog_seed: Some(TEST_CATALOG_SEED),
            ..StorefrontConfig::default()
        };
        let state = AppState::new(config);
        Self {
            router: jiniso_storefront::app(state.clone()),
            state,
            cookie: None,
        }
    }

    #[must_use]
    pub const fn state(&self) -> &AppState {
        &self.state
    }

    /// Forget the session cookie, as a new browser would.
    pub fn clear_cookies(&mut self) {
        self.cookie = None;
    }

    pub async fn get(&mut self, uri: &str) -> TestResponse {
        self.send(Request::get(uri), Body::empty()).await
    }

    /// POST an url-encoded form.
    pub async fn post_form(&mut self, uri: &str, fields: &[(&str, &str)]) -> TestResponse {
        let body = url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(fields)
            .finish();
        let builder = Request::post(uri).header(
            header::CONTENT_TYPE,
            "application/x-www-form-urlencoded",
        );
        self.send(builder, Body::from(body)).await
    }

    /// Log in with the default customer account.
    pub async fn login_customer(&mut self) -> TestResponse {
        let config = StorefrontConfig::default();
        let password = config.demo_customer.password.expose_secret();
        self.post_form(
            "/auth/login",
            &[
                ("username", config.demo_customer.username.as_str()),
                ("password", password),
            ],
        )
        .await
    }

    /// Log in with the default admin account.
    pub async fn login_admin(&mut self) -> TestResponse {
        let config = StorefrontConfig::default();
        let password = config.demo_admin.password.expose_secret();
        self.post_form(
            "/auth/login",
            &[
                ("username", config.demo_admin.username.as_str()),
                ("password", password),
            ],
        )
        .await
    }

    async fn send(&mut self, builder: axum::http::request::Builder, body: Body) -> TestResponse {
        let mut builder = builder.header("x-forwarded-for", TEST_CLIENT_IP);
        if let Some(cookie) = &self.cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        let request = builder.body(body).unwrap_or_default();

        let response = match self.router.clone().oneshot(request).await {
            Ok(response) => response,
            Err(never) => match never {},
        };

        for value in response.headers().get_all(header::SET_COOKIE) {
            let Ok(value) = value.to_str() else { continue };
            self.remember_cookie(value);
        }

        let status = response.status();
        let location = response
            .headers()
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
            .map(ToString::to_string);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap_or_default();

        TestResponse {
            status,
            location,
            body: String::from_utf8_lossy(&bytes).into_owned(),
        }
    }

    fn remember_cookie(&mut self, set_cookie: &str) {
        let pair = set_cookie.split(';').next().unwrap_or_default().trim();
        let Some((name, value)) = pair.split_once('=') else {
            return;
        };
        if name != SESSION_COOKIE_NAME {
            return;
        }
        let removed = value.is_empty()
            || set_cookie
                .to_ascii_lowercase()
                .split(';')
                .any(|attr| attr.trim() == "max-age=0");
        self.cookie = (!removed).then(|| pair.to_string());
    }
}
