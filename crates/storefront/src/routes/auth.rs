//! Authentication route handlers.
//!
//! Login checks the form against the two demo accounts and seeds the session
//! with that account's fixture data. Logout flushes the whole session.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Query, State},
    response::{IntoResponse, Redirect},
};
use serde::Deserialize;
use tracing::instrument;

use crate::error::{Result, add_breadcrumb, clear_sentry_user, set_sentry_user};
use crate::filters;
use crate::middleware::Shopper;
use crate::page::PageContext;
use crate::services::auth::{AuthService, DemoAccount};
use crate::state::AppState;

// =============================================================================
// Form Types
// =============================================================================

/// Login form data.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

/// Query parameters for error display.
#[derive(Debug, Default, Deserialize)]
pub struct MessageQuery {
    pub error: Option<String>,
}

// =============================================================================
// Templates
// =============================================================================

/// Login page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/login.html")]
pub struct LoginTemplate {
    pub page: PageContext,
    pub error: Option<&'static str>,
}

/// Translation key for an error code carried in the query string.
fn error_key(code: &str) -> Option<&'static str> {
    match code {
        "credentials" => Some("login_error"),
        "login_required" => Some("login_required"),
        _ => None,
    }
}

/// Where a freshly logged-in account lands.
const fn landing_page(account: DemoAccount) -> &'static str {
    match account {
        DemoAccount::Customer => "/",
        DemoAccount::Admin => "/admin",
    }
}

// =============================================================================
// Routes
// =============================================================================

/// Display the login page.
#[instrument(skip_all)]
pub async fn login_page(shopper: Shopper, Query(query): Query<MessageQuery>) -> impl IntoResponse {
    let page = shopper.page();
    let error = query
        .error
        .as_deref()
        .and_then(error_key)
        .map(|key| page.translator().t(key));

    LoginTemplate { page, error }
}

/// Handle login form submission.
#[instrument(skip_all, fields(username = %form.username.trim()))]
pub async fn login(
    State(state): State<AppState>,
    mut shopper: Shopper,
    Form(form): Form<LoginForm>,
) -> Result<Redirect> {
    state.simulate_latency().await;

    let account = match AuthService::new(state.config()).login(&form.username, &form.password) {
        Ok(account) => account,
        Err(e) => {
            tracing::info!(error = %e, "Login rejected");
            return Ok(Redirect::to("/auth/login?error=credentials"));
        }
    };

    {
        let mut rng = rand::rng();
        shopper.state.login(account, state.catalog(), &mut rng);
    }

    // Prevent session fixation
    shopper.session().cycle_id().await?;
    shopper.save().await?;

    if let Some(user) = shopper.user() {
        set_sentry_user(&user.id, Some(&user.email));
    }
    add_breadcrumb("auth", "Logged in", Some(&[("account", account.as_str())]));
    tracing::info!(account = account.as_str(), "Login succeeded");

    Ok(Redirect::to(landing_page(account)))
}

/// Handle logout.
#[instrument(skip_all)]
pub async fn logout(mut shopper: Shopper) -> Result<Redirect> {
    shopper.clear().await?;
    clear_sentry_user();
    add_breadcrumb("auth", "Logged out", None);

    Ok(Redirect::to("/"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_map_to_messages() {
        assert_eq!(error_key("credentials"), Some("login_error"));
        assert_eq!(error_key("login_required"), Some("login_required"));
        assert_eq!(error_key("<script>"), None);
    }

    #[test]
    fn test_landing_pages() {
        assert_eq!(landing_page(DemoAccount::Customer), "/");
        assert_eq!(landing_page(DemoAccount::Admin), "/admin");
    }
}
