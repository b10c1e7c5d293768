//! Shopper extractors.
//!
//! [`Shopper`] loads the visitor's state from the session for any handler.
//! [`RequireLogin`] additionally sends logged-out visitors to the login page.

use axum::{extract::FromRequestParts, http::request::Parts};
use tower_sessions::Session;

use crate::error::AppError;
use crate::models::User;
use crate::page::PageContext;
use crate::services::shopper::{ShopperError, ShopperState};

use super::csp::CspNonce;

/// The current visitor, logged in or not.
///
/// Mutate `state` and call [`Shopper::save`] to persist the change.
///
/// # Example
///
/// ```rust,ignore
/// async fn handler(mut shopper: Shopper) -> Result<Redirect> {
///     shopper.state.set_language(Language::English);
///     shopper.save().await?;
///     Ok(Redirect::to("/"))
/// }
/// ```
pub struct Shopper {
    pub state: ShopperState,
    session: Session,
    nonce: CspNonce,
    path: String,
}

impl Shopper {
    /// Layout context for rendering a page.
    #[must_use]
    pub fn page(&self) -> PageContext {
        PageContext::new(&self.state, &self.nonce, &self.path)
    }

    #[must_use]
    pub const fn user(&self) -> Option<&User> {
        self.state.user.as_ref()
    }

    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Persist `state` back to the session.
    ///
    /// # Errors
    ///
    /// Returns an error if the session store fails.
    pub async fn save(&self) -> Result<(), AppError> {
        self.state.save(&self.session).await?;
        Ok(())
    }

    /// Forget everything about this visitor and reset in-memory state.
    ///
    /// # Errors
    ///
    /// Returns an error if the session store fails.
    pub async fn clear(&mut self) -> Result<(), AppError> {
        self.state.logout();
        ShopperState::clear(&self.session).await?;
        Ok(())
    }
}

impl<S> FromRequestParts<S> for Shopper
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // Get the session from extensions (set by SessionManagerLayer)
        let session = parts
            .extensions
            .get::<Session>()
            .cloned()
            .ok_or_else(|| AppError::Internal("session layer missing".to_string()))?;

        let state = ShopperState::load(&session).await?;
        let path = parts
            .uri
            .path_and_query()
            .map_or_else(|| parts.uri.path().to_string(), |pq| pq.as_str().to_string());

        Ok(Self {
            state,
            session,
            nonce: CspNonce::from_parts(parts),
            path,
        })
    }
}

/// A visitor who must be logged in.
///
/// Logged-out visitors are redirected to `/auth/login?error=login_required`.
pub struct RequireLogin(pub Shopper);

impl RequireLogin {
    /// The logged-in user.
    ///
    /// # Errors
    ///
    /// Only fails if the user was removed after extraction.
    pub fn user(&self) -> Result<&User, AppError> {
        self.0
            .user()
            .ok_or(AppError::Shopper(ShopperError::NotLoggedIn))
    }
}

impl<S> FromRequestParts<S> for RequireLogin
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let shopper = Shopper::from_request_parts(parts, state).await?;
        if shopper.state.is_logged_in() {
            Ok(Self(shopper))
        } else {
            Err(ShopperError::NotLoggedIn.into())
        }
    }
}
