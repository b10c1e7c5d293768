//! Authentication service.
//!
//! The storefront has exactly two accounts, configured in
//! [`StorefrontConfig`]. Logging in is a credential match against them.

mod error;

pub use error::AuthError;

use crate::config::StorefrontConfig;

/// Which seeded account a successful login opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemoAccount {
    Customer,
    Admin,
}

impl DemoAccount {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Customer => "customer",
            Self::Admin => "admin",
        }
    }
}

/// Authentication service.
pub struct AuthService<'a> {
    config: &'a StorefrontConfig,
}

impl<'a> AuthService<'a> {
    /// Create a new authentication service.
    #[must_use]
    pub const fn new(config: &'a StorefrontConfig) -> Self {
        Self { config }
    }

    /// Login with username and password.
    ///
    /// The username is trimmed; the password is compared as typed.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::MissingField` if either field is blank.
    /// Returns `AuthError::InvalidCredentials` if no account matches.
    pub fn login(&self, username: &str, password: &str) -> Result<DemoAccount, AuthError> {
        let username = username.trim();
        if username.is_empty() {
            return Err(AuthError::MissingField("username"));
        }
        if password.is_empty() {
            return Err(AuthError::MissingField("password"));
        }

        if self.config.demo_customer.matches(username, password) {
            Ok(DemoAccount::Customer)
        } else if self.config.demo_admin.matches(username, password) {
            Ok(DemoAccount::Admin)
        } else {
            Err(AuthError::InvalidCredentials)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_customer_and_admin() {
        let config = StorefrontConfig::default();
        let auth = AuthService::new(&config);

        assert_eq!(auth.login("dini.cahyo", "dincay123"), Ok(DemoAccount::Customer));
        assert_eq!(auth.login("  jiniso.admin ", "adminjiniso123"), Ok(DemoAccount::Admin));
    }

    #[test]
    fn test_login_rejects_wrong_password() {
        let config = StorefrontConfig::default();
        let auth = AuthService::new(&config);

        assert_eq!(
            auth.login("dini.cahyo", "adminjiniso123"),
            Err(AuthError::InvalidCredentials)
        );
        assert_eq!(
            auth.login("nobody", "dincay123"),
            Err(AuthError::InvalidCredentials)
        );
    }

    #[test]
    fn test_login_requires_both_fields() {
        let config = StorefrontConfig::default();
        let auth = AuthService::new(&config);

        assert_eq!(auth.login("   ", "x"), Err(AuthError::MissingField("username")));
        assert_eq!(auth.login("dini.cahyo", ""), Err(AuthError::MissingField("password")));
    }
}
