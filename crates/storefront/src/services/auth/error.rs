//! Authentication error types.

use thiserror::Error;

/// Errors that can occur during authentication operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// Username or password did not match any demo account.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// A form field was left blank.
    #[error("missing field: {0}")]
    MissingField(&'static str),
}
