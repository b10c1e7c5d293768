//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! Every variable is optional; the defaults run the demo locally.
//!
//! - `STOREFRONT_HOST` - Bind address (default: 127.0.0.1)
//! - `STOREFRONT_PORT` - Listen port (default: 3000)
//! - `STOREFRONT_BASE_URL` - Public URL for the storefront (default: `http://localhost:3000`)
//! - `STOREFRONT_STATIC_DIR` - Directory served under `/static`
//! - `DEMO_CUSTOMER_USERNAME` / `DEMO_CUSTOMER_PASSWORD` - Customer login
//! - `DEMO_ADMIN_USERNAME` / `DEMO_ADMIN_PASSWORD` - Admin login
//! - `CATALOG_SEED` - Seed for catalog prices and stock levels
//! - `SIMULATED_LATENCY_MS` - Artificial delay on login and chat replies (default: 0)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name
//! - `SENTRY_SAMPLE_RATE` - Error event sample rate (default: 1.0)
//! - `SENTRY_TRACES_SAMPLE_RATE` - Transaction sample rate (default: 0.0)

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;
use url::Url;

const DEFAULT_BASE_URL: &str = "http://localhost:3000";
const DEFAULT_STATIC_DIR: &str = "crates/storefront/static";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Public base URL for the storefront
    pub base_url: String,
    /// Directory of CSS and other assets
    pub static_dir: PathBuf,
    /// Credentials of the demo customer
    pub demo_customer: DemoCredentials,
    /// Credentials of the demo store manager
    pub demo_admin: DemoCredentials,
    /// Fixed seed for the generated catalog; random when unset
    pub catalog_seed: Option<u64>,
    /// Delay applied before login and chat replies
    pub simulated_latency: Duration,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    pub sentry_environment: Option<String>,
    pub sentry_sample_rate: f32,
    pub sentry_traces_sample_rate: f32,
}

/// A username and password pair accepted by the login form.
///
/// Implements `Debug` manually to redact the password.
#[derive(Clone)]
pub struct DemoCredentials {
    pub username: String,
    pub password: SecretString,
}

impl DemoCredentials {
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: SecretString::from(password.into()),
        }
    }

    /// Exact match on both fields.
    #[must_use]
    pub fn matches(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password.expose_secret() == password
    }
}

impl std::fmt::Debug for DemoCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DemoCredentials")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

impl Default for StorefrontConfig {
    /// Local development settings, identical to an empty environment.
    fn default() -> Self {
        Self {
            host: IpAddr::from([127, 0, 0, 1]),
            port: 3000,
            base_url: DEFAULT_BASE_URL.to_string(),
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            demo_customer: DemoCredentials::new("dini.cahyo", "dincay123"),
            demo_admin: DemoCredentials::new("jiniso.admin", "adminjiniso123"),
            catalog_seed: None,
            simulated_latency: Duration::ZERO,
            sentry_dsn: None,
            sentry_environment: None,
            sentry_sample_rate: 1.0,
            sentry_traces_sample_rate: 0.0,
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but cannot be parsed, the
    /// base URL is not an absolute http(s) URL, or a demo password is empty.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let defaults = Self::default();

        let host = parse_env("STOREFRONT_HOST", defaults.host)?;
        let port = parse_env("STOREFRONT_PORT", defaults.port)?;
        let base_url = get_env_or_default("STOREFRONT_BASE_URL", DEFAULT_BASE_URL);
        validate_base_url(&base_url, "STOREFRONT_BASE_URL")?;
        let static_dir = PathBuf::from(get_env_or_default(
            "STOREFRONT_STATIC_DIR",
            DEFAULT_STATIC_DIR,
        ));

        let demo_customer = get_credentials("DEMO_CUSTOMER", "dini.cahyo", "dincay123")?;
        let demo_admin = get_credentials("DEMO_ADMIN", "jiniso.admin", "adminjiniso123")?;

        let catalog_seed = get_optional_env("CATALOG_SEED")
            .map(|raw| {
                raw.parse::<u64>().map_err(|e| {
                    ConfigError::InvalidEnvVar("CATALOG_SEED".to_string(), e.to_string())
                })
            })
            .transpose()?;
        let simulated_latency = Duration::from_millis(parse_env("SIMULATED_LATENCY_MS", 0_u64)?);

        let sentry_dsn = get_optional_env("SENTRY_DSN");
        let sentry_environment = get_optional_env("SENTRY_ENVIRONMENT");
        let sentry_sample_rate = parse_rate("SENTRY_SAMPLE_RATE", defaults.sentry_sample_rate)?;
        let sentry_traces_sample_rate = parse_rate(
            "SENTRY_TRACES_SAMPLE_RATE",
            defaults.sentry_traces_sample_rate,
        )?;

        Ok(Self {
            host,
            port,
            base_url,
            static_dir,
            demo_customer,
            demo_admin,
            catalog_seed,
            simulated_latency,
            sentry_dsn,
            sentry_environment,
            sentry_sample_rate,
            sentry_traces_sample_rate,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Whether the session cookie must be marked `Secure`.
    #[must_use]
    pub fn secure_cookies(&self) -> bool {
        self.base_url.starts_with("https://")
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Parse an environment variable, falling back to `default` when unset.
fn parse_env<T>(key: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    get_optional_env(key).map_or(Ok(default), |raw| {
        raw.parse::<T>()
            .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
    })
}

/// Parse a sample rate in `0.0..=1.0`.
fn parse_rate(key: &str, default: f32) -> Result<f32, ConfigError> {
    let rate = parse_env(key, default)?;
    if (0.0..=1.0).contains(&rate) {
        Ok(rate)
    } else {
        Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            format!("must be between 0.0 and 1.0 (got {rate})"),
        ))
    }
}

/// Validate that the base URL is an absolute http(s) URL.
fn validate_base_url(value: &str, var_name: &str) -> Result<(), ConfigError> {
    let url = Url::parse(value)
        .map_err(|e| ConfigError::InvalidEnvVar(var_name.to_string(), e.to_string()))?;
    match url.scheme() {
        "http" | "https" if url.host().is_some() => Ok(()),
        scheme => Err(ConfigError::InvalidEnvVar(
            var_name.to_string(),
            format!("expected an http(s) URL with a host (got scheme '{scheme}')"),
        )),
    }
}

/// Load a `<PREFIX>_USERNAME` / `<PREFIX>_PASSWORD` pair.
fn get_credentials(
    prefix: &str,
    default_username: &str,
    default_password: &str,
) -> Result<DemoCredentials, ConfigError> {
    let username_key = format!("{prefix}_USERNAME");
    let password_key = format!("{prefix}_PASSWORD");
    let username = get_env_or_default(&username_key, default_username);
    let password = get_env_or_default(&password_key, default_password);

    if username.trim().is_empty() {
        return Err(ConfigError::InvalidEnvVar(
            username_key,
            "must not be empty".to_string(),
        ));
    }
    if password.is_empty() {
        return Err(ConfigError::InvalidEnvVar(
            password_key,
            "must not be empty".to_string(),
        ));
    }
    Ok(DemoCredentials::new(username, password))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_socket_addr() {
        let config = StorefrontConfig::default();
        let addr = config.socket_addr();
        assert_eq!(addr.ip().to_string(), "127.0.0.1");
        assert_eq!(addr.port(), 3000);
    }

    #[test]
    fn test_secure_cookies_follow_scheme() {
        let mut config = StorefrontConfig::default();
        assert!(!config.secure_cookies());
        config.base_url = "https://shop.jiniso.id".to_string();
        assert!(config.secure_cookies());
    }

    #[test]
    fn test_validate_base_url() {
        assert!(validate_base_url("http://localhost:3000", "TEST_VAR").is_ok());
        assert!(validate_base_url("https://shop.jiniso.id", "TEST_VAR").is_ok());

        let err = validate_base_url("ftp://files.jiniso.id", "TEST_VAR").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(_, _)));
        assert!(validate_base_url("not a url", "TEST_VAR").is_err());
    }

    #[test]
    fn test_parse_env_default_when_unset() {
        let value: u16 = parse_env("JINISO_TEST_SURELY_UNSET_PORT", 4000).unwrap();
        assert_eq!(value, 4000);
    }

    #[test]
    fn test_credentials_match_exactly() {
        let creds = DemoCredentials::new("dini.cahyo", "dincay123");
        assert!(creds.matches("dini.cahyo", "dincay123"));
        assert!(!creds.matches("dini.cahyo", "dincay124"));
        assert!(!creds.matches("Dini", "jiniso123"));
        assert!(!creds.matches("", ""));
    }

    #[test]
    fn test_credentials_debug_redacts_password() {
        let creds = DemoCredentials::new("admin", "super_secret_admin_password");
        let debug_output = format!("{creds:?}");

        assert!(debug_output.contains("admin"));
        assert!(debug_output.contains("[REDACTED]"));
        assert!(!debug_output.contains("super_secret_admin_password"));
    }
}
