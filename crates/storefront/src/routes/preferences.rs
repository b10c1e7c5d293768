//! Language preference handler.

use axum::{Form, response::Redirect};
use serde::Deserialize;
use tracing::instrument;

use jiniso_core::Language;

use crate::error::Result;
use crate::middleware::Shopper;

/// Language switcher form data.
#[derive(Debug, Deserialize)]
pub struct LanguageForm {
    pub lang: String,
    pub redirect: Option<String>,
}

/// Only same-site paths are followed after switching.
fn safe_redirect(target: Option<&str>) -> &str {
    match target {
        Some(path) if path.starts_with('/') && !path.starts_with("//") && !path.contains('\\') => {
            path
        }
        _ => "/",
    }
}

/// Switch the interface language and go back to the page the visitor was on.
///
/// Unknown language codes leave the preference unchanged.
#[instrument(skip_all, fields(lang = %form.lang))]
pub async fn set_language(mut shopper: Shopper, Form(form): Form<LanguageForm>) -> Result<Redirect> {
    match form.lang.parse::<Language>() {
        Ok(lang) => {
            shopper.state.set_language(lang);
            shopper.save().await?;
        }
        Err(e) => tracing::debug!(error = %e, "Ignoring unknown language"),
    }

    Ok(Redirect::to(safe_redirect(form.redirect.as_deref())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safe_redirect_keeps_local_paths() {
        assert_eq!(safe_redirect(Some("/products?category=men")), "/products?category=men");
        assert_eq!(safe_redirect(Some("/")), "/");
    }

    #[test]
    fn test_safe_redirect_rejects_other_sites() {
        assert_eq!(safe_redirect(Some("https://evil.example")), "/");
        assert_eq!(safe_redirect(Some("//evil.example")), "/");
        assert_eq!(safe_redirect(Some("/\\evil.example")), "/");
        assert_eq!(safe_redirect(None), "/");
    }
}
