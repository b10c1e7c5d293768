//! Data every page template needs for the shared layout.

use jiniso_core::Language;

use crate::i18n::Translator;
use crate::middleware::CspNonce;
use crate::services::shopper::ShopperState;

/// One entry of the language switcher.
#[derive(Debug, Clone)]
pub struct LanguageOption {
    pub code: &'static str,
    pub flag: &'static str,
    pub selected: bool,
}

/// Layout context: navbar state, language and the CSP nonce.
#[derive(Debug, Clone)]
pub struct PageContext {
    pub nonce: String,
    pub lang: Language,
    translator: Translator,
    pub user_name: String,
    pub logged_in: bool,
    pub is_admin: bool,
    pub cart_count: u32,
    /// Path and query of the current request, used to come back after
    /// switching language.
    pub path: String,
}

impl PageContext {
    #[must_use]
    pub fn new(state: &ShopperState, nonce: &CspNonce, path: &str) -> Self {
        let user = state.user.as_ref();
        Self {
            nonce: nonce.value().to_string(),
            lang: state.lang,
            translator: state.translator(),
            user_name: user.map(|u| u.name.clone()).unwrap_or_default(),
            logged_in: user.is_some(),
            is_admin: user.is_some_and(crate::models::User::is_admin),
            cart_count: user.map_or(0, crate::models::User::cart_count),
            path: path.to_string(),
        }
    }

    /// Translate a key in the visitor's language.
    #[must_use]
    pub fn t<'a>(&self, key: &'a str) -> &'a str {
        self.translator.t(key)
    }

    #[must_use]
    pub const fn translator(&self) -> Translator {
        self.translator
    }

    #[must_use]
    pub const fn html_lang(&self) -> &'static str {
        self.lang.html_lang()
    }

    #[must_use]
    pub fn languages(&self) -> Vec<LanguageOption> {
        Language::ALL
            .into_iter()
            .map(|lang| LanguageOption {
                code: lang.code(),
                flag: match lang {
                    Language::Indonesian => "https://flagcdn.com/id.svg",
                    Language::English => "https://flagcdn.com/us.svg",
                    Language::Japanese => "https://flagcdn.com/jp.svg",
                },
                selected: lang == self.lang,
            })
            .collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::catalog::Catalog;
    use crate::services::auth::DemoAccount;

    #[test]
    fn test_anonymous_context() {
        let page = PageContext::new(
            &ShopperState::default(),
            &CspNonce("n0nce".to_string()),
            "/",
        );
        assert!(!page.logged_in);
        assert_eq!(page.cart_count, 0);
        assert_eq!(page.html_lang(), "id");
        assert_eq!(page.nonce, "n0nce");
        let selected: Vec<_> = page.languages().into_iter().filter(|l| l.selected).collect();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].code, "ID");
    }

    #[test]
    fn test_logged_in_context() {
        let catalog = Catalog::generate(10, &mut StdRng::seed_from_u64(3));
        let mut state = ShopperState::default();
        state.login(DemoAccount::Customer, &catalog, &mut StdRng::seed_from_u64(3));
        state.set_language(Language::English);

        let page = PageContext::new(&state, &CspNonce(String::new()), "/cart");
        assert!(page.logged_in);
        assert!(!page.is_admin);
        assert_eq!(page.user_name, "Dini Cahyo");
        assert_eq!(page.cart_count, 1);
        assert_eq!(page.t("nav_cart"), Translator::new(Language::English).t("nav_cart"));
    }
}
