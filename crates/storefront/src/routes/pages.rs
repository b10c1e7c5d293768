//! Informational pages and the not-found placeholder.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::instrument;

use crate::filters;
use crate::middleware::Shopper;
use crate::page::PageContext;
use crate::state::AppState;

/// Questions on the help page, as `(question, answer)` translation keys.
const FAQ: [(&str, &str); 4] = [
    ("faq_shipping_q", "faq_shipping_a"),
    ("faq_returns_q", "faq_returns_a"),
    ("faq_payment_q", "faq_payment_a"),
    ("faq_reservation_q", "faq_reservation_a"),
];

/// Store display data for templates.
#[derive(Clone)]
pub struct StoreView {
    pub name: String,
    pub location: String,
}

/// A translated question and answer.
#[derive(Clone)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

/// Placeholder shown for unknown products, orders and paths.
#[derive(Template, WebTemplate)]
#[template(path = "errors/not_found.html")]
pub struct NotFoundTemplate {
    pub page: PageContext,
    pub title: String,
    pub back_href: String,
    pub back_label: String,
}

/// Store locator template.
#[derive(Template, WebTemplate)]
#[template(path = "stores/index.html")]
pub struct StoreLocatorTemplate {
    pub page: PageContext,
    pub stores: Vec<StoreView>,
}

/// Help center template.
#[derive(Template, WebTemplate)]
#[template(path = "help.html")]
pub struct HelpTemplate {
    pub page: PageContext,
    pub faq: Vec<FaqEntry>,
}

/// Render the not-found placeholder with a 404 status.
///
/// `title_key` and `back_label_key` are translation keys.
pub fn not_found_page(
    page: PageContext,
    title_key: &str,
    back_href: &str,
    back_label_key: &str,
) -> Response {
    let template = NotFoundTemplate {
        title: page.t(title_key).to_string(),
        back_href: back_href.to_string(),
        back_label: page.t(back_label_key).to_string(),
        page,
    };
    (StatusCode::NOT_FOUND, template).into_response()
}

/// Display the store locator.
#[instrument(skip_all)]
pub async fn store_locator(State(state): State<AppState>, shopper: Shopper) -> impl IntoResponse {
    StoreLocatorTemplate {
        page: shopper.page(),
        stores: state
            .catalog()
            .stores()
            .iter()
            .map(|s| StoreView {
                name: s.name.clone(),
                location: s.location.clone(),
            })
            .collect(),
    }
}

/// Display the help center.
#[instrument(skip_all)]
pub async fn help(shopper: Shopper) -> impl IntoResponse {
    let page = shopper.page();
    let t = page.translator();
    HelpTemplate {
        faq: FAQ
            .into_iter()
            .map(|(q, a)| FaqEntry {
                question: t.t(q),
                answer: t.t(a),
            })
            .collect(),
        page,
    }
}

/// Fallback for unmatched paths.
pub async fn not_found(shopper: Shopper) -> Response {
    not_found_page(shopper.page(), "not_found_title", "/", "back_home")
}
