//! Account and reservation route handlers.
//!
//! The account page requires a login; the reservation confirmation simply
//! shows nothing for logged-out visitors.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use tracing::instrument;

use crate::catalog::Catalog;
use crate::error::Result;
use crate::filters;
use crate::middleware::{RequireLogin, Shopper};
use crate::models::Reservation;
use crate::page::PageContext;
use crate::routes::products::ProductCard;
use crate::state::AppState;

/// Products shown in the recently viewed row.
const RECENTLY_VIEWED_LIMIT: usize = 4;

/// Visit display data for templates.
#[derive(Clone)]
pub struct VisitView {
    pub at: String,
    pub action: String,
}

/// Reservation display data for templates.
#[derive(Clone)]
pub struct ReservationView {
    pub reference: String,
    pub product_id: String,
    pub product_name: String,
    pub image: String,
    pub store_name: String,
    pub store_location: String,
    pub reserved_at: String,
    pub valid_until: String,
}

impl ReservationView {
    fn new(reservation: &Reservation, catalog: &Catalog) -> Self {
        let product = catalog.product(reservation.product_id.as_str());
        let store = catalog.store(reservation.store_id.as_str());
        Self {
            reference: reservation.reference(),
            product_id: reservation.product_id.to_string(),
            product_name: product
                .map_or_else(|| reservation.product_id.to_string(), |p| p.name.clone()),
            image: product.map(|p| p.image.clone()).unwrap_or_default(),
            store_name: store
                .map_or_else(|| reservation.store_id.to_string(), |s| s.name.clone()),
            store_location: store.map(|s| s.location.clone()).unwrap_or_default(),
            reserved_at: reservation.reserved_at.format("%d %b %Y, %H:%M").to_string(),
            valid_until: reservation.valid_until().format("%d %b %Y, %H:%M").to_string(),
        }
    }
}

/// Timeline entry display data for templates.
#[derive(Clone)]
pub struct TimelineView {
    pub kind: &'static str,
    pub action: &'static str,
    pub product_id: String,
    pub product_name: String,
    pub at: String,
}

/// Account page template.
#[derive(Template, WebTemplate)]
#[template(path = "account/index.html")]
pub struct AccountIndexTemplate {
    pub page: PageContext,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub role: String,
    pub visits: Vec<VisitView>,
    pub reservations: Vec<ReservationView>,
    pub timeline: Vec<TimelineView>,
    pub recently_viewed: Vec<ProductCard>,
}

/// Reservation confirmation template.
#[derive(Template, WebTemplate)]
#[template(path = "reservation/confirmation.html")]
pub struct ReservationConfirmationTemplate {
    pub page: PageContext,
    pub reservations: Vec<ReservationView>,
}

/// Display the account page with the journey timeline.
///
/// # Errors
///
/// Redirects to the login page when nobody is logged in.
#[instrument(skip_all)]
pub async fn index(
    State(state): State<AppState>,
    shopper: RequireLogin,
) -> Result<impl IntoResponse> {
    let catalog = state.catalog();
    let user = shopper.user()?;
    let page = shopper.0.page();
    let t = page.translator();

    Ok(AccountIndexTemplate {
        name: user.name.clone(),
        email: user.email.clone(),
        phone: user.phone.clone(),
        role: user.role.to_string(),
        visits: user
            .visit_history
            .iter()
            .map(|v| VisitView {
                at: v.at.format("%d %b %Y, %H:%M").to_string(),
                action: v.action.clone(),
            })
            .collect(),
        reservations: user
            .reservations
            .iter()
            .rev()
            .map(|r| ReservationView::new(r, catalog))
            .collect(),
        timeline: shopper
            .0
            .state
            .timeline
            .iter()
            .map(|event| TimelineView {
                kind: event.kind.as_str(),
                action: t.timeline_action(event.kind),
                product_id: event.product_id.to_string(),
                product_name: event.product_name.clone(),
                at: event.at.format("%d %b %Y, %H:%M").to_string(),
            })
            .collect(),
        recently_viewed: user
            .viewed_products
            .iter()
            .filter_map(|id| catalog.product(id.as_str()))
            .take(RECENTLY_VIEWED_LIMIT)
            .map(ProductCard::from)
            .collect(),
        page,
    })
}

/// Display the most recent reservation.
#[instrument(skip_all)]
pub async fn reservation_confirmation(
    State(state): State<AppState>,
    shopper: Shopper,
) -> impl IntoResponse {
    ReservationConfirmationTemplate {
        page: shopper.page(),
        reservations: shopper
            .state
            .latest_reservation()
            .map(|r| ReservationView::new(r, state.catalog()))
            .into_iter()
            .collect(),
    }
}
