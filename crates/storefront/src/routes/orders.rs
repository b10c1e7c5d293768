//! Order history and order detail route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use tracing::instrument;

use jiniso_core::OrderStatus;

use crate::catalog::Catalog;
use crate::filters;
use crate::i18n::Translator;
use crate::middleware::Shopper;
use crate::models::{Order, Step};
use crate::page::PageContext;
use crate::routes::pages::not_found_page;
use crate::state::AppState;

/// CSS modifier for a status badge.
const fn status_class(status: OrderStatus) -> &'static str {
    match status {
        OrderStatus::Processing => "processing",
        OrderStatus::Shipped => "shipped",
        OrderStatus::Delivered => "delivered",
    }
}

/// Order row in the history list.
#[derive(Clone)]
pub struct OrderSummaryView {
    pub id: String,
    pub date: String,
    pub status: &'static str,
    pub status_class: &'static str,
    pub headline: String,
    pub image: String,
    pub unit_count: u32,
    pub total: String,
}

impl OrderSummaryView {
    fn new(order: &Order, catalog: &Catalog, t: Translator) -> Self {
        let main = order
            .main_item()
            .and_then(|item| catalog.product(item.product_id.as_str()));
        Self {
            id: order.id.to_string(),
            date: order.placed_at.format("%d %b %Y").to_string(),
            status: t.status(order.status),
            status_class: status_class(order.status),
            headline: main.map(|p| p.name.clone()).unwrap_or_default(),
            image: main.map(|p| p.image.clone()).unwrap_or_default(),
            unit_count: order.unit_count(),
            total: order.total().display(),
        }
    }
}

/// Purchased line on the detail page.
#[derive(Clone)]
pub struct OrderLineView {
    pub product_id: String,
    pub name: String,
    pub image: String,
    pub quantity: u32,
    pub unit_price: String,
    pub line_total: String,
}

/// One timeline step.
#[derive(Clone)]
pub struct StepView {
    pub title: String,
    pub at: String,
    pub location: String,
    pub description: String,
}

impl From<&Step> for StepView {
    fn from(step: &Step) -> Self {
        Self {
            title: step.title.clone(),
            at: step.at.format("%d %b %Y, %H:%M").to_string(),
            location: step.location.clone().unwrap_or_default(),
            description: step.description.clone(),
        }
    }
}

/// Order history query parameters.
#[derive(Debug, Default, Deserialize)]
pub struct HistoryQuery {
    pub q: Option<String>,
}

/// Order detail query parameters.
#[derive(Debug, Default, Deserialize)]
pub struct DetailQuery {
    pub placed: Option<u8>,
}

/// Order history template.
#[derive(Template, WebTemplate)]
#[template(path = "orders/index.html")]
pub struct OrdersIndexTemplate {
    pub page: PageContext,
    pub orders: Vec<OrderSummaryView>,
    pub has_orders: bool,
    pub query: String,
}

/// Order detail template.
#[derive(Template, WebTemplate)]
#[template(path = "orders/show.html")]
pub struct OrderShowTemplate {
    pub page: PageContext,
    pub summary: OrderSummaryView,
    pub tracking_reference: String,
    pub payment_method: String,
    pub courier: String,
    pub shipped_date: String,
    pub estimated_arrival: String,
    pub lines: Vec<OrderLineView>,
    pub subtotal: String,
    pub shipping_free: bool,
    pub payment_steps: Vec<StepView>,
    pub tracking_steps: Vec<StepView>,
    pub placed: bool,
}

/// Display the order history, optionally filtered by order ID or product name.
#[instrument(skip_all)]
pub async fn index(
    State(state): State<AppState>,
    shopper: Shopper,
    Query(query): Query<HistoryQuery>,
) -> impl IntoResponse {
    let catalog = state.catalog();
    let page = shopper.page();
    let t = page.translator();
    let search = query.q.unwrap_or_default();

    let all_orders = shopper.user().map(|u| u.orders.as_slice()).unwrap_or_default();
    let orders = all_orders
        .iter()
        .filter(|order| order.matches(&search, |id| catalog.product_name(id)))
        .map(|order| OrderSummaryView::new(order, catalog, t))
        .collect();

    OrdersIndexTemplate {
        page,
        orders,
        has_orders: !all_orders.is_empty(),
        query: search,
    }
}

/// Display one order with its payment and shipment timelines.
#[instrument(skip_all, fields(order_id = %id))]
pub async fn show(
    State(state): State<AppState>,
    shopper: Shopper,
    Path(id): Path<String>,
    Query(query): Query<DetailQuery>,
) -> Response {
    let catalog = state.catalog();
    let page = shopper.page();
    let Some(order) = shopper.user().and_then(|u| u.order(&id)) else {
        return not_found_page(page, "order_not_found", "/orders", "back_to_orders");
    };
    let t = page.translator();
    let main = order.main_item();

    let lines = order
        .items
        .iter()
        .map(|item| {
            let product = catalog.product(item.product_id.as_str());
            OrderLineView {
                product_id: item.product_id.to_string(),
                name: product.map_or_else(|| item.product_id.to_string(), |p| p.name.clone()),
                image: product.map(|p| p.image.clone()).unwrap_or_default(),
                quantity: item.quantity,
                unit_price: item.price.display(),
                line_total: item.line_total().display(),
            }
        })
        .collect();

    OrderShowTemplate {
        summary: OrderSummaryView::new(order, catalog, t),
        tracking_reference: order.tracking_reference(),
        payment_method: order.payment_method.clone().unwrap_or_default(),
        courier: main
            .and_then(|i| i.courier_name.clone())
            .unwrap_or_default(),
        shipped_date: main
            .and_then(|i| i.shipped_date)
            .map(|d| d.format("%d %b %Y").to_string())
            .unwrap_or_default(),
        estimated_arrival: main
            .and_then(|i| i.estimated_arrival)
            .map(|d| d.format("%d %b %Y").to_string())
            .unwrap_or_default(),
        lines,
        subtotal: order.subtotal().display(),
        shipping_free: order.shipping().is_zero(),
        payment_steps: order.payment_timeline.iter().map(StepView::from).collect(),
        tracking_steps: main
            .map(|i| i.tracking.iter().map(StepView::from).collect())
            .unwrap_or_default(),
        placed: query.placed.is_some(),
        page,
    }
    .into_response()
}
