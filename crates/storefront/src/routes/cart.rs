//! Cart and checkout route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect},
};
use chrono::Utc;
use serde::Deserialize;
use tracing::instrument;

use jiniso_core::Price;

use crate::catalog::Catalog;
use crate::error::{Result, add_breadcrumb};
use crate::filters;
use crate::middleware::Shopper;
use crate::models::CartItem;
use crate::page::PageContext;
use crate::state::AppState;

/// Cart line display data for templates.
#[derive(Clone)]
pub struct CartLineView {
    pub product_id: String,
    pub name: String,
    pub image: String,
    pub unit_price: String,
    pub quantity: u32,
    pub line_total: String,
}

/// Remove-from-cart form data.
#[derive(Debug, Deserialize)]
pub struct RemoveForm {
    pub product_id: String,
}

/// Cart page template.
#[derive(Template, WebTemplate)]
#[template(path = "cart/show.html")]
pub struct CartShowTemplate {
    pub page: PageContext,
    pub lines: Vec<CartLineView>,
    pub item_count: u32,
    pub subtotal: String,
    pub total: String,
}

/// Resolve cart lines against the catalog.
///
/// Lines whose product no longer exists are shown by ID at zero price.
fn cart_lines(catalog: &Catalog, items: &[CartItem]) -> (Vec<CartLineView>, Price) {
    let mut subtotal = Price::zero();
    let lines = items
        .iter()
        .map(|item| {
            let product = catalog.product(item.product_id.as_str());
            let unit = product.map_or_else(Price::zero, |p| p.price);
            let line_total = unit.times(item.quantity);
            subtotal = subtotal + line_total;
            CartLineView {
                product_id: item.product_id.to_string(),
                name: product.map_or_else(|| item.product_id.to_string(), |p| p.name.clone()),
                image: product.map(|p| p.image.clone()).unwrap_or_default(),
                unit_price: unit.display(),
                quantity: item.quantity,
                line_total: line_total.display(),
            }
        })
        .collect();
    (lines, subtotal)
}

/// Display the cart page.
#[instrument(skip_all)]
pub async fn show(State(state): State<AppState>, shopper: Shopper) -> impl IntoResponse {
    let items = shopper
        .user()
        .map(|u| u.cart_items.as_slice())
        .unwrap_or_default();
    let (lines, subtotal) = cart_lines(state.catalog(), items);
    let item_count = items
        .iter()
        .map(|i| i.quantity)
        .fold(0, u32::saturating_add);

    CartShowTemplate {
        page: shopper.page(),
        lines,
        item_count,
        subtotal: subtotal.display(),
        // Shipping is free on every order
        total: subtotal.display(),
    }
}

/// Remove a line from the cart.
#[instrument(skip_all, fields(product_id = %form.product_id))]
pub async fn remove(mut shopper: Shopper, Form(form): Form<RemoveForm>) -> Result<Redirect> {
    if shopper.state.remove_from_cart(&form.product_id) {
        shopper.save().await?;
        add_breadcrumb(
            "cart",
            "Removed from cart",
            Some(&[("product_id", form.product_id.as_str())]),
        );
    }
    Ok(Redirect::to("/cart"))
}

/// Place an order from the cart and show it.
///
/// An empty cart or a logged-out visitor lands back on the cart page.
#[instrument(skip_all)]
pub async fn checkout(State(state): State<AppState>, mut shopper: Shopper) -> Result<Redirect> {
    let order = {
        let mut rng = rand::rng();
        shopper
            .state
            .checkout(state.catalog(), Utc::now(), &mut rng)
    };

    let Some(order) = order else {
        return Ok(Redirect::to("/cart"));
    };
    shopper.save().await?;

    add_breadcrumb(
        "checkout",
        "Order placed",
        Some(&[("order_id", order.id.as_str())]),
    );

    Ok(Redirect::to(&format!("/orders/{}?placed=1", order.id)))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use jiniso_core::ProductId;

    use super::*;

    #[test]
    fn test_cart_lines_totals_and_missing_products() {
        let catalog = Catalog::generate(5, &mut StdRng::seed_from_u64(4));
        let items = vec![
            CartItem {
                product_id: ProductId::new("p-2"),
                quantity: 3,
            },
            CartItem {
                product_id: ProductId::new("p-404"),
                quantity: 1,
            },
        ];

        let (lines, subtotal) = cart_lines(&catalog, &items);
        let unit = catalog.product("p-2").unwrap().price;

        assert_eq!(lines.len(), 2);
        assert_eq!(subtotal, unit.times(3));
        assert_eq!(lines[1].name, "p-404");
        assert_eq!(lines[1].line_total, "Rp 0");
    }
}
