//! Product route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, Query, State},
    response::{IntoResponse, Redirect, Response},
};
use chrono::Utc;
use serde::Deserialize;
use tracing::instrument;

use jiniso_core::{Category, SubCategory};

use crate::catalog::ProductFilter;
use crate::error::{Result, add_breadcrumb};
use crate::filters;
use crate::middleware::Shopper;
use crate::models::Product;
use crate::page::PageContext;
use crate::routes::pages::not_found_page;
use crate::state::AppState;

/// Related products shown under a product.
const RELATED_LIMIT: usize = 4;

/// Product tile used by the home page, listing and related rows.
#[derive(Clone)]
pub struct ProductCard {
    pub id: String,
    pub name: String,
    pub price: String,
    pub image: String,
    pub category: &'static str,
    pub sub_category: &'static str,
}

impl From<&Product> for ProductCard {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name.clone(),
            price: product.price.display(),
            image: product.image.clone(),
            category: product.category.as_str(),
            sub_category: product.sub_category.as_str(),
        }
    }
}

/// One selectable value of a listing filter.
#[derive(Clone)]
pub struct FilterOption {
    pub value: &'static str,
    pub selected: bool,
}

/// Stock of the viewed product at one store.
#[derive(Clone)]
pub struct StoreAvailability {
    pub store_id: String,
    pub name: String,
    pub location: String,
    pub stock: u32,
}

impl StoreAvailability {
    #[must_use]
    pub const fn available(&self) -> bool {
        self.stock > 0
    }
}

/// Listing query parameters. Unknown values are ignored.
#[derive(Debug, Default, Deserialize)]
pub struct ListingQuery {
    pub category: Option<String>,
    #[serde(rename = "type")]
    pub sub_category: Option<String>,
    pub q: Option<String>,
}

impl ListingQuery {
    fn to_filter(&self) -> ProductFilter {
        ProductFilter {
            category: self.category.as_deref().and_then(|c| c.parse().ok()),
            sub_category: self.sub_category.as_deref().and_then(|s| s.parse().ok()),
            query: self.q.clone().filter(|q| !q.trim().is_empty()),
        }
    }
}

/// Detail page query parameters.
#[derive(Debug, Default, Deserialize)]
pub struct DetailQuery {
    pub added: Option<u8>,
}

/// Add-to-cart form data.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub quantity: Option<u32>,
}

/// Reservation form data.
#[derive(Debug, Deserialize)]
pub struct ReserveForm {
    pub store_id: String,
}

/// Product listing page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/index.html")]
pub struct ProductsIndexTemplate {
    pub page: PageContext,
    pub products: Vec<ProductCard>,
    pub categories: Vec<FilterOption>,
    pub sub_categories: Vec<FilterOption>,
    pub category: String,
    pub sub_category: String,
    pub query: String,
}

/// Product detail page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/show.html")]
pub struct ProductShowTemplate {
    pub page: PageContext,
    pub product: ProductCard,
    pub description: String,
    pub stores: Vec<StoreAvailability>,
    pub related_products: Vec<ProductCard>,
    pub added: bool,
}

/// Display product listing page.
#[instrument(skip_all)]
pub async fn index(
    State(state): State<AppState>,
    shopper: Shopper,
    Query(query): Query<ListingQuery>,
) -> impl IntoResponse {
    let filter = query.to_filter();
    let products = state
        .catalog()
        .filter(&filter)
        .into_iter()
        .map(ProductCard::from)
        .collect();

    ProductsIndexTemplate {
        page: shopper.page(),
        products,
        categories: Category::ALL
            .into_iter()
            .map(|c| FilterOption {
                value: c.as_str(),
                selected: filter.category == Some(c),
            })
            .collect(),
        sub_categories: SubCategory::ALL
            .into_iter()
            .map(|s| FilterOption {
                value: s.as_str(),
                selected: filter.sub_category == Some(s),
            })
            .collect(),
        category: filter.category.map(|c| c.as_str().to_string()).unwrap_or_default(),
        sub_category: filter
            .sub_category
            .map(|s| s.as_str().to_string())
            .unwrap_or_default(),
        query: filter.query.unwrap_or_default(),
    }
}

/// Display product detail page.
///
/// Logged-in visitors get the view recorded in their journey timeline.
#[instrument(skip_all, fields(product_id = %id))]
pub async fn show(
    State(state): State<AppState>,
    mut shopper: Shopper,
    Path(id): Path<String>,
    Query(query): Query<DetailQuery>,
) -> Result<Response> {
    let catalog = state.catalog();
    let Some(product) = catalog.product(&id) else {
        return Ok(not_found_page(shopper.page(), "product_not_found", "/products", "back_to_shop"));
    };

    if shopper.state.is_logged_in() {
        shopper.state.track_view(catalog, &id, Utc::now())?;
        shopper.save().await?;
    }

    let stores = catalog
        .stores()
        .iter()
        .map(|store| StoreAvailability {
            store_id: store.id.to_string(),
            name: store.name.clone(),
            location: store.location.clone(),
            stock: product.stock_at(&store.id),
        })
        .collect();

    Ok(ProductShowTemplate {
        page: shopper.page(),
        product: ProductCard::from(product),
        description: product.description.clone(),
        stores,
        related_products: catalog
            .related(product, RELATED_LIMIT)
            .into_iter()
            .map(ProductCard::from)
            .collect(),
        added: query.added.is_some(),
    }
    .into_response())
}

/// Add a product to the cart.
#[instrument(skip_all, fields(product_id = %id))]
pub async fn add_to_cart(
    State(state): State<AppState>,
    mut shopper: Shopper,
    Path(id): Path<String>,
    Form(form): Form<AddToCartForm>,
) -> Result<Redirect> {
    let quantity = form.quantity.unwrap_or(1);
    shopper
        .state
        .add_to_cart(state.catalog(), &id, quantity, Utc::now())?;
    shopper.save().await?;

    add_breadcrumb("cart", "Added to cart", Some(&[("product_id", id.as_str())]));
    tracing::info!(product_id = %id, quantity, "added to cart");

    Ok(Redirect::to(&format!("/products/{id}?added=1")))
}

/// Reserve a product for pickup at a store.
#[instrument(skip_all, fields(product_id = %id))]
pub async fn reserve(
    State(state): State<AppState>,
    mut shopper: Shopper,
    Path(id): Path<String>,
    Form(form): Form<ReserveForm>,
) -> Result<Redirect> {
    shopper
        .state
        .reserve_product(state.catalog(), &id, &form.store_id, Utc::now())?;
    shopper.save().await?;

    add_breadcrumb(
        "reservation",
        "Reserved in store",
        Some(&[("product_id", id.as_str()), ("store_id", form.store_id.as_str())]),
    );
    tracing::info!(product_id = %id, store_id = %form.store_id, "product reserved");

    Ok(Redirect::to("/reservation-confirmation"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_query_ignores_unknown_values() {
        let query = ListingQuery {
            category: Some("Shoes".to_string()),
            sub_category: Some("tops".to_string()),
            q: Some("   ".to_string()),
        };
        let filter = query.to_filter();
        assert!(filter.category.is_none());
        assert_eq!(filter.sub_category, Some(SubCategory::Tops));
        assert!(filter.query.is_none());
    }
}
