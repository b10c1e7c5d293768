//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use tracing::instrument;

use jiniso_core::Category;

use crate::filters;
use crate::middleware::Shopper;
use crate::page::PageContext;
use crate::routes::products::ProductCard;
use crate::state::AppState;

/// Categories linked from the home page tiles, with their nav label key.
const CATEGORY_TILES: [(Category, &str, &str); 3] = [
    (
        Category::Men,
        "nav_men",
        "https://images.unsplash.com/photo-1490578474895-699cd4e2cf59?w=800",
    ),
    (
        Category::Women,
        "nav_women",
        "https://images.unsplash.com/photo-1483985988355-763728e1935b?w=800",
    ),
    (
        Category::Accessories,
        "nav_accessories",
        "https://images.unsplash.com/photo-1553062407-98eeb64c6a62?w=800",
    ),
];

/// A category tile.
#[derive(Clone)]
pub struct CategoryTile {
    pub href: String,
    pub label: &'static str,
    pub image: &'static str,
}

/// Testimonial display data for templates.
#[derive(Clone)]
pub struct TestimonialView {
    pub user: String,
    pub content: String,
    pub stars: String,
    pub date: String,
}

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub page: PageContext,
    pub featured_products: Vec<ProductCard>,
    pub categories: Vec<CategoryTile>,
    pub testimonials: Vec<TestimonialView>,
}

/// Display the home page.
#[instrument(skip_all)]
pub async fn home(State(state): State<AppState>, shopper: Shopper) -> impl IntoResponse {
    let catalog = state.catalog();
    let page = shopper.page();
    let t = page.translator();

    HomeTemplate {
        featured_products: catalog.featured().map(ProductCard::from).collect(),
        categories: CATEGORY_TILES
            .into_iter()
            .map(|(category, label_key, image)| CategoryTile {
                href: format!("/products?category={}", category.as_str()),
                label: t.t(label_key),
                image,
            })
            .collect(),
        testimonials: catalog
            .testimonials()
            .iter()
            .map(|review| TestimonialView {
                user: review.user.clone(),
                content: review.content.clone(),
                stars: "★".repeat(usize::from(review.rating)),
                date: review.date.format("%d %b %Y").to_string(),
            })
            .collect(),
        page,
    }
}
