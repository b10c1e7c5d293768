//! Product catalog, stores and testimonials.
//!
//! The catalog is expanded once at startup from the templates in [`data`]:
//! product `i` (1-based) takes template `i % 14` and name prefix
//! `(i / 14) % 10`. Prices get a random surcharge of up to 19,000 rupiah and
//! every store gets a random stock level, so pass a seeded RNG when the
//! numbers need to be reproducible.

pub mod data;

use std::collections::HashMap;

use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use jiniso_core::{Category, Price, ProductId, StoreId, SubCategory, TestimonialId};

use crate::models::{Product, Store, StoreStock, Testimonial};
use data::{CATEGORY_PREFIXES, PRODUCT_TEMPLATES, ProductTemplate, STORES, TESTIMONIALS};

/// Number of products in the storefront catalog.
pub const PRODUCT_COUNT: usize = 150;

/// Products at positions `1..=FEATURED_COUNT` are featured on the home page.
pub const FEATURED_COUNT: usize = 8;

/// Surcharge steps (of 1,000 rupiah) randomly added to a template price.
const PRICE_JITTER_STEPS: i64 = 20;

/// Exclusive upper bound for random per-store stock.
const MAX_STOCK: u32 = 25;

/// In-memory catalog shared by all requests.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
    index: HashMap<ProductId, usize>,
    stores: Vec<Store>,
    testimonials: Vec<Testimonial>,
}

/// Product listing filter. Empty fields match everything.
#[derive(Debug, Clone, Default)]
pub struct ProductFilter {
    pub category: Option<Category>,
    pub sub_category: Option<SubCategory>,
    /// Case-insensitive substring of the product name.
    pub query: Option<String>,
}

impl ProductFilter {
    /// Whether `product` passes every set criterion.
    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        if self.category.is_some_and(|c| c != product.category) {
            return false;
        }
        if self.sub_category.is_some_and(|s| s != product.sub_category) {
            return false;
        }
        match self.query.as_deref().map(str::trim) {
            Some(q) if !q.is_empty() => product.name.to_lowercase().contains(&q.to_lowercase()),
            _ => true,
        }
    }
}

impl Catalog {
    /// Build the full storefront catalog.
    ///
    /// With `Some(seed)` prices and stock are reproducible across restarts.
    #[must_use]
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::generate(PRODUCT_COUNT, &mut StdRng::seed_from_u64(seed)),
            None => Self::generate(PRODUCT_COUNT, &mut rand::rng()),
        }
    }

    /// Expand `count` products from the templates.
    pub fn generate<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Self {
        let stores = build_stores();
        let products: Vec<Product> = (1..=count)
            .filter_map(|position| {
                let template = PRODUCT_TEMPLATES.get(position % PRODUCT_TEMPLATES.len())?;
                let prefix = CATEGORY_PREFIXES
                    .get((position / PRODUCT_TEMPLATES.len()) % CATEGORY_PREFIXES.len())?;
                Some(expand_product(position, template, prefix, &stores, rng))
            })
            .collect();
        let index = products
            .iter()
            .enumerate()
            .map(|(i, p)| (p.id.clone(), i))
            .collect();

        tracing::debug!(products = products.len(), "catalog generated");

        Self {
            products,
            index,
            stores,
            testimonials: build_testimonials(),
        }
    }

    /// All products in catalog order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by ID.
    #[must_use]
    pub fn product(&self, id: &str) -> Option<&Product> {
        self.index
            .get(&ProductId::from(id))
            .and_then(|&i| self.products.get(i))
    }

    /// Display name of a product, if it exists.
    #[must_use]
    pub fn product_name(&self, id: &ProductId) -> Option<&str> {
        self.product(id.as_str()).map(|p| p.name.as_str())
    }

    /// Products flagged for the home page.
    pub fn featured(&self) -> impl Iterator<Item = &Product> {
        self.products.iter().filter(|p| p.is_featured)
    }

    /// Products passing `filter`, in catalog order.
    #[must_use]
    pub fn filter(&self, filter: &ProductFilter) -> Vec<&Product> {
        self.products.iter().filter(|p| filter.matches(p)).collect()
    }

    /// Other products of the same category, excluding `product`.
    #[must_use]
    pub fn related(&self, product: &Product, limit: usize) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.category == product.category && p.id != product.id)
            .take(limit)
            .collect()
    }

    /// All stores.
    #[must_use]
    pub fn stores(&self) -> &[Store] {
        &self.stores
    }

    /// Look up a store by ID.
    #[must_use]
    pub fn store(&self, id: &str) -> Option<&Store> {
        self.stores.iter().find(|s| s.id.as_str() == id)
    }

    /// Home page testimonials.
    #[must_use]
    pub fn testimonials(&self) -> &[Testimonial] {
        &self.testimonials
    }

    /// Units of every product on hand at one store.
    #[must_use]
    pub fn stock_at_store(&self, store_id: &StoreId) -> u64 {
        self.products
            .iter()
            .map(|p| u64::from(p.stock_at(store_id)))
            .sum()
    }
}

fn expand_product<R: Rng + ?Sized>(
    position: usize,
    template: &ProductTemplate,
    prefix: &str,
    stores: &[Store],
    rng: &mut R,
) -> Product {
    let surcharge = rng.random_range(0..PRICE_JITTER_STEPS) * 1_000;
    let stock_per_store = stores
        .iter()
        .map(|store| StoreStock {
            store_id: store.id.clone(),
            stock: rng.random_range(0..MAX_STOCK),
        })
        .collect();

    Product {
        id: ProductId::for_position(position),
        name: format!("{prefix} {} {position}", template.kind),
        price: Price::idr(template.price + surcharge),
        image: template.image.to_string(),
        description: format!(
            "Description for {prefix} {}. This is a high-quality product part of our seasonal \
             collection. Designed for versatility and long-lasting wear.",
            template.kind
        ),
        category: template.category,
        sub_category: template.sub_category,
        is_featured: position <= FEATURED_COUNT,
        stock_per_store,
    }
}

fn build_stores() -> Vec<Store> {
    STORES
        .iter()
        .map(|s| Store {
            id: StoreId::new(s.id),
            name: s.name.to_string(),
            location: s.location.to_string(),
        })
        .collect()
}

fn build_testimonials() -> Vec<Testimonial> {
    TESTIMONIALS
        .iter()
        .filter_map(|t| {
            let (year, month, day) = t.date;
            Some(Testimonial {
                id: TestimonialId::new(t.id),
                user: t.user.to_string(),
                content: t.content.to_string(),
                rating: t.rating,
                date: NaiveDate::from_ymd_opt(year, month, day)?,
            })
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    fn seeded() -> Catalog {
        Catalog::generate(PRODUCT_COUNT, &mut StdRng::seed_from_u64(7))
    }

    #[test]
    fn test_generates_full_catalog() {
        let catalog = seeded();
        assert_eq!(catalog.products().len(), 150);
        assert_eq!(catalog.stores().len(), 3);
        assert_eq!(catalog.testimonials().len(), 5);
    }

    #[test]
    fn test_naming_follows_template_and_prefix_cycle() {
        let catalog = seeded();
        // 1 % 14 = 1 -> Slim Fit Jeans, 1 / 14 = 0 -> Essential
        assert_eq!(catalog.product("p-1").unwrap().name, "Essential Slim Fit Jeans 1");
        // 14 % 14 = 0 -> Oversized Tee, 14 / 14 = 1 -> Urban
        assert_eq!(catalog.product("p-14").unwrap().name, "Urban Oversized Tee 14");
        // 140 / 14 = 10 wraps back to Essential
        assert_eq!(catalog.product("p-140").unwrap().name, "Essential Oversized Tee 140");
        assert!(catalog.product("p-0").is_none());
        assert!(catalog.product("p-151").is_none());
    }

    #[test]
    fn test_prices_stay_within_jitter() {
        let catalog = seeded();
        for product in catalog.products() {
            let position: usize = product.id.as_str()[2..].parse().unwrap();
            let base = PRODUCT_TEMPLATES[position % 14].price;
            let price = product.price;
            assert!(price >= Price::idr(base));
            assert!(price <= Price::idr(base + 19_000));
        }
    }

    #[test]
    fn test_stock_per_store_in_range() {
        let catalog = seeded();
        for product in catalog.products() {
            assert_eq!(product.stock_per_store.len(), 3);
            assert!(product.stock_per_store.iter().all(|s| s.stock < MAX_STOCK));
        }
    }

    #[test]
    fn test_first_eight_are_featured() {
        let catalog = seeded();
        let featured: Vec<_> = catalog.featured().map(|p| p.id.to_string()).collect();
        assert_eq!(featured.len(), 8);
        assert_eq!(featured[0], "p-1");
        assert_eq!(featured[7], "p-8");
    }

    #[test]
    fn test_same_seed_same_catalog() {
        let a = Catalog::from_seed(Some(42));
        let b = Catalog::from_seed(Some(42));
        assert_eq!(a.products(), b.products());
    }

    #[test]
    fn test_filter_by_category_type_and_query() {
        let catalog = seeded();

        let men = catalog.filter(&ProductFilter {
            category: Some(Category::Men),
            ..ProductFilter::default()
        });
        assert!(!men.is_empty());
        assert!(men.iter().all(|p| p.category == Category::Men));

        let men_tops = catalog.filter(&ProductFilter {
            category: Some(Category::Men),
            sub_category: Some(SubCategory::Tops),
            query: None,
        });
        assert!(men_tops.iter().all(|p| p.sub_category == SubCategory::Tops));
        assert!(men_tops.len() < men.len());

        let hoodies = catalog.filter(&ProductFilter {
            query: Some("  tech HOODIE ".to_string()),
            ..ProductFilter::default()
        });
        assert!(!hoodies.is_empty());
        assert!(hoodies.iter().all(|p| p.name.contains("Tech Hoodie")));

        let kids = catalog.filter(&ProductFilter {
            category: Some(Category::Kids),
            ..ProductFilter::default()
        });
        assert!(kids.is_empty());
    }

    #[test]
    fn test_related_excludes_self() {
        let catalog = seeded();
        let product = catalog.product("p-2").unwrap();
        let related = catalog.related(product, 4);
        assert_eq!(related.len(), 4);
        assert!(related.iter().all(|p| p.id != product.id && p.category == product.category));
    }

    #[test]
    fn test_stock_at_store_sums_products() {
        let catalog = seeded();
        let s1 = StoreId::new("s1");
        let expected: u64 = catalog
            .products()
            .iter()
            .map(|p| u64::from(p.stock_at(&s1)))
            .sum();
        assert_eq!(catalog.stock_at_store(&s1), expected);
        assert_eq!(catalog.stock_at_store(&StoreId::new("nope")), 0);
    }
}
