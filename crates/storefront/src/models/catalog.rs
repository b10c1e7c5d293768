//! Catalog entities: products, stores and testimonials.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use jiniso_core::{Category, Price, ProductId, StoreId, SubCategory, TestimonialId};

/// A product in the generated catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    pub image: String,
    pub description: String,
    pub category: Category,
    pub sub_category: SubCategory,
    pub is_featured: bool,
    pub stock_per_store: Vec<StoreStock>,
}

impl Product {
    /// Units on hand at a store, zero when the store does not carry it.
    #[must_use]
    pub fn stock_at(&self, store_id: &StoreId) -> u32 {
        self.stock_per_store
            .iter()
            .find(|s| &s.store_id == store_id)
            .map_or(0, |s| s.stock)
    }

    /// Units on hand across all stores.
    #[must_use]
    pub fn total_stock(&self) -> u32 {
        self.stock_per_store.iter().map(|s| s.stock).sum()
    }
}

/// Stock level of one product at one store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreStock {
    pub store_id: StoreId,
    pub stock: u32,
}

/// A physical store that accepts reservations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Store {
    pub id: StoreId,
    pub name: String,
    pub location: String,
}

/// A customer quote shown on the home page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: TestimonialId,
    pub user: String,
    pub content: String,
    /// Star rating, 1 to 5.
    pub rating: u8,
    pub date: NaiveDate,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product_with_stock(levels: &[(&str, u32)]) -> Product {
        Product {
            id: ProductId::new("p-1"),
            name: "Essential Slim Fit Jeans 1".to_string(),
            price: Price::idr(499_000),
            image: String::new(),
            description: String::new(),
            category: Category::Men,
            sub_category: SubCategory::Bottoms,
            is_featured: true,
            stock_per_store: levels
                .iter()
                .map(|(id, stock)| StoreStock {
                    store_id: StoreId::new(*id),
                    stock: *stock,
                })
                .collect(),
        }
    }

    #[test]
    fn test_stock_at_known_and_unknown_store() {
        let product = product_with_stock(&[("s1", 4), ("s2", 0)]);
        assert_eq!(product.stock_at(&StoreId::new("s1")), 4);
        assert_eq!(product.stock_at(&StoreId::new("s2")), 0);
        assert_eq!(product.stock_at(&StoreId::new("s9")), 0);
    }

    #[test]
    fn test_total_stock() {
        let product = product_with_stock(&[("s1", 4), ("s2", 7), ("s3", 1)]);
        assert_eq!(product.total_stock(), 12);
    }
}
