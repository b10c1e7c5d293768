//! Orders, line items and the synthesized step timelines attached to them.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use jiniso_core::{OrderId, OrderStatus, Price, ProductId};

/// One entry of a tracking or payment timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    /// Short stage label, e.g. "Out for Delivery".
    pub title: String,
    pub at: DateTime<Utc>,
    pub location: Option<String>,
    pub description: String,
}

/// A purchased line with its fabricated shipping history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    pub product_id: ProductId,
    pub quantity: u32,
    /// Unit price at the time of purchase.
    pub price: Price,
    /// Most recent step first.
    #[serde(default)]
    pub tracking: Vec<Step>,
    pub courier_name: Option<String>,
    pub estimated_arrival: Option<NaiveDate>,
    pub shipped_date: Option<NaiveDate>,
}

impl OrderItem {
    /// Price of the whole line.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.price.times(self.quantity)
    }
}

/// A placed order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub placed_at: DateTime<Utc>,
    pub status: OrderStatus,
    pub items: Vec<OrderItem>,
    /// Most recent step first.
    #[serde(default)]
    pub payment_timeline: Vec<Step>,
    pub payment_method: Option<String>,
}

impl Order {
    /// Sum of all line totals.
    #[must_use]
    pub fn subtotal(&self) -> Price {
        self.items.iter().map(OrderItem::line_total).sum()
    }

    /// Shipping fee. Every demo order ships free.
    #[must_use]
    pub const fn shipping(&self) -> Price {
        Price::zero()
    }

    /// Amount charged.
    #[must_use]
    pub fn total(&self) -> Price {
        self.subtotal() + self.shipping()
    }

    /// Number of units across all lines.
    #[must_use]
    pub fn unit_count(&self) -> u32 {
        self.items
            .iter()
            .map(|i| i.quantity)
            .fold(0, u32::saturating_add)
    }

    /// Customer-facing tracking reference, e.g. `JNS-101007` for `ord-101`.
    #[must_use]
    pub fn tracking_reference(&self) -> String {
        format!(
            "JNS-{}00{}",
            self.id.number_part(),
            self.id.as_str().chars().count()
        )
    }

    /// The line whose shipping details stand for the whole order.
    #[must_use]
    pub fn main_item(&self) -> Option<&OrderItem> {
        self.items.first()
    }

    /// Whether the order ID or any purchased product name matches `query`.
    ///
    /// `product_name` resolves a product ID to its display name.
    pub fn matches<'a, F>(&self, query: &str, product_name: F) -> bool
    where
        F: Fn(&ProductId) -> Option<&'a str>,
    {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        self.id.as_str().to_lowercase().contains(&query)
            || self.items.iter().any(|item| {
                product_name(&item.product_id)
                    .is_some_and(|name| name.to_lowercase().contains(&query))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(id: &str, items: Vec<(&str, u32, i64)>) -> Order {
        Order {
            id: OrderId::new(id),
            placed_at: Utc::now(),
            status: OrderStatus::Processing,
            items: items
                .into_iter()
                .map(|(product, quantity, price)| OrderItem {
                    product_id: ProductId::new(product),
                    quantity,
                    price: Price::idr(price),
                    tracking: Vec::new(),
                    courier_name: None,
                    estimated_arrival: None,
                    shipped_date: None,
                })
                .collect(),
            payment_timeline: Vec::new(),
            payment_method: None,
        }
    }

    #[test]
    fn test_totals() {
        let order = order("ord-7", vec![("p-1", 2, 100_000), ("p-2", 1, 49_000)]);
        assert_eq!(order.subtotal(), Price::idr(249_000));
        assert_eq!(order.total(), Price::idr(249_000));
        assert_eq!(order.unit_count(), 3);
    }

    #[test]
    fn test_unit_count_saturates() {
        let order = order("ord-8", vec![("p-1", u32::MAX, 1_000), ("p-2", 5, 1_000)]);
        assert_eq!(order.unit_count(), u32::MAX);
    }

    #[test]
    fn test_tracking_reference() {
        let order = order("ord-101", vec![]);
        assert_eq!(order.tracking_reference(), "JNS-101007");
    }

    #[test]
    fn test_matches_by_id_and_product_name() {
        let order = order("ord-102", vec![("p-15", 2, 399_000)]);
        let names = |id: &ProductId| (id.as_str() == "p-15").then_some("Urban Slim Fit Jeans 15");

        assert!(order.matches("", names));
        assert!(order.matches("ORD-102", names));
        assert!(order.matches("slim fit", names));
        assert!(!order.matches("hoodie", names));
    }
}
