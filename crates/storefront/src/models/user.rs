//! Shopper domain types.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use jiniso_core::{ProductId, StoreId, UserId, UserRole};

use super::order::Order;

/// How long a store reservation is held.
pub const RESERVATION_HOLD_HOURS: i64 = 24;

/// A logged-in demo user and everything they have done this session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub role: UserRole,
    /// Most recently viewed first, no duplicates.
    pub viewed_products: Vec<ProductId>,
    pub cart_items: Vec<CartItem>,
    /// Oldest first.
    pub reservations: Vec<Reservation>,
    /// Newest first.
    pub orders: Vec<Order>,
    pub visit_history: Vec<Visit>,
}

impl User {
    /// Whether this account may open the admin dashboard.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }

    /// Total units in the cart, saturating at `u32::MAX`.
    #[must_use]
    pub fn cart_count(&self) -> u32 {
        self.cart_items
            .iter()
            .map(|item| item.quantity)
            .fold(0, u32::saturating_add)
    }

    /// Look up one of this user's orders.
    #[must_use]
    pub fn order(&self, id: &str) -> Option<&Order> {
        self.orders.iter().find(|order| order.id.as_str() == id)
    }
}

/// A cart line. Quantities for the same product are merged into one line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub product_id: ProductId,
    pub quantity: u32,
}

/// An in-store hold. Nothing is actually locked in inventory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    pub product_id: ProductId,
    pub store_id: StoreId,
    pub reserved_at: DateTime<Utc>,
}

impl Reservation {
    /// When the store releases the hold.
    #[must_use]
    pub fn valid_until(&self) -> DateTime<Utc> {
        self.reserved_at + Duration::hours(RESERVATION_HOLD_HOURS)
    }

    /// Pickup reference shown to the shopper.
    #[must_use]
    pub fn reference(&self) -> String {
        format!(
            "{}-{:04}",
            self.product_id,
            self.reserved_at.timestamp_millis().rem_euclid(10_000)
        )
    }
}

/// A recorded site visit, shown on the account page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Visit {
    pub at: DateTime<Utc>,
    pub action: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn test_reservation_valid_for_a_day() {
        let reserved_at = Utc.with_ymd_and_hms(2026, 2, 20, 10, 0, 0).unwrap();
        let reservation = Reservation {
            product_id: ProductId::new("p-3"),
            store_id: StoreId::new("s1"),
            reserved_at,
        };
        assert_eq!(
            reservation.valid_until(),
            Utc.with_ymd_and_hms(2026, 2, 21, 10, 0, 0).unwrap()
        );
        assert!(reservation.reference().starts_with("p-3-"));
    }

    #[test]
    fn test_cart_count_saturates() {
        use rand::SeedableRng;

        let mut user = crate::fixtures::initial_customer(&mut rand::rngs::StdRng::seed_from_u64(1));
        user.cart_items = ["p-1", "p-2"]
            .into_iter()
            .map(|id| CartItem {
                product_id: ProductId::new(id),
                quantity: 3_000_000_000,
            })
            .collect();
        assert_eq!(user.cart_count(), u32::MAX);
    }
}
