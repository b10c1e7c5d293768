//! Seed data for the demo accounts.
//!
//! Logging in copies one of these fixtures into the visitor's session. The
//! tracking steps of the seeded orders are synthesized on every call, so the
//! courier differs between logins.

use chrono::{DateTime, TimeZone, Utc};
use rand::Rng;

use jiniso_core::{
    EventId, OrderId, OrderStatus, Price, ProductId, TimelineEventKind, UserId, UserRole,
};

use crate::catalog::Catalog;
use crate::models::{CartItem, Order, TimelineEvent, User, Visit};
use crate::services::dashboard::{AccountRecord, LoginLog};
use crate::services::logistics::{shipped_line, synthesize_payment_timeline};

const CUSTOMER_NAME: &str = "Dini Cahyo";

fn utc(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .unwrap_or_default()
}

struct SeedOrder {
    number: u32,
    placed_at: DateTime<Utc>,
    status: OrderStatus,
    payment_method: &'static str,
    product: &'static str,
    quantity: u32,
    price: i64,
}

fn seed_orders() -> [SeedOrder; 3] {
    [
        SeedOrder {
            number: 101,
            placed_at: utc(2026, 2, 15, 10, 30),
            status: OrderStatus::Delivered,
            payment_method: "GoPay",
            product: "p-1",
            quantity: 1,
            price: 199_000,
        },
        SeedOrder {
            number: 102,
            placed_at: utc(2026, 2, 20, 10, 0),
            status: OrderStatus::Shipped,
            payment_method: "BCA Virtual Account",
            product: "p-15",
            quantity: 2,
            price: 399_000,
        },
        SeedOrder {
            number: 103,
            placed_at: utc(2026, 2, 20, 10, 0),
            status: OrderStatus::Processing,
            payment_method: "OVO",
            product: "p-5",
            quantity: 1,
            price: 429_000,
        },
    ]
}

/// The demo customer with order history, a cart line and two visits.
pub fn initial_customer<R: Rng + ?Sized>(rng: &mut R) -> User {
    let orders = seed_orders()
        .into_iter()
        .map(|seed| Order {
            id: OrderId::from_number(seed.number),
            placed_at: seed.placed_at,
            status: seed.status,
            items: vec![shipped_line(
                ProductId::new(seed.product),
                seed.quantity,
                Price::idr(seed.price),
                seed.status,
                seed.placed_at,
                CUSTOMER_NAME,
                rng,
            )],
            payment_timeline: synthesize_payment_timeline(seed.placed_at),
            payment_method: Some(seed.payment_method.to_string()),
        })
        .collect();

    User {
        id: UserId::new("u1"),
        name: CUSTOMER_NAME.to_string(),
        email: "dini.cahyo@example.com".to_string(),
        phone: "+62 812 3456 7890".to_string(),
        role: UserRole::Customer,
        viewed_products: vec![ProductId::new("p-1"), ProductId::new("p-2")],
        cart_items: vec![CartItem {
            product_id: ProductId::new("p-3"),
            quantity: 1,
        }],
        reservations: Vec::new(),
        orders,
        visit_history: vec![
            Visit {
                at: utc(2026, 2, 19, 14, 20),
                action: "Browsed New Arrivals".to_string(),
            },
            Visit {
                at: utc(2026, 2, 20, 9, 15),
                action: "Added items to cart".to_string(),
            },
        ],
    }
}

/// The store manager account. It shops like anyone else but can open the
/// admin dashboard.
#[must_use]
pub fn initial_admin() -> User {
    User {
        id: UserId::new("u0"),
        name: "Raka Pratama".to_string(),
        email: "raka.pratama@jiniso.id".to_string(),
        phone: "+62 21 5550 1000".to_string(),
        role: UserRole::Admin,
        viewed_products: Vec::new(),
        cart_items: Vec::new(),
        reservations: Vec::new(),
        orders: Vec::new(),
        visit_history: Vec::new(),
    }
}

/// Timeline loaded alongside a fresh login, newest first.
///
/// Product names come from `catalog` so they match the product pages.
#[must_use]
pub fn initial_timeline(catalog: &Catalog) -> Vec<TimelineEvent> {
    let event = |id: &str, at, kind, product: &str| {
        let product_id = ProductId::new(product);
        TimelineEvent {
            id: EventId::new(id),
            at,
            kind,
            product_name: catalog
                .product_name(&product_id)
                .unwrap_or(product)
                .to_string(),
            product_id,
        }
    };

    vec![
        event(
            "evt-2",
            utc(2026, 2, 19, 14, 20),
            TimelineEventKind::Viewed,
            "p-2",
        ),
        event(
            "evt-1",
            utc(2026, 2, 15, 10, 30),
            TimelineEventKind::Purchased,
            "p-1",
        ),
    ]
}

/// Registered accounts as the admin dashboard sees them before padding.
pub fn seeded_accounts<R: Rng + ?Sized>(rng: &mut R) -> Vec<AccountRecord> {
    let customer = initial_customer(rng);
    let admin = initial_admin();

    vec![
        AccountRecord {
            id: customer.id.to_string(),
            name: customer.name,
            email: customer.email,
            role: customer.role,
            registered_at: utc(2025, 11, 2, 8, 45),
            login_logs: vec![LoginLog {
                at: utc(2026, 2, 20, 9, 10),
                device: "iPhone / Safari".to_string(),
                ip: "192.168.1.24".to_string(),
            }],
            orders: customer.orders,
        },
        AccountRecord {
            id: admin.id.to_string(),
            name: admin.name,
            email: admin.email,
            role: admin.role,
            registered_at: utc(2025, 6, 1, 7, 0),
            login_logs: vec![LoginLog {
                at: utc(2026, 2, 20, 8, 0),
                device: "Windows / Chrome".to_string(),
                ip: "192.168.1.2".to_string(),
            }],
            orders: admin.orders,
        },
    ]
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn test_customer_orders_newest_first_with_history() {
        let mut rng = StdRng::seed_from_u64(11);
        let user = initial_customer(&mut rng);

        let ids: Vec<_> = user.orders.iter().map(|o| o.id.to_string()).collect();
        assert_eq!(ids, ["ord-101", "ord-102", "ord-103"]);
        assert_eq!(user.orders[0].status, OrderStatus::Delivered);
        assert_eq!(user.orders[0].items[0].tracking.len(), 9);
        assert_eq!(user.orders[1].items[0].tracking.len(), 8);
        assert_eq!(user.orders[2].items[0].tracking.len(), 3);
        assert_eq!(user.orders[1].total(), Price::idr(798_000));
        assert_eq!(user.orders[1].payment_timeline.len(), 3);
        assert_eq!(user.cart_count(), 1);
        assert!(!user.is_admin());
    }

    #[test]
    fn test_admin_has_admin_role() {
        let admin = initial_admin();
        assert!(admin.is_admin());
        assert!(admin.orders.is_empty());
    }

    #[test]
    fn test_timeline_uses_catalog_names() {
        let catalog = Catalog::generate(20, &mut StdRng::seed_from_u64(1));
        let timeline = initial_timeline(&catalog);

        assert_eq!(timeline.len(), 2);
        assert_eq!(timeline[0].id.as_str(), "evt-2");
        assert_eq!(timeline[0].product_name, "Essential Canvas Tote 2");
        assert_eq!(timeline[1].kind, TimelineEventKind::Purchased);
        assert_eq!(timeline[1].product_name, "Essential Slim Fit Jeans 1");
        assert!(timeline[0].at > timeline[1].at);
    }

    #[test]
    fn test_seeded_accounts_carry_orders() {
        let accounts = seeded_accounts(&mut StdRng::seed_from_u64(2));
        assert_eq!(accounts.len(), 2);
        assert_eq!(accounts[0].orders.len(), 3);
        assert_eq!(accounts[1].role, UserRole::Admin);
    }
}
