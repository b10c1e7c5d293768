//! Fabricated shipping and payment histories.
//!
//! Nothing here talks to a courier or payment provider. The steps are
//! generated from the order status and date so order pages have something
//! plausible to show.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use rand::Rng;
use rand::seq::IndexedRandom;

use jiniso_core::{OrderStatus, Price, ProductId};

use crate::models::{OrderItem, Step};

/// Couriers a shipment may be handed to.
pub const COURIERS: [&str; 5] = [
    "JNE Regular",
    "J&T Express",
    "SiCepat BEST",
    "Anteraja Regular",
    "Shopee Xpress",
];

/// Payment methods picked for orders placed in the demo.
pub const PAYMENT_METHODS: [&str; 5] = [
    "GoPay",
    "OVO",
    "BCA Virtual Account",
    "Mandiri Virtual Account",
    "Credit Card",
];

const WAREHOUSE: &str = "Tangerang Distribution Center";
const ORIGIN_HUB: &str = "Bekasi Hub";
const DESTINATION_HUB: &str = "Jakarta South Gateway";

/// Tracking details attached to an order line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Logistics {
    /// Most recent step first.
    pub tracking: Vec<Step>,
    pub courier_name: String,
    pub shipped_date: NaiveDate,
    pub estimated_arrival: NaiveDate,
}

/// Which statuses a tracking stage is reached by.
#[derive(Clone, Copy)]
enum Reach {
    Always,
    InTransit,
    Delivered,
}

impl Reach {
    const fn reached_by(self, status: OrderStatus) -> bool {
        match self {
            Self::Always => true,
            Self::InTransit => status.has_shipped(),
            Self::Delivered => matches!(status, OrderStatus::Delivered),
        }
    }
}

/// Step description, with the courier or recipient filled in where needed.
#[derive(Clone, Copy)]
enum Detail {
    Text(&'static str),
    PickedUpBy,
    ReceivedBy,
}

struct Stage {
    title: &'static str,
    offset_hours: i64,
    location: &'static str,
    reach: Reach,
    detail: Detail,
}

impl Stage {
    fn describe(&self, courier: &str, recipient: &str) -> String {
        match self.detail {
            Detail::Text(text) => text.to_string(),
            Detail::PickedUpBy => {
                format!("Package picked up by {courier} and in process for sorting.")
            }
            Detail::ReceivedBy => format!("Package delivered. Received by {recipient}."),
        }
    }
}

const STAGES: [Stage; 9] = [
    Stage {
        title: "Order Created",
        offset_hours: 0,
        location: "System",
        reach: Reach::Always,
        detail: Detail::Text("Order has been successfully created and confirmed."),
    },
    Stage {
        title: "Processing",
        offset_hours: 12,
        location: WAREHOUSE,
        reach: Reach::Always,
        detail: Detail::Text("Your items are being picked and packed by our warehouse team."),
    },
    Stage {
        title: "Ready for Shipment",
        offset_hours: 24,
        location: WAREHOUSE,
        reach: Reach::Always,
        detail: Detail::Text("Package is ready and waiting for courier pickup."),
    },
    Stage {
        title: "Handed to Courier",
        offset_hours: 30,
        location: ORIGIN_HUB,
        reach: Reach::InTransit,
        detail: Detail::PickedUpBy,
    },
    Stage {
        title: "Departed from Hub",
        offset_hours: 36,
        location: ORIGIN_HUB,
        reach: Reach::InTransit,
        detail: Detail::Text("Package has departed from the initial sorting hub."),
    },
    Stage {
        title: "Arrived at Destination Hub",
        offset_hours: 48,
        location: DESTINATION_HUB,
        reach: Reach::InTransit,
        detail: Detail::Text("Package has arrived at the destination sorting facility."),
    },
    Stage {
        title: "Processed at Facility",
        offset_hours: 60,
        location: DESTINATION_HUB,
        reach: Reach::InTransit,
        detail: Detail::Text("Package is being processed for final delivery route."),
    },
    Stage {
        title: "Out for Delivery",
        offset_hours: 72,
        location: "Local Hub Kebayoran",
        reach: Reach::InTransit,
        detail: Detail::Text("Courier is on the way to your delivery address."),
    },
    Stage {
        title: "Delivered",
        offset_hours: 78,
        location: "Destination Address",
        reach: Reach::Delivered,
        detail: Detail::ReceivedBy,
    },
];

/// Build the tracking history for one order line.
///
/// Steps are offset from `placed_at` and returned most recent first.
/// `recipient` appears in the final delivery step.
pub fn synthesize_logistics<R: Rng + ?Sized>(
    status: OrderStatus,
    placed_at: DateTime<Utc>,
    recipient: &str,
    rng: &mut R,
) -> Logistics {
    let courier = COURIERS.choose(rng).copied().unwrap_or_default();

    let mut tracking: Vec<Step> = STAGES
        .iter()
        .filter(|stage| stage.reach.reached_by(status))
        .map(|stage| Step {
            title: stage.title.to_string(),
            at: placed_at + Duration::hours(stage.offset_hours),
            location: Some(stage.location.to_string()),
            description: stage.describe(courier, recipient),
        })
        .collect();
    tracking.reverse();

    let placed_on = placed_at.date_naive();
    Logistics {
        tracking,
        courier_name: courier.to_string(),
        shipped_date: placed_on + Duration::days(1),
        estimated_arrival: placed_on + Duration::days(3),
    }
}

/// Build the payment history of an order, most recent first.
#[must_use]
pub fn synthesize_payment_timeline(placed_at: DateTime<Utc>) -> Vec<Step> {
    vec![
        Step {
            title: "Payment Successful".to_string(),
            at: placed_at + Duration::minutes(15),
            location: None,
            description: "Your payment was successfully verified by our system. Funding received."
                .to_string(),
        },
        Step {
            title: "Verifying Payment".to_string(),
            at: placed_at + Duration::minutes(5),
            location: None,
            description: "System is verifying your transaction with the provider. Please do not \
                          close the window."
                .to_string(),
        },
        Step {
            title: "Waiting for Payment".to_string(),
            at: placed_at,
            location: None,
            description: "Payment instructions sent to your email and mobile device.".to_string(),
        },
    ]
}

/// Build an order line with its tracking history attached.
#[allow(clippy::too_many_arguments)]
pub fn shipped_line<R: Rng + ?Sized>(
    product_id: ProductId,
    quantity: u32,
    price: Price,
    status: OrderStatus,
    placed_at: DateTime<Utc>,
    recipient: &str,
    rng: &mut R,
) -> OrderItem {
    let logistics = synthesize_logistics(status, placed_at, recipient, rng);
    OrderItem {
        product_id,
        quantity,
        price,
        tracking: logistics.tracking,
        courier_name: Some(logistics.courier_name),
        estimated_arrival: Some(logistics.estimated_arrival),
        shipped_date: Some(logistics.shipped_date),
    }
}

/// Pick a payment method for a new order.
pub fn pick_payment_method<R: Rng + ?Sized>(rng: &mut R) -> String {
    PAYMENT_METHODS
        .choose(rng)
        .copied()
        .unwrap_or_default()
        .to_string()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use chrono::TimeZone;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn placed_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 2, 20, 10, 0, 0).unwrap()
    }

    fn titles(logistics: &Logistics) -> Vec<&str> {
        logistics.tracking.iter().map(|s| s.title.as_str()).collect()
    }

    #[test]
    fn test_processing_stops_before_courier() {
        let mut rng = StdRng::seed_from_u64(1);
        let logistics = synthesize_logistics(OrderStatus::Processing, placed_at(), "Dini", &mut rng);
        assert_eq!(
            titles(&logistics),
            ["Ready for Shipment", "Processing", "Order Created"]
        );
    }

    #[test]
    fn test_shipped_reaches_out_for_delivery() {
        let mut rng = StdRng::seed_from_u64(2);
        let logistics = synthesize_logistics(OrderStatus::Shipped, placed_at(), "Dini", &mut rng);
        assert_eq!(logistics.tracking.len(), 8);
        assert_eq!(logistics.tracking[0].title, "Out for Delivery");
        assert_eq!(logistics.tracking[7].title, "Order Created");
    }

    #[test]
    fn test_delivered_has_every_stage_newest_first() {
        let mut rng = StdRng::seed_from_u64(3);
        let logistics =
            synthesize_logistics(OrderStatus::Delivered, placed_at(), "Dini Cahyo", &mut rng);

        assert_eq!(logistics.tracking.len(), 9);
        assert_eq!(logistics.tracking[0].title, "Delivered");
        assert!(logistics.tracking[0].description.contains("Dini Cahyo"));
        assert_eq!(
            logistics.tracking[0].at,
            Utc.with_ymd_and_hms(2026, 2, 23, 16, 0, 0).unwrap()
        );
        assert!(
            logistics
                .tracking
                .windows(2)
                .all(|pair| pair[0].at > pair[1].at)
        );
        assert_eq!(logistics.tracking[8].at, placed_at());
    }

    #[test]
    fn test_each_stage_has_its_own_description() {
        let mut rng = StdRng::seed_from_u64(5);
        let logistics =
            synthesize_logistics(OrderStatus::Delivered, placed_at(), "Dini Cahyo", &mut rng);

        let mentions_recipient: Vec<&str> = logistics
            .tracking
            .iter()
            .filter(|s| s.description.contains("Dini Cahyo"))
            .map(|s| s.title.as_str())
            .collect();
        assert_eq!(mentions_recipient, ["Delivered"]);

        let mut descriptions: Vec<&str> = logistics
            .tracking
            .iter()
            .map(|s| s.description.as_str())
            .collect();
        descriptions.sort_unstable();
        descriptions.dedup();
        assert_eq!(descriptions.len(), STAGES.len());
    }

    #[test]
    fn test_dates_and_courier() {
        let mut rng = StdRng::seed_from_u64(4);
        let logistics = synthesize_logistics(OrderStatus::Shipped, placed_at(), "Dini", &mut rng);
        assert_eq!(
            logistics.shipped_date,
            NaiveDate::from_ymd_opt(2026, 2, 21).unwrap()
        );
        assert_eq!(
            logistics.estimated_arrival,
            NaiveDate::from_ymd_opt(2026, 2, 23).unwrap()
        );
        assert!(COURIERS.contains(&logistics.courier_name.as_str()));

        let handover = logistics
            .tracking
            .iter()
            .find(|s| s.title == "Handed to Courier")
            .unwrap();
        assert!(handover.description.contains(&logistics.courier_name));
    }

    #[test]
    fn test_payment_timeline() {
        let timeline = synthesize_payment_timeline(placed_at());
        let titles: Vec<_> = timeline.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(
            titles,
            ["Payment Successful", "Verifying Payment", "Waiting for Payment"]
        );
        assert_eq!(timeline[0].at - timeline[2].at, Duration::minutes(15));
        assert_eq!(timeline[1].at - timeline[2].at, Duration::minutes(5));
    }

    #[test]
    fn test_payment_method_is_known() {
        let mut rng = StdRng::seed_from_u64(5);
        let method = pick_payment_method(&mut rng);
        assert!(PAYMENT_METHODS.contains(&method.as_str()));
    }
}
