//! Per-visitor shopper state.
//!
//! [`ShopperState`] holds the logged-in user, their timeline and the
//! language preference. Handlers load it from the session, call one of the
//! operations below and save it back. Every operation takes the clock and
//! random source as arguments so it can be exercised without a server.

use chrono::{DateTime, Utc};
use rand::Rng;
use rand::seq::IndexedRandom;
use thiserror::Error;
use tower_sessions::Session;
use uuid::Uuid;

use jiniso_core::{
    EventId, Language, OrderId, OrderStatus, Price, ProductId, TimelineEventKind,
};

use crate::catalog::Catalog;
use crate::fixtures;
use crate::i18n::Translator;
use crate::models::{CartItem, Order, Reservation, TimelineEvent, User, session_keys};
use crate::services::auth::DemoAccount;
use crate::services::logistics::{pick_payment_method, shipped_line, synthesize_payment_timeline};

/// Order numbers are drawn from `0..ORDER_NUMBER_SPACE`.
const ORDER_NUMBER_SPACE: u32 = 1_000;

/// Most units of one product a cart line may hold.
pub const MAX_LINE_QUANTITY: u32 = 99;

/// Why a shopper action was refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShopperError {
    /// The action needs a logged-in user.
    #[error("not logged in")]
    NotLoggedIn,

    /// No product with this ID in the catalog.
    #[error("unknown product: {0}")]
    UnknownProduct(String),

    /// No store with this ID.
    #[error("unknown store: {0}")]
    UnknownStore(String),

    /// Quantities run from one to [`MAX_LINE_QUANTITY`] per line.
    #[error("invalid quantity: {0}")]
    InvalidQuantity(u32),
}

/// Everything the storefront remembers about one visitor.
///
/// Each request loads the whole state and writes it back. Two requests in
/// flight from the same session are last-writer-wins, so an add-to-cart
/// racing a checkout can drop one of the two updates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShopperState {
    pub user: Option<User>,
    /// Newest first.
    pub timeline: Vec<TimelineEvent>,
    pub lang: Language,
}

impl ShopperState {
    /// Read the visitor's state from the session. Missing keys load as the
    /// logged-out defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the session store fails or a stored value no
    /// longer deserializes.
    pub async fn load(session: &Session) -> Result<Self, tower_sessions::session::Error> {
        let user = session.get::<User>(session_keys::USER).await?;
        let timeline = session
            .get::<Vec<TimelineEvent>>(session_keys::TIMELINE)
            .await?
            .unwrap_or_default();
        let lang = session
            .get::<Language>(session_keys::LANG)
            .await?
            .unwrap_or_default();

        Ok(Self {
            user,
            timeline,
            lang,
        })
    }

    /// Replace the persisted copy with this state.
    ///
    /// # Errors
    ///
    /// Returns an error if the session store fails.
    pub async fn save(&self, session: &Session) -> Result<(), tower_sessions::session::Error> {
        match &self.user {
            Some(user) => session.insert(session_keys::USER, user).await?,
            None => {
                session.remove::<User>(session_keys::USER).await?;
            }
        }
        session
            .insert(session_keys::TIMELINE, &self.timeline)
            .await?;
        session.insert(session_keys::LANG, self.lang).await
    }

    /// Drop everything persisted for this visitor, chat history included.
    ///
    /// # Errors
    ///
    /// Returns an error if the session store fails.
    pub async fn clear(session: &Session) -> Result<(), tower_sessions::session::Error> {
        session.flush().await
    }

    /// String lookup in the visitor's language.
    #[must_use]
    pub const fn translator(&self) -> Translator {
        Translator::new(self.lang)
    }

    #[must_use]
    pub const fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }

    /// Start a session as one of the demo accounts, replacing any previous
    /// user and timeline.
    pub fn login<R: Rng + ?Sized>(&mut self, account: DemoAccount, catalog: &Catalog, rng: &mut R) {
        self.user = Some(match account {
            DemoAccount::Customer => fixtures::initial_customer(rng),
            DemoAccount::Admin => fixtures::initial_admin(),
        });
        self.timeline = fixtures::initial_timeline(catalog);
    }

    /// Forget the user and timeline and return to the default language.
    pub fn logout(&mut self) {
        *self = Self::default();
    }

    /// Add `quantity` units of a product, merging with an existing line.
    ///
    /// # Errors
    ///
    /// Fails when logged out, for an unknown product, or when the quantity
    /// is zero or would take the line past [`MAX_LINE_QUANTITY`].
    pub fn add_to_cart(
        &mut self,
        catalog: &Catalog,
        product_id: &str,
        quantity: u32,
        now: DateTime<Utc>,
    ) -> Result<(), ShopperError> {
        let user = self.user.as_mut().ok_or(ShopperError::NotLoggedIn)?;
        let product = catalog
            .product(product_id)
            .ok_or_else(|| ShopperError::UnknownProduct(product_id.to_string()))?;
        if quantity == 0 {
            return Err(ShopperError::InvalidQuantity(quantity));
        }

        let line = user
            .cart_items
            .iter_mut()
            .find(|item| item.product_id == product.id);
        let merged = line
            .as_ref()
            .map_or(quantity, |item| item.quantity.saturating_add(quantity));
        if merged > MAX_LINE_QUANTITY {
            return Err(ShopperError::InvalidQuantity(merged));
        }

        match line {
            Some(item) => item.quantity = merged,
            None => user.cart_items.push(CartItem {
                product_id: product.id.clone(),
                quantity,
            }),
        }

        self.record(catalog, TimelineEventKind::Cart, &product.id, now);
        Ok(())
    }

    /// Drop a cart line. Returns whether anything was removed; logged-out
    /// visitors and absent products are a no-op.
    pub fn remove_from_cart(&mut self, product_id: &str) -> bool {
        let Some(user) = self.user.as_mut() else {
            return false;
        };
        let before = user.cart_items.len();
        user.cart_items
            .retain(|item| item.product_id.as_str() != product_id);
        user.cart_items.len() != before
    }

    /// Hold a product at a store for pickup.
    ///
    /// # Errors
    ///
    /// Fails when logged out or when the product or store is unknown.
    pub fn reserve_product(
        &mut self,
        catalog: &Catalog,
        product_id: &str,
        store_id: &str,
        now: DateTime<Utc>,
    ) -> Result<(), ShopperError> {
        let user = self.user.as_mut().ok_or(ShopperError::NotLoggedIn)?;
        let product = catalog
            .product(product_id)
            .ok_or_else(|| ShopperError::UnknownProduct(product_id.to_string()))?;
        let store = catalog
            .store(store_id)
            .ok_or_else(|| ShopperError::UnknownStore(store_id.to_string()))?;

        user.reservations.push(Reservation {
            product_id: product.id.clone(),
            store_id: store.id.clone(),
            reserved_at: now,
        });

        self.record(catalog, TimelineEventKind::Reserved, &product.id, now);
        Ok(())
    }

    /// Turn the cart into a new order.
    ///
    /// Returns `None` when logged out or when the cart is empty. Unit prices
    /// come from the catalog; a product that has since disappeared is
    /// charged at zero.
    pub fn checkout<R: Rng + ?Sized>(
        &mut self,
        catalog: &Catalog,
        now: DateTime<Utc>,
        rng: &mut R,
    ) -> Option<Order> {
        let user = self.user.as_mut()?;
        if user.cart_items.is_empty() {
            return None;
        }

        let status = OrderStatus::Processing;
        let cart = std::mem::take(&mut user.cart_items);
        let items = cart
            .iter()
            .map(|line| {
                let price = catalog
                    .product(line.product_id.as_str())
                    .map_or_else(Price::zero, |p| p.price);
                shipped_line(
                    line.product_id.clone(),
                    line.quantity,
                    price,
                    status,
                    now,
                    &user.name,
                    rng,
                )
            })
            .collect();

        let order = Order {
            id: fresh_order_id(&user.orders, rng),
            placed_at: now,
            status,
            items,
            payment_timeline: synthesize_payment_timeline(now),
            payment_method: Some(pick_payment_method(rng)),
        };
        user.orders.insert(0, order.clone());

        for line in &cart {
            self.record(catalog, TimelineEventKind::Purchased, &line.product_id, now);
        }

        tracing::info!(order_id = %order.id, lines = order.items.len(), "order placed");
        Some(order)
    }

    /// Note that the user opened a product page.
    ///
    /// Moves the product to the front of the viewed list and records a
    /// timeline event. Logged-out visitors are not tracked.
    ///
    /// # Errors
    ///
    /// Fails for an unknown product.
    pub fn track_view(
        &mut self,
        catalog: &Catalog,
        product_id: &str,
        now: DateTime<Utc>,
    ) -> Result<(), ShopperError> {
        let Some(user) = self.user.as_mut() else {
            return Ok(());
        };
        let product = catalog
            .product(product_id)
            .ok_or_else(|| ShopperError::UnknownProduct(product_id.to_string()))?;

        user.viewed_products.retain(|id| id != &product.id);
        user.viewed_products.insert(0, product.id.clone());

        self.record(catalog, TimelineEventKind::Viewed, &product.id, now);
        Ok(())
    }

    pub fn set_language(&mut self, lang: Language) {
        self.lang = lang;
    }

    /// The reservation made most recently.
    #[must_use]
    pub fn latest_reservation(&self) -> Option<&Reservation> {
        self.user.as_ref()?.reservations.last()
    }

    /// Prepend a timeline event. Unknown products are not recorded.
    fn record(
        &mut self,
        catalog: &Catalog,
        kind: TimelineEventKind,
        product_id: &ProductId,
        now: DateTime<Utc>,
    ) {
        let Some(name) = catalog.product_name(product_id) else {
            return;
        };
        self.timeline.insert(
            0,
            TimelineEvent {
                id: EventId::new(format!("evt-{}", Uuid::new_v4().simple())),
                at: now,
                kind,
                product_id: product_id.clone(),
                product_name: name.to_string(),
            },
        );
    }
}

/// Pick an order number not already used by `orders`.
fn fresh_order_id<R: Rng + ?Sized>(orders: &[Order], rng: &mut R) -> OrderId {
    let taken = |number: u32| {
        let id = OrderId::from_number(number);
        orders.iter().any(|order| order.id == id)
    };

    let first = rng.random_range(0..ORDER_NUMBER_SPACE);
    if !taken(first) {
        return OrderId::from_number(first);
    }

    let free: Vec<u32> = (0..ORDER_NUMBER_SPACE).filter(|&n| !taken(n)).collect();
    free.choose(rng).copied().map_or_else(
        || {
            let overflow = u32::try_from(orders.len()).unwrap_or(u32::MAX);
            OrderId::from_number(ORDER_NUMBER_SPACE.saturating_add(overflow))
        },
        OrderId::from_number,
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use chrono::TimeZone;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0).unwrap()
    }

    fn catalog() -> Catalog {
        Catalog::generate(crate::catalog::PRODUCT_COUNT, &mut StdRng::seed_from_u64(99))
    }

    fn logged_in(catalog: &Catalog) -> ShopperState {
        let mut state = ShopperState::default();
        state.login(DemoAccount::Customer, catalog, &mut StdRng::seed_from_u64(1));
        state
    }

    #[test]
    fn test_login_seeds_user_and_timeline() {
        let catalog = catalog();
        let state = logged_in(&catalog);
        let user = state.user.as_ref().unwrap();
        assert_eq!(user.name, "Dini Cahyo");
        assert_eq!(user.orders.len(), 3);
        assert_eq!(state.timeline.len(), 2);
    }

    #[test]
    fn test_admin_login() {
        let catalog = catalog();
        let mut state = ShopperState::default();
        state.login(DemoAccount::Admin, &catalog, &mut StdRng::seed_from_u64(1));
        assert!(state.user.as_ref().unwrap().is_admin());
    }

    #[test]
    fn test_add_to_cart_requires_login() {
        let catalog = catalog();
        let mut state = ShopperState::default();
        assert_eq!(
            state.add_to_cart(&catalog, "p-1", 1, now()),
            Err(ShopperError::NotLoggedIn)
        );
        assert!(state.timeline.is_empty());
    }

    #[test]
    fn test_add_to_cart_merges_quantity() {
        let catalog = catalog();
        let mut state = logged_in(&catalog);

        state.add_to_cart(&catalog, "p-7", 2, now()).unwrap();
        state.add_to_cart(&catalog, "p-7", 3, now()).unwrap();

        let cart = &state.user.as_ref().unwrap().cart_items;
        let lines: Vec<_> = cart.iter().filter(|i| i.product_id.as_str() == "p-7").collect();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].quantity, 5);
        // seeded p-3 line plus p-7
        assert_eq!(cart.len(), 2);
        assert_eq!(state.timeline[0].kind, TimelineEventKind::Cart);
        assert_eq!(state.timeline.len(), 4);
    }

    #[test]
    fn test_add_to_cart_rejects_bad_input() {
        let catalog = catalog();
        let mut state = logged_in(&catalog);
        assert_eq!(
            state.add_to_cart(&catalog, "p-999", 1, now()),
            Err(ShopperError::UnknownProduct("p-999".to_string()))
        );
        assert_eq!(
            state.add_to_cart(&catalog, "p-1", 0, now()),
            Err(ShopperError::InvalidQuantity(0))
        );
        assert_eq!(state.user.as_ref().unwrap().cart_items.len(), 1);
    }

    #[test]
    fn test_add_to_cart_caps_line_quantity() {
        let catalog = catalog();
        let mut state = logged_in(&catalog);
        let timeline_before = state.timeline.len();

        assert_eq!(
            state.add_to_cart(&catalog, "p-1", 3_000_000_000, now()),
            Err(ShopperError::InvalidQuantity(3_000_000_000))
        );
        state.add_to_cart(&catalog, "p-1", MAX_LINE_QUANTITY - 1, now()).unwrap();
        assert_eq!(
            state.add_to_cart(&catalog, "p-1", 2, now()),
            Err(ShopperError::InvalidQuantity(MAX_LINE_QUANTITY + 1))
        );
        assert_eq!(
            state.add_to_cart(&catalog, "p-1", u32::MAX, now()),
            Err(ShopperError::InvalidQuantity(u32::MAX))
        );
        state.add_to_cart(&catalog, "p-1", 1, now()).unwrap();

        let user = state.user.as_ref().unwrap();
        let line = user
            .cart_items
            .iter()
            .find(|i| i.product_id.as_str() == "p-1")
            .unwrap();
        assert_eq!(line.quantity, MAX_LINE_QUANTITY);
        // refused adds leave no timeline entry
        assert_eq!(state.timeline.len(), timeline_before + 2);
        assert!(user.cart_count() > MAX_LINE_QUANTITY);
    }

    #[test]
    fn test_remove_absent_item_is_noop() {
        let catalog = catalog();
        let mut state = logged_in(&catalog);
        let before = state.clone();

        assert!(!state.remove_from_cart("p-42"));
        assert_eq!(state, before);

        assert!(state.remove_from_cart("p-3"));
        assert!(state.user.as_ref().unwrap().cart_items.is_empty());

        let mut anonymous = ShopperState::default();
        assert!(!anonymous.remove_from_cart("p-3"));
    }

    #[test]
    fn test_reserve_product() {
        let catalog = catalog();
        let mut state = logged_in(&catalog);

        assert_eq!(
            state.reserve_product(&catalog, "p-4", "s9", now()),
            Err(ShopperError::UnknownStore("s9".to_string()))
        );
        assert!(state.latest_reservation().is_none());

        state.reserve_product(&catalog, "p-4", "s2", now()).unwrap();
        state
            .reserve_product(&catalog, "p-6", "s1", now() + chrono::Duration::minutes(1))
            .unwrap();

        let latest = state.latest_reservation().unwrap();
        assert_eq!(latest.product_id.as_str(), "p-6");
        assert_eq!(latest.store_id.as_str(), "s1");
        assert_eq!(state.timeline[0].kind, TimelineEventKind::Reserved);
    }

    #[test]
    fn test_checkout_moves_cart_into_new_order() {
        let catalog = catalog();
        let mut state = logged_in(&catalog);
        state.add_to_cart(&catalog, "p-10", 2, now()).unwrap();
        let timeline_before = state.timeline.len();

        let order = state
            .checkout(&catalog, now(), &mut StdRng::seed_from_u64(5))
            .unwrap();

        let user = state.user.as_ref().unwrap();
        assert!(user.cart_items.is_empty());
        assert_eq!(user.orders.len(), 4);
        assert_eq!(user.orders[0], order);
        assert_eq!(order.status, OrderStatus::Processing);
        assert_eq!(order.items.len(), 2);
        assert_eq!(order.items[1].product_id.as_str(), "p-10");
        assert_eq!(order.items[1].price, catalog.product("p-10").unwrap().price);
        assert_eq!(order.items[0].tracking.len(), 3);
        assert_eq!(order.payment_timeline.len(), 3);
        assert!(order.payment_method.is_some());
        assert!(user.orders[1..].iter().all(|o| o.id != order.id));

        assert_eq!(state.timeline.len(), timeline_before + 2);
        assert!(
            state.timeline[..2]
                .iter()
                .all(|e| e.kind == TimelineEventKind::Purchased)
        );
    }

    #[test]
    fn test_checkout_empty_cart_is_noop() {
        let catalog = catalog();
        let mut state = logged_in(&catalog);
        state.remove_from_cart("p-3");
        let before = state.clone();

        assert!(state.checkout(&catalog, now(), &mut StdRng::seed_from_u64(5)).is_none());
        assert_eq!(state, before);

        let mut anonymous = ShopperState::default();
        assert!(
            anonymous
                .checkout(&catalog, now(), &mut StdRng::seed_from_u64(5))
                .is_none()
        );
    }

    #[test]
    fn test_track_view_moves_to_front_and_logs_every_view() {
        let catalog = catalog();
        let mut state = logged_in(&catalog);

        state.track_view(&catalog, "p-2", now()).unwrap();
        state.track_view(&catalog, "p-2", now()).unwrap();

        let viewed = &state.user.as_ref().unwrap().viewed_products;
        assert_eq!(viewed[0].as_str(), "p-2");
        assert_eq!(viewed.iter().filter(|id| id.as_str() == "p-2").count(), 1);
        assert_eq!(viewed.len(), 2);
        assert_eq!(state.timeline.len(), 4);
    }

    #[test]
    fn test_track_view_ignored_when_logged_out() {
        let catalog = catalog();
        let mut state = ShopperState::default();
        state.track_view(&catalog, "p-2", now()).unwrap();
        assert!(state.timeline.is_empty());
    }

    #[test]
    fn test_logout_resets_everything() {
        let catalog = catalog();
        let mut state = logged_in(&catalog);
        state.set_language(Language::Japanese);
        state.logout();
        assert_eq!(state, ShopperState::default());
        assert_eq!(state.lang, Language::Indonesian);
    }

    #[test]
    fn test_fresh_order_id_avoids_taken_numbers() {
        let catalog = catalog();
        let mut state = logged_in(&catalog);
        let mut rng = StdRng::seed_from_u64(8);
        for _ in 0..20 {
            state.add_to_cart(&catalog, "p-1", 1, now()).unwrap();
            state.checkout(&catalog, now(), &mut rng).unwrap();
        }
        let orders = &state.user.as_ref().unwrap().orders;
        let mut ids: Vec<_> = orders.iter().map(|o| o.id.clone()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), orders.len());
    }

    #[tokio::test]
    async fn test_session_round_trip() {
        use std::sync::Arc;
        use tower_sessions::MemoryStore;

        let catalog = catalog();
        let session = Session::new(None, Arc::new(MemoryStore::default()), None);

        let empty = ShopperState::load(&session).await.unwrap();
        assert_eq!(empty, ShopperState::default());

        let mut state = logged_in(&catalog);
        state.set_language(Language::English);
        state.save(&session).await.unwrap();
        assert_eq!(ShopperState::load(&session).await.unwrap(), state);

        state.logout();
        state.save(&session).await.unwrap();
        let reloaded = ShopperState::load(&session).await.unwrap();
        assert!(reloaded.user.is_none());
        assert!(reloaded.timeline.is_empty());
    }

    #[tokio::test]
    async fn test_overlapping_saves_keep_the_last_write() {
        use std::sync::Arc;
        use tower_sessions::MemoryStore;

        let catalog = catalog();
        let session = Session::new(None, Arc::new(MemoryStore::default()), None);
        logged_in(&catalog).save(&session).await.unwrap();

        // two requests load the same snapshot
        let mut adding = ShopperState::load(&session).await.unwrap();
        let mut checking_out = ShopperState::load(&session).await.unwrap();

        adding.add_to_cart(&catalog, "p-9", 1, now()).unwrap();
        adding.save(&session).await.unwrap();
        let order = checking_out
            .checkout(&catalog, now(), &mut StdRng::seed_from_u64(3))
            .unwrap();
        checking_out.save(&session).await.unwrap();

        let stored = ShopperState::load(&session).await.unwrap();
        let user = stored.user.as_ref().unwrap();
        assert!(user.cart_items.is_empty());
        assert_eq!(user.orders[0].id, order.id);
    }
}
