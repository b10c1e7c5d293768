//! Domain models for the storefront.
//!
//! Everything here is plain data that round-trips through the session store
//! as JSON. Behaviour that mutates these types lives in [`crate::services`].

pub mod catalog;
pub mod chat;
pub mod order;
pub mod session;
pub mod timeline;
pub mod user;

pub use catalog::{Product, Store, StoreStock, Testimonial};
pub use chat::{ChatMessage, ChatSender};
pub use order::{Order, OrderItem, Step};
pub use session::keys as session_keys;
pub use timeline::TimelineEvent;
pub use user::{CartItem, Reservation, User, Visit};
