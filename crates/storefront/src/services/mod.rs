//! Business logic services for storefront.
//!
//! # Services
//!
//! - `auth` - Demo credential check
//! - `shopper` - Cart, reservations, checkout and the journey timeline
//! - `logistics` - Fabricated tracking and payment timelines
//! - `dashboard` - Fabricated admin figures
//! - `chatbot` - Scripted concierge replies

pub mod auth;
pub mod chatbot;
pub mod dashboard;
pub mod logistics;
pub mod shopper;
