//! Jiniso Core - Shared types library.
//!
//! This crate provides common types used across the Jiniso components:
//! - `storefront` - The demo storefront (shop pages, account, admin dashboard)
//! - `integration-tests` - End-to-end flows through the storefront router
//!
//! # Architecture
//!
//! The core crate contains only types and traits - no I/O, no session access,
//! no randomness. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, rupiah prices, statuses
//!   and language codes

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
