//! Core types for Jiniso.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod language;
pub mod price;
pub mod status;

pub use id::*;
pub use language::Language;
pub use price::{CurrencyCode, Price};
pub use status::*;
