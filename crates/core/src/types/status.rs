//! Status and classification enums for storefront entities.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when a string does not name a known variant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {kind}: {value}")]
pub struct ParseVariantError {
    /// Which enum was being parsed.
    pub kind: &'static str,
    /// The rejected input.
    pub value: String,
}

impl ParseVariantError {
    fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_owned(),
        }
    }
}

/// Order lifecycle status.
///
/// Assigned once when the order is created; nothing advances it afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum OrderStatus {
    #[default]
    Processing,
    Shipped,
    Delivered,
}

impl OrderStatus {
    /// Display label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Processing => "Processing",
            Self::Shipped => "Shipped",
            Self::Delivered => "Delivered",
        }
    }

    /// Whether the parcel has left the warehouse.
    #[must_use]
    pub const fn has_shipped(&self) -> bool {
        matches!(self, Self::Shipped | Self::Delivered)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Kind of shopper interaction recorded on the timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimelineEventKind {
    Viewed,
    Cart,
    Reserved,
    Purchased,
}

impl TimelineEventKind {
    /// Wire name, as stored in the session.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Viewed => "viewed",
            Self::Cart => "cart",
            Self::Reserved => "reserved",
            Self::Purchased => "purchased",
        }
    }
}

impl fmt::Display for TimelineEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Role of a demo account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    #[default]
    Customer,
    Admin,
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Customer => write!(f, "user"),
            Self::Admin => write!(f, "admin"),
        }
    }
}

/// Top-level catalog category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Men,
    Women,
    Kids,
    Accessories,
    Collections,
}

impl Category {
    /// All categories in navigation order.
    pub const ALL: [Self; 5] = [
        Self::Men,
        Self::Women,
        Self::Kids,
        Self::Accessories,
        Self::Collections,
    ];

    /// Display and query-string name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Men => "Men",
            Self::Women => "Women",
            Self::Kids => "Kids",
            Self::Accessories => "Accessories",
            Self::Collections => "Collections",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ParseVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseVariantError::new("category", s))
    }
}

/// Garment type within a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SubCategory {
    Tops,
    Bottoms,
    Outerwear,
    Innerwear,
    Accessories,
}

impl SubCategory {
    /// All sub-categories in navigation order.
    pub const ALL: [Self; 5] = [
        Self::Tops,
        Self::Bottoms,
        Self::Outerwear,
        Self::Innerwear,
        Self::Accessories,
    ];

    /// Display and query-string name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Tops => "Tops",
            Self::Bottoms => "Bottoms",
            Self::Outerwear => "Outerwear",
            Self::Innerwear => "Innerwear",
            Self::Accessories => "Accessories",
        }
    }
}

impl fmt::Display for SubCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SubCategory {
    type Err = ParseVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseVariantError::new("sub-category", s))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_str_is_case_insensitive() {
        assert_eq!("men".parse::<Category>().unwrap(), Category::Men);
        assert_eq!("Collections".parse::<Category>().unwrap(), Category::Collections);
        assert!("Shoes".parse::<Category>().is_err());
    }

    #[test]
    fn test_sub_category_round_trip_names() {
        for sub in SubCategory::ALL {
            assert_eq!(sub.as_str().parse::<SubCategory>().unwrap(), sub);
        }
    }

    #[test]
    fn test_timeline_kind_serializes_snake_case() {
        let json = serde_json::to_string(&TimelineEventKind::Purchased).unwrap();
        assert_eq!(json, "\"purchased\"");
    }

    #[test]
    fn test_order_status_has_shipped() {
        assert!(!OrderStatus::Processing.has_shipped());
        assert!(OrderStatus::Shipped.has_shipped());
        assert!(OrderStatus::Delivered.has_shipped());
    }

    #[test]
    fn test_user_role_display() {
        assert_eq!(UserRole::Admin.to_string(), "admin");
        assert_eq!(UserRole::Customer.to_string(), "user");
    }
}
