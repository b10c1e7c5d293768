//! Newtype IDs for type-safe entity references.
//!
//! Use the `define_id!` macro to create type-safe ID wrappers that prevent
//! accidentally mixing IDs from different entity types. Jiniso IDs are short
//! prefixed strings (`p-12`, `s1`, `ord-101`) so they stay readable in URLs
//! and in the serialized session.

/// Macro to define a type-safe ID wrapper.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`, `PartialOrd`, `Ord`
/// - Conversion methods: `new()`, `as_str()`
/// - `From<&str>`, `From<String>` and `Display` implementations
///
/// # Example
///
/// ```rust
/// # use jiniso_core::define_id;
/// define_id!(WishlistId);
/// define_id!(CouponId);
///
/// let wishlist = WishlistId::new("w-1");
/// let coupon = CouponId::new("w-1");
///
/// assert_eq!(wishlist.as_str(), coupon.as_str());
/// // These are different types, so this won't compile:
/// // let _: WishlistId = coupon;
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from anything string-like.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the underlying string value.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

// Define standard entity IDs
define_id!(UserId);
define_id!(ProductId);
define_id!(StoreId);
define_id!(OrderId);
define_id!(EventId);
define_id!(TestimonialId);
define_id!(ChatMessageId);

impl ProductId {
    /// Build the catalog ID for the product at a 1-based catalog position.
    #[must_use]
    pub fn for_position(position: usize) -> Self {
        Self(format!("p-{position}"))
    }
}

impl OrderId {
    /// Build an order ID from its numeric part (`ord-<n>`).
    #[must_use]
    pub fn from_number(number: u32) -> Self {
        Self(format!("ord-{number}"))
    }

    /// The part after the first `-`, or the whole ID when there is none.
    #[must_use]
    pub fn number_part(&self) -> &str {
        self.0.split_once('-').map_or(self.0.as_str(), |(_, n)| n)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_product_id_for_position() {
        assert_eq!(ProductId::for_position(42).as_str(), "p-42");
    }

    #[test]
    fn test_order_id_number_part() {
        assert_eq!(OrderId::from_number(101).number_part(), "101");
        assert_eq!(OrderId::new("legacy").number_part(), "legacy");
    }

    #[test]
    fn test_ids_serialize_transparently() {
        let id = StoreId::new("s1");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"s1\"");

        let parsed: StoreId = serde_json::from_str("\"s2\"").unwrap();
        assert_eq!(parsed, StoreId::from("s2"));
    }
}
