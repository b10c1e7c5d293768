//! Session-related types.
//!
//! The session replaces the browser's local storage: each key below holds one
//! serialized value, with no schema version attached.

/// Session keys for shopper state.
pub mod keys {
    /// Key for the serialized logged-in [`User`](crate::models::User).
    pub const USER: &str = "jiniso_user";

    /// Key for the serialized timeline event array.
    pub const TIMELINE: &str = "jiniso_timeline";

    /// Key for the language code.
    pub const LANG: &str = "jiniso_lang";

    /// Key for the concierge conversation.
    pub const CHAT: &str = "jiniso_chat";
}
