//! Concierge chat messages.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use jiniso_core::ChatMessageId;

/// Who wrote a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatSender {
    User,
    Bot,
}

/// A single chat bubble.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: ChatMessageId,
    pub text: String,
    pub sender: ChatSender,
    pub sent_at: DateTime<Utc>,
}
