//! Scripted concierge chat.
//!
//! Replies are picked by keyword in any of the three interface languages.
//! There is no model behind it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use jiniso_core::ChatMessageId;

use crate::i18n::Translator;
use crate::models::{ChatMessage, ChatSender};

/// Oldest messages are dropped beyond this many.
pub const CHAT_HISTORY_LIMIT: usize = 50;

/// Translation keys of the quick-reply buttons.
pub const QUICK_ACTIONS: [&str; 4] = [
    "chat_track_order",
    "chat_sizing_help",
    "chat_store_info",
    "chat_human",
];

/// What a shopper is asking about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Tracking,
    Sizing,
    Store,
    Human,
}

impl Intent {
    /// Classify a message by keyword. The first matching topic wins.
    #[must_use]
    pub fn classify(text: &str) -> Self {
        let text = text.to_lowercase();
        let mentions = |words: &[&str]| words.iter().any(|w| text.contains(w));

        if mentions(&["track", "lacak", "追跡"]) {
            Self::Tracking
        } else if mentions(&["size", "ukuran", "サイズ"]) {
            Self::Sizing
        } else if mentions(&["store", "toko", "店舗"]) {
            Self::Store
        } else {
            Self::Human
        }
    }

    /// Translation key of the scripted reply.
    #[must_use]
    pub const fn reply_key(&self) -> &'static str {
        match self {
            Self::Tracking => "chat_response_track",
            Self::Sizing => "chat_response_sizing",
            Self::Store => "chat_response_store",
            Self::Human => "chat_response_human",
        }
    }
}

/// A visitor's conversation with the concierge.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Conversation {
    messages: Vec<ChatMessage>,
}

impl Conversation {
    /// Messages in the order they were sent.
    #[must_use]
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Greet the visitor if nothing has been said yet.
    pub fn open(&mut self, translator: Translator, now: DateTime<Utc>) {
        if self.messages.is_empty() {
            self.push(translator.t("chat_welcome"), ChatSender::Bot, now);
        }
    }

    /// Record the visitor's message and the scripted reply.
    ///
    /// Blank input is ignored and returns `None`.
    pub fn send(
        &mut self,
        text: &str,
        translator: Translator,
        now: DateTime<Utc>,
    ) -> Option<Intent> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        self.open(translator, now);
        self.push(text, ChatSender::User, now);

        let intent = Intent::classify(text);
        self.push(translator.t(intent.reply_key()), ChatSender::Bot, now);
        Some(intent)
    }

    fn push(&mut self, text: &str, sender: ChatSender, now: DateTime<Utc>) {
        self.messages.push(ChatMessage {
            id: ChatMessageId::new(format!("msg-{}", Uuid::new_v4().simple())),
            text: text.to_string(),
            sender,
            sent_at: now,
        });
        if self.messages.len() > CHAT_HISTORY_LIMIT {
            let excess = self.messages.len() - CHAT_HISTORY_LIMIT;
            self.messages.drain(..excess);
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use jiniso_core::Language;

    use super::*;

    fn english() -> Translator {
        Translator::new(Language::English)
    }

    #[test]
    fn test_classify_in_every_language() {
        assert_eq!(Intent::classify("Where can I TRACK my parcel?"), Intent::Tracking);
        assert_eq!(Intent::classify("lacak pesanan saya"), Intent::Tracking);
        assert_eq!(Intent::classify("注文を追跡"), Intent::Tracking);
        assert_eq!(Intent::classify("panduan ukuran"), Intent::Sizing);
        assert_eq!(Intent::classify("サイズガイド"), Intent::Sizing);
        assert_eq!(Intent::classify("Store info"), Intent::Store);
        assert_eq!(Intent::classify("info toko"), Intent::Store);
        assert_eq!(Intent::classify("hello there"), Intent::Human);
    }

    #[test]
    fn test_tracking_wins_over_store() {
        assert_eq!(Intent::classify("track order from store"), Intent::Tracking);
    }

    #[test]
    fn test_open_greets_once() {
        let mut chat = Conversation::default();
        chat.open(english(), Utc::now());
        chat.open(english(), Utc::now());
        assert_eq!(chat.messages().len(), 1);
        assert_eq!(chat.messages()[0].sender, ChatSender::Bot);
    }

    #[test]
    fn test_send_appends_user_and_reply() {
        let mut chat = Conversation::default();
        let intent = chat.send("  size help  ", english(), Utc::now());

        assert_eq!(intent, Some(Intent::Sizing));
        let messages = chat.messages();
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[1].text, "size help");
        assert_eq!(messages[1].sender, ChatSender::User);
        assert_eq!(messages[2].text, english().t("chat_response_sizing"));
    }

    #[test]
    fn test_blank_message_ignored() {
        let mut chat = Conversation::default();
        assert_eq!(chat.send("   ", english(), Utc::now()), None);
        assert!(chat.messages().is_empty());
    }

    #[test]
    fn test_history_is_capped() {
        let mut chat = Conversation::default();
        for i in 0..40 {
            chat.send(&format!("question {i}"), english(), Utc::now());
        }
        assert_eq!(chat.messages().len(), CHAT_HISTORY_LIMIT);
        assert_eq!(chat.messages().last().unwrap().sender, ChatSender::Bot);
    }

    #[test]
    fn test_quick_actions_route_to_their_topic() {
        for lang in Language::ALL {
            let t = Translator::new(lang);
            assert_eq!(Intent::classify(t.t("chat_track_order")), Intent::Tracking);
            assert_eq!(Intent::classify(t.t("chat_sizing_help")), Intent::Sizing);
            assert_eq!(Intent::classify(t.t("chat_store_info")), Intent::Store);
        }
    }
}
