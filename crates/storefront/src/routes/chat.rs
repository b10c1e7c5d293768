//! Concierge chat route handlers.
//!
//! The conversation lives in the session next to the shopper state and is
//! available to logged-out visitors too.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect},
};
use chrono::Utc;
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::error::Result;
use crate::filters;
use crate::middleware::Shopper;
use crate::models::{ChatMessage, ChatSender, session_keys};
use crate::page::PageContext;
use crate::services::chatbot::{Conversation, QUICK_ACTIONS};
use crate::state::AppState;

/// Chat bubble display data.
#[derive(Clone)]
pub struct MessageView {
    pub text: String,
    pub from_user: bool,
    pub time: String,
}

impl From<&ChatMessage> for MessageView {
    fn from(message: &ChatMessage) -> Self {
        Self {
            text: message.text.clone(),
            from_user: message.sender == ChatSender::User,
            time: message.sent_at.format("%H:%M").to_string(),
        }
    }
}

/// Message form data.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct MessageForm {
    pub text: String,
}

/// Chat page template.
#[derive(Template, WebTemplate)]
#[template(path = "chat/index.html")]
pub struct ChatTemplate {
    pub page: PageContext,
    pub messages: Vec<MessageView>,
    /// Translated quick-reply labels; each posts its own label as the message.
    pub quick_actions: Vec<&'static str>,
}

async fn load_conversation(session: &Session) -> Result<Conversation> {
    Ok(session
        .get::<Conversation>(session_keys::CHAT)
        .await?
        .unwrap_or_default())
}

async fn save_conversation(session: &Session, conversation: &Conversation) -> Result<()> {
    session.insert(session_keys::CHAT, conversation).await?;
    Ok(())
}

/// Display the conversation, greeting first-time visitors.
#[instrument(skip_all)]
pub async fn show(shopper: Shopper) -> Result<impl IntoResponse> {
    let page = shopper.page();
    let mut conversation = load_conversation(shopper.session()).await?;

    if conversation.messages().is_empty() {
        conversation.open(page.translator(), Utc::now());
        save_conversation(shopper.session(), &conversation).await?;
    }

    let t = page.translator();
    Ok(ChatTemplate {
        messages: conversation.messages().iter().map(MessageView::from).collect(),
        quick_actions: QUICK_ACTIONS.into_iter().map(|key| t.t(key)).collect(),
        page,
    })
}

/// Post a message and record the scripted reply.
#[instrument(skip_all)]
pub async fn send(
    State(state): State<AppState>,
    shopper: Shopper,
    Form(form): Form<MessageForm>,
) -> Result<Redirect> {
    let mut conversation = load_conversation(shopper.session()).await?;

    // Typing delay before the concierge answers
    state.simulate_latency().await;

    if let Some(intent) = conversation.send(&form.text, shopper.state.translator(), Utc::now()) {
        tracing::debug!(?intent, "Concierge replied");
        save_conversation(shopper.session(), &conversation).await?;
    }

    Ok(Redirect::to("/chat"))
}
