//! crates/dino_explorer_core/src/conversation.rs
//!
//! A chat transcript plus the single-slot guard that keeps at most one request
//! in flight per conversation.

use crate::chat::{ChatClient, GREETING};
use crate::domain::{ChatRole, ChatTurn, HistoryTurn};
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::{debug, info};

/// Transcript and flags for one conversation.
#[derive(Debug, Clone, Default)]
pub struct ConversationState {
    /// Insertion order is display order and model-context order.
    pub turns: Vec<ChatTurn>,
    /// True while a reply is awaited.
    pub pending: bool,
    /// Set when no credential is configured; every reply will be the fallback.
    pub assistant_unavailable: bool,
}

/// Owns a conversation and drives the chat client for it.
pub struct ConversationSession {
    state: Mutex<ConversationState>,
    client: ChatClient,
}

impl ConversationSession {
    pub fn new(client: ChatClient) -> Self {
        let state = ConversationState {
            assistant_unavailable: !client.is_available(),
            ..ConversationState::default()
        };
        Self {
            state: Mutex::new(state),
            client,
        }
    }

    /// A conversation that opens with the assistant's greeting.
    pub fn with_greeting(client: ChatClient) -> Self {
        let session = Self::new(client);
        session
            .lock()
            .turns
            .push(ChatTurn::new(ChatRole::Assistant, GREETING));
        session
    }

    fn lock(&self) -> MutexGuard<'_, ConversationState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn snapshot(&self) -> ConversationState {
        self.lock().clone()
    }

    pub fn is_pending(&self) -> bool {
        self.lock().pending
    }

    pub fn len(&self) -> usize {
        self.lock().turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().turns.is_empty()
    }

    /// Posts a user message and waits for the assistant's reply.
    ///
    /// Blank text, or a call made while another request is pending, is ignored and
    /// returns `None`. Otherwise the user turn is appended, the client is called, and
    /// the appended assistant turn is returned.
    pub async fn post_user_message(&self, text: &str) -> Option<ChatTurn> {
        let (slot, history) = self.claim(text)?;

        let reply = self.client.send(text, &history).await;
        Some(slot.complete(reply))
    }

    // Check-and-claim happens under one lock so concurrent posts cannot both pass.
    fn claim(&self, text: &str) -> Option<(InFlight<'_>, Vec<HistoryTurn>)> {
        if text.trim().is_empty() {
            debug!("Ignoring blank chat message.");
            return None;
        }

        let mut state = self.lock();
        if state.pending {
            debug!("Ignoring chat message while a reply is pending.");
            return None;
        }

        let history = state.turns.iter().map(ChatTurn::to_history).collect();
        state.turns.push(ChatTurn::new(ChatRole::User, text));
        state.pending = true;
        info!(turns = state.turns.len(), "Chat request dispatched.");

        Some((InFlight { session: self, done: false }, history))
    }
}

/// The occupied request slot. Releases `pending` when completed or dropped.
struct InFlight<'a> {
    session: &'a ConversationSession,
    done: bool,
}

impl InFlight<'_> {
    fn complete(mut self, reply: String) -> ChatTurn {
        let turn = ChatTurn::new(ChatRole::Assistant, reply);
        let mut state = self.session.lock();
        state.turns.push(turn.clone());
        state.pending = false;
        self.done = true;
        turn
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if !self.done {
            self.session.lock().pending = false;
        }
    }
}
