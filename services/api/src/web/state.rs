//! services/api/src/web/state.rs
//!
//! Defines the application's shared state and the per-client session registries.

use crate::config::Config;
use dino_explorer_core::{Catalog, ChatClient, ConversationSession, QuizSession, ViewRouter};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};
use uuid::Uuid;

//=========================================================================================
// AppState (Shared Across All Requests)
//=========================================================================================

/// The shared application state, created once at startup and passed to all handlers.
///
/// Each quiz, conversation and view session is independent; nothing crosses between them.
pub struct AppState {
    pub config: Arc<Config>,
    pub catalog: Catalog,
    pub chat_client: ChatClient,
    pub quizzes: Mutex<HashMap<Uuid, QuizSession>>,
    /// Conversations are shared out as `Arc`s so the map lock is never held across a chat call.
    pub conversations: RwLock<HashMap<Uuid, Arc<ConversationSession>>>,
    pub views: Mutex<HashMap<Uuid, ViewRouter>>,
}

impl AppState {
    pub fn new(config: Arc<Config>, catalog: Catalog, chat_client: ChatClient) -> Self {
        Self {
            config,
            catalog,
            chat_client,
            quizzes: Mutex::new(HashMap::new()),
            conversations: RwLock::new(HashMap::new()),
            views: Mutex::new(HashMap::new()),
        }
    }
}
