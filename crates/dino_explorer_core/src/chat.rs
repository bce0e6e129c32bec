//! crates/dino_explorer_core/src/chat.rs
//!
//! The chat client: wraps a text-generation backend so that every call ends in a
//! displayable reply string, whatever happened on the way.

use crate::domain::{ChatRole, HistoryTurn};
use crate::ports::{GenerationRequest, TextGenerationService};
use std::sync::Arc;
use tracing::{error, warn};

pub const SYSTEM_INSTRUCTIONS: &str = r#"You are a friendly, enthusiastic, and knowledgeable Paleontologist Assistant named 'DinoBuddy'.
Your audience is children (ages 6-12) and curious adults.
Keep your answers educational, scientifically accurate but easy to understand.
Use analogies kids can understand (e.g., "as heavy as a school bus").
If asked about things not related to dinosaurs or prehistory, gently steer the conversation back to dinosaurs.
Format your responses with clean Markdown if necessary (bold for emphasis).
Be concise."#;

pub const GREETING: &str = "Roar! 🦖 I'm **DinoBuddy**, your paleo-pal! Ask me anything about dinosaurs, fossils, or the prehistoric world!";

pub const UNAVAILABLE_REPLY: &str =
    "I'm sorry, my brain (API Key) is missing. Please check the configuration.";
pub const SERVICE_ERROR_REPLY: &str =
    "Something went wrong while consulting the fossil records (API Error). Try again later!";
pub const EMPTY_REPLY: &str = "Roar! I couldn't think of an answer just now.";

pub const TEMPERATURE: f32 = 0.7;
pub const MAX_OUTPUT_TOKENS: u32 = 300;

/// Stateless client; each call receives the history it needs.
#[derive(Clone)]
pub struct ChatClient {
    backend: Option<Arc<dyn TextGenerationService>>,
}

impl ChatClient {
    pub fn new(backend: Arc<dyn TextGenerationService>) -> Self {
        Self {
            backend: Some(backend),
        }
    }

    /// A client with no credential configured. Every reply is [`UNAVAILABLE_REPLY`].
    pub fn unavailable() -> Self {
        Self { backend: None }
    }

    pub fn is_available(&self) -> bool {
        self.backend.is_some()
    }

    /// Builds the request sent for `message` following `history`.
    pub fn build_request(message: &str, history: &[HistoryTurn]) -> GenerationRequest {
        let mut turns = history.to_vec();
        turns.push(HistoryTurn {
            role: ChatRole::User,
            text: message.to_string(),
        });
        GenerationRequest {
            system_instruction: SYSTEM_INSTRUCTIONS.to_string(),
            turns,
            temperature: TEMPERATURE,
            max_output_tokens: MAX_OUTPUT_TOKENS,
        }
    }

    /// Sends `message` with the prior `history` and returns the assistant's reply.
    pub async fn send(&self, message: &str, history: &[HistoryTurn]) -> String {
        let Some(backend) = &self.backend else {
            return UNAVAILABLE_REPLY.to_string();
        };

        match backend.generate(Self::build_request(message, history)).await {
            Ok(text) if text.trim().is_empty() => {
                warn!("Text generation returned an empty reply.");
                EMPTY_REPLY.to_string()
            }
            Ok(text) => text,
            Err(e) => {
                error!("Text generation failed: {}", e);
                SERVICE_ERROR_REPLY.to_string()
            }
        }
    }
}
