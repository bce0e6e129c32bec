//! services/api/src/adapters/chat_llm.rs
//!
//! This module contains the adapter for the DinoBuddy chat LLM.
//! It implements the `TextGenerationService` port from the `core` crate.

use async_openai::{
    config::OpenAIConfig,
    error::OpenAIError,
    types::chat::{
        ChatCompletionRequestAssistantMessageArgs, ChatCompletionRequestMessage,
        ChatCompletionRequestSystemMessageArgs, ChatCompletionRequestUserMessageArgs,
        CreateChatCompletionRequestArgs,
    },
    Client,
};
use async_trait::async_trait;
use dino_explorer_core::{
    domain::{ChatRole, HistoryTurn},
    ports::{GenerationRequest, PortError, PortResult, TextGenerationService},
};
use tracing::debug;

//=========================================================================================
// The Main Adapter Struct
//=========================================================================================

/// An adapter that implements `TextGenerationService` using an OpenAI-compatible LLM.
#[derive(Clone)]
pub struct OpenAiChatAdapter {
    client: Client<OpenAIConfig>,
    model: String,
}

impl OpenAiChatAdapter {
    /// Creates a new `OpenAiChatAdapter`.
    pub fn new(client: Client<OpenAIConfig>, model: String) -> Self {
        Self { client, model }
    }

    fn to_message(turn: &HistoryTurn) -> PortResult<ChatCompletionRequestMessage> {
        let message = match turn.role {
            ChatRole::User => ChatCompletionRequestMessage::User(
                ChatCompletionRequestUserMessageArgs::default()
                    .content(turn.text.as_str())
                    .build()
                    .map_err(|e| PortError::Unexpected(e.to_string()))?,
            ),
            ChatRole::Assistant => ChatCompletionRequestMessage::Assistant(
                ChatCompletionRequestAssistantMessageArgs::default()
                    .content(turn.text.as_str())
                    .build()
                    .map_err(|e| PortError::Unexpected(e.to_string()))?,
            ),
        };
        Ok(message)
    }
}

//=========================================================================================
// `TextGenerationService` Trait Implementation
//=========================================================================================

#[async_trait]
impl TextGenerationService for OpenAiChatAdapter {
    /// Sends the system instruction and the ordered turns as one chat completion.
    async fn generate(&self, request: GenerationRequest) -> PortResult<String> {
        let mut messages = Vec::with_capacity(request.turns.len() + 1);
        messages.push(ChatCompletionRequestMessage::System(
            ChatCompletionRequestSystemMessageArgs::default()
                .content(request.system_instruction.as_str())
                .build()
                .map_err(|e| PortError::Unexpected(e.to_string()))?,
        ));
        for turn in &request.turns {
            messages.push(Self::to_message(turn)?);
        }

        let chat_request = CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .messages(messages)
            .max_tokens(request.max_output_tokens)
            .temperature(request.temperature)
            .build()
            .map_err(|e| PortError::Unexpected(e.to_string()))?;

        debug!(
            model = %self.model,
            turns = request.turns.len(),
            "Sending chat completion request."
        );

        // Map the SDK error manually, which respects the orphan rule.
        let response = self
            .client
            .chat()
            .create(chat_request)
            .await
            .map_err(|e: OpenAIError| PortError::Unexpected(e.to_string()))?;

        // An empty reply is not an error here; the chat client substitutes its fallback.
        Ok(response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .unwrap_or_default())
    }
}
