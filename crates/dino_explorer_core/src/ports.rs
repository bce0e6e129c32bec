//! crates/dino_explorer_core/src/ports.rs
//!
//! Defines the service contracts (traits) for the application's core logic.
//! These traits form the boundary of the hexagonal architecture, allowing the core
//! to be independent of the concrete text-generation provider.

use async_trait::async_trait;
use crate::domain::HistoryTurn;

//=========================================================================================
// Generic Port Error and Result Types
//=========================================================================================

/// A generic error type for all port operations.
/// This abstracts away the specific errors from external services (e.g., network, provider SDK).
#[derive(Debug, thiserror::Error)]
pub enum PortError {
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("An unexpected error occurred: {0}")]
    Unexpected(String),
    #[error("Unauthorized")]
    Unauthorized,
}

/// A convenience type alias for `Result<T, PortError>`.
pub type PortResult<T> = Result<T, PortError>;

//=========================================================================================
// Request Types
//=========================================================================================

/// Everything a text-generation backend needs for one completion.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub system_instruction: String,
    /// Prior turns in transcript order, ending with the new user message.
    pub turns: Vec<HistoryTurn>,
    pub temperature: f32,
    pub max_output_tokens: u32,
}

//=========================================================================================
// Service Ports (Traits)
//=========================================================================================

#[async_trait]
pub trait TextGenerationService: Send + Sync {
    /// Generates a reply for the given conversation. An empty string is a valid reply.
    async fn generate(&self, request: GenerationRequest) -> PortResult<String>;
}
