//! Chat model port
//!
//! Defines the interface for communicating with the LLM provider backing
//! the assistant. The Anthropic adapter lives in the infrastructure layer.

use async_trait::async_trait;
use taskman_domain::{ChatResponse, Message, ToolDefinition};
use thiserror::Error;

/// Errors that can occur when talking to the chat model
#[derive(Error, Debug)]
pub enum ChatModelError {
    #[error("Chat model transport error: {0}")]
    Http(String),

    #[error("Chat model API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Unexpected chat model response: {0}")]
    InvalidResponse(String),

    /// No API key configured; the assistant is disabled
    #[error("Chat model is not configured")]
    NotConfigured,
}

/// Gateway for one model turn
///
/// A call sends the full conversation so far plus the tool definitions and
/// returns the structured response. The multi-turn tool loop is driven by
/// the assistant handler, not the adapter.
#[async_trait]
pub trait ChatModelPort: Send + Sync {
    async fn chat(
        &self,
        system: &str,
        messages: &[Message],
        tools: &[ToolDefinition],
    ) -> Result<ChatResponse, ChatModelError>;
}
