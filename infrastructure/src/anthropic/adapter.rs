//! Chat model port implementation over the Anthropic messages API

use crate::anthropic::wire::{api_error, MessagesRequest, MessagesResponse, ANTHROPIC_VERSION};
use crate::config::AnthropicConfig;
use async_trait::async_trait;
use taskman_application::{ChatModelError, ChatModelPort};
use taskman_domain::{ChatResponse, Message, ToolDefinition};
use tracing::debug;

/// Chat model adapter calling the Anthropic messages API
pub struct AnthropicChatModel {
    client: reqwest::Client,
    api_key: String,
    model: String,
    max_tokens: u32,
    temperature: f64,
    base_url: String,
}

impl AnthropicChatModel {
    /// Build the adapter; fails when no API key is configured
    pub fn new(config: &AnthropicConfig) -> Result<Self, ChatModelError> {
        let api_key = config
            .api_key
            .clone()
            .ok_or(ChatModelError::NotConfigured)?;
        Ok(Self {
            client: reqwest::Client::new(),
            api_key,
            model: config.model.clone(),
            max_tokens: config.max_tokens,
            temperature: config.temperature,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl ChatModelPort for AnthropicChatModel {
    async fn chat(
        &self,
        system: &str,
        messages: &[Message],
        tools: &[ToolDefinition],
    ) -> Result<ChatResponse, ChatModelError> {
        let request = MessagesRequest {
            model: &self.model,
            max_tokens: self.max_tokens,
            temperature: self.temperature,
            system,
            messages,
            tools,
        };

        debug!(model = %self.model, messages = messages.len(), "Calling chat model");
        let response = self
            .client
            .post(format!("{}/v1/messages", self.base_url))
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&request)
            .send()
            .await
            .map_err(|e| ChatModelError::Http(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ChatModelError::Http(e.to_string()))?;

        if !status.is_success() {
            return Err(api_error(status.as_u16(), &body));
        }

        let parsed: MessagesResponse = serde_json::from_str(&body)
            .map_err(|e| ChatModelError::InvalidResponse(e.to_string()))?;
        Ok(parsed.into_chat_response())
    }
}

/// Stand-in used when no API key is configured
///
/// Keeps the assistant endpoints wired; every call reports the model as
/// unavailable instead of panicking at startup.
pub struct DisabledChatModel;

#[async_trait]
impl ChatModelPort for DisabledChatModel {
    async fn chat(
        &self,
        _system: &str,
        _messages: &[Message],
        _tools: &[ToolDefinition],
    ) -> Result<ChatResponse, ChatModelError> {
        Err(ChatModelError::NotConfigured)
    }
}
