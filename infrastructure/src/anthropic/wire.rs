//! Wire types for the Anthropic messages API
//!
//! The domain chat types serialize to the provider's block format
//! directly; these structs only add the request envelope and parse the
//! response envelope.

use serde::{Deserialize, Serialize};
use taskman_application::ChatModelError;
use taskman_domain::{ChatResponse, ContentBlock, Message, StopReason, ToolDefinition};

pub const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Request body for `POST /v1/messages`
#[derive(Debug, Serialize)]
pub struct MessagesRequest<'a> {
    pub model: &'a str,
    pub max_tokens: u32,
    pub temperature: f64,
    pub system: &'a str,
    pub messages: &'a [Message],
    #[serde(skip_serializing_if = "no_tools")]
    pub tools: &'a [ToolDefinition],
}

fn no_tools(tools: &&[ToolDefinition]) -> bool {
    tools.is_empty()
}

/// Response body for `POST /v1/messages`
#[derive(Debug, Deserialize)]
pub struct MessagesResponse {
    pub content: Vec<ContentBlock>,
    pub stop_reason: Option<String>,
}

impl MessagesResponse {
    pub fn into_chat_response(self) -> ChatResponse {
        let stop_reason = match self.stop_reason.as_deref() {
            Some("end_turn") | Some("stop_sequence") | None => StopReason::EndTurn,
            Some("tool_use") => StopReason::ToolUse,
            Some("max_tokens") => StopReason::MaxTokens,
            Some(other) => StopReason::Other(other.to_string()),
        };
        ChatResponse {
            content: self.content,
            stop_reason,
        }
    }
}

/// Error body the API returns on non-2xx responses
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
pub struct ErrorDetail {
    pub message: String,
}

/// Turn a non-2xx response body into a [`ChatModelError`]
pub fn api_error(status: u16, body: &str) -> ChatModelError {
    let message = serde_json::from_str::<ErrorResponse>(body)
        .map(|e| e.error.message)
        .unwrap_or_else(|_| body.to_string());
    ChatModelError::Api { status, message }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_serializes_provider_shape() {
        let messages = vec![Message::user("List my tasks")];
        let tools = vec![ToolDefinition {
            name: "get-tasks".to_string(),
            description: "Returns open tasks.".to_string(),
            input_schema: json!({"type": "object", "properties": {}}),
        }];
        let request = MessagesRequest {
            model: "claude-3-haiku-20240307",
            max_tokens: 1024,
            temperature: 0.0,
            system: "You are a task manager assistant.",
            messages: &messages,
            tools: &tools,
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["model"], "claude-3-haiku-20240307");
        assert_eq!(value["max_tokens"], 1024);
        assert_eq!(
            value["messages"][0],
            json!({
                "role": "user",
                "content": [{"type": "text", "text": "List my tasks"}],
            })
        );
        assert_eq!(value["tools"][0]["name"], "get-tasks");
    }

    #[test]
    fn test_tools_omitted_when_empty() {
        let messages = vec![Message::user("hi")];
        let request = MessagesRequest {
            model: "m",
            max_tokens: 1,
            temperature: 0.0,
            system: "",
            messages: &messages,
            tools: &[],
        };
        let value = serde_json::to_value(&request).unwrap();
        assert!(value.get("tools").is_none());
    }

    #[test]
    fn test_parse_text_response() {
        let body = json!({
            "content": [{"type": "text", "text": "Done!"}],
            "stop_reason": "end_turn",
        });
        let response: MessagesResponse = serde_json::from_value(body).unwrap();
        let chat = response.into_chat_response();
        assert_eq!(chat.text(), "Done!");
        assert_eq!(chat.stop_reason, StopReason::EndTurn);
    }

    #[test]
    fn test_parse_tool_use_response() {
        let body = json!({
            "content": [
                {"type": "text", "text": "Checking..."},
                {"type": "tool_use", "id": "toolu_1", "name": "get-tasks", "input": {}},
            ],
            "stop_reason": "tool_use",
        });
        let response: MessagesResponse = serde_json::from_value(body).unwrap();
        let chat = response.into_chat_response();
        assert!(chat.wants_tool());
        let (id, name) = chat.tool_use().unwrap().as_tool_use().unwrap();
        assert_eq!(id, "toolu_1");
        assert_eq!(name, "get-tasks");
    }

    #[test]
    fn test_api_error_extracts_message() {
        let err = api_error(401, r#"{"error": {"type": "authentication_error", "message": "invalid x-api-key"}}"#);
        match err {
            ChatModelError::Api { status, message } => {
                assert_eq!(status, 401);
                assert_eq!(message, "invalid x-api-key");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_api_error_falls_back_to_raw_body() {
        let err = api_error(502, "Bad Gateway");
        match err {
            ChatModelError::Api { message, .. } => assert_eq!(message, "Bad Gateway"),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
