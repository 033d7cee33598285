//! Chat conversation types
//!
//! These model the messages API of tool-capable chat providers: a response
//! is an array of content blocks mixing text and tool-use requests, plus a
//! stop reason. When the stop reason is `ToolUse`, the caller executes the
//! requested tool and sends the result back as a user-role message to
//! continue the turn.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Role of a message in a conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// A message in a conversation
///
/// Tool results travel as user-role messages carrying a `ToolResult` block,
/// matching the provider wire format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: Vec<ContentBlock>,
}

impl Message {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: vec![ContentBlock::Text { text: text.into() }],
        }
    }

    pub fn assistant(content: Vec<ContentBlock>) -> Self {
        Self {
            role: Role::Assistant,
            content,
        }
    }

    /// A user-role message answering a tool-use request
    pub fn tool_result(tool_use_id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: vec![ContentBlock::ToolResult {
                tool_use_id: tool_use_id.into(),
                content: content.into(),
            }],
        }
    }
}

/// A single block of content within a message
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBlock {
    /// Plain text from the model or the user
    Text { text: String },

    /// A tool invocation requested by the model
    ToolUse {
        /// Provider-assigned id, echoed back in the tool result
        id: String,
        name: String,
        input: Value,
    },

    /// The outcome of a tool invocation, sent back to the model
    ToolResult { tool_use_id: String, content: String },
}

impl ContentBlock {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ContentBlock::Text { text } => Some(text),
            _ => None,
        }
    }

    /// Returns `(id, name)` if this is a tool-use block
    pub fn as_tool_use(&self) -> Option<(&str, &str)> {
        match self {
            ContentBlock::ToolUse { id, name, .. } => Some((id, name)),
            _ => None,
        }
    }
}

/// Reason the model stopped generating
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    /// Natural end of response
    EndTurn,
    /// The model wants a tool executed
    ToolUse,
    /// Hit the token limit; the response may be truncated
    MaxTokens,
    /// Provider-specific stop reason
    Other(String),
}

/// A structured model response
#[derive(Debug, Clone)]
pub struct ChatResponse {
    pub content: Vec<ContentBlock>,
    pub stop_reason: StopReason,
}

impl ChatResponse {
    /// Concatenate all text blocks
    pub fn text(&self) -> String {
        self.content
            .iter()
            .filter_map(ContentBlock::as_text)
            .collect::<Vec<_>>()
            .join("")
    }

    /// First tool-use block, if any
    pub fn tool_use(&self) -> Option<&ContentBlock> {
        self.content
            .iter()
            .find(|b| matches!(b, ContentBlock::ToolUse { .. }))
    }

    pub fn wants_tool(&self) -> bool {
        self.stop_reason == StopReason::ToolUse
    }
}

/// Sliding-window conversation memory
///
/// Keeps the most recent messages up to a fixed window. Trimming never
/// leaves a dangling tool result at the front of the window, since the
/// provider rejects a tool result without its preceding tool use.
#[derive(Debug, Clone)]
pub struct ChatMemory {
    window: usize,
    messages: Vec<Message>,
}

impl ChatMemory {
    pub fn new(window: usize) -> Self {
        Self {
            window,
            messages: Vec::new(),
        }
    }

    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
        self.trim();
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    fn trim(&mut self) {
        while self.messages.len() > self.window {
            self.messages.remove(0);
        }
        while self
            .messages
            .first()
            .is_some_and(|m| matches!(m.content.first(), Some(ContentBlock::ToolResult { .. })))
        {
            self.messages.remove(0);
        }
    }
}

/// Definition of a tool offered to the model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    /// JSON schema for the tool input
    pub input_schema: Value,
}
