//! Assistant query handler
//!
//! Drives the tool-use chat loop: the model is offered a `get-tasks` tool;
//! when it asks for it, the handler fetches the open tasks through the
//! query repository, renders them, and feeds the result back until the
//! model produces a final answer.

use crate::ports::chat_model::{ChatModelError, ChatModelPort};
use crate::ports::task_repository::{RepositoryError, TaskQueryRepository};
use serde_json::json;
use std::sync::Arc;
use taskman_domain::{
    render_tasks, ChatMemory, ContentBlock, DomainError, Message, Prompt, TaskStatus,
    ToolDefinition, GET_TASKS_TOOL, SYSTEM_PROMPT,
};
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{debug, warn};

/// Window of the in-process conversation memory
const MEMORY_WINDOW: usize = 10;

/// Upper bound on tool round-trips within one ask
const MAX_TOOL_TURNS: usize = 4;

/// Errors that can occur while handling an assistant query
#[derive(Error, Debug)]
pub enum AssistantError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    ChatModel(#[from] ChatModelError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error("No response from model")]
    EmptyResponse,

    #[error("Model exceeded the tool turn budget")]
    ToolLoop,
}

impl AssistantError {
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, AssistantError::Domain(DomainError::EmptyPrompt))
    }
}

/// Query to ask the assistant a question
#[derive(Debug, Clone)]
pub struct Ask {
    pub prompt: String,
}

/// Use case for asking the task-manager assistant
///
/// Conversation memory is a per-process sliding window; it is not
/// persisted across restarts.
pub struct AssistantQueryHandler {
    chat_model: Arc<dyn ChatModelPort>,
    tasks: Arc<dyn TaskQueryRepository>,
    memory: Mutex<ChatMemory>,
}

impl AssistantQueryHandler {
    pub fn new(chat_model: Arc<dyn ChatModelPort>, tasks: Arc<dyn TaskQueryRepository>) -> Self {
        Self {
            chat_model,
            tasks,
            memory: Mutex::new(ChatMemory::new(MEMORY_WINDOW)),
        }
    }

    /// Ask the assistant a question and get its final answer
    pub async fn ask(&self, query: Ask) -> Result<String, AssistantError> {
        let prompt = Prompt::new(query.prompt)?;
        let tools = [get_tasks_tool()];

        // The whole ask holds the memory lock: concurrent asks share one
        // conversation, so interleaving their turns would corrupt it.
        let mut memory = self.memory.lock().await;
        memory.push(Message::user(prompt.into_value()));

        let mut tool_turns = 0;
        loop {
            let response = self
                .chat_model
                .chat(SYSTEM_PROMPT, memory.messages(), &tools)
                .await?;
            memory.push(Message::assistant(response.content.clone()));

            if response.wants_tool() {
                tool_turns += 1;
                if tool_turns > MAX_TOOL_TURNS {
                    warn!("Assistant exceeded tool turn budget");
                    return Err(AssistantError::ToolLoop);
                }
                let Some(ContentBlock::ToolUse { id, name, .. }) = response.tool_use().cloned()
                else {
                    return Err(AssistantError::EmptyResponse);
                };
                let result = self.execute_tool(&name).await?;
                debug!(tool = %name, "Executed assistant tool");
                memory.push(Message::tool_result(id, result));
                continue;
            }

            let text = response.text();
            if text.trim().is_empty() {
                return Err(AssistantError::EmptyResponse);
            }
            return Ok(text);
        }
    }

    async fn execute_tool(&self, name: &str) -> Result<String, AssistantError> {
        if name != GET_TASKS_TOOL {
            // The API enforces tool names against the offered definitions,
            // so this only fires on a misbehaving provider.
            warn!(tool = %name, "Model requested unknown tool");
            return Ok(format!("Unknown tool: {name}"));
        }
        let tasks = self.tasks.find_by_status(TaskStatus::Todo).await?;
        let states: Vec<_> = tasks.iter().map(|t| t.to_state()).collect();
        Ok(render_tasks(&states))
    }
}

fn get_tasks_tool() -> ToolDefinition {
    ToolDefinition {
        name: GET_TASKS_TOOL.to_string(),
        description: "Returns information about tasks with TODO status.".to_string(),
        input_schema: json!({
            "type": "object",
            "properties": {},
        }),
    }
}
