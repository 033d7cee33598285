//! Assistant prompt rules and task rendering

use crate::core::error::DomainError;
use crate::task::state::TaskState;

/// System prompt for the task-manager assistant
pub const SYSTEM_PROMPT: &str = "You are a helpful polite task manager assistant. \
Don't print information about used tools. \
Use the same language used by the user in your responses. \
Reject any requests that are not related to task management.";

/// Name of the tool exposing open tasks to the model
pub const GET_TASKS_TOOL: &str = "get-tasks";

/// A validated user prompt (Value Object)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt(String);

impl Prompt {
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into().trim().to_string();
        if value.is_empty() {
            return Err(DomainError::EmptyPrompt);
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> &str {
        &self.0
    }

    pub fn into_value(self) -> String {
        self.0
    }
}

/// Render task snapshots as the tagged block the `get-tasks` tool returns
///
/// The model consumes this verbatim, so the shape is part of the assistant
/// contract: `<tasks><task><id>..</id><title>..</title><description>..
/// </description></task>...</tasks>`.
pub fn render_tasks(tasks: &[TaskState]) -> String {
    let mut out = String::from("<tasks>");
    for task in tasks {
        out.push_str("<task>");
        out.push_str("<id>");
        out.push_str(task.id.as_deref().unwrap_or(""));
        out.push_str("</id>");
        out.push_str("<title>");
        out.push_str(&task.title);
        out.push_str("</title>");
        out.push_str("<description>");
        out.push_str(task.description.as_deref().unwrap_or(""));
        out.push_str("</description>");
        out.push_str("</task>");
    }
    out.push_str("</tasks>");
    out
}
