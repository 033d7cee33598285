//! Domain layer for task-manager
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Task aggregate
//!
//! A [`Task`] is owned by a user and moves from `Todo` to `Completed`.
//! All field-level rules (title length, description length, tag cap) live
//! in the value objects, so an invalid `Task` cannot be constructed.
//!
//! ## State snapshots
//!
//! The aggregate crosses the persistence boundary only as a [`TaskState`]
//! snapshot of plain values. Adapters map snapshots to their own document
//! types and never touch the aggregate directly.
//!
//! ## Assistant
//!
//! The assistant sub-module holds the chat message/content-block types and
//! the prompt rules for the AI assistant. The actual model call is a port
//! implemented in the infrastructure layer.

pub mod assistant;
pub mod core;
pub mod task;
pub mod user;

// Re-export commonly used types
pub use assistant::{
    chat::{ChatMemory, ChatResponse, ContentBlock, Message, Role, StopReason, ToolDefinition},
    prompt::{render_tasks, Prompt, GET_TASKS_TOOL, SYSTEM_PROMPT},
};
pub use crate::core::error::DomainError;
pub use task::{
    entities::Task,
    state::TaskState,
    status::TaskStatus,
    value_objects::{TagId, TaskDescription, TaskId, TaskTitle},
};
pub use user::UserId;
