//! Application layer for task-manager
//!
//! This crate contains the inbound handlers (use cases), the outbound port
//! definitions, and the DTOs exchanged with the API layers. It depends only
//! on the domain layer.

pub mod data;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use data::TaskData;
pub use ports::{
    chat_model::{ChatModelError, ChatModelPort},
    task_repository::{RepositoryError, TaskCommandRepository, TaskQueryRepository},
};
pub use use_cases::assistant::{Ask, AssistantError, AssistantQueryHandler};
pub use use_cases::task_commands::{
    CompleteTask, CreateTask, DeleteTask, TaskCommandError, TaskCommandHandler, UpdateTask,
};
pub use use_cases::task_queries::{FindTaskById, TaskQueryError, TaskQueryHandler};
