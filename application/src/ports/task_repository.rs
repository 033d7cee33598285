//! Task repository ports
//!
//! Reads and writes are split into two ports, so the assistant can depend
//! on the query side only. The MongoDB adapter in the infrastructure layer
//! implements both.

use async_trait::async_trait;
use taskman_domain::{Task, TaskId, TaskStatus};
use thiserror::Error;

/// Errors that can occur during repository operations
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// The id does not match the storage id format (e.g. not an ObjectId
    /// hex string). API layers treat this as an invalid argument, not an
    /// internal failure.
    #[error("Invalid task ID: {0}")]
    InvalidId(String),

    /// The store returned a document the domain rejects
    #[error("Corrupt task document: {0}")]
    CorruptDocument(String),

    /// Tried to delete a task that was never saved
    #[error("Task has not been saved")]
    NotPersisted,

    /// Driver or connection failure
    #[error("Storage error: {0}")]
    Storage(String),
}

/// Write operations on tasks
#[async_trait]
pub trait TaskCommandRepository: Send + Sync {
    /// Find a task by its id, returning `None` when absent
    async fn find_by_id(&self, id: &TaskId) -> Result<Option<Task>, RepositoryError>;

    /// Persist a task
    ///
    /// Inserts when the task has no id yet; replaces the whole document
    /// otherwise. Returns the saved task with its id assigned.
    async fn save(&self, task: Task) -> Result<Task, RepositoryError>;

    /// Remove a task from the store
    async fn delete(&self, task: Task) -> Result<(), RepositoryError>;
}

/// Read operations on tasks
#[async_trait]
pub trait TaskQueryRepository: Send + Sync {
    /// Find a task by its id, returning `None` when absent
    async fn find_by_id(&self, id: &TaskId) -> Result<Option<Task>, RepositoryError>;

    /// All tasks in the store
    async fn find_all(&self) -> Result<Vec<Task>, RepositoryError>;

    /// Tasks with the given status
    async fn find_by_status(&self, status: TaskStatus) -> Result<Vec<Task>, RepositoryError>;
}
