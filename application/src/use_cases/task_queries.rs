//! Task query handler
//!
//! Read-side use cases: find by id and list.

use crate::data::TaskData;
use crate::ports::task_repository::{RepositoryError, TaskQueryRepository};
use std::sync::Arc;
use taskman_domain::{DomainError, TaskId};
use thiserror::Error;
use tracing::debug;

/// Errors that can occur while handling a task query
#[derive(Error, Debug)]
pub enum TaskQueryError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl TaskQueryError {
    pub fn is_invalid_input(&self) -> bool {
        match self {
            TaskQueryError::Domain(e) => !e.is_not_found(),
            TaskQueryError::Repository(RepositoryError::InvalidId(_)) => true,
            TaskQueryError::Repository(_) => false,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, TaskQueryError::Domain(e) if e.is_not_found())
    }
}

/// Query for a single task
#[derive(Debug, Clone)]
pub struct FindTaskById {
    pub task_id: String,
}

/// Read-side use cases for tasks
pub struct TaskQueryHandler {
    repository: Arc<dyn TaskQueryRepository>,
}

impl TaskQueryHandler {
    pub fn new(repository: Arc<dyn TaskQueryRepository>) -> Self {
        Self { repository }
    }

    /// Find a task by its id
    pub async fn find_by_id(&self, query: FindTaskById) -> Result<TaskData, TaskQueryError> {
        let id = TaskId::new(query.task_id)?;
        let task = self
            .repository
            .find_by_id(&id)
            .await?
            .ok_or_else(|| DomainError::TaskNotFound(id.value().to_string()))?;
        Ok(TaskData::from_task(&task)?)
    }

    /// All available tasks
    pub async fn list(&self) -> Result<Vec<TaskData>, TaskQueryError> {
        let tasks = self.repository.find_all().await?;
        debug!(count = tasks.len(), "Listed tasks");
        tasks
            .iter()
            .map(|t| TaskData::from_task(t).map_err(TaskQueryError::from))
            .collect()
    }
}
