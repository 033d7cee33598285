//! Task command handler
//!
//! Write-side use cases: create, update, complete, delete. Commands carry
//! raw strings; validation into value objects happens here so the API
//! layers stay thin.

use crate::data::TaskData;
use crate::ports::task_repository::{RepositoryError, TaskCommandRepository};
use std::sync::Arc;
use taskman_domain::{DomainError, Task, TaskDescription, TaskId, TaskTitle, UserId};
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur while handling a task command
#[derive(Error, Debug)]
pub enum TaskCommandError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl TaskCommandError {
    /// True when the failure is a client error rather than an internal one
    pub fn is_invalid_input(&self) -> bool {
        match self {
            TaskCommandError::Domain(e) => !e.is_not_found(),
            TaskCommandError::Repository(RepositoryError::InvalidId(_)) => true,
            TaskCommandError::Repository(_) => false,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, TaskCommandError::Domain(e) if e.is_not_found())
    }
}

/// Command to create a new task
#[derive(Debug, Clone)]
pub struct CreateTask {
    pub title: String,
    pub description: Option<String>,
}

/// Command to replace the title and description of an existing task
#[derive(Debug, Clone)]
pub struct UpdateTask {
    pub task_id: String,
    pub title: String,
    pub description: Option<String>,
}

/// Command to mark a task as completed
#[derive(Debug, Clone)]
pub struct CompleteTask {
    pub task_id: String,
}

/// Command to remove a task
#[derive(Debug, Clone)]
pub struct DeleteTask {
    pub task_id: String,
}

/// Write-side use cases for tasks
pub struct TaskCommandHandler {
    repository: Arc<dyn TaskCommandRepository>,
}

impl TaskCommandHandler {
    pub fn new(repository: Arc<dyn TaskCommandRepository>) -> Self {
        Self { repository }
    }

    /// Create a task owned by the anonymous user
    pub async fn create(&self, command: CreateTask) -> Result<TaskData, TaskCommandError> {
        let title = TaskTitle::new(command.title)?;
        let description = TaskDescription::new(command.description)?;

        let mut task = Task::new(title, UserId::anonymous());
        task.set_description(description);

        let task = self.repository.save(task).await?;
        info!(task_id = ?task.id(), "Created task");
        Ok(TaskData::from_task(&task)?)
    }

    /// Replace the title and description of an existing task
    pub async fn update(&self, command: UpdateTask) -> Result<TaskData, TaskCommandError> {
        let id = TaskId::new(command.task_id)?;
        let title = TaskTitle::new(command.title)?;
        let description = TaskDescription::new(command.description)?;

        let mut task = self.load(&id).await?;
        task.set_title(title);
        task.set_description(description);

        let task = self.repository.save(task).await?;
        debug!(task_id = %id, "Updated task");
        Ok(TaskData::from_task(&task)?)
    }

    /// Mark an existing task as completed
    pub async fn complete(&self, command: CompleteTask) -> Result<TaskData, TaskCommandError> {
        let id = TaskId::new(command.task_id)?;

        let mut task = self.load(&id).await?;
        task.complete();

        let task = self.repository.save(task).await?;
        debug!(task_id = %id, "Completed task");
        Ok(TaskData::from_task(&task)?)
    }

    /// Remove an existing task
    pub async fn delete(&self, command: DeleteTask) -> Result<(), TaskCommandError> {
        let id = TaskId::new(command.task_id)?;

        let task = self.load(&id).await?;
        self.repository.delete(task).await?;
        info!(task_id = %id, "Deleted task");
        Ok(())
    }

    async fn load(&self, id: &TaskId) -> Result<Task, TaskCommandError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::TaskNotFound(id.value().to_string()).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::support::InMemoryTaskRepository;

    fn handler() -> (Arc<InMemoryTaskRepository>, TaskCommandHandler) {
        let repo = Arc::new(InMemoryTaskRepository::new());
        let handler = TaskCommandHandler::new(repo.clone());
        (repo, handler)
    }

    #[tokio::test]
    async fn test_create_assigns_id_and_starts_open() {
        let (_, handler) = handler();
        let data = handler
            .create(CreateTask {
                title: "Buy milk".to_string(),
                description: Some("2 liters".to_string()),
            })
            .await
            .unwrap();

        assert!(!data.id.is_empty());
        assert_eq!(data.title, "Buy milk");
        assert_eq!(data.description, Some("2 liters".to_string()));
        assert!(!data.completed);
    }

    #[tokio::test]
    async fn test_create_rejects_blank_title() {
        let (_, handler) = handler();
        let err = handler
            .create(CreateTask {
                title: "   ".to_string(),
                description: None,
            })
            .await
            .unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[tokio::test]
    async fn test_update_replaces_title_and_description() {
        let (_, handler) = handler();
        let created = handler
            .create(CreateTask {
                title: "Buy milk".to_string(),
                description: None,
            })
            .await
            .unwrap();

        let updated = handler
            .update(UpdateTask {
                task_id: created.id.clone(),
                title: "Buy oat milk".to_string(),
                description: Some("1 liter".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.title, "Buy oat milk");
        assert_eq!(updated.description, Some("1 liter".to_string()));
    }

    #[tokio::test]
    async fn test_update_missing_task_is_not_found() {
        let (_, handler) = handler();
        let err = handler
            .update(UpdateTask {
                task_id: "000000000000000000000000".to_string(),
                title: "x".to_string(),
                description: None,
            })
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_complete_marks_task_completed() {
        let (_, handler) = handler();
        let created = handler
            .create(CreateTask {
                title: "Buy milk".to_string(),
                description: None,
            })
            .await
            .unwrap();

        let completed = handler
            .complete(CompleteTask {
                task_id: created.id,
            })
            .await
            .unwrap();
        assert!(completed.completed);
    }

    #[tokio::test]
    async fn test_delete_removes_task() {
        let (repo, handler) = handler();
        let created = handler
            .create(CreateTask {
                title: "Buy milk".to_string(),
                description: None,
            })
            .await
            .unwrap();

        handler
            .delete(DeleteTask {
                task_id: created.id,
            })
            .await
            .unwrap();
        assert!(repo.is_empty().await);
    }

    #[tokio::test]
    async fn test_delete_missing_task_is_not_found() {
        let (_, handler) = handler();
        let err = handler
            .delete(DeleteTask {
                task_id: "000000000000000000000000".to_string(),
            })
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }
}
