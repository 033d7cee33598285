//! Shared test doubles for the transport tests

use crate::state::Handlers;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use taskman_application::{
    AssistantQueryHandler, ChatModelError, ChatModelPort, RepositoryError, TaskCommandHandler,
    TaskCommandRepository, TaskQueryHandler, TaskQueryRepository,
};
use taskman_domain::{ChatResponse, Message, Task, TaskId, TaskStatus, ToolDefinition};
use tokio::sync::RwLock;

/// HashMap-backed repository with ObjectId-shaped sequential ids
struct MemoryRepo {
    tasks: RwLock<HashMap<String, Task>>,
    next_id: AtomicU64,
}

impl MemoryRepo {
    fn new() -> Self {
        Self {
            tasks: RwLock::new(HashMap::new()),
            next_id: AtomicU64::new(1),
        }
    }
}

#[async_trait]
impl TaskCommandRepository for MemoryRepo {
    async fn find_by_id(&self, id: &TaskId) -> Result<Option<Task>, RepositoryError> {
        Ok(self.tasks.read().await.get(id.value()).cloned())
    }

    async fn save(&self, task: Task) -> Result<Task, RepositoryError> {
        let task = match task.id() {
            Some(id) => {
                self.tasks
                    .write()
                    .await
                    .insert(id.value().to_string(), task.clone());
                task
            }
            None => {
                let n = self.next_id.fetch_add(1, Ordering::SeqCst);
                let id = format!("{n:024x}");
                let task = Task::from_state(task.to_state().with_id(&id))
                    .map_err(|e| RepositoryError::CorruptDocument(e.to_string()))?;
                self.tasks.write().await.insert(id, task.clone());
                task
            }
        };
        Ok(task)
    }

    async fn delete(&self, task: Task) -> Result<(), RepositoryError> {
        let id = task.id().ok_or(RepositoryError::NotPersisted)?;
        self.tasks.write().await.remove(id.value());
        Ok(())
    }
}

#[async_trait]
impl TaskQueryRepository for MemoryRepo {
    async fn find_by_id(&self, id: &TaskId) -> Result<Option<Task>, RepositoryError> {
        Ok(self.tasks.read().await.get(id.value()).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Task>, RepositoryError> {
        Ok(self.tasks.read().await.values().cloned().collect())
    }

    async fn find_by_status(&self, status: TaskStatus) -> Result<Vec<Task>, RepositoryError> {
        Ok(self
            .tasks
            .read()
            .await
            .values()
            .filter(|t| t.status() == status)
            .cloned()
            .collect())
    }
}

/// Chat model stub for transports; unconfigured like a deployment
/// without an API key
struct NoChatModel;

#[async_trait]
impl ChatModelPort for NoChatModel {
    async fn chat(
        &self,
        _system: &str,
        _messages: &[Message],
        _tools: &[ToolDefinition],
    ) -> Result<ChatResponse, ChatModelError> {
        Err(ChatModelError::NotConfigured)
    }
}

/// Handlers wired to an in-memory repository and no chat model
pub(crate) fn handlers_with_memory_repo() -> Handlers {
    let repo = Arc::new(MemoryRepo::new());
    Handlers::new(
        Arc::new(TaskCommandHandler::new(repo.clone())),
        Arc::new(TaskQueryHandler::new(repo.clone())),
        Arc::new(AssistantQueryHandler::new(Arc::new(NoChatModel), repo)),
    )
}
