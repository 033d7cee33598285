//! Shared test doubles for the use-case tests

use crate::ports::task_repository::{
    RepositoryError, TaskCommandRepository, TaskQueryRepository,
};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use taskman_domain::{Task, TaskId, TaskStatus};
use tokio::sync::RwLock;

/// HashMap-backed repository with ObjectId-shaped sequential ids
pub(crate) struct InMemoryTaskRepository {
    tasks: RwLock<HashMap<String, Task>>,
    next_id: AtomicU64,
}

impl InMemoryTaskRepository {
    pub(crate) fn new() -> Self {
        Self {
            tasks: RwLock::new(HashMap::new()),
            next_id: AtomicU64::new(1),
        }
    }

    /// Seed a task directly, assigning an id
    pub(crate) async fn insert(&self, task: Task) -> Task {
        let id = self.generate_id();
        let task = Task::from_state(task.to_state().with_id(&id)).unwrap();
        self.tasks.write().await.insert(id, task.clone());
        task
    }

    pub(crate) async fn is_empty(&self) -> bool {
        self.tasks.read().await.is_empty()
    }

    fn generate_id(&self) -> String {
        let n = self.next_id.fetch_add(1, Ordering::SeqCst);
        format!("{n:024x}")
    }
}

#[async_trait]
impl TaskCommandRepository for InMemoryTaskRepository {
    async fn find_by_id(&self, id: &TaskId) -> Result<Option<Task>, RepositoryError> {
        Ok(self.tasks.read().await.get(id.value()).cloned())
    }

    async fn save(&self, task: Task) -> Result<Task, RepositoryError> {
        let task = match task.id() {
            Some(id) => {
                let id = id.value().to_string();
                self.tasks.write().await.insert(id, task.clone());
                task
            }
            None => self.insert(task).await,
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
impl TaskQueryRepository for InMemoryTaskRepository {
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
