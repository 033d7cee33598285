//! MongoDB task repository
//!
//! Implements both repository ports against one collection. Saves are
//! whole-document writes: insert when the task has no id, otherwise a
//! `replace_one` on `_id` (the aggregate snapshot carries the full state,
//! so field-level updates are unnecessary).

use crate::persistence::document::{parse_object_id, TaskDocument};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures::TryStreamExt;
use mongodb::bson::doc;
use mongodb::{Client, Collection};
use taskman_application::{RepositoryError, TaskCommandRepository, TaskQueryRepository};
use taskman_domain::{Task, TaskId, TaskState, TaskStatus};
use tracing::debug;

const COLLECTION: &str = "tasks";

/// Task repository backed by a MongoDB collection
pub struct MongoTaskRepository {
    collection: Collection<TaskDocument>,
}

impl MongoTaskRepository {
    /// Open the repository against the given database
    pub fn new(client: &Client, database: &str) -> Self {
        Self {
            collection: client.database(database).collection(COLLECTION),
        }
    }

    /// Connect from configuration
    ///
    /// The driver connects lazily, so this succeeds even when the server
    /// is not reachable yet; operations fail with a storage error instead.
    pub async fn connect(config: &crate::config::MongoConfig) -> Result<Self, RepositoryError> {
        let client = Client::with_uri_str(&config.uri).await.map_err(storage)?;
        Ok(Self::new(&client, &config.database))
    }

    async fn find_document(&self, id: &TaskId) -> Result<Option<Task>, RepositoryError> {
        let oid = parse_object_id(id.value())?;
        let document = self
            .collection
            .find_one(doc! { "_id": oid })
            .await
            .map_err(storage)?;
        document.map(rebuild).transpose()
    }

    async fn collect(
        &self,
        cursor: mongodb::Cursor<TaskDocument>,
    ) -> Result<Vec<Task>, RepositoryError> {
        let documents: Vec<TaskDocument> = cursor.try_collect().await.map_err(storage)?;
        documents.into_iter().map(rebuild).collect()
    }
}

#[async_trait]
impl TaskCommandRepository for MongoTaskRepository {
    async fn find_by_id(&self, id: &TaskId) -> Result<Option<Task>, RepositoryError> {
        self.find_document(id).await
    }

    async fn save(&self, task: Task) -> Result<Task, RepositoryError> {
        let state = stamp_for_save(task.to_state(), Utc::now());
        let document = TaskDocument::from_state(state.clone())?;

        let state = match document.id {
            None => {
                let result = self
                    .collection
                    .insert_one(&document)
                    .await
                    .map_err(storage)?;
                let oid = result.inserted_id.as_object_id().ok_or_else(|| {
                    RepositoryError::Storage("insert did not return an ObjectId".to_string())
                })?;
                debug!(task_id = %oid.to_hex(), "Inserted task document");
                state.with_id(oid.to_hex())
            }
            Some(oid) => {
                let result = self
                    .collection
                    .replace_one(doc! { "_id": oid }, &document)
                    .await
                    .map_err(storage)?;
                if result.matched_count == 0 {
                    return Err(RepositoryError::Storage(format!(
                        "replace matched no document for id {}",
                        oid.to_hex()
                    )));
                }
                debug!(task_id = %oid.to_hex(), "Replaced task document");
                state
            }
        };

        rebuild_state(state)
    }

    async fn delete(&self, task: Task) -> Result<(), RepositoryError> {
        let id = task.id().ok_or(RepositoryError::NotPersisted)?;
        let oid = parse_object_id(id.value())?;
        self.collection
            .delete_one(doc! { "_id": oid })
            .await
            .map_err(storage)?;
        debug!(task_id = %oid.to_hex(), "Deleted task document");
        Ok(())
    }
}

#[async_trait]
impl TaskQueryRepository for MongoTaskRepository {
    async fn find_by_id(&self, id: &TaskId) -> Result<Option<Task>, RepositoryError> {
        self.find_document(id).await
    }

    async fn find_all(&self) -> Result<Vec<Task>, RepositoryError> {
        let cursor = self.collection.find(doc! {}).await.map_err(storage)?;
        self.collect(cursor).await
    }

    async fn find_by_status(&self, status: TaskStatus) -> Result<Vec<Task>, RepositoryError> {
        let cursor = self
            .collection
            .find(doc! { "status": status.name() })
            .await
            .map_err(storage)?;
        self.collect(cursor).await
    }
}

/// Stamp save timestamps onto a state snapshot
///
/// `updated_at` is set on every save; `created_at` only when the task has
/// no id yet and is about to be inserted.
fn stamp_for_save(mut state: TaskState, now: DateTime<Utc>) -> TaskState {
    state.updated_at = Some(now);
    if state.id.is_none() {
        state.created_at = Some(now);
    }
    state
}

fn storage(e: mongodb::error::Error) -> RepositoryError {
    RepositoryError::Storage(e.to_string())
}

fn rebuild(document: TaskDocument) -> Result<Task, RepositoryError> {
    rebuild_state(document.into_state())
}

fn rebuild_state(state: TaskState) -> Result<Task, RepositoryError> {
    Task::from_state(state).map_err(|e| RepositoryError::CorruptDocument(e.to_string()))
}
