//! Persistence snapshot of the task aggregate
//!
//! [`TaskState`] is the only shape in which a task crosses the storage
//! boundary. It carries plain values; all invariants are re-checked when
//! the aggregate is rebuilt via [`Task::from_state`](crate::Task::from_state).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Plain-value snapshot of a task
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskState {
    /// `None` until the task is first saved
    pub id: Option<String>,
    pub user_id: String,
    pub title: String,
    pub description: Option<String>,
    /// Status by name (`"TODO"`, `"COMPLETED"`)
    pub status: String,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Set by the storage adapter on insert
    pub created_at: Option<DateTime<Utc>>,
    /// Set by the storage adapter on every save
    pub updated_at: Option<DateTime<Utc>>,
}

impl TaskState {
    /// Copy this state with a new id, keeping everything else
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}
