//! DTOs returned by the inbound handlers

use serde::{Deserialize, Serialize};
use taskman_domain::{DomainError, Task};

/// Task representation handed to the API layers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskData {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
}

impl TaskData {
    /// Map a saved task to its DTO
    ///
    /// Only saved tasks reach the API layers, so a missing id is a
    /// repository contract violation.
    pub fn from_task(task: &Task) -> Result<Self, DomainError> {
        let id = task
            .id()
            .ok_or_else(|| DomainError::InvalidTaskId("task has no id".to_string()))?;
        Ok(Self {
            id: id.value().to_string(),
            title: task.title().value().to_string(),
            description: task.description().value().map(str::to_string),
            completed: task.is_completed(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use taskman_domain::{Task, TaskTitle, UserId};

    #[test]
    fn test_unsaved_task_is_rejected() {
        let task = Task::new(TaskTitle::new("Buy milk").unwrap(), UserId::anonymous());
        assert!(TaskData::from_task(&task).is_err());
    }

    #[test]
    fn test_saved_task_maps_all_fields() {
        let task = Task::new(TaskTitle::new("Buy milk").unwrap(), UserId::anonymous());
        let state = task.to_state().with_id("65f000000000000000000001");
        let task = Task::from_state(state).unwrap();

        let data = TaskData::from_task(&task).unwrap();
        assert_eq!(data.id, "65f000000000000000000001");
        assert_eq!(data.title, "Buy milk");
        assert_eq!(data.description, None);
        assert!(!data.completed);
    }
}
