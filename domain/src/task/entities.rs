//! Task aggregate

use crate::core::error::DomainError;
use crate::task::state::TaskState;
use crate::task::status::TaskStatus;
use crate::task::value_objects::{TagId, TaskDescription, TaskId, TaskTitle};
use crate::user::UserId;
use chrono::{DateTime, Utc};

/// Maximum number of tags a task may carry
pub const MAX_TAGS: usize = 3;

/// A task owned by a user (Entity)
///
/// The id is `None` until the task has been saved once; the storage adapter
/// assigns it. Identity-based equality only applies to saved tasks.
#[derive(Debug, Clone)]
pub struct Task {
    id: Option<TaskId>,
    user_id: UserId,
    title: TaskTitle,
    description: TaskDescription,
    status: TaskStatus,
    /// Insertion-ordered, duplicates ignored
    tags: Vec<TagId>,
    created_at: Option<DateTime<Utc>>,
    updated_at: Option<DateTime<Utc>>,
}

impl Task {
    /// Create a new unsaved task with `Todo` status and no description
    pub fn new(title: TaskTitle, user_id: UserId) -> Self {
        Self {
            id: None,
            user_id,
            title,
            description: TaskDescription::none(),
            status: TaskStatus::Todo,
            tags: Vec::new(),
            created_at: None,
            updated_at: None,
        }
    }

    pub fn id(&self) -> Option<&TaskId> {
        self.id.as_ref()
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn title(&self) -> &TaskTitle {
        &self.title
    }

    pub fn set_title(&mut self, title: TaskTitle) {
        self.title = title;
    }

    pub fn description(&self) -> &TaskDescription {
        &self.description
    }

    pub fn set_description(&mut self, description: TaskDescription) {
        self.description = description;
    }

    pub fn status(&self) -> TaskStatus {
        self.status
    }

    /// Mark the task as completed
    pub fn complete(&mut self) {
        self.status = TaskStatus::Completed;
    }

    pub fn is_completed(&self) -> bool {
        self.status == TaskStatus::Completed
    }

    /// Attach tags, ignoring duplicates
    ///
    /// Fails with [`DomainError::TooManyTags`] when the resulting tag count
    /// would exceed [`MAX_TAGS`]; no tags are attached in that case.
    pub fn add_tags(&mut self, tags: &[TagId]) -> Result<(), DomainError> {
        let new: Vec<&TagId> = tags.iter().filter(|t| !self.tags.contains(t)).collect();
        if self.tags.len() + new.len() > MAX_TAGS {
            return Err(DomainError::TooManyTags { max: MAX_TAGS });
        }
        self.tags.extend(new.into_iter().cloned());
        Ok(())
    }

    /// Detach tags; unknown tags are ignored
    pub fn remove_tags(&mut self, tags: &[TagId]) {
        self.tags.retain(|t| !tags.contains(t));
    }

    pub fn tags(&self) -> &[TagId] {
        &self.tags
    }

    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }

    // ------ State conversion ------

    /// Snapshot this task for persistence
    pub fn to_state(&self) -> TaskState {
        TaskState {
            id: self.id.as_ref().map(|id| id.value().to_string()),
            user_id: self.user_id.value().to_string(),
            title: self.title.value().to_string(),
            description: self.description.value().map(str::to_string),
            status: self.status.name().to_string(),
            tags: self.tags.iter().map(|t| t.value().to_string()).collect(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    /// Rebuild a saved task from its persisted state
    ///
    /// A state without an id cannot come back from storage, so it is
    /// rejected as an invalid id.
    pub fn from_state(state: TaskState) -> Result<Self, DomainError> {
        let id = state
            .id
            .ok_or_else(|| DomainError::InvalidTaskId("missing id".to_string()))?;
        let mut tags = Vec::new();
        for tag in state.tags {
            let tag = TagId::new(tag)?;
            if !tags.contains(&tag) {
                tags.push(tag);
            }
        }
        Ok(Self {
            id: Some(TaskId::new(id)?),
            user_id: UserId::new(state.user_id)?,
            title: TaskTitle::new(state.title)?,
            description: TaskDescription::new(state.description)?,
            status: state.status.parse()?,
            tags,
            created_at: state.created_at,
            updated_at: state.updated_at,
        })
    }
}

impl PartialEq for Task {
    /// Saved tasks compare by id; unsaved tasks are never equal
    fn eq(&self, other: &Self) -> bool {
        match (&self.id, &other.id) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }
}
