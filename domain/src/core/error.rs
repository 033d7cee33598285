//! Domain error types

use thiserror::Error;

/// Domain-level errors
///
/// Every business-rule violation is one of these variants. The API layers
/// map [`DomainError::TaskNotFound`] to a not-found response and all other
/// variants to an invalid-argument response.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Title cannot be empty")]
    EmptyTitle,

    #[error("Title cannot be longer than {max} characters")]
    TitleTooLong { max: usize },

    #[error("Description cannot be longer than {max} characters")]
    DescriptionTooLong { max: usize },

    #[error("Task ID cannot be empty")]
    EmptyTaskId,

    #[error("Tag ID cannot be empty")]
    EmptyTagId,

    #[error("User ID cannot be empty")]
    EmptyUserId,

    #[error("Invalid task ID: {0}")]
    InvalidTaskId(String),

    #[error("Task with id [{0}] not found")]
    TaskNotFound(String),

    #[error("Task cannot have more than {max} tags")]
    TooManyTags { max: usize },

    #[error("Unknown task status: {0}")]
    UnknownStatus(String),

    #[error("Prompt cannot be empty")]
    EmptyPrompt,
}

impl DomainError {
    /// Check if this error represents a missing task
    pub fn is_not_found(&self) -> bool {
        matches!(self, DomainError::TaskNotFound(_))
    }
}
