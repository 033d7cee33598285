//! Task value objects
//!
//! Validation lives in the constructors, so holding one of these types is
//! proof the value is well formed. All constructors trim their input first.

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Maximum title length in characters
pub const MAX_TITLE_LEN: usize = 100;

/// Maximum description length in characters
pub const MAX_DESCRIPTION_LEN: usize = 1000;

/// Identifier of a persisted task (Value Object)
///
/// The storage adapter decides the concrete format (an ObjectId hex string
/// for MongoDB); the domain only requires it to be non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaskId(String);

impl TaskId {
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into().trim().to_string();
        if value.is_empty() {
            return Err(DomainError::EmptyTaskId);
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> &str {
        &self.0
    }

    pub fn into_value(self) -> String {
        self.0
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Task title (Value Object) — non-empty, at most [`MAX_TITLE_LEN`] characters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskTitle(String);

impl TaskTitle {
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into().trim().to_string();
        if value.is_empty() {
            return Err(DomainError::EmptyTitle);
        }
        if value.chars().count() > MAX_TITLE_LEN {
            return Err(DomainError::TitleTooLong { max: MAX_TITLE_LEN });
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TaskTitle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Task description (Value Object) — optional, at most
/// [`MAX_DESCRIPTION_LEN`] characters when present
///
/// An empty or whitespace-only description normalizes to `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskDescription(Option<String>);

impl TaskDescription {
    pub fn new(value: Option<impl Into<String>>) -> Result<Self, DomainError> {
        match value {
            None => Ok(Self(None)),
            Some(v) => {
                let v = v.into().trim().to_string();
                if v.chars().count() > MAX_DESCRIPTION_LEN {
                    return Err(DomainError::DescriptionTooLong {
                        max: MAX_DESCRIPTION_LEN,
                    });
                }
                if v.is_empty() {
                    Ok(Self(None))
                } else {
                    Ok(Self(Some(v)))
                }
            }
        }
    }

    /// An empty description
    pub fn none() -> Self {
        Self(None)
    }

    pub fn value(&self) -> Option<&str> {
        self.0.as_deref()
    }

    pub fn into_value(self) -> Option<String> {
        self.0
    }
}

/// Identifier of a tag attached to a task (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TagId(String);

impl TagId {
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into().trim().to_string();
        if value.is_empty() {
            return Err(DomainError::EmptyTagId);
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_id_trims_input() {
        let id = TaskId::new("  abc123  ").unwrap();
        assert_eq!(id.value(), "abc123");
    }

    #[test]
    fn test_task_id_rejects_empty() {
        assert_eq!(TaskId::new(""), Err(DomainError::EmptyTaskId));
        assert_eq!(TaskId::new("   "), Err(DomainError::EmptyTaskId));
    }

    #[test]
    fn test_title_rejects_empty() {
        assert_eq!(TaskTitle::new("  "), Err(DomainError::EmptyTitle));
    }

    #[test]
    fn test_title_rejects_too_long() {
        let long = "x".repeat(MAX_TITLE_LEN + 1);
        assert_eq!(
            TaskTitle::new(long),
            Err(DomainError::TitleTooLong { max: MAX_TITLE_LEN })
        );
    }

    #[test]
    fn test_title_accepts_max_length() {
        let max = "x".repeat(MAX_TITLE_LEN);
        assert!(TaskTitle::new(max).is_ok());
    }

    #[test]
    fn test_description_accepts_none() {
        let d = TaskDescription::new(None::<String>).unwrap();
        assert_eq!(d.value(), None);
    }

    #[test]
    fn test_description_normalizes_blank_to_none() {
        let d = TaskDescription::new(Some("   ")).unwrap();
        assert_eq!(d.value(), None);
    }

    #[test]
    fn test_description_rejects_too_long() {
        let long = "x".repeat(MAX_DESCRIPTION_LEN + 1);
        assert_eq!(
            TaskDescription::new(Some(long)),
            Err(DomainError::DescriptionTooLong {
                max: MAX_DESCRIPTION_LEN
            })
        );
    }

    #[test]
    fn test_tag_id_rejects_empty() {
        assert_eq!(TagId::new(" "), Err(DomainError::EmptyTagId));
    }
}
