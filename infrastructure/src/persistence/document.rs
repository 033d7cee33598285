//! BSON document shape for tasks
//!
//! Maps between the domain's [`TaskState`] snapshot and the collection
//! document. The `_id` is the storage identity; its hex form is the task
//! id everywhere above this layer.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};
use taskman_application::RepositoryError;
use taskman_domain::TaskState;

/// A task as stored in the `tasks` collection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub user_id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub status: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime>,
}

impl TaskDocument {
    /// Build a document from a state snapshot
    ///
    /// Fails with [`RepositoryError::InvalidId`] when the state carries an
    /// id that is not a valid ObjectId hex string.
    pub fn from_state(state: TaskState) -> Result<Self, RepositoryError> {
        let id = state.id.map(|id| parse_object_id(&id)).transpose()?;
        Ok(Self {
            id,
            user_id: state.user_id,
            title: state.title,
            description: state.description,
            status: state.status,
            tags: state.tags,
            created_at: state.created_at.map(to_bson_datetime),
            updated_at: state.updated_at.map(to_bson_datetime),
        })
    }

    /// Convert a stored document back into a state snapshot
    pub fn into_state(self) -> TaskState {
        TaskState {
            id: self.id.map(|id| id.to_hex()),
            user_id: self.user_id,
            title: self.title,
            description: self.description,
            status: self.status,
            tags: self.tags,
            created_at: self.created_at.and_then(to_chrono_datetime),
            updated_at: self.updated_at.and_then(to_chrono_datetime),
        }
    }
}

/// Parse a task id into its ObjectId form
pub(crate) fn parse_object_id(id: &str) -> Result<ObjectId, RepositoryError> {
    ObjectId::parse_str(id).map_err(|_| RepositoryError::InvalidId(id.to_string()))
}

// BSON datetimes carry millisecond precision, so domain timestamps are
// truncated on the way in.
fn to_bson_datetime(value: chrono::DateTime<chrono::Utc>) -> DateTime {
    DateTime::from_millis(value.timestamp_millis())
}

fn to_chrono_datetime(value: DateTime) -> Option<chrono::DateTime<chrono::Utc>> {
    chrono::DateTime::from_timestamp_millis(value.timestamp_millis())
}
