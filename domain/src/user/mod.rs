//! User identity
//!
//! Authentication is out of scope; commands run as the fixed `"anonymous"`
//! user until a real identity layer exists.

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Identifier of a task owner (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(String);

impl UserId {
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into().trim().to_string();
        if value.is_empty() {
            return Err(DomainError::EmptyUserId);
        }
        Ok(Self(value))
    }

    /// The placeholder owner used while there is no authentication
    pub fn anonymous() -> Self {
        Self("anonymous".to_string())
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_id_rejects_empty() {
        assert_eq!(UserId::new("  "), Err(DomainError::EmptyUserId));
    }

    #[test]
    fn test_anonymous_user() {
        assert_eq!(UserId::anonymous().value(), "anonymous");
    }
}
