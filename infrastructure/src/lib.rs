//! Infrastructure layer for task-manager
//!
//! Adapters for the outbound ports: MongoDB persistence, the Anthropic
//! chat model, and configuration loading.

pub mod anthropic;
pub mod config;
pub mod persistence;

// Re-export commonly used types
pub use anthropic::{AnthropicChatModel, DisabledChatModel};
pub use config::{AnthropicConfig, ConfigLoader, FileConfig, MongoConfig, ServerConfig};
pub use persistence::MongoTaskRepository;
