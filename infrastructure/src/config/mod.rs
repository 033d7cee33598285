//! Configuration loading for task-manager
//!
//! This module handles file I/O and merging of configuration from multiple
//! sources. The priority order (highest to lowest):
//!
//! 1. `TASKMAN_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./taskman.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/task-manager/config.toml`
//! 5. Default values
//!
//! `ANTHROPIC_API_KEY` is honored as a fallback for the assistant key.

mod file_config;
mod loader;

pub use file_config::{AnthropicConfig, FileConfig, MongoConfig, ServerConfig};
pub use loader::ConfigLoader;
