//! Anthropic chat model adapter

mod adapter;
mod wire;

pub use adapter::{AnthropicChatModel, DisabledChatModel};
