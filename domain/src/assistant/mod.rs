//! Assistant domain
//!
//! Chat message shapes for the model conversation and the prompt rules the
//! assistant enforces. The model call itself is an outbound port.

pub mod chat;
pub mod prompt;
