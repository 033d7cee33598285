//! Inbound handlers
//!
//! Each handler is a use case: it validates input into domain value
//! objects, drives the aggregate, and talks to storage through the
//! outbound ports.

pub mod assistant;
pub mod task_commands;
pub mod task_queries;

#[cfg(test)]
pub(crate) mod support;
