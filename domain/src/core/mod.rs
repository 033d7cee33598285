//! Core domain types shared across the task and assistant modules

pub mod error;
