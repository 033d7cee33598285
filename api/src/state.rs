//! Shared handler bundle for both transports

use std::sync::Arc;
use taskman_application::{AssistantQueryHandler, TaskCommandHandler, TaskQueryHandler};

/// The application handlers the API layers dispatch into
#[derive(Clone)]
pub struct Handlers {
    pub commands: Arc<TaskCommandHandler>,
    pub queries: Arc<TaskQueryHandler>,
    pub assistant: Arc<AssistantQueryHandler>,
}

impl Handlers {
    pub fn new(
        commands: Arc<TaskCommandHandler>,
        queries: Arc<TaskQueryHandler>,
        assistant: Arc<AssistantQueryHandler>,
    ) -> Self {
        Self {
            commands,
            queries,
            assistant,
        }
    }
}
