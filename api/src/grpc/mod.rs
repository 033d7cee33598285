//! gRPC service implementation
//!
//! DTO mapping and status-code discipline only; all behavior lives in the
//! application handlers. Status mapping follows one rule: `TaskNotFound`
//! is `NOT_FOUND`, other domain violations are `INVALID_ARGUMENT` with the
//! domain message, and everything else is a generic `INTERNAL` (the detail
//! goes to the log, never to the client).

use crate::proto::task_manager_server::TaskManager;
use crate::proto::{
    ChatRequest, ChatResponse, CompleteTaskRequest, CreateTaskRequest, DeleteTaskRequest,
    DeleteTaskResponse, FindTaskByIdRequest, GetTasksRequest, Task, TaskList, UpdateTaskRequest,
};
use crate::state::Handlers;
use taskman_application::{
    Ask, AssistantError, CompleteTask, CreateTask, DeleteTask, FindTaskById, TaskCommandError,
    TaskData, TaskQueryError, UpdateTask,
};
use tonic::{Request, Response, Status};
use tracing::{debug, error};

const INTERNAL_MESSAGE: &str = "Something went wrong";

/// The task-manager gRPC service
pub struct TaskManagerGrpcService {
    handlers: Handlers,
}

impl TaskManagerGrpcService {
    pub fn new(handlers: Handlers) -> Self {
        Self { handlers }
    }
}

#[tonic::async_trait]
impl TaskManager for TaskManagerGrpcService {
    async fn get_tasks(
        &self,
        _request: Request<GetTasksRequest>,
    ) -> Result<Response<TaskList>, Status> {
        let tasks = self
            .handlers
            .queries
            .list()
            .await
            .map_err(|e| query_status("Cannot get tasks", e))?;
        Ok(Response::new(TaskList {
            tasks: tasks.iter().map(to_proto_task).collect(),
        }))
    }

    async fn create_task(
        &self,
        request: Request<CreateTaskRequest>,
    ) -> Result<Response<Task>, Status> {
        let request = request.into_inner();
        let data = self
            .handlers
            .commands
            .create(CreateTask {
                title: request.title,
                description: Some(request.description),
            })
            .await
            .map_err(|e| command_status("Cannot create task", e))?;
        Ok(Response::new(to_proto_task(&data)))
    }

    async fn find_task_by_id(
        &self,
        request: Request<FindTaskByIdRequest>,
    ) -> Result<Response<Task>, Status> {
        let request = request.into_inner();
        let data = self
            .handlers
            .queries
            .find_by_id(FindTaskById {
                task_id: request.id,
            })
            .await
            .map_err(|e| query_status("Cannot find task by id", e))?;
        Ok(Response::new(to_proto_task(&data)))
    }

    async fn update_task(
        &self,
        request: Request<UpdateTaskRequest>,
    ) -> Result<Response<Task>, Status> {
        let request = request.into_inner();
        let data = self
            .handlers
            .commands
            .update(UpdateTask {
                task_id: request.id,
                title: request.title,
                description: Some(request.description),
            })
            .await
            .map_err(|e| command_status("Cannot update task", e))?;
        Ok(Response::new(to_proto_task(&data)))
    }

    async fn complete_task(
        &self,
        request: Request<CompleteTaskRequest>,
    ) -> Result<Response<Task>, Status> {
        let request = request.into_inner();
        let data = self
            .handlers
            .commands
            .complete(CompleteTask {
                task_id: request.id,
            })
            .await
            .map_err(|e| command_status("Cannot complete task", e))?;
        Ok(Response::new(to_proto_task(&data)))
    }

    async fn delete_task(
        &self,
        request: Request<DeleteTaskRequest>,
    ) -> Result<Response<DeleteTaskResponse>, Status> {
        let request = request.into_inner();
        self.handlers
            .commands
            .delete(DeleteTask {
                task_id: request.id,
            })
            .await
            .map_err(|e| command_status("Cannot delete task", e))?;
        Ok(Response::new(DeleteTaskResponse {}))
    }

    async fn chat(&self, request: Request<ChatRequest>) -> Result<Response<ChatResponse>, Status> {
        let request = request.into_inner();
        let response = self
            .handlers
            .assistant
            .ask(Ask {
                prompt: request.prompt,
            })
            .await
            .map_err(|e| assistant_status("Cannot process chat request", e))?;
        Ok(Response::new(ChatResponse { response }))
    }
}

pub(crate) fn to_proto_task(data: &TaskData) -> Task {
    Task {
        id: data.id.clone(),
        title: data.title.clone(),
        description: data.description.clone().unwrap_or_default(),
        completed: data.completed,
    }
}

fn command_status(context: &str, error: TaskCommandError) -> Status {
    if error.is_not_found() {
        debug!(%error, "{context}");
        Status::not_found(error.to_string())
    } else if error.is_invalid_input() {
        debug!(%error, "{context}");
        Status::invalid_argument(error.to_string())
    } else {
        error!(%error, "{context}");
        Status::internal(INTERNAL_MESSAGE)
    }
}

fn query_status(context: &str, error: TaskQueryError) -> Status {
    if error.is_not_found() {
        debug!(%error, "{context}");
        Status::not_found(error.to_string())
    } else if error.is_invalid_input() {
        debug!(%error, "{context}");
        Status::invalid_argument(error.to_string())
    } else {
        error!(%error, "{context}");
        Status::internal(INTERNAL_MESSAGE)
    }
}

fn assistant_status(context: &str, error: AssistantError) -> Status {
    if error.is_invalid_input() {
        debug!(%error, "{context}");
        Status::invalid_argument(error.to_string())
    } else {
        error!(%error, "{context}");
        Status::internal(INTERNAL_MESSAGE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use taskman_application::RepositoryError;
    use taskman_domain::DomainError;

    #[test]
    fn test_proto_task_mapping() {
        let data = TaskData {
            id: "65f000000000000000000001".to_string(),
            title: "Buy milk".to_string(),
            description: None,
            completed: true,
        };
        let task = to_proto_task(&data);
        assert_eq!(task.id, "65f000000000000000000001");
        assert_eq!(task.description, "");
        assert!(task.completed);
    }

    #[test]
    fn test_not_found_maps_to_not_found_status() {
        let error = TaskCommandError::Domain(DomainError::TaskNotFound("x".to_string()));
        let status = command_status("test", error);
        assert_eq!(status.code(), tonic::Code::NotFound);
        assert_eq!(status.message(), "Task with id [x] not found");
    }

    #[test]
    fn test_validation_maps_to_invalid_argument() {
        let error = TaskCommandError::Domain(DomainError::EmptyTitle);
        let status = command_status("test", error);
        assert_eq!(status.code(), tonic::Code::InvalidArgument);
        assert_eq!(status.message(), "Title cannot be empty");
    }

    #[test]
    fn test_malformed_id_maps_to_invalid_argument() {
        let error = TaskQueryError::Repository(RepositoryError::InvalidId("zz".to_string()));
        let status = query_status("test", error);
        assert_eq!(status.code(), tonic::Code::InvalidArgument);
    }

    #[test]
    fn test_storage_failure_is_masked() {
        let error =
            TaskCommandError::Repository(RepositoryError::Storage("connection reset".to_string()));
        let status = command_status("test", error);
        assert_eq!(status.code(), tonic::Code::Internal);
        assert_eq!(status.message(), INTERNAL_MESSAGE);
    }

    #[test]
    fn test_empty_prompt_maps_to_invalid_argument() {
        let error = AssistantError::Domain(DomainError::EmptyPrompt);
        let status = assistant_status("test", error);
        assert_eq!(status.code(), tonic::Code::InvalidArgument);
        assert_eq!(status.message(), "Prompt cannot be empty");
    }
}
