//! REST surface
//!
//! Same handlers and error discipline as the gRPC service, exposed as
//! JSON over HTTP for clients without a protobuf stack.

use crate::state::Handlers;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use taskman_application::{
    Ask, AssistantError, CompleteTask, CreateTask, DeleteTask, FindTaskById, TaskCommandError,
    TaskData, TaskQueryError, UpdateTask,
};
use tracing::{debug, error};

const INTERNAL_MESSAGE: &str = "Something went wrong";

/// Build the REST router on top of the shared handlers
pub fn rest_router(handlers: Handlers) -> Router {
    Router::new()
        .route("/task-manager/tasks", get(get_all_tasks).post(create_task))
        .route(
            "/task-manager/tasks/:id",
            get(find_task_by_id).put(update_task).delete(delete_task),
        )
        .route("/task-manager/tasks/:id/complete", post(complete_task))
        .route("/task-manager/chat", post(chat))
        .with_state(handlers)
}

#[derive(Debug, Deserialize)]
pub struct CreateTaskRequest {
    pub title: String,
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateTaskRequest {
    pub title: String,
    pub description: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GetAllTasksResponse {
    pub tasks: Vec<TaskData>,
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
}

/// Transport error carrying the HTTP response code
#[derive(Debug)]
pub enum RestError {
    BadRequest(String),
    NotFound(String),
    Internal,
}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        match self {
            RestError::BadRequest(message) => (StatusCode::BAD_REQUEST, message).into_response(),
            RestError::NotFound(message) => (StatusCode::NOT_FOUND, message).into_response(),
            RestError::Internal => {
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_MESSAGE).into_response()
            }
        }
    }
}

impl From<TaskCommandError> for RestError {
    fn from(error: TaskCommandError) -> Self {
        if error.is_not_found() {
            debug!(%error, "Command failed");
            RestError::NotFound(error.to_string())
        } else if error.is_invalid_input() {
            debug!(%error, "Command rejected");
            RestError::BadRequest(error.to_string())
        } else {
            error!(%error, "Command failed");
            RestError::Internal
        }
    }
}

impl From<TaskQueryError> for RestError {
    fn from(error: TaskQueryError) -> Self {
        if error.is_not_found() {
            debug!(%error, "Query failed");
            RestError::NotFound(error.to_string())
        } else if error.is_invalid_input() {
            debug!(%error, "Query rejected");
            RestError::BadRequest(error.to_string())
        } else {
            error!(%error, "Query failed");
            RestError::Internal
        }
    }
}

impl From<AssistantError> for RestError {
    fn from(error: AssistantError) -> Self {
        if error.is_invalid_input() {
            debug!(%error, "Chat rejected");
            RestError::BadRequest(error.to_string())
        } else {
            error!(%error, "Chat failed");
            RestError::Internal
        }
    }
}

async fn get_all_tasks(
    State(handlers): State<Handlers>,
) -> Result<Json<GetAllTasksResponse>, RestError> {
    let tasks = handlers.queries.list().await?;
    Ok(Json(GetAllTasksResponse { tasks }))
}

async fn create_task(
    State(handlers): State<Handlers>,
    Json(request): Json<CreateTaskRequest>,
) -> Result<(StatusCode, Json<TaskData>), RestError> {
    let data = handlers
        .commands
        .create(CreateTask {
            title: request.title,
            description: request.description,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(data)))
}

async fn find_task_by_id(
    State(handlers): State<Handlers>,
    Path(id): Path<String>,
) -> Result<Json<TaskData>, RestError> {
    let data = handlers
        .queries
        .find_by_id(FindTaskById { task_id: id })
        .await?;
    Ok(Json(data))
}

async fn update_task(
    State(handlers): State<Handlers>,
    Path(id): Path<String>,
    Json(request): Json<UpdateTaskRequest>,
) -> Result<Json<TaskData>, RestError> {
    let data = handlers
        .commands
        .update(UpdateTask {
            task_id: id,
            title: request.title,
            description: request.description,
        })
        .await?;
    Ok(Json(data))
}

async fn complete_task(
    State(handlers): State<Handlers>,
    Path(id): Path<String>,
) -> Result<Json<TaskData>, RestError> {
    let data = handlers
        .commands
        .complete(CompleteTask { task_id: id })
        .await?;
    Ok(Json(data))
}

async fn delete_task(
    State(handlers): State<Handlers>,
    Path(id): Path<String>,
) -> Result<StatusCode, RestError> {
    handlers.commands.delete(DeleteTask { task_id: id }).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn chat(
    State(handlers): State<Handlers>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, RestError> {
    let response = handlers
        .assistant
        .ask(Ask {
            prompt: request.message,
        })
        .await?;
    Ok(Json(ChatResponse { response }))
}
