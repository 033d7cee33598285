//! Server entrypoint for task-manager
//!
//! This is the main binary that wires together all layers using
//! dependency injection: config, MongoDB repository, chat model adapter,
//! application handlers, and the gRPC + REST servers.

use anyhow::{Context, Result};
use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use taskman_api::proto::task_manager_server::TaskManagerServer;
use taskman_api::{rest_router, tonic, Handlers, TaskManagerGrpcService};
use taskman_application::{
    AssistantQueryHandler, ChatModelError, ChatModelPort, TaskCommandHandler, TaskQueryHandler,
};
use taskman_infrastructure::{
    AnthropicChatModel, ConfigLoader, DisabledChatModel, MongoTaskRepository,
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "task-manager", about = "Task management gRPC/REST service")]
struct Cli {
    /// Path to a TOML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the gRPC listen address
    #[arg(long)]
    grpc_addr: Option<String>,

    /// Override the REST listen address
    #[arg(long)]
    http_addr: Option<String>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    info!("Starting task-manager");

    let mut config = ConfigLoader::load(cli.config.as_ref())
        .map_err(|e| anyhow::anyhow!("Failed to load configuration: {e}"))?;
    if let Some(addr) = cli.grpc_addr {
        config.server.grpc_addr = addr;
    }
    if let Some(addr) = cli.http_addr {
        config.server.http_addr = addr;
    }

    let grpc_addr: SocketAddr = config
        .server
        .grpc_addr
        .parse()
        .with_context(|| format!("Invalid gRPC address: {}", config.server.grpc_addr))?;
    let http_addr: SocketAddr = config
        .server
        .http_addr
        .parse()
        .with_context(|| format!("Invalid HTTP address: {}", config.server.http_addr))?;

    // === Dependency Injection ===
    let repository = Arc::new(
        MongoTaskRepository::connect(&config.mongodb)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to open MongoDB connection: {e}"))?,
    );
    info!(database = %config.mongodb.database, "Connected task repository");

    let chat_model: Arc<dyn ChatModelPort> = match AnthropicChatModel::new(&config.anthropic) {
        Ok(model) => Arc::new(model),
        Err(ChatModelError::NotConfigured) => {
            warn!("No Anthropic API key configured; assistant is disabled");
            Arc::new(DisabledChatModel)
        }
        Err(e) => return Err(anyhow::anyhow!("Failed to build chat model: {e}")),
    };

    let handlers = Handlers::new(
        Arc::new(TaskCommandHandler::new(repository.clone())),
        Arc::new(TaskQueryHandler::new(repository.clone())),
        Arc::new(AssistantQueryHandler::new(chat_model, repository)),
    );

    let grpc_service = TaskManagerGrpcService::new(handlers.clone());
    let grpc_server = tonic::transport::Server::builder()
        .add_service(TaskManagerServer::new(grpc_service))
        .serve_with_shutdown(grpc_addr, shutdown_signal());

    let listener = tokio::net::TcpListener::bind(http_addr)
        .await
        .with_context(|| format!("Failed to bind {http_addr}"))?;
    let rest_server =
        axum::serve(listener, rest_router(handlers)).with_graceful_shutdown(shutdown_signal());

    info!(%grpc_addr, %http_addr, "Serving");
    tokio::try_join!(
        async { grpc_server.await.context("gRPC server failed") },
        async { rest_server.await.context("REST server failed") },
    )?;

    info!("Shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {e}");
    }
}
