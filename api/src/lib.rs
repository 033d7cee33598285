//! API layer for task-manager
//!
//! Two transports over the same application handlers: a tonic gRPC service
//! (the primary interface) and an axum REST surface. Both share the error
//! mapping discipline: not-found and validation failures carry the domain
//! message; anything internal is logged and reported generically.

// Generated protobuf code
pub mod proto {
    #![allow(clippy::all)]
    tonic::include_proto!("taskmanager.v1");
}

pub mod grpc;
pub mod rest;
mod state;

#[cfg(test)]
pub(crate) mod test_support;

pub use grpc::TaskManagerGrpcService;
pub use rest::rest_router;
pub use state::Handlers;

// Re-export tonic for the server binary
pub use tonic;
