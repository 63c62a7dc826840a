// crates/medimock-rpc/src/lib.rs
//
// medimock-rpc: HTTP server and route handlers for the MediMock API.
//
// Provides an axum-based server exposing /verify, /blockchain/:id and
// /report with a permissive CORS policy, plus the request-logging layer.

pub mod handlers;
pub mod middleware;
pub mod server;

// Re-export the main server types for ergonomic access.
pub use server::{build_router, AppState, MockApiServer, RpcConfig};
