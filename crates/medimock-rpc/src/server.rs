// crates/medimock-rpc/src/server.rs
//
// HTTP server setup: MockApiServer, RpcConfig and the axum router.
//
// Each route adapter extracts what its handler needs from the request,
// calls the handler in `crate::handlers`, and serializes the record it
// returns as JSON. The router is public so tests can drive it in-process.

use std::future::Future;
use std::sync::Arc;

use axum::extract::{DefaultBodyLimit, Request, State};
use axum::http::Uri;
use axum::routing::{get, post};
use axum::{Json, Router};
use bytes::Bytes;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

use medimock_core::fixtures::{DEFAULT_HOST, DEFAULT_PORT};
use medimock_core::{
    BlockchainRecord, MockError, RandomSource, ReportAck, SeededRandom, ThreadRandom,
    VerificationResult,
};

use crate::handlers;
use crate::handlers::verify::{VerifyError, VerifyRequest};
use crate::middleware;

// ---------------------------------------------------------------------------
// RpcConfig
// ---------------------------------------------------------------------------

/// Configuration for the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RpcConfig {
    /// Host to bind to (e.g., "127.0.0.1" or "0.0.0.0").
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Seed for reproducible /verify output. `None` uses the thread RNG.
    pub seed: Option<u64>,
}

impl Default for RpcConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            seed: None,
        }
    }
}

impl RpcConfig {
    /// The `host:port` string to bind.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

// ---------------------------------------------------------------------------
// AppState
// ---------------------------------------------------------------------------

/// State shared by every route.
#[derive(Clone)]
pub struct AppState {
    /// Source of the /verify draws.
    pub random: Arc<dyn RandomSource>,
}

impl AppState {
    pub fn new(random: Arc<dyn RandomSource>) -> Self {
        Self { random }
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState").finish_non_exhaustive()
    }
}

// ---------------------------------------------------------------------------
// MockApiServer
// ---------------------------------------------------------------------------

/// The MediMock HTTP server.
///
/// Built from an explicit `RpcConfig`; nothing is read from globals.
#[derive(Clone)]
pub struct MockApiServer {
    /// Server configuration.
    config: RpcConfig,
    /// Randomness behind /verify.
    random: Arc<dyn RandomSource>,
}

impl std::fmt::Debug for MockApiServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockApiServer")
            .field("config", &self.config)
            .finish()
    }
}

impl MockApiServer {
    /// Create a new MockApiServer.
    ///
    /// Uses a `SeededRandom` when `config.seed` is set, otherwise the thread RNG.
    pub fn new(config: RpcConfig) -> Self {
        let random: Arc<dyn RandomSource> = match config.seed {
            Some(seed) => Arc::new(SeededRandom::new(seed)),
            None => Arc::new(ThreadRandom),
        };
        Self { config, random }
    }

    /// Replace the random source (e.g. a `FixedRandom` in tests).
    pub fn with_random_source(mut self, random: Arc<dyn RandomSource>) -> Self {
        self.random = random;
        self
    }

    /// The configuration this server was built from.
    pub fn config(&self) -> &RpcConfig {
        &self.config
    }

    /// Build the router for this server.
    pub fn router(&self) -> Router {
        build_router(AppState::new(self.random.clone()))
    }

    /// Bind the configured address and serve until Ctrl+C or SIGTERM.
    pub async fn start(self) -> Result<(), MockError> {
        let addr = self.config.bind_addr();
        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|e| MockError::Bind(format!("{}: {}", addr, e)))?;
        self.serve(listener, shutdown_signal()).await
    }

    /// Serve on an already-bound listener until `shutdown` resolves.
    ///
    /// In-flight requests are allowed to finish before this returns.
    pub async fn serve<F>(self, listener: TcpListener, shutdown: F) -> Result<(), MockError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let local_addr = listener.local_addr()?;
        tracing::info!(
            "Mock API server running at http://localhost:{}",
            local_addr.port()
        );
        tracing::debug!(bind = %local_addr, "Listener bound");

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown)
            .await?;

        tracing::info!("Mock API server shutdown complete");
        Ok(())
    }
}

/// Build the MediMock router over the given state.
///
/// Request bodies are unbounded: uploads are streamed and discarded, so no
/// size limit is enforced.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/verify", post(verify_route))
        .route("/blockchain/", get(blockchain_route))
        .route("/blockchain/:id", get(blockchain_route))
        .route("/report", post(report_route))
        .layer(DefaultBodyLimit::disable())
        .layer(axum::middleware::from_fn(middleware::log_requests))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

// ---------------------------------------------------------------------------
// Route adapters
// ---------------------------------------------------------------------------

async fn verify_route(
    State(state): State<AppState>,
    request: Request,
) -> Result<Json<VerificationResult>, VerifyError> {
    let verify_request = VerifyRequest::extract(request).await?;
    Ok(Json(handlers::verify::handle_verify(
        &verify_request,
        state.random.as_ref(),
    )))
}

async fn blockchain_route(uri: Uri) -> Json<BlockchainRecord> {
    let request = handlers::blockchain::GetRecordRequest::from_path(uri.path());
    Json(handlers::blockchain::handle_get_record(&request))
}

async fn report_route(body: Bytes) -> Json<ReportAck> {
    Json(handlers::report::handle_report(body.len()))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", err);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!("Failed to install SIGTERM handler: {}", err);
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
