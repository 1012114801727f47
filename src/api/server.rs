//! HTTP server lifecycle: bind → spawn background task → return a handle
//! with a shutdown channel.

use std::future::Future;
use std::net::SocketAddr;

use thiserror::Error;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

use crate::api::router::api_router;
use crate::api::types::ApiContext;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        source: std::io::Error,
    },

    #[error("Server I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Server task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Handle to a running server.
pub struct ApiServer {
    addr: SocketAddr,
    shutdown_tx: Option<oneshot::Sender<()>>,
    task: JoinHandle<Result<(), std::io::Error>>,
}

impl ApiServer {
    /// Address actually bound (resolves port 0).
    pub fn local_addr(&self) -> SocketAddr {
        self.addr
    }

    /// Ask the server to stop accepting connections. In-flight requests finish.
    pub fn shutdown(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
            tracing::info!("Server shutdown signal sent");
        }
    }

    /// Wait for the server task to exit.
    pub async fn wait(self) -> Result<(), ServerError> {
        self.task.await??;
        Ok(())
    }

    /// Run until `signal` resolves, then shut down gracefully.
    pub async fn run_until<F>(mut self, signal: F) -> Result<(), ServerError>
    where
        F: Future<Output = ()>,
    {
        signal.await;
        self.shutdown();
        self.wait().await
    }
}

/// Bind `addr` and serve the API in a background tokio task.
pub async fn start_server(addr: SocketAddr, ctx: ApiContext) -> Result<ApiServer, ServerError> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;
    let addr = listener.local_addr()?;

    let app = api_router(ctx);
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    let task = tokio::spawn(async move {
        let shutdown_signal = async move {
            let _ = shutdown_rx.await;
            tracing::info!("Server received shutdown signal");
        };

        tracing::info!(%addr, "Server started");

        let result = axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal)
            .await;
        if let Err(e) = &result {
            tracing::error!("Server error: {e}");
        }

        tracing::info!("Server stopped");
        result
    });

    Ok(ApiServer {
        addr,
        shutdown_tx: Some(shutdown_tx),
        task,
    })
}
