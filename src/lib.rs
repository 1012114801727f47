pub mod analysis;
pub mod api;
pub mod config;
pub mod extraction;
pub mod models;
pub mod reference;

use tracing_subscriber::EnvFilter;

use crate::api::{start_server, ApiContext, ServerError};
use crate::config::Args;

/// Initialise logging, serve until Ctrl-C, then shut down gracefully.
pub async fn run(args: Args) -> Result<(), ServerError> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter(&args.log_level))),
        )
        .init();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);
    tracing::info!(
        static_dir = %args.static_dir.display(),
        upload_dir = %args.upload_dir.display(),
        max_upload_mb = args.max_upload_mb,
        cors_permissive = args.cors_permissive,
        "Configuration loaded"
    );

    let listen = args.listen;
    let server = start_server(listen, ApiContext::new(args)).await?;
    tracing::info!(addr = %server.local_addr(), "Listening");

    server.run_until(shutdown_signal()).await
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Ctrl-C received, shutting down"),
        Err(e) => {
            tracing::error!("Failed to listen for Ctrl-C: {e}");
            std::future::pending::<()>().await;
        }
    }
}
