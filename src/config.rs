//! Runtime configuration: CLI flags with environment fallbacks.

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use thiserror::Error;

/// Application-level constants
pub const APP_NAME: &str = "appellate-triage";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

const BYTES_PER_MB: usize = 1024 * 1024;
/// Headroom on top of the file size for multipart framing and the other fields.
const MULTIPART_OVERHEAD: usize = BYTES_PER_MB;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("MAX_UPLOAD_MB must be at least 1")]
    ZeroUploadLimit,

    #[error("Invalid log level: {0}")]
    InvalidLogLevel(String),
}

/// Appellate triage HTTP service
#[derive(Parser, Debug, Clone)]
#[command(name = "appellate-triage")]
#[command(about = "Triage appellate case materials into risk, precedent and bench-question reports")]
#[command(version)]
pub struct Args {
    /// Address to listen on
    #[arg(long, env = "LISTEN", default_value = "127.0.0.1:5000")]
    pub listen: SocketAddr,

    /// Directory holding index.html and other front-end assets
    #[arg(long, env = "STATIC_DIR", default_value = "static")]
    pub static_dir: PathBuf,

    /// Directory where uploads are staged during extraction
    #[arg(long, env = "UPLOAD_DIR", default_value = "uploads")]
    pub upload_dir: PathBuf,

    /// Largest accepted PDF upload, in megabytes
    #[arg(long, env = "MAX_UPLOAD_MB", default_value = "25")]
    pub max_upload_mb: usize,

    /// Allow cross-origin requests from any origin
    #[arg(
        long = "cors",
        env = "CORS_PERMISSIVE",
        default_value = "true",
        action = clap::ArgAction::Set
    )]
    pub cors_permissive: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

impl Args {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_upload_mb == 0 {
            return Err(ConfigError::ZeroUploadLimit);
        }

        if self.log_level.parse::<tracing::Level>().is_err() {
            return Err(ConfigError::InvalidLogLevel(self.log_level.clone()));
        }

        Ok(())
    }

    /// Request body cap for the upload route.
    pub fn upload_body_limit(&self) -> usize {
        self.max_upload_mb
            .saturating_mul(BYTES_PER_MB)
            .saturating_add(MULTIPART_OVERHEAD)
    }
}

/// Fallback filter when `RUST_LOG` is unset: our crate at `level`, everything
/// else at `warn`.
pub fn default_log_filter(level: &str) -> String {
    format!("appellate_triage={level},tower_http={level},warn")
}
