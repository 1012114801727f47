//! HTTP surface.
//!
//! `api_router()` returns a composable `Router`; `start_server()` binds it
//! and runs it in a background task with a shutdown handle.

pub mod endpoints;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod router;
pub mod server;
pub mod types;

pub use error::ApiError;
pub use router::api_router;
pub use server::{start_server, ApiServer, ServerError};
pub use types::ApiContext;
