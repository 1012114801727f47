//! HTTP router.
//!
//! JSON endpoints live under `/api/` and are never cached. Everything else
//! is served from the static directory.
//!
//! Layers (outermost → innermost): CORS → audit logger → routes.

use axum::extract::DefaultBodyLimit;
use axum::http::{header, HeaderValue};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::api::endpoints;
use crate::api::middleware;
use crate::api::types::ApiContext;

/// Build the application router.
///
/// NOTE: Path params use `:param` syntax (matchit 0.7 / axum 0.7).
pub fn api_router(ctx: ApiContext) -> Router {
    let upload_limit = ctx.config.upload_body_limit();
    let static_dir = ctx.config.static_dir.clone();
    let cors_permissive = ctx.config.cors_permissive;

    let api = Router::new()
        .route("/health", get(endpoints::health::check))
        .route("/analyze", post(endpoints::analyze::analyze))
        .route(
            "/upload",
            post(endpoints::upload::upload).layer(DefaultBodyLimit::max(upload_limit)),
        )
        .route("/simulate", post(endpoints::bench::simulate))
        .route("/bench", post(endpoints::bench::full_bench))
        .route("/chat", post(endpoints::chat::send))
        .route("/justices", get(endpoints::reference::justices))
        .route("/samples", get(endpoints::reference::samples))
        .route(
            "/samples/:id/analyze",
            post(endpoints::reference::analyze_sample),
        )
        .with_state(ctx)
        .layer(SetResponseHeaderLayer::overriding(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ));

    let app = Router::new()
        .nest("/api", api)
        .route_service("/", ServeFile::new(static_dir.join("index.html")))
        .fallback_service(ServeDir::new(static_dir))
        .layer(axum::middleware::from_fn(middleware::audit::log_access));

    if cors_permissive {
        app.layer(CorsLayer::permissive())
    } else {
        app
    }
}
