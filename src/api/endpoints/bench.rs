//! Bench simulation endpoints.
//!
//! - `POST /api/simulate` — one persona's question for the given context
//! - `POST /api/bench` — all nine personas

use axum::Json;

use crate::analysis::{generate_single_question, simulate_full_bench, JusticeQuestion};
use crate::api::error::ApiError;
use crate::api::extract::ApiJson;
use crate::api::types::{BenchRequest, BenchResponse, SimulateRequest};
use crate::reference::justices;

pub async fn simulate(
    ApiJson(req): ApiJson<SimulateRequest>,
) -> Result<Json<JusticeQuestion>, ApiError> {
    let justice = justices::find(&req.justice)
        .ok_or_else(|| ApiError::BadRequest(format!("Unknown justice: {}", req.justice)))?;

    Ok(Json(generate_single_question(justice, &req.context.issues)))
}

pub async fn full_bench(
    ApiJson(req): ApiJson<BenchRequest>,
) -> Result<Json<BenchResponse>, ApiError> {
    Ok(Json(BenchResponse {
        questions: simulate_full_bench(&req.context.issues),
    }))
}
