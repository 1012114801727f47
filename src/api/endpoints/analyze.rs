//! `POST /api/analyze` — full triage report for submitted text.

use axum::Json;

use crate::analysis;
use crate::api::error::ApiError;
use crate::api::extract::ApiJson;
use crate::api::types::AnalyzeResponse;
use crate::models::CaseInput;

/// Analysis itself cannot fail; malformed bodies are rejected by the extractor.
pub async fn analyze(
    ApiJson(input): ApiJson<CaseInput>,
) -> Result<Json<AnalyzeResponse>, ApiError> {
    let report = analysis::analyze(&input);
    Ok(Json(AnalyzeResponse::stamped(report)))
}
