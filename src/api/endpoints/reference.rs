//! Read-only reference endpoints.
//!
//! - `GET /api/justices` — persona roster
//! - `GET /api/samples` — sample dockets
//! - `POST /api/samples/:id/analyze` — report for one sample

use axum::extract::Path;
use axum::Json;

use crate::analysis;
use crate::api::error::ApiError;
use crate::api::types::{AnalyzeResponse, JusticeSummary, SampleSummary};
use crate::reference::{self, ROSTER, SAMPLES};

pub async fn justices() -> Json<Vec<JusticeSummary>> {
    Json(
        ROSTER
            .iter()
            .map(|j| JusticeSummary {
                id: j.id,
                name: j.name,
                role: j.role,
                focus: j.focus,
                style: j.style,
            })
            .collect(),
    )
}

pub async fn samples() -> Json<Vec<SampleSummary>> {
    Json(
        SAMPLES
            .iter()
            .map(|s| SampleSummary {
                id: s.id,
                title: s.title,
                docket: s.docket,
                posture: s.posture,
                issue: s.issue,
            })
            .collect(),
    )
}

pub async fn analyze_sample(Path(id): Path<String>) -> Result<Json<AnalyzeResponse>, ApiError> {
    let sample = reference::samples::find(&id)
        .ok_or_else(|| ApiError::NotFound(format!("Unknown sample: {id}")))?;

    let report = analysis::analyze(&sample.to_input());
    Ok(Json(AnalyzeResponse::stamped(report)))
}
