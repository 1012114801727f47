//! Shared state and wire types for the HTTP layer.

use std::sync::Arc;

use serde::{Deserialize, Deserializer, Serialize};

use crate::analysis::{CaseAnalysis, ChatMessage, JusticeQuestion};
use crate::config::Args;
use crate::extraction::{PdfExtractor, PdfTextExtractor};
use crate::models::{BenchRole, CaseContext, Posture};

/// Shared context for all API routes. Immutable after startup.
#[derive(Clone)]
pub struct ApiContext {
    pub config: Arc<Args>,
    pub extractor: Arc<dyn PdfExtractor + Send + Sync>,
}

impl ApiContext {
    pub fn new(config: Args) -> Self {
        Self {
            config: Arc::new(config),
            extractor: Arc::new(PdfTextExtractor),
        }
    }

    /// Swap the PDF backend, e.g. for a stub in tests.
    pub fn with_extractor(mut self, extractor: Arc<dyn PdfExtractor + Send + Sync>) -> Self {
        self.extractor = extractor;
        self
    }
}

/// `POST /api/analyze` response: the report plus when it was produced.
#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    #[serde(flatten)]
    pub analysis: CaseAnalysis,
    pub timestamp: String,
}

impl AnalyzeResponse {
    pub fn stamped(analysis: CaseAnalysis) -> Self {
        Self {
            analysis,
            timestamp: chrono::Utc::now()
                .format("%Y-%m-%dT%H:%M:%S%.6f")
                .to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub filename: String,
    pub text: String,
    pub length: usize,
}

fn default_justice() -> String {
    "thomas".to_string()
}

#[derive(Debug, Deserialize)]
pub struct SimulateRequest {
    #[serde(default = "default_justice")]
    pub justice: String,
    #[serde(default)]
    pub context: CaseContext,
}

#[derive(Debug, Default, Deserialize)]
pub struct BenchRequest {
    #[serde(default)]
    pub context: CaseContext,
}

#[derive(Debug, Serialize)]
pub struct BenchResponse {
    pub questions: Vec<JusticeQuestion>,
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
    #[serde(default, deserialize_with = "readable_history")]
    pub history: Vec<ChatMessage>,
    #[serde(default)]
    pub context: CaseContext,
}

/// Keep the transcript entries we can read. Anything else (unknown roles,
/// missing content) is dropped rather than failing the turn.
fn readable_history<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Vec<ChatMessage>, D::Error> {
    let raw = Vec::<serde_json::Value>::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .filter_map(|entry| match serde_json::from_value(entry) {
            Ok(message) => Some(message),
            Err(err) => {
                tracing::debug!(error = %err, "Dropping unreadable chat history entry");
                None
            }
        })
        .collect())
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub response: String,
    pub history: Vec<ChatMessage>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

#[derive(Debug, Serialize)]
pub struct JusticeSummary {
    pub id: &'static str,
    pub name: &'static str,
    pub role: BenchRole,
    pub focus: &'static str,
    pub style: &'static str,
}

#[derive(Debug, Serialize)]
pub struct SampleSummary {
    pub id: &'static str,
    pub title: &'static str,
    pub docket: &'static str,
    pub posture: Posture,
    pub issue: &'static str,
}
