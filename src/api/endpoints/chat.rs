//! `POST /api/chat` — canned strategy follow-ups.
//!
//! Stateless: the client sends its transcript and gets it back extended.

use axum::Json;

use crate::analysis::ChatSession;
use crate::api::error::ApiError;
use crate::api::extract::ApiJson;
use crate::api::types::{ChatRequest, ChatResponse};

pub async fn send(ApiJson(req): ApiJson<ChatRequest>) -> Result<Json<ChatResponse>, ApiError> {
    let mut session = ChatSession::new(req.history, req.context);
    let response = session.respond(&req.message);

    Ok(Json(ChatResponse {
        response,
        history: session.into_history(),
    }))
}
