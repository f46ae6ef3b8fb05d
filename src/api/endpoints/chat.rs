//! Public preparedness chat endpoint.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::gemini::ModelRequest;
use crate::pipeline::prompt::PREPAREDNESS_SYSTEM_PROMPT;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    /// Omitted on the first message; the server assigns one.
    pub session_id: Option<String>,
    pub message: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponse {
    pub session_id: String,
    /// The model's reply, verbatim.
    pub response: String,
}

/// `POST /preparedness-chat` — converse with the preparedness
/// assistant, threading history per session.
///
/// The session lock is held across the whole read-history → model call
/// → append sequence, so concurrent turns on one session serialize.
pub async fn send(
    State(ctx): State<ApiContext>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, ApiError> {
    if request.message.trim().is_empty() {
        return Err(ApiError::BadRequest("Message cannot be empty".to_string()));
    }

    let (session_id, handle) = ctx.sessions.get_or_create(request.session_id.as_deref()).await;
    let mut session = handle.lock().await;

    tracing::info!(session_id = %session_id, turns = session.history().len(), "Chat message received");

    let model_request = ModelRequest::conversational(
        &request.message,
        session.history().to_vec(),
        PREPAREDNESS_SYSTEM_PROMPT,
    );
    let reply = ctx.model.generate(model_request).await?;

    session.push_turn(&request.message, &reply);

    Ok(Json(ChatResponse {
        session_id,
        response: reply,
    }))
}
