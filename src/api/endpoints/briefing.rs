//! Team briefing endpoint.

use axum::extract::State;
use axum::Json;
use serde::Deserialize;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::gemini::ModelRequest;
use crate::models::TeamBriefing;
use crate::pipeline::{clean_model_json, decode_model_json, prompt};

/// Request body: the prior analysis as an arbitrary JSON object. The
/// shape is deliberately loose — the prompt embeds whatever arrives,
/// serialized.
#[derive(Deserialize)]
pub struct TeamBriefingRequest {
    pub analysis: Option<serde_json::Value>,
}

/// `POST /team-briefing` — ICS-style briefing derived from a prior
/// analysis. 400 when `analysis` is missing, before any model call.
pub async fn briefing(
    State(ctx): State<ApiContext>,
    Json(request): Json<TeamBriefingRequest>,
) -> Result<Json<TeamBriefing>, ApiError> {
    let analysis = request
        .analysis
        .filter(|v| !v.is_null())
        .ok_or_else(|| ApiError::BadRequest("Analysis data required".to_string()))?;

    tracing::info!("Team briefing requested");

    let prompt = prompt::team_briefing(&analysis);
    let reply = ctx.model.generate(ModelRequest::structured(prompt)).await?;
    let result = decode_model_json(&clean_model_json(&reply))?;

    Ok(Json(result))
}
