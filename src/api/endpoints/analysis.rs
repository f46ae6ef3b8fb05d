//! Incident analysis endpoint.

use axum::extract::State;
use axum::Json;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::gemini::ModelRequest;
use crate::models::{AnalysisResult, IncidentDetails};
use crate::pipeline::{clean_model_json, decode_model_json, prompt};

/// `POST /incident-analysis` — structured analysis of an incident
/// report.
pub async fn analyze(
    State(ctx): State<ApiContext>,
    Json(details): Json<IncidentDetails>,
) -> Result<Json<AnalysisResult>, ApiError> {
    tracing::info!(incident_type = %details.incident_type, "Incident analysis requested");

    let prompt = prompt::incident_analysis(&details);
    let reply = ctx.model.generate(ModelRequest::structured(prompt)).await?;
    let result = decode_model_json(&clean_model_json(&reply))?;

    Ok(Json(result))
}
