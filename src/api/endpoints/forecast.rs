//! Impact forecast endpoint.

use axum::extract::State;
use axum::Json;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::gemini::ModelRequest;
use crate::models::{ImpactForecast, IncidentDetails};
use crate::pipeline::{clean_model_json, decode_model_json, prompt};

/// `POST /impact-forecast` — short-term, long-term, and community
/// lifeline impacts for an incident.
pub async fn forecast(
    State(ctx): State<ApiContext>,
    Json(details): Json<IncidentDetails>,
) -> Result<Json<ImpactForecast>, ApiError> {
    tracing::info!(incident_type = %details.incident_type, "Impact forecast requested");

    let prompt = prompt::impact_forecast(&details);
    let reply = ctx.model.generate(ModelRequest::structured(prompt)).await?;
    let result = decode_model_json(&clean_model_json(&reply))?;

    Ok(Json(result))
}
