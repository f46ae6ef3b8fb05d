//! Training scenario endpoint.

use axum::extract::State;
use axum::Json;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::gemini::ModelRequest;
use crate::models::{IncidentDetails, TrainingScenario};
use crate::pipeline::{clean_model_json, decode_model_json, prompt};

/// `POST /training-scenario` — tabletop exercise with learning
/// objectives and timed injects.
pub async fn scenario(
    State(ctx): State<ApiContext>,
    Json(details): Json<IncidentDetails>,
) -> Result<Json<TrainingScenario>, ApiError> {
    tracing::info!(incident_type = %details.incident_type, "Training scenario requested");

    let prompt = prompt::training_scenario(&details);
    let reply = ctx.model.generate(ModelRequest::structured(prompt)).await?;
    let result = decode_model_json(&clean_model_json(&reply))?;

    Ok(Json(result))
}
