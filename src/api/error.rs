//! API error taxonomy with deterministic HTTP status mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::gemini::GeminiError;
use crate::pipeline::DecodeError;

/// Error body for every failed request: a plain human-readable detail
/// string. No wire-level error-code taxonomy.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub detail: String,
}

/// Handler-level errors. Each variant corresponds to one failure
/// class; the boundary maps variants to statuses, never the handlers.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Malformed or missing input detected inside a handler.
    #[error("{0}")]
    BadRequest(String),

    /// Model output failed sanitize/parse/schema-match.
    #[error("Error decoding model response: {0}")]
    Decode(#[from] DecodeError),

    /// The model call itself failed (quota, auth, network).
    #[error("{0}")]
    Provider(#[from] GeminiError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Decode(e) => {
                tracing::error!(error = %e, "Model output failed to decode");
                StatusCode::INTERNAL_SERVER_ERROR
            }
            ApiError::Provider(e) => {
                tracing::error!(error = %e, "Model provider call failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = ErrorBody {
            detail: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn response_parts(error: ApiError) -> (StatusCode, serde_json::Value) {
        let response = error.into_response();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn bad_request_maps_to_400() {
        let (status, body) =
            response_parts(ApiError::BadRequest("Analysis data required".into())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["detail"], "Analysis data required");
    }

    #[tokio::test]
    async fn decode_error_maps_to_500_with_excerpt() {
        let decode = crate::pipeline::decode_model_json::<crate::models::AnalysisResult>("oops")
            .unwrap_err();
        let (status, body) = response_parts(ApiError::Decode(decode)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        let detail = body["detail"].as_str().unwrap();
        assert!(detail.contains("Raw response: oops"));
    }

    #[tokio::test]
    async fn provider_error_surfaces_api_message() {
        let error = ApiError::Provider(GeminiError::Api {
            status: 429,
            message: "Quota exceeded".into(),
        });
        let (status, body) = response_parts(error).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body["detail"].as_str().unwrap().contains("Quota exceeded"));
    }
}
