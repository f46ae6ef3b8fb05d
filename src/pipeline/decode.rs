//! Strict decoding of sanitized model text into typed records.

use serde::de::DeserializeOwned;

/// How much of the offending text a [`DecodeError`] carries for
/// diagnostics. Model replies can run to many kilobytes; the first
/// 500 characters are enough to see what went wrong.
const EXCERPT_LIMIT: usize = 500;

/// A model reply that failed to parse as JSON or did not match the
/// expected schema (missing field, wrong type).
#[derive(Debug, thiserror::Error)]
#[error("{reason}. Raw response: {excerpt}")]
pub struct DecodeError {
    /// The serde_json diagnostic (parse position or schema mismatch).
    pub reason: String,
    /// Truncated prefix of the text that failed to decode.
    pub excerpt: String,
}

/// Decode sanitized model text into `T`.
///
/// Strict by construction: every required field must be present and
/// correctly typed. There is no lenient item-skipping and no
/// defaulting — a record either decodes completely or not at all.
pub fn decode_model_json<T: DeserializeOwned>(text: &str) -> Result<T, DecodeError> {
    serde_json::from_str(text).map_err(|e| DecodeError {
        reason: e.to_string(),
        excerpt: excerpt(text),
    })
}

fn excerpt(text: &str) -> String {
    text.chars().take(EXCERPT_LIMIT).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AnalysisResult;

    #[test]
    fn missing_list_fields_are_rejected() {
        let err = decode_model_json::<AnalysisResult>(r#"{"summary": "x"}"#).unwrap_err();
        assert!(err.reason.contains("missing field"));
        assert!(err.excerpt.contains("summary"));
    }

    #[test]
    fn empty_lists_decode_to_empty_vecs() {
        let result: AnalysisResult = decode_model_json(
            r#"{"summary":"x","recommendedActions":[],"potentialRisks":[],"resourceSuggestions":[]}"#,
        )
        .unwrap();
        assert_eq!(result.summary, "x");
        assert!(result.recommended_actions.is_empty());
        assert!(result.potential_risks.is_empty());
        assert!(result.resource_suggestions.is_empty());
    }

    #[test]
    fn scalar_in_list_position_is_rejected() {
        let err = decode_model_json::<AnalysisResult>(
            r#"{"summary":"x","recommendedActions":"Evacuate","potentialRisks":[],"resourceSuggestions":[]}"#,
        )
        .unwrap_err();
        assert!(err.reason.contains("expected a sequence") || err.reason.contains("invalid type"));
    }

    #[test]
    fn invalid_json_reports_parse_error() {
        let err = decode_model_json::<AnalysisResult>("not json").unwrap_err();
        assert_eq!(err.excerpt, "not json");
    }

    #[test]
    fn excerpt_is_bounded() {
        let long = "x".repeat(10_000);
        let err = decode_model_json::<AnalysisResult>(&long).unwrap_err();
        assert_eq!(err.excerpt.chars().count(), 500);
    }
}
