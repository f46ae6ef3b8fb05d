use serde::{Deserialize, Serialize};

/// Structured incident analysis returned by `/incident-analysis`.
///
/// The list fields are plain `Vec`s: a model reply that omits one of
/// them (or sends `null`) fails decoding instead of defaulting, so a
/// decoded record can never carry an absent list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// Brief, concise summary of the incident.
    pub summary: String,
    /// Immediate, actionable steps for emergency responders.
    pub recommended_actions: Vec<String>,
    /// Potential secondary risks or cascading effects.
    pub potential_risks: Vec<String>,
    /// Suggested resources (personnel, equipment) to allocate.
    pub resource_suggestions: Vec<String>,
}
