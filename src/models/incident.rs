use serde::{Deserialize, Serialize};

/// Inbound incident report, shared by the analysis, forecast, and
/// training-scenario endpoints. All fields are required — a body
/// missing any of them is rejected at extraction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncidentDetails {
    /// Category of the incident (e.g., "Wildfire", "Flood").
    pub incident_type: String,
    /// Where the incident is occurring.
    pub location: String,
    /// Caller-assessed severity (e.g., "Low", "High", "Critical").
    pub severity: String,
    /// Free-text situation description.
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_format_is_camel_case() {
        let details: IncidentDetails = serde_json::from_str(
            r#"{"incidentType":"Wildfire","location":"Ridge County","severity":"High","description":"Fast-moving fire"}"#,
        )
        .unwrap();
        assert_eq!(details.incident_type, "Wildfire");

        let json = serde_json::to_value(&details).unwrap();
        assert!(json.get("incidentType").is_some());
        assert!(json.get("incident_type").is_none());
    }

    #[test]
    fn missing_field_is_rejected() {
        let result: Result<IncidentDetails, _> = serde_json::from_str(
            r#"{"incidentType":"Flood","location":"Delta City","severity":"Low"}"#,
        );
        assert!(result.is_err());
    }
}
