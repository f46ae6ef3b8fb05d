use serde::{Deserialize, Serialize};

/// Impact on a single FEMA-style community lifeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommunityLifeline {
    /// The lifeline affected (e.g., Energy, Water, Communications).
    pub lifeline: String,
    /// Specific impact on this lifeline.
    pub impact: String,
    /// Brief suggestion to mitigate the impact.
    pub mitigation: String,
}

/// Forecast returned by `/impact-forecast`: immediate impacts,
/// cascading impacts, and per-lifeline breakdowns.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactForecast {
    /// Potential impacts within the next 0-12 hours.
    pub short_term_impacts: Vec<String>,
    /// Cascading impacts over the next 12-72 hours.
    pub long_term_impacts: Vec<String>,
    pub community_lifelines: Vec<CommunityLifeline>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_lifelines_decode() {
        let forecast: ImpactForecast = serde_json::from_str(
            r#"{
                "shortTermImpacts": ["Road closures"],
                "longTermImpacts": [],
                "communityLifelines": [
                    {"lifeline": "Energy", "impact": "Outages", "mitigation": "Deploy generators"}
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(forecast.community_lifelines.len(), 1);
        assert_eq!(forecast.community_lifelines[0].lifeline, "Energy");
        assert!(forecast.long_term_impacts.is_empty());
    }

    #[test]
    fn null_list_is_rejected() {
        let result: Result<ImpactForecast, _> = serde_json::from_str(
            r#"{"shortTermImpacts": null, "longTermImpacts": [], "communityLifelines": []}"#,
        );
        assert!(result.is_err());
    }
}
