//! Prompt builders — one pure function per task.
//!
//! Each builder states the task, embeds the caller-supplied fields
//! verbatim, and spells out the exact JSON shape the model must return.
//! Same input, same prompt: the builders hold no state and read no
//! environment.

use crate::models::IncidentDetails;

/// System instruction for the public preparedness chat.
pub const PREPAREDNESS_SYSTEM_PROMPT: &str = "\
You are an expert in emergency preparedness and public safety.
Your role is to provide clear, concise, and actionable advice to the general public.
Answer questions about creating emergency kits, evacuation plans, and safety procedures for various disasters.
Be calm, reassuring, and authoritative. Use lists and simple language.";

/// Prompt for `/incident-analysis`.
pub fn incident_analysis(details: &IncidentDetails) -> String {
    format!(
        r#"Analyze the following emergency incident report and provide a structured JSON response.

Incident Type: {incident_type}
Location: {location}
Severity: {severity}
Description: {description}

Respond ONLY with valid JSON matching this exact structure:
{{
    "summary": "A brief, concise summary of the incident",
    "recommendedActions": ["list of immediate, actionable steps for emergency responders"],
    "potentialRisks": ["list of potential secondary risks or cascading effects"],
    "resourceSuggestions": ["list of suggested resources (personnel, equipment) to allocate"]
}}"#,
        incident_type = details.incident_type,
        location = details.location,
        severity = details.severity,
        description = details.description,
    )
}

/// Prompt for `/impact-forecast`.
pub fn impact_forecast(details: &IncidentDetails) -> String {
    format!(
        r#"Generate a detailed impact forecast for this incident:

Incident Type: {incident_type}
Location: {location}
Severity: {severity}
Description: {description}

Focus on short-term, long-term, and community lifeline impacts.

Provide a JSON response with the following structure:
{{
    "shortTermImpacts": ["immediate potential impacts within the next 0-12 hours"],
    "longTermImpacts": ["potential cascading impacts over the next 12-72 hours"],
    "communityLifelines": [
        {{
            "lifeline": "The community lifeline affected (e.g., Energy, Water, Communications, Transportation)",
            "impact": "Specific impact on this lifeline",
            "mitigation": "A brief suggestion to mitigate this impact"
        }}
    ]
}}"#,
        incident_type = details.incident_type,
        location = details.location,
        severity = details.severity,
        description = details.description,
    )
}

/// Prompt for `/team-briefing`.
///
/// The prior analysis arrives as an arbitrary JSON object and is
/// embedded serialized, never as free text, so the model sees an
/// unambiguous structure.
pub fn team_briefing(analysis: &serde_json::Value) -> String {
    format!(
        r#"Based on the following incident analysis, create a standardized operational team briefing (ICS style).

Analysis: {analysis}

The briefing must be clear, concise, and actionable for first responders.

Provide a JSON response with the following structure:
{{
    "missionStatement": "A clear, concise mission statement for the response team",
    "keyObjectives": ["3-5 primary objectives for the initial operational period"],
    "knownRisks": ["Key risks for responder safety and mission success"],
    "commsPlan": "A brief communications plan, including key frequencies or channels"
}}"#,
    )
}

/// Prompt for `/training-scenario`. Severity is deliberately absent:
/// the exercise designer sets difficulty through the injects instead.
pub fn training_scenario(details: &IncidentDetails) -> String {
    format!(
        r#"Create a tabletop training scenario based on this incident:

Incident Type: {incident_type}
Location: {location}
Description: {description}

Include learning objectives and a timeline of events (injects) to test decision-making.

Provide a JSON response with the following structure:
{{
    "scenarioTitle": "A descriptive title for the training scenario",
    "learningObjectives": ["Specific learning objectives for the training participants"],
    "initialBriefing": "The initial situation briefing to be read to participants",
    "timelineInjects": [
        {{
            "time": "Simulation time for the event (e.g., T+01:00)",
            "event": "The event or information to inject into the scenario",
            "expectedAction": "The expected action or decision from the participants"
        }}
    ]
}}"#,
        incident_type = details.incident_type,
        location = details.location,
        description = details.description,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_details() -> IncidentDetails {
        IncidentDetails {
            incident_type: "Wildfire".into(),
            location: "Ridge County".into(),
            severity: "High".into(),
            description: "Fast-moving fire near residential area".into(),
        }
    }

    #[test]
    fn analysis_prompt_embeds_fields_and_names_every_output_field() {
        let prompt = incident_analysis(&sample_details());
        assert!(prompt.contains("Wildfire"));
        assert!(prompt.contains("Ridge County"));
        assert!(prompt.contains("High"));
        assert!(prompt.contains("Fast-moving fire near residential area"));
        for field in ["summary", "recommendedActions", "potentialRisks", "resourceSuggestions"] {
            assert!(prompt.contains(field), "missing {field}");
        }
    }

    #[test]
    fn forecast_prompt_names_lifeline_fields() {
        let prompt = impact_forecast(&sample_details());
        for field in ["shortTermImpacts", "longTermImpacts", "communityLifelines", "mitigation"] {
            assert!(prompt.contains(field), "missing {field}");
        }
    }

    #[test]
    fn briefing_embeds_analysis_as_json() {
        let analysis = serde_json::json!({"summary": "a \"quoted\" summary"});
        let prompt = team_briefing(&analysis);
        assert!(prompt.contains(r#"{"summary":"a \"quoted\" summary"}"#));
        assert!(prompt.contains("missionStatement"));
        assert!(prompt.contains("commsPlan"));
    }

    #[test]
    fn scenario_prompt_omits_severity() {
        let prompt = training_scenario(&sample_details());
        assert!(prompt.contains("timelineInjects"));
        assert!(prompt.contains("expectedAction"));
        assert!(!prompt.contains("Severity:"));
    }

    #[test]
    fn builders_are_deterministic() {
        let details = sample_details();
        assert_eq!(incident_analysis(&details), incident_analysis(&details));
        assert_eq!(training_scenario(&details), training_scenario(&details));
    }
}
