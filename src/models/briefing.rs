use serde::{Deserialize, Serialize};

/// ICS-style operational briefing returned by `/team-briefing`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamBriefing {
    /// Clear, concise mission statement for the response team.
    pub mission_statement: String,
    /// 3-5 primary objectives for the initial operational period.
    pub key_objectives: Vec<String>,
    /// Key risks for responder safety and mission success.
    pub known_risks: Vec<String>,
    /// Brief communications plan (key frequencies or channels).
    pub comms_plan: String,
}
