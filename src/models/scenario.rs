use serde::{Deserialize, Serialize};

/// A single timed event injected into a tabletop exercise.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineInject {
    /// Simulation time for the event (e.g., "T+01:00").
    pub time: String,
    /// The event or information to inject.
    pub event: String,
    /// Expected action or decision from the participants.
    pub expected_action: String,
}

/// Tabletop training scenario returned by `/training-scenario`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingScenario {
    pub scenario_title: String,
    pub learning_objectives: Vec<String>,
    /// Initial situation briefing read to participants.
    pub initial_briefing: String,
    pub timeline_injects: Vec<TimelineInject>,
}
