//! Types formalizing the `generateContent` HTTP contract and the
//! request shape handlers hand to a [`ModelClient`](super::ModelClient).

use serde::{Deserialize, Serialize};

// ──────────────────────────────────────────────
// Conversation turns
// ──────────────────────────────────────────────

/// Who produced a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TurnRole {
    User,
    Model,
}

impl TurnRole {
    /// Wire name expected by the `contents[].role` field.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Model => "model",
        }
    }
}

/// One prior conversation turn, sent as context with a chat call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: TurnRole,
    pub text: String,
}

impl ChatTurn {
    pub fn user(text: impl Into<String>) -> Self {
        Self { role: TurnRole::User, text: text.into() }
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self { role: TurnRole::Model, text: text.into() }
    }
}

// ──────────────────────────────────────────────
// Generation configuration
// ──────────────────────────────────────────────

/// Randomness controls, output cap, and output format sent with each
/// model call.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    /// Sampling temperature. Lower = more deterministic.
    pub temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_k: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_output_tokens: Option<u32>,
    /// `application/json` forces JSON-mode output.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_mime_type: Option<String>,
}

impl GenerationConfig {
    /// Preset for structured extraction tasks: low randomness and
    /// forced-JSON output.
    pub fn structured() -> Self {
        Self {
            temperature: 0.3,
            top_p: None,
            top_k: None,
            max_output_tokens: None,
            response_mime_type: Some("application/json".to_string()),
        }
    }

    /// Preset for open conversation: higher randomness, free text.
    pub fn conversational() -> Self {
        Self {
            temperature: 0.7,
            top_p: Some(0.95),
            top_k: Some(40),
            max_output_tokens: Some(8192),
            response_mime_type: None,
        }
    }
}

// ──────────────────────────────────────────────
// Model request (provider-agnostic)
// ──────────────────────────────────────────────

/// Everything a single model call needs: the new prompt, optional
/// system instruction, accumulated history, and generation config.
#[derive(Debug, Clone)]
pub struct ModelRequest {
    pub prompt: String,
    pub system_instruction: Option<String>,
    pub history: Vec<ChatTurn>,
    pub config: GenerationConfig,
}

impl ModelRequest {
    /// A one-shot structured-extraction call.
    pub fn structured(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            system_instruction: None,
            history: Vec::new(),
            config: GenerationConfig::structured(),
        }
    }

    /// A conversational call with accumulated history and a system
    /// instruction.
    pub fn conversational(
        prompt: impl Into<String>,
        history: Vec<ChatTurn>,
        system_instruction: impl Into<String>,
    ) -> Self {
        Self {
            prompt: prompt.into(),
            system_instruction: Some(system_instruction.into()),
            history,
            config: GenerationConfig::conversational(),
        }
    }
}

// ──────────────────────────────────────────────
// Wire types (generateContent request/response)
// ──────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    pub text: String,
}

/// A `contents[]` entry: one turn of role-attributed parts.
#[derive(Debug, Clone, Serialize)]
pub struct Content {
    pub role: &'static str,
    pub parts: Vec<Part>,
}

impl Content {
    pub fn turn(role: TurnRole, text: impl Into<String>) -> Self {
        Self {
            role: role.as_str(),
            parts: vec![Part { text: text.into() }],
        }
    }
}

/// `systemInstruction` carries parts but no role.
#[derive(Debug, Clone, Serialize)]
pub struct SystemInstruction {
    pub parts: Vec<Part>,
}

/// Request body for `POST /v1beta/models/{model}:generateContent`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<SystemInstruction>,
    pub generation_config: GenerationConfig,
}

impl GenerateContentRequest {
    /// Assemble the wire body: history turns in order, then the new
    /// user prompt as the final content.
    pub fn from_model_request(request: ModelRequest) -> Self {
        let mut contents: Vec<Content> = request
            .history
            .iter()
            .map(|turn| Content::turn(turn.role, turn.text.clone()))
            .collect();
        contents.push(Content::turn(TurnRole::User, request.prompt));

        Self {
            contents,
            system_instruction: request.system_instruction.map(|text| SystemInstruction {
                parts: vec![Part { text }],
            }),
            generation_config: request.config,
        }
    }
}

/// Response body from `generateContent`.
#[derive(Debug, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<Part>,
}

impl GenerateContentResponse {
    /// The generated text: all parts of the first candidate,
    /// concatenated. `None` when the reply carries no text (empty
    /// candidate list — typically a blocked prompt).
    pub fn into_text(self) -> Option<String> {
        let candidate = self.candidates.into_iter().next()?;
        let parts = candidate.content?.parts;
        if parts.is_empty() {
            return None;
        }
        Some(parts.into_iter().map(|p| p.text).collect())
    }
}
