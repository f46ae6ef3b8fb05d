//! Gemini provider integration: wire types, generation presets, and
//! the HTTP client behind the [`ModelClient`](client::ModelClient) seam.

pub mod client;
pub mod types;

pub use client::*;
pub use types::*;

use thiserror::Error;

/// Failures talking to the Gemini API. The provider's own message is
/// surfaced verbatim — callers translate these at the HTTP boundary.
#[derive(Error, Debug)]
pub enum GeminiError {
    #[error("Cannot reach the Gemini API at {0}")]
    Connection(String),

    #[error("Gemini request timed out")]
    Timeout,

    #[error("HTTP client error: {0}")]
    HttpClient(String),

    #[error("Gemini returned error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Response parsing error: {0}")]
    ResponseParsing(String),

    #[error("Gemini returned no candidates; the prompt may have been blocked")]
    EmptyReply,
}
