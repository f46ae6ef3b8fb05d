use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use super::types::{GenerateContentRequest, GenerateContentResponse, ModelRequest};
use super::GeminiError;
use crate::config::Config;

/// Seam between handlers and the generative-model provider. The real
/// implementation is [`GeminiClient`]; tests swap in
/// [`MockModelClient`].
#[async_trait]
pub trait ModelClient: Send + Sync {
    /// Send one model call and return the generated text.
    async fn generate(&self, request: ModelRequest) -> Result<String, GeminiError>;
}

/// HTTP client for the Gemini `generateContent` API.
pub struct GeminiClient {
    base_url: String,
    api_key: String,
    model: String,
    client: reqwest::Client,
}

impl GeminiClient {
    /// Create a client against a specific endpoint and model.
    ///
    /// Only a connect timeout is set: model calls are long and callers
    /// impose any overall deadline externally.
    pub fn new(base_url: &str, api_key: &str, model: &str) -> Self {
        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            model: model.to_string(),
            client,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.base_url, &config.api_key, &config.model)
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

/// Error envelope the API uses for non-2xx replies.
#[derive(Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Deserialize)]
struct ApiErrorDetail {
    message: String,
}

#[async_trait]
impl ModelClient for GeminiClient {
    async fn generate(&self, request: ModelRequest) -> Result<String, GeminiError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        );
        let body = GenerateContentRequest::from_model_request(request);

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() {
                    GeminiError::Connection(self.base_url.clone())
                } else if e.is_timeout() {
                    GeminiError::Timeout
                } else {
                    GeminiError::HttpClient(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            // Prefer the API's own message; fall back to the raw body.
            let message = serde_json::from_str::<ApiErrorBody>(&body)
                .map(|b| b.error.message)
                .unwrap_or(body);
            return Err(GeminiError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| GeminiError::ResponseParsing(e.to_string()))?;

        parsed.into_text().ok_or(GeminiError::EmptyReply)
    }
}

/// Mock provider for tests — returns a configured reply and records
/// every request it receives.
pub struct MockModelClient {
    reply: String,
    calls: AtomicUsize,
    requests: Mutex<Vec<ModelRequest>>,
}

impl MockModelClient {
    pub fn new(reply: &str) -> Self {
        Self {
            reply: reply.to_string(),
            calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// How many times `generate` was invoked.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// The most recent request, if any call was made.
    pub fn last_request(&self) -> Option<ModelRequest> {
        self.requests
            .lock()
            .expect("mock request log poisoned")
            .last()
            .cloned()
    }
}

#[async_trait]
impl ModelClient for MockModelClient {
    async fn generate(&self, request: ModelRequest) -> Result<String, GeminiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests
            .lock()
            .expect("mock request log poisoned")
            .push(request);
        Ok(self.reply.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gemini::types::ChatTurn;

    #[tokio::test]
    async fn mock_returns_configured_reply() {
        let mock = MockModelClient::new("a reply");
        let text = mock
            .generate(ModelRequest::structured("prompt"))
            .await
            .unwrap();
        assert_eq!(text, "a reply");
        assert_eq!(mock.call_count(), 1);
    }

    #[tokio::test]
    async fn mock_records_requests() {
        let mock = MockModelClient::new("ok");
        let request = ModelRequest::conversational(
            "second question",
            vec![ChatTurn::user("first question")],
            "system",
        );
        mock.generate(request).await.unwrap();

        let seen = mock.last_request().unwrap();
        assert_eq!(seen.prompt, "second question");
        assert_eq!(seen.history.len(), 1);
    }

    #[test]
    fn client_trims_trailing_slash() {
        let client = GeminiClient::new("https://example.test/", "key", "gemini-2.5-flash");
        assert_eq!(client.base_url, "https://example.test");
        assert_eq!(client.model(), "gemini-2.5-flash");
    }
}
