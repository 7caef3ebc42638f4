//! Gemini API client
//!
//! One network attempt per question, bounded timeout, no retries.
//! Every failure comes back as a classified [`ApiFailure`]; nothing
//! escapes this module as a panic or untyped error.

use crate::config::Config;
use crate::errors::ApiFailure;
use crate::gemini::types::{ApiErrorBody, GenerateRequest, GenerateResponse};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// generateContent endpoint for the default model
pub const DEFAULT_ENDPOINT: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-pro:generateContent";

/// Anything that can answer a question.
///
/// The session loop depends on this rather than on the concrete client,
/// so tests can run it against a stub backend.
#[async_trait]
pub trait AskClient: Send + Sync {
    async fn ask(&self, question: &str) -> Result<String, ApiFailure>;
}

/// HTTP client for the Gemini generateContent API
pub struct GeminiClient {
    client: Client,
    endpoint: String,
    config: Config,
}

impl GeminiClient {
    /// Create a client against the default endpoint.
    pub fn new(config: Config) -> Result<Self, ApiFailure> {
        Self::with_endpoint(config, DEFAULT_ENDPOINT)
    }

    /// Create a client against a custom endpoint (used by tests).
    pub fn with_endpoint(config: Config, endpoint: impl Into<String>) -> Result<Self, ApiFailure> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.api_timeout_secs.max(1)))
            .user_agent(config.user_agent())
            .build()
            .map_err(|e| ApiFailure::Unexpected(format!("failed to build HTTP client: {}", e)))?;

        Ok(GeminiClient {
            client,
            endpoint: endpoint.into(),
            config,
        })
    }

    /// Send one question and classify the outcome.
    ///
    /// Callers are expected to validate the configuration first; the
    /// guard here keeps the contract safe for direct callers.
    pub async fn ask(&self, question: &str) -> Result<String, ApiFailure> {
        if !self.config.is_valid() {
            return Err(ApiFailure::ConfigInvalid(
                self.config.validate_settings().join("; "),
            ));
        }

        let key = self.config.api_key.as_deref().unwrap_or_default();
        let request = GenerateRequest::new(question, self.config.generation.clone());

        let response = self
            .client
            .post(&self.endpoint)
            .query(&[("key", key)])
            .json(&request)
            .send()
            .await
            .map_err(classify_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(classify_error_body(status.as_u16(), &body));
        }

        let body: GenerateResponse = response.json().await.map_err(|e| {
            if e.is_decode() {
                ApiFailure::Unexpected(format!("malformed response body: {}", e))
            } else {
                classify_transport_error(e)
            }
        })?;

        match body.answer_text() {
            Some(text) => Ok(text.to_string()),
            None => Err(ApiFailure::EmptyResponse),
        }
    }
}

#[async_trait]
impl AskClient for GeminiClient {
    async fn ask(&self, question: &str) -> Result<String, ApiFailure> {
        GeminiClient::ask(self, question).await
    }
}

/// Map a reqwest failure onto the taxonomy: transport problems (DNS,
/// connect, timeout, TLS) are `Network`, anything else is the catch-all.
fn classify_transport_error(err: reqwest::Error) -> ApiFailure {
    if err.is_builder() || err.is_decode() {
        ApiFailure::Unexpected(err.to_string())
    } else {
        ApiFailure::Network(err.to_string())
    }
}

/// Extract the provider's message from a non-2xx body. A body that is
/// not the expected JSON shape is passed through verbatim.
fn classify_error_body(status: u16, body: &str) -> ApiFailure {
    let message = match serde_json::from_str::<ApiErrorBody>(body) {
        Ok(parsed) => parsed
            .error
            .and_then(|detail| detail.message)
            .unwrap_or_else(|| "Unknown error".to_string()),
        Err(_) => body.to_string(),
    };

    ApiFailure::Api { status, message }
}
