use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

use crate::{
    config::Config,
    models::{
        domain::GenerationRequest,
        dto::gemini::{GenerateContentRequest, GenerateContentResponse},
    },
};

/// Completion text used when the provider answered without any candidate text.
pub const NO_RESPONSE: &str = "No response.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompletionError {
    /// The provider answered with a non-success status. The body is not inspected.
    #[error("provider responded with status {0}")]
    Status(u16),

    /// The request never completed or the body could not be decoded.
    #[error("{0}")]
    Transport(String),
}

impl CompletionError {
    /// Text shown to the user in place of the summary.
    pub fn user_message(&self) -> String {
        match self {
            CompletionError::Status(status) => provider_status_message(*status),
            CompletionError::Transport(message) => format!("Error: {}", message),
        }
    }
}

pub fn provider_status_message(status: u16) -> String {
    match status {
        400 => "Bad request. Your prompt might contain prohibited content.".to_string(),
        401 => "Unauthorized. Your API key might be invalid.".to_string(),
        403 => "Forbidden. You don't have permission to use this API.".to_string(),
        404 => "Not found. The API endpoint or model doesn't exist.".to_string(),
        429 => "Too many requests. Please try again after a few minutes.".to_string(),
        500..=503 => "Server error. Please try again later.".to_string(),
        other => format!("API error ({}). Please try again.", other),
    }
}

/// A text-completion provider. One call, one outbound request, no retries.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(&self, request: &GenerationRequest) -> Result<String, CompletionError>;
}

pub struct GeminiClient {
    http: reqwest::Client,
    base_url: String,
    model: String,
    api_key: SecretString,
}

impl GeminiClient {
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.gemini_base_url.trim_end_matches('/').to_string(),
            model: config.gemini_model.clone(),
            api_key: config.gemini_api_key.clone(),
        }
    }

    /// Endpoint without the credential, safe to log.
    pub fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }
}

#[async_trait]
impl CompletionClient for GeminiClient {
    async fn complete(&self, request: &GenerationRequest) -> Result<String, CompletionError> {
        let endpoint = self.endpoint();
        let body = GenerateContentRequest::from(request);

        log::debug!(
            "Sending generateContent request to {} ({} prompt chars)",
            endpoint,
            request.prompt.len()
        );

        let response = self
            .http
            .post(&endpoint)
            .query(&[("key", self.api_key.expose_secret())])
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                // The URL carries the credential as a query parameter.
                let e = e.without_url();
                log::error!("Failed to reach completion provider: {}", e);
                CompletionError::Transport(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            log::warn!("Completion provider responded with status {}", status);
            return Err(CompletionError::Status(status.as_u16()));
        }

        let payload: GenerateContentResponse = response.json().await.map_err(|e| {
            let e = e.without_url();
            log::error!("Failed to decode completion response: {}", e);
            CompletionError::Transport(e.to_string())
        })?;

        Ok(payload.first_text().unwrap_or(NO_RESPONSE).to_string())
    }
}
