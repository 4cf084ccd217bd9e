//! HTTP client for OpenAI-compatible chat completions.

use super::{ChatRequest, ChatResponse, from_chat_response, status_error, to_chat_request};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use storyframe_core::{CompletionRequest, CompletionResponse, CompletionSettings};
use storyframe_error::{CompletionError, CompletionErrorKind, StoryframeResult};
use storyframe_interface::CompletionDriver;
use tokio_retry2::strategy::{ExponentialBackoff, jitter};
use tokio_retry2::{Retry, RetryError};
use tracing::{debug, instrument, warn};

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Longest wait between retries.
const MAX_RETRY_DELAY: Duration = Duration::from_secs(30);

/// Client for any API exposing `POST {base_url}/chat/completions`.
///
/// Each request carries the configured timeout. Timeouts, rate limits,
/// transport failures and 408/5xx answers are retried with exponential
/// backoff and jitter; anything else fails immediately.
#[derive(Debug, Clone)]
pub struct OpenAICompatibleClient {
    client: Client,
    api_key: String,
    endpoint: String,
    model: String,
    max_tokens: u32,
    temperature: f32,
    max_retries: usize,
    retry_backoff_ms: u64,
}

impl OpenAICompatibleClient {
    /// Creates a client from settings, reading the key from `OPENAI_API_KEY`.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is not set or the HTTP client cannot be
    /// built.
    #[instrument(skip_all, fields(model = %settings.model))]
    pub fn from_config(settings: &CompletionSettings) -> StoryframeResult<Self> {
        let api_key = std::env::var(API_KEY_ENV).map_err(|_| {
            CompletionError::new(CompletionErrorKind::MissingApiKey(API_KEY_ENV.to_string()))
        })?;
        Self::with_api_key(api_key, settings)
    }

    /// Creates a client with an explicit API key.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    #[instrument(skip(api_key, settings), fields(model = %settings.model))]
    pub fn with_api_key(
        api_key: impl Into<String>,
        settings: &CompletionSettings,
    ) -> StoryframeResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()
            .map_err(|e| {
                CompletionError::new(CompletionErrorKind::Http(format!(
                    "Failed to build HTTP client: {}",
                    e
                )))
            })?;

        Ok(Self {
            client,
            api_key: api_key.into(),
            endpoint: format!("{}/chat/completions", settings.base_url.trim_end_matches('/')),
            model: settings.model.clone(),
            max_tokens: settings.max_tokens,
            temperature: settings.temperature,
            max_retries: settings.max_retries,
            retry_backoff_ms: settings.retry_backoff_ms,
        })
    }

    /// Full URL requests are posted to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn send_once(&self, body: &ChatRequest) -> Result<CompletionResponse, CompletionError> {
        let response = self
            .client
            .post(&self.endpoint)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(body)
            .send()
            .await
            .map_err(|e| {
                let kind = if e.is_timeout() {
                    CompletionErrorKind::Timeout
                } else {
                    CompletionErrorKind::Http(format!("Request failed: {}", e))
                };
                CompletionError::new(kind)
            })?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let error_text = response.text().await.unwrap_or_default();
            return Err(CompletionError::new(status_error(status, error_text)));
        }

        let chat: ChatResponse = response.json().await.map_err(|e| {
            let kind = if e.is_timeout() {
                CompletionErrorKind::Timeout
            } else {
                CompletionErrorKind::MalformedResponse(format!("Failed to parse response: {}", e))
            };
            CompletionError::new(kind)
        })?;

        from_chat_response(&chat)
    }
}

#[async_trait]
impl CompletionDriver for OpenAICompatibleClient {
    #[instrument(skip(self, req), fields(provider = "openai", model = %self.model, prompt_len = req.prompt().len()))]
    async fn complete(&self, req: &CompletionRequest) -> StoryframeResult<CompletionResponse> {
        let body = to_chat_request(req, &self.model, self.max_tokens, self.temperature)?;
        debug!(endpoint = %self.endpoint, "Sending chat completion request");

        let retry_strategy = ExponentialBackoff::from_millis(self.retry_backoff_ms.max(1))
            .factor(2)
            .max_delay(MAX_RETRY_DELAY)
            .map(jitter)
            .take(self.max_retries);

        let response = Retry::spawn(retry_strategy, || async {
            match self.send_once(&body).await {
                Ok(response) => Ok(response),
                Err(e) if e.is_retryable() => {
                    warn!(error = %e, "Completion request failed, will retry");
                    Err(RetryError::Transient {
                        err: e,
                        retry_after: None,
                    })
                }
                Err(e) => {
                    warn!(error = %e, "Permanent completion error, failing immediately");
                    Err(RetryError::Permanent(e))
                }
            }
        })
        .await?;

        Ok(response)
    }

    fn provider_name(&self) -> &'static str {
        "openai"
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
