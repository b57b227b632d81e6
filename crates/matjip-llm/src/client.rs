//! HTTP client for OpenAI-compatible chat-completions endpoints.
//!
//! Wraps `reqwest` with bearer auth, status classification and typed
//! response decoding. Calls made through [`ChatClient::chat`] (and so the
//! [`CourseGenerator`] impl) are retried on 429, 5xx and network failures.

use std::time::Duration;

use matjip_core::LlmSettings;
use matjip_engine::CourseGenerator;
use reqwest::{Client, StatusCode, Url};

use crate::error::LlmError;
use crate::retry::{retry_after_secs, retry_with_backoff};
use crate::types::{ChatMessage, ChatRequest, ChatResponse};

const MAX_ERROR_BODY_CHARS: usize = 500;

/// Client for a single chat-completions model.
///
/// Use [`ChatClient::new`] with the loaded settings, or
/// [`ChatClient::with_base_url`] to point at a mock server in tests.
pub struct ChatClient {
    client: Client,
    api_key: String,
    endpoint: Url,
    model: String,
    temperature: f32,
    max_tokens: u32,
    max_retries: u32,
    backoff_base_ms: u64,
}

impl std::fmt::Debug for ChatClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatClient")
            .field("endpoint", &self.endpoint.as_str())
            .field("model", &self.model)
            .field("max_retries", &self.max_retries)
            .finish_non_exhaustive()
    }
}

impl ChatClient {
    /// Creates a client from the configured settings.
    ///
    /// # Errors
    ///
    /// - [`LlmError::MissingApiKey`] if no key is configured.
    /// - [`LlmError::InvalidBaseUrl`] if `settings.base_url` does not parse.
    /// - [`LlmError::Http`] if the `reqwest::Client` cannot be constructed.
    pub fn new(settings: &LlmSettings) -> Result<Self, LlmError> {
        let api_key = settings
            .api_key
            .as_deref()
            .filter(|k| !k.trim().is_empty())
            .ok_or(LlmError::MissingApiKey)?;
        Self::with_base_url(api_key, settings, &settings.base_url)
    }

    /// Creates a client with an explicit key and base URL (for testing with wiremock).
    ///
    /// `base_url` is the API root, e.g. `https://api.groq.com/openai/v1`;
    /// `chat/completions` is appended to it.
    ///
    /// # Errors
    ///
    /// - [`LlmError::InvalidBaseUrl`] if `base_url` does not parse.
    /// - [`LlmError::Http`] if the `reqwest::Client` cannot be constructed.
    pub fn with_base_url(
        api_key: &str,
        settings: &LlmSettings,
        base_url: &str,
    ) -> Result<Self, LlmError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("matjip/0.1 (course-planner)")
            .build()?;

        // Exactly one trailing slash, so `join` appends instead of replacing
        // the last path segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let endpoint = Url::parse(&normalised)
            .and_then(|u| u.join("chat/completions"))
            .map_err(|e| LlmError::InvalidBaseUrl {
                url: base_url.to_owned(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            endpoint,
            model: settings.model.clone(),
            temperature: settings.temperature,
            max_tokens: settings.max_tokens,
            max_retries: settings.max_retries,
            backoff_base_ms: settings.backoff_base_ms,
        })
    }

    /// Full URL requests are posted to.
    #[must_use]
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Sends `prompt` as a single user message and returns the reply text,
    /// retrying transient failures with exponential back-off.
    ///
    /// # Errors
    ///
    /// The last [`LlmError`] once retries are exhausted, or the first
    /// non-retriable one.
    pub async fn chat(&self, prompt: &str) -> Result<String, LlmError> {
        retry_with_backoff(self.max_retries, self.backoff_base_ms, || {
            self.request_completion(prompt)
        })
        .await
    }

    /// One POST to the endpoint, with no retries.
    async fn request_completion(&self, prompt: &str) -> Result<String, LlmError> {
        let request = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        };

        tracing::debug!(
            model = %self.model,
            prompt_chars = prompt.chars().count(),
            "requesting chat completion"
        );

        let response = self
            .client
            .post(self.endpoint.clone())
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(LlmError::RateLimited {
                retry_after_secs: retry_after_secs(response.headers()),
            });
        }
        // 5xx surfaces as `Http` carrying the status, which the retry layer
        // treats as transient.
        let response = if status.is_server_error() {
            response.error_for_status()?
        } else {
            response
        };
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LlmError::UnexpectedStatus {
                status: status.as_u16(),
                body: body.chars().take(MAX_ERROR_BODY_CHARS).collect(),
            });
        }

        let body = response.text().await?;
        let parsed: ChatResponse =
            serde_json::from_str(&body).map_err(|e| LlmError::Deserialize {
                context: self.endpoint.to_string(),
                source: e,
            })?;
        let content = parsed.into_content().ok_or(LlmError::EmptyResponse)?;

        tracing::debug!(
            model = %self.model,
            reply_chars = content.chars().count(),
            "chat completion received"
        );
        Ok(content)
    }
}

impl CourseGenerator for ChatClient {
    type Error = LlmError;

    async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
        self.chat(prompt).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> LlmSettings {
        LlmSettings {
            api_key: Some("test-key".to_owned()),
            base_url: "https://api.groq.com/openai/v1".to_owned(),
            model: "llama-3.3-70b-versatile".to_owned(),
            timeout_secs: 30,
            max_retries: 2,
            backoff_base_ms: 0,
            temperature: 0.7,
            max_tokens: 1500,
        }
    }

    #[test]
    fn endpoint_appends_chat_completions() {
        let client = ChatClient::new(&settings()).expect("client construction should not fail");
        assert_eq!(
            client.endpoint().as_str(),
            "https://api.groq.com/openai/v1/chat/completions"
        );
    }

    #[test]
    fn endpoint_strips_trailing_slash() {
        let client = ChatClient::with_base_url("k", &settings(), "http://127.0.0.1:9999/v1/")
            .expect("client construction should not fail");
        assert_eq!(
            client.endpoint().as_str(),
            "http://127.0.0.1:9999/v1/chat/completions"
        );
    }

    #[test]
    fn missing_or_blank_key_is_rejected() {
        let mut s = settings();
        s.api_key = None;
        assert!(matches!(ChatClient::new(&s), Err(LlmError::MissingApiKey)));
        s.api_key = Some("   ".to_owned());
        assert!(matches!(ChatClient::new(&s), Err(LlmError::MissingApiKey)));
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let result = ChatClient::with_base_url("k", &settings(), "not a url");
        assert!(matches!(result, Err(LlmError::InvalidBaseUrl { .. })));
    }

    #[test]
    fn debug_output_hides_key() {
        let client = ChatClient::new(&settings()).unwrap();
        assert!(!format!("{client:?}").contains("test-key"));
    }
}
