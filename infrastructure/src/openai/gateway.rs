//! OpenAI-compatible text-generation gateway

use super::error::{OpenAiError, Result};
use super::protocol::{ApiErrorBody, ChatCompletionRequest, ChatCompletionResponse};
use async_trait::async_trait;
use meeting_application::{GenerationError, GenerationRequest, TextGenerationPort};
use secrecy::{ExposeSecret, SecretString};
use std::time::Duration;
use tracing::{debug, info};

/// Default endpoint root
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com";

/// Default model
pub const DEFAULT_MODEL: &str = "gpt-4.1-nano";

/// Connection settings for [`OpenAiGateway`]
#[derive(Debug)]
pub struct OpenAiSettings {
    /// Endpoint root, with or without a trailing `/v1`
    pub base_url: String,
    pub model: String,
    /// Sent as a bearer token when present
    pub api_key: Option<SecretString>,
    pub timeout: Duration,
}

impl Default for OpenAiSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_key: None,
            timeout: Duration::from_secs(60),
        }
    }
}

/// Text-generation gateway for `/v1/chat/completions`
pub struct OpenAiGateway {
    client: reqwest::Client,
    endpoint: String,
    model: String,
    api_key: Option<SecretString>,
}

impl OpenAiGateway {
    pub fn new(settings: OpenAiSettings) -> Result<Self> {
        if settings.model.trim().is_empty() {
            return Err(OpenAiError::InvalidConfig(
                "model name cannot be empty".to_string(),
            ));
        }

        let client = reqwest::Client::builder()
            .timeout(settings.timeout)
            .build()?;
        let endpoint = Self::endpoint_for(&settings.base_url);

        info!("OpenAiGateway initialized ({} at {})", settings.model, endpoint);

        Ok(Self {
            client,
            endpoint,
            model: settings.model,
            api_key: settings.api_key,
        })
    }

    /// Full URL of the chat-completions endpoint
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn endpoint_for(base_url: &str) -> String {
        let base = base_url.trim_end_matches('/');
        if base.ends_with("/v1") {
            format!("{}/chat/completions", base)
        } else {
            format!("{}/v1/chat/completions", base)
        }
    }

    async fn complete(&self, body: &ChatCompletionRequest) -> Result<String> {
        let mut request = self.client.post(&self.endpoint).json(body);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key.expose_secret());
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiErrorBody>(&text)
                .map(|body| body.error.message)
                .unwrap_or_else(|_| {
                    status
                        .canonical_reason()
                        .map(str::to_string)
                        .unwrap_or(text)
                });
            return Err(OpenAiError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: ChatCompletionResponse = response.json().await?;
        parsed.into_text().ok_or(OpenAiError::NoChoices)
    }
}

#[async_trait]
impl TextGenerationPort for OpenAiGateway {
    async fn generate(
        &self,
        request: &GenerationRequest<'_>,
    ) -> std::result::Result<String, GenerationError> {
        let body = ChatCompletionRequest::for_turn(&self.model, request);
        debug!(
            "POST {} for {} ({} messages)",
            self.endpoint,
            request.speaker,
            body.messages.len()
        );
        Ok(self.complete(&body).await?)
    }

    fn backend_name(&self) -> String {
        self.model.clone()
    }
}
