use reqwest::Client;
use tracing::{debug, warn};

use super::types::{
    ChatCompletionRequest, ChatCompletionResponse, ChatMessage, CompletionRequest, ErrorResponse,
};
use crate::config::{Config, Secret};

const API_BASE: &str = "https://api.openai.com/v1";
const ERROR_SNIPPET_CHARS: usize = 200;

#[derive(Debug, thiserror::Error)]
pub enum OpenAiError {
    #[error("No API key provided. Set OPENAI_API_KEY.")]
    ApiKeyNotSet,

    #[error("Authentication failed: {0}")]
    Unauthorized(String),

    #[error("Rate limit or quota exceeded: {0}")]
    RateLimited(String),

    #[error("API error ({code}): {message}")]
    Api { code: u16, message: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Malformed response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Response contained no completion text")]
    EmptyResponse,
}

/// Abstraction over a chat-completion service.
/// Implemented by `OpenAiClient` for production; mock implementations used in tests.
pub trait CompletionClient {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, OpenAiError>;
}

#[derive(Clone)]
pub struct OpenAiClient {
    http: Client,
    api_key: Secret,
    model: String,
    base_url: String,
}

impl OpenAiClient {
    pub fn new(http: Client, config: &Config) -> Self {
        Self {
            http,
            api_key: config.openai_api_key.clone(),
            model: config.openai_model.clone(),
            base_url: API_BASE.to_string(),
        }
    }

    #[cfg(test)]
    pub(crate) fn with_base_url(http: Client, base_url: &str) -> Self {
        Self {
            http,
            api_key: Secret::new("test-key"),
            model: crate::config::DEFAULT_OPENAI_MODEL.to_string(),
            base_url: base_url.to_string(),
        }
    }

    #[cfg(test)]
    pub(crate) fn without_key(mut self) -> Self {
        self.api_key = Secret::default();
        self
    }
}

impl CompletionClient for OpenAiClient {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, OpenAiError> {
        if self.api_key.is_empty() {
            return Err(OpenAiError::ApiKeyNotSet);
        }

        let url = format!("{}/chat/completions", self.base_url);
        let body = ChatCompletionRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: &request.system,
                },
                ChatMessage {
                    role: "user",
                    content: &request.prompt,
                },
            ],
            max_tokens: request.max_tokens,
            temperature: request.temperature,
        };

        let response = self
            .http
            .post(&url)
            .bearer_auth(self.api_key.expose())
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            let classified = classify_api_error(status.as_u16(), &text);
            warn!(status = status.as_u16(), error = %classified, "OpenAI API error");
            return Err(classified);
        }

        let parsed: ChatCompletionResponse = serde_json::from_str(&text)?;
        let content = first_choice_text(parsed)?;
        debug!(model = %self.model, chars = content.len(), "completion received");
        Ok(content)
    }
}

fn first_choice_text(response: ChatCompletionResponse) -> Result<String, OpenAiError> {
    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message)
        .and_then(|message| message.content)
        .ok_or(OpenAiError::EmptyResponse)
}

fn classify_api_error(code: u16, body: &str) -> OpenAiError {
    let message = serde_json::from_str::<ErrorResponse>(body)
        .ok()
        .and_then(|r| r.error.message)
        .unwrap_or_else(|| {
            let end = body.floor_char_boundary(ERROR_SNIPPET_CHARS);
            format!("HTTP {code}: {}", &body[..end])
        });

    match code {
        401 => OpenAiError::Unauthorized(message),
        429 => OpenAiError::RateLimited(message),
        _ => OpenAiError::Api { code, message },
    }
}
