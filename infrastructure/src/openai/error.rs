//! Error types for the OpenAI adapter

use meeting_application::GenerationError;
use thiserror::Error;

/// Result type alias for OpenAI operations
pub type Result<T> = std::result::Result<T, OpenAiError>;

/// Errors that can occur when talking to a chat-completions endpoint
#[derive(Error, Debug)]
pub enum OpenAiError {
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Response has no choices")]
    NoChoices,

    #[error("Invalid client configuration: {0}")]
    InvalidConfig(String),
}

impl From<OpenAiError> for GenerationError {
    fn from(err: OpenAiError) -> Self {
        match err {
            OpenAiError::Http(e) if e.is_timeout() => GenerationError::Timeout,
            OpenAiError::Http(e) if e.is_connect() => GenerationError::ConnectionError(e.to_string()),
            OpenAiError::Http(e) if e.is_decode() => {
                GenerationError::MalformedResponse(e.to_string())
            }
            OpenAiError::Http(e) => GenerationError::RequestFailed(e.to_string()),
            OpenAiError::Api { status, message } => match status {
                401 | 403 => GenerationError::Auth(format!("{}: {}", status, message)),
                429 => GenerationError::RateLimited(message),
                _ => GenerationError::RequestFailed(format!("{}: {}", status, message)),
            },
            OpenAiError::NoChoices => {
                GenerationError::MalformedResponse("response has no choices".to_string())
            }
            OpenAiError::InvalidConfig(msg) => GenerationError::RequestFailed(msg),
        }
    }
}
