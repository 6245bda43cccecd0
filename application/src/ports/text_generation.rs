//! Text-generation port
//!
//! The narrow interface through which participant utterances are obtained:
//! a directive and the conversation so far go in, one utterance comes out.

use crate::config::GenerationLimits;
use async_trait::async_trait;
use meeting_domain::{ParticipantId, Turn};
use thiserror::Error;

/// Errors that can occur while generating a turn
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("Rate limited or quota exceeded: {0}")]
    RateLimited(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Timeout")]
    Timeout,
}

impl GenerationError {
    /// Whether another attempt could plausibly succeed
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            GenerationError::ConnectionError(_)
                | GenerationError::RateLimited(_)
                | GenerationError::Timeout
        )
    }
}

/// Everything the backend needs to voice one participant
#[derive(Debug, Clone, Copy)]
pub struct GenerationRequest<'a> {
    /// Who is speaking; their own earlier turns are theirs, everyone else's are input
    pub speaker: &'a ParticipantId,
    /// The speaker's system directive
    pub directive: &'a str,
    /// Full transcript so far, oldest first
    pub history: &'a [Turn],
    pub limits: GenerationLimits,
}

/// Gateway to a text-generation backend
///
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait TextGenerationPort: Send + Sync {
    /// Produce the next utterance for `request.speaker`
    async fn generate(&self, request: &GenerationRequest<'_>) -> Result<String, GenerationError>;

    /// Backend/model identifier for display
    fn backend_name(&self) -> String {
        "text-generation".to_string()
    }
}
