//! Wire types for the chat-completions endpoint.
//!
//! Only the fields the meeting needs are modelled; unknown response fields
//! are ignored.

use meeting_application::GenerationRequest;
use serde::{Deserialize, Serialize};

/// Chat message role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// Chat message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
    /// Speaker name for `user` messages, so the model can tell participants apart
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
            name: None,
        }
    }

    /// A `user` message; `name` is coerced to `[A-Za-z0-9_-]{1,64}`, the
    /// only form the endpoint accepts.
    pub fn user(name: &str, content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
            name: Some(api_name(name)),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
            name: None,
        }
    }
}

const MAX_NAME_LEN: usize = 64;

fn api_name(id: &str) -> String {
    id.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .take(MAX_NAME_LEN)
        .collect()
}

/// `POST /v1/chat/completions` request body
#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub max_tokens: u32,
    pub temperature: f32,
}

impl ChatCompletionRequest {
    /// Build the request for one participant turn.
    ///
    /// The directive becomes the system message. The speaker's own earlier
    /// turns are replayed as `assistant` messages; everyone else's are
    /// `user` messages tagged with the speaker id.
    pub fn for_turn(model: &str, request: &GenerationRequest<'_>) -> Self {
        let mut messages = Vec::with_capacity(request.history.len() + 1);
        messages.push(ChatMessage::system(request.directive));

        for turn in request.history {
            if &turn.speaker_id == request.speaker {
                messages.push(ChatMessage::assistant(turn.content.as_str()));
            } else {
                messages.push(ChatMessage::user(
                    turn.speaker_id.as_str(),
                    turn.content.as_str(),
                ));
            }
        }

        Self {
            model: model.to_string(),
            messages,
            max_tokens: request.limits.max_output_tokens,
            temperature: request.limits.temperature,
        }
    }
}

/// `POST /v1/chat/completions` response body
#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Choice {
    pub message: ResponseMessage,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResponseMessage {
    #[serde(default)]
    pub content: Option<String>,
}

impl ChatCompletionResponse {
    /// Text of the first choice, if any
    pub fn into_text(self) -> Option<String> {
        self.choices.into_iter().next()?.message.content
    }
}

/// Error body returned with non-2xx statuses
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    pub error: ApiErrorDetail,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorDetail {
    pub message: String,
}
