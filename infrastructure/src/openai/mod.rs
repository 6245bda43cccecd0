//! OpenAI-compatible chat-completions adapter
//!
//! Implements [`TextGenerationPort`](meeting_application::TextGenerationPort)
//! against any server speaking the `/v1/chat/completions` protocol.

pub mod error;
pub mod gateway;
pub mod protocol;
