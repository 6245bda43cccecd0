//! Application layer for agent-meeting
//!
//! This crate contains the meeting use case, port definitions, and
//! application configuration. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{ExecutionParams, GenerationLimits};
pub use ports::{
    conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger},
    progress::{MeetingProgressNotifier, NoProgress},
    text_generation::{GenerationError, GenerationRequest, TextGenerationPort},
};
pub use use_cases::produce_turn::produce;
pub use use_cases::run_meeting::RunMeetingUseCase;
