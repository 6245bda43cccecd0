//! Infrastructure layer for agent-meeting
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod logging;
pub mod openai;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileGenerationConfig, FileMeetingConfig,
    FileOutputConfig, FileOutputFormat, FileParticipantConfig,
};
pub use logging::JsonlConversationLogger;
pub use openai::{
    error::OpenAiError,
    gateway::{OpenAiGateway, OpenAiSettings},
};
