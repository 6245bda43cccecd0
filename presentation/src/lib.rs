//! Presentation layer for agent-meeting
//!
//! This crate contains CLI definitions, output formatters,
//! progress reporters, and the interactive agenda prompt.

pub mod cli;
pub mod input;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::{Cli, OutputFormat};
pub use input::prompt_agenda;
pub use output::console::ConsoleFormatter;
pub use output::formatter::OutputFormatter;
pub use progress::reporter::{ProgressReporter, SimpleProgress};
