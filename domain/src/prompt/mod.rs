//! Prompt domain
//!
//! Built-in persona directives and the scripted lines the orchestrator speaks
//! on behalf of a non-autonomous moderator.

mod personas;
mod template;

pub use personas::Personas;
pub use template::MeetingTemplate;
