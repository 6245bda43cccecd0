//! Domain error types

use thiserror::Error;

/// Rejected user input
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("No agenda provided")]
    EmptyAgenda,
}

/// Malformed meeting configuration, detected before the meeting starts
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Roster must contain at least one participant")]
    EmptyRoster,

    #[error("Participant id cannot be empty")]
    EmptyParticipantId,

    #[error("Duplicate participant id: {0}")]
    DuplicateParticipant(String),

    #[error("Roster must contain exactly one moderator (found {0})")]
    ModeratorCount(usize),

    #[error("Roster must contain exactly one summarizer (found {0})")]
    SummarizerCount(usize),

    #[error("Only the moderator may be non-autonomous: {0}")]
    NotAutonomous(String),

    #[error("max_rounds must be greater than 0")]
    ZeroRounds,

    #[error("Termination marker cannot be empty")]
    EmptyMarker,

    #[error("Termination marker cannot start or end with whitespace: {0:?}")]
    PaddedMarker(String),
}

/// Errors that prevent a meeting from starting
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MeetingError {
    #[error("Invalid input: {0}")]
    Input(#[from] InputError),

    #[error("Invalid meeting configuration: {0}")]
    Config(#[from] ConfigError),
}

impl MeetingError {
    /// Check if this error was caused by user input rather than configuration
    pub fn is_input(&self) -> bool {
        matches!(self, MeetingError::Input(_))
    }
}
