//! Domain layer for agent-meeting
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Meeting
//!
//! A meeting is a turn-based discussion between a fixed roster of
//! participants, opened and closed by a moderator:
//!
//! - **Roster**: ordered participants in invitation order, exactly one
//!   Moderator and one Summarizer
//! - **Transcript**: append-only log of turns, owned by the orchestrator
//! - **Scheduler**: decides who speaks next ([`SpeakerSelection`])
//! - **Termination**: sentinel marker at the end of a turn ends the meeting
//! - **Final summary**: the Summarizer's most recent turn

pub mod config;
pub mod core;
pub mod orchestration;
pub mod participant;
pub mod prompt;
pub mod transcript;

// Re-export commonly used types
pub use config::OutputFormat;
pub use core::{
    agenda::Agenda,
    error::{ConfigError, InputError, MeetingError},
};
pub use orchestration::{
    entities::{MeetingConfig, MeetingRun, MeetingState},
    scheduler::{ModeratorDirected, RoundRobin, SpeakerSelection, TurnScheduler},
    termination::{DEFAULT_TERMINATION_MARKER, SentinelDetector, TerminationDetector},
    value_objects::{FinalSummary, MeetingResult, TerminalState},
};
pub use participant::{
    entities::{Participant, ParticipantId, ParticipantRole},
    roster::Roster,
};
pub use prompt::{MeetingTemplate, Personas};
pub use transcript::{Transcript, Turn};
