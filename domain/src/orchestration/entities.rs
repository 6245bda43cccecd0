//! Orchestration domain entities

use crate::core::agenda::Agenda;
use crate::core::error::{ConfigError, MeetingError};
use crate::orchestration::scheduler::SpeakerSelection;
use crate::orchestration::termination::DEFAULT_TERMINATION_MARKER;
use crate::orchestration::value_objects::{FinalSummary, MeetingResult, TerminalState};
use crate::participant::entities::{Participant, ParticipantId};
use crate::participant::roster::Roster;
use crate::prompt::Personas;
use crate::transcript::{Transcript, Turn};
use serde::{Deserialize, Serialize};

/// Lifecycle state of a meeting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeetingState {
    NotStarted,
    Running,
    Terminated,
    RoundLimitReached,
    Aborted,
}

impl MeetingState {
    pub fn as_str(&self) -> &'static str {
        match self {
            MeetingState::NotStarted => "not_started",
            MeetingState::Running => "running",
            MeetingState::Terminated => "terminated",
            MeetingState::RoundLimitReached => "round_limit_reached",
            MeetingState::Aborted => "aborted",
        }
    }

    pub fn is_finished(&self) -> bool {
        !matches!(self, MeetingState::NotStarted | MeetingState::Running)
    }
}

impl std::fmt::Display for MeetingState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Everything needed to hold one meeting
///
/// Built once from user input and static persona definitions, then handed to
/// the orchestrator. Validation happens in [`MeetingConfig::validate`].
#[derive(Debug, Clone)]
pub struct MeetingConfig {
    /// Raw agenda as typed by the user
    pub agenda: String,
    /// Participants in invitation order
    pub participants: Vec<Participant>,
    /// Ceiling on produced turns (the opening turn is not counted)
    pub max_rounds: u32,
    pub termination_marker: String,
    pub selection: SpeakerSelection,
}

impl MeetingConfig {
    pub const DEFAULT_MAX_ROUNDS: u32 = 6;

    pub fn new(agenda: impl Into<String>, participants: Vec<Participant>) -> Self {
        Self {
            agenda: agenda.into(),
            participants,
            max_rounds: Self::DEFAULT_MAX_ROUNDS,
            termination_marker: DEFAULT_TERMINATION_MARKER.to_string(),
            selection: SpeakerSelection::default(),
        }
    }

    /// A meeting with the built-in software-design personas
    pub fn with_default_personas(agenda: impl Into<String>) -> Self {
        Self::new(agenda, Personas::default_roster())
    }

    pub fn with_max_rounds(mut self, max_rounds: u32) -> Self {
        self.max_rounds = max_rounds;
        self
    }

    pub fn with_termination_marker(mut self, marker: impl Into<String>) -> Self {
        self.termination_marker = marker.into();
        self
    }

    pub fn with_selection(mut self, selection: SpeakerSelection) -> Self {
        self.selection = selection;
        self
    }

    /// Validate the configuration.
    ///
    /// The agenda is checked first, so a blank agenda is always reported as
    /// an input error even when the roster is also broken.
    pub fn validate(&self) -> Result<(Agenda, Roster), MeetingError> {
        let agenda = Agenda::parse(&self.agenda)?;

        if self.max_rounds == 0 {
            return Err(ConfigError::ZeroRounds.into());
        }
        if self.termination_marker.trim().is_empty() {
            return Err(ConfigError::EmptyMarker.into());
        }
        if self.termination_marker.trim() != self.termination_marker {
            return Err(ConfigError::PaddedMarker(self.termination_marker.clone()).into());
        }

        let roster = Roster::new(self.participants.clone())?;
        Ok((agenda, roster))
    }
}

/// A single meeting in progress (Entity)
///
/// Owns the transcript exclusively and enforces the state machine
/// `NotStarted -> Running -> Terminated | RoundLimitReached | Aborted`.
#[derive(Debug, Clone)]
pub struct MeetingRun {
    agenda: Agenda,
    roster: Roster,
    state: MeetingState,
    transcript: Transcript,
}

impl MeetingRun {
    pub fn new(agenda: Agenda, roster: Roster) -> Self {
        Self {
            agenda,
            roster,
            state: MeetingState::NotStarted,
            transcript: Transcript::new(),
        }
    }

    pub fn agenda(&self) -> &Agenda {
        &self.agenda
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn state(&self) -> MeetingState {
        self.state
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Seed the transcript with the Moderator's opening turn.
    pub fn start(&mut self, opening: impl Into<String>) -> &Turn {
        debug_assert_eq!(self.state, MeetingState::NotStarted);
        self.state = MeetingState::Running;
        let moderator = self.roster.moderator().id().clone();
        self.transcript.append(moderator, opening)
    }

    /// Append a produced turn.
    pub fn record(&mut self, speaker: ParticipantId, content: impl Into<String>) -> &Turn {
        debug_assert_eq!(self.state, MeetingState::Running);
        self.transcript.append(speaker, content)
    }

    /// Close the meeting and extract the minutes from whatever was said.
    pub fn finish(self, terminal_state: TerminalState) -> MeetingResult {
        debug_assert!(terminal_state.state().is_finished());
        let summarizer = self.roster.summarizer().id().clone();
        let final_summary = FinalSummary::extract(&self.transcript, &summarizer);

        MeetingResult {
            agenda: self.agenda.into_content(),
            participants: self.roster.ids(),
            summarizer,
            transcript: self.transcript,
            final_summary,
            terminal_state,
        }
    }
}
