//! Orchestration value objects - immutable result types for a meeting.
//!
//! - [`TerminalState`] - how the meeting loop ended
//! - [`FinalSummary`] - the minutes extracted from the transcript
//! - [`MeetingResult`] - everything a host program needs to render a meeting

use crate::orchestration::entities::MeetingState;
use crate::participant::entities::ParticipantId;
use crate::transcript::Transcript;
use serde::Serialize;

/// How a meeting that started came to an end
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum TerminalState {
    /// A turn ended with the termination marker
    Terminated { speaker: ParticipantId, round: usize },
    /// `max_rounds` turns were produced without the marker
    RoundLimitReached { max_rounds: u32 },
    /// A participant failed to respond; the transcript is partial
    Aborted {
        speaker: ParticipantId,
        round: usize,
        error: String,
    },
}

impl TerminalState {
    pub fn state(&self) -> MeetingState {
        match self {
            TerminalState::Terminated { .. } => MeetingState::Terminated,
            TerminalState::RoundLimitReached { .. } => MeetingState::RoundLimitReached,
            TerminalState::Aborted { .. } => MeetingState::Aborted,
        }
    }

    pub fn is_aborted(&self) -> bool {
        matches!(self, TerminalState::Aborted { .. })
    }

    /// One-line human readable explanation
    pub fn description(&self) -> String {
        match self {
            TerminalState::Terminated { speaker, round } => {
                format!("Meeting closed by {} in round {}", speaker, round)
            }
            TerminalState::RoundLimitReached { max_rounds } => {
                format!("Meeting ran out of rounds ({} max)", max_rounds)
            }
            TerminalState::Aborted {
                speaker,
                round,
                error,
            } => format!(
                "{} failed to respond in round {}: {}",
                speaker, round, error
            ),
        }
    }
}

/// The meeting minutes, or their explicit absence
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FinalSummary {
    Produced {
        speaker: ParticipantId,
        sequence_number: u64,
        content: String,
    },
    NoneProduced,
}

impl FinalSummary {
    /// Shown wherever a summary would be when none exists
    pub const NONE_MESSAGE: &'static str = "No summary was generated by the summarizer.";

    /// Most recent turn by `summarizer`, found by scanning backward
    pub fn extract(transcript: &Transcript, summarizer: &ParticipantId) -> Self {
        match transcript.last_turn_by(summarizer) {
            Some(turn) => FinalSummary::Produced {
                speaker: turn.speaker_id.clone(),
                sequence_number: turn.sequence_number,
                content: turn.content.clone(),
            },
            None => FinalSummary::NoneProduced,
        }
    }

    pub fn content(&self) -> Option<&str> {
        match self {
            FinalSummary::Produced { content, .. } => Some(content),
            FinalSummary::NoneProduced => None,
        }
    }

    pub fn is_produced(&self) -> bool {
        matches!(self, FinalSummary::Produced { .. })
    }
}

/// Complete result of a meeting
#[derive(Debug, Clone, Serialize)]
pub struct MeetingResult {
    pub agenda: String,
    /// Roster in invitation order
    pub participants: Vec<ParticipantId>,
    pub summarizer: ParticipantId,
    pub transcript: Transcript,
    pub final_summary: FinalSummary,
    pub terminal_state: TerminalState,
}

impl MeetingResult {
    /// Turns produced after the opening turn
    pub fn rounds(&self) -> usize {
        self.transcript.round_count()
    }

    /// Returns `true` unless a participant failed mid-meeting.
    pub fn is_complete(&self) -> bool {
        !self.terminal_state.is_aborted()
    }
}
