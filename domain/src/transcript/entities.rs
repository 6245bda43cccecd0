//! Transcript entities

use crate::participant::entities::ParticipantId;
use serde::{Deserialize, Serialize};

/// One produced utterance (Entity)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub speaker_id: ParticipantId,
    pub content: String,
    /// Position in the meeting, assigned on append. The opening turn is 0.
    pub sequence_number: u64,
}

/// Append-only, ordered record of a meeting
///
/// Sequence numbers are assigned here and are strictly increasing; turns can
/// be read but never modified or removed once appended.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Transcript {
    turns: Vec<Turn>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a turn and return it with its assigned sequence number
    pub fn append(&mut self, speaker_id: ParticipantId, content: impl Into<String>) -> &Turn {
        let sequence_number = self.turns.len() as u64;
        self.turns.push(Turn {
            speaker_id,
            content: content.into(),
            sequence_number,
        });
        &self.turns[self.turns.len() - 1]
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn last(&self) -> Option<&Turn> {
        self.turns.last()
    }

    /// Turns produced after the opening turn
    pub fn round_count(&self) -> usize {
        self.turns.len().saturating_sub(1)
    }

    /// Most recent turn by `speaker`, scanning backward from the end
    pub fn last_turn_by(&self, speaker: &ParticipantId) -> Option<&Turn> {
        self.turns.iter().rev().find(|t| &t.speaker_id == speaker)
    }

    /// Most recent turn whose speaker is not `speaker`
    pub fn last_turn_not_by(&self, speaker: &ParticipantId) -> Option<&Turn> {
        self.turns.iter().rev().find(|t| &t.speaker_id != speaker)
    }
}
