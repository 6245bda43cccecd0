//! Port for structured conversation logging.
//!
//! Defines the [`ConversationLogger`] trait for recording meeting events
//! (opening, every appended turn, generation failures, the outcome) to a
//! structured log.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostic messages, while this port captures the full
//! meeting transcript in a machine-readable format (JSONL).

use meeting_domain::{MeetingResult, ParticipantId, Roster, Turn};
use serde_json::{Value, json};

/// A structured conversation event for logging.
///
/// Each event has a type string and a JSON payload containing event-specific
/// fields. Adapters add the timestamp when writing.
pub struct ConversationEvent {
    /// Event type identifier (e.g., "meeting_started", "turn_appended").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl ConversationEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }

    pub fn meeting_started(agenda: &str, roster: &Roster, max_rounds: u32) -> Self {
        Self::new(
            "meeting_started",
            json!({
                "agenda": agenda,
                "participants": roster.ids(),
                "moderator": roster.moderator().id(),
                "summarizer": roster.summarizer().id(),
                "max_rounds": max_rounds,
            }),
        )
    }

    pub fn turn_appended(turn: &Turn, autonomous: bool) -> Self {
        Self::new(
            "turn_appended",
            json!({
                "sequence_number": turn.sequence_number,
                "speaker": turn.speaker_id,
                "autonomous": autonomous,
                "bytes": turn.content.len(),
                "text": turn.content,
            }),
        )
    }

    pub fn generation_failed(round: usize, speaker: &ParticipantId, attempt: u32, error: &str) -> Self {
        Self::new(
            "generation_failed",
            json!({
                "round": round,
                "speaker": speaker,
                "attempt": attempt,
                "error": error,
            }),
        )
    }

    pub fn meeting_finished(result: &MeetingResult) -> Self {
        Self::new(
            "meeting_finished",
            json!({
                "terminal_state": result.terminal_state,
                "rounds": result.rounds(),
                "summary_produced": result.final_summary.is_produced(),
            }),
        )
    }
}

/// Port for logging conversation events to a structured log.
///
/// Implementations write each event as a single record (e.g., one JSONL line).
/// The `log` method is synchronous and non-fallible so a broken log file
/// never interrupts a meeting.
pub trait ConversationLogger: Send + Sync {
    /// Record a conversation event.
    fn log(&self, event: ConversationEvent);
}

/// No-op implementation for tests and when logging is disabled.
pub struct NoConversationLogger;

impl ConversationLogger for NoConversationLogger {
    fn log(&self, _event: ConversationEvent) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turn_appended_payload() {
        let turn = Turn {
            speaker_id: "Technical_Agent".into(),
            content: "Use OAuth2 with TOTP.".to_string(),
            sequence_number: 3,
        };
        let event = ConversationEvent::turn_appended(&turn, true);
        assert_eq!(event.event_type, "turn_appended");
        assert_eq!(event.payload["speaker"], "Technical_Agent");
        assert_eq!(event.payload["sequence_number"], 3);
        assert_eq!(event.payload["bytes"], 21);
    }

    #[test]
    fn test_generation_failed_payload() {
        let event = ConversationEvent::generation_failed(3, &"Quality_Agent".into(), 1, "Timeout");
        assert_eq!(event.payload["round"], 3);
        assert_eq!(event.payload["error"], "Timeout");
    }
}
