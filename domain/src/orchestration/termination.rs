//! Termination detection
//!
//! The meeting ends when a turn signals it. Today that signal is a sentinel
//! string at the end of the utterance; the orchestrator only sees
//! [`TerminationDetector`], so a structured end-of-meeting signal can replace
//! it later.

use crate::transcript::Turn;

/// Sentinel used when none is configured
pub const DEFAULT_TERMINATION_MARKER: &str = "TERMINATE";

/// Decides whether a just-appended turn ends the meeting.
///
/// Implementations must depend only on the given turn.
pub trait TerminationDetector: Send + Sync {
    fn is_terminal(&self, turn: &Turn) -> bool;
}

/// Exact, case-sensitive suffix match after trimming trailing whitespace
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentinelDetector {
    marker: String,
}

impl SentinelDetector {
    pub fn new(marker: impl Into<String>) -> Self {
        Self {
            marker: marker.into(),
        }
    }

    pub fn marker(&self) -> &str {
        &self.marker
    }
}

impl Default for SentinelDetector {
    fn default() -> Self {
        Self::new(DEFAULT_TERMINATION_MARKER)
    }
}

impl TerminationDetector for SentinelDetector {
    fn is_terminal(&self, turn: &Turn) -> bool {
        !self.marker.is_empty() && turn.content.trim_end().ends_with(&self.marker)
    }
}
