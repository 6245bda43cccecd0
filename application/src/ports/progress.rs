//! Progress notification port
//!
//! Defines the interface for reporting progress while a meeting runs.

use meeting_domain::{MeetingResult, Participant, Roster, Turn};

/// Callback for progress updates during a meeting
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (spinner, plain text, nothing).
pub trait MeetingProgressNotifier: Send + Sync {
    /// Called once the opening turn has been appended
    fn on_meeting_start(&self, roster: &Roster, max_rounds: u32);

    /// Called before a participant is asked for its turn
    fn on_turn_start(&self, round: usize, speaker: &Participant);

    /// Called after a turn has been appended to the transcript
    fn on_turn_complete(&self, round: usize, turn: &Turn);

    /// Called when a participant failed to produce its turn
    fn on_turn_failed(&self, _round: usize, _speaker: &Participant, _error: &str) {}

    /// Called once the meeting reached a terminal state
    fn on_meeting_end(&self, result: &MeetingResult);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl MeetingProgressNotifier for NoProgress {
    fn on_meeting_start(&self, _roster: &Roster, _max_rounds: u32) {}
    fn on_turn_start(&self, _round: usize, _speaker: &Participant) {}
    fn on_turn_complete(&self, _round: usize, _turn: &Turn) {}
    fn on_meeting_end(&self, _result: &MeetingResult) {}
}
