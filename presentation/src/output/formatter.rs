//! Output formatter trait

use meeting_domain::MeetingResult;

/// Trait for formatting meeting results
pub trait OutputFormatter {
    /// Format the complete result: transcript, summary and outcome
    fn format(&self, result: &MeetingResult) -> String;

    /// Format as JSON
    fn format_json(&self, result: &MeetingResult) -> String;

    /// Format the minutes only (concise output)
    fn format_summary_only(&self, result: &MeetingResult) -> String;
}
