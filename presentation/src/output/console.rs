//! Console output formatter for meeting results

use crate::output::formatter::OutputFormatter;
use colored::Colorize;
use meeting_domain::{
    FinalSummary, MeetingConfig, MeetingResult, OutputFormat, TerminalState, Turn,
};

/// Formats meeting results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Turn colored output off (it is on by default when writing to a terminal)
    pub fn set_color_enabled(enabled: bool) {
        if !enabled {
            colored::control::set_override(false);
        }
    }

    /// Render `result` in the requested format
    pub fn render(result: &MeetingResult, format: OutputFormat) -> String {
        match format {
            OutputFormat::Full => Self::format(result),
            OutputFormat::Summary => Self::format_summary_only(result),
            OutputFormat::Json => Self::format_json(result),
        }
    }

    /// Header printed before the meeting starts
    pub fn banner(config: &MeetingConfig, backend: &str) -> String {
        let mut output = String::new();
        output.push('\n');
        output.push_str(&Self::header("Agent Meeting"));
        output.push_str("\n\n");
        output.push_str(&format!(
            "{} {}\n",
            "Agenda:".cyan().bold(),
            config.agenda.trim()
        ));
        output.push_str(&format!(
            "{} {}\n",
            "Participants:".cyan().bold(),
            config
                .participants
                .iter()
                .map(|p| p.id().to_string())
                .collect::<Vec<_>>()
                .join(", ")
        ));
        output.push_str(&format!(
            "{} {} ({}, max {} rounds)\n",
            "Backend:".cyan().bold(),
            backend,
            config.selection,
            config.max_rounds
        ));
        output
    }

    /// Format the complete meeting result
    pub fn format(result: &MeetingResult) -> String {
        let mut output = String::new();

        // Header
        output.push_str(&Self::header("Meeting Transcript"));
        output.push('\n');

        output.push_str(&format!(
            "{} {}\n\n",
            "Agenda:".cyan().bold(),
            result.agenda
        ));

        // Transcript
        output.push_str(&Self::section_header("Discussion"));
        for turn in result.transcript.turns() {
            output.push_str(&Self::format_turn(turn));
        }

        // Minutes
        output.push_str(&Self::section_header("Minutes"));
        output.push('\n');
        output.push_str(&Self::format_summary(&result.final_summary));
        output.push('\n');

        // Outcome
        output.push_str(&Self::section_header("Outcome"));
        output.push('\n');
        output.push_str(&Self::format_terminal_state(&result.terminal_state));
        output.push_str(&format!(
            "\n{} {}\n",
            "Rounds:".dimmed(),
            result.rounds()
        ));

        output.push_str(&Self::footer());

        output
    }

    /// Format as JSON
    pub fn format_json(result: &MeetingResult) -> String {
        serde_json::to_string_pretty(result).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format the minutes only (concise output)
    pub fn format_summary_only(result: &MeetingResult) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "{}\n\n",
            "=== Meeting Minutes ===".cyan().bold()
        ));

        output.push_str(&format!("{} {}\n\n", "Agenda:".bold(), result.agenda));

        output.push_str(&Self::format_summary(&result.final_summary));
        output.push('\n');

        if !result.is_complete() {
            output.push('\n');
            output.push_str(&Self::format_terminal_state(&result.terminal_state));
            output.push('\n');
        }

        output
    }

    fn format_turn(turn: &Turn) -> String {
        format!(
            "\n{}\n{}\n",
            format!("── [{}] {} ──", turn.sequence_number, turn.speaker_id)
                .yellow()
                .bold(),
            turn.content
        )
    }

    fn format_summary(summary: &FinalSummary) -> String {
        match summary {
            FinalSummary::Produced { content, .. } => content.clone(),
            FinalSummary::NoneProduced => FinalSummary::NONE_MESSAGE.yellow().to_string(),
        }
    }

    fn format_terminal_state(state: &TerminalState) -> String {
        let description = state.description();
        match state {
            TerminalState::Terminated { .. } => format!("{} {}", "v".green(), description),
            TerminalState::RoundLimitReached { .. } => {
                format!("{} {}", "!".yellow(), description)
            }
            TerminalState::Aborted { .. } => {
                format!("{} {}", "x".red(), description.red())
            }
        }
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format(&self, result: &MeetingResult) -> String {
        Self::format(result)
    }

    fn format_json(&self, result: &MeetingResult) -> String {
        Self::format_json(result)
    }

    fn format_summary_only(&self, result: &MeetingResult) -> String {
        Self::format_summary_only(result)
    }
}
