//! Progress reporting for meeting execution

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use meeting_application::MeetingProgressNotifier;
use meeting_domain::{MeetingResult, Participant, Roster, Turn};
use meeting_domain::core::string::one_line_preview;
use std::sync::Mutex;
use std::time::Duration;

/// Width of the turn previews shown while the meeting runs
const PREVIEW_LEN: usize = 60;

/// Reports progress during a meeting with a round counter and spinner
pub struct ProgressReporter {
    bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            bar: Mutex::new(None),
        }
    }

    fn round_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:30.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-")
    }

    fn with_bar(&self, f: impl FnOnce(&ProgressBar)) {
        if let Ok(guard) = self.bar.lock()
            && let Some(pb) = guard.as_ref()
        {
            f(pb);
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl MeetingProgressNotifier for ProgressReporter {
    fn on_meeting_start(&self, _roster: &Roster, max_rounds: u32) {
        let pb = ProgressBar::new(max_rounds as u64);
        pb.set_style(Self::round_style());
        pb.set_prefix("Meeting");
        pb.set_message("Opening...");
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut guard) = self.bar.lock() {
            *guard = Some(pb);
        }
    }

    fn on_turn_start(&self, _round: usize, speaker: &Participant) {
        self.with_bar(|pb| pb.set_message(format!("{} is speaking...", speaker.id())));
    }

    fn on_turn_complete(&self, _round: usize, turn: &Turn) {
        self.with_bar(|pb| {
            pb.println(format!(
                "  {} {}: {}",
                "v".green(),
                turn.speaker_id.to_string().bold(),
                one_line_preview(&turn.content, PREVIEW_LEN).dimmed()
            ));
            pb.inc(1);
        });
    }

    fn on_turn_failed(&self, _round: usize, speaker: &Participant, error: &str) {
        self.with_bar(|pb| {
            pb.println(format!("  {} {}: {}", "x".red(), speaker.id(), error.red()));
        });
    }

    fn on_meeting_end(&self, result: &MeetingResult) {
        let Ok(mut guard) = self.bar.lock() else {
            return;
        };
        if let Some(pb) = guard.take() {
            let message = if result.is_complete() {
                "Meeting finished".green().to_string()
            } else {
                "Meeting aborted".red().to_string()
            };
            pb.finish_with_message(message);
        }
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl MeetingProgressNotifier for SimpleProgress {
    fn on_meeting_start(&self, roster: &Roster, max_rounds: u32) {
        println!(
            "{} {} ({} participants, max {} rounds)",
            "->".cyan(),
            "Meeting started".bold(),
            roster.len(),
            max_rounds
        );
    }

    fn on_turn_start(&self, round: usize, speaker: &Participant) {
        println!("  {} round {}: {}", "->".cyan(), round, speaker.id());
    }

    fn on_turn_complete(&self, _round: usize, turn: &Turn) {
        println!(
            "  {} {}",
            "v".green(),
            one_line_preview(&turn.content, PREVIEW_LEN)
        );
    }

    fn on_turn_failed(&self, _round: usize, speaker: &Participant, error: &str) {
        println!("  {} {} (failed: {})", "x".red(), speaker.id(), error);
    }

    fn on_meeting_end(&self, result: &MeetingResult) {
        println!("{} {}", "->".cyan(), result.terminal_state.description());
        println!();
    }
}
