//! CLI command definitions

use clap::{Parser, ValueEnum};
use meeting_domain::SpeakerSelection;
use std::path::PathBuf;

/// Output format for meeting results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Full transcript, minutes and outcome
    Full,
    /// Only the minutes
    Summary,
    /// JSON output
    Json,
}

impl From<OutputFormat> for meeting_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Full => meeting_domain::OutputFormat::Full,
            OutputFormat::Summary => meeting_domain::OutputFormat::Summary,
            OutputFormat::Json => meeting_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for agent-meeting
#[derive(Parser, Debug)]
#[command(name = "agent-meeting")]
#[command(author, version, about = "Moderated multi-agent meeting with minutes")]
#[command(long_about = r#"
Agent Meeting runs a moderated round-table discussion between AI personas
and prints the meeting minutes.

The moderator opens the meeting with the agenda, participants take turns
(round robin or as called on by the moderator), and the minute taker
summarizes the key outcomes. The meeting ends when a turn ends with the
termination marker or the round limit is reached.

Configuration files are loaded from (in priority order):
1. MEETING_* environment variables
2. --config <path>       Explicit config file
3. ./meeting.toml        Project-level config
4. ~/.config/agent-meeting/config.toml   Global config

Example:
  agent-meeting "Design a login system with 2FA"
  agent-meeting --max-rounds 10 --selection moderator_directed "Plan the Q3 release"
  agent-meeting -o summary --base-url http://localhost:11434/v1 -m llama3 "Review the API"
"#)]
pub struct Cli {
    /// The meeting agenda (prompted for when omitted)
    pub agenda: Option<String>,

    /// Model served by the text-generation backend
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Endpoint root of an OpenAI-compatible server
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Maximum number of turns after the opening
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u32).range(1..))]
    pub max_rounds: Option<u32>,

    /// Speaker selection: round_robin or moderator_directed
    #[arg(long, value_name = "POLICY")]
    pub selection: Option<SpeakerSelection>,

    /// Marker that ends the meeting when a turn ends with it
    #[arg(long, value_name = "TEXT")]
    pub marker: Option<String>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Write a JSONL log of every meeting event to this file
    #[arg(long, value_name = "PATH")]
    pub conversation_log: Option<PathBuf>,

    /// Also write diagnostic logs to daily files in this directory
    #[arg(long, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,
}
