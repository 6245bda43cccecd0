//! CLI entrypoint for Agent Meeting
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use meeting_application::{
    MeetingProgressNotifier, NoProgress, RunMeetingUseCase, TextGenerationPort,
};
use meeting_domain::{Agenda, OutputFormat};
use meeting_infrastructure::{
    ConfigLoader, FileConfig, JsonlConversationLogger, OpenAiGateway, OpenAiSettings,
};
use meeting_presentation::{Cli, ConsoleFormatter, ProgressReporter, SimpleProgress, prompt_agenda};
use secrecy::SecretString;
use std::io;
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is fine
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let _log_guard = init_logging(cli.verbose, cli.log_dir.as_deref())?;

    info!("Starting Agent Meeting");

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(());
    }

    // === Configuration ===
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };
    apply_overrides(&mut config, &cli);
    config.validate().context("Invalid configuration")?;

    ConsoleFormatter::set_color_enabled(config.output.color);
    let format: OutputFormat = cli
        .output
        .map(Into::into)
        .or(config.output.format)
        .unwrap_or_default();

    // === Agenda ===
    let agenda = match &cli.agenda {
        Some(agenda) => agenda.clone(),
        None => prompt_agenda(&mut io::stdin().lock(), &mut io::stdout())?,
    };
    let agenda = Agenda::parse(agenda).context("No agenda provided, nothing to discuss")?;
    let meeting = config.meeting_config(agenda.into_content());

    // === Dependency Injection ===
    let api_key_env = &config.generation.api_key_env;
    let api_key = std::env::var(api_key_env)
        .ok()
        .filter(|key| !key.trim().is_empty())
        .map(SecretString::from);
    if api_key.is_none() {
        warn!("{} is not set; sending requests without an API key", api_key_env);
    }

    let gateway = Arc::new(OpenAiGateway::new(OpenAiSettings {
        base_url: config.generation.base_url.clone(),
        model: config.generation.model.clone(),
        api_key,
        timeout: config.generation.timeout(),
    })?);

    let mut use_case = RunMeetingUseCase::new(Arc::clone(&gateway), config.execution_params());
    if let Some(path) = &cli.conversation_log
        && let Some(logger) = JsonlConversationLogger::new(path)
    {
        info!("Writing conversation log to {}", logger.path().display());
        use_case = use_case.with_conversation_logger(Arc::new(logger));
    }

    if !cli.quiet && format == OutputFormat::Full {
        println!("{}", ConsoleFormatter::banner(&meeting, &gateway.backend_name()));
    }

    // Progress goes to stderr (spinner) or stdout (plain); keep stdout clean for JSON
    let progress: Box<dyn MeetingProgressNotifier> = if cli.quiet {
        Box::new(NoProgress)
    } else if config.output.show_progress {
        Box::new(ProgressReporter::new())
    } else if format != OutputFormat::Json {
        Box::new(SimpleProgress)
    } else {
        Box::new(NoProgress)
    };

    let result = use_case
        .execute_with_progress(meeting, progress.as_ref())
        .await?;

    println!("{}", ConsoleFormatter::render(&result, format));

    if !result.is_complete() {
        bail!("{}", result.terminal_state.description());
    }

    Ok(())
}

/// Initialize logging based on verbosity level, optionally mirrored to daily files
fn init_logging(verbose: u8, log_dir: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };

    let (file_layer, guard) = match log_dir {
        Some(dir) => {
            let appender = RollingFileAppender::builder()
                .rotation(Rotation::DAILY)
                .filename_prefix("agent-meeting")
                .filename_suffix("log")
                .build(dir)
                .with_context(|| format!("Cannot write logs to {}", dir.display()))?;
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(
            fmt::layer()
                .with_writer(io::stderr)
                .with_target(false),
        )
        .with(file_layer)
        .init();

    Ok(guard)
}

/// CLI flags take precedence over every configuration source
fn apply_overrides(config: &mut FileConfig, cli: &Cli) {
    if let Some(model) = &cli.model {
        config.generation.model = model.clone();
    }
    if let Some(base_url) = &cli.base_url {
        config.generation.base_url = base_url.clone();
    }
    if let Some(max_rounds) = cli.max_rounds {
        config.meeting.max_rounds = max_rounds;
    }
    if let Some(selection) = cli.selection {
        config.meeting.selection = selection;
    }
    if let Some(marker) = &cli.marker {
        config.meeting.termination_marker = marker.clone();
    }
}
