//! Configuration file loading for agent-meeting
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `MEETING_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./meeting.toml` or `./.meeting.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/agent-meeting/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileConfig, FileGenerationConfig, FileMeetingConfig, FileOutputConfig,
    FileOutputFormat, FileParticipantConfig,
};
pub use loader::{ConfigLoader, ENV_PREFIX};
