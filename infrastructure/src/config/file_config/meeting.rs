//! Meeting loop configuration from TOML (`[meeting]` section)

use meeting_application::ExecutionParams;
use meeting_domain::{DEFAULT_TERMINATION_MARKER, MeetingConfig, SpeakerSelection};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Raw meeting configuration from TOML
///
/// ```toml
/// [meeting]
/// max_rounds = 6
/// termination_marker = "TERMINATE"
/// selection = "round_robin"      # or "moderator_directed"
/// retry_attempts = 0
/// retry_backoff_ms = 2000
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileMeetingConfig {
    pub max_rounds: u32,
    pub termination_marker: String,
    pub selection: SpeakerSelection,
    /// Extra attempts for transient backend failures
    pub retry_attempts: u32,
    pub retry_backoff_ms: u64,
}

impl Default for FileMeetingConfig {
    fn default() -> Self {
        let params = ExecutionParams::default();
        Self {
            max_rounds: MeetingConfig::DEFAULT_MAX_ROUNDS,
            termination_marker: DEFAULT_TERMINATION_MARKER.to_string(),
            selection: SpeakerSelection::default(),
            retry_attempts: params.retry_attempts,
            retry_backoff_ms: params.retry_backoff.as_millis() as u64,
        }
    }
}

impl FileMeetingConfig {
    pub fn retry_backoff(&self) -> Duration {
        Duration::from_millis(self.retry_backoff_ms)
    }
}
