//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod generation;
mod meeting;
mod output;
mod participants;

pub use generation::FileGenerationConfig;
pub use meeting::FileMeetingConfig;
pub use output::{FileOutputConfig, FileOutputFormat};
pub use participants::FileParticipantConfig;

use meeting_application::ExecutionParams;
use meeting_domain::{MeetingConfig, Participant, Personas};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("generation.timeout_seconds cannot be 0")]
    InvalidTimeout,

    #[error("generation.model cannot be empty")]
    EmptyModelName,

    #[error("generation.base_url cannot be empty")]
    EmptyBaseUrl,

    #[error("meeting.max_rounds cannot be 0")]
    ZeroRounds,

    #[error("meeting.termination_marker cannot be empty")]
    EmptyMarker,

    #[error("meeting.termination_marker cannot start or end with whitespace")]
    PaddedMarker,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Text-generation backend settings
    pub generation: FileGenerationConfig,
    /// Meeting loop settings
    pub meeting: FileMeetingConfig,
    /// Roster in invitation order; empty means the built-in personas
    pub participants: Vec<FileParticipantConfig>,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Check the values that cannot be caught by deserialization.
    ///
    /// Roster problems are left to [`MeetingConfig::validate`] so they are
    /// reported the same way regardless of where the roster came from.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.generation.model.trim().is_empty() {
            return Err(ConfigValidationError::EmptyModelName);
        }
        if self.generation.base_url.trim().is_empty() {
            return Err(ConfigValidationError::EmptyBaseUrl);
        }
        if self.generation.timeout_seconds == 0 {
            return Err(ConfigValidationError::InvalidTimeout);
        }
        if self.meeting.max_rounds == 0 {
            return Err(ConfigValidationError::ZeroRounds);
        }
        if self.meeting.termination_marker.trim().is_empty() {
            return Err(ConfigValidationError::EmptyMarker);
        }
        let marker = &self.meeting.termination_marker;
        if marker.trim() != marker.as_str() {
            return Err(ConfigValidationError::PaddedMarker);
        }
        Ok(())
    }

    /// Configured roster, or the built-in personas when none is given
    pub fn roster(&self) -> Vec<Participant> {
        if self.participants.is_empty() {
            Personas::default_roster()
        } else {
            self.participants
                .iter()
                .map(FileParticipantConfig::to_participant)
                .collect()
        }
    }

    /// Build the meeting configuration for `agenda`
    pub fn meeting_config(&self, agenda: impl Into<String>) -> MeetingConfig {
        MeetingConfig::new(agenda, self.roster())
            .with_max_rounds(self.meeting.max_rounds)
            .with_termination_marker(self.meeting.termination_marker.as_str())
            .with_selection(self.meeting.selection)
    }

    pub fn execution_params(&self) -> ExecutionParams {
        ExecutionParams::default()
            .with_limits(self.generation.limits())
            .with_retry_attempts(self.meeting.retry_attempts)
            .with_retry_backoff(self.meeting.retry_backoff())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use meeting_domain::{OutputFormat, SpeakerSelection};

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[generation]
model = "gpt-4.1-mini"
max_output_tokens = 512

[meeting]
max_rounds = 10
termination_marker = "ADJOURN"
selection = "moderator_directed"
retry_attempts = 2

[[participants]]
id = "Chair"
role = "moderator"

[[participants]]
id = "Scribe"
role = "summarizer"
directive = "Take minutes."

[[participants]]
id = "Architect"
directive = "Discuss the design."

[output]
format = "summary"
color = false
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert!(config.validate().is_ok());

        let meeting = config.meeting_config("Design a login system");
        assert_eq!(meeting.max_rounds, 10);
        assert_eq!(meeting.termination_marker, "ADJOURN");
        assert_eq!(meeting.selection, SpeakerSelection::ModeratorDirected);
        assert_eq!(meeting.participants.len(), 3);
        assert!(meeting.validate().is_ok());

        let params = config.execution_params();
        assert_eq!(params.retry_attempts, 2);
        assert_eq!(params.limits.max_output_tokens, 512);

        assert_eq!(config.output.format, Some(OutputFormat::Summary));
        assert!(!config.output.color);
    }

    #[test]
    fn test_default_config() {
        let config = FileConfig::default();
        assert!(config.validate().is_ok());
        assert!(config.participants.is_empty());
        assert_eq!(config.roster().len(), 5);
        assert!(config.output.color);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = FileConfig::default();
        config.meeting.max_rounds = 0;
        assert_eq!(config.validate(), Err(ConfigValidationError::ZeroRounds));

        let mut config = FileConfig::default();
        config.generation.timeout_seconds = 0;
        assert_eq!(config.validate(), Err(ConfigValidationError::InvalidTimeout));

        let mut config = FileConfig::default();
        config.meeting.termination_marker = " ".to_string();
        assert_eq!(config.validate(), Err(ConfigValidationError::EmptyMarker));

        let mut config = FileConfig::default();
        config.meeting.termination_marker = "END ".to_string();
        assert_eq!(config.validate(), Err(ConfigValidationError::PaddedMarker));
    }

    #[test]
    fn test_unknown_selection_is_rejected() {
        let toml_str = r#"
[meeting]
selection = "random"
"#;
        assert!(toml::from_str::<FileConfig>(toml_str).is_err());
    }
}
