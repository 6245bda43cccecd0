//! Roster configuration from TOML (`[[participants]]` array)

use meeting_domain::{Participant, ParticipantRole};
use serde::{Deserialize, Serialize};

/// One `[[participants]]` entry
///
/// ```toml
/// [[participants]]
/// id = "Moderator"
/// role = "moderator"
/// directive = "You are the meeting moderator."
///
/// [[participants]]
/// id = "Minute_Taker"
/// role = "summarizer"
/// directive = "You take the minutes."
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileParticipantConfig {
    pub id: String,
    #[serde(default)]
    pub role: ParticipantRole,
    #[serde(default)]
    pub directive: String,
    /// Defaults to `false` for the moderator and `true` for everyone else
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub autonomous: Option<bool>,
}

impl FileParticipantConfig {
    pub fn to_participant(&self) -> Participant {
        let autonomous = self
            .autonomous
            .unwrap_or(self.role != ParticipantRole::Moderator);
        Participant::new(
            self.id.trim(),
            self.directive.as_str(),
            self.role,
            autonomous,
        )
    }
}
