//! Participant entities

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique name of a participant within a meeting
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParticipantId(String);

impl ParticipantId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ParticipantId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for ParticipantId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// What a participant is for in the meeting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParticipantRole {
    /// Contributes to the discussion
    #[default]
    Responder,
    /// Opens, hands off and closes the meeting
    Moderator,
    /// A responder whose latest turn becomes the meeting minutes
    #[serde(alias = "minute_taker")]
    Summarizer,
}

impl ParticipantRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParticipantRole::Responder => "responder",
            ParticipantRole::Moderator => "moderator",
            ParticipantRole::Summarizer => "summarizer",
        }
    }
}

impl fmt::Display for ParticipantRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ParticipantRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "responder" => Ok(ParticipantRole::Responder),
            "moderator" => Ok(ParticipantRole::Moderator),
            "summarizer" | "minute_taker" => Ok(ParticipantRole::Summarizer),
            _ => Err(format!("Invalid ParticipantRole: {}", s)),
        }
    }
}

/// A meeting participant (Entity)
///
/// Immutable once created. `autonomous` participants obtain their lines from
/// the text-generation backend; the others are voiced by the orchestrator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    id: ParticipantId,
    directive: String,
    role: ParticipantRole,
    autonomous: bool,
}

impl Participant {
    pub fn new(
        id: impl Into<ParticipantId>,
        directive: impl Into<String>,
        role: ParticipantRole,
        autonomous: bool,
    ) -> Self {
        Self {
            id: id.into(),
            directive: directive.into(),
            role,
            autonomous,
        }
    }

    /// An autonomous discussion participant
    pub fn responder(id: impl Into<ParticipantId>, directive: impl Into<String>) -> Self {
        Self::new(id, directive, ParticipantRole::Responder, true)
    }

    /// An autonomous participant whose output is extracted as the minutes
    pub fn summarizer(id: impl Into<ParticipantId>, directive: impl Into<String>) -> Self {
        Self::new(id, directive, ParticipantRole::Summarizer, true)
    }

    /// A moderator driven purely by orchestration logic
    pub fn moderator(id: impl Into<ParticipantId>, directive: impl Into<String>) -> Self {
        Self::new(id, directive, ParticipantRole::Moderator, false)
    }

    pub fn with_autonomous(mut self, autonomous: bool) -> Self {
        self.autonomous = autonomous;
        self
    }

    pub fn id(&self) -> &ParticipantId {
        &self.id
    }

    pub fn directive(&self) -> &str {
        &self.directive
    }

    pub fn role(&self) -> ParticipantRole {
        self.role
    }

    pub fn is_autonomous(&self) -> bool {
        self.autonomous
    }

    pub fn is_moderator(&self) -> bool {
        self.role == ParticipantRole::Moderator
    }

    pub fn is_summarizer(&self) -> bool {
        self.role == ParticipantRole::Summarizer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_set_role_and_autonomy() {
        let mgmt = Participant::responder("Management_Agent", "Focus on scope.");
        assert_eq!(mgmt.role(), ParticipantRole::Responder);
        assert!(mgmt.is_autonomous());

        let minutes = Participant::summarizer("Minute_Taker", "Summarize.");
        assert!(minutes.is_summarizer());
        assert!(minutes.is_autonomous());

        let moderator = Participant::moderator("Moderator", "Run the meeting.");
        assert!(moderator.is_moderator());
        assert!(!moderator.is_autonomous());
        assert!(moderator.with_autonomous(true).is_autonomous());
    }

    #[test]
    fn test_role_parsing() {
        assert_eq!("Moderator".parse(), Ok(ParticipantRole::Moderator));
        assert_eq!("minute_taker".parse(), Ok(ParticipantRole::Summarizer));
        assert!("chairperson".parse::<ParticipantRole>().is_err());
    }

    #[test]
    fn test_role_serde_snake_case() {
        let json = serde_json::to_string(&ParticipantRole::Summarizer).unwrap();
        assert_eq!(json, "\"summarizer\"");
    }

    #[test]
    fn test_participant_id_is_transparent() {
        let id = ParticipantId::from("Quality_Agent");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"Quality_Agent\"");
        assert_eq!(id.to_string(), "Quality_Agent");
    }
}
