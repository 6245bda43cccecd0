//! Built-in software-design meeting personas

use crate::participant::entities::Participant;

/// The default roster: a moderator, a minute taker and three specialists
pub struct Personas;

impl Personas {
    pub const MODERATOR: &'static str = "Moderator";
    pub const MINUTE_TAKER: &'static str = "Minute_Taker";
    pub const MANAGEMENT: &'static str = "Management_Agent";
    pub const TECHNICAL: &'static str = "Technical_Agent";
    pub const QUALITY: &'static str = "Quality_Agent";

    /// Roster in invitation order
    pub fn default_roster() -> Vec<Participant> {
        vec![
            Participant::moderator(Self::MODERATOR, Self::moderator_directive()),
            Participant::summarizer(Self::MINUTE_TAKER, Self::minute_taker_directive()),
            Participant::responder(Self::MANAGEMENT, Self::management_directive()),
            Participant::responder(Self::TECHNICAL, Self::technical_directive()),
            Participant::responder(Self::QUALITY, Self::quality_directive()),
        ]
    }

    pub fn moderator_directive() -> &'static str {
        r#"You are the Meeting Moderator.
Start the meeting with the agenda.
Invite agents in order: Management_Agent, Technical_Agent, Quality_Agent.
Then ask Minute_Taker to summarize.
End by saying 'TERMINATE'.
Conduct the entire meeting in English."#
    }

    pub fn minute_taker_directive() -> &'static str {
        r#"You are the Minute-Taking Agent.
Your job is to summarize discussions in clear, professional English.
After the meeting, produce a structured summary including:
- Topic
- Key decisions
- Action items (with owner and deadline if mentioned)
- Next meeting time (if decided)
Do not add opinions. Be concise and factual."#
    }

    pub fn management_directive() -> &'static str {
        r#"You are the Management Agent.
Focus on project goals, timelines, scope, and stakeholder needs.
Speak in English only.
Suggest deadlines, flag risks, and keep discussion aligned with business value.
Keep responses under 80 words."#
    }

    pub fn technical_directive() -> &'static str {
        r#"You are the Technical Agent.
Discuss architecture, implementation, and technology choices.
Use English only.
Recommend tools (e.g., React, Node, OAuth2, Docker) and explain trade-offs.
Stay practical and concise."#
    }

    pub fn quality_directive() -> &'static str {
        r#"You are the Quality Assurance Agent.
Focus on testing, reliability, edge cases, and security.
Ask about test coverage, failure modes, and monitoring.
Respond in clear English.
Suggest QA practices and automation."#
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::participant::roster::Roster;

    #[test]
    fn test_default_roster_is_valid() {
        let roster = Roster::new(Personas::default_roster()).unwrap();
        assert_eq!(roster.moderator().id().as_str(), Personas::MODERATOR);
        assert!(!roster.moderator().is_autonomous());
        assert_eq!(roster.summarizer().id().as_str(), Personas::MINUTE_TAKER);
        assert!(roster.speakers().all(|p| p.is_autonomous()));
    }

    #[test]
    fn test_directives_are_not_empty() {
        for participant in Personas::default_roster() {
            assert!(!participant.directive().trim().is_empty());
        }
    }
}
