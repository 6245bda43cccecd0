//! Roster of a single meeting

use crate::core::error::ConfigError;
use crate::participant::entities::{Participant, ParticipantId, ParticipantRole};
use std::collections::HashSet;

/// The validated, ordered participants of one meeting (Value Object)
///
/// Order is invitation order. Construction guarantees:
/// - at least one participant, every id non-empty and unique
/// - exactly one [`ParticipantRole::Moderator`]
/// - exactly one [`ParticipantRole::Summarizer`]
/// - only the moderator may be voiced by the orchestrator (non-autonomous)
///
/// There is no way to add or remove participants afterwards.
#[derive(Debug, Clone)]
pub struct Roster {
    participants: Vec<Participant>,
    moderator_index: usize,
    summarizer_index: usize,
}

impl Roster {
    pub fn new(participants: Vec<Participant>) -> Result<Self, ConfigError> {
        if participants.is_empty() {
            return Err(ConfigError::EmptyRoster);
        }

        let mut seen = HashSet::new();
        for participant in &participants {
            let id = participant.id().as_str();
            if id.trim().is_empty() {
                return Err(ConfigError::EmptyParticipantId);
            }
            if !seen.insert(id) {
                return Err(ConfigError::DuplicateParticipant(id.to_string()));
            }
            if !participant.is_autonomous() && !participant.is_moderator() {
                return Err(ConfigError::NotAutonomous(id.to_string()));
            }
        }

        let moderators = Self::indices_of(&participants, ParticipantRole::Moderator);
        let &[moderator_index] = moderators.as_slice() else {
            return Err(ConfigError::ModeratorCount(moderators.len()));
        };

        let summarizers = Self::indices_of(&participants, ParticipantRole::Summarizer);
        let &[summarizer_index] = summarizers.as_slice() else {
            return Err(ConfigError::SummarizerCount(summarizers.len()));
        };

        Ok(Self {
            participants,
            moderator_index,
            summarizer_index,
        })
    }

    fn indices_of(participants: &[Participant], role: ParticipantRole) -> Vec<usize> {
        participants
            .iter()
            .enumerate()
            .filter(|(_, p)| p.role() == role)
            .map(|(i, _)| i)
            .collect()
    }

    /// Number of participants (never zero)
    pub fn len(&self) -> usize {
        self.participants.len()
    }

    /// Always `false`; present for API symmetry with collections
    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }

    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    pub fn iter(&self) -> impl Iterator<Item = &Participant> {
        self.participants.iter()
    }

    /// Participant at `index`, wrapping around the roster
    pub fn at_wrapping(&self, index: usize) -> &Participant {
        &self.participants[index % self.participants.len()]
    }

    pub fn get(&self, id: &ParticipantId) -> Option<&Participant> {
        self.participants.iter().find(|p| p.id() == id)
    }

    /// Invitation-order position of a participant
    pub fn position(&self, id: &ParticipantId) -> Option<usize> {
        self.participants.iter().position(|p| p.id() == id)
    }

    pub fn moderator(&self) -> &Participant {
        &self.participants[self.moderator_index]
    }

    pub fn moderator_index(&self) -> usize {
        self.moderator_index
    }

    pub fn summarizer(&self) -> &Participant {
        &self.participants[self.summarizer_index]
    }

    /// Everyone except the moderator, in invitation order
    pub fn speakers(&self) -> impl Iterator<Item = &Participant> {
        self.participants.iter().filter(|p| !p.is_moderator())
    }

    /// The order in which the moderator calls on people: responders in
    /// invitation order, then the summarizer.
    pub fn agenda_order(&self) -> Vec<&Participant> {
        let mut order: Vec<&Participant> = self
            .participants
            .iter()
            .filter(|p| p.role() == ParticipantRole::Responder)
            .collect();
        order.push(self.summarizer());
        order
    }

    pub fn ids(&self) -> Vec<ParticipantId> {
        self.participants.iter().map(|p| p.id().clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_members() -> Vec<Participant> {
        vec![
            Participant::moderator("Moderator", "Run the meeting."),
            Participant::summarizer("Minute_Taker", "Summarize."),
            Participant::responder("Management_Agent", "Scope."),
            Participant::responder("Technical_Agent", "Architecture."),
            Participant::responder("Quality_Agent", "Testing."),
        ]
    }

    #[test]
    fn test_valid_roster() {
        let roster = Roster::new(default_members()).unwrap();
        assert_eq!(roster.len(), 5);
        assert_eq!(roster.moderator().id().as_str(), "Moderator");
        assert_eq!(roster.moderator_index(), 0);
        assert_eq!(roster.summarizer().id().as_str(), "Minute_Taker");
        assert_eq!(roster.position(&"Technical_Agent".into()), Some(3));
    }

    #[test]
    fn test_empty_roster_rejected() {
        assert_eq!(Roster::new(vec![]).unwrap_err(), ConfigError::EmptyRoster);
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let mut members = default_members();
        members.push(Participant::responder("Quality_Agent", "Again."));
        assert_eq!(
            Roster::new(members).unwrap_err(),
            ConfigError::DuplicateParticipant("Quality_Agent".to_string())
        );
    }

    #[test]
    fn test_blank_id_rejected() {
        let mut members = default_members();
        members.push(Participant::responder("  ", "Nobody."));
        assert_eq!(
            Roster::new(members).unwrap_err(),
            ConfigError::EmptyParticipantId
        );
    }

    #[test]
    fn test_only_moderator_may_be_scripted() {
        let mut members = default_members();
        members.push(Participant::responder("Security_Agent", "Threats.").with_autonomous(false));
        assert_eq!(
            Roster::new(members).unwrap_err(),
            ConfigError::NotAutonomous("Security_Agent".to_string())
        );
    }

    #[test]
    fn test_moderator_count_enforced() {
        let members = default_members().into_iter().skip(1).collect();
        assert_eq!(Roster::new(members).unwrap_err(), ConfigError::ModeratorCount(0));

        let mut members = default_members();
        members.push(Participant::moderator("Co_Moderator", "Also run it."));
        assert_eq!(Roster::new(members).unwrap_err(), ConfigError::ModeratorCount(2));
    }

    #[test]
    fn test_summarizer_count_enforced() {
        let members = default_members()
            .into_iter()
            .filter(|p| !p.is_summarizer())
            .collect();
        assert_eq!(
            Roster::new(members).unwrap_err(),
            ConfigError::SummarizerCount(0)
        );
    }

    #[test]
    fn test_agenda_order_puts_summarizer_last() {
        let roster = Roster::new(default_members()).unwrap();
        let order: Vec<_> = roster
            .agenda_order()
            .iter()
            .map(|p| p.id().as_str().to_string())
            .collect();
        assert_eq!(
            order,
            vec![
                "Management_Agent",
                "Technical_Agent",
                "Quality_Agent",
                "Minute_Taker"
            ]
        );
    }

    #[test]
    fn test_at_wrapping() {
        let roster = Roster::new(default_members()).unwrap();
        assert_eq!(roster.at_wrapping(5).id().as_str(), "Moderator");
        assert_eq!(roster.at_wrapping(7).id().as_str(), "Management_Agent");
    }
}
