//! Scripted moderator lines

use crate::core::agenda::Agenda;
use crate::participant::entities::Participant;
use crate::participant::roster::Roster;
use crate::transcript::Transcript;

/// Templates for the lines a non-autonomous moderator speaks
pub struct MeetingTemplate;

impl MeetingTemplate {
    /// Opening turn: agenda plus the order in which people will be called on
    pub fn opening(agenda: &Agenda, roster: &Roster) -> String {
        let mut prompt = format!(
            "Let's start the meeting.\nAgenda: {}\nPlease discuss:\n",
            agenda
        );

        for (i, participant) in roster.agenda_order().iter().enumerate() {
            let topic = if participant.is_summarizer() {
                "Summarize key outcomes"
            } else {
                "Your perspective on the agenda"
            };
            prompt.push_str(&format!("{}. {} ({})\n", i + 1, topic, participant.id()));
        }

        prompt.push_str("The meeting ends when the closing marker is spoken or the round limit is reached.");
        prompt
    }

    /// Hand the floor to the next speaker
    pub fn hand_off(next: &Participant) -> String {
        if next.is_summarizer() {
            format!(
                "Thank you. {}, please summarize the key outcomes of this meeting.",
                next.id()
            )
        } else {
            format!("Thank you. {}, you have the floor.", next.id())
        }
    }

    /// The moderator's line for an in-meeting turn.
    ///
    /// Closes the meeting once the summarizer has had the last word, and
    /// otherwise hands the floor to whoever follows the last speaker in
    /// [`Roster::agenda_order`].
    pub fn moderator_turn(roster: &Roster, transcript: &Transcript, marker: &str) -> String {
        let order = roster.agenda_order();
        let previous = transcript.last_turn_not_by(roster.moderator().id());

        let next = match previous {
            Some(turn) if &turn.speaker_id == roster.summarizer().id() => {
                return Self::closing(marker);
            }
            Some(turn) => order
                .iter()
                .position(|p| p.id() == &turn.speaker_id)
                .map(|pos| order[(pos + 1) % order.len()])
                .unwrap_or(order[0]),
            None => order[0],
        };

        Self::hand_off(next)
    }

    /// Closing line; ends with the termination marker
    pub fn closing(marker: &str) -> String {
        format!(
            "Thank you all for your contributions. The meeting is adjourned. {}",
            marker
        )
    }
}
