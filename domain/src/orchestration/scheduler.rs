//! Turn scheduling
//!
//! Decides who speaks in each round. The opening turn is round 0 and always
//! belongs to the Moderator; produced turns are rounds `1..=max_rounds`.
//!
//! | Policy | Next speaker |
//! |--------|--------------|
//! | [`RoundRobin`] | Roster order, starting after the Moderator, wrapping around |
//! | [`ModeratorDirected`] | Moderator after everyone else; the Moderator names the next speaker |

use crate::participant::entities::Participant;
use crate::participant::roster::Roster;
use crate::transcript::Transcript;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Picks the next speaker.
///
/// Must be deterministic and must only return members of `roster`.
pub trait TurnScheduler: Send + Sync {
    fn next_speaker<'r>(
        &self,
        round: usize,
        roster: &'r Roster,
        transcript: &Transcript,
    ) -> &'r Participant;
}

/// Fixed cycle through the roster in invitation order
#[derive(Debug, Clone, Copy, Default)]
pub struct RoundRobin;

impl TurnScheduler for RoundRobin {
    fn next_speaker<'r>(
        &self,
        round: usize,
        roster: &'r Roster,
        _transcript: &Transcript,
    ) -> &'r Participant {
        roster.at_wrapping(roster.moderator_index() + round)
    }
}

/// The Moderator alternates with whoever it calls on
///
/// After any non-moderator turn the Moderator takes the floor. After a
/// Moderator turn, the participant whose id appears earliest in that turn
/// speaks. An id only counts as named when it stands as a whole word, so
/// `Tech` is not named by `Tech_Lead`. If nobody is named, speakers are
/// cycled in invitation order.
#[derive(Debug, Clone, Copy, Default)]
pub struct ModeratorDirected;

impl ModeratorDirected {
    fn named_in<'r>(roster: &'r Roster, content: &str) -> Option<&'r Participant> {
        roster
            .speakers()
            .filter_map(|p| {
                Self::first_mention(content, p.id().as_str()).map(|pos| (pos, p))
            })
            .min_by_key(|(pos, _)| *pos)
            .map(|(_, p)| p)
    }

    /// Byte offset of the first whole-word occurrence of `id` in `content`
    fn first_mention(content: &str, id: &str) -> Option<usize> {
        let is_word = |c: char| c.is_alphanumeric() || c == '_';
        content.match_indices(id).map(|(pos, _)| pos).find(|&pos| {
            let before = content[..pos].chars().next_back();
            let after = content[pos + id.len()..].chars().next();
            !before.is_some_and(is_word) && !after.is_some_and(is_word)
        })
    }

    fn fallback<'r>(roster: &'r Roster, round: usize) -> &'r Participant {
        let speakers: Vec<&Participant> = roster.speakers().collect();
        // Speakers hold the odd rounds when the Moderator is never silent.
        speakers[(round.saturating_sub(1) / 2) % speakers.len()]
    }
}

impl TurnScheduler for ModeratorDirected {
    fn next_speaker<'r>(
        &self,
        round: usize,
        roster: &'r Roster,
        transcript: &Transcript,
    ) -> &'r Participant {
        let moderator = roster.moderator();
        match transcript.last() {
            Some(turn) if &turn.speaker_id == moderator.id() => {
                Self::named_in(roster, &turn.content)
                    .unwrap_or_else(|| Self::fallback(roster, round))
            }
            _ => moderator,
        }
    }
}

/// Speaker selection policy, configured as data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpeakerSelection {
    #[default]
    RoundRobin,
    ModeratorDirected,
}

impl SpeakerSelection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SpeakerSelection::RoundRobin => "round_robin",
            SpeakerSelection::ModeratorDirected => "moderator_directed",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            SpeakerSelection::RoundRobin => "Round robin: everyone speaks in invitation order",
            SpeakerSelection::ModeratorDirected => {
                "Moderator directed: the moderator calls on each speaker"
            }
        }
    }
}

impl TurnScheduler for SpeakerSelection {
    fn next_speaker<'r>(
        &self,
        round: usize,
        roster: &'r Roster,
        transcript: &Transcript,
    ) -> &'r Participant {
        match self {
            SpeakerSelection::RoundRobin => RoundRobin.next_speaker(round, roster, transcript),
            SpeakerSelection::ModeratorDirected => {
                ModeratorDirected.next_speaker(round, roster, transcript)
            }
        }
    }
}

impl fmt::Display for SpeakerSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for SpeakerSelection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "round_robin" | "rr" => Ok(SpeakerSelection::RoundRobin),
            "moderator_directed" | "directed" => Ok(SpeakerSelection::ModeratorDirected),
            _ => Err(format!("Invalid SpeakerSelection: {}", s)),
        }
    }
}
