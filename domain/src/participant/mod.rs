//! Meeting participants.
//!
//! - [`entities::Participant`]: a named persona with a directive and a role
//! - [`roster::Roster`]: the validated, ordered set of participants for one meeting

pub mod entities;
pub mod roster;
