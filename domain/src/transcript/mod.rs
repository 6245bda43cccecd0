//! Meeting transcript.
//!
//! - [`entities::Turn`]: one attributed utterance
//! - [`entities::Transcript`]: the append-only record of a meeting

pub mod entities;

pub use entities::{Transcript, Turn};
