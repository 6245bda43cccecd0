//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod produce_turn;
pub mod run_meeting;
