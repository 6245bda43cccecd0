//! Meeting orchestration domain
//!
//! Turn-taking rules, termination detection and the run/result types the
//! orchestrator works with.

pub mod entities;
pub mod scheduler;
pub mod termination;
pub mod value_objects;
