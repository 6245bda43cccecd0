//! Application-level configuration.
//!
//! - [`ExecutionParams`] : meeting loop control (retries, backoff, generation limits)
//! - [`GenerationLimits`] : per-request limits passed through the text-generation port

pub mod execution_params;

pub use execution_params::{ExecutionParams, GenerationLimits};
