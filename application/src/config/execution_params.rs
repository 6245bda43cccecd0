//! Execution parameters for the meeting loop.
//!
//! [`ExecutionParams`] groups the static parameters that control the meeting
//! loop in [`RunMeetingUseCase`](crate::use_cases::run_meeting::RunMeetingUseCase).
//! They are built once at startup and never mutated by the loop.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Limits sent with every generation request
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GenerationLimits {
    /// Upper bound on tokens generated for a single turn
    pub max_output_tokens: u32,
    /// Sampling temperature
    pub temperature: f32,
}

impl Default for GenerationLimits {
    fn default() -> Self {
        Self {
            max_output_tokens: 1024,
            temperature: 0.0,
        }
    }
}

/// Meeting loop control parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutionParams {
    /// Limits for each generation request
    pub limits: GenerationLimits,
    /// Extra attempts after a failed generation before the meeting is aborted.
    pub retry_attempts: u32,
    /// Pause between attempts
    pub retry_backoff: Duration,
}

impl Default for ExecutionParams {
    fn default() -> Self {
        Self {
            limits: GenerationLimits::default(),
            retry_attempts: 0,
            retry_backoff: Duration::from_secs(2),
        }
    }
}

impl ExecutionParams {
    // ==================== Builder Methods ====================

    pub fn with_limits(mut self, limits: GenerationLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn with_retry_attempts(mut self, attempts: u32) -> Self {
        self.retry_attempts = attempts;
        self
    }

    pub fn with_retry_backoff(mut self, backoff: Duration) -> Self {
        self.retry_backoff = backoff;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_meeting_script() {
        let params = ExecutionParams::default();
        assert_eq!(params.limits.max_output_tokens, 1024);
        assert_eq!(params.limits.temperature, 0.0);
        assert_eq!(params.retry_attempts, 0);
    }

    #[test]
    fn test_builders() {
        let params = ExecutionParams::default()
            .with_limits(GenerationLimits {
                max_output_tokens: 256,
                temperature: 0.7,
            })
            .with_retry_attempts(2)
            .with_retry_backoff(Duration::from_millis(10));
        assert_eq!(params.limits.max_output_tokens, 256);
        assert_eq!(params.retry_attempts, 2);
        assert_eq!(params.retry_backoff, Duration::from_millis(10));
    }
}
