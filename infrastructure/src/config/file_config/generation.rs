//! Text-generation backend configuration from TOML (`[generation]` section)

use meeting_application::GenerationLimits;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Raw generation configuration from TOML
///
/// ```toml
/// [generation]
/// model = "gpt-4.1-nano"
/// base_url = "http://localhost:11434/v1"
/// api_key_env = "OPENAI_API_KEY"
/// max_output_tokens = 1024
/// temperature = 0.0
/// timeout_seconds = 60
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGenerationConfig {
    pub model: String,
    /// Endpoint root of an OpenAI-compatible server
    pub base_url: String,
    /// Name of the environment variable holding the API key
    pub api_key_env: String,
    pub max_output_tokens: u32,
    pub temperature: f32,
    pub timeout_seconds: u64,
}

impl Default for FileGenerationConfig {
    fn default() -> Self {
        let limits = GenerationLimits::default();
        Self {
            model: "gpt-4.1-nano".to_string(),
            base_url: "https://api.openai.com".to_string(),
            api_key_env: "OPENAI_API_KEY".to_string(),
            max_output_tokens: limits.max_output_tokens,
            temperature: limits.temperature,
            timeout_seconds: 60,
        }
    }
}

impl FileGenerationConfig {
    pub fn limits(&self) -> GenerationLimits {
        GenerationLimits {
            max_output_tokens: self.max_output_tokens,
            temperature: self.temperature,
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}
