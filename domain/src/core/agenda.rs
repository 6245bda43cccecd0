//! Agenda value object

use crate::core::error::InputError;
use serde::{Deserialize, Serialize};

/// The free-text agenda a meeting is held about (Value Object)
///
/// Always non-blank; surrounding whitespace is stripped on construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Agenda {
    content: String,
}

impl Agenda {
    /// Validate raw user input into an agenda
    pub fn parse(content: impl AsRef<str>) -> Result<Self, InputError> {
        let trimmed = content.as_ref().trim();
        if trimmed.is_empty() {
            return Err(InputError::EmptyAgenda);
        }
        Ok(Self {
            content: trimmed.to_string(),
        })
    }

    /// Get the agenda text
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Consume and return the inner content
    pub fn into_content(self) -> String {
        self.content
    }
}

impl std::fmt::Display for Agenda {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}

impl TryFrom<String> for Agenda {
    type Error = InputError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Agenda::parse(value)
    }
}

impl From<Agenda> for String {
    fn from(agenda: Agenda) -> Self {
        agenda.content
    }
}
