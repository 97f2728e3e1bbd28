//! User input value object

use super::error::DomainError;
use serde::{Deserialize, Serialize};

/// Text submitted for sentiment analysis (Value Object)
///
/// Always holds trimmed, non-empty text. Lives for the span of one request.
/// Deserialization goes through [`UserInput::try_new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserInput {
    text: String,
}

impl UserInput {
    /// Create a new input from raw caller text.
    ///
    /// Surrounding whitespace is removed; an empty result is rejected with
    /// [`DomainError::EmptyInput`].
    pub fn try_new(raw: impl AsRef<str>) -> Result<Self, DomainError> {
        let trimmed = raw.as_ref().trim_matches(is_blank);
        if trimmed.is_empty() {
            return Err(DomainError::EmptyInput);
        }
        Ok(Self {
            text: trimmed.to_string(),
        })
    }

    /// Get the trimmed text
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Unicode whitespace plus the ASCII file/group/record/unit separators,
/// which callers' tooling commonly treats as blank too.
fn is_blank(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

impl std::fmt::Display for UserInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl TryFrom<String> for UserInput {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        UserInput::try_new(s)
    }
}

impl From<UserInput> for String {
    fn from(input: UserInput) -> Self {
        input.text
    }
}
