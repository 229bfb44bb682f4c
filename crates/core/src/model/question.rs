use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ids::QuestionId;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("card text cannot be empty")]
    EmptyText,
}

/// Validated flashcard text (non-blank after trimming).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardText(String);

impl CardText {
    /// Create validated card text.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError::EmptyText` if the text is empty after trimming.
    pub fn parse(value: impl Into<String>) -> Result<Self, QuestionError> {
        let raw = value.into();
        if raw.trim().is_empty() {
            return Err(QuestionError::EmptyText);
        }
        Ok(Self(raw))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CardText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single prompt/answer pair.
///
/// The id is the sole cross-reference key; themes point at questions through
/// it and never embed their own copy once resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    id: QuestionId,
    prompt: CardText,
    answer: CardText,
}

impl Question {
    #[must_use]
    pub fn new(id: QuestionId, prompt: CardText, answer: CardText) -> Self {
        Self { id, prompt, answer }
    }

    #[must_use]
    pub fn id(&self) -> &QuestionId {
        &self.id
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        self.prompt.as_str()
    }

    #[must_use]
    pub fn answer(&self) -> &str {
        self.answer.as_str()
    }
}
