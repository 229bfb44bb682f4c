use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a Question.
///
/// Datasets key questions either by number or by string. Both forms are kept
/// verbatim so every reference round-trips without loss; the two forms never
/// compare equal.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QuestionId {
    Num(i64),
    Text(String),
}

impl QuestionId {
    /// Creates a numeric `QuestionId`
    #[must_use]
    pub fn num(id: i64) -> Self {
        Self::Num(id)
    }

    /// Creates a string `QuestionId`
    #[must_use]
    pub fn text(id: impl Into<String>) -> Self {
        Self::Text(id.into())
    }
}

/// Unique identifier for a Theme
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ThemeId {
    Num(i64),
    Text(String),
}

impl ThemeId {
    /// Creates a numeric `ThemeId`
    #[must_use]
    pub fn num(id: i64) -> Self {
        Self::Num(id)
    }

    /// Creates a string `ThemeId`
    #[must_use]
    pub fn text(id: impl Into<String>) -> Self {
        Self::Text(id.into())
    }
}

impl fmt::Debug for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Num(n) => write!(f, "QuestionId({n})"),
            Self::Text(s) => write!(f, "QuestionId({s:?})"),
        }
    }
}

impl fmt::Debug for ThemeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Num(n) => write!(f, "ThemeId({n})"),
            Self::Text(s) => write!(f, "ThemeId({s:?})"),
        }
    }
}

// ─── Display Implementations ───────────────────────────────────────────────────

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Num(n) => write!(f, "{n}"),
            Self::Text(s) => write!(f, "{s}"),
        }
    }
}

impl fmt::Display for ThemeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Num(n) => write!(f, "{n}"),
            Self::Text(s) => write!(f, "{s}"),
        }
    }
}

impl From<i64> for QuestionId {
    fn from(id: i64) -> Self {
        Self::Num(id)
    }
}

impl From<&str> for QuestionId {
    fn from(id: &str) -> Self {
        Self::Text(id.to_owned())
    }
}

impl From<i64> for ThemeId {
    fn from(id: i64) -> Self {
        Self::Num(id)
    }
}

impl From<&str> for ThemeId {
    fn from(id: &str) -> Self {
        Self::Text(id.to_owned())
    }
}
