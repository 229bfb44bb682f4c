use serde::Serialize;

use rehearse_core::ThemeId;

/// What the presentation layer should render for a session right now.
///
/// Borrowed from the navigator; take the snapshot, draw it, drop it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionView<'a> {
    /// No theme has been selected yet.
    Idle,

    /// The active theme has no questions to show.
    Empty { theme: &'a str },

    /// A question card, with the answer once revealed.
    Card {
        theme: &'a str,
        prompt: &'a str,
        answer: Option<&'a str>,
        /// One-based position for the "question X of Y" counter.
        position: usize,
        total: usize,
    },
}

/// One row of the theme selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThemeOverview {
    pub id: ThemeId,
    pub name: String,
    pub question_count: usize,
}
