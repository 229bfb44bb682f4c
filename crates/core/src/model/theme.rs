use crate::model::ids::ThemeId;
use crate::model::question::Question;

/// A named grouping of questions presented as one selectable study unit.
///
/// `questions` holds the resolved records in reference order. Identifiers
/// that did not resolve against the question store are simply absent here,
/// so a theme's resolved length may be shorter than its reference list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    id: ThemeId,
    name: String,
    questions: Vec<Question>,
}

impl Theme {
    #[must_use]
    pub fn new(id: ThemeId, name: impl Into<String>, questions: Vec<Question>) -> Self {
        Self {
            id,
            name: name.into(),
            questions,
        }
    }

    #[must_use]
    pub fn id(&self) -> &ThemeId {
        &self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}
