//! Read-only question store and theme index built from a dataset document.

use std::collections::HashMap;

use crate::dataset::Document;
use crate::model::{Question, QuestionId, Theme, ThemeId};

/// The resolved question store plus theme index.
///
/// Construction is deliberately lenient: malformed records are skipped,
/// a repeated question id keeps its first slot but takes the later record's
/// content, and theme references without a matching question are dropped.
/// The integrity checker reports all of those conditions separately; the
/// catalog's contract is that the display layer always gets a usable
/// structure, even from partially corrupt data.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    questions: Vec<Question>,
    by_id: HashMap<QuestionId, usize>,
    themes: Vec<Theme>,
}

impl Catalog {
    /// Resolves a document into the canonical in-memory form.
    ///
    /// Deterministic and order-preserving: the store keeps first-seen id
    /// order, each theme's questions follow its reference order.
    #[must_use]
    pub fn from_document(document: &Document) -> Self {
        let data = document.normalize();

        let mut questions: Vec<Question> = Vec::new();
        let mut by_id: HashMap<QuestionId, usize> = HashMap::new();
        for record in &data.questions {
            let Some(question) = record.to_question() else {
                continue;
            };
            match by_id.get(question.id()) {
                Some(&slot) => questions[slot] = question,
                None => {
                    by_id.insert(question.id().clone(), questions.len());
                    questions.push(question);
                }
            }
        }

        let mut themes = Vec::new();
        for record in &data.themes {
            let (Some(id), Some(name)) = (&record.id, &record.name) else {
                continue;
            };
            let resolved = record
                .question_ids
                .iter()
                .flatten()
                .filter_map(|qid| by_id.get(qid).map(|&slot| questions[slot].clone()))
                .collect();
            themes.push(Theme::new(id.clone(), name.clone(), resolved));
        }

        Self {
            questions,
            by_id,
            themes,
        }
    }

    /// Themes in document order, each with its resolved question list.
    #[must_use]
    pub fn themes(&self) -> &[Theme] {
        &self.themes
    }

    /// Looks up a theme by id. First match wins when ids repeat.
    #[must_use]
    pub fn theme(&self, id: &ThemeId) -> Option<&Theme> {
        self.themes.iter().find(|theme| theme.id() == id)
    }

    #[must_use]
    pub fn question(&self, id: &QuestionId) -> Option<&Question> {
        self.by_id.get(id).map(|&slot| &self.questions[slot])
    }

    /// Unique questions in first-seen order.
    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn theme_count(&self) -> usize {
        self.themes.len()
    }
}
