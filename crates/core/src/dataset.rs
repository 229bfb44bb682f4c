//! Lenient wire representation of a question dataset.
//!
//! Two external shapes are accepted: a flat question pool with themes
//! referencing ids, and themes embedding full question records. Both
//! normalize into the same pool-plus-references form. Every field is
//! optional so structurally incomplete data still parses; the integrity
//! checker reports the gaps instead of the parser.

use serde::{Deserialize, Serialize};

use crate::model::{CardText, Question, QuestionId, ThemeId};

/// Top-level dataset document as found on disk.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub questions: Option<Vec<QuestionRecord>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub themes: Option<Vec<ThemeRecord>>,
}

/// Raw question record, fields as present in the source.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuestionRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<QuestionId>,

    #[serde(default, rename = "question", skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
}

impl QuestionRecord {
    /// Converts into a domain question, or `None` when the record lacks an
    /// id or usable prompt/answer text.
    #[must_use]
    pub fn to_question(&self) -> Option<Question> {
        let id = self.id.clone()?;
        let prompt = CardText::parse(self.prompt.clone()?).ok()?;
        let answer = CardText::parse(self.answer.clone()?).ok()?;
        Some(Question::new(id, prompt, answer))
    }
}

/// Raw theme record.
///
/// `question_ids` carries the flat shape, `questions` the embedded shape.
/// When both are present the reference list wins and the embedded records
/// are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ThemeRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ThemeId>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question_ids: Option<Vec<QuestionId>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub questions: Option<Vec<QuestionRecord>>,
}

/// Canonical pool-plus-references form shared by the catalog and the
/// integrity checker.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedDataset {
    pub questions: Vec<QuestionRecord>,
    pub themes: Vec<NormalizedTheme>,
    /// A question source existed: a top-level pool, or embedded records.
    pub has_questions: bool,
    /// The themes collection was present at all.
    pub has_themes: bool,
}

/// Theme reduced to the id-referencing form.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedTheme {
    pub id: Option<ThemeId>,
    pub name: Option<String>,
    pub question_ids: Option<Vec<QuestionId>>,
}

impl Document {
    /// Reduces both wire shapes to one canonical form.
    ///
    /// Embedded question records are appended to the pool in encounter order
    /// and their ids become the theme's reference list; records without an
    /// id join the pool but cannot be referenced. Shapes may be mixed per
    /// theme within one document.
    #[must_use]
    pub fn normalize(&self) -> NormalizedDataset {
        let mut questions = self.questions.clone().unwrap_or_default();
        let mut themes = Vec::new();
        let mut embedded_any = false;

        for record in self.themes.iter().flatten() {
            let question_ids = match (&record.question_ids, &record.questions) {
                (Some(ids), _) => Some(ids.clone()),
                (None, Some(embedded)) => {
                    embedded_any = true;
                    let ids = embedded.iter().filter_map(|q| q.id.clone()).collect();
                    questions.extend(embedded.iter().cloned());
                    Some(ids)
                }
                (None, None) => None,
            };
            themes.push(NormalizedTheme {
                id: record.id.clone(),
                name: record.name.clone(),
                question_ids,
            });
        }

        NormalizedDataset {
            has_questions: self.questions.is_some() || embedded_any,
            has_themes: self.themes.is_some(),
            questions,
            themes,
        }
    }
}
