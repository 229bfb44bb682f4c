//! Exhaustive integrity pass over a raw dataset document.
//!
//! The checker never stops at the first defect: one run produces the full
//! list of hard errors and warnings plus descriptive statistics, so a data
//! author gets a complete fix list per run. Resolution elsewhere degrades
//! gracefully on the same defects; this pass is what should gate a dataset
//! from being published.

use std::collections::{HashMap, HashSet};

use serde::Serialize;
use thiserror::Error;

use crate::dataset::{Document, NormalizedDataset};
use crate::model::{QuestionId, ThemeId};

/// How many leading characters of a question text identify it in messages.
const PREVIEW_LEN: usize = 50;

//
// ─── DEFECTS ───────────────────────────────────────────────────────────────────
//

/// Hard defects. Any of these should block a dataset from deployment.
#[derive(Debug, Error, Clone, PartialEq, Serialize)]
#[non_exhaustive]
pub enum IntegrityError {
    #[error("dataset is missing the '{key}' collection")]
    MissingRequiredKey { key: &'static str },

    #[error("question {id} has no usable '{field}' text")]
    QuestionMissingField { id: QuestionId, field: &'static str },

    #[error("question without an id: {preview}")]
    QuestionMissingId { preview: String },

    #[error("duplicate question id: {id}")]
    DuplicateQuestionId { id: QuestionId },

    #[error("theme without an id: {name}")]
    ThemeMissingId { name: String },

    #[error("duplicate theme id: {id}")]
    DuplicateThemeId { id: ThemeId },

    #[error("theme {id} has no name")]
    ThemeMissingName { id: ThemeId },

    #[error("theme {id} has no question list")]
    ThemeMissingQuestionIds { id: ThemeId },

    #[error("theme {theme}: question id {question} not found")]
    BrokenQuestionReference { theme: ThemeId, question: QuestionId },
}

/// Non-fatal smells. These never affect validity.
#[derive(Debug, Error, Clone, PartialEq, Serialize)]
#[non_exhaustive]
pub enum IntegrityWarning {
    #[error("question {id} is not referenced by any theme")]
    OrphanQuestion { id: QuestionId },

    #[error("theme name '{name}' is used more than once")]
    DuplicateThemeName { name: String },
}

//
// ─── STATISTICS ────────────────────────────────────────────────────────────────
//

/// Descriptive statistics computed alongside the defect scan.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DatasetStats {
    /// Unique question ids in the pool.
    pub question_count: usize,
    /// Theme records, malformed ones included.
    pub theme_count: usize,
    /// Sum of all reference-list lengths across themes.
    pub reference_count: usize,
    /// References beyond one per unique question. Negative when questions
    /// outnumber references.
    pub shared_count: i64,
    /// Reference-list length per theme, in document order.
    pub per_theme: Vec<ThemeQuestionCount>,
    /// Every referenced question ranked by reference count, descending,
    /// ties kept in first-reference order.
    pub most_referenced: Vec<ReferenceCount>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThemeQuestionCount {
    pub name: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReferenceCount {
    pub id: QuestionId,
    pub count: usize,
}

/// Outcome of one integrity pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct IntegrityReport {
    pub errors: Vec<IntegrityError>,
    pub warnings: Vec<IntegrityWarning>,
    pub stats: DatasetStats,
}

impl IntegrityReport {
    /// A dataset is valid exactly when no hard error was found. Warnings
    /// never affect this.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

//
// ─── CHECKER ───────────────────────────────────────────────────────────────────
//

/// Runs the full integrity pass over a document.
#[must_use]
pub fn check_document(document: &Document) -> IntegrityReport {
    let data = document.normalize();
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    if !data.has_questions {
        errors.push(IntegrityError::MissingRequiredKey { key: "questions" });
    }
    if !data.has_themes {
        errors.push(IntegrityError::MissingRequiredKey { key: "themes" });
    }

    // Question pass: ids, duplicates, required text fields.
    let mut known_ids: HashSet<QuestionId> = HashSet::new();
    let mut id_order: Vec<QuestionId> = Vec::new();
    for record in &data.questions {
        let Some(id) = &record.id else {
            errors.push(IntegrityError::QuestionMissingId {
                preview: preview(record.prompt.as_deref()),
            });
            continue;
        };
        if known_ids.insert(id.clone()) {
            id_order.push(id.clone());
        } else {
            errors.push(IntegrityError::DuplicateQuestionId { id: id.clone() });
        }
        if is_blank(record.prompt.as_deref()) {
            errors.push(IntegrityError::QuestionMissingField {
                id: id.clone(),
                field: "question",
            });
        }
        if is_blank(record.answer.as_deref()) {
            errors.push(IntegrityError::QuestionMissingField {
                id: id.clone(),
                field: "answer",
            });
        }
    }

    // Theme pass: ids, names, reference resolution.
    let mut theme_ids: HashSet<ThemeId> = HashSet::new();
    let mut theme_names: HashSet<String> = HashSet::new();
    let mut references: Vec<QuestionId> = Vec::new();
    for record in &data.themes {
        let Some(id) = &record.id else {
            errors.push(IntegrityError::ThemeMissingId {
                name: record.name.clone().unwrap_or_else(|| "unknown".to_owned()),
            });
            continue;
        };
        if !theme_ids.insert(id.clone()) {
            errors.push(IntegrityError::DuplicateThemeId { id: id.clone() });
        }
        match &record.name {
            None => errors.push(IntegrityError::ThemeMissingName { id: id.clone() }),
            Some(name) => {
                if !theme_names.insert(name.clone()) {
                    warnings.push(IntegrityWarning::DuplicateThemeName { name: name.clone() });
                }
            }
        }
        let Some(question_ids) = &record.question_ids else {
            errors.push(IntegrityError::ThemeMissingQuestionIds { id: id.clone() });
            continue;
        };
        for qid in question_ids {
            references.push(qid.clone());
            if !known_ids.contains(qid) {
                errors.push(IntegrityError::BrokenQuestionReference {
                    theme: id.clone(),
                    question: qid.clone(),
                });
            }
        }
    }

    // Orphans: questions no theme references.
    let referenced: HashSet<&QuestionId> = references.iter().collect();
    let mut orphans: Vec<QuestionId> = id_order
        .iter()
        .filter(|id| !referenced.contains(id))
        .cloned()
        .collect();
    orphans.sort();
    warnings.extend(
        orphans
            .into_iter()
            .map(|id| IntegrityWarning::OrphanQuestion { id }),
    );

    let stats = build_stats(&data, known_ids.len(), &references);

    IntegrityReport {
        errors,
        warnings,
        stats,
    }
}

fn build_stats(
    data: &NormalizedDataset,
    question_count: usize,
    references: &[QuestionId],
) -> DatasetStats {
    let per_theme = data
        .themes
        .iter()
        .map(|theme| ThemeQuestionCount {
            name: theme.name.clone().unwrap_or_default(),
            count: theme.question_ids.as_ref().map_or(0, Vec::len),
        })
        .collect();

    let mut counts: HashMap<&QuestionId, usize> = HashMap::new();
    let mut first_seen: Vec<&QuestionId> = Vec::new();
    for id in references {
        let entry = counts.entry(id).or_insert(0);
        if *entry == 0 {
            first_seen.push(id);
        }
        *entry += 1;
    }
    let mut most_referenced: Vec<ReferenceCount> = first_seen
        .into_iter()
        .map(|id| ReferenceCount {
            id: id.clone(),
            count: counts[id],
        })
        .collect();
    // Stable sort keeps first-reference order among equal counts.
    most_referenced.sort_by(|a, b| b.count.cmp(&a.count));

    DatasetStats {
        question_count,
        theme_count: data.themes.len(),
        reference_count: references.len(),
        shared_count: i64::try_from(references.len()).unwrap_or(i64::MAX)
            - i64::try_from(question_count).unwrap_or(i64::MAX),
        per_theme,
        most_referenced,
    }
}

fn is_blank(text: Option<&str>) -> bool {
    text.is_none_or(|t| t.trim().is_empty())
}

fn preview(text: Option<&str>) -> String {
    let text = text.unwrap_or("unknown");
    let mut shortened: String = text.chars().take(PREVIEW_LEN).collect();
    if text.chars().count() > PREVIEW_LEN {
        shortened.push_str("...");
    }
    shortened
}

#[cfg(test)]
mod tests {
    use super::*;

    fn document(json: &str) -> Document {
        serde_json::from_str(json).unwrap()
    }

    const SAMPLE: &str = r#"{
        "questions": [
            {"id": 1, "question": "Q1", "answer": "A1"},
            {"id": 2, "question": "Q2", "answer": "A2"},
            {"id": 3, "question": "Q3", "answer": "A3"}
        ],
        "themes": [
            {"id": 1, "name": "T1", "question_ids": [1, 2, 4]}
        ]
    }"#;

    #[test]
    fn broken_reference_is_a_hard_error() {
        let report = check_document(&document(SAMPLE));

        assert!(!report.is_valid());
        assert_eq!(
            report.errors,
            vec![IntegrityError::BrokenQuestionReference {
                theme: ThemeId::num(1),
                question: QuestionId::num(4),
            }]
        );
    }

    #[test]
    fn unreferenced_question_is_an_orphan_warning() {
        let report = check_document(&document(
            r#"{
                "questions": [
                    {"id": 1, "question": "Q1", "answer": "A1"},
                    {"id": 2, "question": "Q2", "answer": "A2"},
                    {"id": 3, "question": "Q3", "answer": "A3"}
                ],
                "themes": [{"id": 2, "name": "T2", "question_ids": [1]}]
            }"#,
        ));

        assert!(report.is_valid());
        assert_eq!(
            report.warnings,
            vec![
                IntegrityWarning::OrphanQuestion {
                    id: QuestionId::num(2)
                },
                IntegrityWarning::OrphanQuestion {
                    id: QuestionId::num(3)
                },
            ]
        );
    }

    #[test]
    fn warnings_never_affect_validity() {
        let report = check_document(&document(
            r#"{
                "questions": [
                    {"id": 1, "question": "Q1", "answer": "A1"},
                    {"id": 2, "question": "Q2", "answer": "A2"}
                ],
                "themes": [
                    {"id": 1, "name": "Same", "question_ids": [1]},
                    {"id": 2, "name": "Same", "question_ids": [1]}
                ]
            }"#,
        ));

        assert!(!report.warnings.is_empty());
        assert!(report.is_valid());
    }

    #[test]
    fn every_defect_is_collected_in_one_pass() {
        // Duplicate question id AND broken reference in the same dataset:
        // both must appear, not just the first one encountered.
        let report = check_document(&document(
            r#"{
                "questions": [
                    {"id": 1, "question": "Q1", "answer": "A1"},
                    {"id": 1, "question": "Q1 again", "answer": "A1 again"}
                ],
                "themes": [{"id": 1, "name": "T", "question_ids": [1, 9]}]
            }"#,
        ));

        assert!(report.errors.contains(&IntegrityError::DuplicateQuestionId {
            id: QuestionId::num(1)
        }));
        assert!(
            report
                .errors
                .contains(&IntegrityError::BrokenQuestionReference {
                    theme: ThemeId::num(1),
                    question: QuestionId::num(9),
                })
        );
    }

    #[test]
    fn missing_collections_are_flagged() {
        let report = check_document(&document("{}"));

        assert_eq!(
            report.errors,
            vec![
                IntegrityError::MissingRequiredKey { key: "questions" },
                IntegrityError::MissingRequiredKey { key: "themes" },
            ]
        );
    }

    #[test]
    fn embedded_questions_satisfy_the_questions_requirement() {
        let report = check_document(&document(
            r#"{"themes": [{"id": 1, "name": "T", "questions": [
                {"id": 1, "question": "Q", "answer": "A"}
            ]}]}"#,
        ));

        assert!(report.is_valid(), "errors: {:?}", report.errors);
    }

    #[test]
    fn malformed_question_and_theme_records_are_flagged() {
        let report = check_document(&document(
            r#"{
                "questions": [
                    {"question": "who am i", "answer": "nobody"},
                    {"id": 2, "answer": "A2"},
                    {"id": 3, "question": "   ", "answer": "A3"}
                ],
                "themes": [
                    {"name": "nameless"},
                    {"id": 1, "question_ids": [2]},
                    {"id": 2, "name": "T2"}
                ]
            }"#,
        ));

        assert!(report.errors.contains(&IntegrityError::QuestionMissingId {
            preview: "who am i".to_owned()
        }));
        assert!(
            report
                .errors
                .contains(&IntegrityError::QuestionMissingField {
                    id: QuestionId::num(2),
                    field: "question",
                })
        );
        assert!(
            report
                .errors
                .contains(&IntegrityError::QuestionMissingField {
                    id: QuestionId::num(3),
                    field: "question",
                })
        );
        assert!(report.errors.contains(&IntegrityError::ThemeMissingId {
            name: "nameless".to_owned()
        }));
        assert!(report.errors.contains(&IntegrityError::ThemeMissingName {
            id: ThemeId::num(1)
        }));
        assert!(
            report
                .errors
                .contains(&IntegrityError::ThemeMissingQuestionIds {
                    id: ThemeId::num(2)
                })
        );
    }

    #[test]
    fn duplicate_theme_id_is_a_hard_error() {
        let report = check_document(&document(
            r#"{
                "questions": [{"id": 1, "question": "Q", "answer": "A"}],
                "themes": [
                    {"id": 1, "name": "A", "question_ids": [1]},
                    {"id": 1, "name": "B", "question_ids": [1]}
                ]
            }"#,
        ));

        assert!(report.errors.contains(&IntegrityError::DuplicateThemeId {
            id: ThemeId::num(1)
        }));
    }

    #[test]
    fn stats_count_references_and_sharing() {
        let report = check_document(&document(
            r#"{
                "questions": [
                    {"id": 1, "question": "Q1", "answer": "A1"},
                    {"id": 2, "question": "Q2", "answer": "A2"}
                ],
                "themes": [
                    {"id": 1, "name": "T1", "question_ids": [1, 2]},
                    {"id": 2, "name": "T2", "question_ids": [1]}
                ]
            }"#,
        ));

        let stats = &report.stats;
        assert_eq!(stats.question_count, 2);
        assert_eq!(stats.theme_count, 2);
        assert_eq!(stats.reference_count, 3);
        assert_eq!(stats.shared_count, 1);
        assert_eq!(stats.per_theme.len(), 2);
        assert_eq!(stats.per_theme[0].count, 2);
        assert_eq!(stats.per_theme[1].count, 1);
    }

    #[test]
    fn most_referenced_ranks_descending_with_stable_ties() {
        let report = check_document(&document(
            r#"{
                "questions": [
                    {"id": 1, "question": "Q1", "answer": "A1"},
                    {"id": 2, "question": "Q2", "answer": "A2"},
                    {"id": 3, "question": "Q3", "answer": "A3"}
                ],
                "themes": [
                    {"id": 1, "name": "T1", "question_ids": [1, 2, 3]},
                    {"id": 2, "name": "T2", "question_ids": [2, 3]},
                    {"id": 3, "name": "T3", "question_ids": [3]}
                ]
            }"#,
        ));

        let ranked: Vec<(QuestionId, usize)> = report
            .stats
            .most_referenced
            .iter()
            .map(|r| (r.id.clone(), r.count))
            .collect();
        assert_eq!(
            ranked,
            vec![
                (QuestionId::num(3), 3),
                (QuestionId::num(2), 2),
                (QuestionId::num(1), 1),
            ]
        );
    }

    #[test]
    fn checking_twice_yields_the_same_report() {
        let doc = document(SAMPLE);
        assert_eq!(check_document(&doc), check_document(&doc));
    }
}
