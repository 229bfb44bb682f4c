//! Keyword-based topical classification and filtering.
//!
//! Categories match by case-insensitive substring against a question's
//! combined prompt and answer text. A keyword may belong to more than one
//! category, so a single question can match several categories at once;
//! that overlap is intentional, not a defect to normalize away.

use crate::model::{Question, Theme};

/// A topical category and the keywords that signal it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    label: String,
    keywords: Vec<String>,
}

impl Category {
    /// Creates a category. Keywords are stored lowercased.
    #[must_use]
    pub fn new(
        label: impl Into<String>,
        keywords: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            label: label.into(),
            keywords: keywords
                .into_iter()
                .map(|keyword| keyword.into().to_lowercase())
                .collect(),
        }
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// True when any keyword occurs in the haystack. The haystack must
    /// already be lowercased.
    fn matches(&self, haystack: &str) -> bool {
        self.keywords
            .iter()
            .any(|keyword| haystack.contains(keyword.as_str()))
    }
}

/// An ordered set of categories used to filter questions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Taxonomy {
    categories: Vec<Category>,
}

impl Taxonomy {
    #[must_use]
    pub fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    /// The fixed data-science taxonomy the study tool ships with.
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(vec![
            Category::new(
                "Data Science",
                ["data science", "data scientist", "analysis", "analytics"],
            ),
            Category::new(
                "Machine Learning",
                [
                    "machine learning",
                    "ml",
                    "supervised",
                    "unsupervised",
                    "classification",
                    "regression",
                    "clustering",
                ],
            ),
            Category::new(
                "Deep Learning",
                [
                    "deep learning",
                    "neural network",
                    "cnn",
                    "rnn",
                    "lstm",
                    "backpropagation",
                    "gradient",
                ],
            ),
            Category::new(
                "Statistics",
                [
                    "statistics",
                    "statistical",
                    "probability",
                    "distribution",
                    "hypothesis",
                    "p-value",
                    "variance",
                    "bias",
                ],
            ),
            Category::new("Python", ["python", "pandas", "numpy"]),
            Category::new(
                "NLP",
                ["nlp", "natural language", "text", "tf-idf", "language processing"],
            ),
            // "cnn" is shared with Deep Learning on purpose.
            Category::new(
                "Computer Vision",
                ["cnn", "convolutional", "image", "vision", "pooling"],
            ),
            Category::new("SQL", ["sql", "database", "query"]),
            Category::new(
                "Algorithms",
                [
                    "algorithm",
                    "svm",
                    "decision tree",
                    "naive bayes",
                    "random forest",
                    "k-nn",
                ],
            ),
        ])
    }

    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Category labels in taxonomy order.
    #[must_use]
    pub fn labels(&self) -> Vec<&str> {
        self.categories.iter().map(Category::label).collect()
    }

    /// Looks up a category by exact label.
    #[must_use]
    pub fn category(&self, label: &str) -> Option<&Category> {
        self.categories
            .iter()
            .find(|category| category.label == label)
    }

    /// True when the question matches at least one selected category.
    ///
    /// An empty selection means "no filter": every question matches.
    /// Selected labels the taxonomy does not know match nothing.
    #[must_use]
    pub fn question_matches(&self, question: &Question, selection: &[String]) -> bool {
        if selection.is_empty() {
            return true;
        }
        let haystack = format!("{} {}", question.prompt(), question.answer()).to_lowercase();
        selection
            .iter()
            .filter_map(|label| self.category(label))
            .any(|category| category.matches(&haystack))
    }

    /// Filters each theme down to its matching questions, preserving order.
    ///
    /// Themes left with no matching question are dropped from the result.
    /// An empty selection returns an unfiltered copy.
    #[must_use]
    pub fn filter_themes(&self, themes: &[Theme], selection: &[String]) -> Vec<Theme> {
        if selection.is_empty() {
            return themes.to_vec();
        }
        themes
            .iter()
            .filter_map(|theme| {
                let questions: Vec<Question> = theme
                    .questions()
                    .iter()
                    .filter(|question| self.question_matches(question, selection))
                    .cloned()
                    .collect();
                if questions.is_empty() {
                    None
                } else {
                    Some(Theme::new(theme.id().clone(), theme.name(), questions))
                }
            })
            .collect()
    }
}
