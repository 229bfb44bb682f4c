use std::sync::Arc;

use rehearse_core::{Catalog, Taxonomy, Theme, ThemeId};

use super::navigator::{NavChange, Navigator};
use super::view::{SessionView, ThemeOverview};
use crate::error::SessionError;

/// One user's study session over a loaded catalog.
///
/// Combines the tag filter with the navigator: theme listings and theme
/// selection always see the filtered view, while an already active theme
/// keeps its position until the next selection. Each session owns its own
/// state; the catalog behind the `Arc` is shared and never mutated.
#[derive(Debug)]
pub struct StudySession {
    catalog: Arc<Catalog>,
    taxonomy: Taxonomy,
    selection: Vec<String>,
    navigator: Navigator,
}

impl StudySession {
    /// Creates a session over the catalog with the built-in taxonomy.
    #[must_use]
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self::with_taxonomy(catalog, Taxonomy::builtin())
    }

    #[must_use]
    pub fn with_taxonomy(catalog: Arc<Catalog>, taxonomy: Taxonomy) -> Self {
        Self {
            catalog,
            taxonomy,
            selection: Vec::new(),
            navigator: Navigator::new(),
        }
    }

    #[must_use]
    pub fn taxonomy(&self) -> &Taxonomy {
        &self.taxonomy
    }

    /// Currently selected category labels. Empty means no filter.
    #[must_use]
    pub fn tag_filter(&self) -> &[String] {
        &self.selection
    }

    /// Replaces the tag filter.
    ///
    /// Only listings and later selections see the change; the active
    /// navigator position stays where it is.
    pub fn set_tag_filter(&mut self, labels: Vec<String>) {
        self.selection = labels;
    }

    /// Themes for the selector, after filtering, with question counts.
    #[must_use]
    pub fn themes(&self) -> Vec<ThemeOverview> {
        self.filtered_themes()
            .iter()
            .map(|theme| ThemeOverview {
                id: theme.id().clone(),
                name: theme.name().to_owned(),
                question_count: theme.question_count(),
            })
            .collect()
    }

    /// Activates a theme from the filtered list.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::UnknownTheme` when the id does not name a
    /// theme visible under the current filter.
    pub fn select_theme(&mut self, id: &ThemeId) -> Result<NavChange, SessionError> {
        let theme = self
            .filtered_themes()
            .into_iter()
            .find(|theme| theme.id() == id)
            .ok_or_else(|| SessionError::UnknownTheme(id.clone()))?;
        Ok(self.navigator.select_theme(theme))
    }

    /// Reveals the current answer.
    ///
    /// # Errors
    ///
    /// See [`Navigator::reveal_answer`].
    pub fn reveal_answer(&mut self) -> Result<NavChange, SessionError> {
        self.navigator.reveal_answer()
    }

    /// Moves to a different random question.
    ///
    /// # Errors
    ///
    /// See [`Navigator::next_question`].
    pub fn next_question(&mut self) -> Result<NavChange, SessionError> {
        self.navigator.next_question()
    }

    /// Snapshot for the presentation layer.
    #[must_use]
    pub fn view(&self) -> SessionView<'_> {
        self.navigator.view()
    }

    fn filtered_themes(&self) -> Vec<Theme> {
        self.taxonomy
            .filter_themes(self.catalog.themes(), &self.selection)
    }
}
