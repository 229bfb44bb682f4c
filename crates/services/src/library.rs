//! Bootstrap facade wiring storage to the study services.

use std::path::Path;
use std::sync::Arc;

use rehearse_core::{Catalog, IntegrityReport, Taxonomy, check_document};
use storage::{LoadedDataset, load_cached};

use crate::error::LibraryError;
use crate::session::StudySession;

/// A loaded question library.
///
/// Opens a dataset once through the process-wide cache, then hands out
/// study sessions and integrity reports over the shared, read-only data.
#[derive(Debug, Clone)]
pub struct Library {
    dataset: Arc<LoadedDataset>,
    catalog: Arc<Catalog>,
    taxonomy: Taxonomy,
}

impl Library {
    /// Opens the dataset at `path`, reusing an earlier load of the same path.
    ///
    /// # Errors
    ///
    /// Returns `LibraryError` when the file cannot be read or parsed; in
    /// that case no library state exists at all.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, LibraryError> {
        let dataset = load_cached(path)?;
        let catalog = Arc::new(dataset.catalog().clone());
        Ok(Self {
            dataset,
            catalog,
            taxonomy: Taxonomy::builtin(),
        })
    }

    /// Replaces the built-in taxonomy.
    #[must_use]
    pub fn with_taxonomy(mut self, taxonomy: Taxonomy) -> Self {
        self.taxonomy = taxonomy;
        self
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn taxonomy(&self) -> &Taxonomy {
        &self.taxonomy
    }

    /// Runs the integrity checker over the raw document.
    #[must_use]
    pub fn check(&self) -> IntegrityReport {
        check_document(self.dataset.document())
    }

    /// Starts a fresh study session over this library.
    #[must_use]
    pub fn start_session(&self) -> StudySession {
        StudySession::with_taxonomy(Arc::clone(&self.catalog), self.taxonomy.clone())
    }
}
