//! Dataset file loading.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use rehearse_core::{Catalog, Document};

/// Errors surfaced while reading a dataset from disk.
///
/// These are fatal to startup: no partial state is constructed from a
/// resource that cannot be read or parsed. Integrity defects inside a
/// well-formed document are a separate concern and never surface here.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LoadError {
    #[error("cannot read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot parse {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// A dataset read from disk, together with its resolved catalog.
///
/// Immutable after construction; intended to be shared behind `Arc` for the
/// rest of the process.
#[derive(Debug, Clone)]
pub struct LoadedDataset {
    path: PathBuf,
    document: Document,
    catalog: Catalog,
}

impl LoadedDataset {
    /// Reads and resolves the dataset at `path`.
    ///
    /// # Errors
    ///
    /// Returns `LoadError` when the file cannot be read or is not valid
    /// JSON for either accepted dataset shape.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let document = load_document(path)?;
        let catalog = Catalog::from_document(&document);
        Ok(Self {
            path: path.to_path_buf(),
            document,
            catalog,
        })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The raw document, as the integrity checker wants it.
    #[must_use]
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// The resolved question store and theme index.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}

/// Reads and parses a dataset document without resolving it.
///
/// # Errors
///
/// Returns `LoadError::Io` when the file cannot be read and
/// `LoadError::Parse` when it is not valid JSON.
pub fn load_document(path: impl AsRef<Path>) -> Result<Document, LoadError> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
