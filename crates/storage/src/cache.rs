//! Process-wide load-once dataset cache.
//!
//! A dataset is read-only for the lifetime of the process, so one load per
//! path is enough; every later request shares the same `Arc`. This is the
//! only process-wide state in the workspace.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, OnceLock};

use crate::loader::{LoadError, LoadedDataset};

static CACHE: OnceLock<Mutex<HashMap<PathBuf, Arc<LoadedDataset>>>> = OnceLock::new();

/// Returns the dataset at `path`, reading the file on first request only.
///
/// Failed loads are not cached; a later call retries the read.
///
/// # Errors
///
/// Returns `LoadError` when the file cannot be read or parsed.
pub fn load_cached(path: impl AsRef<Path>) -> Result<Arc<LoadedDataset>, LoadError> {
    let path = path.as_ref();
    let cache = CACHE.get_or_init(|| Mutex::new(HashMap::new()));
    let mut cache = cache.lock().expect("dataset cache poisoned");
    if let Some(dataset) = cache.get(path) {
        return Ok(Arc::clone(dataset));
    }
    let dataset = Arc::new(LoadedDataset::load(path)?);
    cache.insert(path.to_path_buf(), Arc::clone(&dataset));
    Ok(dataset)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Write;

    use tempfile::NamedTempFile;

    #[test]
    fn second_request_shares_the_first_load() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(br#"{"questions": [], "themes": []}"#).unwrap();

        let first = load_cached(file.path()).unwrap();
        let second = load_cached(file.path()).unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn failed_loads_are_not_cached() {
        let missing = std::env::temp_dir().join("rehearse-cache-miss.json");
        std::fs::remove_file(&missing).ok();
        assert!(load_cached(&missing).is_err());

        std::fs::write(&missing, br#"{"questions": [], "themes": []}"#).unwrap();
        let loaded = load_cached(&missing);
        std::fs::remove_file(&missing).ok();
        assert!(loaded.is_ok());
    }
}
