#![forbid(unsafe_code)]

pub mod cache;
pub mod loader;

pub use cache::load_cached;
pub use loader::{LoadError, LoadedDataset, load_document};
