//! Shared error types for the services crate.

use thiserror::Error;

use rehearse_core::ThemeId;
use storage::LoadError;

/// Errors emitted by session navigation.
///
/// All of these are recoverable: the navigator refuses the command, keeps
/// its state, and the presentation layer shows the situation to the user.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("no theme is selected")]
    NoThemeSelected,

    #[error("no questions available for this theme")]
    NoQuestionsAvailable,

    #[error("unknown theme: {0}")]
    UnknownTheme(ThemeId),
}

/// Errors emitted while opening a question library.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LibraryError {
    #[error(transparent)]
    Load(#[from] LoadError),
}
