#![forbid(unsafe_code)]

pub mod error;
pub mod library;
pub mod session;

pub use error::{LibraryError, SessionError};
pub use library::Library;
pub use session::{NavChange, Navigator, SessionView, StudySession, ThemeOverview};
