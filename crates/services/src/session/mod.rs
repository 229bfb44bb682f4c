mod navigator;
mod study;
mod view;

// Public API of the session subsystem.
pub use crate::error::SessionError;
pub use navigator::{NavChange, Navigator};
pub use study::StudySession;
pub use view::{SessionView, ThemeOverview};
