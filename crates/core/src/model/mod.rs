mod ids;
mod question;
mod theme;

pub use ids::{QuestionId, ThemeId};
pub use question::{CardText, Question, QuestionError};
pub use theme::Theme;
