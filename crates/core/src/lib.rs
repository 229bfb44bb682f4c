#![forbid(unsafe_code)]

pub mod catalog;
pub mod dataset;
pub mod integrity;
pub mod model;
pub mod tags;

pub use catalog::Catalog;
pub use dataset::{Document, QuestionRecord, ThemeRecord};
pub use integrity::{
    DatasetStats, IntegrityError, IntegrityReport, IntegrityWarning, check_document,
};
pub use model::{CardText, Question, QuestionError, QuestionId, Theme, ThemeId};
pub use tags::{Category, Taxonomy};
