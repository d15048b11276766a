//! Plain, serializable snapshots of published content.
//!
//! Exports are pure reads over already loaded entities; looking entities up
//! is left to [`crate::services::ExportService`].

pub mod article;
pub mod tutorial;

pub use article::{export_article, ArticleExport};
pub use tutorial::{
    export_chapter, export_extract, export_part, export_tutorial,
    ChapterExport, ExtractExport, PartExport, TutorialContentExport, TutorialExport,
};
