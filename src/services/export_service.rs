use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

use crate::db::repository::ContentRepository;
use crate::export::{
    export_article, export_chapter, export_part, export_tutorial,
    ArticleExport, ChapterExport, PartExport, TutorialExport,
};
use crate::models::{Article, Tutorial};
use crate::{AppError, Result};

/// Loads published content and turns it into export snapshots
pub struct ExportService {
    content_repo: Arc<dyn ContentRepository>,
}

impl ExportService {
    pub fn new(content_repo: Arc<dyn ContentRepository>) -> Self {
        Self { content_repo }
    }

    pub async fn store_article(&self, article: &Article) -> Result<Article> {
        self.content_repo.save_article(article).await
    }

    pub async fn store_tutorial(&self, tutorial: &Tutorial) -> Result<Tutorial> {
        self.content_repo.save_tutorial(tutorial).await
    }

    pub async fn export_article(&self, pk: Uuid) -> Result<ArticleExport> {
        let article = self
            .content_repo
            .get_article(pk)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Article {} not found", pk)))?;
        debug!("Exporting article {}", pk);
        Ok(export_article(&article))
    }

    pub async fn export_tutorial(&self, pk: Uuid) -> Result<TutorialExport> {
        let tutorial = self
            .content_repo
            .get_tutorial(pk)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Tutorial {} not found", pk)))?;
        debug!("Exporting tutorial {}", pk);
        Ok(export_tutorial(&tutorial))
    }

    pub async fn export_part(&self, pk: Uuid) -> Result<PartExport> {
        let part = self
            .content_repo
            .get_part(pk)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Part {} not found", pk)))?;
        Ok(export_part(&part))
    }

    pub async fn export_chapter(&self, pk: Uuid) -> Result<ChapterExport> {
        let chapter = self
            .content_repo
            .get_chapter(pk)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Chapter {} not found", pk)))?;
        Ok(export_chapter(&chapter))
    }
}
