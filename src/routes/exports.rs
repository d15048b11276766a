use axum::{
    extract::{Path, State},
    response::Json,
};
use uuid::Uuid;

use crate::{AppState, Result};
use crate::export::{ArticleExport, ChapterExport, PartExport, TutorialExport};

pub async fn export_article(
    State(state): State<AppState>,
    Path(pk): Path<Uuid>,
) -> Result<Json<ArticleExport>> {
    Ok(Json(state.export_service.export_article(pk).await?))
}

pub async fn export_tutorial(
    State(state): State<AppState>,
    Path(pk): Path<Uuid>,
) -> Result<Json<TutorialExport>> {
    Ok(Json(state.export_service.export_tutorial(pk).await?))
}

pub async fn export_part(
    State(state): State<AppState>,
    Path(pk): Path<Uuid>,
) -> Result<Json<PartExport>> {
    Ok(Json(state.export_service.export_part(pk).await?))
}

pub async fn export_chapter(
    State(state): State<AppState>,
    Path(pk): Path<Uuid>,
) -> Result<Json<ChapterExport>> {
    Ok(Json(state.export_service.export_chapter(pk).await?))
}
