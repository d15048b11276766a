use serde::Serialize;

use crate::models::Article;

pub const ARTICLE_TYPE: &str = "article";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArticleExport {
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub text: String,
    /// Licence code; absent when the article carries no licence
    #[serde(skip_serializing_if = "Option::is_none")]
    pub licence: Option<String>,
}

impl From<&Article> for ArticleExport {
    fn from(article: &Article) -> Self {
        Self {
            title: article.title.clone(),
            description: article.description.clone(),
            kind: ARTICLE_TYPE,
            text: article.text.clone(),
            licence: article.licence.as_ref().map(|licence| licence.code.clone()),
        }
    }
}

pub fn export_article(article: &Article) -> ArticleExport {
    ArticleExport::from(article)
}
