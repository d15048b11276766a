use serde::Serialize;
use uuid::Uuid;

use crate::models::{Chapter, Extract, Part, Tutorial, TutorialBody};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExtractExport {
    pub pk: Uuid,
    pub title: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChapterExport {
    pub pk: Uuid,
    pub title: String,
    pub introduction: String,
    pub conclusion: String,
    pub extracts: Vec<ExtractExport>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PartExport {
    pub pk: Uuid,
    pub title: String,
    pub introduction: String,
    pub conclusion: String,
    pub chapters: Vec<ChapterExport>,
}

/// A mini tutorial exports its only chapter, a big one its parts
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TutorialContentExport {
    Chapter(ChapterExport),
    Parts(Vec<PartExport>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TutorialExport {
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub licence: Option<String>,
    pub introduction: String,
    pub conclusion: String,
    #[serde(flatten)]
    pub content: TutorialContentExport,
}

pub fn export_extract(extract: &Extract) -> ExtractExport {
    ExtractExport {
        pk: extract.pk,
        title: extract.title.clone(),
        text: extract.text.clone(),
    }
}

pub fn export_chapter(chapter: &Chapter) -> ChapterExport {
    ChapterExport {
        pk: chapter.pk,
        title: chapter.title.clone(),
        introduction: chapter.introduction.clone(),
        conclusion: chapter.conclusion.clone(),
        extracts: chapter.ordered_extracts().into_iter().map(export_extract).collect(),
    }
}

pub fn export_part(part: &Part) -> PartExport {
    PartExport {
        pk: part.pk,
        title: part.title.clone(),
        introduction: part.introduction.clone(),
        conclusion: part.conclusion.clone(),
        chapters: part.ordered_chapters().into_iter().map(export_chapter).collect(),
    }
}

pub fn export_tutorial(tutorial: &Tutorial) -> TutorialExport {
    let (kind, content) = match &tutorial.body {
        TutorialBody::Mini(chapter) => ("MINI", TutorialContentExport::Chapter(export_chapter(chapter))),
        TutorialBody::Big(_) => (
            "BIG",
            TutorialContentExport::Parts(tutorial.ordered_parts().into_iter().map(export_part).collect()),
        ),
    };

    TutorialExport {
        title: tutorial.title.clone(),
        description: tutorial.description.clone(),
        kind,
        licence: tutorial.licence.as_ref().map(|licence| licence.code.clone()),
        introduction: tutorial.introduction.clone(),
        conclusion: tutorial.conclusion.clone(),
        content,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Licence;
    use chrono::Utc;

    fn tutorial(body: TutorialBody) -> Tutorial {
        Tutorial {
            pk: Uuid::new_v4(),
            title: "Programmer en Rust".to_string(),
            description: "Le guide".to_string(),
            introduction: "Bienvenue".to_string(),
            conclusion: "Au revoir".to_string(),
            licence: Some(Licence { code: "CC BY".to_string(), title: "Creative Commons BY".to_string() }),
            authors: vec![],
            body,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_export_chapter() {
        let mut chapter = Chapter::new("Ownership", "intro", "conclu", 1);
        let extract = Extract::new("Emprunts", "Une référence...", 1);
        chapter.insert_extract(extract.clone()).unwrap();

        let result = serde_json::to_value(export_chapter(&chapter)).unwrap();

        assert_eq!(result["pk"], chapter.pk.to_string());
        assert_eq!(result["title"], chapter.title.as_str());
        assert_eq!(result["introduction"], chapter.introduction.as_str());
        assert_eq!(result["conclusion"], chapter.conclusion.as_str());
        assert_eq!(result["extracts"].as_array().unwrap().len(), 1);
        assert_eq!(result["extracts"][0]["pk"], extract.pk.to_string());
        assert_eq!(result["extracts"][0]["title"], extract.title.as_str());
        assert_eq!(result["extracts"][0]["text"], extract.text.as_str());
    }

    #[test]
    fn test_export_chapter_orders_extracts() {
        let mut chapter = Chapter::new("Traits", "", "", 1);
        chapter.insert_extract(Extract::new("Trois", "", 3)).unwrap();
        chapter.insert_extract(Extract::new("Un", "", 1)).unwrap();
        chapter.insert_extract(Extract::new("Deux", "", 2)).unwrap();

        let titles: Vec<String> = export_chapter(&chapter).extracts.into_iter().map(|e| e.title).collect();
        assert_eq!(titles, vec!["Un", "Deux", "Trois"]);
    }

    #[test]
    fn test_export_part() {
        let mut part = Part::new("Les bases", "intro", "conclu", 1);
        part.insert_chapter(Chapter::new("Variables", "", "", 1)).unwrap();

        let result = export_part(&part);
        assert_eq!(result.pk, part.pk);
        assert_eq!(result.title, "Les bases");
        assert_eq!(result.introduction, "intro");
        assert_eq!(result.conclusion, "conclu");
        assert_eq!(result.chapters.len(), 1);
        assert_eq!(result.chapters[0].title, "Variables");
    }

    #[test]
    fn test_export_mini_tutorial() {
        let mut chapter = Chapter::new("Unique", "", "", 1);
        chapter.insert_extract(Extract::new("Seul", "texte", 1)).unwrap();

        let result = serde_json::to_value(export_tutorial(&tutorial(TutorialBody::Mini(chapter)))).unwrap();

        assert_eq!(result["type"], "MINI");
        assert_eq!(result["licence"], "CC BY");
        assert_eq!(result["chapter"]["extracts"][0]["title"], "Seul");
        assert!(result.get("parts").is_none());
    }

    #[test]
    fn test_export_big_tutorial() {
        let mut tutorial = tutorial(TutorialBody::Big(vec![]));
        tutorial.insert_part(Part::new("Deuxième", "", "", 2)).unwrap();
        tutorial.insert_part(Part::new("Première", "", "", 1)).unwrap();

        let result = serde_json::to_value(export_tutorial(&tutorial)).unwrap();

        assert_eq!(result["type"], "BIG");
        assert_eq!(result["title"], "Programmer en Rust");
        assert_eq!(result["introduction"], "Bienvenue");
        assert_eq!(result["parts"][0]["title"], "Première");
        assert_eq!(result["parts"][1]["title"], "Deuxième");
        assert!(result.get("chapter").is_none());
    }
}
