use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{AppError, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Licence {
    pub code: String,
    pub title: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    pub pk: Uuid,
    pub title: String,
    pub description: String,
    pub text: String,
    pub licence: Option<Licence>,
    pub authors: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
}

/// Leaf content unit of a chapter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Extract {
    pub pk: Uuid,
    pub title: String,
    pub text: String,
    pub position_in_chapter: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chapter {
    pub pk: Uuid,
    pub title: String,
    pub introduction: String,
    pub conclusion: String,
    pub position_in_part: u32,
    pub extracts: Vec<Extract>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Part {
    pub pk: Uuid,
    pub title: String,
    pub introduction: String,
    pub conclusion: String,
    pub position_in_tutorial: u32,
    pub chapters: Vec<Chapter>,
}

/// A mini tutorial is a single chapter; a big one is split in parts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "content", rename_all = "UPPERCASE")]
pub enum TutorialBody {
    Mini(Chapter),
    Big(Vec<Part>),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tutorial {
    pub pk: Uuid,
    pub title: String,
    pub description: String,
    pub introduction: String,
    pub conclusion: String,
    pub licence: Option<Licence>,
    pub authors: Vec<Uuid>,
    pub body: TutorialBody,
    pub created_at: DateTime<Utc>,
}

fn ensure_free_position(taken: impl IntoIterator<Item = u32>, position: u32, parent: &str) -> Result<()> {
    if taken.into_iter().any(|p| p == position) {
        return Err(AppError::ValidationError(format!(
            "Position {} is already used in {}", position, parent
        )));
    }
    Ok(())
}

impl Extract {
    pub fn new(title: impl Into<String>, text: impl Into<String>, position_in_chapter: u32) -> Self {
        Self {
            pk: Uuid::new_v4(),
            title: title.into(),
            text: text.into(),
            position_in_chapter,
        }
    }
}

impl Chapter {
    pub fn new(title: impl Into<String>, introduction: impl Into<String>, conclusion: impl Into<String>, position_in_part: u32) -> Self {
        Self {
            pk: Uuid::new_v4(),
            title: title.into(),
            introduction: introduction.into(),
            conclusion: conclusion.into(),
            position_in_part,
            extracts: Vec::new(),
        }
    }

    pub fn insert_extract(&mut self, extract: Extract) -> Result<()> {
        ensure_free_position(
            self.extracts.iter().map(|e| e.position_in_chapter),
            extract.position_in_chapter,
            &format!("chapter {}", self.pk),
        )?;
        self.extracts.push(extract);
        Ok(())
    }

    /// Extracts ordered by their position in the chapter
    pub fn ordered_extracts(&self) -> Vec<&Extract> {
        let mut extracts: Vec<&Extract> = self.extracts.iter().collect();
        extracts.sort_by_key(|e| e.position_in_chapter);
        extracts
    }
}

impl Part {
    pub fn new(title: impl Into<String>, introduction: impl Into<String>, conclusion: impl Into<String>, position_in_tutorial: u32) -> Self {
        Self {
            pk: Uuid::new_v4(),
            title: title.into(),
            introduction: introduction.into(),
            conclusion: conclusion.into(),
            position_in_tutorial,
            chapters: Vec::new(),
        }
    }

    pub fn insert_chapter(&mut self, chapter: Chapter) -> Result<()> {
        ensure_free_position(
            self.chapters.iter().map(|c| c.position_in_part),
            chapter.position_in_part,
            &format!("part {}", self.pk),
        )?;
        self.chapters.push(chapter);
        Ok(())
    }

    pub fn ordered_chapters(&self) -> Vec<&Chapter> {
        let mut chapters: Vec<&Chapter> = self.chapters.iter().collect();
        chapters.sort_by_key(|c| c.position_in_part);
        chapters
    }
}

impl Tutorial {
    pub fn insert_part(&mut self, part: Part) -> Result<()> {
        let pk = self.pk;
        match &mut self.body {
            TutorialBody::Mini(_) => Err(AppError::ValidationError(
                "Un mini-tutoriel ne contient pas de parties".to_string(),
            )),
            TutorialBody::Big(parts) => {
                ensure_free_position(
                    parts.iter().map(|p| p.position_in_tutorial),
                    part.position_in_tutorial,
                    &format!("tutorial {}", pk),
                )?;
                parts.push(part);
                Ok(())
            }
        }
    }

    pub fn ordered_parts(&self) -> Vec<&Part> {
        match &self.body {
            TutorialBody::Mini(_) => Vec::new(),
            TutorialBody::Big(parts) => {
                let mut parts: Vec<&Part> = parts.iter().collect();
                parts.sort_by_key(|p| p.position_in_tutorial);
                parts
            }
        }
    }

    /// Every chapter of the tutorial, in reading order
    pub fn chapters(&self) -> Vec<&Chapter> {
        match &self.body {
            TutorialBody::Mini(chapter) => vec![chapter],
            TutorialBody::Big(_) => self
                .ordered_parts()
                .into_iter()
                .flat_map(|part| part.ordered_chapters())
                .collect(),
        }
    }

    pub fn find_part(&self, pk: Uuid) -> Option<&Part> {
        match &self.body {
            TutorialBody::Mini(_) => None,
            TutorialBody::Big(parts) => parts.iter().find(|p| p.pk == pk),
        }
    }

    pub fn find_chapter(&self, pk: Uuid) -> Option<&Chapter> {
        self.chapters().into_iter().find(|c| c.pk == pk)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big_tutorial() -> Tutorial {
        Tutorial {
            pk: Uuid::new_v4(),
            title: "Apprenez Rust".to_string(),
            description: "De zéro".to_string(),
            introduction: "intro".to_string(),
            conclusion: "conclu".to_string(),
            licence: None,
            authors: vec![],
            body: TutorialBody::Big(vec![]),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_duplicate_extract_position_rejected() {
        let mut chapter = Chapter::new("Chapitre", "intro", "conclu", 1);
        chapter.insert_extract(Extract::new("Un", "texte", 1)).unwrap();
        let result = chapter.insert_extract(Extract::new("Deux", "texte", 1));
        assert!(matches!(result, Err(AppError::ValidationError(_))));
        assert_eq!(chapter.extracts.len(), 1);
    }

    #[test]
    fn test_duplicate_chapter_and_part_positions_rejected() {
        let mut part = Part::new("Partie", "intro", "conclu", 1);
        part.insert_chapter(Chapter::new("Un", "", "", 1)).unwrap();
        let result = part.insert_chapter(Chapter::new("Deux", "", "", 1));
        assert!(matches!(result, Err(AppError::ValidationError(_))));
        assert_eq!(part.chapters.len(), 1);

        let mut tutorial = big_tutorial();
        tutorial.insert_part(part).unwrap();
        let result = tutorial.insert_part(Part::new("Autre", "", "", 1));
        assert!(matches!(result, Err(AppError::ValidationError(_))));
        assert_eq!(tutorial.ordered_parts().len(), 1);
        assert_eq!(tutorial.ordered_parts()[0].title, "Partie");
    }

    #[test]
    fn test_children_ordered_by_position() {
        let mut tutorial = big_tutorial();
        let mut second = Part::new("Seconde", "", "", 2);
        second.insert_chapter(Chapter::new("B2", "", "", 2)).unwrap();
        second.insert_chapter(Chapter::new("B1", "", "", 1)).unwrap();
        tutorial.insert_part(second).unwrap();
        let mut first = Part::new("Première", "", "", 1);
        first.insert_chapter(Chapter::new("A1", "", "", 1)).unwrap();
        tutorial.insert_part(first).unwrap();

        let titles: Vec<&str> = tutorial.chapters().iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec!["A1", "B1", "B2"]);
    }

    #[test]
    fn test_mini_tutorial_has_no_parts() {
        let mut tutorial = big_tutorial();
        tutorial.body = TutorialBody::Mini(Chapter::new("Seul", "", "", 1));
        assert!(tutorial.insert_part(Part::new("P", "", "", 1)).is_err());
        assert_eq!(tutorial.chapters().len(), 1);
    }
}
