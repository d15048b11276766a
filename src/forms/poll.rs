use chrono::NaiveDate;
use serde::Deserialize;

use super::{FieldErrors, REQUIRED_MESSAGE};
use crate::models::poll::{CreatePollRequest, UpdatePollRequest, VoteType};

pub const TITLE_EMPTY_MESSAGE: &str = "Le champ titre ne peut être vide";
pub const ENDDATE_PAST_MESSAGE: &str = "La date ne peut pas être antérieure à aujourd'hui";
pub const TITLE_MAX_LENGTH: usize = 80;

/// Fields of a new poll as submitted
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PollForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub anonymous_vote: bool,
    #[serde(default)]
    pub enddate: Option<NaiveDate>,
    #[serde(default)]
    pub type_vote: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CleanedPoll {
    pub title: String,
    pub anonymous_vote: bool,
    pub enddate: Option<NaiveDate>,
    pub vote_type: VoteType,
}

/// Activation and end date edits on an existing poll
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdatePollForm {
    #[serde(default)]
    pub activate: bool,
    #[serde(default)]
    pub enddate: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CleanedPollUpdate {
    pub activate: bool,
    pub enddate: Option<NaiveDate>,
}

fn clean_title(title: &str, errors: &mut FieldErrors) -> String {
    let title = title.trim();
    if title.is_empty() {
        errors.add("title", TITLE_EMPTY_MESSAGE);
    } else if title.chars().count() > TITLE_MAX_LENGTH {
        errors.add("title", format!(
            "Assurez-vous que cette valeur comporte au plus {} caractères.", TITLE_MAX_LENGTH
        ));
    }
    title.to_string()
}

fn clean_enddate(enddate: Option<NaiveDate>, today: NaiveDate, errors: &mut FieldErrors) -> Option<NaiveDate> {
    if let Some(date) = enddate {
        if date < today {
            errors.add("enddate", ENDDATE_PAST_MESSAGE);
        }
    }
    enddate
}

impl PollForm {
    pub fn clean(&self, today: NaiveDate) -> Result<CleanedPoll, FieldErrors> {
        let mut errors = FieldErrors::new();

        let title = clean_title(&self.title, &mut errors);
        let enddate = clean_enddate(self.enddate, today, &mut errors);
        let key = self.type_vote.trim();
        let vote_type = match VoteType::from_key(key) {
            Ok(vote_type) => Some(vote_type),
            Err(_) if key.is_empty() => {
                errors.add("type_vote", REQUIRED_MESSAGE);
                None
            }
            Err(_) => {
                errors.add("type_vote", format!(
                    "Sélectionnez un choix valide. {} n'en fait pas partie.", self.type_vote
                ));
                None
            }
        };

        match vote_type {
            Some(vote_type) if errors.is_empty() => Ok(CleanedPoll {
                title,
                anonymous_vote: self.anonymous_vote,
                enddate,
                vote_type,
            }),
            _ => Err(errors),
        }
    }
}

impl UpdatePollForm {
    pub fn clean(&self, today: NaiveDate) -> Result<CleanedPollUpdate, FieldErrors> {
        let mut errors = FieldErrors::new();
        let enddate = clean_enddate(self.enddate, today, &mut errors);
        errors.into_result(CleanedPollUpdate {
            activate: self.activate,
            enddate,
        })
    }
}

impl From<&CreatePollRequest> for PollForm {
    fn from(request: &CreatePollRequest) -> Self {
        Self {
            title: request.title.clone(),
            anonymous_vote: request.anonymous_vote,
            enddate: request.enddate,
            type_vote: request.type_vote.clone(),
        }
    }
}

impl From<UpdatePollRequest> for UpdatePollForm {
    fn from(request: UpdatePollRequest) -> Self {
        Self {
            activate: request.activate,
            enddate: request.enddate,
        }
    }
}
