use serde::Serialize;
use uuid::Uuid;

use super::{FieldErrors, REQUIRED_MESSAGE};
use crate::models::{CastVoteRequest, Choice, Poll, Vote, VoteType};
use crate::Result;

pub const VOTE_LABEL: &str = "Voter";
pub const EDIT_VOTE_LABEL: &str = "Modifier mon vote";
pub const INVALID_CHOICE_MESSAGE: &str =
    "Sélectionnez un choix valide. Ce choix ne fait pas partie de ceux disponibles.";

fn button_label(has_initial: bool) -> &'static str {
    if has_initial { EDIT_VOTE_LABEL } else { VOTE_LABEL }
}

/// Single-selection ballot; `choice` is required
#[derive(Debug, Clone, Serialize)]
pub struct UniqueVoteForm {
    pub poll_id: Uuid,
    pub choices: Vec<Choice>,
    pub initial: Option<Uuid>,
    pub button_label: &'static str,
}

/// Multi-selection ballot; an empty selection is a valid ballot
#[derive(Debug, Clone, Serialize)]
pub struct MultipleVoteForm {
    pub poll_id: Uuid,
    pub choices: Vec<Choice>,
    pub initial: Vec<Uuid>,
    pub button_label: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type_vote", rename_all = "lowercase")]
pub enum VoteForm {
    Unique(UniqueVoteForm),
    Multiple(MultipleVoteForm),
}

/// What a cleaned ballot selected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VoteSelection {
    Unique(Uuid),
    Multiple(Vec<Uuid>),
}

impl UniqueVoteForm {
    pub fn new(poll: &Poll, choices: Vec<Choice>, initial: Option<Uuid>) -> Self {
        Self {
            poll_id: poll.id,
            choices: restrict_to_poll(poll, choices),
            initial,
            button_label: button_label(initial.is_some()),
        }
    }

    pub fn clean(&self, data: &CastVoteRequest) -> std::result::Result<Uuid, FieldErrors> {
        let mut errors = FieldErrors::new();
        match data.choice {
            None => errors.add("choice", REQUIRED_MESSAGE),
            Some(id) if !self.choices.iter().any(|c| c.id == id) => {
                errors.add("choice", INVALID_CHOICE_MESSAGE)
            }
            Some(id) => return Ok(id),
        }
        Err(errors)
    }
}

impl MultipleVoteForm {
    pub fn new(poll: &Poll, choices: Vec<Choice>, initial: Option<Vec<Uuid>>) -> Self {
        Self {
            poll_id: poll.id,
            choices: restrict_to_poll(poll, choices),
            button_label: button_label(initial.is_some()),
            initial: initial.unwrap_or_default(),
        }
    }

    pub fn clean(&self, data: &CastVoteRequest) -> std::result::Result<Vec<Uuid>, FieldErrors> {
        let mut errors = FieldErrors::new();
        let mut selected: Vec<Uuid> = Vec::with_capacity(data.choices.len());

        for id in &data.choices {
            if !self.choices.iter().any(|c| c.id == *id) {
                errors.add("choices", format!(
                    "Sélectionnez un choix valide. {} n'en fait pas partie.", id
                ));
            } else if !selected.contains(id) {
                selected.push(*id);
            }
        }

        errors.into_result(selected)
    }
}

impl VoteForm {
    pub fn vote_type(&self) -> VoteType {
        match self {
            VoteForm::Unique(_) => VoteType::Unique,
            VoteForm::Multiple(_) => VoteType::Multiple,
        }
    }

    pub fn button_label(&self) -> &'static str {
        match self {
            VoteForm::Unique(form) => form.button_label,
            VoteForm::Multiple(form) => form.button_label,
        }
    }

    pub fn clean(&self, data: &CastVoteRequest) -> std::result::Result<VoteSelection, FieldErrors> {
        match self {
            VoteForm::Unique(form) => form.clean(data).map(VoteSelection::Unique),
            VoteForm::Multiple(form) => form.clean(data).map(VoteSelection::Multiple),
        }
    }
}

fn restrict_to_poll(poll: &Poll, choices: Vec<Choice>) -> Vec<Choice> {
    choices.into_iter().filter(|c| c.poll_id == poll.id).collect()
}

/// Build the ballot matching the poll's stored vote type.
///
/// `initial` is the user's current vote, if any; it pre-fills the form and
/// switches the button to an edit label. A stored key matching no ballot mode
/// is an error rather than an absent form.
pub fn get_vote_form(poll: &Poll, choices: Vec<Choice>, initial: Option<&Vote>) -> Result<VoteForm> {
    match poll.vote_type()? {
        VoteType::Multiple => {
            let initial = match initial {
                Some(Vote::Multiple(vote)) => Some(vote.choice_ids.clone()),
                _ => None,
            };
            Ok(VoteForm::Multiple(MultipleVoteForm::new(poll, choices, initial)))
        }
        VoteType::Unique => {
            let initial = match initial {
                Some(Vote::Unique(vote)) => Some(vote.choice_id),
                _ => None,
            };
            Ok(VoteForm::Unique(UniqueVoteForm::new(poll, choices, initial)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MultipleVote, UniqueVote};
    use crate::AppError;
    use chrono::Utc;

    fn poll(type_vote: &str) -> Poll {
        Poll {
            id: Uuid::new_v4(),
            author_id: Uuid::new_v4(),
            title: "Éditeur préféré".to_string(),
            anonymous_vote: false,
            enddate: None,
            type_vote: type_vote.to_string(),
            activate: true,
            created_at: Utc::now(),
        }
    }

    fn choice(poll: &Poll, label: &str) -> Choice {
        Choice { id: Uuid::new_v4(), poll_id: poll.id, choice: label.to_string() }
    }

    #[test]
    fn test_multiple_poll_gets_multiple_form() {
        let poll = poll("m");
        let choices = vec![choice(&poll, "vim"), choice(&poll, "emacs")];

        let form = get_vote_form(&poll, choices.clone(), None).unwrap();
        match &form {
            VoteForm::Multiple(form) => {
                assert_eq!(form.poll_id, poll.id);
                assert_eq!(form.choices, choices);
                assert_eq!(form.button_label, VOTE_LABEL);
            }
            other => panic!("expected a multiple vote form, got {:?}", other),
        }
        assert_eq!(form.vote_type(), VoteType::Multiple);
    }

    #[test]
    fn test_unique_form_restricted_to_poll() {
        let poll = poll("u");
        let other = self::poll("u");
        let mine = choice(&poll, "vim");
        let foreign = choice(&other, "nano");

        let form = get_vote_form(&poll, vec![mine.clone(), foreign.clone()], None).unwrap();
        let VoteForm::Unique(unique) = &form else {
            panic!("expected a unique vote form");
        };
        assert_eq!(unique.choices, vec![mine.clone()]);

        let errors = form
            .clean(&CastVoteRequest { choice: Some(foreign.id), choices: vec![] })
            .unwrap_err();
        assert_eq!(errors.get("choice").unwrap(), &[INVALID_CHOICE_MESSAGE.to_string()]);

        let selection = form
            .clean(&CastVoteRequest { choice: Some(mine.id), choices: vec![] })
            .unwrap();
        assert_eq!(selection, VoteSelection::Unique(mine.id));
    }

    #[test]
    fn test_unique_choice_required() {
        let poll = poll("u");
        let form = get_vote_form(&poll, vec![choice(&poll, "a"), choice(&poll, "b")], None).unwrap();
        let errors = form.clean(&CastVoteRequest::default()).unwrap_err();
        assert_eq!(errors.get("choice").unwrap(), &[REQUIRED_MESSAGE.to_string()]);
    }

    #[test]
    fn test_multiple_selection_cleaning() {
        let poll = poll("m");
        let a = choice(&poll, "a");
        let b = choice(&poll, "b");
        let form = get_vote_form(&poll, vec![a.clone(), b.clone()], None).unwrap();

        assert_eq!(form.clean(&CastVoteRequest::default()).unwrap(), VoteSelection::Multiple(vec![]));
        assert_eq!(
            form.clean(&CastVoteRequest { choice: None, choices: vec![b.id, a.id, b.id] }).unwrap(),
            VoteSelection::Multiple(vec![b.id, a.id])
        );
        let errors = form
            .clean(&CastVoteRequest { choice: None, choices: vec![a.id, Uuid::new_v4()] })
            .unwrap_err();
        assert!(errors.has("choices"));
    }

    #[test]
    fn test_initial_vote_switches_label() {
        let poll = poll("u");
        let a = choice(&poll, "a");
        let existing = Vote::Unique(UniqueVote {
            poll_id: poll.id,
            user_id: Uuid::new_v4(),
            choice_id: a.id,
            created_at: Utc::now(),
        });
        let form = get_vote_form(&poll, vec![a.clone()], Some(&existing)).unwrap();
        assert_eq!(form.button_label(), EDIT_VOTE_LABEL);

        let multiple_poll = self::poll("m");
        let blank = Vote::Multiple(MultipleVote {
            poll_id: multiple_poll.id,
            user_id: Uuid::new_v4(),
            choice_ids: vec![],
            created_at: Utc::now(),
        });
        let form = get_vote_form(&multiple_poll, vec![], Some(&blank)).unwrap();
        assert_eq!(form.button_label(), EDIT_VOTE_LABEL);

        // a ballot of the other kind does not pre-fill the form
        let form = get_vote_form(&multiple_poll, vec![], Some(&existing)).unwrap();
        assert_eq!(form.button_label(), VOTE_LABEL);
    }

    #[test]
    fn test_unknown_vote_type_is_an_error() {
        let poll = poll("q");
        let result = get_vote_form(&poll, vec![], None);
        assert!(matches!(result, Err(AppError::UnknownVoteType(key)) if key == "q"));
    }
}
