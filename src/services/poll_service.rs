use std::sync::Arc;
use chrono::{NaiveDate, Utc};
use tracing::{info, warn};
use uuid::Uuid;

use crate::db::repository::PollRepository;
use crate::forms::{clean_choice_set, ChoiceForm, FieldErrors, PollForm, UpdatePollForm};
use crate::models::poll::{CreatePollRequest, UpdatePollRequest, MAX_CHOICES};
use crate::models::{Choice, Poll, PollResponse};
use crate::{AppError, Result};

pub(crate) fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Service for creating polls and managing their choices
pub struct PollService {
    poll_repo: Arc<dyn PollRepository>,
}

impl PollService {
    pub fn new(poll_repo: Arc<dyn PollRepository>) -> Self {
        Self { poll_repo }
    }

    /// Validate and store a new poll together with its initial choices
    pub async fn create_poll(&self, author_id: Uuid, request: CreatePollRequest) -> Result<PollResponse> {
        let cleaned_poll = PollForm::from(&request).clean(today());
        let cleaned_choices = clean_choice_set(&request.choices);

        let (cleaned_poll, labels) = match (cleaned_poll, cleaned_choices) {
            (Ok(poll), Ok(labels)) => (poll, labels),
            (poll, labels) => {
                let mut errors = FieldErrors::new();
                if let Err(poll_errors) = poll {
                    errors.merge(poll_errors);
                }
                if let Err(choice_errors) = labels {
                    errors.merge(choice_errors);
                }
                warn!("Rejected poll submission from {}: {}", author_id, errors);
                return Err(AppError::FormErrors(errors));
            }
        };

        let poll = Poll {
            id: Uuid::new_v4(),
            author_id,
            title: cleaned_poll.title,
            anonymous_vote: cleaned_poll.anonymous_vote,
            enddate: cleaned_poll.enddate,
            type_vote: cleaned_poll.vote_type.key().to_string(),
            activate: true,
            created_at: Utc::now(),
        };
        let choices: Vec<Choice> = labels
            .into_iter()
            .map(|choice| Choice { id: Uuid::new_v4(), poll_id: poll.id, choice })
            .collect();

        let poll = self.poll_repo.create_poll(&poll, &choices).await?;
        info!("Created poll {} ({}) with {} choices", poll.id, cleaned_poll.vote_type.label(), choices.len());

        Ok(PollResponse::new(poll, choices))
    }

    /// Change activation and end date; only the poll's author may do so
    pub async fn update_poll(&self, poll_id: Uuid, editor_id: Uuid, request: UpdatePollRequest) -> Result<PollResponse> {
        let mut poll = self.get_authored_poll(poll_id, editor_id).await?;

        let cleaned = UpdatePollForm::from(request).clean(today())?;
        poll.activate = cleaned.activate;
        poll.enddate = cleaned.enddate;

        let poll = self.poll_repo.update_poll(&poll).await?;
        info!("Updated poll {}: activate={}, enddate={:?}", poll.id, poll.activate, poll.enddate);

        let choices = self.poll_repo.get_choices(poll.id).await?;
        Ok(PollResponse::new(poll, choices))
    }

    pub async fn add_choice(&self, poll_id: Uuid, editor_id: Uuid, form: ChoiceForm) -> Result<Choice> {
        let poll = self.get_authored_poll(poll_id, editor_id).await?;
        let label = form.clean()?;

        let existing = self.poll_repo.get_choices(poll.id).await?;
        if existing.len() >= MAX_CHOICES {
            let mut errors = FieldErrors::new();
            errors.add("choice", format!("Un sondage ne peut pas avoir plus de {} choix.", MAX_CHOICES));
            return Err(AppError::FormErrors(errors));
        }

        let choice = Choice { id: Uuid::new_v4(), poll_id: poll.id, choice: label };
        self.poll_repo.add_choice(&choice).await
    }

    pub async fn get_poll(&self, poll_id: Uuid) -> Result<PollResponse> {
        let poll = self.find_poll(poll_id).await?;
        let choices = self.poll_repo.get_choices(poll.id).await?;
        Ok(PollResponse::new(poll, choices))
    }

    pub async fn list_polls(&self) -> Result<Vec<PollResponse>> {
        let polls = self.poll_repo.list_polls().await?;
        let mut responses = Vec::with_capacity(polls.len());
        for poll in polls {
            let choices = self.poll_repo.get_choices(poll.id).await?;
            responses.push(PollResponse::new(poll, choices));
        }
        Ok(responses)
    }

    async fn find_poll(&self, poll_id: Uuid) -> Result<Poll> {
        self.poll_repo
            .get_poll_by_id(poll_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Poll {} not found", poll_id)))
    }

    async fn get_authored_poll(&self, poll_id: Uuid, editor_id: Uuid) -> Result<Poll> {
        let poll = self.find_poll(poll_id).await?;
        if poll.author_id != editor_id {
            return Err(AppError::Forbidden("Only the poll author can edit it".to_string()));
        }
        Ok(poll)
    }
}
