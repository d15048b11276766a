use std::sync::Arc;
use uuid::Uuid;
use chrono::Utc;
use tracing::info;

use crate::db::repository::{PollRepository, VoteRepository};
use crate::forms::{get_vote_form, VoteForm, VoteSelection};
use crate::models::{CastVoteRequest, ChoiceResult, MultipleVote, Poll, PollResults, UniqueVote, Vote};
use crate::services::poll_service::today;
use crate::{AppError, Result};

/// Service for casting ballots on polls and tallying them
pub struct VoteService {
    poll_repo: Arc<dyn PollRepository>,
    vote_repo: Arc<dyn VoteRepository>,
}

impl VoteService {
    pub fn new(poll_repo: Arc<dyn PollRepository>, vote_repo: Arc<dyn VoteRepository>) -> Self {
        Self { poll_repo, vote_repo }
    }

    /// The ballot a user should fill for this poll, pre-filled with their current vote
    pub async fn vote_form_for(&self, poll_id: Uuid, user_id: Uuid) -> Result<VoteForm> {
        let poll = self.find_poll(poll_id).await?;
        self.build_form(&poll, user_id).await
    }

    /// Cast or replace a user's vote
    pub async fn cast_vote(&self, poll_id: Uuid, user_id: Uuid, request: CastVoteRequest) -> Result<Vote> {
        let poll = self.find_poll(poll_id).await?;

        if !poll.is_open(today()) {
            return Err(AppError::ValidationError("Ce sondage est clos".to_string()));
        }

        let form = self.build_form(&poll, user_id).await?;
        let vote = match form.clean(&request)? {
            VoteSelection::Unique(choice_id) => Vote::Unique(UniqueVote {
                poll_id,
                user_id,
                choice_id,
                created_at: Utc::now(),
            }),
            VoteSelection::Multiple(choice_ids) => Vote::Multiple(MultipleVote {
                poll_id,
                user_id,
                choice_ids,
                created_at: Utc::now(),
            }),
        };

        let vote = self.vote_repo.save_vote(&vote).await?;
        info!("Recorded {:?} vote on poll {}", form.vote_type(), poll_id);
        Ok(vote)
    }

    /// Per-choice tallies; voter ids are only disclosed on non-anonymous polls
    pub async fn get_results(&self, poll_id: Uuid) -> Result<PollResults> {
        let poll = self.find_poll(poll_id).await?;
        let choices = self.poll_repo.get_choices(poll_id).await?;
        let votes = self.vote_repo.get_votes(poll_id).await?;

        let choices = choices
            .into_iter()
            .map(|choice| {
                let mut voters: Vec<Uuid> = votes
                    .iter()
                    .filter(|vote| vote.choice_ids().contains(&choice.id))
                    .map(Vote::user_id)
                    .collect();
                voters.sort();
                ChoiceResult {
                    choice_id: choice.id,
                    choice: choice.choice,
                    votes: voters.len(),
                    voters: if poll.anonymous_vote { None } else { Some(voters) },
                }
            })
            .collect();

        Ok(PollResults {
            poll_id,
            title: poll.title,
            total_voters: votes.len(),
            choices,
        })
    }

    async fn build_form(&self, poll: &Poll, user_id: Uuid) -> Result<VoteForm> {
        let choices = self.poll_repo.get_choices(poll.id).await?;
        let existing = self.vote_repo.get_user_vote(poll.id, user_id).await?;
        get_vote_form(poll, choices, existing.as_ref())
    }

    async fn find_poll(&self, poll_id: Uuid) -> Result<Poll> {
        self.poll_repo
            .get_poll_by_id(poll_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Poll {} not found", poll_id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::{InMemoryPollRepository, InMemoryVoteRepository};
    use crate::models::Choice;

    struct Fixture {
        service: VoteService,
        poll_repo: Arc<InMemoryPollRepository>,
    }

    fn fixture() -> Fixture {
        let poll_repo = Arc::new(InMemoryPollRepository::new());
        let service = VoteService::new(poll_repo.clone(), Arc::new(InMemoryVoteRepository::new()));
        Fixture { service, poll_repo }
    }

    async fn seed(repo: &InMemoryPollRepository, type_vote: &str, anonymous_vote: bool) -> (Poll, Vec<Choice>) {
        let poll = Poll {
            id: Uuid::new_v4(),
            author_id: Uuid::new_v4(),
            title: "Meilleur IDE".to_string(),
            anonymous_vote,
            enddate: None,
            type_vote: type_vote.to_string(),
            activate: true,
            created_at: Utc::now(),
        };
        let choices: Vec<Choice> = ["vim", "emacs", "helix"]
            .iter()
            .map(|label| Choice { id: Uuid::new_v4(), poll_id: poll.id, choice: label.to_string() })
            .collect();
        repo.create_poll(&poll, &choices).await.unwrap();
        (poll, choices)
    }

    #[tokio::test]
    async fn test_revote_replaces_unique_vote() {
        let f = fixture();
        let (poll, choices) = seed(&f.poll_repo, "u", false).await;
        let voter = Uuid::new_v4();

        let first = CastVoteRequest { choice: Some(choices[0].id), choices: vec![] };
        f.service.cast_vote(poll.id, voter, first).await.unwrap();
        assert_eq!(f.service.vote_form_for(poll.id, voter).await.unwrap().button_label(), "Modifier mon vote");

        let second = CastVoteRequest { choice: Some(choices[2].id), choices: vec![] };
        f.service.cast_vote(poll.id, voter, second).await.unwrap();

        let results = f.service.get_results(poll.id).await.unwrap();
        assert_eq!(results.total_voters, 1);
        assert_eq!(results.choices[0].votes, 0);
        assert_eq!(results.choices[2].votes, 1);
        assert_eq!(results.choices[2].voters, Some(vec![voter]));
    }

    #[tokio::test]
    async fn test_multiple_vote_tally_and_anonymity() {
        let f = fixture();
        let (poll, choices) = seed(&f.poll_repo, "m", true).await;

        for _ in 0..2 {
            let ballot = CastVoteRequest { choice: None, choices: vec![choices[0].id, choices[1].id] };
            f.service.cast_vote(poll.id, Uuid::new_v4(), ballot).await.unwrap();
        }

        let results = f.service.get_results(poll.id).await.unwrap();
        assert_eq!(results.total_voters, 2);
        assert_eq!(results.choices[0].votes, 2);
        assert_eq!(results.choices[1].votes, 2);
        assert_eq!(results.choices[2].votes, 0);
        assert!(results.choices.iter().all(|c| c.voters.is_none()));
    }

    #[tokio::test]
    async fn test_closed_polls_refuse_votes() {
        let f = fixture();
        let (mut poll, choices) = seed(&f.poll_repo, "u", false).await;
        let ballot = CastVoteRequest { choice: Some(choices[0].id), choices: vec![] };

        poll.activate = false;
        f.poll_repo.update_poll(&poll).await.unwrap();
        let inactive = f.service.cast_vote(poll.id, Uuid::new_v4(), ballot.clone()).await;
        assert!(matches!(inactive, Err(AppError::ValidationError(_))));

        poll.activate = true;
        poll.enddate = today().pred_opt();
        f.poll_repo.update_poll(&poll).await.unwrap();
        let ended = f.service.cast_vote(poll.id, Uuid::new_v4(), ballot).await;
        assert!(matches!(ended, Err(AppError::ValidationError(_))));
    }

    #[tokio::test]
    async fn test_invalid_ballot_reports_field_errors() {
        let f = fixture();
        let (poll, _) = seed(&f.poll_repo, "u", false).await;

        let result = f.service.cast_vote(poll.id, Uuid::new_v4(), CastVoteRequest::default()).await;
        match result {
            Err(AppError::FormErrors(errors)) => assert!(errors.has("choice")),
            other => panic!("expected form errors, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_unknown_stored_vote_type() {
        let f = fixture();
        let (poll, _) = seed(&f.poll_repo, "?", false).await;

        let result = f.service.vote_form_for(poll.id, Uuid::new_v4()).await;
        assert!(matches!(result, Err(AppError::UnknownVoteType(_))));
    }
}
