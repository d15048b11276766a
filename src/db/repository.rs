// Repository trait abstractions for storage operations
use crate::models::{Article, Chapter, Choice, Part, Poll, Tutorial, Vote};
use crate::{AppError, Result};
use uuid::Uuid;
use async_trait::async_trait;

#[async_trait]
pub trait PollRepository: Send + Sync {
    async fn create_poll(&self, poll: &Poll, choices: &[Choice]) -> Result<Poll>;
    async fn get_poll_by_id(&self, id: Uuid) -> Result<Option<Poll>>;
    async fn list_polls(&self) -> Result<Vec<Poll>>;
    async fn update_poll(&self, poll: &Poll) -> Result<Poll>;
    async fn add_choice(&self, choice: &Choice) -> Result<Choice>;
    /// Choices of a poll in creation order
    async fn get_choices(&self, poll_id: Uuid) -> Result<Vec<Choice>>;
}

#[async_trait]
pub trait VoteRepository: Send + Sync {
    /// Store a vote, replacing any earlier vote of the same user on the same poll
    async fn save_vote(&self, vote: &Vote) -> Result<Vote>;
    async fn get_user_vote(&self, poll_id: Uuid, user_id: Uuid) -> Result<Option<Vote>>;
    async fn get_votes(&self, poll_id: Uuid) -> Result<Vec<Vote>>;
}

#[async_trait]
pub trait ContentRepository: Send + Sync {
    async fn save_article(&self, article: &Article) -> Result<Article>;
    async fn get_article(&self, pk: Uuid) -> Result<Option<Article>>;
    async fn save_tutorial(&self, tutorial: &Tutorial) -> Result<Tutorial>;
    async fn get_tutorial(&self, pk: Uuid) -> Result<Option<Tutorial>>;
    async fn get_part(&self, pk: Uuid) -> Result<Option<Part>>;
    async fn get_chapter(&self, pk: Uuid) -> Result<Option<Chapter>>;
}

// In-memory implementations backing the service until relational storage lands
use std::sync::{Arc, Mutex, MutexGuard};
use std::collections::HashMap;

fn lock<T>(mutex: &Mutex<T>) -> Result<MutexGuard<'_, T>> {
    mutex
        .lock()
        .map_err(|e| AppError::DatabaseError(format!("In-memory store poisoned: {}", e)))
}

#[derive(Default)]
pub struct InMemoryPollRepository {
    polls: Arc<Mutex<HashMap<Uuid, Poll>>>, // id -> Poll
    choices: Arc<Mutex<HashMap<Uuid, Vec<Choice>>>>, // poll id -> choices
}

#[derive(Default)]
pub struct InMemoryVoteRepository {
    votes: Arc<Mutex<HashMap<(Uuid, Uuid), Vote>>>, // (poll id, user id) -> Vote
}

#[derive(Default)]
pub struct InMemoryContentRepository {
    articles: Arc<Mutex<HashMap<Uuid, Article>>>,
    tutorials: Arc<Mutex<HashMap<Uuid, Tutorial>>>,
}

impl InMemoryPollRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PollRepository for InMemoryPollRepository {
    async fn create_poll(&self, poll: &Poll, choices: &[Choice]) -> Result<Poll> {
        let mut polls = lock(&self.polls)?;
        let mut stored_choices = lock(&self.choices)?;

        if polls.contains_key(&poll.id) {
            return Err(AppError::DatabaseError(format!("Poll {} already exists", poll.id)));
        }
        polls.insert(poll.id, poll.clone());
        stored_choices.insert(poll.id, choices.to_vec());

        Ok(poll.clone())
    }

    async fn get_poll_by_id(&self, id: Uuid) -> Result<Option<Poll>> {
        let polls = lock(&self.polls)?;
        Ok(polls.get(&id).cloned())
    }

    async fn list_polls(&self) -> Result<Vec<Poll>> {
        let polls = lock(&self.polls)?;
        let mut all: Vec<Poll> = polls.values().cloned().collect();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(all)
    }

    async fn update_poll(&self, poll: &Poll) -> Result<Poll> {
        let mut polls = lock(&self.polls)?;
        match polls.get_mut(&poll.id) {
            Some(existing) => {
                *existing = poll.clone();
                Ok(poll.clone())
            }
            None => Err(AppError::NotFound(format!("Poll {} not found", poll.id))),
        }
    }

    async fn add_choice(&self, choice: &Choice) -> Result<Choice> {
        let mut choices = lock(&self.choices)?;
        let poll_choices = choices
            .get_mut(&choice.poll_id)
            .ok_or_else(|| AppError::NotFound(format!("Poll {} not found", choice.poll_id)))?;
        poll_choices.push(choice.clone());
        Ok(choice.clone())
    }

    async fn get_choices(&self, poll_id: Uuid) -> Result<Vec<Choice>> {
        let choices = lock(&self.choices)?;
        Ok(choices.get(&poll_id).cloned().unwrap_or_default())
    }
}

impl InMemoryVoteRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl VoteRepository for InMemoryVoteRepository {
    async fn save_vote(&self, vote: &Vote) -> Result<Vote> {
        let mut votes = lock(&self.votes)?;
        votes.insert((vote.poll_id(), vote.user_id()), vote.clone());
        Ok(vote.clone())
    }

    async fn get_user_vote(&self, poll_id: Uuid, user_id: Uuid) -> Result<Option<Vote>> {
        let votes = lock(&self.votes)?;
        Ok(votes.get(&(poll_id, user_id)).cloned())
    }

    async fn get_votes(&self, poll_id: Uuid) -> Result<Vec<Vote>> {
        let votes = lock(&self.votes)?;
        Ok(votes
            .iter()
            .filter(|((poll, _), _)| *poll == poll_id)
            .map(|(_, vote)| vote.clone())
            .collect())
    }
}

impl InMemoryContentRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ContentRepository for InMemoryContentRepository {
    async fn save_article(&self, article: &Article) -> Result<Article> {
        let mut articles = lock(&self.articles)?;
        articles.insert(article.pk, article.clone());
        Ok(article.clone())
    }

    async fn get_article(&self, pk: Uuid) -> Result<Option<Article>> {
        let articles = lock(&self.articles)?;
        Ok(articles.get(&pk).cloned())
    }

    async fn save_tutorial(&self, tutorial: &Tutorial) -> Result<Tutorial> {
        let mut tutorials = lock(&self.tutorials)?;
        tutorials.insert(tutorial.pk, tutorial.clone());
        Ok(tutorial.clone())
    }

    async fn get_tutorial(&self, pk: Uuid) -> Result<Option<Tutorial>> {
        let tutorials = lock(&self.tutorials)?;
        Ok(tutorials.get(&pk).cloned())
    }

    async fn get_part(&self, pk: Uuid) -> Result<Option<Part>> {
        let tutorials = lock(&self.tutorials)?;
        Ok(tutorials.values().find_map(|t| t.find_part(pk)).cloned())
    }

    async fn get_chapter(&self, pk: Uuid) -> Result<Option<Chapter>> {
        let tutorials = lock(&self.tutorials)?;
        Ok(tutorials.values().find_map(|t| t.find_chapter(pk)).cloned())
    }
}
