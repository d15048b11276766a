pub mod repository;

use std::sync::Arc;
use tracing::info;

use crate::config::AppConfig;
use repository::{
    ContentRepository, InMemoryContentRepository, InMemoryPollRepository, InMemoryVoteRepository,
    PollRepository, VoteRepository,
};

// Storage handles shared by the services
#[derive(Clone)]
pub struct DatabaseClient {
    pub poll_repo: Arc<dyn PollRepository>,
    pub vote_repo: Arc<dyn VoteRepository>,
    pub content_repo: Arc<dyn ContentRepository>,
}

impl DatabaseClient {
    pub async fn new(_config: &AppConfig) -> crate::Result<Self> {
        info!("Using in-memory poll, vote and content repositories");
        Ok(Self::in_memory())
    }

    pub fn in_memory() -> Self {
        Self {
            poll_repo: Arc::new(InMemoryPollRepository::new()),
            vote_repo: Arc::new(InMemoryVoteRepository::new()),
            content_repo: Arc::new(InMemoryContentRepository::new()),
        }
    }
}
