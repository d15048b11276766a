use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A ballot on a single-choice poll
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UniqueVote {
    pub poll_id: Uuid,
    pub user_id: Uuid,
    pub choice_id: Uuid,
    pub created_at: DateTime<Utc>,
}

/// A ballot on a multiple-choice poll; may select no choice at all
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultipleVote {
    pub poll_id: Uuid,
    pub user_id: Uuid,
    pub choice_ids: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
}

/// One user's vote on one poll
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Vote {
    Unique(UniqueVote),
    Multiple(MultipleVote),
}

impl Vote {
    pub fn poll_id(&self) -> Uuid {
        match self {
            Vote::Unique(vote) => vote.poll_id,
            Vote::Multiple(vote) => vote.poll_id,
        }
    }

    pub fn user_id(&self) -> Uuid {
        match self {
            Vote::Unique(vote) => vote.user_id,
            Vote::Multiple(vote) => vote.user_id,
        }
    }

    /// Choices selected by this ballot
    pub fn choice_ids(&self) -> Vec<Uuid> {
        match self {
            Vote::Unique(vote) => vec![vote.choice_id],
            Vote::Multiple(vote) => vote.choice_ids.clone(),
        }
    }
}

/// Raw vote submission; `choice` feeds unique ballots, `choices` multiple ones
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CastVoteRequest {
    #[serde(default)]
    pub choice: Option<Uuid>,
    #[serde(default)]
    pub choices: Vec<Uuid>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChoiceResult {
    pub choice_id: Uuid,
    pub choice: String,
    pub votes: usize,
    /// Voter ids, withheld for anonymous polls
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voters: Option<Vec<Uuid>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PollResults {
    pub poll_id: Uuid,
    pub title: String,
    pub total_voters: usize,
    pub choices: Vec<ChoiceResult>,
}
