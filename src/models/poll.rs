use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{AppError, Result};

/// Stored key of single-choice polls
pub const UNIQUE_VOTE_KEY: &str = "u";
/// Stored key of multiple-choice polls
pub const MULTIPLE_VOTE_KEY: &str = "m";

/// Fewest choices a poll may be created with
pub const MIN_CHOICES: usize = 2;
/// Most choices a poll may ever hold
pub const MAX_CHOICES: usize = 20;

/// Ballot mode of a poll
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoteType {
    Unique,
    Multiple,
}

impl VoteType {
    pub fn from_key(key: &str) -> Result<Self> {
        match key {
            UNIQUE_VOTE_KEY => Ok(VoteType::Unique),
            MULTIPLE_VOTE_KEY => Ok(VoteType::Multiple),
            other => Err(AppError::UnknownVoteType(other.to_string())),
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            VoteType::Unique => UNIQUE_VOTE_KEY,
            VoteType::Multiple => MULTIPLE_VOTE_KEY,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            VoteType::Unique => "Vote unique",
            VoteType::Multiple => "Vote multiple",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Poll {
    pub id: Uuid,
    pub author_id: Uuid,
    pub title: String,
    pub anonymous_vote: bool,
    /// Last day on which votes are accepted; `None` keeps the poll open
    pub enddate: Option<NaiveDate>,
    /// Persisted ballot mode key, see [`VoteType::from_key`]
    pub type_vote: String,
    pub activate: bool,
    pub created_at: DateTime<Utc>,
}

impl Poll {
    pub fn vote_type(&self) -> Result<VoteType> {
        VoteType::from_key(&self.type_vote)
    }

    pub fn is_open(&self, today: NaiveDate) -> bool {
        self.activate && self.enddate.map_or(true, |end| end >= today)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    pub id: Uuid,
    pub poll_id: Uuid,
    pub choice: String,
}

/// Request body for poll creation: the poll fields plus its inline choices
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreatePollRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub anonymous_vote: bool,
    #[serde(default)]
    pub enddate: Option<NaiveDate>,
    #[serde(default)]
    pub type_vote: String,
    #[serde(default)]
    pub choices: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdatePollRequest {
    #[serde(default)]
    pub activate: bool,
    #[serde(default)]
    pub enddate: Option<NaiveDate>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateChoiceRequest {
    pub choice: String,
}

#[derive(Debug, Serialize)]
pub struct PollResponse {
    pub id: Uuid,
    pub author_id: Uuid,
    pub title: String,
    pub anonymous_vote: bool,
    pub enddate: Option<NaiveDate>,
    pub type_vote: String,
    pub activate: bool,
    pub created_at: DateTime<Utc>,
    pub choices: Vec<Choice>,
}

impl PollResponse {
    pub fn new(poll: Poll, choices: Vec<Choice>) -> Self {
        Self {
            id: poll.id,
            author_id: poll.author_id,
            title: poll.title,
            anonymous_vote: poll.anonymous_vote,
            enddate: poll.enddate,
            type_vote: poll.type_vote,
            activate: poll.activate,
            created_at: poll.created_at,
            choices,
        }
    }
}
