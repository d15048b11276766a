pub mod poll;
pub mod vote;
pub mod content;

// Re-export models for convenience
pub use poll::{Poll, Choice, VoteType, PollResponse};
pub use vote::{Vote, UniqueVote, MultipleVote, CastVoteRequest, PollResults, ChoiceResult};
pub use content::{Article, Licence, Tutorial, TutorialBody, Part, Chapter, Extract};
