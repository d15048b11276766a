//! Validation pipelines for user submissions.
//!
//! Each form is plain data with a `clean` function that either returns the
//! cleaned value or a [`FieldErrors`] map. A failed clean never yields a
//! partially cleaned value, so nothing invalid reaches a repository.

pub mod poll;
pub mod choice;
pub mod vote;

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

pub use poll::{PollForm, UpdatePollForm, CleanedPoll, CleanedPollUpdate};
pub use choice::{ChoiceForm, clean_choice_set};
pub use vote::{get_vote_form, VoteForm, UniqueVoteForm, MultipleVoteForm, VoteSelection};

pub const REQUIRED_MESSAGE: &str = "Ce champ est obligatoire.";

/// User-facing validation messages keyed by field name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    pub fn merge(&mut self, other: FieldErrors) {
        for (field, messages) in other.0 {
            self.0.entry(field).or_default().extend(messages);
        }
    }

    /// Absorb another form's errors, prefixing their field names
    pub fn merge_prefixed(&mut self, prefix: &str, other: FieldErrors) {
        for (field, messages) in other.0 {
            self.0
                .entry(format!("{}.{}", prefix, field))
                .or_default()
                .extend(messages);
        }
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    pub fn has(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// `Ok(value)` when no error was recorded
    pub fn into_result<T>(self, value: T) -> Result<T, FieldErrors> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self
            .0
            .iter()
            .map(|(field, messages)| format!("{}: {}", field, messages.join(" ")))
            .collect();
        write!(f, "{}", rendered.join("; "))
    }
}
