use serde::Deserialize;

use super::FieldErrors;
use crate::models::poll::{MAX_CHOICES, MIN_CHOICES};

pub const CHOICE_EMPTY_MESSAGE: &str = "Le champ choix ne peut être vide";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChoiceForm {
    pub choice: String,
}

impl ChoiceForm {
    pub fn new(choice: impl Into<String>) -> Self {
        Self { choice: choice.into() }
    }

    /// The trimmed label, or an error on `choice`
    pub fn clean(&self) -> Result<String, FieldErrors> {
        let choice = self.choice.trim();
        let mut errors = FieldErrors::new();
        if choice.is_empty() {
            errors.add("choice", CHOICE_EMPTY_MESSAGE);
        }
        errors.into_result(choice.to_string())
    }
}

/// Clean the inline choice set submitted along with a new poll.
///
/// Entry errors are keyed `choices.<index>.choice`; a set outside the allowed
/// size range gets an error on `choices`.
pub fn clean_choice_set(choices: &[String]) -> Result<Vec<String>, FieldErrors> {
    let mut errors = FieldErrors::new();

    if choices.len() < MIN_CHOICES {
        errors.add("choices", format!("Veuillez soumettre au moins {} choix.", MIN_CHOICES));
    } else if choices.len() > MAX_CHOICES {
        errors.add("choices", format!("Veuillez soumettre au plus {} choix.", MAX_CHOICES));
    }

    let mut cleaned = Vec::with_capacity(choices.len());
    for (index, raw) in choices.iter().enumerate() {
        match ChoiceForm::new(raw.as_str()).clean() {
            Ok(choice) => cleaned.push(choice),
            Err(entry_errors) => errors.merge_prefixed(&format!("choices.{}", index), entry_errors),
        }
    }

    errors.into_result(cleaned)
}
