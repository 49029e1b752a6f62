//! Submission rules applied when a respondent submits a filled-out survey.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::{Field, FieldKind, ResponseValue, Responses, Survey};

/// Message shown once a submission passes every rule.
pub const SUCCESS_MESSAGE: &str = "Survey completed successfully!";

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern is valid"));

/// A rule a single answer failed. At most one is reported per field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("This question is required")]
    Required,

    #[error("Please enter a valid email address")]
    InvalidEmail,
}

/// Check one answer against its field.
///
/// A required field fails when it has no answer or an empty one. An email
/// field with a non-empty answer fails when it doesn't look like an address.
pub fn validate_field(field: &Field, value: Option<&ResponseValue>) -> Result<(), ValidationError> {
    let answered = value.is_some_and(|v| !v.is_empty());
    if field.required() && !answered {
        return Err(ValidationError::Required);
    }
    if field.kind() == FieldKind::Email
        && let Some(ResponseValue::Text(text)) = value
        && !text.is_empty()
        && !EMAIL_PATTERN.is_match(text)
    {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(())
}

/// Failed rules from one submission, keyed by question text.
///
/// Fields sharing a question text share one entry; the later field's error wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: HashMap<String, ValidationError>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error for a question, replacing any earlier one.
    pub fn insert(&mut self, question: impl Into<String>, error: ValidationError) {
        self.errors.insert(question.into(), error);
    }

    /// Get the error recorded for a question.
    pub fn get(&self, question: &str) -> Option<ValidationError> {
        self.errors.get(question).copied()
    }

    /// Get the error to show next to a field.
    pub fn for_field(&self, field: &Field) -> Option<ValidationError> {
        self.get(field.question())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &ValidationError)> {
        self.errors.iter()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

impl std::fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut entries: Vec<_> = self.errors.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        for (i, (question, error)) in entries.into_iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{question}: {error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for FieldErrors {}

/// Proof that a submission passed every rule.
#[derive(Debug, Clone, PartialEq)]
pub struct Submitted {
    /// The answers that were accepted.
    pub responses: Responses,
}

impl Submitted {
    /// The message to show the respondent.
    pub fn message(&self) -> &'static str {
        SUCCESS_MESSAGE
    }
}

/// Check every field of a survey against the collected answers.
pub fn validate_all(survey: &Survey, responses: &Responses) -> FieldErrors {
    let mut errors = FieldErrors::new();
    for field in survey.fields() {
        if let Err(error) = validate_field(field, responses.get(field.question())) {
            errors.insert(field.question(), error);
        }
    }
    errors
}

/// Submit a filled-out survey. Succeeds only when no field has an error.
pub fn submit(survey: &Survey, responses: &Responses) -> Result<Submitted, FieldErrors> {
    let errors = validate_all(survey, responses);
    if errors.is_empty() {
        tracing::info!(title = %survey.title, answers = responses.len(), "survey submitted");
        Ok(Submitted {
            responses: responses.clone(),
        })
    } else {
        tracing::info!(title = %survey.title, errors = errors.len(), "submission rejected");
        Err(errors)
    }
}
