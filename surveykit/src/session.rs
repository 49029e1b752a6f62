use crate::validate::{FieldErrors, Submitted, submit};
use crate::{Field, ResponseValue, Responses, Survey};

/// A respondent filling out one survey.
///
/// Holds the answers given so far and the errors from the last submission.
/// Answers are discarded with the session; nothing here is persisted.
#[derive(Debug, Clone)]
pub struct FormSession {
    survey: Survey,
    responses: Responses,
    errors: FieldErrors,
    submitted: bool,
}

impl FormSession {
    /// Start filling out a survey.
    pub fn new(survey: Survey) -> Self {
        Self {
            survey,
            responses: Responses::new(),
            errors: FieldErrors::new(),
            submitted: false,
        }
    }

    pub fn survey(&self) -> &Survey {
        &self.survey
    }

    pub fn responses(&self) -> &Responses {
        &self.responses
    }

    /// Errors from the last submission attempt.
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Check if the last submission attempt succeeded.
    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    /// Record the answer for a field's question.
    pub fn answer(&mut self, field: &Field, value: impl Into<ResponseValue>) {
        self.responses.insert(field.question(), value);
    }

    /// Tick or untick an option of a multi-select field.
    pub fn toggle(&mut self, field: &Field, option: &str) {
        self.responses.toggle_option(field.question(), option);
    }

    /// Forget the answer for a field's question.
    pub fn clear(&mut self, field: &Field) {
        self.responses.remove(field.question());
    }

    /// Check every field and submit if nothing fails.
    ///
    /// Errors from an earlier attempt are dropped first, so only the current
    /// problems are reported.
    pub fn submit(&mut self) -> Result<Submitted, &FieldErrors> {
        self.errors = FieldErrors::new();
        self.submitted = false;
        match submit(&self.survey, &self.responses) {
            Ok(submitted) => {
                self.submitted = true;
                Ok(submitted)
            }
            Err(errors) => {
                self.errors = errors;
                Err(&self.errors)
            }
        }
    }
}
