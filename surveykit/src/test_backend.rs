//! Test backend for filling out surveys without user interaction.
//!
//! `TestBackend` answers each field from a set of pre-defined answers keyed
//! by question text. This is useful for testing submission rules end to end.
//!
//! # Example
//!
//! ```rust
//! use surveykit::{Field, FieldKind, Survey, TestBackend};
//!
//! let survey = Survey::new("Contact", "")
//!     .unwrap()
//!     .with_field(Field::new(FieldKind::Email).with_question("Email").with_required(true));
//!
//! let submitted = surveykit::run(
//!     &TestBackend::new().with_text("Email", "ada@example.org"),
//!     &survey,
//! )
//! .unwrap();
//!
//! assert_eq!(submitted.responses.get_text("Email").unwrap(), "ada@example.org");
//! ```

use std::collections::HashMap;

use crate::{Control, FileRef, FormBackend, ResponseValue, Responses, Survey};

/// A test backend that returns pre-configured answers.
///
/// Questions without a configured answer are left unanswered, like a
/// respondent skipping them. With [`TestBackend::strict`] they are an error.
#[derive(Debug, Clone, Default)]
pub struct TestBackend {
    answers: HashMap<String, ResponseValue>,
    strict: bool,
}

/// Error type for TestBackend.
#[derive(Debug, thiserror::Error)]
pub enum TestBackendError {
    #[error("Missing answer for question: {0}")]
    MissingAnswer(String),

    #[error("Answer for '{question}' does not fit a {control} control")]
    WrongShape {
        question: String,
        control: &'static str,
    },
}

impl TestBackend {
    /// Create a new empty test backend.
    pub fn new() -> Self {
        Self {
            answers: HashMap::new(),
            strict: false,
        }
    }

    /// Fail on questions without a configured answer.
    pub fn strict(mut self) -> Self {
        self.strict = true;
        self
    }

    /// Add an answer for a question.
    pub fn with_response(
        mut self,
        question: impl Into<String>,
        value: impl Into<ResponseValue>,
    ) -> Self {
        self.answers.insert(question.into(), value.into());
        self
    }

    /// Add a text answer (also used for dates, emails and radio choices).
    pub fn with_text(self, question: impl Into<String>, value: impl Into<String>) -> Self {
        self.with_response(question, ResponseValue::Text(value.into()))
    }

    /// Add a number answer.
    pub fn with_number(self, question: impl Into<String>, value: f64) -> Self {
        self.with_response(question, ResponseValue::Number(value))
    }

    /// Add ticked options for a checkbox question.
    pub fn with_selection<I, S>(self, question: impl Into<String>, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let items = options.into_iter().map(Into::into).collect();
        self.with_response(question, ResponseValue::Selection(items))
    }

    /// Add a picked file.
    pub fn with_file(
        self,
        question: impl Into<String>,
        name: impl Into<String>,
        size: u64,
    ) -> Self {
        self.with_response(question, ResponseValue::File(FileRef::new(name, size)))
    }
}

impl FormBackend for TestBackend {
    type Error = TestBackendError;

    fn collect(&self, survey: &Survey) -> Result<Responses, Self::Error> {
        let mut responses = Responses::new();

        for field in survey.fields() {
            let question = field.question();
            let Some(value) = self.answers.get(question) else {
                if self.strict {
                    return Err(TestBackendError::MissingAnswer(question.to_string()));
                }
                continue;
            };

            let fits = match (field.control(), value) {
                (Control::MultiSelect(_), ResponseValue::Selection(_)) => true,
                (Control::FilePicker, ResponseValue::File(_)) => true,
                (Control::Number, ResponseValue::Number(_) | ResponseValue::Text(_)) => true,
                (
                    Control::SingleLine
                    | Control::MultiLine
                    | Control::SingleSelect(_)
                    | Control::Date
                    | Control::Email,
                    ResponseValue::Text(_),
                ) => true,
                _ => false,
            };
            if !fits {
                return Err(TestBackendError::WrongShape {
                    question: question.to_string(),
                    control: control_name(field.control()),
                });
            }

            responses.insert(question, value.clone());
        }

        Ok(responses)
    }
}

fn control_name(control: Control<'_>) -> &'static str {
    match control {
        Control::SingleLine => "single-line",
        Control::MultiLine => "multi-line",
        Control::SingleSelect(_) => "single-select",
        Control::MultiSelect(_) => "multi-select",
        Control::Date => "date",
        Control::Number => "number",
        Control::Email => "email",
        Control::FilePicker => "file picker",
    }
}
