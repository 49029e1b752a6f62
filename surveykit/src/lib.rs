//! # surveykit
//!
//! Build surveys, save them as JSON, load them back and fill them out.
//!
//! A [`Survey`] is a title, a description and an ordered list of typed
//! [`Field`]s. This crate provides everything that operates on one:
//!
//! - [`Editor`] and [`Edit`] - authoring operations with undo/redo
//! - [`serialize`], [`deserialize`] and [`import`] - the JSON document format
//! - [`validate_field`], [`submit`] and [`FormSession`] - submission rules
//! - [`TestBackend`] - canned answers for testing
//!
//! ## Usage
//!
//! ```rust
//! use surveykit::{Editor, FieldKind, TestBackend};
//!
//! let mut editor = Editor::new();
//! editor.set_title("Team lunch")?;
//! editor.set_question(0, "Your name")?;
//! editor.set_required(0, true)?;
//! editor.add_field(FieldKind::Radio)?;
//! editor.set_question(1, "Pizza or sushi?")?;
//! editor.update_option(1, 0, "Pizza")?;
//! editor.add_option(1)?;
//! editor.update_option(1, 1, "Sushi")?;
//!
//! let bytes = editor.export()?;
//! let survey = surveykit::deserialize(&bytes)?;
//!
//! let backend = TestBackend::new()
//!     .with_text("Your name", "Ada")
//!     .with_text("Pizza or sushi?", "Sushi");
//! let submitted = surveykit::run(&backend, &survey)?;
//! println!("{}", submitted.message());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Backends
//!
//! Backends are separate crates that implement `FormBackend`:
//! - `surveykit-wizard-dialoguer` - CLI prompts via dialoguer
//! - `surveykit-doc-html` - a fillable HTML document

// Re-export all types from surveykit-types
pub use surveykit_types::*;

mod codec;
pub use codec::{CDN_SURVEY_MARKER, ImportOptions, deserialize, import, serialize};

mod editor;
pub use editor::{Edit, EditError, Editor, EditorOptions};

mod validate;
pub use validate::{
    FieldErrors, SUCCESS_MESSAGE, Submitted, ValidationError, submit, validate_all,
    validate_field,
};

mod session;
pub use session::FormSession;

// Test backend for filling out surveys without user interaction
mod test_backend;
pub use test_backend::{TestBackend, TestBackendError};

/// Error type for [`run`].
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    /// The backend failed or the respondent cancelled.
    #[error(transparent)]
    Survey(#[from] SurveyError),

    /// The collected answers broke at least one rule.
    #[error("Submission failed:\n{0}")]
    Invalid(FieldErrors),
}

/// Collect answers with a backend, then submit them.
pub fn run<B: FormBackend>(backend: &B, survey: &Survey) -> Result<Submitted, RunError> {
    let responses = backend.collect(survey).map_err(SurveyError::backend)?;
    submit(survey, &responses).map_err(RunError::Invalid)
}
