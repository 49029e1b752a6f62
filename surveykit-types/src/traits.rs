use crate::{Responses, Survey};

/// Trait for renderers that present a survey and collect the respondent's answers.
///
/// Backends receive a `Survey` and return `Responses`. They decide how to
/// present each field (a terminal prompt, an HTML control, canned answers in
/// tests) by matching on the field's `Control`.
///
/// Submission rules are not a backend concern: answers are checked by the
/// caller once collection finishes.
pub trait FormBackend {
    /// The error type for this backend.
    type Error: Into<anyhow::Error>;

    /// Collect answers for a survey.
    ///
    /// # Returns
    /// * `Ok(responses)` once every field has been presented
    /// * `Err` on cancellation or backend failure
    fn collect(&self, survey: &Survey) -> Result<Responses, Self::Error>;
}
