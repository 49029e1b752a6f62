//! The survey document format: pretty-printed UTF-8 JSON.
//!
//! ```text
//! { "title": string, "description": string, "formFields": [ Field, ... ] }
//! ```

use crate::{Survey, SurveyError};

/// The marker one deployment requires in the name of every imported file.
pub const CDN_SURVEY_MARKER: &str = "cdn-survey";

/// Encode a survey as pretty-printed JSON, preserving field order.
pub fn serialize(survey: &Survey) -> Result<Vec<u8>, SurveyError> {
    serde_json::to_vec_pretty(survey).map_err(SurveyError::Encode)
}

/// Decode a survey document.
///
/// Fails with [`SurveyError::Format`] if the bytes are not JSON and with
/// [`SurveyError::Structural`] if the JSON is not a survey: an unknown field
/// type, a radio or checkbox field without options, a missing attribute.
/// Nothing is returned for a document that fails either check.
pub fn deserialize(bytes: &[u8]) -> Result<Survey, SurveyError> {
    let value: serde_json::Value = serde_json::from_slice(bytes).map_err(SurveyError::Format)?;
    serde_json::from_value(value).map_err(SurveyError::Structural)
}

/// Options for importing a survey file.
#[derive(Debug, Clone, Default)]
pub struct ImportOptions {
    /// Substring the file name must contain before the file is parsed.
    ///
    /// This is a guard against picking the wrong file, not an integrity check.
    pub marker: Option<String>,
}

impl ImportOptions {
    /// Create options that accept any file name.
    pub fn new() -> Self {
        Self::default()
    }

    /// Require a marker in the file name.
    pub fn with_marker(mut self, marker: impl Into<String>) -> Self {
        self.marker = Some(marker.into());
        self
    }

    /// Check a file name against the configured marker.
    pub fn check_file_name(&self, file_name: &str) -> Result<(), SurveyError> {
        match &self.marker {
            Some(marker) if !file_name.contains(marker.as_str()) => Err(SurveyError::Provenance {
                file_name: file_name.to_string(),
                marker: marker.clone(),
            }),
            _ => Ok(()),
        }
    }
}

/// Import a picked file: check its name, then decode its contents.
pub fn import(
    file_name: &str,
    bytes: &[u8],
    options: &ImportOptions,
) -> Result<Survey, SurveyError> {
    let result = options
        .check_file_name(file_name)
        .and_then(|()| deserialize(bytes));
    match &result {
        Ok(survey) => tracing::info!(
            file = file_name,
            title = %survey.title,
            fields = survey.len(),
            "imported survey"
        ),
        Err(err) => tracing::warn!(file = file_name, error = %err, "rejected survey import"),
    }
    result
}
