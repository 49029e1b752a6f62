/// Error type for survey document and collection operations.
#[derive(Debug, thiserror::Error)]
pub enum SurveyError {
    /// The document bytes are not valid JSON.
    #[error("Invalid JSON format: {0}")]
    Format(#[source] serde_json::Error),

    /// The document is valid JSON but not a valid survey
    /// (unknown field type, choice field without options, mistyped attribute).
    #[error("Invalid survey document: {0}")]
    Structural(#[source] serde_json::Error),

    /// The file name does not carry the marker required before import.
    #[error("Invalid file '{file_name}': expected a JSON file with '{marker}' in its name")]
    Provenance { file_name: String, marker: String },

    /// A survey cannot be created or exported without a title.
    #[error("Survey title is required")]
    MissingTitle,

    /// The document could not be encoded.
    #[error("Failed to encode survey: {0}")]
    Encode(#[source] serde_json::Error),

    /// User cancelled filling out the survey (Ctrl+C, closed window, etc.)
    #[error("Survey cancelled by user")]
    Cancelled,

    /// Backend-specific failure (I/O, terminal crash, etc.)
    #[error("Backend error: {0}")]
    Backend(#[from] anyhow::Error),
}

impl SurveyError {
    /// Create a backend error from any error type.
    ///
    /// A backend that already reports a `SurveyError` (such as `Cancelled`)
    /// keeps it instead of being wrapped a second time.
    pub fn backend(err: impl Into<anyhow::Error>) -> Self {
        match err.into().downcast::<SurveyError>() {
            Ok(err) => err,
            Err(other) => Self::Backend(other),
        }
    }

    /// Check if this error represents user cancellation.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}
