use serde::{Deserialize, Serialize};

/// An opaque reference to a file picked by the respondent.
///
/// Only the name and size are kept; the contents are never read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRef {
    /// File name as reported by the picker.
    pub name: String,

    /// Size in bytes, if known.
    #[serde(default)]
    pub size: u64,
}

impl FileRef {
    pub fn new(name: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            size,
        }
    }
}

/// A single answer collected for a field.
///
/// This is the value stored in `Responses` for each answered question.
/// In answer files the shape decides the variant: a string, a number,
/// a list of strings or a `{ "name": .., "size": .. }` object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResponseValue {
    /// Text answer (text, textarea, date, email fields and the chosen radio option).
    Text(String),

    /// A number typed into a number field.
    Number(f64),

    /// The options ticked on a checkbox field, in the order they were ticked.
    Selection(Vec<String>),

    /// A picked file.
    File(FileRef),
}

impl ResponseValue {
    /// Check if this answer counts as "not answered".
    ///
    /// Empty text and an empty selection are empty. A number is never empty,
    /// so `0` is a valid answer to a required number field.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Text(s) => s.is_empty(),
            Self::Selection(items) => items.is_empty(),
            Self::Number(_) | Self::File(_) => false,
        }
    }

    /// Get the type name of this value for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Text(_) => "Text",
            Self::Number(_) => "Number",
            Self::Selection(_) => "Selection",
            Self::File(_) => "File",
        }
    }
}

impl From<String> for ResponseValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for ResponseValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<f64> for ResponseValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<i64> for ResponseValue {
    fn from(n: i64) -> Self {
        Self::Number(n as f64)
    }
}

impl From<i32> for ResponseValue {
    fn from(n: i32) -> Self {
        Self::Number(f64::from(n))
    }
}

impl From<Vec<String>> for ResponseValue {
    fn from(items: Vec<String>) -> Self {
        Self::Selection(items)
    }
}

impl From<Vec<&str>> for ResponseValue {
    fn from(items: Vec<&str>) -> Self {
        Self::Selection(items.into_iter().map(str::to_string).collect())
    }
}

impl From<FileRef> for ResponseValue {
    fn from(file: FileRef) -> Self {
        Self::File(file)
    }
}
