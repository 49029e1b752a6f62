use std::collections::HashMap;

use serde::{Deserialize, Deserializer, Serialize};

use crate::ResponseValue;

/// Error type for response access operations.
#[derive(Debug, thiserror::Error)]
pub enum ResponseError {
    #[error("Missing answer for question: {0}")]
    MissingAnswer(String),

    #[error("Type mismatch for question '{question}': expected {expected}, got {actual}")]
    TypeMismatch {
        question: String,
        expected: &'static str,
        actual: &'static str,
    },
}

/// Answers collected while filling out a survey.
///
/// Answers are keyed by question text. Two fields sharing the same question
/// text share one answer: the last write wins.
///
/// In answer files a `null` answer is the same as a missing one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Responses {
    #[serde(deserialize_with = "answered_only")]
    values: HashMap<String, ResponseValue>,
}

fn answered_only<'de, D>(deserializer: D) -> Result<HashMap<String, ResponseValue>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = HashMap::<String, Option<ResponseValue>>::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .filter_map(|(question, value)| value.map(|value| (question, value)))
        .collect())
}

impl Responses {
    /// Create a new empty responses collection.
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
        }
    }

    /// Record the answer to a question, replacing any earlier answer.
    pub fn insert(&mut self, question: impl Into<String>, value: impl Into<ResponseValue>) {
        self.values.insert(question.into(), value.into());
    }

    /// Get the answer to a question.
    pub fn get(&self, question: &str) -> Option<&ResponseValue> {
        self.values.get(question)
    }

    /// Check if a question has been answered.
    pub fn contains(&self, question: &str) -> bool {
        self.values.contains_key(question)
    }

    /// Remove the answer to a question.
    pub fn remove(&mut self, question: &str) -> Option<ResponseValue> {
        self.values.remove(question)
    }

    /// Tick or untick one option of a multi-select answer.
    ///
    /// A ticked option is appended, so the selection keeps click order.
    /// Any non-selection answer already stored is replaced.
    pub fn toggle_option(&mut self, question: &str, option: &str) {
        let entry = self
            .values
            .entry(question.to_string())
            .or_insert_with(|| ResponseValue::Selection(Vec::new()));
        if !matches!(entry, ResponseValue::Selection(_)) {
            *entry = ResponseValue::Selection(Vec::new());
        }
        if let ResponseValue::Selection(items) = entry {
            if items.iter().any(|item| item == option) {
                items.retain(|item| item != option);
            } else {
                items.push(option.to_string());
            }
        }
    }

    /// Get an iterator over all question-answer pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &ResponseValue)> {
        self.values.iter()
    }

    /// Get the number of answers.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if there are no answers.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    // === Convenience accessors ===

    /// Get a text answer.
    pub fn get_text(&self, question: &str) -> Result<&str, ResponseError> {
        match self.get(question) {
            Some(ResponseValue::Text(s)) => Ok(s),
            Some(other) => Err(ResponseError::TypeMismatch {
                question: question.to_string(),
                expected: "Text",
                actual: other.type_name(),
            }),
            None => Err(ResponseError::MissingAnswer(question.to_string())),
        }
    }

    /// Get a number answer.
    pub fn get_number(&self, question: &str) -> Result<f64, ResponseError> {
        match self.get(question) {
            Some(ResponseValue::Number(n)) => Ok(*n),
            Some(other) => Err(ResponseError::TypeMismatch {
                question: question.to_string(),
                expected: "Number",
                actual: other.type_name(),
            }),
            None => Err(ResponseError::MissingAnswer(question.to_string())),
        }
    }

    /// Get the selected options of a multi-select answer.
    pub fn get_selection(&self, question: &str) -> Result<&[String], ResponseError> {
        match self.get(question) {
            Some(ResponseValue::Selection(items)) => Ok(items),
            Some(other) => Err(ResponseError::TypeMismatch {
                question: question.to_string(),
                expected: "Selection",
                actual: other.type_name(),
            }),
            None => Err(ResponseError::MissingAnswer(question.to_string())),
        }
    }

    /// Check if a question has an answer that is not empty.
    pub fn has_value(&self, question: &str) -> bool {
        self.get(question).is_some_and(|value| !value.is_empty())
    }
}

impl IntoIterator for Responses {
    type Item = (String, ResponseValue);
    type IntoIter = std::collections::hash_map::IntoIter<String, ResponseValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<'a> IntoIterator for &'a Responses {
    type Item = (&'a String, &'a ResponseValue);
    type IntoIter = std::collections::hash_map::Iter<'a, String, ResponseValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}
