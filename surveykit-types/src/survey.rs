use serde::{Deserialize, Serialize};

use crate::{Field, FieldKind, SurveyError};

/// A survey document: a title, a description and an ordered list of fields.
///
/// Field order is the order fields are edited and rendered in. It only
/// changes through explicit reordering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Survey {
    /// The survey title. Required before a survey can be created or exported.
    pub title: String,

    /// Optional free-form description shown under the title.
    #[serde(default)]
    pub description: String,

    /// All questions in the survey, in order.
    pub form_fields: Vec<Field>,
}

impl Survey {
    /// Create a survey with the given title and no fields.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Self, SurveyError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(SurveyError::MissingTitle);
        }
        Ok(Self {
            title,
            description: description.into(),
            form_fields: Vec::new(),
        })
    }

    /// The state a new editing session starts from: untitled, with one blank text field.
    pub fn blank() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            form_fields: vec![Field::new(FieldKind::Text)],
        }
    }

    /// Append a field.
    pub fn with_field(mut self, field: Field) -> Self {
        self.form_fields.push(field);
        self
    }

    /// Get the fields.
    pub fn fields(&self) -> &[Field] {
        &self.form_fields
    }

    /// Get a mutable reference to the fields.
    pub fn fields_mut(&mut self) -> &mut Vec<Field> {
        &mut self.form_fields
    }

    /// Get the field at `index`.
    pub fn field(&self, index: usize) -> Option<&Field> {
        self.form_fields.get(index)
    }

    /// Check if the survey has any fields.
    pub fn is_empty(&self) -> bool {
        self.form_fields.is_empty()
    }

    /// Get the number of fields.
    pub fn len(&self) -> usize {
        self.form_fields.len()
    }

    /// Check that the survey has a title, as required for export.
    pub fn ensure_titled(&self) -> Result<(), SurveyError> {
        if self.title.trim().is_empty() {
            Err(SurveyError::MissingTitle)
        } else {
            Ok(())
        }
    }

    /// File name to offer when saving: the title, or `survey` when untitled.
    ///
    /// Path separators and control characters become `-`, so the name never
    /// points outside the directory it is saved in.
    pub fn suggested_filename(&self) -> String {
        if self.title.is_empty() {
            return "survey.json".to_string();
        }
        let stem: String = self
            .title
            .chars()
            .map(|c| {
                if matches!(c, '/' | '\\') || c.is_control() {
                    '-'
                } else {
                    c
                }
            })
            .collect();
        format!("{stem}.json")
    }
}

impl Default for Survey {
    fn default() -> Self {
        Self::blank()
    }
}
