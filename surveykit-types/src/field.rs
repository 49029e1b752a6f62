use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The type of a field, as written in the `type` attribute of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    /// Single-line text input.
    Text,

    /// Multi-line text input.
    Textarea,

    /// Pick exactly one of the field's options.
    Radio,

    /// Pick any number of the field's options.
    Checkbox,

    /// Native date picker.
    Date,

    /// Native number input.
    Number,

    /// File picker.
    File,

    /// Native email input.
    Email,
}

impl FieldKind {
    /// Every field kind, in the order an editor offers them.
    pub const ALL: [FieldKind; 8] = [
        Self::Text,
        Self::Textarea,
        Self::Radio,
        Self::Checkbox,
        Self::Date,
        Self::Number,
        Self::File,
        Self::Email,
    ];

    /// The wire tag for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Textarea => "textarea",
            Self::Radio => "radio",
            Self::Checkbox => "checkbox",
            Self::Date => "date",
            Self::Number => "number",
            Self::File => "file",
            Self::Email => "email",
        }
    }

    /// Human readable name, used by editors when listing kinds.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Text => "Text Input",
            Self::Textarea => "Textarea",
            Self::Radio => "Radio Button",
            Self::Checkbox => "Checkbox",
            Self::Date => "Date Picker",
            Self::Number => "Number Input",
            Self::File => "File Upload",
            Self::Email => "Email Input",
        }
    }

    /// Check if fields of this kind carry an option list.
    pub fn has_options(&self) -> bool {
        matches!(self, Self::Radio | Self::Checkbox)
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a field kind from an unknown tag.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown field type '{0}'")]
pub struct UnknownFieldKind(pub String);

impl FromStr for FieldKind {
    type Err = UnknownFieldKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownFieldKind(s.to_string()))
    }
}

/// The input a field collects, carrying the extras specific to its kind.
///
/// Only the choice kinds own an option list, so a field can never hold
/// options it doesn't use or lack the options it needs.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldInput {
    Text,
    Textarea,
    Radio { options: Vec<String> },
    Checkbox { options: Vec<String> },
    Date,
    Number,
    File,
    Email,
}

impl FieldInput {
    /// Create the default input for a kind. Choice kinds start with one empty option.
    pub fn new(kind: FieldKind) -> Self {
        match kind {
            FieldKind::Text => Self::Text,
            FieldKind::Textarea => Self::Textarea,
            FieldKind::Radio => Self::Radio {
                options: vec![String::new()],
            },
            FieldKind::Checkbox => Self::Checkbox {
                options: vec![String::new()],
            },
            FieldKind::Date => Self::Date,
            FieldKind::Number => Self::Number,
            FieldKind::File => Self::File,
            FieldKind::Email => Self::Email,
        }
    }

    /// Get the kind tag of this input.
    pub fn kind(&self) -> FieldKind {
        match self {
            Self::Text => FieldKind::Text,
            Self::Textarea => FieldKind::Textarea,
            Self::Radio { .. } => FieldKind::Radio,
            Self::Checkbox { .. } => FieldKind::Checkbox,
            Self::Date => FieldKind::Date,
            Self::Number => FieldKind::Number,
            Self::File => FieldKind::File,
            Self::Email => FieldKind::Email,
        }
    }

    /// Get the option list, if this is a choice input.
    pub fn options(&self) -> Option<&[String]> {
        match self {
            Self::Radio { options } | Self::Checkbox { options } => Some(options),
            _ => None,
        }
    }

    /// Get a mutable reference to the option list, if this is a choice input.
    pub fn options_mut(&mut self) -> Option<&mut Vec<String>> {
        match self {
            Self::Radio { options } | Self::Checkbox { options } => Some(options),
            _ => None,
        }
    }

    /// Convert this input to another kind.
    ///
    /// Options survive a switch between radio and checkbox, are dropped when
    /// leaving the choice kinds and start as `[""]` when entering them.
    pub fn into_kind(self, kind: FieldKind) -> Self {
        if self.kind() == kind {
            return self;
        }
        match (self, kind) {
            (Self::Radio { options } | Self::Checkbox { options }, FieldKind::Radio) => {
                Self::Radio { options }
            }
            (Self::Radio { options } | Self::Checkbox { options }, FieldKind::Checkbox) => {
                Self::Checkbox { options }
            }
            (_, kind) => Self::new(kind),
        }
    }
}

/// The widget a renderer should present for a field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Control<'a> {
    /// Single-line text box.
    SingleLine,
    /// Multi-line text area.
    MultiLine,
    /// One choice among the options (may be empty).
    SingleSelect(&'a [String]),
    /// Any number of choices among the options (may be empty).
    MultiSelect(&'a [String]),
    /// Native date input.
    Date,
    /// Native number input.
    Number,
    /// Native email input.
    Email,
    /// File picker.
    FilePicker,
}

/// A single question in a survey.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawField", into = "RawField")]
pub struct Field {
    /// The question text shown to the respondent. Also the key of its answer.
    question: String,

    /// Whether an answer is needed to submit.
    required: bool,

    /// The kind of input and its extras.
    input: FieldInput,
}

impl Field {
    /// Create a blank field of the given kind.
    ///
    /// The question is empty, the field is optional and choice kinds start
    /// with a single empty option.
    pub fn new(kind: FieldKind) -> Self {
        Self {
            question: String::new(),
            required: false,
            input: FieldInput::new(kind),
        }
    }

    /// Set the question text.
    pub fn with_question(mut self, question: impl Into<String>) -> Self {
        self.question = question.into();
        self
    }

    /// Mark the field as required or optional.
    pub fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Replace the options. Ignored for kinds without options.
    pub fn with_options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if let Some(current) = self.input.options_mut() {
            *current = options.into_iter().map(Into::into).collect();
        }
        self
    }

    /// Get the question text.
    pub fn question(&self) -> &str {
        &self.question
    }

    /// Check if the field must be answered.
    pub fn required(&self) -> bool {
        self.required
    }

    /// Get the field kind.
    pub fn kind(&self) -> FieldKind {
        self.input.kind()
    }

    /// Get the input with its kind-specific extras.
    pub fn input(&self) -> &FieldInput {
        &self.input
    }

    /// Get the options of a choice field.
    pub fn options(&self) -> Option<&[String]> {
        self.input.options()
    }

    /// Get a mutable reference to the options of a choice field.
    pub fn options_mut(&mut self) -> Option<&mut Vec<String>> {
        self.input.options_mut()
    }

    pub fn set_question(&mut self, question: impl Into<String>) {
        self.question = question.into();
    }

    pub fn set_required(&mut self, required: bool) {
        self.required = required;
    }

    /// Change the field kind. See [`FieldInput::into_kind`] for what happens to options.
    pub fn set_kind(&mut self, kind: FieldKind) {
        let input = std::mem::replace(&mut self.input, FieldInput::Text);
        self.input = input.into_kind(kind);
    }

    /// The widget to present for this field.
    pub fn control(&self) -> Control<'_> {
        match &self.input {
            FieldInput::Text => Control::SingleLine,
            FieldInput::Textarea => Control::MultiLine,
            FieldInput::Radio { options } => Control::SingleSelect(options),
            FieldInput::Checkbox { options } => Control::MultiSelect(options),
            FieldInput::Date => Control::Date,
            FieldInput::Number => Control::Number,
            FieldInput::Email => Control::Email,
            FieldInput::File => Control::FilePicker,
        }
    }
}

/// The JSON shape of a field: `{ type, question, required, options? }`.
#[derive(Serialize, Deserialize)]
struct RawField {
    #[serde(rename = "type")]
    kind: FieldKind,

    question: String,

    #[serde(default)]
    required: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    options: Option<Vec<String>>,
}

#[derive(Debug, thiserror::Error)]
#[error("{0} field is missing its options")]
struct MissingOptions(FieldKind);

impl TryFrom<RawField> for Field {
    type Error = MissingOptions;

    fn try_from(raw: RawField) -> Result<Self, Self::Error> {
        let input = match (raw.kind, raw.options) {
            (FieldKind::Radio, Some(options)) => FieldInput::Radio { options },
            (FieldKind::Checkbox, Some(options)) => FieldInput::Checkbox { options },
            (kind, None) if kind.has_options() => return Err(MissingOptions(kind)),
            (kind, options) => {
                if options.is_some() {
                    tracing::debug!(%kind, question = %raw.question, "ignoring options on a field without choices");
                }
                FieldInput::new(kind)
            }
        };
        Ok(Self {
            question: raw.question,
            required: raw.required,
            input,
        })
    }
}

impl From<Field> for RawField {
    fn from(field: Field) -> Self {
        let kind = field.input.kind();
        let options = match field.input {
            FieldInput::Radio { options } | FieldInput::Checkbox { options } => Some(options),
            _ => None,
        };
        Self {
            kind,
            question: field.question,
            required: field.required,
            options,
        }
    }
}
