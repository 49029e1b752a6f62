//! Dialoguer backend implementation for the FormBackend trait.

use std::path::Path;

use chrono::NaiveDate;
use dialoguer::theme::{ColorfulTheme, SimpleTheme, Theme};
use dialoguer::{Editor, FuzzySelect, Input, MultiSelect, Select};
use surveykit::{
    Control, Field, FileRef, FormBackend, ResponseValue, Responses, Survey, SurveyError,
};
use thiserror::Error;

/// Radio groups longer than this get a fuzzy finder instead of a plain list.
const FUZZY_THRESHOLD: usize = 10;

const SKIP_LABEL: &str = "(skip)";

/// Error type for the Dialoguer backend.
#[derive(Debug, Error)]
pub enum DialoguerError {
    /// User cancelled the survey (e.g., pressed Ctrl+C or Escape).
    #[error("Survey cancelled by user")]
    Cancelled,

    /// An I/O error occurred during prompting.
    #[error("Dialoguer error: {0}")]
    Dialoguer(#[from] dialoguer::Error),
}

impl From<DialoguerError> for SurveyError {
    fn from(err: DialoguerError) -> Self {
        match err {
            DialoguerError::Cancelled => SurveyError::Cancelled,
            other => SurveyError::backend(other),
        }
    }
}

/// Helper to check if a dialoguer error is a cancellation (Ctrl+C / Escape)
fn is_cancelled(err: &dialoguer::Error) -> bool {
    matches!(err, dialoguer::Error::IO(io_err) if io_err.kind() == std::io::ErrorKind::Interrupted)
}

fn prompt_error(err: dialoguer::Error) -> DialoguerError {
    if is_cancelled(&err) {
        DialoguerError::Cancelled
    } else {
        DialoguerError::Dialoguer(err)
    }
}

/// Dialoguer backend for interactive CLI prompts.
#[derive(Debug, Default, Clone)]
pub struct DialoguerBackend {
    /// Use colorful theme for prompts.
    colorful: bool,
}

impl DialoguerBackend {
    /// Create a new Dialoguer backend with default (colorful) theme.
    pub fn new() -> Self {
        Self { colorful: true }
    }

    /// Create a backend with plain (no color) theme.
    pub fn plain() -> Self {
        Self { colorful: false }
    }

    fn theme(&self) -> Box<dyn Theme> {
        if self.colorful {
            Box::new(ColorfulTheme::default())
        } else {
            Box::new(SimpleTheme)
        }
    }

    /// Ask one field until its answer passes the submission rules.
    fn ask_field(&self, field: &Field) -> Result<Option<ResponseValue>, DialoguerError> {
        let prompt = prompt_for(field);
        loop {
            let value = match field.control() {
                Control::SingleLine | Control::Email => self.ask_text(&prompt)?,
                Control::MultiLine => self.ask_multiline(&prompt)?,
                Control::Date => self.ask_date(&prompt)?,
                Control::Number => self.ask_number(&prompt)?,
                Control::FilePicker => self.ask_file(&prompt)?,
                Control::SingleSelect(options) => {
                    self.ask_single(&prompt, options, field.required())?
                }
                Control::MultiSelect(options) => self.ask_multi(&prompt, options)?,
            };

            match surveykit::validate_field(field, value.as_ref()) {
                Ok(()) => return Ok(value),
                Err(err) => {
                    let theme = self.theme();
                    eprintln!("{}", error_line(theme.as_ref(), &err.to_string()));
                }
            }

            // Nothing to pick from, asking again cannot help
            if field.options().is_some_and(|options| options.is_empty()) {
                return Ok(value);
            }
        }
    }

    fn ask_text(&self, prompt: &str) -> Result<Option<ResponseValue>, DialoguerError> {
        let theme = self.theme();
        let text: String = Input::with_theme(theme.as_ref())
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
            .map_err(prompt_error)?;
        Ok(non_empty_text(text))
    }

    fn ask_multiline(&self, prompt: &str) -> Result<Option<ResponseValue>, DialoguerError> {
        println!("{prompt}");
        match Editor::new().edit("") {
            Ok(Some(text)) => Ok(non_empty_text(text.trim_end_matches('\n').to_string())),
            // Editor was closed without saving
            Ok(None) => Ok(None),
            Err(e) => Err(prompt_error(e)),
        }
    }

    fn ask_date(&self, prompt: &str) -> Result<Option<ResponseValue>, DialoguerError> {
        let theme = self.theme();
        let text: String = Input::with_theme(theme.as_ref())
            .with_prompt(format!("{prompt} (YYYY-MM-DD)"))
            .allow_empty(true)
            .validate_with(|input: &String| -> Result<(), String> {
                if input.is_empty() || is_date(input) {
                    Ok(())
                } else {
                    Err("Please enter a date as YYYY-MM-DD".to_string())
                }
            })
            .interact_text()
            .map_err(prompt_error)?;
        Ok(non_empty_text(text))
    }

    fn ask_number(&self, prompt: &str) -> Result<Option<ResponseValue>, DialoguerError> {
        let theme = self.theme();
        let text: String = Input::with_theme(theme.as_ref())
            .with_prompt(prompt)
            .allow_empty(true)
            .validate_with(|input: &String| parse_number(input).map(|_| ()))
            .interact_text()
            .map_err(prompt_error)?;
        Ok(parse_number(&text)
            .ok()
            .flatten()
            .map(ResponseValue::Number))
    }

    fn ask_file(&self, prompt: &str) -> Result<Option<ResponseValue>, DialoguerError> {
        let theme = self.theme();
        let path: String = Input::with_theme(theme.as_ref())
            .with_prompt(format!("{prompt} (path to file)"))
            .allow_empty(true)
            .validate_with(|input: &String| -> Result<(), String> {
                if input.is_empty() {
                    return Ok(());
                }
                file_ref(Path::new(input))
                    .map(|_| ())
                    .map_err(|e| format!("Cannot read {input}: {e}"))
            })
            .interact_text()
            .map_err(prompt_error)?;

        if path.is_empty() {
            return Ok(None);
        }
        let file = file_ref(Path::new(&path))
            .map_err(|e| DialoguerError::Dialoguer(dialoguer::Error::IO(e)))?;
        Ok(Some(ResponseValue::File(file)))
    }

    fn ask_single(
        &self,
        prompt: &str,
        options: &[String],
        required: bool,
    ) -> Result<Option<ResponseValue>, DialoguerError> {
        if options.is_empty() {
            tracing::debug!(prompt, "radio group has no options, skipping prompt");
            println!("{prompt}: no options to choose from");
            return Ok(None);
        }

        let mut items: Vec<&str> = options.iter().map(String::as_str).collect();
        if !required {
            items.push(SKIP_LABEL);
        }

        let theme = self.theme();
        let picked = if items.len() > FUZZY_THRESHOLD {
            FuzzySelect::with_theme(theme.as_ref())
                .with_prompt(prompt)
                .items(&items)
                .default(0)
                .interact()
        } else {
            Select::with_theme(theme.as_ref())
                .with_prompt(prompt)
                .items(&items)
                .default(0)
                .interact()
        };
        let index = picked.map_err(prompt_error)?;

        Ok(options
            .get(index)
            .map(|choice| ResponseValue::Text(choice.clone())))
    }

    fn ask_multi(
        &self,
        prompt: &str,
        options: &[String],
    ) -> Result<Option<ResponseValue>, DialoguerError> {
        if options.is_empty() {
            tracing::debug!(prompt, "checkbox group has no options, skipping prompt");
            println!("{prompt}: no options to choose from");
            return Ok(None);
        }

        let theme = self.theme();
        let indices = MultiSelect::with_theme(theme.as_ref())
            .with_prompt(prompt)
            .items(options)
            .interact()
            .map_err(prompt_error)?;

        Ok(Some(ResponseValue::Selection(selected_options(
            options, &indices,
        ))))
    }
}

/// The prompt shown for a field. Required fields are marked with an asterisk.
fn prompt_for(field: &Field) -> String {
    let question = if field.question().is_empty() {
        field.kind().label()
    } else {
        field.question()
    };
    if field.required() {
        format!("{question} *")
    } else {
        question.to_string()
    }
}

/// Format a failed rule the way the theme formats its own validation errors.
fn error_line(theme: &dyn Theme, message: &str) -> String {
    let mut line = String::new();
    if theme.format_error(&mut line, message).is_err() {
        return format!("error: {message}");
    }
    line
}

fn non_empty_text(text: String) -> Option<ResponseValue> {
    if text.is_empty() {
        None
    } else {
        Some(ResponseValue::Text(text))
    }
}

/// Parse a number answer. An empty answer is no answer.
fn parse_number(input: &str) -> Result<Option<f64>, String> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }
    match input.parse::<f64>() {
        Ok(n) if n.is_finite() => Ok(Some(n)),
        _ => Err("Please enter a valid number".to_string()),
    }
}

/// Check for a real calendar date in the `YYYY-MM-DD` shape a native date input produces.
fn is_date(input: &str) -> bool {
    input.len() == 10 && NaiveDate::parse_from_str(input, "%Y-%m-%d").is_ok()
}

/// Describe a file on disk as a file answer.
fn file_ref(path: &Path) -> std::io::Result<FileRef> {
    let metadata = std::fs::metadata(path)?;
    if !metadata.is_file() {
        return Err(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "not a regular file",
        ));
    }
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    Ok(FileRef::new(name, metadata.len()))
}

/// Map ticked indices back to option text, in list order.
fn selected_options(options: &[String], indices: &[usize]) -> Vec<String> {
    indices
        .iter()
        .filter_map(|&i| options.get(i).cloned())
        .collect()
}

impl FormBackend for DialoguerBackend {
    type Error = SurveyError;

    fn collect(&self, survey: &Survey) -> Result<Responses, Self::Error> {
        let mut responses = Responses::new();

        if !survey.title.is_empty() {
            println!("{}", survey.title);
        }
        if !survey.description.is_empty() {
            println!("{}", survey.description);
        }
        println!();

        for field in survey.fields() {
            if let Some(value) = self.ask_field(field)? {
                responses.insert(field.question(), value);
            }
        }

        Ok(responses)
    }
}
