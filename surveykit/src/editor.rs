//! Authoring operations over a survey document.
//!
//! Every operation is an [`Edit`]. Applying an edit never touches the survey
//! it is applied to: it returns the next snapshot, which keeps the
//! [`Editor`] session trivially undoable.

use crate::{FieldKind, Survey, SurveyError, codec};

/// Error type for edits that address a field or option that doesn't exist.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EditError {
    #[error("No field at index {index} (survey has {len} fields)")]
    FieldOutOfRange { index: usize, len: usize },

    #[error("No option at index {index} on field {field} (field has {len} options)")]
    OptionOutOfRange {
        field: usize,
        index: usize,
        len: usize,
    },
}

/// A single authoring operation.
#[derive(Debug, Clone, PartialEq)]
pub enum Edit {
    /// Replace the survey title.
    SetTitle(String),

    /// Replace the survey description.
    SetDescription(String),

    /// Append a blank field of the given kind.
    AddField(FieldKind),

    /// Delete the field at an index.
    RemoveField(usize),

    /// Swap a field with its predecessor. No-op on the first field.
    MoveUp(usize),

    /// Swap a field with its successor. No-op on the last field.
    MoveDown(usize),

    /// Change the kind of a field.
    SetType { field: usize, kind: FieldKind },

    SetQuestion { field: usize, question: String },

    SetRequired { field: usize, required: bool },

    /// Append an empty option. No-op on fields without options.
    AddOption { field: usize },

    /// Replace one option in place. No-op on fields without options.
    UpdateOption {
        field: usize,
        option: usize,
        value: String,
    },

    /// Delete one option. A field may end up with no options at all.
    /// No-op on fields without options.
    RemoveOption { field: usize, option: usize },
}

impl Edit {
    /// Apply this edit, returning the next snapshot of the survey.
    pub fn apply(&self, survey: &Survey) -> Result<Survey, EditError> {
        let mut next = survey.clone();
        self.apply_in_place(&mut next)?;
        Ok(next)
    }

    fn apply_in_place(&self, survey: &mut Survey) -> Result<(), EditError> {
        match self {
            Self::SetTitle(title) => survey.title = title.clone(),
            Self::SetDescription(description) => survey.description = description.clone(),
            Self::AddField(kind) => survey.form_fields.push(crate::Field::new(*kind)),
            Self::RemoveField(index) => {
                check_field(survey, *index)?;
                survey.form_fields.remove(*index);
            }
            Self::MoveUp(index) => {
                check_field(survey, *index)?;
                if *index > 0 {
                    survey.form_fields.swap(*index - 1, *index);
                }
            }
            Self::MoveDown(index) => {
                check_field(survey, *index)?;
                if *index + 1 < survey.len() {
                    survey.form_fields.swap(*index, *index + 1);
                }
            }
            Self::SetType { field, kind } => field_mut(survey, *field)?.set_kind(*kind),
            Self::SetQuestion { field, question } => {
                field_mut(survey, *field)?.set_question(question.clone())
            }
            Self::SetRequired { field, required } => {
                field_mut(survey, *field)?.set_required(*required)
            }
            Self::AddOption { field } => match field_mut(survey, *field)?.options_mut() {
                Some(options) => options.push(String::new()),
                None => tracing::debug!(field, "field has no options, nothing to add"),
            },
            Self::UpdateOption {
                field,
                option,
                value,
            } => match field_mut(survey, *field)?.options_mut() {
                Some(options) => {
                    let len = options.len();
                    let slot = options.get_mut(*option).ok_or(EditError::OptionOutOfRange {
                        field: *field,
                        index: *option,
                        len,
                    })?;
                    *slot = value.clone();
                }
                None => tracing::debug!(field, "field has no options, nothing to update"),
            },
            Self::RemoveOption { field, option } => match field_mut(survey, *field)?.options_mut() {
                Some(options) => {
                    if *option >= options.len() {
                        return Err(EditError::OptionOutOfRange {
                            field: *field,
                            index: *option,
                            len: options.len(),
                        });
                    }
                    options.remove(*option);
                }
                None => tracing::debug!(field, "field has no options, nothing to remove"),
            },
        }
        Ok(())
    }
}

fn check_field(survey: &Survey, index: usize) -> Result<(), EditError> {
    if index < survey.len() {
        Ok(())
    } else {
        Err(EditError::FieldOutOfRange {
            index,
            len: survey.len(),
        })
    }
}

fn field_mut(survey: &mut Survey, index: usize) -> Result<&mut crate::Field, EditError> {
    let len = survey.len();
    survey
        .form_fields
        .get_mut(index)
        .ok_or(EditError::FieldOutOfRange { index, len })
}

/// Options for an editing session.
#[derive(Debug, Clone)]
pub struct EditorOptions {
    /// How many snapshots `undo` can walk back through.
    pub history_limit: usize,
}

impl EditorOptions {
    /// Create new options with default values.
    pub fn new() -> Self {
        Self { history_limit: 100 }
    }

    /// Set how many snapshots are kept for undo.
    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit;
        self
    }
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// An editing session: the current survey plus its undo/redo history.
#[derive(Debug, Clone)]
pub struct Editor {
    current: Survey,
    undo: Vec<Survey>,
    redo: Vec<Survey>,
    options: EditorOptions,
}

impl Editor {
    /// Start a session from a blank survey with one text field.
    pub fn new() -> Self {
        Self::open(Survey::blank())
    }

    /// Continue editing an existing survey.
    pub fn open(survey: Survey) -> Self {
        Self {
            current: survey,
            undo: Vec::new(),
            redo: Vec::new(),
            options: EditorOptions::default(),
        }
    }

    /// Use custom session options.
    pub fn with_options(mut self, options: EditorOptions) -> Self {
        self.options = options;
        self
    }

    /// Get the current snapshot.
    pub fn survey(&self) -> &Survey {
        &self.current
    }

    /// End the session, keeping the current snapshot.
    pub fn into_survey(self) -> Survey {
        self.current
    }

    /// Apply an edit and make its result the current snapshot.
    ///
    /// Edits that leave the survey unchanged (a boundary reorder, an option
    /// edit on a plain field) don't create an undo step.
    pub fn apply(&mut self, edit: Edit) -> Result<&Survey, EditError> {
        let next = edit.apply(&self.current)?;
        tracing::debug!(?edit, fields = next.len(), "applied edit");
        if next != self.current {
            let previous = std::mem::replace(&mut self.current, next);
            self.undo.push(previous);
            if self.undo.len() > self.options.history_limit {
                let excess = self.undo.len() - self.options.history_limit;
                self.undo.drain(..excess);
            }
            self.redo.clear();
        }
        Ok(&self.current)
    }

    /// Step back to the previous snapshot. Returns `false` if there is none.
    pub fn undo(&mut self) -> bool {
        match self.undo.pop() {
            Some(previous) => {
                let current = std::mem::replace(&mut self.current, previous);
                self.redo.push(current);
                true
            }
            None => false,
        }
    }

    /// Re-apply the last undone snapshot. Returns `false` if there is none.
    pub fn redo(&mut self) -> bool {
        match self.redo.pop() {
            Some(next) => {
                let current = std::mem::replace(&mut self.current, next);
                self.undo.push(current);
                true
            }
            None => false,
        }
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    // === One method per edit ===

    pub fn set_title(&mut self, title: impl Into<String>) -> Result<&Survey, EditError> {
        self.apply(Edit::SetTitle(title.into()))
    }

    pub fn set_description(
        &mut self,
        description: impl Into<String>,
    ) -> Result<&Survey, EditError> {
        self.apply(Edit::SetDescription(description.into()))
    }

    pub fn add_field(&mut self, kind: FieldKind) -> Result<&Survey, EditError> {
        self.apply(Edit::AddField(kind))
    }

    pub fn remove_field(&mut self, index: usize) -> Result<&Survey, EditError> {
        self.apply(Edit::RemoveField(index))
    }

    pub fn move_up(&mut self, index: usize) -> Result<&Survey, EditError> {
        self.apply(Edit::MoveUp(index))
    }

    pub fn move_down(&mut self, index: usize) -> Result<&Survey, EditError> {
        self.apply(Edit::MoveDown(index))
    }

    pub fn set_type(&mut self, field: usize, kind: FieldKind) -> Result<&Survey, EditError> {
        self.apply(Edit::SetType { field, kind })
    }

    pub fn set_question(
        &mut self,
        field: usize,
        question: impl Into<String>,
    ) -> Result<&Survey, EditError> {
        self.apply(Edit::SetQuestion {
            field,
            question: question.into(),
        })
    }

    pub fn set_required(&mut self, field: usize, required: bool) -> Result<&Survey, EditError> {
        self.apply(Edit::SetRequired { field, required })
    }

    pub fn add_option(&mut self, field: usize) -> Result<&Survey, EditError> {
        self.apply(Edit::AddOption { field })
    }

    pub fn update_option(
        &mut self,
        field: usize,
        option: usize,
        value: impl Into<String>,
    ) -> Result<&Survey, EditError> {
        self.apply(Edit::UpdateOption {
            field,
            option,
            value: value.into(),
        })
    }

    pub fn remove_option(&mut self, field: usize, option: usize) -> Result<&Survey, EditError> {
        self.apply(Edit::RemoveOption { field, option })
    }

    /// Encode the current snapshot for saving. The survey must have a title.
    pub fn export(&self) -> Result<Vec<u8>, SurveyError> {
        self.current.ensure_titled()?;
        let bytes = codec::serialize(&self.current)?;
        tracing::info!(
            title = %self.current.title,
            fields = self.current.len(),
            "exported survey"
        );
        Ok(bytes)
    }
}

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Field;

    fn questions(survey: &Survey) -> Vec<&str> {
        survey.fields().iter().map(Field::question).collect()
    }

    fn three_fields() -> Survey {
        Survey::blank()
            .with_field(Field::new(FieldKind::Email))
            .with_field(Field::new(FieldKind::Date))
            .with_field(Field::new(FieldKind::Number))
    }

    #[test]
    fn apply_leaves_input_untouched() {
        let survey = Survey::blank();
        let next = Edit::AddField(FieldKind::Radio).apply(&survey).unwrap();
        assert_eq!(survey.len(), 1);
        assert_eq!(next.len(), 2);
        assert_eq!(next.fields()[1], Field::new(FieldKind::Radio));
    }

    #[test]
    fn reorder_is_a_noop_at_the_boundaries() {
        let survey = three_fields();
        assert_eq!(Edit::MoveUp(0).apply(&survey).unwrap(), survey);
        assert_eq!(Edit::MoveDown(3).apply(&survey).unwrap(), survey);
    }

    #[test]
    fn reorder_swaps_exactly_two_neighbours() {
        let survey = three_fields();
        let kinds = |s: &Survey| s.fields().iter().map(Field::kind).collect::<Vec<_>>();

        let up = Edit::MoveUp(2).apply(&survey).unwrap();
        assert_eq!(
            kinds(&up),
            [FieldKind::Text, FieldKind::Date, FieldKind::Email, FieldKind::Number]
        );

        let down = Edit::MoveDown(1).apply(&survey).unwrap();
        assert_eq!(kinds(&down), kinds(&up));
    }

    #[test]
    fn stale_indices_are_rejected() {
        let survey = three_fields();
        assert_eq!(
            Edit::RemoveField(4).apply(&survey),
            Err(EditError::FieldOutOfRange { index: 4, len: 4 })
        );
        assert!(Edit::MoveUp(9).apply(&survey).is_err());
        assert!(
            Edit::SetQuestion {
                field: 7,
                question: "?".into()
            }
            .apply(&survey)
            .is_err()
        );
    }

    #[test]
    fn option_edits_on_plain_fields_are_noops() {
        let survey = Survey::blank();
        assert_eq!(Edit::AddOption { field: 0 }.apply(&survey).unwrap(), survey);
        assert_eq!(
            Edit::RemoveOption {
                field: 0,
                option: 0
            }
            .apply(&survey)
            .unwrap(),
            survey
        );
    }

    #[test]
    fn options_can_be_emptied_but_not_overrun() {
        let mut editor = Editor::new();
        editor.add_field(FieldKind::Checkbox).unwrap();
        editor.remove_option(1, 0).unwrap();
        assert_eq!(editor.survey().fields()[1].options(), Some(&[] as &[String]));

        assert_eq!(
            editor.update_option(1, 0, "Yes").unwrap_err(),
            EditError::OptionOutOfRange {
                field: 1,
                index: 0,
                len: 0
            }
        );
        assert!(editor.remove_option(1, 0).is_err());
    }

    #[test]
    fn duplicate_options_are_kept() {
        let mut editor = Editor::new();
        editor.add_field(FieldKind::Radio).unwrap();
        editor.add_option(1).unwrap();
        editor.update_option(1, 0, "Same").unwrap();
        editor.update_option(1, 1, "Same").unwrap();
        assert_eq!(editor.survey().fields()[1].options().unwrap(), ["Same", "Same"]);
    }

    #[test]
    fn set_attributes() {
        let mut editor = Editor::new();
        editor.set_question(0, "Your name").unwrap();
        editor.set_required(0, true).unwrap();
        editor.set_type(0, FieldKind::Radio).unwrap();

        let field = &editor.survey().fields()[0];
        assert_eq!(field.question(), "Your name");
        assert!(field.required());
        assert_eq!(field.options().unwrap(), [""]);
    }

    #[test]
    fn undo_and_redo_walk_snapshots() {
        let mut editor = Editor::new();
        editor.set_question(0, "First").unwrap();
        editor.add_field(FieldKind::Email).unwrap();
        editor.set_question(1, "Second").unwrap();
        assert_eq!(questions(editor.survey()), ["First", "Second"]);

        assert!(editor.undo());
        assert!(editor.undo());
        assert_eq!(questions(editor.survey()), ["First"]);

        assert!(editor.redo());
        assert_eq!(questions(editor.survey()), ["First", ""]);

        editor.move_up(1).unwrap();
        assert!(!editor.can_redo());
    }

    #[test]
    fn noop_edits_do_not_add_history() {
        let mut editor = Editor::new();
        editor.move_up(0).unwrap();
        editor.add_option(0).unwrap();
        assert!(!editor.can_undo());
    }

    #[test]
    fn history_is_bounded() {
        let mut editor =
            Editor::new().with_options(EditorOptions::new().with_history_limit(2));
        for kind in [FieldKind::Text, FieldKind::Date, FieldKind::File] {
            editor.add_field(kind).unwrap();
        }
        assert!(editor.undo());
        assert!(editor.undo());
        assert!(!editor.undo());
        assert_eq!(editor.survey().len(), 2);
    }

    #[test]
    fn export_requires_title() {
        let mut editor = Editor::new();
        assert!(matches!(editor.export(), Err(SurveyError::MissingTitle)));
        editor.set_title("Team lunch").unwrap();
        assert!(editor.export().is_ok());
    }
}
