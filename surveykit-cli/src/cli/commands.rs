//! Subcommands and their arguments.

use std::path::PathBuf;

use clap::{Args, Subcommand};
use surveykit::{Edit, FieldKind};

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new survey with one blank text field
    New(NewArgs),

    /// Apply one editing operation to a survey file
    Edit(EditArgs),

    /// Print a survey's title, description and fields
    Show(ShowArgs),

    /// Render a survey as a fillable HTML form
    Html(HtmlArgs),

    /// Fill out a survey interactively
    Fill(FillArgs),

    /// Check a file of answers against a survey's submission rules
    Check(CheckArgs),
}

#[derive(Args, Debug)]
pub struct NewArgs {
    /// Survey title
    #[arg(long)]
    pub title: String,

    /// Optional description shown under the title
    #[arg(long, default_value = "")]
    pub description: String,

    /// Where to save the survey. Defaults to "<title>.json"
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct EditArgs {
    /// Survey file to edit in place
    pub path: PathBuf,

    #[command(subcommand)]
    pub op: EditOp,
}

/// Editing operations. Field and option indices start at 0.
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum EditOp {
    /// Replace the survey title
    SetTitle { title: String },

    /// Replace the survey description
    SetDescription { description: String },

    /// Append a new field of the given type
    AddField { kind: FieldKind },

    /// Delete a field
    RemoveField { field: usize },

    /// Swap a field with the one before it
    MoveUp { field: usize },

    /// Swap a field with the one after it
    MoveDown { field: usize },

    /// Change a field's type
    SetType { field: usize, kind: FieldKind },

    /// Change a field's question text
    SetQuestion { field: usize, question: String },

    /// Mark a field as required or optional
    SetRequired {
        field: usize,
        #[arg(action = clap::ArgAction::Set)]
        required: bool,
    },

    /// Append an empty option to a radio or checkbox field
    AddOption { field: usize },

    /// Replace the text of one option
    UpdateOption {
        field: usize,
        option: usize,
        value: String,
    },

    /// Delete one option
    RemoveOption { field: usize, option: usize },
}

impl From<EditOp> for Edit {
    fn from(op: EditOp) -> Self {
        match op {
            EditOp::SetTitle { title } => Edit::SetTitle(title),
            EditOp::SetDescription { description } => Edit::SetDescription(description),
            EditOp::AddField { kind } => Edit::AddField(kind),
            EditOp::RemoveField { field } => Edit::RemoveField(field),
            EditOp::MoveUp { field } => Edit::MoveUp(field),
            EditOp::MoveDown { field } => Edit::MoveDown(field),
            EditOp::SetType { field, kind } => Edit::SetType { field, kind },
            EditOp::SetQuestion { field, question } => Edit::SetQuestion { field, question },
            EditOp::SetRequired { field, required } => Edit::SetRequired { field, required },
            EditOp::AddOption { field } => Edit::AddOption { field },
            EditOp::UpdateOption {
                field,
                option,
                value,
            } => Edit::UpdateOption {
                field,
                option,
                value,
            },
            EditOp::RemoveOption { field, option } => Edit::RemoveOption { field, option },
        }
    }
}

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Survey file to print
    pub path: PathBuf,
}

#[derive(Args, Debug)]
pub struct HtmlArgs {
    /// Survey file to render
    pub path: PathBuf,

    /// Write the HTML here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Document title. Defaults to the survey title
    #[arg(long)]
    pub title: Option<String>,

    /// Leave out the default stylesheet
    #[arg(long)]
    pub no_styles: bool,

    /// Emit only the <form> element
    #[arg(long)]
    pub fragment: bool,

    /// CSS class prefix for generated elements
    #[arg(long, default_value = "survey")]
    pub class_prefix: String,
}

#[derive(Args, Debug)]
pub struct FillArgs {
    /// Survey file to fill out
    pub path: PathBuf,

    /// Use prompts without colors
    #[arg(long)]
    pub plain: bool,

    /// Save the accepted answers as JSON
    #[arg(long)]
    pub answers_out: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Survey file the answers belong to
    pub path: PathBuf,

    /// JSON object mapping question text to answer
    #[arg(long)]
    pub answers: PathBuf,
}
