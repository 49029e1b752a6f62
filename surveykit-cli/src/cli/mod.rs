//! Command line entry points. Every subcommand opens its survey through
//! [`surveykit::import`], so the `--marker` guard applies everywhere.

pub mod commands;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::Parser;
use commands::{CheckArgs, Commands, EditArgs, FillArgs, HtmlArgs, NewArgs, ShowArgs};
use surveykit::{Edit, Editor, ImportOptions, Responses, RunError, Survey};
use surveykit_doc_html::HtmlOptions;
use surveykit_wizard_dialoguer::DialoguerBackend;

#[derive(Parser, Debug)]
#[command(
    name = "surveykit",
    version,
    about = "Create, edit, render and fill out JSON surveys."
)]
pub struct Cli {
    /// Only open survey files whose name contains this marker (e.g. "cdn-survey")
    #[arg(long, global = true)]
    pub marker: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let options = match self.marker {
            Some(marker) => ImportOptions::new().with_marker(marker),
            None => ImportOptions::new(),
        };

        match self.command {
            Commands::New(args) => run_new(args),
            Commands::Edit(args) => run_edit(&options, args),
            Commands::Show(args) => run_show(&options, args),
            Commands::Html(args) => run_html(&options, args),
            Commands::Fill(args) => run_fill(&options, args),
            Commands::Check(args) => run_check(&options, args),
        }
    }
}

fn run_new(args: NewArgs) -> Result<()> {
    let mut editor = Editor::new();
    editor.set_title(args.title)?;
    editor.set_description(args.description)?;

    let path = args
        .output
        .unwrap_or_else(|| PathBuf::from(editor.survey().suggested_filename()));
    if path.exists() {
        bail!("{} already exists", path.display());
    }

    save(&path, &editor)?;
    println!("Created {}", path.display());
    Ok(())
}

fn run_edit(options: &ImportOptions, args: EditArgs) -> Result<()> {
    let survey = open(&args.path, options)?;
    let mut editor = Editor::open(survey);
    let edit: Edit = args.op.into();
    tracing::debug!(?edit, path = %args.path.display(), "applying edit");
    editor
        .apply(edit)
        .with_context(|| format!("Cannot edit {}", args.path.display()))?;

    save(&args.path, &editor)?;
    println!("Updated {}", args.path.display());
    Ok(())
}

fn run_show(options: &ImportOptions, args: ShowArgs) -> Result<()> {
    let survey = open(&args.path, options)?;
    print!("{}", describe(&survey));
    Ok(())
}

fn run_html(options: &ImportOptions, args: HtmlArgs) -> Result<()> {
    let survey = open(&args.path, options)?;

    let mut html_options = HtmlOptions::new()
        .with_styles(!args.no_styles)
        .full_document(!args.fragment)
        .with_class_prefix(args.class_prefix);
    if let Some(title) = args.title {
        html_options = html_options.with_title(title);
    }
    let html = surveykit_doc_html::to_html(&survey, &html_options);

    match args.output {
        Some(path) => {
            fs::write(&path, html).with_context(|| format!("Failed to write {}", path.display()))?;
            println!("Wrote {}", path.display());
        }
        None => print!("{html}"),
    }
    Ok(())
}

fn run_fill(options: &ImportOptions, args: FillArgs) -> Result<()> {
    let survey = open(&args.path, options)?;
    let backend = if args.plain {
        DialoguerBackend::plain()
    } else {
        DialoguerBackend::new()
    };

    let submitted = match surveykit::run(&backend, &survey) {
        Ok(submitted) => submitted,
        Err(RunError::Survey(err)) if err.is_cancelled() => {
            println!("Survey cancelled.");
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };

    if let Some(path) = args.answers_out {
        let bytes = serde_json::to_vec_pretty(&submitted.responses)?;
        fs::write(&path, bytes).with_context(|| format!("Failed to write {}", path.display()))?;
        tracing::info!(path = %path.display(), "saved answers");
    }
    println!("{}", submitted.message());
    Ok(())
}

fn run_check(options: &ImportOptions, args: CheckArgs) -> Result<()> {
    let survey = open(&args.path, options)?;
    let bytes = fs::read(&args.answers)
        .with_context(|| format!("Failed to read {}", args.answers.display()))?;
    let responses: Responses = serde_json::from_slice(&bytes)
        .with_context(|| format!("Invalid answers file {}", args.answers.display()))?;

    let submitted = surveykit::submit(&survey, &responses).map_err(RunError::Invalid)?;
    println!("{}", submitted.message());
    Ok(())
}

/// Read and import a survey file.
fn open(path: &Path, options: &ImportOptions) -> Result<Survey> {
    let bytes = fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    surveykit::import(&file_name, &bytes, options)
        .with_context(|| format!("Failed to open {}", path.display()))
}

fn save(path: &Path, editor: &Editor) -> Result<()> {
    let bytes = editor.export()?;
    fs::write(path, bytes).with_context(|| format!("Failed to write {}", path.display()))
}

/// A plain text listing of a survey.
fn describe(survey: &Survey) -> String {
    let mut out = String::new();
    let title = if survey.title.is_empty() {
        "(untitled)"
    } else {
        survey.title.as_str()
    };
    out.push_str(&format!("{title}\n"));
    if !survey.description.is_empty() {
        out.push_str(&format!("{}\n", survey.description));
    }
    out.push('\n');

    for (index, field) in survey.fields().iter().enumerate() {
        let required = if field.required() { " (required)" } else { "" };
        out.push_str(&format!(
            "[{index}] {} \"{}\"{required}\n",
            field.kind().label(),
            field.question()
        ));
        if let Some(options) = field.options() {
            if options.is_empty() {
                out.push_str("      (no options)\n");
            }
            for (i, option) in options.iter().enumerate() {
                out.push_str(&format!("      {i}. {option}\n"));
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use surveykit::{FieldKind, SurveyError, ValidationError};

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("surveykit").chain(args.iter().copied())).unwrap()
    }

    fn path_arg(path: &Path) -> &str {
        path.to_str().unwrap()
    }

    #[test]
    fn new_then_edit_round_trips_through_the_file() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("cdn-survey-lunch.json");
        let file = path_arg(&path);

        cli(&["new", "--title", "Lunch", "-o", file]).run()?;
        cli(&["edit", file, "add-field", "radio"]).run()?;
        cli(&["edit", file, "set-question", "1", "Pizza or sushi?"]).run()?;
        cli(&["edit", file, "update-option", "1", "0", "Pizza"]).run()?;
        cli(&["edit", file, "add-option", "1"]).run()?;
        cli(&["edit", file, "update-option", "1", "1", "Sushi"]).run()?;
        cli(&["edit", file, "set-required", "1", "true"]).run()?;
        cli(&["edit", file, "move-up", "1"]).run()?;

        let survey = surveykit::deserialize(&fs::read(&path)?)?;
        assert_eq!(survey.title, "Lunch");
        assert_eq!(survey.fields()[0].kind(), FieldKind::Radio);
        assert_eq!(survey.fields()[0].options().unwrap(), ["Pizza", "Sushi"]);
        assert!(survey.fields()[0].required());
        assert_eq!(survey.fields()[1].kind(), FieldKind::Text);
        Ok(())
    }

    #[test]
    fn new_refuses_to_overwrite() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("survey.json");
        fs::write(&path, "{}")?;

        let result = cli(&["new", "--title", "Again", "-o", path_arg(&path)]).run();
        assert!(result.is_err());
        assert_eq!(fs::read_to_string(&path)?, "{}");
        Ok(())
    }

    #[test]
    fn out_of_range_edit_leaves_file_untouched() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("survey.json");
        let file = path_arg(&path);
        cli(&["new", "--title", "Small", "-o", file]).run()?;
        let before = fs::read(&path)?;

        assert!(cli(&["edit", file, "remove-field", "5"]).run().is_err());
        assert_eq!(fs::read(&path)?, before);
        Ok(())
    }

    #[test]
    fn marker_guard_applies_to_every_open() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("onboarding.json");
        fs::write(&path, example_surveys::ONBOARDING_JSON)?;
        let file = path_arg(&path);

        assert!(cli(&["show", file]).run().is_ok());
        let err = cli(&["--marker", "cdn-survey", "show", file])
            .run()
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<SurveyError>(),
            Some(SurveyError::Provenance { .. })
        ));
        Ok(())
    }

    #[test]
    fn check_reports_validation_failures() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let survey_path = dir.path().join("cdn-survey-poll.json");
        let answers_path = dir.path().join("answers.json");
        fs::write(
            &survey_path,
            r#"{"title":"Poll","description":"","formFields":[
                {"type":"checkbox","question":"Pick","required":true,"options":[]},
                {"type":"email","question":"Email","required":false}
            ]}"#,
        )?;

        fs::write(&answers_path, r#"{"Email": "nope"}"#)?;
        let err = cli(&[
            "check",
            path_arg(&survey_path),
            "--answers",
            path_arg(&answers_path),
        ])
        .run()
        .unwrap_err();
        let Some(RunError::Invalid(errors)) = err.downcast_ref::<RunError>() else {
            panic!("expected validation errors, got {err}");
        };
        assert_eq!(errors.len(), 2);

        fs::write(&answers_path, r#"{"Pick": ["x"], "Email": "a@b.co"}"#)?;
        cli(&[
            "check",
            path_arg(&survey_path),
            "--answers",
            path_arg(&answers_path),
        ])
        .run()?;
        Ok(())
    }

    #[test]
    fn html_is_written_to_the_output_file() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let survey_path = dir.path().join("profile.json");
        let html_path = dir.path().join("profile.html");
        fs::write(
            &survey_path,
            surveykit::serialize(&example_surveys::user_profile())?,
        )?;

        cli(&[
            "html",
            path_arg(&survey_path),
            "--fragment",
            "--class-prefix",
            "profile",
            "-o",
            path_arg(&html_path),
        ])
        .run()?;

        let html = fs::read_to_string(&html_path)?;
        assert!(html.starts_with("<form class=\"profile-form\">"));
        Ok(())
    }

    #[test]
    fn null_answers_count_as_unanswered() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let survey_path = dir.path().join("contact.json");
        let answers_path = dir.path().join("answers.json");
        fs::write(
            &survey_path,
            r#"{"title":"Contact","description":"","formFields":[
                {"type":"text","question":"Name","required":true},
                {"type":"date","question":"When","required":false}
            ]}"#,
        )?;
        fs::write(&answers_path, r#"{"Name": null, "When": null}"#)?;

        let err = cli(&[
            "check",
            path_arg(&survey_path),
            "--answers",
            path_arg(&answers_path),
        ])
        .run()
        .unwrap_err();
        let Some(RunError::Invalid(errors)) = err.downcast_ref::<RunError>() else {
            panic!("expected validation errors, got {err}");
        };
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("Name"), Some(ValidationError::Required));
        Ok(())
    }

    #[test]
    fn describe_lists_fields_with_options() {
        let survey = example_surveys::user_profile();
        let text = describe(&survey);
        assert!(text.starts_with("User profile\n"));
        assert!(text.contains("[0] Text Input \"What is your name?\" (required)"));
        assert!(text.contains("      0. Yes\n      1. No\n"));
    }
}
