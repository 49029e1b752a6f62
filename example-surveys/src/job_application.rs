use surveykit::{Editor, FieldKind, Survey};

pub const JOB_APPLICATION_TITLE: &str = "Job application";

/// A job application using every field kind, authored through the editor
/// the same way a person clicking through the builder would.
pub fn job_application() -> anyhow::Result<Survey> {
    let mut editor = Editor::new();
    editor.set_title(JOB_APPLICATION_TITLE)?;
    editor.set_description("Apply for an open position. Required fields are marked.")?;

    // The default text field becomes the name question
    editor.set_question(0, "Full name")?;
    editor.set_required(0, true)?;

    editor.add_field(FieldKind::Email)?;
    editor.set_question(1, "Email address")?;
    editor.set_required(1, true)?;

    editor.add_field(FieldKind::Radio)?;
    editor.set_question(2, "Position")?;
    editor.set_required(2, true)?;
    for (i, position) in ["Backend engineer", "Frontend engineer", "Designer"]
        .into_iter()
        .enumerate()
    {
        if i > 0 {
            editor.add_option(2)?;
        }
        editor.update_option(2, i, position)?;
    }

    editor.add_field(FieldKind::Checkbox)?;
    editor.set_question(3, "Skills")?;
    editor.set_required(3, true)?;
    for (i, skill) in ["Rust", "TypeScript", "SQL", "Figma"].into_iter().enumerate() {
        if i > 0 {
            editor.add_option(3)?;
        }
        editor.update_option(3, i, skill)?;
    }

    editor.add_field(FieldKind::Number)?;
    editor.set_question(4, "Years of experience")?;
    editor.set_required(4, true)?;

    editor.add_field(FieldKind::Date)?;
    editor.set_question(5, "Earliest start date")?;

    editor.add_field(FieldKind::File)?;
    editor.set_question(6, "CV")?;

    editor.add_field(FieldKind::Textarea)?;
    editor.set_question(7, "Cover letter")?;

    // Ask for the position before contact details
    editor.move_up(2)?;

    Ok(editor.into_survey())
}
