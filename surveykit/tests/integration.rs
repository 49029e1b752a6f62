//! Integration tests for surveykit

use surveykit::{
    CDN_SURVEY_MARKER, Editor, FieldKind, FileRef, FormBackend, FormSession, ImportOptions,
    ResponseValue, Responses, RunError, SUCCESS_MESSAGE, Survey, SurveyError, TestBackend,
    ValidationError,
};

#[test]
fn test_added_options_follow_the_default_blank_option() {
    let mut editor = Editor::new();
    editor.add_field(FieldKind::Radio).unwrap();
    editor.add_option(1).unwrap();
    editor.add_option(1).unwrap();
    editor.update_option(1, 0, "Yes").unwrap();
    editor.update_option(1, 1, "No").unwrap();

    let bytes = surveykit::serialize(editor.survey()).unwrap();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(
        json["formFields"][1],
        serde_json::json!({
            "type": "radio",
            "question": "",
            "required": false,
            "options": ["Yes", "No", ""]
        })
    );
}

#[test]
fn test_required_checkbox_with_no_options_blocks_submission() {
    let json = r#"{
        "title": "Quick poll",
        "description": "",
        "formFields": [
            { "type": "checkbox", "question": "Pick", "required": true, "options": [] }
        ]
    }"#;
    let survey = surveykit::deserialize(json.as_bytes()).unwrap();

    let mut session = FormSession::new(survey);
    let errors = session.submit().unwrap_err();
    assert_eq!(errors.get("Pick"), Some(ValidationError::Required));
    assert_eq!(
        errors.get("Pick").unwrap().to_string(),
        "This question is required"
    );
    assert!(!session.is_submitted());
}

#[test]
fn test_export_then_import_restores_the_survey() {
    let survey = example_surveys::job_application().unwrap();
    let bytes = surveykit::serialize(&survey).unwrap();
    let restored = surveykit::deserialize(&bytes).unwrap();
    assert_eq!(restored, survey);
}

#[test]
fn test_job_application_field_order() {
    let survey = example_surveys::job_application().unwrap();
    let questions: Vec<_> = survey.fields().iter().map(|f| f.question()).collect();
    assert_eq!(
        questions,
        [
            "Full name",
            "Position",
            "Email address",
            "Skills",
            "Years of experience",
            "Earliest start date",
            "CV",
            "Cover letter",
        ]
    );
    assert_eq!(survey.title, example_surveys::JOB_APPLICATION_TITLE);
    assert_eq!(survey.suggested_filename(), "Job application.json");
}

#[test]
fn test_onboarding_fixture_imports_with_marker() {
    let survey = example_surveys::onboarding().unwrap();
    assert_eq!(survey.len(), 8);

    // Stale options on the text field are dropped
    assert_eq!(survey.fields()[0].kind(), FieldKind::Text);
    assert!(survey.fields()[0].options().is_none());

    // Missing required flag defaults to optional
    let last = &survey.fields()[7];
    assert_eq!(last.kind(), FieldKind::Textarea);
    assert!(!last.required());

    // Re-exporting normalizes the document
    let bytes = surveykit::serialize(&survey).unwrap();
    let text = String::from_utf8(bytes).unwrap();
    assert!(!text.contains("\"options\": []"));
}

#[test]
fn test_import_rejects_unmarked_file_name() {
    let options = ImportOptions::new().with_marker(CDN_SURVEY_MARKER);
    let result = surveykit::import(
        "onboarding.json",
        example_surveys::ONBOARDING_JSON.as_bytes(),
        &options,
    );
    assert!(matches!(result, Err(SurveyError::Provenance { .. })));
}

#[test]
fn test_run_with_test_backend_succeeds() {
    let survey = example_surveys::user_profile();
    let backend = TestBackend::new()
        .with_text("What is your name?", "Ada Lovelace")
        .with_number("How old are you?", 36.0)
        .with_text("What is your email?", "ada@example.org")
        .with_text("Would you like to receive our newsletter?", "Yes");

    let submitted = surveykit::run(&backend, &survey).unwrap();
    assert_eq!(submitted.message(), SUCCESS_MESSAGE);
    assert_eq!(
        submitted.responses.get_text("What is your name?").unwrap(),
        "Ada Lovelace"
    );
    assert_eq!(submitted.responses.get_number("How old are you?").unwrap(), 36.0);
}

#[test]
fn test_run_reports_every_failing_field() {
    let survey = example_surveys::user_profile();
    let backend = TestBackend::new().with_text("What is your email?", "not-an-email");

    let Err(RunError::Invalid(errors)) = surveykit::run(&backend, &survey) else {
        panic!("expected validation errors");
    };
    assert_eq!(errors.len(), 2);
    assert_eq!(
        errors.get("What is your name?"),
        Some(ValidationError::Required)
    );
    assert_eq!(
        errors.get("What is your email?"),
        Some(ValidationError::InvalidEmail)
    );
}

#[test]
fn test_run_wraps_backend_failures() {
    let survey = example_surveys::user_profile();
    let result = surveykit::run(&TestBackend::new().strict(), &survey);
    assert!(matches!(
        result,
        Err(RunError::Survey(SurveyError::Backend(_)))
    ));
}

#[test]
fn test_job_application_with_every_answer_kind() {
    let survey = example_surveys::job_application().unwrap();
    let backend = TestBackend::new()
        .strict()
        .with_text("Full name", "Grace Hopper")
        .with_text("Position", "Backend engineer")
        .with_text("Email address", "grace@example.org")
        .with_selection("Skills", ["Rust", "SQL"])
        .with_number("Years of experience", 0.0)
        .with_text("Earliest start date", "2026-11-02")
        .with_file("CV", "cv.pdf", 2048)
        .with_text("Cover letter", "");

    let submitted = surveykit::run(&backend, &survey).unwrap();
    assert_eq!(
        submitted.responses.get_selection("Skills").unwrap(),
        ["Rust", "SQL"]
    );
    assert_eq!(
        submitted.responses.get("CV"),
        Some(&ResponseValue::File(FileRef::new("cv.pdf", 2048)))
    );
}

#[test]
fn test_file_answer_on_text_field_is_rejected() {
    let survey = example_surveys::job_application().unwrap();
    let backend = TestBackend::new().with_file("Full name", "cv.pdf", 1);
    let result = surveykit::run(&backend, &survey);
    assert!(matches!(
        result,
        Err(RunError::Survey(SurveyError::Backend(_)))
    ));
}

struct Walkaway;

impl FormBackend for Walkaway {
    type Error = SurveyError;

    fn collect(&self, _survey: &Survey) -> Result<Responses, Self::Error> {
        Err(SurveyError::Cancelled)
    }
}

#[test]
fn test_run_reports_cancellation() {
    let survey = example_surveys::user_profile();
    let Err(RunError::Survey(err)) = surveykit::run(&Walkaway, &survey) else {
        panic!("expected the run to be cancelled");
    };
    assert!(err.is_cancelled());
}

#[test]
fn test_full_onboarding_fill_out() {
    let survey = example_surveys::onboarding().unwrap();
    let mut session = FormSession::new(survey.clone());
    let fields = survey.fields();

    session.answer(&fields[0], "Grace Hopper");
    session.answer(&fields[1], "grace@example.org");
    session.answer(&fields[2], "2026-11-02");
    session.answer(&fields[3], "ThinkPad");
    session.toggle(&fields[4], "Git");
    session.toggle(&fields[4], "Docker");
    session.answer(&fields[5], 0);

    let submitted = session.submit().unwrap();
    assert_eq!(
        submitted.responses.get("Years of experience"),
        Some(&ResponseValue::Number(0.0))
    );
    assert_eq!(
        submitted
            .responses
            .get_selection("Which tools have you used before?")
            .unwrap(),
        ["Git", "Docker"]
    );
}

#[test]
fn test_untitled_survey_cannot_be_exported() {
    let editor = Editor::open(Survey::blank());
    assert!(matches!(editor.export(), Err(SurveyError::MissingTitle)));
}
