use surveykit::{CDN_SURVEY_MARKER, ImportOptions, Survey};

/// File name the onboarding fixture is imported under.
pub const ONBOARDING_FILE_NAME: &str = "cdn-survey-onboarding.json";

/// A document as saved by an earlier version of the builder: the text field
/// still carries an empty `options` list and the last field omits `required`.
pub const ONBOARDING_JSON: &str = include_str!("../data/cdn-survey-onboarding.json");

/// The onboarding survey, imported the way a deployment requiring the
/// `cdn-survey` file name marker would import it.
pub fn onboarding() -> anyhow::Result<Survey> {
    let options = ImportOptions::new().with_marker(CDN_SURVEY_MARKER);
    let survey = surveykit::import(ONBOARDING_FILE_NAME, ONBOARDING_JSON.as_bytes(), &options)?;
    Ok(survey)
}
