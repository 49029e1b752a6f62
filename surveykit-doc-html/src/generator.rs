//! Survey to HTML rendering.

use surveykit::{Control, Field, FieldErrors, Survey};

/// How a survey is turned into HTML.
#[derive(Debug, Clone, Default)]
pub struct HtmlOptions {
    /// Title for the HTML document. Falls back to the survey title.
    pub title: Option<String>,
    /// Embed the built-in stylesheet in `<head>`.
    pub include_styles: bool,
    /// Wrap the form in a standalone page. Off renders only the `<form>`.
    pub full_document: bool,
    /// Prefix for every generated CSS class, e.g. `survey-field`.
    pub class_prefix: String,
}

impl HtmlOptions {
    /// Standalone page with styles and the `survey` class prefix.
    pub fn new() -> Self {
        Self {
            title: None,
            include_styles: true,
            full_document: true,
            class_prefix: "survey".to_string(),
        }
    }

    /// Override the page title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Toggle the built-in stylesheet.
    pub fn with_styles(mut self, include: bool) -> Self {
        self.include_styles = include;
        self
    }

    /// Toggle the standalone page wrapper.
    pub fn full_document(mut self, full: bool) -> Self {
        self.full_document = full;
        self
    }

    /// Use another CSS class prefix.
    pub fn with_class_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.class_prefix = prefix.into();
        self
    }
}

/// Render a survey as an HTML form.
pub fn to_html(survey: &Survey, options: &HtmlOptions) -> String {
    generate_html(survey, options, None)
}

/// Render a survey as an HTML form, showing each field's error from a
/// failed submission below its control.
pub fn to_html_with_errors(survey: &Survey, options: &HtmlOptions, errors: &FieldErrors) -> String {
    generate_html(survey, options, Some(errors))
}

fn generate_html(survey: &Survey, options: &HtmlOptions, errors: Option<&FieldErrors>) -> String {
    let mut html = String::new();
    let prefix = &options.class_prefix;
    let title = options.title.as_deref().unwrap_or(&survey.title);

    if options.full_document {
        html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        html.push_str("  <meta charset=\"UTF-8\">\n");
        html.push_str(
            "  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
        );
        if !title.is_empty() {
            html.push_str(&format!("  <title>{}</title>\n", escape_html(title)));
        }
        if options.include_styles {
            html.push_str(&generate_styles(prefix));
        }
        html.push_str("</head>\n<body>\n");
    }

    html.push_str(&format!("<form class=\"{prefix}-form\">\n"));

    if !title.is_empty() {
        html.push_str(&format!(
            "  <h1 class=\"{prefix}-title\">{}</h1>\n",
            escape_html(title)
        ));
    }
    if !survey.description.is_empty() {
        html.push_str(&format!(
            "  <p class=\"{prefix}-description\">{}</p>\n",
            escape_html(&survey.description)
        ));
    }

    html.push_str(&format!("  <div class=\"{prefix}-questions\">\n"));
    for (index, field) in survey.fields().iter().enumerate() {
        html.push_str(&generate_field(field, index, prefix, 2));
        if let Some(error) = errors.and_then(|errors| errors.for_field(field)) {
            html.push_str(&format!(
                "    <p class=\"{prefix}-error\" role=\"alert\">{}</p>\n",
                escape_html(&error.to_string())
            ));
        }
    }
    html.push_str("  </div>\n");

    html.push_str(&format!(
        "  <button type=\"submit\" class=\"{prefix}-submit\">Submit</button>\n"
    ));
    html.push_str("</form>\n");

    if options.full_document {
        html.push_str("</body>\n</html>\n");
    }

    html
}

/// Generate HTML for a single field.
fn generate_field(field: &Field, index: usize, prefix: &str, indent: usize) -> String {
    let ind = "  ".repeat(indent);
    let field_id = format!("field-{index}");
    let name = escape_html(field.question());
    let label = escape_html(field.question());
    let required = if field.required() { " required" } else { "" };
    let marker = if field.required() {
        format!(" <span class=\"{prefix}-required\">*</span>")
    } else {
        String::new()
    };

    let mut html = String::new();

    match field.control() {
        Control::SingleSelect(options) => {
            html.push_str(&format!(
                "{ind}<fieldset class=\"{prefix}-fieldset {prefix}-radio\">\n"
            ));
            html.push_str(&format!("{ind}  <legend>{label}{marker}</legend>\n"));
            for (idx, option) in options.iter().enumerate() {
                let option_id = format!("{field_id}-{idx}");
                let value = escape_html(option);
                html.push_str(&format!("{ind}  <div class=\"{prefix}-radio-option\">\n"));
                html.push_str(&format!(
                    "{ind}    <input type=\"radio\" id=\"{option_id}\" name=\"{name}\" value=\"{value}\"{required}>\n"
                ));
                html.push_str(&format!(
                    "{ind}    <label for=\"{option_id}\">{value}</label>\n"
                ));
                html.push_str(&format!("{ind}  </div>\n"));
            }
            html.push_str(&format!("{ind}</fieldset>\n"));
        }

        Control::MultiSelect(options) => {
            // Browsers cannot require "at least one" of a checkbox group
            let data_required = if field.required() {
                " data-required=\"true\""
            } else {
                ""
            };
            html.push_str(&format!(
                "{ind}<fieldset class=\"{prefix}-fieldset {prefix}-checkbox\"{data_required}>\n"
            ));
            html.push_str(&format!("{ind}  <legend>{label}{marker}</legend>\n"));
            for (idx, option) in options.iter().enumerate() {
                let option_id = format!("{field_id}-{idx}");
                let value = escape_html(option);
                html.push_str(&format!(
                    "{ind}  <div class=\"{prefix}-checkbox-option\">\n"
                ));
                html.push_str(&format!(
                    "{ind}    <input type=\"checkbox\" id=\"{option_id}\" name=\"{name}[]\" value=\"{value}\">\n"
                ));
                html.push_str(&format!(
                    "{ind}    <label for=\"{option_id}\">{value}</label>\n"
                ));
                html.push_str(&format!("{ind}  </div>\n"));
            }
            html.push_str(&format!("{ind}</fieldset>\n"));
        }

        Control::MultiLine => {
            html.push_str(&format!("{ind}<div class=\"{prefix}-field\">\n"));
            html.push_str(&format!(
                "{ind}  <label for=\"{field_id}\">{label}{marker}</label>\n"
            ));
            html.push_str(&format!(
                "{ind}  <textarea id=\"{field_id}\" name=\"{name}\" rows=\"4\" class=\"{prefix}-textarea\"{required}></textarea>\n"
            ));
            html.push_str(&format!("{ind}</div>\n"));
        }

        control => {
            let (input_type, extra) = match control {
                Control::Date => ("date", ""),
                Control::Number => ("number", " step=\"any\""),
                Control::Email => ("email", ""),
                Control::FilePicker => ("file", ""),
                _ => ("text", ""),
            };
            html.push_str(&format!("{ind}<div class=\"{prefix}-field\">\n"));
            html.push_str(&format!(
                "{ind}  <label for=\"{field_id}\">{label}{marker}</label>\n"
            ));
            html.push_str(&format!(
                "{ind}  <input type=\"{input_type}\"{extra} id=\"{field_id}\" name=\"{name}\" class=\"{prefix}-input\"{required}>\n"
            ));
            html.push_str(&format!("{ind}</div>\n"));
        }
    }

    html
}

/// Escape text for use in element content and quoted attributes.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// The built-in stylesheet, scoped to the class prefix.
fn generate_styles(prefix: &str) -> String {
    format!(
        r#"  <style>
    .{prefix}-form {{
      max-width: 640px;
      margin: 2rem auto;
      padding: 1.25rem;
      font-family: sans-serif;
      background: #fff;
      border-radius: 1rem;
    }}
    .{prefix}-title {{
      text-align: center;
    }}
    .{prefix}-description {{
      text-align: center;
      margin-bottom: 1.5rem;
      white-space: pre-wrap;
    }}
    .{prefix}-field, .{prefix}-fieldset {{
      margin: 0 0 1.5rem 0;
    }}
    .{prefix}-field label {{
      display: block;
      margin-bottom: 0.5rem;
      font-weight: 500;
    }}
    .{prefix}-input, .{prefix}-textarea {{
      width: 100%;
      padding: 0.75rem;
      border: 2px solid #4b5563;
      border-radius: 0.75rem;
      box-sizing: border-box;
    }}
    .{prefix}-fieldset {{
      border: none;
      padding: 0;
    }}
    .{prefix}-radio-option, .{prefix}-checkbox-option {{
      display: flex;
      align-items: center;
      gap: 0.5rem;
      margin: 0.25rem 0;
    }}
    .{prefix}-required, .{prefix}-error {{
      color: #ef4444;
    }}
    .{prefix}-submit {{
      padding: 0.5rem 1rem;
      background: #f97316;
      color: #fff;
      border: none;
      border-radius: 0.5rem;
    }}
  </style>
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use surveykit::{FieldKind, ValidationError};

    fn survey_with(field: Field) -> Survey {
        Survey::new("Test", "").unwrap().with_field(field)
    }

    fn fragment(survey: &Survey) -> String {
        to_html(survey, &HtmlOptions::new().full_document(false))
    }

    #[test]
    fn options_default_to_a_styled_page() {
        let options = HtmlOptions::new();
        assert!(options.include_styles && options.full_document);
        assert_eq!(options.class_prefix, "survey");

        let options = options.with_styles(false).with_class_prefix("poll");
        assert!(!options.include_styles);
        assert_eq!(options.class_prefix, "poll");
    }

    #[test]
    fn each_kind_gets_its_control() {
        let cases = [
            (FieldKind::Text, "type=\"text\""),
            (FieldKind::Textarea, "<textarea"),
            (FieldKind::Radio, "type=\"radio\""),
            (FieldKind::Checkbox, "type=\"checkbox\""),
            (FieldKind::Date, "type=\"date\""),
            (FieldKind::Number, "type=\"number\""),
            (FieldKind::File, "type=\"file\""),
            (FieldKind::Email, "type=\"email\""),
        ];
        for (kind, expected) in cases {
            let html = fragment(&survey_with(Field::new(kind).with_question("Q")));
            assert!(html.contains(expected), "{kind}: {html}");
        }
    }

    #[test]
    fn choice_without_options_renders_an_empty_group() {
        let field = Field::new(FieldKind::Radio)
            .with_question("Pick one")
            .with_options(Vec::<String>::new());
        let html = fragment(&survey_with(field));
        assert!(html.contains("<legend>Pick one</legend>"));
        assert!(!html.contains("type=\"radio\""));
    }

    #[test]
    fn required_fields_are_marked() {
        let field = Field::new(FieldKind::Email)
            .with_question("Email")
            .with_required(true);
        let html = fragment(&survey_with(field));
        assert!(html.contains(" required>"));
        assert!(html.contains("survey-required"));
    }

    #[test]
    fn question_text_is_escaped() {
        let field = Field::new(FieldKind::Text).with_question("<b>\"Name\"</b>");
        let html = fragment(&survey_with(field));
        assert!(html.contains("&lt;b&gt;&quot;Name&quot;&lt;/b&gt;"));
        assert!(!html.contains("<b>"));
    }

    #[test]
    fn errors_appear_under_their_field() {
        let field = Field::new(FieldKind::Text)
            .with_question("Name")
            .with_required(true);
        let mut errors = FieldErrors::new();
        errors.insert("Name", ValidationError::Required);

        let html = to_html_with_errors(
            &survey_with(field),
            &HtmlOptions::new().full_document(false),
            &errors,
        );
        assert!(html.contains("This question is required"));
    }

    #[test]
    fn fragment_has_no_document_wrapper() {
        let html = fragment(&Survey::blank());
        assert!(html.starts_with("<form"));
        assert!(!html.contains("<style>"));
    }

    #[test]
    fn title_option_overrides_survey_title() {
        let html = to_html(&Survey::blank(), &HtmlOptions::new().with_title("Override"));
        assert!(html.contains("<title>Override</title>"));
    }
}
