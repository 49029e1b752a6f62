//! # surveykit-doc-html
//!
//! Render a surveykit [`Survey`](surveykit::Survey) as a fillable HTML form.
//!
//! Every field becomes exactly one control, chosen by its kind:
//! single-line and multi-line text, radio and checkbox groups, and native
//! date, number, email and file inputs.
//!
//! ## Example
//!
//! ```rust
//! use surveykit::{Field, FieldKind, Survey};
//! use surveykit_doc_html::{HtmlOptions, to_html};
//!
//! let survey = Survey::new("Feedback", "Tell us what you think")
//!     .unwrap()
//!     .with_field(Field::new(FieldKind::Textarea).with_question("Comments"));
//!
//! let html = to_html(&survey, &HtmlOptions::new());
//! assert!(html.contains("<textarea"));
//! ```

mod generator;

pub use generator::{HtmlOptions, escape_html, to_html, to_html_with_errors};
