//! Core types for the surveykit crate.
//!
//! This crate provides the foundational types for authoring and filling surveys:
//! - `Survey` - The document: title, description and an ordered list of fields
//! - `Field`, `FieldKind` and `FieldInput` - Individual questions and their input types
//! - `Control` - The widget a renderer should present for a field
//! - `Responses` and `ResponseValue` - Answers keyed by question text
//! - `FormBackend` trait - For implementing renderers that collect answers

mod field;
pub use field::{Control, Field, FieldInput, FieldKind, UnknownFieldKind};

mod survey;
pub use survey::Survey;

mod response_value;
pub use response_value::{FileRef, ResponseValue};

mod responses;
pub use responses::{ResponseError, Responses};

mod error;
pub use error::SurveyError;

mod traits;
pub use traits::FormBackend;
