//! # surveykit-wizard-dialoguer
//!
//! Dialoguer wizard backend for surveykit.
//!
//! Fields are asked one after another in a classic CLI wizard style. Each
//! answer is checked as soon as it is given and the question is asked again
//! until it passes, so a collected survey always submits cleanly.
//!
//! ## Example
//!
//! ```rust,no_run
//! use surveykit_wizard_dialoguer::DialoguerBackend;
//!
//! fn main() -> anyhow::Result<()> {
//!     let survey = surveykit::deserialize(&std::fs::read("cdn-survey-team.json")?)?;
//!     let submitted = surveykit::run(&DialoguerBackend::new(), &survey)?;
//!     println!("{}", submitted.message());
//!     Ok(())
//! }
//! ```

mod backend;

pub use backend::{DialoguerBackend, DialoguerError};
