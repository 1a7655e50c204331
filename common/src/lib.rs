//! Face Check Common Library
//!
//! CLIとWeb(WASM)で共有される型とワークフロー中核

pub mod error;
pub mod form;
pub mod parser;
pub mod summary;
pub mod types;

pub use error::{Error, Result};
pub use form::{ComposeForm, DetectionField, ResultState};
pub use parser::parse_results;
pub use summary::ResultSummary;
pub use types::{Detection, DetectionResult, SourceImage, SubmissionRequest};
