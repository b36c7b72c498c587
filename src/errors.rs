//! Error taxonomy for the grouping pipeline
//!
//! Three conditions are fatal and abort the run before anything is written:
//! a bad config document, a bad input document, and an assembled plan that
//! fails its own output-schema check. Per-file read failures are the one
//! recoverable error class; they are logged and the file is dropped from
//! the loaded set (see `loader`), so they never appear here.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GrouperError {
    /// Missing or malformed config document, or a config value that fails
    /// validation (e.g. confidence threshold outside [0,1]).
    #[error("invalid config: {0}")]
    Config(String),

    /// Malformed input inventory document.
    #[error("invalid input document: {0}")]
    Input(String),

    /// The assembled plan violated its own output schema. Nothing is
    /// written when this fires.
    #[error("plan failed output validation: {0}")]
    OutputValidation(String),
}
