use thiserror::Error;

/// Errors surfaced by the scrollwork core.
///
/// The core never substitutes defaults: a bad outline or configuration is
/// reported to the caller, which decides what to do (the CLI falls back to
/// the built-in outline only when no input file was given at all).
#[derive(Debug, Error)]
pub enum ScrollworkError {
    #[error("invalid outline boundary: {0}")]
    InvalidBoundary(String),

    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}
