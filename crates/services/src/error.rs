//! Shared error types for the services crate.

use thiserror::Error;

use course_core::CourseError;

/// Errors emitted at the generation boundary.
///
/// Callers are expected to treat every variant the same way ("course
/// generation failed"); the variants exist for logs.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GenerationError {
    #[error("course generation is not configured")]
    Disabled,
    #[error("generator returned an empty response")]
    EmptyResponse,
    #[error("generator request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("generator response is not a valid course: {0}")]
    Decode(#[from] serde_json::Error),
    #[error(transparent)]
    Invalid(#[from] CourseError),
}

/// Errors emitted by `ClassroomSession`.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("a course is already being generated")]
    AlreadyLoading,
    #[error("no generation is in progress")]
    NotLoading,
}
