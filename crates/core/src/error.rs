use thiserror::Error;

use crate::model::{LessonId, UnitId};

/// Validation failures for a decoded course tree.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CourseError {
    #[error("course field `{0}` cannot be empty")]
    EmptyField(String),

    #[error("unit id `{0}` is used more than once")]
    DuplicateUnitId(UnitId),

    #[error("lesson id `{0}` is used more than once")]
    DuplicateLessonId(LessonId),
}
