mod course;
mod ids;
mod request;

pub use course::{
    Course, Lesson, LessonBlocks, LessonRef, ProjectProposal, Question, Source, SourceKind, Unit,
};
pub use ids::{LessonId, UnitId};
pub use request::{CourseRequest, Format, Language, Level, ParseLanguageError, RequestField};

#[cfg(test)]
pub(crate) use course::fixtures;
