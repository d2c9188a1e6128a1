#![forbid(unsafe_code)]

pub mod error;
pub mod generation;
pub mod session;

pub use error::{GenerationError, SessionError};
pub use generation::{
    CourseGenerator, GeminiConfig, GeminiCourseGenerator, build_prompt, course_schema,
};
pub use session::{ClassroomSession, SessionView};
