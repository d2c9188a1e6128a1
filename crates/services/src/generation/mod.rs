//! The boundary to the external course generator.

mod gemini;
mod prompt;
mod schema;

use async_trait::async_trait;

use course_core::model::{Course, CourseRequest};

use crate::error::GenerationError;

pub use gemini::{GeminiConfig, GeminiCourseGenerator};
pub use prompt::build_prompt;
pub use schema::course_schema;

/// Produces a complete, validated course for a request, or fails as a whole.
#[async_trait]
pub trait CourseGenerator: Send + Sync {
    /// # Errors
    ///
    /// Returns `GenerationError` for any failure; no partial course is returned.
    async fn generate(&self, request: &CourseRequest) -> Result<Course, GenerationError>;

    /// Whether a request can succeed at all (e.g. an API key is configured).
    fn enabled(&self) -> bool {
        true
    }
}
