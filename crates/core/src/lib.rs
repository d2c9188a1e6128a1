#![forbid(unsafe_code)]

pub mod error;
pub mod model;
pub mod navigation;
pub mod quiz;

pub use error::CourseError;
pub use navigation::{Direction, FinalSection, NavigationState, Selection};
pub use quiz::{OptionState, QuizAttempt};
