mod actions;
mod classroom;
mod course_form;
mod final_section;
mod home;
mod lesson;
mod overview;
mod quiz;
mod sidebar;
mod state;

pub use actions::{LessonIntent, run_generation, submit_course_request, use_lesson_dispatcher};
pub use classroom::ClassroomView;
pub use course_form::CourseForm;
pub use final_section::FinalSectionView;
pub use home::HomeView;
pub use lesson::LessonView;
pub use overview::OverviewView;
pub use quiz::QuizQuestion;
pub use sidebar::Sidebar;
pub use state::{ViewError, ViewState, generation_state};

#[cfg(test)]
mod intent_smoke;
#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;
