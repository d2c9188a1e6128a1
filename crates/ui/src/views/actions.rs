//! Actions behind the course form and the lesson quick test.

use std::sync::Arc;

use dioxus::prelude::*;
use log::{info, warn};

use course_core::model::CourseRequest;
use course_core::{Direction, QuizAttempt};
use services::{ClassroomSession, CourseGenerator};

/// Awaits one generation and folds its outcome into the session record.
pub async fn run_generation(
    session: Signal<ClassroomSession>,
    generator: Arc<dyn CourseGenerator>,
    request: CourseRequest,
) {
    let mut session = session;
    let result = generator.generate(&request).await;
    let mut guard = session.write();
    let outcome = match result {
        Ok(course) => {
            info!(
                "course ready: {:?} ({} lessons)",
                course.title,
                course.total_lessons()
            );
            guard.complete_generation(course)
        }
        Err(err) => {
            warn!("course generation failed: {err}");
            guard.fail_generation()
        }
    };
    if let Err(err) = outcome {
        warn!("session rejected generation result: {err}");
    }
}

/// Marks a request in flight and spawns its generation on the current scope.
///
/// Returns `false` when another request is still pending.
pub fn submit_course_request(
    session: Signal<ClassroomSession>,
    generator: Arc<dyn CourseGenerator>,
    request: CourseRequest,
) -> bool {
    let mut session = session;
    if let Err(err) = session.write().begin_generation() {
        warn!("ignoring course request: {err}");
        return false;
    }
    spawn(run_generation(session, generator, request));
    true
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LessonIntent {
    SelectOption { question: usize, option: String },
    CheckAnswers,
    MarkComplete,
    Step(Direction),
}

/// One callback for everything the learner can do inside a lesson. The quiz
/// attempt belongs to the lesson view; progress and position live in the
/// session.
pub fn use_lesson_dispatcher(attempt: Signal<QuizAttempt>) -> Callback<LessonIntent> {
    let session = use_context::<Signal<ClassroomSession>>();
    use_callback(move |intent: LessonIntent| {
        let mut session = session;
        let mut attempt = attempt;
        match intent {
            LessonIntent::SelectOption { question, option } => {
                attempt.write().select(question, option);
            }
            LessonIntent::CheckAnswers => attempt.write().submit(),
            LessonIntent::MarkComplete => {
                session.write().mark_active_complete();
            }
            LessonIntent::Step(direction) => {
                session.write().advance(direction);
            }
        }
    })
}
