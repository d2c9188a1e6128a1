use course_core::model::{CourseRequest, Language, LessonId, UnitId};
use course_core::{Direction, Selection};
use services::{ClassroomSession, SessionView};

use crate::i18n::ENGLISH;
use crate::vm::lesson_feedback;

use super::actions::LessonIntent;
use super::test_harness::{
    HarnessOptions, classroom_session, drive_dom, sample_course, setup_intent_harness,
};

fn request() -> CourseRequest {
    CourseRequest {
        topic: "Astrophysics".to_string(),
        profile: "Curious adults".to_string(),
        objective: "Read the night sky".to_string(),
        time: "4 weeks".to_string(),
        ..CourseRequest::default()
    }
}

fn lesson_selection(unit: &str, lesson: &str) -> Selection {
    Selection::Lesson {
        unit_id: UnitId::new(unit),
        lesson_id: LessonId::new(lesson),
    }
}

#[tokio::test(flavor = "current_thread")]
async fn submit_intent_enters_classroom_on_first_lesson() {
    let (mut harness, handles) =
        setup_intent_harness(ClassroomSession::new(Language::Spanish), HarnessOptions::default());
    harness.rebuild();

    handles.submit().call(request());
    drive_dom(&mut harness.dom);
    drive_dom(&mut harness.dom);

    let session = handles.session();
    assert_eq!(session.view(), SessionView::Classroom);
    assert!(!session.is_loading());
    assert_eq!(session.selection(), lesson_selection("U1", "U1L1"));
    assert_eq!(session.progress_percent(), 0);

    let html = harness.render();
    assert!(html.contains("Intro to Astrophysics"), "missing title in {html}");
    assert!(html.contains("Unidad 1 · Lección 1"), "missing kicker in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn failed_submit_stays_home_with_error_banner() {
    let (mut harness, handles) = setup_intent_harness(
        ClassroomSession::new(Language::Spanish),
        HarnessOptions {
            generation_enabled: false,
        },
    );
    harness.rebuild();

    handles.submit().call(request());
    drive_dom(&mut harness.dom);
    drive_dom(&mut harness.dom);

    let session = handles.session();
    assert_eq!(session.view(), SessionView::Home);
    assert!(session.generation_failed());
    assert!(!session.is_loading());
    assert!(session.course().is_none());

    let html = harness.render();
    assert!(
        html.contains("Hubo un error al diseñar tu curso"),
        "missing error in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn lesson_intents_check_quiz_and_mark_progress() {
    let (mut harness, handles) =
        setup_intent_harness(classroom_session(Language::English), HarnessOptions::default());
    harness.rebuild();

    let dispatch = handles.lesson();
    dispatch.call(LessonIntent::SelectOption {
        question: 0,
        option: "Yes".to_string(),
    });
    dispatch.call(LessonIntent::SelectOption {
        question: 1,
        option: "Nope".to_string(),
    });
    dispatch.call(LessonIntent::CheckAnswers);
    drive_dom(&mut harness.dom);

    let questions = sample_course().units[0].lessons[0].blocks.quick_test.clone();
    let attempt = handles.attempt();
    assert!(attempt.is_submitted());
    assert_eq!(attempt.score(&questions), 1);
    assert_eq!(
        lesson_feedback(&attempt, &questions, &ENGLISH),
        Some(("quiz-feedback--ko", ENGLISH.some_wrong))
    );

    // Selections are frozen once checked.
    dispatch.call(LessonIntent::SelectOption {
        question: 1,
        option: "Sure".to_string(),
    });
    drive_dom(&mut harness.dom);
    assert_eq!(handles.attempt().answer(1), Some("Nope"));

    dispatch.call(LessonIntent::MarkComplete);
    drive_dom(&mut harness.dom);
    let session = handles.session();
    assert!(session.is_completed(&LessonId::new("U1L1")));
    assert_eq!(session.progress_percent(), 25);
    assert_eq!(session.selection(), lesson_selection("U1", "U1L1"));

    dispatch.call(LessonIntent::Step(Direction::Next));
    drive_dom(&mut harness.dom);
    assert_eq!(handles.session().selection(), lesson_selection("U1", "U1L2"));

    let html = harness.render();
    assert!(html.contains("Progress: 25%"), "missing progress in {html}");
    assert!(html.contains("Unit 1 · Lesson 2"), "missing kicker in {html}");
}
