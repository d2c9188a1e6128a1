use course_core::FinalSection;
use course_core::model::{Language, LessonId, UnitId};
use services::ClassroomSession;

use super::test_harness::{HarnessOptions, classroom_session, setup_view_harness};

fn render(session: ClassroomSession, options: HarnessOptions) -> String {
    let mut harness = setup_view_harness(session, options);
    harness.rebuild();
    harness.render()
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_renders_form_in_spanish() {
    let html = render(ClassroomSession::new(Language::Spanish), HarnessOptions::default());
    assert!(html.contains("aula virtual"), "missing hero in {html}");
    assert!(html.contains("Diseñar curso ahora"), "missing submit in {html}");
    assert!(html.contains("Esquemas + problemas"), "missing format option in {html}");
    assert!(!html.contains("home-resume"), "unexpected resume in {html}");
    assert!(!html.contains("home-error"), "unexpected error in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_renders_generation_error() {
    let mut session = ClassroomSession::new(Language::Spanish);
    session.begin_generation().unwrap();
    session.fail_generation().unwrap();

    let html = render(session, HarnessOptions::default());
    assert!(
        html.contains("Hubo un error al diseñar tu curso"),
        "missing error in {html}"
    );
    assert!(html.contains("Cerrar"), "missing dismiss in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_shows_loading_label() {
    let mut session = ClassroomSession::new(Language::English);
    session.begin_generation().unwrap();

    let html = render(session, HarnessOptions::default());
    assert!(html.contains("Designing your course..."), "missing loading in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_hints_when_generation_disabled() {
    let html = render(
        ClassroomSession::new(Language::English),
        HarnessOptions {
            generation_enabled: false,
        },
    );
    assert!(html.contains("COURSE_AI_API_KEY"), "missing hint in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_offers_resume_after_return_home() {
    let mut session = classroom_session(Language::English);
    session.return_home();

    let html = render(session, HarnessOptions::default());
    assert!(html.contains("Back to my course"), "missing resume in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn classroom_smoke_renders_first_lesson() {
    let html = render(classroom_session(Language::Spanish), HarnessOptions::default());
    assert!(html.contains("Intro to Astrophysics"), "missing title in {html}");
    assert!(html.contains("Progreso: 0%"), "missing progress in {html}");
    assert!(html.contains("Unidad 1: Stars"), "missing unit in {html}");
    assert!(html.contains("2.2 Atmospheres"), "missing lesson label in {html}");
    assert!(html.contains("Unidad 1 · Lección 1"), "missing kicker in {html}");
    assert!(html.contains("<strong>Light</strong>"), "missing markdown in {html}");
    assert!(html.contains("<li>step one</li>"), "missing activity in {html}");
    assert!(html.contains("Comprobar respuestas"), "missing check in {html}");
    assert!(html.contains("🎯 Evaluación Final"), "missing final link in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn classroom_smoke_reflects_completed_lessons() {
    let mut session = classroom_session(Language::English);
    session.mark_complete(&LessonId::new("U1L1"));
    session.select_lesson(UnitId::new("U1"), LessonId::new("U1L2"));

    let html = render(session, HarnessOptions::default());
    assert!(html.contains("Progress: 25%"), "missing progress in {html}");
    assert!(html.contains("sidebar__check"), "missing check mark in {html}");
    assert!(html.contains("Unit 1 · Lesson 2"), "missing kicker in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn classroom_smoke_renders_overview() {
    let mut session = classroom_session(Language::English);
    session.select_overview();

    let html = render(session, HarnessOptions::default());
    assert!(html.contains("Read a star chart"), "missing objective in {html}");
    assert!(html.contains("4 weeks"), "missing duration in {html}");
    assert!(html.contains("Start learning now!"), "missing start in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn classroom_smoke_renders_final_sections() {
    let mut session = classroom_session(Language::Spanish);

    session.select_final(FinalSection::Assessment);
    let html = render(session.clone(), HarnessOptions::default());
    assert!(html.contains("Finalizar Evaluación"), "missing finish in {html}");
    assert!(html.contains("2. Final two"), "missing question in {html}");

    session.select_final(FinalSection::Project);
    let html = render(session.clone(), HarnessOptions::default());
    assert!(html.contains("Build a planetarium"), "missing project in {html}");

    session.select_final(FinalSection::Sources);
    let html = render(session, HarnessOptions::default());
    assert!(html.contains("📖"), "missing book icon in {html}");
    assert!(html.contains("🌐"), "missing web icon in {html}");
    assert!(html.contains("https://nasa.gov"), "missing url in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn classroom_smoke_handles_unknown_lesson() {
    let mut session = classroom_session(Language::English);
    session.select_lesson(UnitId::new("U9"), LessonId::new("ghost"));

    let html = render(session, HarnessOptions::default());
    assert!(html.contains("This section has no content."), "missing fallback in {html}");
}
