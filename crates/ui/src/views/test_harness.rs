use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;

use course_core::QuizAttempt;
use course_core::model::{
    Course, CourseRequest, Language, Lesson, LessonBlocks, LessonId, ProjectProposal, Question,
    Source, Unit, UnitId,
};
use services::{ClassroomSession, CourseGenerator, GenerationError};

use crate::app::Screens;
use crate::context::{AppContext, UiApp, build_app_context};
use crate::platform::{LinkOpenerRef, UiLinkOpener};
use crate::views::{LessonIntent, submit_course_request, use_lesson_dispatcher};

struct FakeGenerator {
    enabled: bool,
}

#[async_trait::async_trait]
impl CourseGenerator for FakeGenerator {
    async fn generate(&self, _request: &CourseRequest) -> Result<Course, GenerationError> {
        if self.enabled {
            Ok(sample_course())
        } else {
            Err(GenerationError::Disabled)
        }
    }

    fn enabled(&self) -> bool {
        self.enabled
    }
}

struct NoopOpener;

impl UiLinkOpener for NoopOpener {
    fn open_url(&self, _url: &str) {}
}

struct TestApp {
    language: Language,
    generator: Arc<FakeGenerator>,
}

impl UiApp for TestApp {
    fn course_generator(&self) -> Arc<dyn CourseGenerator> {
        self.generator.clone()
    }

    fn default_language(&self) -> Language {
        self.language
    }

    fn link_opener(&self) -> LinkOpenerRef {
        Arc::new(NoopOpener)
    }
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    session: ClassroomSession,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewHarnessRoot(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| Signal::new(props.session.clone()));
    rsx! { Screens {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub struct HarnessOptions {
    pub generation_enabled: bool,
}

impl Default for HarnessOptions {
    fn default() -> Self {
        Self {
            generation_enabled: true,
        }
    }
}

pub fn setup_view_harness(session: ClassroomSession, options: HarnessOptions) -> ViewHarness {
    let app = Arc::new(TestApp {
        language: session.language(),
        generator: Arc::new(FakeGenerator {
            enabled: options.generation_enabled,
        }),
    });
    let dom = VirtualDom::new_with_props(ViewHarnessRoot, ViewHarnessProps { app, session });
    ViewHarness { dom }
}

/// Callbacks and state snapshots captured from inside the dom.
#[derive(Clone, Default)]
pub struct IntentHandles {
    submit: Rc<RefCell<Option<Callback<CourseRequest>>>>,
    lesson: Rc<RefCell<Option<Callback<LessonIntent>>>>,
    session: Rc<RefCell<Option<ClassroomSession>>>,
    attempt: Rc<RefCell<Option<QuizAttempt>>>,
}

impl PartialEq for IntentHandles {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl IntentHandles {
    pub fn submit(&self) -> Callback<CourseRequest> {
        self.submit.borrow().clone().expect("submit registered")
    }

    pub fn lesson(&self) -> Callback<LessonIntent> {
        self.lesson.borrow().clone().expect("lesson dispatcher registered")
    }

    pub fn session(&self) -> ClassroomSession {
        self.session.borrow().clone().expect("session recorded")
    }

    pub fn attempt(&self) -> QuizAttempt {
        self.attempt.borrow().clone().expect("attempt recorded")
    }
}

#[component]
fn IntentRecorder(handles: IntentHandles) -> Element {
    let ctx = use_context::<AppContext>();
    let session = use_context::<Signal<ClassroomSession>>();
    let attempt = use_signal(QuizAttempt::new);
    let lesson = use_lesson_dispatcher(attempt);
    let generator = ctx.course_generator();
    let submit = use_callback(move |request: CourseRequest| {
        submit_course_request(session, generator.clone(), request);
    });

    let mut registered = use_signal(|| false);
    if !registered() {
        registered.set(true);
        *handles.submit.borrow_mut() = Some(submit);
        *handles.lesson.borrow_mut() = Some(lesson);
    }
    *handles.session.borrow_mut() = Some(session.read().clone());
    *handles.attempt.borrow_mut() = Some(attempt.read().clone());

    rsx! { div {} }
}

#[derive(Props, Clone)]
struct IntentHarnessProps {
    app: Arc<TestApp>,
    session: ClassroomSession,
    handles: IntentHandles,
}

impl PartialEq for IntentHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn IntentHarnessRoot(props: IntentHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| Signal::new(props.session.clone()));
    rsx! {
        IntentRecorder { handles: props.handles.clone() }
        Screens {}
    }
}

/// Like `setup_view_harness`, plus handles for driving the form and lesson
/// actions directly.
pub fn setup_intent_harness(
    session: ClassroomSession,
    options: HarnessOptions,
) -> (ViewHarness, IntentHandles) {
    let handles = IntentHandles::default();
    let app = Arc::new(TestApp {
        language: session.language(),
        generator: Arc::new(FakeGenerator {
            enabled: options.generation_enabled,
        }),
    });
    let dom = VirtualDom::new_with_props(
        IntentHarnessRoot,
        IntentHarnessProps {
            app,
            session,
            handles: handles.clone(),
        },
    );
    (ViewHarness { dom }, handles)
}

/// A session already sitting in the classroom on `sample_course()`.
pub fn classroom_session(language: Language) -> ClassroomSession {
    let mut session = ClassroomSession::new(language);
    session.begin_generation().expect("begin");
    session
        .complete_generation(sample_course())
        .expect("complete");
    session
}

fn question(text: &str, correct: &str) -> Question {
    Question {
        question: text.to_string(),
        options: vec![correct.to_string(), "Nope".to_string()],
        correct_answer: correct.to_string(),
    }
}

fn lesson(id: &str, title: &str) -> Lesson {
    Lesson {
        id: LessonId::new(id),
        title: title.to_string(),
        blocks: LessonBlocks {
            key_idea: format!("**{title}** matters"),
            applied_example: "A worked example".to_string(),
            activity: "- step one\n- step two".to_string(),
            quick_test: vec![question("Pick one", "Yes"), question("Pick again", "Sure")],
        },
    }
}

pub fn sample_course() -> Course {
    Course {
        title: "Intro to Astrophysics".to_string(),
        description: "Stars and planets".to_string(),
        level: "Beginner".to_string(),
        target_profile: "Students".to_string(),
        duration: "4 weeks".to_string(),
        learning_objectives: vec!["Read a star chart".to_string(), "Explain orbits".to_string()],
        units: vec![
            Unit {
                id: UnitId::new("U1"),
                title: "Stars".to_string(),
                summary: "How stars shine".to_string(),
                lessons: vec![lesson("U1L1", "Light"), lesson("U1L2", "Fusion")],
            },
            Unit {
                id: UnitId::new("U2"),
                title: "Planets".to_string(),
                summary: "Worlds around stars".to_string(),
                lessons: vec![lesson("U2L1", "Orbits"), lesson("U2L2", "Atmospheres")],
            },
        ],
        final_assessment: vec![question("Final one", "Yes"), question("Final two", "Sure")],
        final_projects: vec![ProjectProposal {
            title: "Build a planetarium".to_string(),
            description: "Model the night sky".to_string(),
        }],
        sources: vec![
            Source {
                title: "Cosmos".to_string(),
                url: "https://example.com/cosmos".to_string(),
                kind_tag: "libro".to_string(),
            },
            Source::web("NASA", "https://nasa.gov"),
        ],
    }
}
