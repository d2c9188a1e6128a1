use dioxus::prelude::*;

use course_core::model::{Course, ProjectProposal, Question, Source, SourceKind};
use course_core::{FinalSection, QuizAttempt};
use services::ClassroomSession;

use crate::context::AppContext;
use crate::i18n::{self, Strings};
use crate::views::QuizQuestion;
use crate::vm::{assessment_verdict, score_label};

#[component]
pub fn FinalSectionView(section: FinalSection, course: Course) -> Element {
    let session = use_context::<Signal<ClassroomSession>>();
    let text = i18n::strings(session.read().language());

    match section {
        FinalSection::Assessment => rsx! {
            AssessmentView { questions: course.final_assessment.clone(), text }
        },
        FinalSection::Project => rsx! {
            ProjectsView { projects: course.final_projects.clone(), text }
        },
        FinalSection::Sources => rsx! {
            SourcesView { sources: course.sources.clone(), text }
        },
    }
}

#[component]
fn AssessmentView(questions: Vec<Question>, text: &'static Strings) -> Element {
    let attempt = use_signal(QuizAttempt::new);
    let (submitted, score, verdict) = {
        let guard = attempt.read();
        (
            guard.is_submitted(),
            score_label(&guard, &questions),
            assessment_verdict(&guard, &questions, text),
        )
    };

    rsx! {
        article { class: "final final--assessment",
            h2 { "{text.assessment_title}" }
            p { class: "final__subtitle", "{text.assessment_subtitle}" }
            for (index, question) in questions.into_iter().enumerate() {
                QuizQuestion {
                    key: "{index}",
                    index,
                    question,
                    attempt,
                    on_select: move |option: String| {
                        let mut attempt = attempt;
                        attempt.write().select(index, option);
                    },
                }
            }
            if submitted {
                div { class: "lesson-block final__result", role: "status",
                    h3 { "{text.your_result}" }
                    div { class: "score", "{score}" }
                    if let Some(verdict) = verdict {
                        p { "{verdict}" }
                    }
                }
            } else {
                button {
                    class: "btn btn-primary",
                    id: "assessment-finish",
                    r#type: "button",
                    onclick: move |_| {
                        let mut attempt = attempt;
                        attempt.write().submit();
                    },
                    "{text.finish_assessment}"
                }
            }
        }
    }
}

#[component]
fn ProjectsView(projects: Vec<ProjectProposal>, text: &'static Strings) -> Element {
    rsx! {
        article { class: "final final--projects",
            h2 { "{text.projects_title}" }
            p { class: "final__subtitle", "{text.projects_subtitle}" }
            if projects.is_empty() {
                p { "{text.empty_section}" }
            }
            for (index, project) in projects.iter().enumerate() {
                div { class: "lesson-block", key: "{index}",
                    span { class: "final__number", "{index + 1}" }
                    h3 { "{project.title}" }
                    p { "{project.description}" }
                }
            }
        }
    }
}

#[component]
fn SourcesView(sources: Vec<Source>, text: &'static Strings) -> Element {
    rsx! {
        article { class: "final final--sources",
            h2 { "{text.sources_title}" }
            if sources.is_empty() {
                p { "{text.empty_section}" }
            }
            for (index, source) in sources.into_iter().enumerate() {
                SourceItem { key: "{index}", source }
            }
        }
    }
}

#[component]
fn SourceItem(source: Source) -> Element {
    let ctx = use_context::<AppContext>();
    let icon = match source.kind() {
        SourceKind::Book => "📖",
        SourceKind::Web => "🌐",
    };
    let link = source.link();

    rsx! {
        div { class: "source-item",
            span { class: "source-item__icon", "{icon}" }
            div {
                button {
                    r#type: "button",
                    disabled: link.is_none(),
                    onclick: move |_| {
                        if let Some(link) = link.as_ref() {
                            ctx.link_opener().open_url(link.as_str());
                        }
                    },
                    "{source.title}"
                }
                p { class: "source-item__url", "{source.url}" }
            }
        }
    }
}
