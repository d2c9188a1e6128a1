use dioxus::document::eval;
use dioxus::prelude::*;

use course_core::Selection;
use services::ClassroomSession;

use crate::i18n;
use crate::views::{FinalSectionView, LessonView, OverviewView, Sidebar, ViewError};
use crate::vm::{lesson_kicker, map_header, map_sidebar, step_availability};

const SCROLL_TOP_JS: &str = "document.getElementById(\"classroom-main\")?.scrollTo(0, 0);";

#[component]
pub fn ClassroomView() -> Element {
    let session = use_context::<Signal<ClassroomSession>>();
    let mut scrolled_for = use_signal(|| None::<Selection>);

    // Content pane starts at the top whenever the selection changes.
    use_effect(move || {
        let selection = session.read().selection();
        if scrolled_for.peek().as_ref() == Some(&selection) {
            return;
        }
        scrolled_for.set(Some(selection));
        let _ = eval(SCROLL_TOP_JS);
    });

    let guard = session.read();
    let language = guard.language();
    let text = i18n::strings(language);
    let (Some(course), Some(navigation)) = (guard.course(), guard.navigation()) else {
        return rsx! {
            div { class: "page", p { "{ViewError::Unknown.message(language)}" } }
        };
    };

    let header = map_header(course, navigation, text);
    let sidebar = map_sidebar(course, navigation, text);
    let content = match navigation.selection() {
        Selection::Overview => rsx! {
            OverviewView { course: course.clone() }
        },
        Selection::Final(section) => rsx! {
            FinalSectionView { key: "{section}", section: *section, course: course.clone() }
        },
        Selection::Lesson { unit_id, lesson_id } => match course.lesson_in(unit_id, lesson_id) {
            Some(found) => {
                let (can_prev, can_next) = step_availability(course, lesson_id);
                rsx! {
                    LessonView {
                        key: "{lesson_id}",
                        lesson: found.lesson.clone(),
                        kicker: lesson_kicker(navigation, course, text).unwrap_or_default(),
                        unit_summary: found.unit.summary.clone(),
                        completed: navigation.is_completed(lesson_id),
                        can_prev,
                        can_next,
                    }
                }
            }
            None => rsx! {
                p { class: "lesson-missing", "{text.empty_section}" }
            },
        },
    };

    rsx! {
        div { class: "classroom",
            header { class: "classroom-header",
                button {
                    class: "btn btn-secondary",
                    id: "classroom-back",
                    r#type: "button",
                    onclick: move |_| {
                        let mut session = session;
                        session.write().return_home();
                    },
                    "← {text.back}"
                }
                div { class: "classroom-header__title",
                    strong { "{header.title}" }
                    span { class: "classroom-header__level", "{header.level}" }
                }
                div { class: "progress",
                    span { class: "progress__label", "{header.progress_label}" }
                    div { class: "progress__bar",
                        div { class: "progress__fill", style: "width: {header.percent}%" }
                    }
                }
            }
            div { class: "classroom-body",
                Sidebar { vm: sidebar, text }
                main { class: "classroom-main", id: "classroom-main", {content} }
            }
        }
    }
}
