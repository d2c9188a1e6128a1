use dioxus::prelude::*;

use course_core::model::Course;
use services::ClassroomSession;

use crate::i18n;

#[component]
pub fn OverviewView(course: Course) -> Element {
    let session = use_context::<Signal<ClassroomSession>>();
    let text = i18n::strings(session.read().language());

    rsx! {
        article { class: "overview",
            h2 { class: "overview__title", "{course.title}" }
            p { class: "overview__description", "{course.description}" }
            div { class: "overview__facts",
                div { class: "lesson-block",
                    span { class: "overview__fact-label", "{text.duration}" }
                    p { strong { "{course.duration}" } }
                }
                div { class: "lesson-block",
                    span { class: "overview__fact-label", "{text.level}" }
                    p { strong { "{course.level}" } }
                }
            }
            section { class: "lesson-block",
                h3 { "{text.objectives}" }
                ul {
                    for (index, objective) in course.learning_objectives.iter().enumerate() {
                        li { key: "{index}", "{objective}" }
                    }
                }
            }
            button {
                class: "btn btn-primary",
                id: "overview-start",
                r#type: "button",
                onclick: move |_| {
                    let mut session = session;
                    session.write().start_learning();
                },
                "{text.start_learning}"
            }
        }
    }
}
