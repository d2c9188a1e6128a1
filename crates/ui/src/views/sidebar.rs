use dioxus::prelude::*;

use services::ClassroomSession;

use crate::i18n::Strings;
use crate::vm::SidebarVm;

fn item_class(active: bool) -> &'static str {
    if active {
        "sidebar__item sidebar__item--active"
    } else {
        "sidebar__item"
    }
}

#[component]
pub fn Sidebar(vm: SidebarVm, text: &'static Strings) -> Element {
    let session = use_context::<Signal<ClassroomSession>>();

    rsx! {
        aside { class: "sidebar",
            button {
                class: item_class(vm.overview_active),
                id: "sidebar-overview",
                r#type: "button",
                onclick: move |_| {
                    let mut session = session;
                    session.write().select_overview();
                },
                span { class: "sidebar__heading", "{text.sidebar_title}" }
            }
            for unit in vm.units {
                div { class: "sidebar__unit", key: "{unit.unit_id}",
                    p { class: "sidebar__unit-title", "{unit.title}" }
                    for lesson in unit.lessons {
                        button {
                            key: "{lesson.lesson_id}",
                            class: item_class(lesson.active),
                            r#type: "button",
                            onclick: {
                                let unit_id = lesson.unit_id.clone();
                                let lesson_id = lesson.lesson_id.clone();
                                move |_| {
                                    let mut session = session;
                                    session
                                        .write()
                                        .select_lesson(unit_id.clone(), lesson_id.clone());
                                }
                            },
                            span { "{lesson.label}" }
                            if lesson.completed && !lesson.active {
                                span { class: "sidebar__check", "✓" }
                            }
                        }
                    }
                }
            }
            div { class: "sidebar__finals",
                for item in vm.finals {
                    button {
                        key: "{item.section}",
                        class: item_class(item.active),
                        r#type: "button",
                        onclick: move |_| {
                            let mut session = session;
                            session.write().select_final(item.section);
                        },
                        "{item.label}"
                    }
                }
            }
        }
    }
}
