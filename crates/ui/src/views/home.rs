use dioxus::prelude::*;

use course_core::model::Language;
use services::ClassroomSession;

use crate::context::AppContext;
use crate::i18n;
use crate::views::{CourseForm, ViewState, generation_state};
use crate::vm::language_options;

#[component]
pub fn HomeView() -> Element {
    let ctx = use_context::<AppContext>();
    let session = use_context::<Signal<ClassroomSession>>();
    let (language, state, can_resume) = {
        let guard = session.read();
        (
            guard.language(),
            generation_state(&guard),
            guard.course().is_some() && !guard.is_loading(),
        )
    };
    let text = i18n::strings(language);

    rsx! {
        div { class: "page home-page",
            header { class: "home-header",
                span { class: "brand", "🎓 {text.app_name}" }
                LanguagePicker { current: language }
            }

            section { class: "hero",
                h1 {
                    "{text.hero_prefix} "
                    span { class: "highlight", "{text.hero_highlight}" }
                    " {text.hero_suffix}"
                }
                p { "{text.hero_subtitle}" }
            }

            if !ctx.generation_enabled() {
                div { class: "banner banner--info", role: "status", "{text.generator_disabled}" }
            }

            if let ViewState::Error(err) = state {
                div { class: "banner banner--error", role: "alert", id: "home-error",
                    span { "{err.message(language)}" }
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| {
                            let mut session = session;
                            session.write().dismiss_error();
                        },
                        "{text.dismiss}"
                    }
                }
            }

            if can_resume {
                div { class: "resume",
                    button {
                        class: "btn btn-secondary",
                        id: "home-resume",
                        r#type: "button",
                        onclick: move |_| {
                            let mut session = session;
                            session.write().resume();
                        },
                        "{text.resume_course}"
                    }
                }
            }

            CourseForm {}

            section { class: "features",
                for (icon, title, body) in text.features {
                    div { class: "feature-card", key: "{title}",
                        div { class: "feature-card__icon", "{icon}" }
                        h3 { "{title}" }
                        p { "{body}" }
                    }
                }
            }
        }
    }
}

#[component]
fn LanguagePicker(current: Language) -> Element {
    let session = use_context::<Signal<ClassroomSession>>();
    let text = i18n::strings(current);

    rsx! {
        label { class: "language-picker",
            "{text.language_label}"
            select {
                id: "home-language",
                onchange: move |evt: FormEvent| {
                    let mut session = session;
                    if let Ok(language) = evt.value().parse::<Language>() {
                        session.write().set_language(language);
                    }
                },
                for item in language_options(current) {
                    option {
                        key: "{item.key}",
                        value: "{item.key}",
                        selected: item.selected,
                        "{item.label}"
                    }
                }
            }
        }
    }
}
