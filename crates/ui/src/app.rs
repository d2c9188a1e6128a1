use dioxus::prelude::*;
use services::{ClassroomSession, SessionView};

use crate::context::AppContext;
use crate::i18n::strings;
use crate::views::{ClassroomView, HomeView, ViewError};

#[component]
pub fn App() -> Element {
    let ctx = use_context::<AppContext>();
    let language = ctx.default_language();
    use_context_provider(|| Signal::new(ClassroomSession::new(language)));

    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }

        // Stable OS/window title.
        document::Title { "{strings(language).app_name}" }

        div { class: "app-root",
            ErrorBoundary {
                handle_error: move |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "{ViewError::Unknown.message(language)}" }
                        pre { "{errors:?}" }
                    }
                },
                Screens {}
            }
        }
    }
}

/// Home or classroom, whichever the session record says.
#[component]
pub fn Screens() -> Element {
    let session = use_context::<Signal<ClassroomSession>>();
    let view = session.read().view();

    match view {
        SessionView::Home => rsx! { HomeView {} },
        SessionView::Classroom => rsx! { ClassroomView {} },
    }
}
