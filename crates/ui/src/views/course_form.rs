use dioxus::prelude::*;
use course_core::model::{CourseRequest, Format, Level};
use services::ClassroomSession;

use crate::context::AppContext;
use crate::i18n;
use crate::views::submit_course_request;
use crate::vm::{format_options, level_options, missing_fields_message};

/// The course request form. Submitting runs one generation against the
/// session record; the form itself only owns the draft.
#[component]
pub fn CourseForm() -> Element {
    let ctx = use_context::<AppContext>();
    let session = use_context::<Signal<ClassroomSession>>();
    let mut draft = use_signal(CourseRequest::default);
    let missing = use_signal(|| None::<String>);

    let (language, loading) = {
        let guard = session.read();
        (guard.language(), guard.is_loading())
    };
    let text = i18n::strings(language);
    let (level, format) = {
        let guard = draft.read();
        (guard.level, guard.format)
    };

    let generator = ctx.course_generator();
    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let mut missing = missing;

        let mut request = draft.read().clone();
        request.language = session.read().language();
        if let Some(message) = missing_fields_message(&request, i18n::strings(request.language)) {
            missing.set(Some(message));
            return;
        }
        missing.set(None);
        submit_course_request(session, generator.clone(), request);
    };

    let submit_label = if loading { text.submitting } else { text.submit };

    rsx! {
        form { class: "course-form", id: "course-form", onsubmit: on_submit,
            div { class: "field field--wide",
                label { r#for: "form-topic", "{text.topic_label}" }
                input {
                    id: "form-topic",
                    r#type: "text",
                    placeholder: "{text.topic_placeholder}",
                    value: "{draft.read().topic}",
                    disabled: loading,
                    oninput: move |evt: FormEvent| draft.write().topic = evt.value(),
                }
            }
            div { class: "field",
                label { r#for: "form-level", "{text.level_label}" }
                select {
                    id: "form-level",
                    disabled: loading,
                    onchange: move |evt: FormEvent| {
                        if let Some(level) = Level::from_key(&evt.value()) {
                            draft.write().level = level;
                        }
                    },
                    for item in level_options(level, language) {
                        option { key: "{item.key}", value: "{item.key}", selected: item.selected, "{item.label}" }
                    }
                }
            }
            div { class: "field",
                label { r#for: "form-format", "{text.format_label}" }
                select {
                    id: "form-format",
                    disabled: loading,
                    onchange: move |evt: FormEvent| {
                        if let Some(format) = Format::from_key(&evt.value()) {
                            draft.write().format = format;
                        }
                    },
                    for item in format_options(format, language) {
                        option { key: "{item.key}", value: "{item.key}", selected: item.selected, "{item.label}" }
                    }
                }
            }
            div { class: "field",
                label { r#for: "form-profile", "{text.profile_label}" }
                input {
                    id: "form-profile",
                    r#type: "text",
                    placeholder: "{text.profile_placeholder}",
                    value: "{draft.read().profile}",
                    disabled: loading,
                    oninput: move |evt: FormEvent| draft.write().profile = evt.value(),
                }
            }
            div { class: "field",
                label { r#for: "form-time", "{text.time_label}" }
                input {
                    id: "form-time",
                    r#type: "text",
                    placeholder: "{text.time_placeholder}",
                    value: "{draft.read().time}",
                    disabled: loading,
                    oninput: move |evt: FormEvent| draft.write().time = evt.value(),
                }
            }
            div { class: "field field--wide",
                label { r#for: "form-objective", "{text.objective_label}" }
                input {
                    id: "form-objective",
                    r#type: "text",
                    placeholder: "{text.objective_placeholder}",
                    value: "{draft.read().objective}",
                    disabled: loading,
                    oninput: move |evt: FormEvent| draft.write().objective = evt.value(),
                }
            }
            if let Some(message) = missing.read().as_ref() {
                p { class: "form-missing", role: "alert", "{message}" }
            }
            div { class: "form-actions",
                button {
                    class: "btn btn-primary",
                    id: "form-submit",
                    r#type: "submit",
                    disabled: loading,
                    "{submit_label}"
                }
            }
        }
    }
}
