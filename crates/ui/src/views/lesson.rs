use dioxus::prelude::*;

use course_core::model::Lesson;
use course_core::{Direction, QuizAttempt};
use services::ClassroomSession;

use crate::i18n;
use crate::views::{LessonIntent, QuizQuestion, use_lesson_dispatcher};
use crate::vm::{lesson_feedback, markdown_to_html};

/// The four blocks of one lesson plus its quick test. Keyed by lesson id at
/// the call site, so the quiz attempt starts fresh on every visit.
#[component]
pub fn LessonView(
    lesson: Lesson,
    kicker: String,
    unit_summary: String,
    completed: bool,
    can_prev: bool,
    can_next: bool,
) -> Element {
    let session = use_context::<Signal<ClassroomSession>>();
    let attempt = use_signal(QuizAttempt::new);
    let dispatch = use_lesson_dispatcher(attempt);
    let text = i18n::strings(session.read().language());

    let questions = lesson.blocks.quick_test.clone();
    let (submitted, fully_answered, feedback) = {
        let guard = attempt.read();
        (
            guard.is_submitted(),
            guard.is_fully_answered(&questions),
            lesson_feedback(&guard, &questions, text),
        )
    };

    let key_idea = markdown_to_html(&lesson.blocks.key_idea);
    let example = markdown_to_html(&lesson.blocks.applied_example);
    let activity = markdown_to_html(&lesson.blocks.activity);

    rsx! {
        article { class: "lesson", id: "lesson-{lesson.id}",
            header { class: "lesson__header",
                span { class: "lesson__kicker", "{kicker}" }
                h2 { class: "lesson__title", "{lesson.title}" }
                p { class: "lesson__summary", "{unit_summary}" }
            }

            section { class: "lesson-block lesson-block--idea",
                h3 { "💡 {text.key_idea}" }
                div { class: "lesson-text", dangerous_inner_html: "{key_idea}" }
            }
            section { class: "lesson-block lesson-block--example",
                h3 { "🧪 {text.example}" }
                div { class: "lesson-text", dangerous_inner_html: "{example}" }
            }
            section { class: "lesson-block lesson-block--activity",
                h3 { "✍️ {text.activity}" }
                div { class: "lesson-text", dangerous_inner_html: "{activity}" }
            }

            section { class: "lesson-block lesson-quiz",
                h3 { "📝 {text.quick_test}" }
                for (index, question) in questions.into_iter().enumerate() {
                    QuizQuestion {
                        key: "{index}",
                        index,
                        question,
                        attempt,
                        on_select: move |option: String| {
                            dispatch.call(LessonIntent::SelectOption { question: index, option });
                        },
                    }
                }
                if !submitted {
                    button {
                        class: "btn btn-primary",
                        id: "lesson-check",
                        r#type: "button",
                        disabled: !fully_answered,
                        onclick: move |_| dispatch.call(LessonIntent::CheckAnswers),
                        "{text.check_answers}"
                    }
                } else {
                    if let Some((class, message)) = feedback {
                        p { class: "quiz-feedback {class}", role: "status", "{message}" }
                    }
                    if completed {
                        p { class: "lesson-completed", "{text.lesson_completed}" }
                    } else {
                        button {
                            class: "btn btn-success",
                            id: "lesson-complete",
                            r#type: "button",
                            onclick: move |_| dispatch.call(LessonIntent::MarkComplete),
                            "{text.complete_and_continue}"
                        }
                    }
                }
            }

            nav { class: "lesson-nav",
                button {
                    class: "btn btn-secondary",
                    id: "lesson-prev",
                    r#type: "button",
                    disabled: !can_prev,
                    onclick: move |_| dispatch.call(LessonIntent::Step(Direction::Prev)),
                    "← {text.prev}"
                }
                button {
                    class: "btn btn-primary",
                    id: "lesson-next",
                    r#type: "button",
                    disabled: !can_next,
                    onclick: move |_| dispatch.call(LessonIntent::Step(Direction::Next)),
                    "{text.next} →"
                }
            }
        }
    }
}
