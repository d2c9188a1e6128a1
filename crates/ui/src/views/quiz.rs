use dioxus::prelude::*;

use course_core::QuizAttempt;
use course_core::model::Question;

use crate::vm::option_class;

/// One question with its option buttons. Shared by the lesson quick test and
/// the final assessment; the caller owns the attempt and applies selections.
#[component]
pub fn QuizQuestion(
    index: usize,
    question: Question,
    attempt: Signal<QuizAttempt>,
    on_select: EventHandler<String>,
) -> Element {
    let (submitted, options) = {
        let guard = attempt.read();
        let options: Vec<(String, &'static str)> = question
            .options
            .iter()
            .map(|option| {
                let state = guard.option_state(index, &question, option);
                (option.clone(), option_class(state))
            })
            .collect();
        (guard.is_submitted(), options)
    };
    let number = index + 1;

    rsx! {
        div { class: "quiz-question",
            p { class: "quiz-question__text", "{number}. {question.question}" }
            for (option_index, (option, class)) in options.into_iter().enumerate() {
                button {
                    key: "{option_index}",
                    class,
                    r#type: "button",
                    disabled: submitted,
                    onclick: {
                        let option = option.clone();
                        move |_| on_select.call(option.clone())
                    },
                    "{option}"
                }
            }
        }
    }
}
