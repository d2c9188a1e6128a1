use course_core::OptionState;
use course_core::QuizAttempt;
use course_core::model::Question;

use crate::i18n::Strings;

#[must_use]
pub fn option_class(state: OptionState) -> &'static str {
    match state {
        OptionState::Idle => "quiz-option",
        OptionState::Selected => "quiz-option quiz-option--selected",
        OptionState::Correct => "quiz-option quiz-option--correct",
        OptionState::Wrong => "quiz-option quiz-option--wrong",
        OptionState::Muted => "quiz-option quiz-option--muted",
    }
}

/// `"{score} / {total}"`.
#[must_use]
pub fn score_label(attempt: &QuizAttempt, questions: &[Question]) -> String {
    format!("{} / {}", attempt.score(questions), questions.len())
}

/// Feedback line under a submitted lesson quiz. `None` before submission.
#[must_use]
pub fn lesson_feedback(
    attempt: &QuizAttempt,
    questions: &[Question],
    strings: &Strings,
) -> Option<(&'static str, &'static str)> {
    if !attempt.is_submitted() {
        return None;
    }
    Some(if attempt.all_correct(questions) {
        ("quiz-feedback--ok", strings.all_correct)
    } else {
        ("quiz-feedback--ko", strings.some_wrong)
    })
}

/// Verdict under a submitted final assessment. `None` before submission.
#[must_use]
pub fn assessment_verdict(
    attempt: &QuizAttempt,
    questions: &[Question],
    strings: &Strings,
) -> Option<&'static str> {
    attempt.is_submitted().then(|| {
        if attempt.passed(questions) {
            strings.assessment_passed
        } else {
            strings.assessment_failed
        }
    })
}
