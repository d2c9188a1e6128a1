use std::collections::BTreeMap;

use crate::model::Question;

/// How a single option button should look.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionState {
    /// Before submission, not chosen.
    Idle,
    /// Before submission, chosen.
    Selected,
    /// After submission, the canonical answer.
    Correct,
    /// After submission, chosen but wrong.
    Wrong,
    /// After submission, neither chosen nor correct.
    Muted,
}

/// One learner attempt at a quiz (a lesson's quick test or the final
/// assessment).
///
/// Selections are free until `submit`; afterwards the attempt is frozen. There
/// is no reset: a retry is a new `QuizAttempt`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuizAttempt {
    answers: BTreeMap<usize, String>,
    submitted: bool,
}

impl QuizAttempt {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `option` for question `index`, replacing any earlier choice.
    ///
    /// Returns `false` (and changes nothing) once the attempt is submitted.
    pub fn select(&mut self, index: usize, option: impl Into<String>) -> bool {
        if self.submitted {
            return false;
        }
        self.answers.insert(index, option.into());
        true
    }

    #[must_use]
    pub fn answer(&self, index: usize) -> Option<&str> {
        self.answers.get(&index).map(String::as_str)
    }

    pub fn submit(&mut self) {
        self.submitted = true;
    }

    #[must_use]
    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    /// Every question has a selection.
    #[must_use]
    pub fn is_fully_answered(&self, questions: &[Question]) -> bool {
        (0..questions.len()).all(|index| self.answers.contains_key(&index))
    }

    /// Number of questions whose selection equals the correct answer exactly.
    #[must_use]
    pub fn score(&self, questions: &[Question]) -> usize {
        questions
            .iter()
            .enumerate()
            .filter(|(index, question)| self.is_correct_at(*index, question))
            .count()
    }

    /// Unanswered questions count as incorrect; an empty quiz is all correct.
    #[must_use]
    pub fn all_correct(&self, questions: &[Question]) -> bool {
        questions
            .iter()
            .enumerate()
            .all(|(index, question)| self.is_correct_at(index, question))
    }

    /// Final-assessment verdict: strictly more than half correct.
    #[must_use]
    pub fn passed(&self, questions: &[Question]) -> bool {
        self.score(questions) * 2 > questions.len()
    }

    #[must_use]
    pub fn option_state(&self, index: usize, question: &Question, option: &str) -> OptionState {
        let chosen = self.answer(index) == Some(option);
        if !self.submitted {
            return if chosen {
                OptionState::Selected
            } else {
                OptionState::Idle
            };
        }

        if question.is_correct(option) {
            OptionState::Correct
        } else if chosen {
            OptionState::Wrong
        } else {
            OptionState::Muted
        }
    }

    fn is_correct_at(&self, index: usize, question: &Question) -> bool {
        self.answer(index)
            .is_some_and(|answer| question.is_correct(answer))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures::question;

    #[test]
    fn one_of_two_correct_scores_half_and_is_not_all_correct() {
        let questions = vec![question("Q1", "a"), question("Q2", "b")];
        let mut attempt = QuizAttempt::new();
        attempt.select(0, "a");
        attempt.select(1, "wrong");

        assert_eq!(attempt.score(&questions), 1);
        assert!(!attempt.all_correct(&questions));
    }

    #[test]
    fn all_correct_requires_every_answer() {
        let questions = vec![question("Q1", "a"), question("Q2", "b")];
        let mut attempt = QuizAttempt::new();
        assert!(!attempt.all_correct(&questions));

        attempt.select(0, "a");
        assert!(!attempt.all_correct(&questions));
        assert!(!attempt.is_fully_answered(&questions));

        attempt.select(1, "b");
        assert!(attempt.all_correct(&questions));
        assert!(attempt.is_fully_answered(&questions));
    }

    #[test]
    fn empty_quiz_is_all_correct() {
        assert!(QuizAttempt::new().all_correct(&[]));
    }

    #[test]
    fn comparison_is_case_sensitive_and_untrimmed() {
        let questions = vec![question("Q1", "Paris")];
        let mut attempt = QuizAttempt::new();
        attempt.select(0, "paris");
        assert_eq!(attempt.score(&questions), 0);
        attempt.select(0, "Paris ");
        assert_eq!(attempt.score(&questions), 0);
        attempt.select(0, "Paris");
        assert_eq!(attempt.score(&questions), 1);
    }

    #[test]
    fn selections_freeze_after_submit() {
        let questions = vec![question("Q1", "a")];
        let mut attempt = QuizAttempt::new();
        assert!(attempt.select(0, "other"));
        assert!(attempt.select(0, "a"));
        attempt.submit();

        assert!(!attempt.select(0, "other"));
        assert_eq!(attempt.answer(0), Some("a"));
        assert!(attempt.all_correct(&questions));
    }

    #[test]
    fn option_states_before_and_after_submit() {
        let q = question("Q1", "a");
        let mut attempt = QuizAttempt::new();
        attempt.select(0, "other");
        assert_eq!(attempt.option_state(0, &q, "other"), OptionState::Selected);
        assert_eq!(attempt.option_state(0, &q, "a"), OptionState::Idle);

        attempt.submit();
        assert_eq!(attempt.option_state(0, &q, "other"), OptionState::Wrong);
        assert_eq!(attempt.option_state(0, &q, "a"), OptionState::Correct);
        assert_eq!(attempt.option_state(0, &q, "c"), OptionState::Muted);
    }

    #[test]
    fn passing_needs_more_than_half() {
        let questions = vec![question("Q1", "a"), question("Q2", "b")];
        let mut attempt = QuizAttempt::new();
        attempt.select(0, "a");
        assert!(!attempt.passed(&questions));
        attempt.select(1, "b");
        assert!(attempt.passed(&questions));
    }
}
