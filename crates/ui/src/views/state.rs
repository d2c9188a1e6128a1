use course_core::model::Language;
use services::ClassroomSession;

use crate::i18n::strings;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    GenerationFailed,
    Unknown,
}

impl ViewError {
    #[must_use]
    pub fn message(self, language: Language) -> &'static str {
        let strings = strings(language);
        match self {
            ViewError::GenerationFailed => strings.generation_failed,
            ViewError::Unknown => strings.unknown_error,
        }
    }
}

/// State of the one long-running action the home screen owns.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewState {
    Idle,
    Loading,
    Error(ViewError),
}

#[must_use]
pub fn generation_state(session: &ClassroomSession) -> ViewState {
    if session.is_loading() {
        ViewState::Loading
    } else if session.generation_failed() {
        ViewState::Error(ViewError::GenerationFailed)
    } else {
        ViewState::Idle
    }
}
