//! The session-state record owned by the top-level UI controller.

use std::fmt;

use log::debug;

use course_core::model::{Course, Language, LessonId, UnitId};
use course_core::{Direction, FinalSection, NavigationState, Selection};

use crate::error::SessionError;

/// Which top-level screen is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionView {
    Home,
    Classroom,
}

/// A generated course with its navigation/progress state.
#[derive(Debug, Clone, PartialEq, Eq)]
struct LoadedCourse {
    course: Course,
    navigation: NavigationState,
}

/// All mutable application state for one run of the app.
///
/// `Home → Classroom` happens only when a generation succeeds (or when the
/// learner resumes a course they already have). Going home keeps the course
/// and progress.
#[derive(Clone, PartialEq, Eq)]
pub struct ClassroomSession {
    view: SessionView,
    language: Language,
    loading: bool,
    generation_failed: bool,
    loaded: Option<LoadedCourse>,
}

impl ClassroomSession {
    #[must_use]
    pub fn new(language: Language) -> Self {
        Self {
            view: SessionView::Home,
            language,
            loading: false,
            generation_failed: false,
            loaded: None,
        }
    }

    #[must_use]
    pub fn view(&self) -> SessionView {
        self.view
    }

    #[must_use]
    pub fn language(&self) -> Language {
        self.language
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// The last generation failed and the learner has not retried yet.
    #[must_use]
    pub fn generation_failed(&self) -> bool {
        self.generation_failed
    }

    pub fn dismiss_error(&mut self) {
        self.generation_failed = false;
    }

    #[must_use]
    pub fn course(&self) -> Option<&Course> {
        self.loaded.as_ref().map(|loaded| &loaded.course)
    }

    #[must_use]
    pub fn navigation(&self) -> Option<&NavigationState> {
        self.loaded.as_ref().map(|loaded| &loaded.navigation)
    }

    #[must_use]
    pub fn selection(&self) -> Selection {
        self.navigation()
            .map(|navigation| navigation.selection().clone())
            .unwrap_or_default()
    }

    //
    // ─── GENERATION LIFECYCLE ──────────────────────────────────────────────────
    //

    /// Marks a generation request as in flight.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::AlreadyLoading` if one is already pending.
    pub fn begin_generation(&mut self) -> Result<(), SessionError> {
        if self.loading {
            return Err(SessionError::AlreadyLoading);
        }
        self.loading = true;
        self.generation_failed = false;
        debug!("session: generation started");
        Ok(())
    }

    /// Stores a freshly generated course, resets progress and enters the
    /// classroom on its first lesson.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotLoading` if no generation was started.
    pub fn complete_generation(&mut self, course: Course) -> Result<(), SessionError> {
        if !self.loading {
            return Err(SessionError::NotLoading);
        }
        let navigation = NavigationState::start(&course);
        self.loaded = Some(LoadedCourse { course, navigation });
        self.loading = false;
        self.view = SessionView::Classroom;
        debug!("session: home -> classroom");
        Ok(())
    }

    /// Leaves the session where it was before the request (still on the form,
    /// any earlier course untouched) and flags the failure for the UI.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotLoading` if no generation was started.
    pub fn fail_generation(&mut self) -> Result<(), SessionError> {
        if !self.loading {
            return Err(SessionError::NotLoading);
        }
        self.loading = false;
        self.generation_failed = true;
        debug!("session: generation failed, staying on {:?}", self.view);
        Ok(())
    }

    //
    // ─── VIEW TRANSITIONS ──────────────────────────────────────────────────────
    //

    pub fn return_home(&mut self) {
        self.view = SessionView::Home;
    }

    /// Back to the classroom of the existing course. Returns `false` when no
    /// course has been generated yet.
    pub fn resume(&mut self) -> bool {
        if self.loaded.is_none() {
            return false;
        }
        self.view = SessionView::Classroom;
        true
    }

    //
    // ─── NAVIGATION ────────────────────────────────────────────────────────────
    //

    pub fn select_lesson(&mut self, unit_id: UnitId, lesson_id: LessonId) {
        if let Some(loaded) = self.loaded.as_mut() {
            loaded.navigation.select_lesson(unit_id, lesson_id);
        }
    }

    pub fn select_final(&mut self, section: FinalSection) {
        if let Some(loaded) = self.loaded.as_mut() {
            loaded.navigation.select_final(section);
        }
    }

    pub fn select_overview(&mut self) {
        if let Some(loaded) = self.loaded.as_mut() {
            loaded.navigation.select_overview();
        }
    }

    /// The overview's "start learning" action.
    pub fn start_learning(&mut self) {
        if let Some(loaded) = self.loaded.as_mut() {
            loaded.navigation.select_first_lesson(&loaded.course);
        }
    }

    pub fn advance(&mut self, direction: Direction) -> bool {
        self.loaded
            .as_mut()
            .is_some_and(|loaded| loaded.navigation.advance(&loaded.course, direction))
    }

    pub fn mark_complete(&mut self, lesson_id: &LessonId) -> bool {
        self.loaded
            .as_mut()
            .is_some_and(|loaded| loaded.navigation.mark_complete(lesson_id))
    }

    /// The lesson view's "mark completed" action: records whichever lesson
    /// is active.
    pub fn mark_active_complete(&mut self) -> bool {
        self.loaded
            .as_mut()
            .is_some_and(|loaded| loaded.navigation.mark_active_complete())
    }

    #[must_use]
    pub fn is_completed(&self, lesson_id: &LessonId) -> bool {
        self.navigation()
            .is_some_and(|navigation| navigation.is_completed(lesson_id))
    }

    #[must_use]
    pub fn progress_percent(&self) -> usize {
        self.loaded
            .as_ref()
            .map_or(0, |loaded| loaded.navigation.progress_percent(&loaded.course))
    }
}

impl Default for ClassroomSession {
    fn default() -> Self {
        Self::new(Language::default())
    }
}

impl fmt::Debug for ClassroomSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClassroomSession")
            .field("view", &self.view)
            .field("language", &self.language)
            .field("loading", &self.loading)
            .field("generation_failed", &self.generation_failed)
            .field("course", &self.course().map(|course| course.title.as_str()))
            .field("selection", &self.selection())
            .finish_non_exhaustive()
    }
}
