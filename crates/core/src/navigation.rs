//! Where the learner is in a course and what they have finished.
//!
//! Navigation state never owns the course; operations that need the tree take
//! it by reference so the same state can be checked against any course value.

use std::collections::HashSet;
use std::fmt;

use crate::model::{Course, LessonId, LessonRef, UnitId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Prev,
    Next,
}

/// Views of the `final` pseudo-unit. These are not lessons: they are never
/// part of the flattened sequence and never count towards progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FinalSection {
    Assessment,
    Project,
    Sources,
}

impl FinalSection {
    pub const ALL: [FinalSection; 3] = [
        FinalSection::Assessment,
        FinalSection::Project,
        FinalSection::Sources,
    ];

    /// The lesson-id slot value used for this section.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            FinalSection::Assessment => "assessment",
            FinalSection::Project => "project",
            FinalSection::Sources => "sources",
        }
    }
}

impl fmt::Display for FinalSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The active unit/lesson pair.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selection {
    /// Course loaded, nothing selected: the overview page.
    #[default]
    Overview,
    Lesson {
        unit_id: UnitId,
        lesson_id: LessonId,
    },
    Final(FinalSection),
}

impl Selection {
    #[must_use]
    pub fn lesson_id(&self) -> Option<&LessonId> {
        match self {
            Selection::Lesson { lesson_id, .. } => Some(lesson_id),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_final(&self) -> bool {
        matches!(self, Selection::Final(_))
    }
}

/// Client-local navigation and progress for one generated course.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationState {
    selection: Selection,
    completed: HashSet<LessonId>,
}

impl NavigationState {
    /// Fresh state positioned on the first lesson of `course`, or on the
    /// overview if the course has no lessons.
    #[must_use]
    pub fn start(course: &Course) -> Self {
        let mut state = Self::default();
        state.select_first_lesson(course);
        state
    }

    #[must_use]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Sets the active unit/lesson. The pair is not checked against the
    /// course.
    pub fn select_lesson(&mut self, unit_id: UnitId, lesson_id: LessonId) {
        self.selection = Selection::Lesson { unit_id, lesson_id };
    }

    pub fn select_final(&mut self, section: FinalSection) {
        self.selection = Selection::Final(section);
    }

    pub fn select_overview(&mut self) {
        self.selection = Selection::Overview;
    }

    pub fn select_first_lesson(&mut self, course: &Course) {
        self.selection = course
            .first_lesson()
            .map_or(Selection::Overview, |first| Selection::Lesson {
                unit_id: first.unit.id.clone(),
                lesson_id: first.lesson.id.clone(),
            });
    }

    /// Moves one step along the flattened lesson sequence.
    ///
    /// Returns `true` if the selection changed. Stepping past either end, or
    /// stepping while the overview or the final section is shown, is a no-op.
    /// A selected lesson id that is not in the course sits "before" the
    /// sequence: `Next` lands on the first lesson, `Prev` does nothing.
    pub fn advance(&mut self, course: &Course, direction: Direction) -> bool {
        let Selection::Lesson { lesson_id, .. } = &self.selection else {
            return false;
        };

        let sequence: Vec<LessonRef<'_>> = course.lesson_sequence().collect();
        let current = sequence
            .iter()
            .position(|item| &item.lesson.id == lesson_id);

        let target = match (current, direction) {
            (Some(index), Direction::Next) => index.checked_add(1),
            (Some(index), Direction::Prev) => index.checked_sub(1),
            (None, Direction::Next) => Some(0),
            (None, Direction::Prev) => None,
        };
        let Some(target) = target.and_then(|index| sequence.get(index)) else {
            return false;
        };

        self.selection = Selection::Lesson {
            unit_id: target.unit.id.clone(),
            lesson_id: target.lesson.id.clone(),
        };
        true
    }

    /// Records `lesson_id` as completed. No-op when no lesson is active.
    ///
    /// Returns `true` if the id was newly added.
    pub fn mark_complete(&mut self, lesson_id: &LessonId) -> bool {
        if !matches!(self.selection, Selection::Lesson { .. }) {
            return false;
        }
        self.completed.insert(lesson_id.clone())
    }

    /// Records the active lesson as completed.
    pub fn mark_active_complete(&mut self) -> bool {
        match self.selection.lesson_id().cloned() {
            Some(lesson_id) => self.mark_complete(&lesson_id),
            None => false,
        }
    }

    #[must_use]
    pub fn is_completed(&self, lesson_id: &LessonId) -> bool {
        self.completed.contains(lesson_id)
    }

    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.completed.len()
    }

    /// `round(100 * completed / max(total_lessons, 1))`, rounding halves up.
    ///
    /// The final section is outside the denominator, so 100% does not imply
    /// the assessment was visited.
    #[must_use]
    pub fn progress_percent(&self, course: &Course) -> usize {
        let total = course.total_lessons().max(1);
        let done = self.completed.len();
        (200 * done + total) / (2 * total)
    }

    /// The active lesson resolved against the course.
    #[must_use]
    pub fn current_lesson<'a>(&self, course: &'a Course) -> Option<LessonRef<'a>> {
        match &self.selection {
            Selection::Lesson { unit_id, lesson_id } => course.lesson_in(unit_id, lesson_id),
            _ => None,
        }
    }

    /// 1-based unit and lesson numbers of the active lesson.
    #[must_use]
    pub fn current_position(&self, course: &Course) -> Option<(usize, usize)> {
        self.current_lesson(course)
            .map(|item| (item.unit_index + 1, item.lesson_index + 1))
    }
}
