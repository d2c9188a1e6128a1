use course_core::model::{Course, LessonId, UnitId};
use course_core::{FinalSection, NavigationState, Selection};

use crate::i18n::Strings;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SidebarLessonVm {
    pub unit_id: UnitId,
    pub lesson_id: LessonId,
    /// `"{unit}.{lesson} {title}"`, both numbers 1-based.
    pub label: String,
    pub active: bool,
    pub completed: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SidebarUnitVm {
    pub unit_id: UnitId,
    pub title: String,
    pub lessons: Vec<SidebarLessonVm>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SidebarFinalVm {
    pub section: FinalSection,
    pub label: &'static str,
    pub active: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SidebarVm {
    pub overview_active: bool,
    pub units: Vec<SidebarUnitVm>,
    pub finals: Vec<SidebarFinalVm>,
}

#[must_use]
pub fn map_sidebar(course: &Course, navigation: &NavigationState, strings: &Strings) -> SidebarVm {
    let selection = navigation.selection();
    let units = course
        .units
        .iter()
        .enumerate()
        .map(|(unit_index, unit)| SidebarUnitVm {
            unit_id: unit.id.clone(),
            title: format!("{} {}: {}", strings.unit, unit_index + 1, unit.title),
            lessons: unit
                .lessons
                .iter()
                .enumerate()
                .map(|(lesson_index, lesson)| SidebarLessonVm {
                    unit_id: unit.id.clone(),
                    lesson_id: lesson.id.clone(),
                    label: format!("{}.{} {}", unit_index + 1, lesson_index + 1, lesson.title),
                    active: selection.lesson_id() == Some(&lesson.id),
                    completed: navigation.is_completed(&lesson.id),
                })
                .collect(),
        })
        .collect();

    let finals = FinalSection::ALL
        .into_iter()
        .map(|section| SidebarFinalVm {
            section,
            label: final_label(section, strings),
            active: *selection == Selection::Final(section),
        })
        .collect();

    SidebarVm {
        overview_active: *selection == Selection::Overview,
        units,
        finals,
    }
}

#[must_use]
pub fn final_label(section: FinalSection, strings: &Strings) -> &'static str {
    match section {
        FinalSection::Assessment => strings.final_assessment_link,
        FinalSection::Project => strings.final_project_link,
        FinalSection::Sources => strings.sources_link,
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassroomHeaderVm {
    pub title: String,
    pub level: String,
    pub percent: usize,
    pub progress_label: String,
}

#[must_use]
pub fn map_header(course: &Course, navigation: &NavigationState, strings: &Strings) -> ClassroomHeaderVm {
    let percent = navigation.progress_percent(course);
    ClassroomHeaderVm {
        title: course.title.clone(),
        level: course.level.clone(),
        percent,
        progress_label: format!("{}: {percent}%", strings.progress),
    }
}

/// Kicker above a lesson title, e.g. `"Unidad 2 · Lección 1"`.
#[must_use]
pub fn lesson_kicker(navigation: &NavigationState, course: &Course, strings: &Strings) -> Option<String> {
    navigation
        .current_position(course)
        .map(|(unit, lesson)| format!("{} {unit} · {} {lesson}", strings.unit, strings.lesson))
}

/// Whether `Prev`/`Next` would move from `lesson_id`. Mirrors
/// `NavigationState::advance`: an id outside the course can only go forward.
#[must_use]
pub fn step_availability(course: &Course, lesson_id: &LessonId) -> (bool, bool) {
    let total = course.total_lessons();
    match course
        .lesson_sequence()
        .position(|item| &item.lesson.id == lesson_id)
    {
        Some(index) => (index > 0, index + 1 < total),
        None => (false, total > 0),
    }
}
