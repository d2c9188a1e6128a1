use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::CourseError;
use crate::model::ids::{LessonId, UnitId};

//
// ─── QUESTIONS ─────────────────────────────────────────────────────────────────
//

/// A multiple-choice question. Correctness is exact string equality with
/// `correct_answer`: no trimming, no case folding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: String,
}

impl Question {
    #[must_use]
    pub fn is_correct(&self, answer: &str) -> bool {
        answer == self.correct_answer
    }
}

//
// ─── LESSONS & UNITS ───────────────────────────────────────────────────────────
//

/// The four fixed content blocks of a lesson.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonBlocks {
    pub key_idea: String,
    pub applied_example: String,
    pub activity: String,
    pub quick_test: Vec<Question>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lesson {
    pub id: LessonId,
    pub title: String,
    pub blocks: LessonBlocks,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unit {
    pub id: UnitId,
    pub title: String,
    pub summary: String,
    pub lessons: Vec<Lesson>,
}

//
// ─── FINAL SECTION CONTENT ─────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectProposal {
    pub title: String,
    pub description: String,
}

/// Icon category of a source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Book,
    Web,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    pub title: String,
    pub url: String,
    /// Free-form tag from the generator (`"book"`, `"libro"`, `"web"`, ...).
    #[serde(rename = "type")]
    pub kind_tag: String,
}

impl Source {
    /// A web source, as produced from grounding citations.
    #[must_use]
    pub fn web(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            kind_tag: "web".to_string(),
        }
    }

    #[must_use]
    pub fn kind(&self) -> SourceKind {
        let tag = self.kind_tag.trim();
        if tag.eq_ignore_ascii_case("book") || tag.eq_ignore_ascii_case("libro") {
            SourceKind::Book
        } else {
            SourceKind::Web
        }
    }

    /// The URL when it is an absolute http(s) link, `None` otherwise.
    #[must_use]
    pub fn link(&self) -> Option<Url> {
        let parsed = Url::parse(self.url.trim()).ok()?;
        matches!(parsed.scheme(), "http" | "https").then_some(parsed)
    }
}

//
// ─── COURSE ────────────────────────────────────────────────────────────────────
//

/// A generated course. Created atomically from one generation response and
/// never edited afterwards, except for appending grounding sources at the
/// generation boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub title: String,
    pub description: String,
    pub level: String,
    pub target_profile: String,
    pub duration: String,
    pub learning_objectives: Vec<String>,
    pub units: Vec<Unit>,
    pub final_assessment: Vec<Question>,
    pub final_projects: Vec<ProjectProposal>,
    pub sources: Vec<Source>,
}

/// A lesson located in the flattened unit-then-lesson sequence.
#[derive(Debug, Clone, Copy)]
pub struct LessonRef<'a> {
    pub unit: &'a Unit,
    pub lesson: &'a Lesson,
    pub unit_index: usize,
    pub lesson_index: usize,
}

impl Course {
    /// Sum of lesson counts across all units. Final assessment, projects and
    /// sources are not lessons.
    #[must_use]
    pub fn total_lessons(&self) -> usize {
        self.units.iter().map(|unit| unit.lessons.len()).sum()
    }

    /// Looks up a lesson inside a specific unit.
    #[must_use]
    pub fn lesson_in(&self, unit_id: &UnitId, lesson_id: &LessonId) -> Option<LessonRef<'_>> {
        let unit_index = self.units.iter().position(|unit| &unit.id == unit_id)?;
        let unit = &self.units[unit_index];
        let lesson_index = unit
            .lessons
            .iter()
            .position(|lesson| &lesson.id == lesson_id)?;
        Some(LessonRef {
            unit,
            lesson: &unit.lessons[lesson_index],
            unit_index,
            lesson_index,
        })
    }

    /// All lessons in unit order, then lesson order.
    pub fn lesson_sequence(&self) -> impl Iterator<Item = LessonRef<'_>> {
        self.units
            .iter()
            .enumerate()
            .flat_map(|(unit_index, unit)| {
                unit.lessons
                    .iter()
                    .enumerate()
                    .map(move |(lesson_index, lesson)| LessonRef {
                        unit,
                        lesson,
                        unit_index,
                        lesson_index,
                    })
            })
    }

    #[must_use]
    pub fn first_lesson(&self) -> Option<LessonRef<'_>> {
        self.lesson_sequence().next()
    }

    /// Appends sources verbatim, without deduplicating against existing ones.
    pub fn append_sources(&mut self, sources: impl IntoIterator<Item = Source>) {
        self.sources.extend(sources);
    }

    /// Checks the structural guarantees navigation relies on.
    ///
    /// # Errors
    ///
    /// Returns `CourseError::EmptyField` when a title or identifier is blank,
    /// `CourseError::DuplicateUnitId` when two units share an id and
    /// `CourseError::DuplicateLessonId` when two lessons share an id.
    pub fn validate(&self) -> Result<(), CourseError> {
        require_text("title", &self.title)?;

        let mut units_seen = HashSet::new();
        let mut seen = HashSet::new();
        for (unit_index, unit) in self.units.iter().enumerate() {
            require_text(&format!("units[{unit_index}].id"), unit.id.as_str())?;
            require_text(&format!("units[{unit_index}].title"), &unit.title)?;
            if !units_seen.insert(&unit.id) {
                return Err(CourseError::DuplicateUnitId(unit.id.clone()));
            }

            for (lesson_index, lesson) in unit.lessons.iter().enumerate() {
                let path = format!("units[{unit_index}].lessons[{lesson_index}]");
                require_text(&format!("{path}.id"), lesson.id.as_str())?;
                require_text(&format!("{path}.title"), &lesson.title)?;
                if !seen.insert(&lesson.id) {
                    return Err(CourseError::DuplicateLessonId(lesson.id.clone()));
                }
            }
        }

        Ok(())
    }
}

fn require_text(field: &str, value: &str) -> Result<(), CourseError> {
    if value.trim().is_empty() {
        return Err(CourseError::EmptyField(field.to_string()));
    }
    Ok(())
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
