use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

//
// ─── LANGUAGE ──────────────────────────────────────────────────────────────────
//

/// Language of both the interface and the generated content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[default]
    Spanish,
    English,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::Spanish, Language::English];

    /// Short language tag (`es`, `en`).
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Language::Spanish => "es",
            Language::English => "en",
        }
    }

    /// Name of the language written in that language.
    #[must_use]
    pub fn native_name(self) -> &'static str {
        match self {
            Language::Spanish => "Español",
            Language::English => "English",
        }
    }
}

/// Error type for parsing a language tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLanguageError {
    raw: String,
}

impl fmt::Display for ParseLanguageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unsupported language tag: {}", self.raw)
    }
}

impl std::error::Error for ParseLanguageError {}

impl FromStr for Language {
    type Err = ParseLanguageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "es" | "es-es" | "spanish" => Ok(Language::Spanish),
            "en" | "en-us" | "en-gb" | "english" => Ok(Language::English),
            _ => Err(ParseLanguageError { raw: s.to_string() }),
        }
    }
}

//
// ─── LEVEL & FORMAT ────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Level {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl Level {
    pub const ALL: [Level; 3] = [Level::Beginner, Level::Intermediate, Level::Advanced];

    #[must_use]
    pub fn label(self, language: Language) -> &'static str {
        match (self, language) {
            (Level::Beginner, Language::Spanish) => "Principiante",
            (Level::Intermediate, Language::Spanish) => "Intermedio",
            (Level::Advanced, Language::Spanish) => "Avanzado",
            (Level::Beginner, Language::English) => "Beginner",
            (Level::Intermediate, Language::English) => "Intermediate",
            (Level::Advanced, Language::English) => "Advanced",
        }
    }

    /// Stable key used by form controls.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Level::Beginner => "beginner",
            Level::Intermediate => "intermediate",
            Level::Advanced => "advanced",
        }
    }

    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|level| level.key() == key)
    }
}

/// Preferred presentation style of the course.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Format {
    ShortReadings,
    ReadingsAndExercises,
    OutlinesAndProblems,
    #[default]
    Mixed,
}

impl Format {
    pub const ALL: [Format; 4] = [
        Format::ShortReadings,
        Format::ReadingsAndExercises,
        Format::OutlinesAndProblems,
        Format::Mixed,
    ];

    #[must_use]
    pub fn label(self, language: Language) -> &'static str {
        match (self, language) {
            (Format::ShortReadings, Language::Spanish) => "Lecturas breves",
            (Format::ReadingsAndExercises, Language::Spanish) => "Lecturas + ejercicios",
            (Format::OutlinesAndProblems, Language::Spanish) => "Esquemas + problemas",
            (Format::Mixed, Language::Spanish) => "Mixto",
            (Format::ShortReadings, Language::English) => "Short readings",
            (Format::ReadingsAndExercises, Language::English) => "Readings + exercises",
            (Format::OutlinesAndProblems, Language::English) => "Outlines + problems",
            (Format::Mixed, Language::English) => "Mixed",
        }
    }

    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Format::ShortReadings => "short-readings",
            Format::ReadingsAndExercises => "readings-exercises",
            Format::OutlinesAndProblems => "outlines-problems",
            Format::Mixed => "mixed",
        }
    }

    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|format| format.key() == key)
    }
}

//
// ─── REQUEST ───────────────────────────────────────────────────────────────────
//

/// Free-text fields of the request that must not be blank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestField {
    Topic,
    Profile,
    Objective,
    Time,
}

/// Everything the learner tells us about the course they want.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseRequest {
    pub topic: String,
    pub level: Level,
    pub profile: String,
    pub objective: String,
    pub time: String,
    pub format: Format,
    pub language: Language,
}

impl CourseRequest {
    /// Required text fields that are still blank, in form order.
    #[must_use]
    pub fn missing_fields(&self) -> Vec<RequestField> {
        [
            (RequestField::Topic, &self.topic),
            (RequestField::Profile, &self.profile),
            (RequestField::Objective, &self.objective),
            (RequestField::Time, &self.time),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_parses_common_tags() {
        assert_eq!("es".parse::<Language>().unwrap(), Language::Spanish);
        assert_eq!(" EN ".parse::<Language>().unwrap(), Language::English);
        assert!("fr".parse::<Language>().is_err());
    }

    #[test]
    fn level_and_format_keys_roundtrip() {
        for level in Level::ALL {
            assert_eq!(Level::from_key(level.key()), Some(level));
        }
        for format in Format::ALL {
            assert_eq!(Format::from_key(format.key()), Some(format));
        }
        assert_eq!(Level::from_key("expert"), None);
    }

    #[test]
    fn labels_follow_language() {
        assert_eq!(Level::Advanced.label(Language::Spanish), "Avanzado");
        assert_eq!(Format::Mixed.label(Language::English), "Mixed");
    }

    #[test]
    fn missing_fields_lists_blank_text_in_form_order() {
        let request = CourseRequest {
            topic: "Rust".to_string(),
            profile: "  ".to_string(),
            ..CourseRequest::default()
        };
        assert_eq!(
            request.missing_fields(),
            vec![RequestField::Profile, RequestField::Objective, RequestField::Time]
        );
    }
}
