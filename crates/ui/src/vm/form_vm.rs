use course_core::model::{CourseRequest, Format, Language, Level};

use crate::i18n::Strings;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectOptionVm {
    pub key: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

#[must_use]
pub fn level_options(current: Level, language: Language) -> Vec<SelectOptionVm> {
    Level::ALL
        .into_iter()
        .map(|level| SelectOptionVm {
            key: level.key(),
            label: level.label(language),
            selected: level == current,
        })
        .collect()
}

#[must_use]
pub fn format_options(current: Format, language: Language) -> Vec<SelectOptionVm> {
    Format::ALL
        .into_iter()
        .map(|format| SelectOptionVm {
            key: format.key(),
            label: format.label(language),
            selected: format == current,
        })
        .collect()
}

#[must_use]
pub fn language_options(current: Language) -> Vec<SelectOptionVm> {
    Language::ALL
        .into_iter()
        .map(|language| SelectOptionVm {
            key: language.code(),
            label: language.native_name(),
            selected: language == current,
        })
        .collect()
}

/// Inline validation message listing the empty required fields, or `None`
/// when the request can be submitted.
#[must_use]
pub fn missing_fields_message(request: &CourseRequest, strings: &Strings) -> Option<String> {
    let missing = request.missing_fields();
    if missing.is_empty() {
        return None;
    }
    let labels = missing
        .into_iter()
        .map(|field| strings.field_label(field))
        .collect::<Vec<_>>()
        .join(", ");
    Some(format!("{} {labels}", strings.missing_fields))
}
