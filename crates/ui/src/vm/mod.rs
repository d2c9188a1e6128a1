mod classroom_vm;
mod form_vm;
mod markdown_vm;
mod quiz_vm;

pub use classroom_vm::{
    ClassroomHeaderVm, SidebarFinalVm, SidebarLessonVm, SidebarUnitVm, SidebarVm, final_label,
    lesson_kicker, map_header, map_sidebar, step_availability,
};
pub use form_vm::{
    SelectOptionVm, format_options, language_options, level_options, missing_fields_message,
};
pub use markdown_vm::{markdown_to_html, sanitize_html};
pub use quiz_vm::{assessment_verdict, lesson_feedback, option_class, score_label};
