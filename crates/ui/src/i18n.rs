//! Interface strings for each supported language.

use course_core::model::{Language, RequestField};

#[derive(Debug, PartialEq, Eq)]
pub struct Strings {
    pub app_name: &'static str,
    pub language_label: &'static str,

    // Home
    pub hero_prefix: &'static str,
    pub hero_highlight: &'static str,
    pub hero_suffix: &'static str,
    pub hero_subtitle: &'static str,
    pub features: [(&'static str, &'static str, &'static str); 3],
    pub resume_course: &'static str,
    pub generator_disabled: &'static str,

    // Form
    pub topic_label: &'static str,
    pub topic_placeholder: &'static str,
    pub level_label: &'static str,
    pub profile_label: &'static str,
    pub profile_placeholder: &'static str,
    pub objective_label: &'static str,
    pub objective_placeholder: &'static str,
    pub time_label: &'static str,
    pub time_placeholder: &'static str,
    pub format_label: &'static str,
    pub submit: &'static str,
    pub submitting: &'static str,
    pub missing_fields: &'static str,

    // Errors
    pub generation_failed: &'static str,
    pub unknown_error: &'static str,
    pub dismiss: &'static str,

    // Classroom chrome
    pub back: &'static str,
    pub progress: &'static str,
    pub sidebar_title: &'static str,
    pub unit: &'static str,
    pub lesson: &'static str,
    pub prev: &'static str,
    pub next: &'static str,
    pub final_assessment_link: &'static str,
    pub final_project_link: &'static str,
    pub sources_link: &'static str,

    // Overview
    pub duration: &'static str,
    pub level: &'static str,
    pub objectives: &'static str,
    pub start_learning: &'static str,

    // Lesson blocks
    pub key_idea: &'static str,
    pub example: &'static str,
    pub activity: &'static str,
    pub quick_test: &'static str,
    pub check_answers: &'static str,
    pub all_correct: &'static str,
    pub some_wrong: &'static str,
    pub complete_and_continue: &'static str,
    pub lesson_completed: &'static str,

    // Final section
    pub assessment_title: &'static str,
    pub assessment_subtitle: &'static str,
    pub finish_assessment: &'static str,
    pub your_result: &'static str,
    pub assessment_passed: &'static str,
    pub assessment_failed: &'static str,
    pub projects_title: &'static str,
    pub projects_subtitle: &'static str,
    pub sources_title: &'static str,
    pub empty_section: &'static str,
}

pub static SPANISH: Strings = Strings {
    app_name: "ProfesorIA",
    language_label: "Idioma",

    hero_prefix: "Crea tu",
    hero_highlight: "aula virtual",
    hero_suffix: "en minutos",
    hero_subtitle: "La IA diseña un plan de estudio completo, profesional y adaptado a tus necesidades con lecciones, actividades y evaluaciones.",
    features: [
        ("🎯", "Objetivos reales", "Enfocado en resultados tangibles: desde aprobar un examen hasta dominar una nueva habilidad profesional."),
        ("⚡", "Personalización total", "Adaptamos el tono y la complejidad según tu perfil y el tiempo que realmente tienes disponible."),
        ("📚", "Aula completa", "Incluye rutas de aprendizaje, bloques de teoría, ejemplos prácticos, tests y proyectos finales."),
    ],
    resume_course: "Volver a mi curso",
    generator_disabled: "La generación de cursos no está configurada (falta COURSE_AI_API_KEY).",

    topic_label: "Tema del curso",
    topic_placeholder: "Ej. Introducción a la Astrofísica o Marketing Digital",
    level_label: "Nivel del alumno",
    profile_label: "Perfil del alumno",
    profile_placeholder: "Ej. Estudiante de bachillerato",
    objective_label: "Objetivo principal",
    objective_placeholder: "Ej. Entender los mecanismos básicos de la relatividad",
    time_label: "Tiempo disponible",
    time_placeholder: "Ej. 4 semanas, 30 min/día",
    format_label: "Formato preferido",
    submit: "Diseñar curso ahora",
    submitting: "Diseñando tu curso...",
    missing_fields: "Completa los campos obligatorios:",

    generation_failed: "Hubo un error al diseñar tu curso. Por favor, inténtalo de nuevo.",
    unknown_error: "Algo ha ido mal. Por favor, inténtalo de nuevo.",
    dismiss: "Cerrar",

    back: "Volver al inicio",
    progress: "Progreso",
    sidebar_title: "Contenido del curso",
    unit: "Unidad",
    lesson: "Lección",
    prev: "Anterior",
    next: "Siguiente",
    final_assessment_link: "🎯 Evaluación Final",
    final_project_link: "🏗️ Proyecto Final",
    sources_link: "📚 Referencias",

    duration: "Duración estimada",
    level: "Nivel",
    objectives: "🎯 Objetivos del curso",
    start_learning: "¡Empezar a aprender ahora!",

    key_idea: "Idea clave",
    example: "Ejemplo aplicado",
    activity: "Actividad práctica",
    quick_test: "Test rápido",
    check_answers: "Comprobar respuestas",
    all_correct: "¡Excelente! Has acertado todas las preguntas.",
    some_wrong: "Algunas respuestas no son correctas. Revisa la solución marcada en verde.",
    complete_and_continue: "Marcar como completada",
    lesson_completed: "Lección completada ✓",

    assessment_title: "Evaluación Final",
    assessment_subtitle: "Demuestra lo aprendido en este curso integral.",
    finish_assessment: "Finalizar Evaluación",
    your_result: "Tu resultado",
    assessment_passed: "¡Enhorabuena! Has completado el curso con éxito.",
    assessment_failed: "Has hecho un gran esfuerzo. Te recomendamos repasar algunas unidades.",
    projects_title: "Propuestas de Proyecto Final",
    projects_subtitle: "Aplica todo el conocimiento en un caso real.",
    sources_title: "Fuentes y Referencias",
    empty_section: "No hay contenido en esta sección.",
};

pub static ENGLISH: Strings = Strings {
    app_name: "ProfesorIA",
    language_label: "Language",

    hero_prefix: "Build your",
    hero_highlight: "virtual classroom",
    hero_suffix: "in minutes",
    hero_subtitle: "AI designs a complete, professional study plan tailored to your needs, with lessons, activities and assessments.",
    features: [
        ("🎯", "Real goals", "Focused on tangible results: from passing an exam to mastering a new professional skill."),
        ("⚡", "Fully personal", "Tone and complexity adapt to your profile and the time you really have."),
        ("📚", "Complete classroom", "Learning paths, theory blocks, worked examples, quizzes and final projects."),
    ],
    resume_course: "Back to my course",
    generator_disabled: "Course generation is not configured (COURSE_AI_API_KEY is missing).",

    topic_label: "Course topic",
    topic_placeholder: "e.g. Introduction to Astrophysics or Digital Marketing",
    level_label: "Learner level",
    profile_label: "Learner profile",
    profile_placeholder: "e.g. High-school student",
    objective_label: "Main goal",
    objective_placeholder: "e.g. Understand the basics of relativity",
    time_label: "Available time",
    time_placeholder: "e.g. 4 weeks, 30 min/day",
    format_label: "Preferred format",
    submit: "Design my course",
    submitting: "Designing your course...",
    missing_fields: "Please fill in the required fields:",

    generation_failed: "Something went wrong while designing your course. Please try again.",
    unknown_error: "Something went wrong. Please try again.",
    dismiss: "Dismiss",

    back: "Back to home",
    progress: "Progress",
    sidebar_title: "Course content",
    unit: "Unit",
    lesson: "Lesson",
    prev: "Previous",
    next: "Next",
    final_assessment_link: "🎯 Final Assessment",
    final_project_link: "🏗️ Final Project",
    sources_link: "📚 References",

    duration: "Estimated duration",
    level: "Level",
    objectives: "🎯 Course objectives",
    start_learning: "Start learning now!",

    key_idea: "Key idea",
    example: "Applied example",
    activity: "Practical activity",
    quick_test: "Quick test",
    check_answers: "Check answers",
    all_correct: "Excellent! You got every question right.",
    some_wrong: "Some answers are not correct. Review the solution highlighted in green.",
    complete_and_continue: "Mark as completed",
    lesson_completed: "Lesson completed ✓",

    assessment_title: "Final Assessment",
    assessment_subtitle: "Show what you have learned in this course.",
    finish_assessment: "Finish Assessment",
    your_result: "Your result",
    assessment_passed: "Congratulations! You have successfully completed the course.",
    assessment_failed: "Great effort. We recommend reviewing a few units.",
    projects_title: "Final Project Proposals",
    projects_subtitle: "Apply everything you learned to a real case.",
    sources_title: "Sources and References",
    empty_section: "This section has no content.",
};

#[must_use]
pub fn strings(language: Language) -> &'static Strings {
    match language {
        Language::Spanish => &SPANISH,
        Language::English => &ENGLISH,
    }
}

impl Strings {
    #[must_use]
    pub fn field_label(&self, field: RequestField) -> &'static str {
        match field {
            RequestField::Topic => self.topic_label,
            RequestField::Profile => self.profile_label,
            RequestField::Objective => self.objective_label,
            RequestField::Time => self.time_label,
        }
    }
}
