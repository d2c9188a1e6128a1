use std::sync::Arc;

use course_core::model::Language;
use services::CourseGenerator;

use crate::platform::LinkOpenerRef;

pub trait UiApp: Send + Sync {
    fn course_generator(&self) -> Arc<dyn CourseGenerator>;
    fn default_language(&self) -> Language;
    fn link_opener(&self) -> LinkOpenerRef;
}

#[derive(Clone)]
pub struct AppContext {
    default_language: Language,
    course_generator: Arc<dyn CourseGenerator>,
    link_opener: LinkOpenerRef,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            default_language: app.default_language(),
            course_generator: app.course_generator(),
            link_opener: app.link_opener(),
        }
    }

    #[must_use]
    pub fn default_language(&self) -> Language {
        self.default_language
    }

    #[must_use]
    pub fn course_generator(&self) -> Arc<dyn CourseGenerator> {
        Arc::clone(&self.course_generator)
    }

    /// `false` when no API key was configured; the form still renders but
    /// every submission fails.
    #[must_use]
    pub fn generation_enabled(&self) -> bool {
        self.course_generator.enabled()
    }

    #[must_use]
    pub fn link_opener(&self) -> LinkOpenerRef {
        Arc::clone(&self.link_opener)
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
