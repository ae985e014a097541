use std::sync::Arc;

use services::AssessmentService;

pub trait UiApp: Send + Sync {
    fn assessment(&self) -> Arc<AssessmentService>;
}

#[derive(Clone)]
pub struct AppContext {
    assessment: Arc<AssessmentService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            assessment: app.assessment(),
        }
    }

    #[must_use]
    pub fn assessment(&self) -> Arc<AssessmentService> {
        Arc::clone(&self.assessment)
    }
}

// This context is provided by the application composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
