use std::sync::Arc;

use services::WishGenerator;

pub trait UiApp: Send + Sync {
    fn wish_generator(&self) -> WishGenerator;
    /// Keep the music paused until the user presses play.
    fn start_muted(&self) -> bool;
}

#[derive(Clone)]
pub struct AppContext {
    wish_generator: WishGenerator,
    start_muted: bool,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            wish_generator: app.wish_generator(),
            start_muted: app.start_muted(),
        }
    }

    #[must_use]
    pub fn wish_generator(&self) -> WishGenerator {
        self.wish_generator.clone()
    }

    #[must_use]
    pub fn start_muted(&self) -> bool {
        self.start_muted
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
