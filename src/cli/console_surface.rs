use bhub_core::{Navigator, Notifier, Route};

use crate::cli::output;

/// Terminal rendition of the notification and navigation surface.
#[derive(Debug, Default)]
pub struct ConsoleSurface {
    last_route: Option<Route>,
}

impl ConsoleSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Where the most recent navigation pointed.
    pub fn last_route(&self) -> Option<&Route> {
        self.last_route.as_ref()
    }
}

impl Notifier for ConsoleSurface {
    fn notify_error(&mut self, message: &str) {
        output::error(message);
    }

    fn notify_success(&mut self, message: &str) {
        output::success(message);
    }
}

impl Navigator for ConsoleSurface {
    fn scroll_to_top(&mut self) {
        output::separator();
    }

    fn navigate_to(&mut self, route: Route) {
        tracing::debug!(%route, "navigate");
        output::info(format!("-> {route}"));
        self.last_route = Some(route);
    }
}
