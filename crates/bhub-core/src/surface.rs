//! Notification and navigation signals consumed by the presentation layer.

use std::fmt;

use bhub_domain::{BookingId, VenueId};

/// Fire-and-forget toast surface.
pub trait Notifier {
    fn notify_error(&mut self, message: &str);
    fn notify_success(&mut self, message: &str);
}

/// Navigation requests emitted by flows.
pub trait Navigator {
    fn scroll_to_top(&mut self);
    fn navigate_to(&mut self, route: Route);
}

/// Anything that can both show notifications and follow navigation signals.
pub trait Surface: Notifier + Navigator {}

impl<T: Notifier + Navigator + ?Sized> Surface for T {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Venues,
    Venue(VenueId),
    Booking,
    BookingConfirmation(BookingId),
    Dashboard,
    Login,
    Contact,
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Home => f.write_str("/"),
            Route::Venues => f.write_str("/venues"),
            Route::Venue(id) => write!(f, "/venues/{id}"),
            Route::Booking => f.write_str("/booking"),
            Route::BookingConfirmation(id) => write!(f, "/booking/{}", id.reference()),
            Route::Dashboard => f.write_str("/dashboard"),
            Route::Login => f.write_str("/login"),
            Route::Contact => f.write_str("/contact"),
        }
    }
}

/// One signal captured by [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceEvent {
    Error(String),
    Success(String),
    ScrollToTop,
    Navigate(Route),
}

/// Surface that keeps every signal in order, for headless callers and tests.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    events: Vec<SurfaceEvent>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[SurfaceEvent] {
        &self.events
    }

    pub fn errors(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|event| match event {
                SurfaceEvent::Error(message) => Some(message.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn successes(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|event| match event {
                SurfaceEvent::Success(message) => Some(message.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.errors().last().copied()
    }

    pub fn scroll_count(&self) -> usize {
        self.events
            .iter()
            .filter(|event| matches!(event, SurfaceEvent::ScrollToTop))
            .count()
    }

    pub fn routes(&self) -> Vec<&Route> {
        self.events
            .iter()
            .filter_map(|event| match event {
                SurfaceEvent::Navigate(route) => Some(route),
                _ => None,
            })
            .collect()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl Notifier for RecordingSurface {
    fn notify_error(&mut self, message: &str) {
        self.events.push(SurfaceEvent::Error(message.to_string()));
    }

    fn notify_success(&mut self, message: &str) {
        self.events.push(SurfaceEvent::Success(message.to_string()));
    }
}

impl Navigator for RecordingSurface {
    fn scroll_to_top(&mut self) {
        self.events.push(SurfaceEvent::ScrollToTop);
    }

    fn navigate_to(&mut self, route: Route) {
        self.events.push(SurfaceEvent::Navigate(route));
    }
}
