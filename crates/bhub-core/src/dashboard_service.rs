//! Role-specific dashboard figures and the events list.

use bhub_domain::{BookingConfirmation, EventRecord, EventStatus, UserRole, UserSession, VenueId};
use chrono::NaiveDate;

use crate::CoreError;

/// One headline figure on the dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardStat {
    pub title: &'static str,
    pub value: &'static str,
    pub description: &'static str,
    pub trend: Option<Trend>,
}

/// Month-over-month change shown under a stat.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Trend {
    pub percent: f64,
    pub positive: bool,
}

const fn stat(
    title: &'static str,
    value: &'static str,
    description: &'static str,
    trend: Option<(f64, bool)>,
) -> DashboardStat {
    DashboardStat {
        title,
        value,
        description,
        trend: match trend {
            Some((percent, positive)) => Some(Trend { percent, positive }),
            None => None,
        },
    }
}

static ADMIN_STATS: [DashboardStat; 4] = [
    stat("Total Revenue", "$24,320", "Total revenue this month", Some((12.0, true))),
    stat("Total Bookings", "142", "Total bookings this month", Some((8.0, true))),
    stat("Total Users", "832", "Active users this month", Some((5.0, true))),
    stat("Avg. Event Duration", "4.2 hrs", "Average event duration", Some((2.0, false))),
];

static ORGANIZER_STATS: [DashboardStat; 4] = [
    stat("Total Revenue", "$8,450", "Your revenue this month", Some((7.0, true))),
    stat("Total Events", "24", "Events organized this month", Some((12.0, true))),
    stat("Total Clients", "48", "Clients this month", Some((3.0, true))),
    stat("Avg. Event Rating", "4.8/5", "Average event rating", Some((0.2, true))),
];

static CLIENT_STATS: [DashboardStat; 4] = [
    stat("Upcoming Events", "3", "Your upcoming bookings", Some((1.0, true))),
    stat("Total Spent", "$1,250", "Total spent this year", Some((15.0, true))),
    stat("Favorite Venues", "4", "Venues you saved", None),
    stat("Reward Points", "450", "Available reward points", Some((50.0, true))),
];

pub fn stats_for(role: UserRole) -> &'static [DashboardStat] {
    match role {
        UserRole::Admin => &ADMIN_STATS,
        UserRole::Organizer => &ORGANIZER_STATS,
        UserRole::Client => &CLIENT_STATS,
    }
}

/// Events list scoped to one signed-in user.
#[derive(Debug, Clone)]
pub struct DashboardService {
    role: UserRole,
    events: Vec<EventRecord>,
}

impl DashboardService {
    pub fn new(user: &UserSession, events: Vec<EventRecord>) -> Self {
        Self {
            role: user.role,
            events,
        }
    }

    /// Dashboard seeded with the showcase events.
    pub fn demo(user: &UserSession) -> Self {
        Self::new(user, demo_events())
    }

    pub fn role(&self) -> UserRole {
        self.role
    }

    pub fn stats(&self) -> &'static [DashboardStat] {
        stats_for(self.role)
    }

    pub fn events(&self) -> &[EventRecord] {
        &self.events
    }

    pub fn upcoming(&self) -> impl Iterator<Item = &EventRecord> {
        self.events
            .iter()
            .filter(|event| event.status == EventStatus::Upcoming)
    }

    /// Clients never see what an event costs.
    pub fn shows_costs(&self) -> bool {
        self.role.manages_events()
    }

    pub fn visible_cost(&self, event: &EventRecord) -> Option<f64> {
        if self.shows_costs() {
            event.cost
        } else {
            None
        }
    }

    /// Status transitions the current role may apply to `event`.
    pub fn allowed_transitions(&self, event: &EventRecord) -> Vec<EventStatus> {
        if event.status != EventStatus::Upcoming {
            return Vec::new();
        }
        let mut allowed = Vec::new();
        if self.role.manages_events() {
            allowed.push(EventStatus::Completed);
        }
        allowed.push(EventStatus::Cancelled);
        allowed
    }

    pub fn change_status(&mut self, id: &str, status: EventStatus) -> Result<&EventRecord, CoreError> {
        let index = self.position(id)?;
        let event = &self.events[index];
        if !self.allowed_transitions(event).contains(&status) {
            return Err(CoreError::PermissionDenied(format!(
                "{} cannot mark `{}` as {}",
                self.role, event.title, status
            )));
        }
        tracing::info!(event = id, from = %event.status, to = %status, "event status changed");
        self.events[index].status = status;
        Ok(&self.events[index])
    }

    pub fn delete(&mut self, id: &str) -> Result<EventRecord, CoreError> {
        if self.role != UserRole::Admin {
            return Err(CoreError::PermissionDenied(format!(
                "{} cannot delete events",
                self.role
            )));
        }
        let index = self.position(id)?;
        let removed = self.events.remove(index);
        tracing::info!(event = id, "event deleted");
        Ok(removed)
    }

    /// Lists a confirmed booking as an upcoming event; bookings without a schedule are skipped.
    pub fn add_confirmation(&mut self, confirmation: &BookingConfirmation) -> Option<&EventRecord> {
        let record = EventRecord::from_confirmation(confirmation)?;
        tracing::debug!(event = %record.id, "booking added to dashboard");
        self.events.push(record);
        self.events.last()
    }

    fn position(&self, id: &str) -> Result<usize, CoreError> {
        self.events
            .iter()
            .position(|event| event.id == id)
            .ok_or_else(|| CoreError::EventNotFound(id.to_string()))
    }
}

/// The three showcase events: two upcoming, one already held.
pub fn demo_events() -> Vec<EventRecord> {
    let seed = [
        ((2023, 11, 15), "Business Conference", EventStatus::Upcoming),
        ((2023, 11, 18), "Wedding Reception", EventStatus::Upcoming),
        ((2023, 11, 22), "Corporate Dinner", EventStatus::Completed),
    ];
    seed.into_iter()
        .enumerate()
        .filter_map(|(index, ((year, month, day), title, status))| {
            let offset = u32::try_from(index).ok()?;
            Some(EventRecord {
                id: format!("event-{index}"),
                title: title.to_string(),
                venue: "Grand Ballroom".into(),
                venue_id: VenueId::new("venue-1"),
                date: NaiveDate::from_ymd_opt(year, month, day)?,
                time: "14:00 - 18:00".into(),
                duration_hours: 4,
                guests: 100 + offset * 20,
                status,
                event_type: "Corporate".into(),
                location: "New York, NY".into(),
                cost: Some(2500.0 + f64::from(offset) * 500.0),
            })
        })
        .collect()
}
