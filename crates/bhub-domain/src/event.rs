//! Scheduled events shown on the dashboard.

use std::fmt;

use chrono::{Duration, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::{booking::BookingConfirmation, common::VenueId};

/// Lifecycle of a dashboard event.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    Upcoming,
    Completed,
    Cancelled,
}

impl fmt::Display for EventStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            EventStatus::Upcoming => "Upcoming",
            EventStatus::Completed => "Completed",
            EventStatus::Cancelled => "Cancelled",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EventRecord {
    pub id: String,
    pub title: String,
    pub venue: String,
    pub venue_id: VenueId,
    pub date: NaiveDate,
    pub time: String,
    pub duration_hours: u32,
    pub guests: u32,
    pub status: EventStatus,
    pub event_type: String,
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<f64>,
}

impl EventRecord {
    /// Builds an upcoming event from a confirmed booking.
    ///
    /// Returns `None` when the booking carries no schedule.
    pub fn from_confirmation(confirmation: &BookingConfirmation) -> Option<Self> {
        let schedule = confirmation.schedule.as_ref()?;
        let duration = confirmation.quote.duration_hours;
        let title = match confirmation.contact.event_type {
            Some(kind) => format!("{} for {}", kind, confirmation.contact.full_name()),
            None => format!("Booking for {}", confirmation.contact.full_name()),
        };
        Some(Self {
            id: confirmation.id.reference(),
            title,
            venue: confirmation.venue.name.clone(),
            venue_id: confirmation.venue.id.clone(),
            date: schedule.date,
            time: time_range(schedule.start_time, duration),
            duration_hours: duration,
            guests: schedule.guests.upper_bound(),
            status: EventStatus::Upcoming,
            event_type: confirmation
                .contact
                .event_type
                .map(|kind| kind.to_string())
                .unwrap_or_else(|| "Other".into()),
            location: confirmation.venue.location.clone(),
            cost: Some(confirmation.quote.total),
        })
    }
}

fn time_range(start: NaiveTime, hours: u32) -> String {
    let end = start + Duration::hours(i64::from(hours));
    format!("{} - {}", start.format("%H:%M"), end.format("%H:%M"))
}
