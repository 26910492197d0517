//! Date, time and headcount captured at the schedule step.

use std::fmt;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// First and last bookable start hours (inclusive, 24h clock).
pub const FIRST_SLOT_HOUR: u32 = 9;
pub const LAST_SLOT_HOUR: u32 = 20;

/// Returns every bookable start time, one per hour.
pub fn time_slots() -> Vec<NaiveTime> {
    (FIRST_SLOT_HOUR..=LAST_SLOT_HOUR)
        .filter_map(|hour| NaiveTime::from_hms_opt(hour, 0, 0))
        .collect()
}

/// Expected headcount bucket.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum GuestRange {
    UpTo50,
    UpTo100,
    UpTo150,
    UpTo200,
    UpTo250,
    UpTo300,
    Over300,
}

impl GuestRange {
    pub const ALL: [GuestRange; 7] = [
        GuestRange::UpTo50,
        GuestRange::UpTo100,
        GuestRange::UpTo150,
        GuestRange::UpTo200,
        GuestRange::UpTo250,
        GuestRange::UpTo300,
        GuestRange::Over300,
    ];

    pub fn label(self) -> &'static str {
        match self {
            GuestRange::UpTo50 => "1-50",
            GuestRange::UpTo100 => "51-100",
            GuestRange::UpTo150 => "101-150",
            GuestRange::UpTo200 => "151-200",
            GuestRange::UpTo250 => "201-250",
            GuestRange::UpTo300 => "251-300",
            GuestRange::Over300 => "300+",
        }
    }

    /// Upper bound of the bucket, used when a single headcount is needed.
    pub fn upper_bound(self) -> u32 {
        match self {
            GuestRange::UpTo50 => 50,
            GuestRange::UpTo100 => 100,
            GuestRange::UpTo150 => 150,
            GuestRange::UpTo200 => 200,
            GuestRange::UpTo250 => 250,
            GuestRange::UpTo300 | GuestRange::Over300 => 300,
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        let trimmed = label.trim();
        GuestRange::ALL
            .into_iter()
            .find(|range| range.label() == trimmed)
    }
}

impl fmt::Display for GuestRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Validated output of the schedule sub-form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScheduleDetails {
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub guests: GuestRange,
}

impl ScheduleDetails {
    pub fn new(date: NaiveDate, start_time: NaiveTime, guests: GuestRange) -> Self {
        Self {
            date,
            start_time,
            guests,
        }
    }
}

impl fmt::Display for ScheduleDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} at {} ({} guests)",
            self.date.format("%Y-%m-%d"),
            self.start_time.format("%H:%M"),
            self.guests
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slots_cover_nine_to_eight_hourly() {
        let slots = time_slots();
        assert_eq!(slots.len(), 12);
        assert_eq!(slots.first().unwrap().format("%H:%M").to_string(), "09:00");
        assert_eq!(slots.last().unwrap().format("%H:%M").to_string(), "20:00");
    }

    #[test]
    fn guest_range_round_trips_through_label() {
        for range in GuestRange::ALL {
            assert_eq!(GuestRange::from_label(range.label()), Some(range));
        }
        assert_eq!(GuestRange::from_label("12"), None);
    }
}
