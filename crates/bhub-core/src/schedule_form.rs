//! Raw input for the schedule step, checked before it reaches the wizard.

use bhub_domain::{time_slots, GuestRange, ScheduleDetails};
use chrono::{NaiveDate, NaiveTime};

use crate::validation::ValidationFailure;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScheduleForm {
    pub date: String,
    pub time: String,
    pub guests: String,
}

impl ScheduleForm {
    pub fn new(date: impl Into<String>, time: impl Into<String>, guests: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            time: time.into(),
            guests: guests.into(),
        }
    }

    /// Parses the three fields. Blank fields are reported before malformed ones.
    pub fn validate(&self) -> Result<ScheduleDetails, ValidationFailure> {
        let date = self.date.trim();
        let time = self.time.trim();
        let guests = self.guests.trim();
        if date.is_empty() || time.is_empty() || guests.is_empty() {
            return Err(ValidationFailure::MissingScheduleFields);
        }

        let date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .map_err(|_| ValidationFailure::InvalidDate(date.to_string()))?;
        let start_time = parse_slot(time)?;
        let guests = GuestRange::from_label(guests)
            .ok_or_else(|| ValidationFailure::InvalidGuestRange(guests.to_string()))?;

        Ok(ScheduleDetails::new(date, start_time, guests))
    }
}

fn parse_slot(value: &str) -> Result<NaiveTime, ValidationFailure> {
    let parsed = NaiveTime::parse_from_str(value, "%H:%M")
        .map_err(|_| ValidationFailure::InvalidTimeSlot(value.to_string()))?;
    if time_slots().contains(&parsed) {
        Ok(parsed)
    } else {
        Err(ValidationFailure::InvalidTimeSlot(value.to_string()))
    }
}
