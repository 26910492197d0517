//! Contact and event details captured at the details step of a booking.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Enumerates the event classifications offered on the booking form.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    Wedding,
    Corporate,
    Birthday,
    Anniversary,
    Conference,
    Other,
}

impl EventType {
    pub const ALL: [EventType; 6] = [
        EventType::Wedding,
        EventType::Corporate,
        EventType::Birthday,
        EventType::Anniversary,
        EventType::Conference,
        EventType::Other,
    ];

    pub fn key(self) -> &'static str {
        match self {
            EventType::Wedding => "wedding",
            EventType::Corporate => "corporate",
            EventType::Birthday => "birthday",
            EventType::Anniversary => "anniversary",
            EventType::Conference => "conference",
            EventType::Other => "other",
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            EventType::Wedding => "Wedding",
            EventType::Corporate => "Corporate Event",
            EventType::Birthday => "Birthday Party",
            EventType::Anniversary => "Anniversary",
            EventType::Conference => "Conference",
            EventType::Other => "Other",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownEventType(pub String);

impl fmt::Display for UnknownEventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown event type `{}`", self.0)
    }
}

impl std::error::Error for UnknownEventType {}

impl FromStr for EventType {
    type Err = UnknownEventType;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase();
        EventType::ALL
            .into_iter()
            .find(|kind| kind.key() == normalized || kind.to_string().to_ascii_lowercase() == normalized)
            .ok_or_else(|| UnknownEventType(value.trim().to_string()))
    }
}

/// Names the individual fields of [`ContactDetails`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ContactField {
    FirstName,
    LastName,
    Email,
    Phone,
    EventType,
    SpecialRequests,
    AcceptTerms,
}

impl ContactField {
    /// Fields that must be non-empty before the details step can be left.
    pub const REQUIRED: [ContactField; 5] = [
        ContactField::FirstName,
        ContactField::LastName,
        ContactField::Email,
        ContactField::Phone,
        ContactField::EventType,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ContactField::FirstName => "First name",
            ContactField::LastName => "Last name",
            ContactField::Email => "Email",
            ContactField::Phone => "Phone",
            ContactField::EventType => "Event type",
            ContactField::SpecialRequests => "Special requests",
            ContactField::AcceptTerms => "Terms of service",
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single-field edit applied to [`ContactDetails`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactUpdate {
    FirstName(String),
    LastName(String),
    Email(String),
    Phone(String),
    EventType(Option<EventType>),
    SpecialRequests(String),
    AcceptTerms(bool),
}

impl ContactUpdate {
    pub fn field(&self) -> ContactField {
        match self {
            ContactUpdate::FirstName(_) => ContactField::FirstName,
            ContactUpdate::LastName(_) => ContactField::LastName,
            ContactUpdate::Email(_) => ContactField::Email,
            ContactUpdate::Phone(_) => ContactField::Phone,
            ContactUpdate::EventType(_) => ContactField::EventType,
            ContactUpdate::SpecialRequests(_) => ContactField::SpecialRequests,
            ContactUpdate::AcceptTerms(_) => ContactField::AcceptTerms,
        }
    }
}

/// Personal and event details of the person making the booking.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactDetails {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_type: Option<EventType>,
    #[serde(default)]
    pub special_requests: String,
    #[serde(default)]
    pub accept_terms: bool,
}

impl ContactDetails {
    pub fn apply(&mut self, update: ContactUpdate) {
        match update {
            ContactUpdate::FirstName(value) => self.first_name = value,
            ContactUpdate::LastName(value) => self.last_name = value,
            ContactUpdate::Email(value) => self.email = value,
            ContactUpdate::Phone(value) => self.phone = value,
            ContactUpdate::EventType(value) => self.event_type = value,
            ContactUpdate::SpecialRequests(value) => self.special_requests = value,
            ContactUpdate::AcceptTerms(value) => self.accept_terms = value,
        }
    }

    /// Lists required fields that are still empty, in form order.
    pub fn missing_fields(&self) -> Vec<ContactField> {
        ContactField::REQUIRED
            .into_iter()
            .filter(|field| match field {
                ContactField::FirstName => self.first_name.is_empty(),
                ContactField::LastName => self.last_name.is_empty(),
                ContactField::Email => self.email.is_empty(),
                ContactField::Phone => self.phone.is_empty(),
                ContactField::EventType => self.event_type.is_none(),
                _ => false,
            })
            .collect()
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
            .trim()
            .to_string()
    }
}

/// Message sent from the public contact page.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub subject: String,
    pub message: String,
}

impl ContactMessage {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        subject: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            subject: subject.into(),
            message: message.into(),
        }
    }

    /// Name, email and message must be present; the subject is optional.
    pub fn is_complete(&self) -> bool {
        [&self.name, &self.email, &self.message]
            .iter()
            .all(|value| !value.trim().is_empty())
    }
}
