//! Booking quotes and confirmation records.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    common::ServiceId, contact::ContactDetails, payment::PaymentMethod, schedule::ScheduleDetails,
    service::PricingMode, venue::Venue,
};

/// Synthetic identifier handed out when a booking is confirmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookingId(Uuid);

impl BookingId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }

    /// Short reference shown to customers, e.g. `BK-1A2B3C4D`.
    pub fn reference(&self) -> String {
        let simple = self.0.simple().to_string();
        format!("BK-{}", simple[..8].to_ascii_uppercase())
    }
}

impl From<Uuid> for BookingId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl fmt::Display for BookingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.reference())
    }
}

/// Contribution of one selected add-on to a quote.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServiceCharge {
    pub service_id: ServiceId,
    pub name: String,
    pub pricing_mode: PricingMode,
    pub amount: f64,
}

/// Derived cost breakdown for a venue plus add-ons.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Quote {
    pub base: f64,
    pub duration_hours: u32,
    pub charges: Vec<ServiceCharge>,
    pub total: f64,
    pub deposit: f64,
}

impl Quote {
    pub fn services_total(&self) -> f64 {
        self.charges.iter().map(|charge| charge.amount).sum()
    }

    /// Amount left to pay after the deposit.
    pub fn balance_due(&self) -> f64 {
        self.total - self.deposit
    }
}

/// In-memory record produced when the wizard reaches its terminal step.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BookingConfirmation {
    pub id: BookingId,
    pub venue: Venue,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule: Option<ScheduleDetails>,
    pub contact: ContactDetails,
    pub payment_method: PaymentMethod,
    pub quote: Quote,
    pub confirmed_at: DateTime<Utc>,
}
