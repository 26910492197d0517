//! Domain types representing optional add-on services.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::common::*;

/// How an add-on service is charged.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PricingMode {
    FlatFee,
    PerAttendee,
}

impl fmt::Display for PricingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PricingMode::FlatFee => "flat fee",
            PricingMode::PerAttendee => "per person",
        };
        f.write_str(label)
    }
}

/// An optional extra (catering, decoration, ...) that can be attached to a booking.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AddOnService {
    pub id: ServiceId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub unit_price: f64,
    pub pricing_mode: PricingMode,
}

impl AddOnService {
    pub fn flat_fee(id: impl Into<ServiceId>, name: impl Into<String>, price: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            unit_price: price,
            pricing_mode: PricingMode::FlatFee,
        }
    }

    pub fn per_attendee(id: impl Into<ServiceId>, name: impl Into<String>, price: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            unit_price: price,
            pricing_mode: PricingMode::PerAttendee,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

impl Identifiable for AddOnService {
    type Id = ServiceId;

    fn id(&self) -> &ServiceId {
        &self.id
    }
}

impl NamedEntity for AddOnService {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Priced for AddOnService {
    fn price(&self) -> f64 {
        self.unit_price
    }
}

impl Displayable for AddOnService {
    fn display_label(&self) -> String {
        format!("{} ({})", self.name, self.pricing_mode)
    }
}
