//! Pure cost derivation for a venue plus selected add-ons.

use bhub_domain::{AddOnService, Priced, PricingMode, Quote, ServiceCharge, ServiceId, Venue};
use serde::{Deserialize, Serialize};

use crate::catalog::find_by_id;

pub const DEFAULT_DURATION_HOURS: u32 = 4;
pub const DEFAULT_ATTENDEE_ESTIMATE: u32 = 100;
pub const DEFAULT_DEPOSIT_RATE: f64 = 0.25;

/// Assumptions applied when no precise duration or headcount is known.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricingPolicy {
    pub duration_hours: u32,
    pub attendee_estimate: u32,
    pub deposit_rate: f64,
}

impl Default for PricingPolicy {
    fn default() -> Self {
        Self {
            duration_hours: DEFAULT_DURATION_HOURS,
            attendee_estimate: DEFAULT_ATTENDEE_ESTIMATE,
            deposit_rate: DEFAULT_DEPOSIT_RATE,
        }
    }
}

/// Amount a single add-on contributes to the total.
pub fn service_charge(service: &AddOnService, attendee_estimate: u32) -> f64 {
    match service.pricing_mode {
        PricingMode::FlatFee => service.price(),
        PricingMode::PerAttendee => service.price() * f64::from(attendee_estimate),
    }
}

/// Venue hire for `duration_hours` plus every selected service found in `catalog`.
///
/// Selected ids missing from the catalog contribute nothing.
pub fn compute_total<'a, I>(
    venue: &Venue,
    duration_hours: u32,
    selected_service_ids: I,
    catalog: &[AddOnService],
    attendee_estimate: u32,
) -> f64
where
    I: IntoIterator<Item = &'a ServiceId>,
{
    let base = venue.price() * f64::from(duration_hours);
    let services: f64 = selected_service_ids
        .into_iter()
        .filter_map(|id| find_by_id(catalog, id))
        .map(|service| service_charge(service, attendee_estimate))
        .sum();
    base + services
}

/// Deposit collected at confirmation, rounded to the nearest whole unit.
pub fn deposit_for(total: f64, rate: f64) -> f64 {
    (total * rate).round()
}

/// Builds itemised quotes under a fixed [`PricingPolicy`].
#[derive(Debug, Clone, Copy, Default)]
pub struct PricingCalculator {
    policy: PricingPolicy,
}

impl PricingCalculator {
    pub fn new(policy: PricingPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &PricingPolicy {
        &self.policy
    }

    pub fn total<'a, I>(&self, venue: &Venue, selected: I, catalog: &[AddOnService]) -> f64
    where
        I: IntoIterator<Item = &'a ServiceId>,
    {
        compute_total(
            venue,
            self.policy.duration_hours,
            selected,
            catalog,
            self.policy.attendee_estimate,
        )
    }

    pub fn quote<'a, I>(&self, venue: &Venue, selected: I, catalog: &[AddOnService]) -> Quote
    where
        I: IntoIterator<Item = &'a ServiceId> + Clone,
    {
        let base = venue.price() * f64::from(self.policy.duration_hours);
        let charges: Vec<ServiceCharge> = selected
            .clone()
            .into_iter()
            .filter_map(|id| catalog.iter().find(|service| &service.id == id))
            .map(|service| ServiceCharge {
                service_id: service.id.clone(),
                name: service.name.clone(),
                pricing_mode: service.pricing_mode,
                amount: service_charge(service, self.policy.attendee_estimate),
            })
            .collect();
        let total = self.total(venue, selected, catalog);
        Quote {
            base,
            duration_hours: self.policy.duration_hours,
            charges,
            total,
            deposit: deposit_for(total, self.policy.deposit_rate),
        }
    }
}
