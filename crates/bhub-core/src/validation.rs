//! Per-step gating rules evaluated before the wizard may move forward.

use std::collections::BTreeSet;
use std::fmt;

use bhub_domain::{ContactDetails, ContactField, PaymentMethodId, ScheduleDetails, ServiceId, VenueId};

use crate::wizard::WizardStep;

/// User-facing reason a step could not be left.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationFailure {
    VenueRequired,
    MissingContactFields(Vec<ContactField>),
    TermsNotAccepted,
    PaymentMethodRequired,
    MissingScheduleFields,
    InvalidDate(String),
    InvalidTimeSlot(String),
    InvalidGuestRange(String),
}

impl ValidationFailure {
    pub fn message(&self) -> String {
        match self {
            ValidationFailure::VenueRequired => "Please select a venue to continue".into(),
            ValidationFailure::MissingContactFields(_) | ValidationFailure::MissingScheduleFields => {
                "Please fill out all required fields".into()
            }
            ValidationFailure::TermsNotAccepted => "Please agree to the terms of service".into(),
            ValidationFailure::PaymentMethodRequired => {
                "Please select a payment method to continue".into()
            }
            ValidationFailure::InvalidDate(value) => {
                format!("Invalid date `{value}` (use YYYY-MM-DD)")
            }
            ValidationFailure::InvalidTimeSlot(value) => {
                format!("`{value}` is not an available time slot")
            }
            ValidationFailure::InvalidGuestRange(value) => {
                format!("`{value}` is not a listed guest range")
            }
        }
    }
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

/// Selections and form data collected by the wizard so far.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookingDraft {
    pub venue_id: Option<VenueId>,
    pub schedule: Option<ScheduleDetails>,
    pub services: BTreeSet<ServiceId>,
    pub payment_method: Option<PaymentMethodId>,
    pub contact: ContactDetails,
}

pub fn check_venue_selected(draft: &BookingDraft) -> Result<(), ValidationFailure> {
    match draft.venue_id {
        Some(_) => Ok(()),
        None => Err(ValidationFailure::VenueRequired),
    }
}

/// Required fields are checked before the terms flag, so a form with both
/// problems reports the missing fields.
pub fn check_contact_details(draft: &BookingDraft) -> Result<(), ValidationFailure> {
    let missing = draft.contact.missing_fields();
    if !missing.is_empty() {
        return Err(ValidationFailure::MissingContactFields(missing));
    }
    if !draft.contact.accept_terms {
        return Err(ValidationFailure::TermsNotAccepted);
    }
    Ok(())
}

pub fn check_payment_selected(draft: &BookingDraft) -> Result<(), ValidationFailure> {
    match draft.payment_method {
        Some(_) => Ok(()),
        None => Err(ValidationFailure::PaymentMethodRequired),
    }
}

/// Evaluates the rule guarding the transition out of `step`.
///
/// The schedule step is always passable here: its sub-form checks its own fields.
pub fn validate_step(step: WizardStep, draft: &BookingDraft) -> Result<(), ValidationFailure> {
    match step {
        WizardStep::SelectVenue => check_venue_selected(draft),
        WizardStep::ChooseSchedule => Ok(()),
        WizardStep::EventDetails => check_contact_details(draft),
        WizardStep::Payment => check_payment_selected(draft),
        WizardStep::Confirmed => Ok(()),
    }
}
