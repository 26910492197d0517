//! Five-step booking wizard: venue, schedule, details, payment, confirmation.
//!
//! The wizard is a plain state machine. It never renders anything; every
//! user-visible effect goes through a [`Surface`] passed into the operation
//! that produces it. The step only ever moves by one, forward through
//! [`BookingWizard::advance`] (or [`BookingWizard::confirm`] at the payment
//! step) and backward through [`BookingWizard::retreat`].

use std::collections::BTreeSet;
use std::fmt;

use bhub_domain::{
    AddOnService, BookingConfirmation, BookingId, ContactDetails, ContactUpdate, PaymentMethod,
    PaymentMethodId, Quote, ScheduleDetails, ServiceId, Venue, VenueId,
};
use chrono::Utc;

use crate::{
    catalog::{CatalogProvider, CatalogSnapshot},
    pricing::{PricingCalculator, PricingPolicy},
    surface::{Route, Surface},
    validation::{check_payment_selected, validate_step, BookingDraft, ValidationFailure},
    CoreError,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum WizardStep {
    SelectVenue = 1,
    ChooseSchedule = 2,
    EventDetails = 3,
    Payment = 4,
    Confirmed = 5,
}

impl WizardStep {
    pub const ALL: [WizardStep; 5] = [
        WizardStep::SelectVenue,
        WizardStep::ChooseSchedule,
        WizardStep::EventDetails,
        WizardStep::Payment,
        WizardStep::Confirmed,
    ];

    pub fn number(self) -> u8 {
        self as u8
    }

    pub fn from_number(value: u8) -> Option<Self> {
        WizardStep::ALL.into_iter().find(|step| step.number() == value)
    }

    pub fn title(self) -> &'static str {
        match self {
            WizardStep::SelectVenue => "Select Venue",
            WizardStep::ChooseSchedule => "Choose Date",
            WizardStep::EventDetails => "Event Details",
            WizardStep::Payment => "Payment",
            WizardStep::Confirmed => "Confirmation",
        }
    }

    pub fn next(self) -> Option<Self> {
        Self::from_number(self.number() + 1)
    }

    pub fn previous(self) -> Option<Self> {
        self.number().checked_sub(1).and_then(Self::from_number)
    }

    pub fn is_terminal(self) -> bool {
        self == WizardStep::Confirmed
    }

    /// Share of the progress bar filled at this step (0, 25, 50, 75, 100).
    pub fn progress_percent(self) -> u8 {
        (self.number() - 1) * 25
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.number(), self.title())
    }
}

/// Reported result of a navigation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    Moved { from: WizardStep, to: WizardStep },
    Rejected(ValidationFailure),
    Unchanged,
}

impl StepOutcome {
    pub fn moved(&self) -> bool {
        matches!(self, StepOutcome::Moved { .. })
    }
}

pub struct BookingWizard {
    catalog: CatalogSnapshot,
    pricing: PricingCalculator,
    step: WizardStep,
    draft: BookingDraft,
    confirmation: Option<BookingConfirmation>,
}

impl BookingWizard {
    /// Mounts a wizard at step 1, reading the catalog once.
    pub fn new(provider: &dyn CatalogProvider, policy: PricingPolicy) -> Self {
        Self {
            catalog: CatalogSnapshot::load(provider),
            pricing: PricingCalculator::new(policy),
            step: WizardStep::SelectVenue,
            draft: BookingDraft::default(),
            confirmation: None,
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn catalog(&self) -> &CatalogSnapshot {
        &self.catalog
    }

    pub fn pricing_policy(&self) -> &PricingPolicy {
        self.pricing.policy()
    }

    pub fn draft(&self) -> &BookingDraft {
        &self.draft
    }

    pub fn selected_venue(&self) -> Option<&Venue> {
        self.draft
            .venue_id
            .as_ref()
            .and_then(|id| self.catalog.venue(id))
    }

    pub fn selected_services(&self) -> &BTreeSet<ServiceId> {
        &self.draft.services
    }

    pub fn is_service_selected(&self, id: &ServiceId) -> bool {
        self.draft.services.contains(id)
    }

    pub fn selected_service_entries(&self) -> Vec<&AddOnService> {
        self.draft
            .services
            .iter()
            .filter_map(|id| self.catalog.service(id))
            .collect()
    }

    pub fn payment_method(&self) -> Option<&PaymentMethod> {
        self.draft
            .payment_method
            .as_ref()
            .and_then(|id| self.catalog.payment_method(id))
    }

    pub fn contact(&self) -> &ContactDetails {
        &self.draft.contact
    }

    pub fn schedule(&self) -> Option<&ScheduleDetails> {
        self.draft.schedule.as_ref()
    }

    pub fn confirmation(&self) -> Option<&BookingConfirmation> {
        self.confirmation.as_ref()
    }

    pub fn can_retreat(&self) -> bool {
        self.step > WizardStep::SelectVenue && !self.step.is_terminal()
    }

    /// Current total and deposit, recomputed from the selections on every call.
    pub fn quote(&self) -> Option<Quote> {
        let venue = self.selected_venue()?;
        Some(
            self.pricing
                .quote(venue, &self.draft.services, &self.catalog.services),
        )
    }

    pub fn select_venue(&mut self, id: impl Into<VenueId>) -> Result<(), CoreError> {
        self.require_step("select_venue", WizardStep::SelectVenue)?;
        let id = id.into();
        self.catalog.require_venue(&id)?;
        tracing::debug!(venue = %id, "venue selected");
        self.draft.venue_id = Some(id);
        Ok(())
    }

    pub fn set_schedule(&mut self, schedule: ScheduleDetails) -> Result<(), CoreError> {
        self.require_step("set_schedule", WizardStep::ChooseSchedule)?;
        tracing::debug!(schedule = %schedule, "schedule captured");
        self.draft.schedule = Some(schedule);
        Ok(())
    }

    /// Flips membership of `id` in the add-on selection and returns the new state.
    pub fn toggle_service(&mut self, id: impl Into<ServiceId>) -> Result<bool, CoreError> {
        self.require_step("toggle_service", WizardStep::EventDetails)?;
        let id = id.into();
        self.catalog.require_service(&id)?;
        let selected = if self.draft.services.remove(&id) {
            false
        } else {
            self.draft.services.insert(id.clone());
            true
        };
        tracing::debug!(service = %id, selected, "service toggled");
        Ok(selected)
    }

    pub fn update_contact(&mut self, update: ContactUpdate) -> Result<(), CoreError> {
        self.require_step("update_contact", WizardStep::EventDetails)?;
        tracing::debug!(field = %update.field(), "contact field updated");
        self.draft.contact.apply(update);
        Ok(())
    }

    pub fn select_payment_method(&mut self, id: impl Into<PaymentMethodId>) -> Result<(), CoreError> {
        self.require_step("select_payment_method", WizardStep::Payment)?;
        let id = id.into();
        self.catalog.require_payment_method(&id)?;
        tracing::debug!(method = %id, "payment method selected");
        self.draft.payment_method = Some(id);
        Ok(())
    }

    /// Moves one step forward if the current step's rule passes.
    ///
    /// At the payment step this is the same as [`BookingWizard::confirm`].
    pub fn advance(&mut self, surface: &mut dyn Surface) -> StepOutcome {
        match self.step {
            WizardStep::Confirmed => StepOutcome::Unchanged,
            WizardStep::Payment => self.finalize(surface),
            current => {
                if let Err(failure) = validate_step(current, &self.draft) {
                    return self.reject(failure, surface);
                }
                self.move_to(current.next().unwrap_or(current), surface)
            }
        }
    }

    pub fn retreat(&mut self, surface: &mut dyn Surface) -> StepOutcome {
        if !self.can_retreat() {
            return StepOutcome::Unchanged;
        }
        match self.step.previous() {
            Some(previous) => self.move_to(previous, surface),
            None => StepOutcome::Unchanged,
        }
    }

    /// Places the booking once a payment method has been chosen.
    pub fn confirm(&mut self, surface: &mut dyn Surface) -> Result<StepOutcome, CoreError> {
        self.require_step("confirm", WizardStep::Payment)?;
        Ok(self.finalize(surface))
    }

    /// Leaves the wizard for `route`, discarding everything entered so far.
    pub fn exit(self, route: Route, surface: &mut dyn Surface) {
        tracing::debug!(step = %self.step, route = %route, "booking wizard closed");
        surface.navigate_to(route);
    }

    fn finalize(&mut self, surface: &mut dyn Surface) -> StepOutcome {
        if let Err(failure) = check_payment_selected(&self.draft) {
            return self.reject(failure, surface);
        }
        let confirmation = match self.build_confirmation() {
            Some(confirmation) => confirmation,
            None => return self.reject(ValidationFailure::VenueRequired, surface),
        };
        let id = confirmation.id;
        tracing::info!(
            booking = %id,
            venue = %confirmation.venue.id,
            total = confirmation.quote.total,
            "booking confirmed"
        );
        self.confirmation = Some(confirmation);
        surface.notify_success("Booking confirmed! Redirecting to confirmation page...");
        let outcome = self.move_to(WizardStep::Confirmed, surface);
        surface.navigate_to(Route::BookingConfirmation(id));
        outcome
    }

    fn build_confirmation(&self) -> Option<BookingConfirmation> {
        let venue = self.selected_venue()?.clone();
        let payment_method = self.payment_method()?.clone();
        let quote = self.quote()?;
        Some(BookingConfirmation {
            id: BookingId::generate(),
            venue,
            schedule: self.draft.schedule.clone(),
            contact: self.draft.contact.clone(),
            payment_method,
            quote,
            confirmed_at: Utc::now(),
        })
    }

    fn reject(&self, failure: ValidationFailure, surface: &mut dyn Surface) -> StepOutcome {
        tracing::debug!(step = %self.step, reason = %failure, "step transition rejected");
        surface.notify_error(&failure.message());
        StepOutcome::Rejected(failure)
    }

    fn move_to(&mut self, to: WizardStep, surface: &mut dyn Surface) -> StepOutcome {
        let from = self.step;
        self.step = to;
        tracing::debug!(from = %from, to = %to, "wizard step changed");
        surface.scroll_to_top();
        StepOutcome::Moved { from, to }
    }

    fn require_step(&self, operation: &'static str, expected: WizardStep) -> Result<(), CoreError> {
        if self.step == expected {
            Ok(())
        } else {
            Err(CoreError::InvalidStep {
                operation,
                step: self.step,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{catalog::StaticCatalog, surface::RecordingSurface};
    use bhub_domain::EventType;

    fn wizard() -> BookingWizard {
        BookingWizard::new(&StaticCatalog::demo(), PricingPolicy::default())
    }

    fn fill_details(wizard: &mut BookingWizard) {
        for update in [
            ContactUpdate::FirstName("Ada".into()),
            ContactUpdate::LastName("Lovelace".into()),
            ContactUpdate::Email("ada@example.com".into()),
            ContactUpdate::Phone("5551234567".into()),
            ContactUpdate::EventType(Some(EventType::Wedding)),
            ContactUpdate::AcceptTerms(true),
        ] {
            wizard.update_contact(update).unwrap();
        }
    }

    #[test]
    fn starts_at_venue_selection_with_nothing_selected() {
        let wizard = wizard();
        assert_eq!(wizard.step(), WizardStep::SelectVenue);
        assert!(wizard.selected_venue().is_none());
        assert!(wizard.selected_services().is_empty());
        assert!(wizard.payment_method().is_none());
        assert!(wizard.quote().is_none());
    }

    #[test]
    fn advance_without_venue_is_rejected_and_reported() {
        let mut wizard = wizard();
        let mut surface = RecordingSurface::new();

        let outcome = wizard.advance(&mut surface);

        assert_eq!(outcome, StepOutcome::Rejected(ValidationFailure::VenueRequired));
        assert_eq!(wizard.step(), WizardStep::SelectVenue);
        assert_eq!(surface.errors(), vec!["Please select a venue to continue"]);
        assert_eq!(surface.scroll_count(), 0);
    }

    #[test]
    fn selecting_a_venue_lets_the_wizard_advance() {
        let mut wizard = wizard();
        let mut surface = RecordingSurface::new();

        wizard.select_venue("1").unwrap();
        let outcome = wizard.advance(&mut surface);

        assert_eq!(
            outcome,
            StepOutcome::Moved {
                from: WizardStep::SelectVenue,
                to: WizardStep::ChooseSchedule
            }
        );
        assert_eq!(surface.scroll_count(), 1);
        assert!(surface.errors().is_empty());
    }

    #[test]
    fn venue_can_be_changed_before_advancing() {
        let mut wizard = wizard();
        wizard.select_venue("1").unwrap();
        wizard.select_venue("3").unwrap();
        assert_eq!(wizard.selected_venue().unwrap().name, "Metropolitan Conference Center");
    }

    #[test]
    fn operations_outside_their_step_are_refused() {
        let mut wizard = wizard();
        let err = wizard.toggle_service("catering").unwrap_err();
        assert!(matches!(
            err,
            CoreError::InvalidStep {
                operation: "toggle_service",
                step: WizardStep::SelectVenue
            }
        ));
        assert_eq!(
            err.to_string(),
            "`toggle_service` is not available at step 1 (Select Venue)"
        );
    }

    #[test]
    fn unknown_venue_is_refused_without_changing_selection() {
        let mut wizard = wizard();
        wizard.select_venue("2").unwrap();
        assert!(matches!(
            wizard.select_venue("99"),
            Err(CoreError::VenueNotFound(_))
        ));
        assert_eq!(wizard.selected_venue().unwrap().id, VenueId::new("2"));
    }

    #[test]
    fn retreat_is_disabled_at_first_step() {
        let mut wizard = wizard();
        let mut surface = RecordingSurface::new();
        assert_eq!(wizard.retreat(&mut surface), StepOutcome::Unchanged);
        assert_eq!(surface.scroll_count(), 0);
    }

    #[test]
    fn retreat_keeps_entered_data() {
        let mut wizard = wizard();
        let mut surface = RecordingSurface::new();
        wizard.select_venue("2").unwrap();
        wizard.advance(&mut surface);
        wizard.advance(&mut surface);
        wizard.toggle_service("av").unwrap();

        assert!(wizard.retreat(&mut surface).moved());
        assert!(wizard.retreat(&mut surface).moved());

        assert_eq!(wizard.step(), WizardStep::SelectVenue);
        assert_eq!(wizard.selected_venue().unwrap().id, VenueId::new("2"));
        assert!(wizard.is_service_selected(&ServiceId::new("av")));
    }

    #[test]
    fn double_toggle_restores_empty_selection() {
        let mut wizard = wizard();
        let mut surface = RecordingSurface::new();
        wizard.select_venue("1").unwrap();
        wizard.advance(&mut surface);
        wizard.advance(&mut surface);

        assert!(wizard.toggle_service("catering").unwrap());
        assert!(!wizard.toggle_service("catering").unwrap());
        assert!(wizard.selected_services().is_empty());
    }

    #[test]
    fn details_step_reports_missing_fields_before_terms() {
        let mut wizard = wizard();
        let mut surface = RecordingSurface::new();
        wizard.select_venue("1").unwrap();
        wizard.advance(&mut surface);
        wizard.advance(&mut surface);
        surface.clear();

        let outcome = wizard.advance(&mut surface);

        assert!(matches!(
            outcome,
            StepOutcome::Rejected(ValidationFailure::MissingContactFields(_))
        ));
        assert_eq!(surface.errors(), vec!["Please fill out all required fields"]);
        assert_eq!(wizard.step(), WizardStep::EventDetails);
    }

    #[test]
    fn confirm_requires_payment_method() {
        let mut wizard = wizard();
        let mut surface = RecordingSurface::new();
        wizard.select_venue("1").unwrap();
        wizard.advance(&mut surface);
        wizard.advance(&mut surface);
        fill_details(&mut wizard);
        wizard.advance(&mut surface);
        assert_eq!(wizard.step(), WizardStep::Payment);
        surface.clear();

        let outcome = wizard.confirm(&mut surface).unwrap();
        assert_eq!(outcome, StepOutcome::Rejected(ValidationFailure::PaymentMethodRequired));
        assert_eq!(wizard.step(), WizardStep::Payment);
        assert_eq!(
            surface.last_error(),
            Some("Please select a payment method to continue")
        );

        wizard.select_payment_method("credit").unwrap();
        let outcome = wizard.confirm(&mut surface).unwrap();
        assert!(outcome.moved());
        assert_eq!(wizard.step(), WizardStep::Confirmed);
        let confirmation = wizard.confirmation().expect("confirmation recorded");
        assert_eq!(confirmation.payment_method.id, PaymentMethodId::new("credit"));
        assert_eq!(confirmation.quote.total, 4800.0);
        assert_eq!(
            surface.routes().last(),
            Some(&&Route::BookingConfirmation(confirmation.id))
        );
    }

    #[test]
    fn payment_selection_replaces_previous_choice() {
        let mut wizard = wizard();
        let mut surface = RecordingSurface::new();
        wizard.select_venue("1").unwrap();
        wizard.advance(&mut surface);
        wizard.advance(&mut surface);
        fill_details(&mut wizard);
        wizard.advance(&mut surface);

        wizard.select_payment_method("paypal").unwrap();
        wizard.select_payment_method("bank").unwrap();
        assert_eq!(wizard.payment_method().unwrap().name, "Bank Transfer");
    }

    #[test]
    fn terminal_step_ignores_navigation() {
        let mut wizard = wizard();
        let mut surface = RecordingSurface::new();
        wizard.select_venue("1").unwrap();
        wizard.advance(&mut surface);
        wizard.advance(&mut surface);
        fill_details(&mut wizard);
        wizard.advance(&mut surface);
        wizard.select_payment_method("credit").unwrap();
        wizard.advance(&mut surface);
        assert_eq!(wizard.step(), WizardStep::Confirmed);

        assert_eq!(wizard.advance(&mut surface), StepOutcome::Unchanged);
        assert_eq!(wizard.retreat(&mut surface), StepOutcome::Unchanged);
        assert!(matches!(
            wizard.confirm(&mut surface),
            Err(CoreError::InvalidStep { .. })
        ));
        assert_eq!(wizard.step(), WizardStep::Confirmed);
    }

    #[test]
    fn quote_tracks_service_selection() {
        let mut wizard = wizard();
        let mut surface = RecordingSurface::new();
        wizard.select_venue("1").unwrap();
        wizard.advance(&mut surface);
        wizard.advance(&mut surface);

        wizard.toggle_service("catering").unwrap();
        let quote = wizard.quote().unwrap();
        assert_eq!(quote.total, 9300.0);
        assert_eq!(quote.deposit, 2325.0);

        wizard.toggle_service("catering").unwrap();
        assert_eq!(wizard.quote().unwrap().total, 4800.0);
    }

    #[test]
    fn step_numbers_round_trip() {
        for step in WizardStep::ALL {
            assert_eq!(WizardStep::from_number(step.number()), Some(step));
        }
        assert_eq!(WizardStep::SelectVenue.previous(), None);
        assert_eq!(WizardStep::Confirmed.next(), None);
        assert_eq!(WizardStep::Payment.progress_percent(), 75);
    }

    #[test]
    fn exit_emits_navigation() {
        let wizard = wizard();
        let mut surface = RecordingSurface::new();
        wizard.exit(Route::Home, &mut surface);
        assert_eq!(surface.routes(), vec![&Route::Home]);
    }
}
