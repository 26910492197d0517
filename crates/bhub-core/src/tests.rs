use chrono::{NaiveDate, NaiveTime};

use crate::{
    catalog::StaticCatalog,
    dashboard_service::DashboardService,
    format::format_amount,
    pricing::PricingPolicy,
    schedule_form::ScheduleForm,
    surface::{RecordingSurface, Route, SurfaceEvent},
    validation::ValidationFailure,
    wizard::{BookingWizard, StepOutcome, WizardStep},
};
use bhub_domain::{
    ContactUpdate, EventStatus, EventType, GuestRange, UserRole, UserSession,
};

fn wizard() -> BookingWizard {
    BookingWizard::new(&StaticCatalog::demo(), PricingPolicy::default())
}

fn fill_contact(wizard: &mut BookingWizard) {
    for update in [
        ContactUpdate::FirstName("Grace".into()),
        ContactUpdate::LastName("Hopper".into()),
        ContactUpdate::Email("grace@example.com".into()),
        ContactUpdate::Phone("5550001111".into()),
        ContactUpdate::EventType(Some(EventType::Corporate)),
        ContactUpdate::SpecialRequests("Projector on stage".into()),
        ContactUpdate::AcceptTerms(true),
    ] {
        wizard.update_contact(update).expect("details step");
    }
}

#[test]
fn full_booking_flow_reaches_confirmation() {
    let mut wizard = wizard();
    let mut surface = RecordingSurface::new();

    wizard.select_venue("1").expect("select venue");
    assert!(wizard.advance(&mut surface).moved());

    let schedule = ScheduleForm::new("2024-09-14", "16:00", "151-200")
        .validate()
        .expect("valid schedule");
    wizard.set_schedule(schedule).expect("set schedule");
    assert!(wizard.advance(&mut surface).moved());

    wizard.toggle_service("catering").expect("toggle catering");
    wizard.toggle_service("photography").expect("toggle photography");
    fill_contact(&mut wizard);
    assert!(wizard.advance(&mut surface).moved());

    wizard.select_payment_method("paypal").expect("select payment");
    let outcome = wizard.confirm(&mut surface).expect("confirm");
    assert_eq!(
        outcome,
        StepOutcome::Moved {
            from: WizardStep::Payment,
            to: WizardStep::Confirmed
        }
    );

    let confirmation = wizard.confirmation().expect("confirmation");
    // 4800 base + 4500 catering + 1500 photography
    assert_eq!(confirmation.quote.total, 10800.0);
    assert_eq!(confirmation.quote.deposit, 2700.0);
    assert_eq!(format_amount(confirmation.quote.total), "$10,800");
    assert_eq!(confirmation.contact.full_name(), "Grace Hopper");
    assert_eq!(
        confirmation.schedule.as_ref().map(|schedule| schedule.guests),
        Some(GuestRange::UpTo200)
    );

    assert!(surface.errors().is_empty());
    assert_eq!(surface.scroll_count(), 4);
    assert_eq!(
        surface.events().last(),
        Some(&SurfaceEvent::Navigate(Route::BookingConfirmation(
            confirmation.id
        )))
    );
}

#[test]
fn step_changes_by_at_most_one_per_call() {
    let mut wizard = wizard();
    let mut surface = RecordingSurface::new();
    wizard.select_venue("4").expect("select venue");

    // f = advance, b = retreat
    let script = "ffbbbfffbffbfffffbb";
    let mut previous = wizard.step().number();
    for (index, op) in script.chars().enumerate() {
        if wizard.step() == WizardStep::EventDetails && index == 7 {
            fill_contact(&mut wizard);
        }
        match op {
            'f' => wizard.advance(&mut surface),
            _ => wizard.retreat(&mut surface),
        };
        let current = wizard.step().number();
        assert!((1..=5).contains(&current));
        assert!(current.abs_diff(previous) <= 1, "jumped from {previous} to {current}");
        previous = current;
    }
}

#[test]
fn empty_details_report_missing_fields_first() {
    let mut wizard = wizard();
    let mut surface = RecordingSurface::new();
    wizard.select_venue("2").expect("select venue");
    wizard.advance(&mut surface);
    wizard.advance(&mut surface);

    let outcome = wizard.advance(&mut surface);
    assert!(matches!(
        outcome,
        StepOutcome::Rejected(ValidationFailure::MissingContactFields(ref fields)) if fields.len() == 5
    ));
    assert_eq!(surface.last_error(), Some("Please fill out all required fields"));
}

#[test]
fn terms_failure_reported_after_fields_complete() {
    let mut wizard = wizard();
    let mut surface = RecordingSurface::new();
    wizard.select_venue("2").expect("select venue");
    wizard.advance(&mut surface);
    wizard.advance(&mut surface);
    fill_contact(&mut wizard);
    wizard
        .update_contact(ContactUpdate::AcceptTerms(false))
        .expect("untick terms");

    assert_eq!(
        wizard.advance(&mut surface),
        StepOutcome::Rejected(ValidationFailure::TermsNotAccepted)
    );
    assert_eq!(surface.last_error(), Some("Please agree to the terms of service"));
}

#[test]
fn confirmed_booking_lands_on_dashboard() {
    let mut wizard = wizard();
    let mut surface = RecordingSurface::new();
    wizard.select_venue("6").expect("select venue");
    wizard.advance(&mut surface);
    wizard
        .set_schedule(bhub_domain::ScheduleDetails::new(
            NaiveDate::from_ymd_opt(2024, 3, 2).expect("date"),
            NaiveTime::from_hms_opt(18, 0, 0).expect("time"),
            GuestRange::UpTo50,
        ))
        .expect("set schedule");
    wizard.advance(&mut surface);
    fill_contact(&mut wizard);
    wizard.advance(&mut surface);
    wizard.select_payment_method("bank").expect("select payment");
    wizard.confirm(&mut surface).expect("confirm");

    let user = UserSession::new("1", "Admin User", "admin@example.com", UserRole::Admin);
    let mut dashboard = DashboardService::demo(&user);
    let confirmation = wizard.confirmation().expect("confirmation");
    let record = dashboard
        .add_confirmation(confirmation)
        .expect("scheduled booking")
        .clone();

    assert_eq!(record.status, EventStatus::Upcoming);
    assert_eq!(record.venue, "Urban Workshop Space");
    assert_eq!(record.time, "18:00 - 22:00");
    assert_eq!(record.guests, 50);
    assert_eq!(record.cost, Some(2600.0));
    assert_eq!(dashboard.upcoming().count(), 3);
}

#[test]
fn booking_without_schedule_is_not_listed() {
    let mut wizard = wizard();
    let mut surface = RecordingSurface::new();
    wizard.select_venue("1").expect("select venue");
    wizard.advance(&mut surface);
    wizard.advance(&mut surface);
    fill_contact(&mut wizard);
    wizard.advance(&mut surface);
    wizard.select_payment_method("credit").expect("select payment");
    wizard.advance(&mut surface);
    assert_eq!(wizard.step(), WizardStep::Confirmed);

    let user = UserSession::new("2", "Client User", "client@example.com", UserRole::Client);
    let mut dashboard = DashboardService::demo(&user);
    assert!(dashboard
        .add_confirmation(wizard.confirmation().expect("confirmation"))
        .is_none());
}
