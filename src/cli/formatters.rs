//! Plain-text renderings of catalog, booking and dashboard data.
//!
//! Everything here returns strings so the shell decides where they go.

use bhub_core::format::{CurrencyFormatter, DateFormatter, LocaleFormat};
use bhub_core::{BookingWizard, DashboardService, DashboardStat, WizardStep};
use bhub_domain::{
    AddOnService, BookingConfirmation, Displayable, EventRecord, PaymentMethod, Quote,
    UserSession, Venue,
};

const NOT_SET: &str = "(not set)";

pub fn venue_table(venues: &[&Venue], locale: &LocaleFormat) -> Vec<String> {
    let header = format!(
        "{:<3} {:<30} {:<30} {:>8} {:>9} {:>6}",
        "ID", "Name", "Location", "Capacity", "Price/hr", "Rating"
    );
    let rows = venues.iter().map(|venue| {
        format!(
            "{:<3} {:<30} {:<30} {:>8} {:>9} {:>6.1}",
            venue.id.as_str(),
            venue.name,
            venue.location,
            venue.capacity,
            locale.format_amount(venue.hourly_price),
            venue.rating
        )
    });
    std::iter::once(header)
        .chain(rows)
        .map(|line| line.trim_end().to_string())
        .collect()
}

pub fn venue_detail(venue: &Venue, locale: &LocaleFormat) -> Vec<String> {
    let mut lines = vec![
        format!("{} [{}]", venue.name, venue.id),
        format!("  Location: {}", venue.location),
        format!("  Capacity: up to {} guests", venue.capacity),
        format!("  Price: {} per hour", locale.format_amount(venue.hourly_price)),
        format!("  Rating: {:.1}", venue.rating),
    ];
    if !venue.tags.is_empty() {
        lines.push(format!("  Tags: {}", venue.tags.join(", ")));
    }
    if !venue.description.is_empty() {
        lines.push(format!("  {}", venue.description));
    }
    lines
}

pub fn service_line(service: &AddOnService, locale: &LocaleFormat) -> String {
    format!(
        "{} | {} | {} {}",
        service.id,
        service.name,
        locale.format_amount(service.unit_price),
        service.pricing_mode
    )
}

pub fn payment_method_line(method: &PaymentMethod) -> String {
    format!("{} | {} | {}", method.id, method.name, method.description)
}

pub fn quote_lines(quote: &Quote, locale: &LocaleFormat) -> Vec<String> {
    let mut lines = vec![format!(
        "Venue hire ({} hrs): {}",
        quote.duration_hours,
        locale.format_amount(quote.base)
    )];
    lines.extend(
        quote
            .charges
            .iter()
            .map(|charge| format!("{}: {}", charge.name, locale.format_amount(charge.amount))),
    );
    lines.push(format!("Total: {}", locale.format_amount(quote.total)));
    lines.push(format!("Deposit due now: {}", locale.format_amount(quote.deposit)));
    lines.push(format!("Balance due: {}", locale.format_amount(quote.balance_due())));
    lines
}

pub fn step_heading(step: WizardStep) -> String {
    format!(
        "Step {} of {}: {} [{}%]",
        step.number(),
        WizardStep::ALL.len(),
        step.title(),
        step.progress_percent()
    )
}

pub fn wizard_status(wizard: &BookingWizard) -> Vec<String> {
    let venue = wizard
        .selected_venue()
        .map(Displayable::display_label)
        .unwrap_or_else(|| NOT_SET.to_string());
    let schedule = wizard
        .schedule()
        .map(ToString::to_string)
        .unwrap_or_else(|| NOT_SET.to_string());
    let services = wizard
        .selected_service_entries()
        .iter()
        .map(|service| service.name.as_str())
        .collect::<Vec<_>>();
    let contact = wizard.contact();
    let missing = contact.missing_fields();
    let contact_line = if missing.is_empty() {
        format!("{} <{}>", contact.full_name(), contact.email.trim())
    } else {
        let labels = missing.iter().map(|field| field.label()).collect::<Vec<_>>();
        format!("missing {}", labels.join(", "))
    };
    let payment = wizard
        .payment_method()
        .map(|method| method.name.clone())
        .unwrap_or_else(|| NOT_SET.to_string());

    vec![
        step_heading(wizard.step()),
        format!("  Venue: {venue}"),
        format!("  Schedule: {schedule}"),
        format!(
            "  Services: {}",
            if services.is_empty() {
                "none".to_string()
            } else {
                services.join(", ")
            }
        ),
        format!("  Contact: {contact_line}"),
        format!(
            "  Terms: {}",
            if contact.accept_terms {
                "accepted"
            } else {
                "not accepted"
            }
        ),
        format!("  Payment: {payment}"),
    ]
}

pub fn confirmation_lines(confirmation: &BookingConfirmation, locale: &LocaleFormat) -> Vec<String> {
    let mut lines = vec![
        format!("Booking reference: {}", confirmation.id),
        format!("Venue: {}", confirmation.venue.display_label()),
    ];
    if let Some(schedule) = &confirmation.schedule {
        lines.push(format!(
            "When: {} at {} ({} guests)",
            locale.format_date(schedule.date),
            schedule.start_time.format("%H:%M"),
            schedule.guests
        ));
    }
    lines.push(format!("Booked by: {}", confirmation.contact.full_name()));
    lines.push(format!("Payment: {}", confirmation.payment_method.name));
    lines.push(format!("Total: {}", locale.format_amount(confirmation.quote.total)));
    lines.push(format!(
        "Deposit paid: {}",
        locale.format_amount(confirmation.quote.deposit)
    ));
    lines
}

pub fn stat_line(stat: &DashboardStat) -> String {
    let trend = match stat.trend {
        Some(trend) if trend.positive => format!(" +{}%", trend.percent),
        Some(trend) => format!(" -{}%", trend.percent),
        None => String::new(),
    };
    format!("{}: {}{} ({})", stat.title, stat.value, trend, stat.description)
}

pub fn event_line(
    dashboard: &DashboardService,
    event: &EventRecord,
    locale: &LocaleFormat,
) -> String {
    let mut line = format!(
        "{} | {} | {}, {} | {} | {} guests | {}",
        event.id,
        event.title,
        locale.format_date(event.date),
        event.time,
        event.venue,
        event.guests,
        event.status
    );
    if let Some(cost) = dashboard.visible_cost(event) {
        line.push_str(&format!(" | {}", locale.format_amount(cost)));
    }
    let actions = dashboard
        .allowed_transitions(event)
        .iter()
        .map(|status| match status {
            bhub_domain::EventStatus::Completed => "complete",
            bhub_domain::EventStatus::Cancelled => "cancel",
            bhub_domain::EventStatus::Upcoming => "reopen",
        })
        .collect::<Vec<_>>();
    if !actions.is_empty() {
        line.push_str(&format!(" [{}]", actions.join("/")));
    }
    line
}

pub fn user_line(user: &UserSession) -> String {
    format!("{} <{}> ({})", user.name, user.email, user.role)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bhub_core::{PricingPolicy, RecordingSurface, StaticCatalog};
    use bhub_domain::{PricingMode, ServiceCharge, UserRole};
    use insta::assert_snapshot;

    fn quote() -> Quote {
        Quote {
            base: 4800.0,
            duration_hours: 4,
            charges: vec![ServiceCharge {
                service_id: "catering".into(),
                name: "Premium Catering".into(),
                pricing_mode: PricingMode::PerAttendee,
                amount: 4500.0,
            }],
            total: 9300.0,
            deposit: 2325.0,
        }
    }

    #[test]
    fn quote_lists_every_charge_then_totals() {
        let rendered = quote_lines(&quote(), &LocaleFormat::default()).join("\n");
        assert_snapshot!(rendered, @r"
        Venue hire (4 hrs): $4,800
        Premium Catering: $4,500
        Total: $9,300
        Deposit due now: $2,325
        Balance due: $6,975
        ");
    }

    #[test]
    fn fresh_wizard_status_shows_unset_fields() {
        let wizard = BookingWizard::new(&StaticCatalog::demo(), PricingPolicy::default());
        let rendered = wizard_status(&wizard).join("\n");
        assert_snapshot!(rendered, @r"
        Step 1 of 5: Select Venue [0%]
          Venue: (not set)
          Schedule: (not set)
          Services: none
          Contact: missing First name, Last name, Email, Phone, Event type
          Terms: not accepted
          Payment: (not set)
        ");
    }

    #[test]
    fn selected_venue_appears_in_status() {
        let mut wizard = BookingWizard::new(&StaticCatalog::demo(), PricingPolicy::default());
        wizard.select_venue("1").expect("select venue");
        let mut surface = RecordingSurface::new();
        wizard.advance(&mut surface);

        let status = wizard_status(&wizard);
        assert_eq!(status[0], "Step 2 of 5: Choose Date [25%]");
        assert_eq!(status[1], "  Venue: Crystal Grand Ballroom (Downtown, New York)");
    }

    #[test]
    fn stats_render_trend_direction() {
        let user = UserSession::new("1", "Admin User", "admin@example.com", UserRole::Admin);
        let dashboard = DashboardService::demo(&user);
        let lines = dashboard.stats().iter().map(stat_line).collect::<Vec<_>>();

        assert_snapshot!(lines[0], @"Total Revenue: $24,320 +12% (Total revenue this month)");
        assert_snapshot!(lines[3], @"Avg. Event Duration: 4.2 hrs -2% (Average event duration)");
    }

    #[test]
    fn client_event_lines_hide_cost_and_completion() {
        let user = UserSession::new("2", "Client User", "client@example.com", UserRole::Client);
        let dashboard = DashboardService::demo(&user);
        let line = event_line(&dashboard, &dashboard.events()[0], &LocaleFormat::default());

        assert_snapshot!(line, @"event-0 | Business Conference | November 15, 2023, 14:00 - 18:00 | Grand Ballroom | 100 guests | Upcoming [cancel]");
    }

    #[test]
    fn organizer_event_lines_show_cost() {
        let user = UserSession::new(
            "3",
            "Event Organizer",
            "organizer@example.com",
            UserRole::Organizer,
        );
        let dashboard = DashboardService::demo(&user);
        let line = event_line(&dashboard, &dashboard.events()[2], &LocaleFormat::default());

        assert_eq!(
            line,
            "event-2 | Corporate Dinner | November 22, 2023, 14:00 - 18:00 | Grand Ballroom | 140 guests | Completed | $3,500"
        );
    }

    #[test]
    fn venue_table_has_header_and_rows() {
        let catalog = StaticCatalog::demo();
        let venues = bhub_core::CatalogProvider::list_venues(&catalog);
        let refs = venues.iter().take(2).collect::<Vec<_>>();
        let table = venue_table(&refs, &LocaleFormat::default());

        assert_eq!(table.len(), 3);
        assert!(table[0].starts_with("ID  Name"));
        assert!(table[1].starts_with("1   Crystal Grand Ballroom"));
        assert!(table[1].contains("$1,200"));
        assert!(table[1].ends_with("4.9"));
    }
}
