use bhub_core::{
    BookingWizard, CoreError, Navigator, Notifier, Route, ScheduleForm, StepOutcome, WizardStep,
};
use bhub_domain::{time_slots, ContactUpdate, EventType, GuestRange};

use crate::cli::commands::{resolve_venue, usage};
use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::formatters;
use crate::cli::io;
use crate::cli::output;
use crate::cli::registry::CommandEntry;

const BOOK_USAGE: &str = "book <start [venue]|venue <id|name>|schedule <date> <time> <guests>|service <id>|detail <field> <value>|terms <yes|no>|pay <method>|next|back|confirm|quote|options|status|cancel>";

const DETAIL_FIELDS: &str = "first-name, last-name, email, phone, event-type, requests";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "book",
        "Walk through the five-step booking wizard",
        BOOK_USAGE,
        cmd_book,
    )]
}

fn cmd_book(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let Some((action, rest)) = args.split_first() else {
        return status(context);
    };
    match action.to_lowercase().as_str() {
        "start" => start(context, rest),
        "venue" => select_venue(context, rest),
        "schedule" => schedule(context, rest),
        "service" => toggle_service(context, rest),
        "detail" => detail(context, rest),
        "terms" => terms(context, rest),
        "pay" => pay(context, rest),
        "next" => next(context),
        "back" => back(context),
        "confirm" => confirm(context),
        "quote" => quote(context),
        "options" => options(),
        "status" => status(context),
        "cancel" => cancel(context),
        other => Err(CommandError::InvalidArguments(format!(
            "unknown booking action `{other}`"
        ))),
    }
}

fn wizard_mut(context: &mut ShellContext) -> Result<&mut BookingWizard, CommandError> {
    context.wizard.as_mut().ok_or(CommandError::NoActiveBooking)
}

fn start(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if context
        .wizard
        .as_ref()
        .is_some_and(|wizard| !wizard.step().is_terminal())
    {
        io::print_warning("Discarding the booking in progress.");
    }
    let mut wizard = BookingWizard::new(&context.catalog, context.pricing_policy());
    if !args.is_empty() {
        let id = resolve_venue(&wizard.catalog().venues, &args.join(" "))?
            .id
            .clone();
        wizard.select_venue(id)?;
    }
    context.surface.navigate_to(Route::Booking);
    output::lines(formatters::wizard_status(&wizard));
    context.wizard = Some(wizard);
    Ok(())
}

fn select_venue(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if args.is_empty() {
        return Err(usage("book venue <id|name>"));
    }
    let wizard = wizard_mut(context)?;
    let id = resolve_venue(&wizard.catalog().venues, &args.join(" "))?
        .id
        .clone();
    wizard.select_venue(id)?;
    if let Some(venue) = wizard.selected_venue() {
        io::print_success(format!("Selected {}.", venue.name));
    }
    Ok(())
}

fn schedule(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [date, time, guests] = args else {
        return Err(usage("book schedule <YYYY-MM-DD> <HH:MM> <guest range>"));
    };
    let ShellContext {
        wizard, surface, ..
    } = context;
    let wizard = wizard.as_mut().ok_or(CommandError::NoActiveBooking)?;
    if wizard.step() != WizardStep::ChooseSchedule {
        return Err(CoreError::InvalidStep {
            operation: "set_schedule",
            step: wizard.step(),
        }
        .into());
    }
    match ScheduleForm::new(*date, *time, *guests).validate() {
        Ok(details) => {
            wizard.set_schedule(details)?;
            if let Some(details) = wizard.schedule() {
                io::print_success(format!("Scheduled for {details}."));
            }
        }
        Err(failure) => surface.notify_error(&failure.message()),
    }
    Ok(())
}

fn toggle_service(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [id] = args else {
        return Err(usage("book service <id>"));
    };
    let wizard = wizard_mut(context)?;
    let selected = wizard.toggle_service(*id)?;
    let name = wizard
        .catalog()
        .service(&(*id).into())
        .map(|service| service.name.clone())
        .unwrap_or_else(|| id.to_string());
    if selected {
        io::print_success(format!("Added {name}."));
    } else {
        io::print_info(format!("Removed {name}."));
    }
    Ok(())
}

pub(crate) fn parse_contact_update(field: &str, value: &str) -> Result<ContactUpdate, CommandError> {
    let value = value.to_string();
    let update = match field.to_lowercase().as_str() {
        "first-name" | "first" => ContactUpdate::FirstName(value),
        "last-name" | "last" => ContactUpdate::LastName(value),
        "email" => ContactUpdate::Email(value),
        "phone" => ContactUpdate::Phone(value),
        "event-type" | "type" => {
            if value.trim().is_empty() {
                ContactUpdate::EventType(None)
            } else {
                let kind = value
                    .parse::<EventType>()
                    .map_err(|err| CommandError::InvalidArguments(err.to_string()))?;
                ContactUpdate::EventType(Some(kind))
            }
        }
        "requests" | "special-requests" => ContactUpdate::SpecialRequests(value),
        other => {
            return Err(CommandError::InvalidArguments(format!(
                "unknown field `{other}` (expected one of {DETAIL_FIELDS})"
            )))
        }
    };
    Ok(update)
}

fn detail(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let Some((field, value)) = args.split_first() else {
        return Err(usage("book detail <field> <value>"));
    };
    let update = parse_contact_update(field, &value.join(" "))?;
    let label = update.field().label();
    wizard_mut(context)?.update_contact(update)?;
    io::print_success(format!("{label} updated."));
    Ok(())
}

fn terms(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let accepted = match args.first().map(|value| value.to_lowercase()).as_deref() {
        Some("yes" | "y" | "accept") => true,
        Some("no" | "n" | "decline") => false,
        _ => return Err(usage("book terms <yes|no>")),
    };
    wizard_mut(context)?.update_contact(ContactUpdate::AcceptTerms(accepted))?;
    if accepted {
        io::print_success("Terms of service accepted.");
    } else {
        io::print_info("Terms of service declined.");
    }
    Ok(())
}

fn pay(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [method] = args else {
        return Err(usage("book pay <credit|paypal|bank>"));
    };
    let wizard = wizard_mut(context)?;
    wizard.select_payment_method(*method)?;
    if let Some(selected) = wizard.payment_method() {
        io::print_success(format!("Paying by {}.", selected.name));
    }
    Ok(())
}

fn next(context: &mut ShellContext) -> CommandResult {
    let ShellContext {
        wizard, surface, ..
    } = context;
    let wizard = wizard.as_mut().ok_or(CommandError::NoActiveBooking)?;
    let outcome = wizard.advance(surface);
    after_move(context, outcome)
}

fn back(context: &mut ShellContext) -> CommandResult {
    let ShellContext {
        wizard, surface, ..
    } = context;
    let wizard = wizard.as_mut().ok_or(CommandError::NoActiveBooking)?;
    let outcome = wizard.retreat(surface);
    after_move(context, outcome)
}

fn confirm(context: &mut ShellContext) -> CommandResult {
    let ShellContext {
        wizard, surface, ..
    } = context;
    let wizard = wizard.as_mut().ok_or(CommandError::NoActiveBooking)?;
    let outcome = wizard.confirm(surface)?;
    after_move(context, outcome)
}

/// Prints where the wizard landed and records a fresh confirmation.
fn after_move(context: &mut ShellContext, outcome: StepOutcome) -> CommandResult {
    let Some(wizard) = context.wizard.as_ref() else {
        return Err(CommandError::NoActiveBooking);
    };
    match outcome {
        StepOutcome::Moved {
            to: WizardStep::Confirmed,
            ..
        } => {
            let Some(confirmation) = wizard.confirmation().cloned() else {
                return Ok(());
            };
            output::lines(formatters::confirmation_lines(&confirmation, &context.locale()));
            context.record_confirmation(confirmation);
        }
        StepOutcome::Moved { .. } => output::lines(formatters::wizard_status(wizard)),
        StepOutcome::Unchanged if wizard.step().is_terminal() => {
            io::print_info("This booking is already confirmed. Use `book start` for another.");
        }
        StepOutcome::Unchanged => io::print_info("Already at the first step."),
        StepOutcome::Rejected(_) => {}
    }
    Ok(())
}

fn quote(context: &mut ShellContext) -> CommandResult {
    let wizard = context.wizard.as_ref().ok_or(CommandError::NoActiveBooking)?;
    match wizard.quote() {
        Some(quote) => {
            output::section("Quote");
            output::lines(formatters::quote_lines(&quote, &context.locale()));
        }
        None => io::print_info("Select a venue to see a quote."),
    }
    Ok(())
}

fn options() -> CommandResult {
    let slots = time_slots()
        .iter()
        .map(|slot| slot.format("%H:%M").to_string())
        .collect::<Vec<_>>();
    let ranges = GuestRange::ALL
        .iter()
        .map(|range| range.label())
        .collect::<Vec<_>>();
    let kinds = EventType::ALL
        .iter()
        .map(|kind| kind.key())
        .collect::<Vec<_>>();
    output::section("Booking options");
    println!("  Time slots: {}", slots.join(", "));
    println!("  Guest ranges: {}", ranges.join(", "));
    println!("  Event types: {}", kinds.join(", "));
    println!("  Detail fields: {DETAIL_FIELDS}");
    Ok(())
}

fn status(context: &mut ShellContext) -> CommandResult {
    let wizard = context.wizard.as_ref().ok_or(CommandError::NoActiveBooking)?;
    output::lines(formatters::wizard_status(wizard));
    if let Some(confirmation) = wizard.confirmation() {
        output::lines(formatters::confirmation_lines(confirmation, &context.locale()));
    }
    Ok(())
}

fn cancel(context: &mut ShellContext) -> CommandResult {
    let wizard = context.wizard.take().ok_or(CommandError::NoActiveBooking)?;
    wizard.exit(Route::Venues, &mut context.surface);
    io::print_info("Booking discarded.");
    Ok(())
}
