use bhub_core::{Navigator, Route};
use bhub_domain::EventStatus;

use crate::cli::commands::usage;
use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::formatters;
use crate::cli::io;
use crate::cli::output;
use crate::cli::registry::CommandEntry;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "dashboard",
            "Show role-specific stats and events",
            "dashboard",
            cmd_dashboard,
        ),
        CommandEntry::new(
            "event",
            "Complete, cancel or delete a dashboard event",
            "event <complete|cancel|delete> <id>",
            cmd_event,
        ),
    ]
}

/// Sends signed-out users to the login page instead.
fn guard(context: &mut ShellContext) -> CommandResult {
    if context.session.is_authenticated() {
        return Ok(());
    }
    context.surface.navigate_to(Route::Login);
    Err(CommandError::NotSignedIn)
}

fn cmd_dashboard(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    guard(context)?;
    let locale = context.locale();
    let greeting = context
        .session
        .user()
        .map(|user| format!("Dashboard: {} ({})", user.name, user.role))
        .unwrap_or_else(|| "Dashboard".to_string());
    let dashboard = &*context.dashboard_mut()?;

    output::section(greeting);
    output::lines(dashboard.stats().iter().map(formatters::stat_line));
    output::section("Events");
    if dashboard.events().is_empty() {
        io::print_info("No events yet.");
    } else {
        output::lines(
            dashboard
                .events()
                .iter()
                .map(|event| formatters::event_line(dashboard, event, &locale)),
        );
    }
    Ok(())
}

fn cmd_event(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [action, id] = args else {
        return Err(usage("event <complete|cancel|delete> <id>"));
    };
    guard(context)?;
    let dashboard = context.dashboard_mut()?;
    match action.to_lowercase().as_str() {
        "complete" => {
            let event = dashboard.change_status(id, EventStatus::Completed)?;
            io::print_success(format!("`{}` marked as completed.", event.title));
        }
        "cancel" => {
            let event = dashboard.change_status(id, EventStatus::Cancelled)?;
            io::print_success(format!("`{}` cancelled.", event.title));
        }
        "delete" => {
            let removed = dashboard.delete(id)?;
            io::print_success(format!("`{}` deleted.", removed.title));
        }
        other => {
            return Err(CommandError::InvalidArguments(format!(
                "unknown event action `{other}`"
            )))
        }
    }
    Ok(())
}
