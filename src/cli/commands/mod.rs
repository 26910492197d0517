use std::str::FromStr;

use bhub_core::{find_by_name, suggest_venue, CoreError};
use bhub_domain::Venue;

use crate::cli::core::CommandError;
use crate::cli::io;
use crate::cli::registry::{CommandEntry, CommandRegistry};

pub mod account;
pub mod booking;
pub mod config;
pub mod contact;
pub mod dashboard;
pub mod system;
pub mod venues;

pub(crate) fn register_all(registry: &mut CommandRegistry) {
    for entry in all_definitions() {
        registry.register(entry);
    }
}

fn all_definitions() -> Vec<CommandEntry> {
    let mut commands = Vec::new();
    commands.extend(venues::definitions());
    commands.extend(booking::definitions());
    commands.extend(account::definitions());
    commands.extend(dashboard::definitions());
    commands.extend(contact::definitions());
    commands.extend(config::definitions());
    commands.extend(system::definitions());
    commands
}

/// Finds a venue by id or exact name, hinting at the closest name otherwise.
pub(crate) fn resolve_venue<'a>(venues: &'a [Venue], needle: &str) -> Result<&'a Venue, CommandError> {
    let trimmed = needle.trim();
    if let Some(venue) = venues
        .iter()
        .find(|venue| venue.id.as_str() == trimmed)
        .or_else(|| find_by_name(venues, trimmed))
    {
        return Ok(venue);
    }
    if let Some(candidate) = suggest_venue(venues, trimmed) {
        io::print_info(format!(
            "Did you mean `{}` (id {})?",
            candidate.name, candidate.id
        ));
    }
    Err(CommandError::Core(CoreError::VenueNotFound(trimmed.into())))
}

/// Parses `min-max` into an inclusive pair.
pub(crate) fn parse_range<T>(raw: &str, what: &str) -> Result<(T, T), CommandError>
where
    T: FromStr + PartialOrd,
{
    let invalid = || CommandError::InvalidArguments(format!("{what} must look like `min-max`, got `{raw}`"));
    let (min, max) = raw.split_once('-').ok_or_else(invalid)?;
    let min = min.trim().parse::<T>().map_err(|_| invalid())?;
    let max = max.trim().parse::<T>().map_err(|_| invalid())?;
    if min > max {
        return Err(invalid());
    }
    Ok((min, max))
}

pub(crate) fn usage(text: &str) -> CommandError {
    CommandError::InvalidArguments(format!("usage: {text}"))
}
