use bhub_core::{locations, tags, CatalogProvider, Navigator, Route, VenueFilter};

use crate::cli::commands::{parse_range, resolve_venue, usage};
use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::formatters;
use crate::cli::io;
use crate::cli::output;
use crate::cli::registry::CommandEntry;

const VENUES_USAGE: &str =
    "venues [--search <text>] [--price <min-max>] [--capacity <min-max>] [--location <city>]... [--tag <tag>]...";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new("venues", "Browse and filter venues", VENUES_USAGE, cmd_venues),
        CommandEntry::new("venue", "Show one venue in detail", "venue <id|name>", cmd_venue),
        CommandEntry::new(
            "services",
            "List add-on services and payment methods",
            "services",
            cmd_services,
        ),
    ]
}

pub(crate) fn parse_filter(args: &[&str]) -> Result<VenueFilter, CommandError> {
    let mut filter = VenueFilter::new();
    let mut iter = args.iter();
    while let Some(flag) = iter.next() {
        let value = iter
            .next()
            .ok_or_else(|| CommandError::InvalidArguments(format!("`{flag}` needs a value")))?;
        filter = match *flag {
            "--search" | "-s" => filter.with_search(*value),
            "--price" => {
                let (min, max) = parse_range::<f64>(value, "price")?;
                filter.with_price(min, max)
            }
            "--capacity" => {
                let (min, max) = parse_range::<u32>(value, "capacity")?;
                filter.with_capacity(min, max)
            }
            "--location" => filter.with_location(*value),
            "--tag" => filter.with_tag(*value),
            other => return Err(CommandError::InvalidArguments(format!("unknown flag `{other}`"))),
        };
    }
    Ok(filter)
}

fn cmd_venues(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let filter = parse_filter(args)?;
    let venues = context.catalog.list_venues();
    let matched = filter.apply(&venues);

    output::section("Venues");
    if matched.is_empty() {
        io::print_info("No venues match the current filters.");
    } else {
        output::lines(formatters::venue_table(&matched, &context.locale()));
    }
    io::print_hint(format!("Showing {} of {} venues.", matched.len(), venues.len()));
    io::print_hint(format!("Locations: {}", locations(&venues).join(", ")));
    io::print_hint(format!("Tags: {}", tags(&venues).join(", ")));
    context.surface.navigate_to(Route::Venues);
    Ok(())
}

fn cmd_venue(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if args.is_empty() {
        return Err(usage("venue <id|name>"));
    }
    let venues = context.catalog.list_venues();
    let venue = resolve_venue(&venues, &args.join(" "))?;
    output::section(&venue.name);
    output::lines(formatters::venue_detail(venue, &context.locale()));
    io::print_hint(format!("Book it with `book start {}`.", venue.id));
    context.surface.navigate_to(Route::Venue(venue.id.clone()));
    Ok(())
}

fn cmd_services(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let locale = context.locale();
    output::section("Add-on services");
    output::lines(
        context
            .catalog
            .list_services()
            .iter()
            .map(|service| formatters::service_line(service, &locale)),
    );
    output::section("Payment methods");
    output::lines(
        context
            .catalog
            .list_payment_methods()
            .iter()
            .map(formatters::payment_method_line),
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bhub_core::StaticCatalog;

    #[test]
    fn flags_build_a_filter() {
        let filter = parse_filter(&["--price", "900-1500", "--tag", "Wedding", "--location", "New York"])
            .expect("filter");
        let venues = StaticCatalog::demo().list_venues();
        let names: Vec<_> = filter.apply(&venues).iter().map(|venue| venue.name.as_str()).collect();
        assert_eq!(names, vec!["Crystal Grand Ballroom"]);
    }

    #[test]
    fn dangling_flag_is_rejected() {
        assert!(matches!(
            parse_filter(&["--search"]),
            Err(CommandError::InvalidArguments(_))
        ));
        assert!(parse_filter(&["--colour", "red"]).is_err());
    }
}
