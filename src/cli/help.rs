use crate::cli::output;
use crate::cli::registry::{CommandEntry, CommandRegistry};

pub fn print_overview(registry: &CommandRegistry) {
    output::section("Available commands");
    let width = registry
        .names()
        .map(str::len)
        .max()
        .unwrap_or_default();
    for entry in registry.list() {
        println!("  {:<width$}  {}", entry.name, entry.description);
    }
    output::hint("Use `help <command>` for details.");
}

pub fn print_command(entry: &CommandEntry) {
    output::section(format!("Help: {}", entry.name));
    println!("  description  {}", entry.description);
    println!("  usage        {}", entry.usage);
}
