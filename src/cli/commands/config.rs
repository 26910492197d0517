use bhub_config::Config;

use crate::cli::commands::usage;
use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::io;
use crate::cli::output;
use crate::cli::registry::CommandEntry;

const CONFIG_USAGE: &str = "config [show|set <key> <value>|reset]";

const KEYS: &str = "locale, currency, color, pricing.duration_hours, pricing.attendee_estimate, pricing.deposit_rate, latency.login_ms, latency.contact_ms";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "config",
        "View and change preferences",
        CONFIG_USAGE,
        cmd_config,
    )]
}

fn cmd_config(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args {
        [] | ["show"] => show(context),
        ["set", key, value @ ..] if !value.is_empty() => {
            let mut config = context.config.clone();
            apply_setting(&mut config, key, &value.join(" "))?;
            context.replace_config(config)?;
            io::print_success(format!("`{key}` updated."));
            Ok(())
        }
        ["reset"] => {
            context.replace_config(Config::default())?;
            io::print_success("Preferences reset to defaults.");
            Ok(())
        }
        _ => Err(usage(CONFIG_USAGE)),
    }
}

fn show(context: &mut ShellContext) -> CommandResult {
    let config = &context.config;
    output::section("Configuration");
    let rows = [
        ("locale", config.locale.clone()),
        ("currency", config.currency.clone()),
        ("color", config.ui_color_enabled.to_string()),
        ("pricing.duration_hours", config.pricing.duration_hours.to_string()),
        ("pricing.attendee_estimate", config.pricing.attendee_estimate.to_string()),
        ("pricing.deposit_rate", config.pricing.deposit_rate.to_string()),
        ("latency.login_ms", config.latency.login_ms.to_string()),
        ("latency.contact_ms", config.latency.contact_ms.to_string()),
        (
            "last_login_email",
            config.last_login_email.clone().unwrap_or_else(|| "-".into()),
        ),
        (
            "session_dir",
            config
                .resolve_session_dir(context.home())
                .display()
                .to_string(),
        ),
    ];
    for (key, value) in rows {
        println!("  {key:<26} {value}");
    }
    io::print_hint(format!(
        "Stored at {}",
        context.config_manager.config_path().display()
    ));
    Ok(())
}

/// Writes `value` into the setting named `key`; ranges are checked on save.
pub(crate) fn apply_setting(config: &mut Config, key: &str, value: &str) -> CommandResult {
    let value = value.trim();
    match key {
        "locale" => config.locale = value.to_string(),
        "currency" => config.currency = value.to_uppercase(),
        "color" => config.ui_color_enabled = parse(key, value)?,
        "pricing.duration_hours" => config.pricing.duration_hours = parse(key, value)?,
        "pricing.attendee_estimate" => config.pricing.attendee_estimate = parse(key, value)?,
        "pricing.deposit_rate" => config.pricing.deposit_rate = parse(key, value)?,
        "latency.login_ms" => config.latency.login_ms = parse(key, value)?,
        "latency.contact_ms" => config.latency.contact_ms = parse(key, value)?,
        other => {
            return Err(CommandError::InvalidArguments(format!(
                "unknown key `{other}` (expected one of {KEYS})"
            )))
        }
    }
    Ok(())
}

fn parse<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, CommandError> {
    value
        .parse::<T>()
        .map_err(|_| CommandError::InvalidArguments(format!("`{value}` is not valid for `{key}`")))
}
