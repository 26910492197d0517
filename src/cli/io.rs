use std::fmt;

use dialoguer::{theme::ColorfulTheme, Confirm, Input, Password};

use crate::cli::core::CommandError;
use crate::cli::output;
use crate::cli::test_mode::{self, ScriptedInput};

pub fn print_info(message: impl fmt::Display) {
    output::info(message);
}

pub fn print_warning(message: impl fmt::Display) {
    output::warning(message);
}

pub fn print_error(message: impl fmt::Display) {
    output::error(message);
}

pub fn print_success(message: impl fmt::Display) {
    output::success(message);
}

pub fn print_hint(message: impl fmt::Display) {
    output::hint(message);
}

/// Pops a scripted answer, or `None` when prompts should hit the terminal.
fn scripted(prompt: &str) -> Result<Option<String>, CommandError> {
    match test_mode::next_input() {
        ScriptedInput::Disabled => Ok(None),
        ScriptedInput::Value(value) => {
            tracing::debug!(prompt, "scripted answer used");
            Ok(Some(value))
        }
        ScriptedInput::Exhausted => Err(CommandError::Message(format!(
            "No scripted input left for prompt `{prompt}`"
        ))),
    }
}

/// Prompt the user for a yes/no answer.
pub fn confirm_action(
    theme: &ColorfulTheme,
    prompt: &str,
    default: bool,
) -> Result<bool, CommandError> {
    if let Some(answer) = scripted(prompt)? {
        return Ok(matches!(
            answer.trim().to_ascii_lowercase().as_str(),
            "y" | "yes" | "true"
        ));
    }
    Confirm::with_theme(theme)
        .with_prompt(prompt)
        .default(default)
        .interact()
        .map_err(CommandError::from)
}

/// Prompt the user for free-form text; blank answers are allowed.
pub fn prompt_text(theme: &ColorfulTheme, prompt: &str) -> Result<String, CommandError> {
    if let Some(answer) = scripted(prompt)? {
        return Ok(answer);
    }
    Input::<String>::with_theme(theme)
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()
        .map_err(CommandError::from)
}

/// Prompt for a secret without echoing it.
pub fn prompt_password(theme: &ColorfulTheme, prompt: &str) -> Result<String, CommandError> {
    if let Some(answer) = scripted(prompt)? {
        return Ok(answer);
    }
    Password::with_theme(theme)
        .with_prompt(prompt)
        .allow_empty_password(true)
        .interact()
        .map_err(CommandError::from)
}
