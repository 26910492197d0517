//! Scripted answers for interactive prompts.
//!
//! When `BANQUET_HUB_TEST_INPUTS` is set, prompts pop answers from a
//! `|`-separated queue instead of reading the terminal. `<BLANK>` stands for
//! an empty answer.

use once_cell::sync::Lazy;
use std::{collections::VecDeque, env, sync::Mutex};

const INPUTS_ENV: &str = "BANQUET_HUB_TEST_INPUTS";

struct InputQueue {
    enabled: bool,
    inputs: VecDeque<String>,
}

impl InputQueue {
    fn from_env() -> Self {
        match env::var(INPUTS_ENV) {
            Ok(raw) => Self {
                enabled: true,
                inputs: parse_inputs(&raw),
            },
            Err(_) => Self {
                enabled: false,
                inputs: VecDeque::new(),
            },
        }
    }
}

static TEXT_INPUTS: Lazy<Mutex<InputQueue>> = Lazy::new(|| Mutex::new(InputQueue::from_env()));

/// Outcome of asking the queue for the next answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptedInput {
    /// Scripted answers are off; read from the terminal.
    Disabled,
    Value(String),
    Exhausted,
}

pub fn is_enabled() -> bool {
    TEXT_INPUTS
        .lock()
        .map(|guard| guard.enabled)
        .unwrap_or(false)
}

pub fn next_input() -> ScriptedInput {
    let Ok(mut guard) = TEXT_INPUTS.lock() else {
        return ScriptedInput::Exhausted;
    };
    if !guard.enabled {
        return ScriptedInput::Disabled;
    }
    match guard.inputs.pop_front() {
        Some(value) => ScriptedInput::Value(value),
        None => ScriptedInput::Exhausted,
    }
}

#[cfg(test)]
pub fn install_inputs(inputs: Vec<&str>) {
    if let Ok(mut guard) = TEXT_INPUTS.lock() {
        guard.enabled = true;
        guard.inputs = inputs.into_iter().map(str::to_string).collect();
    }
}

#[cfg(test)]
pub fn reset_inputs() {
    if let Ok(mut guard) = TEXT_INPUTS.lock() {
        guard.enabled = false;
        guard.inputs.clear();
    }
}

fn parse_inputs(raw: &str) -> VecDeque<String> {
    raw.split('|')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(|segment| match segment.to_ascii_uppercase().as_str() {
            "<BLANK>" | "<EMPTY>" => String::new(),
            _ => segment.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_pipe_separated_answers() {
        let parsed = parse_inputs("Ada | ada@example.com||<BLANK>|secret");
        assert_eq!(
            parsed,
            VecDeque::from(vec![
                "Ada".to_string(),
                "ada@example.com".to_string(),
                String::new(),
                "secret".to_string(),
            ])
        );
    }
}
