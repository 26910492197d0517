use std::borrow::Cow;
use std::io::{self, BufRead, Lines, StdinLock};

use colored::Colorize;
use rustyline::{
    completion::{Completer, Pair},
    error::ReadlineError,
    highlight::Highlighter,
    hint::Hinter,
    history::DefaultHistory,
    validate::Validator,
    Cmd, Context as ReadlineContext, Editor, Helper, KeyEvent,
};

use crate::cli::core::{CliMode, ShellContext};
use crate::cli::output;
use crate::errors::CliError;

const SCRIPT_ENV: &str = "BANQUET_HUB_CLI_SCRIPT";

/// Second-word completions for commands that take an action.
const ACTIONS: &[(&str, &[&str])] = &[
    (
        "book",
        &[
            "start", "venue", "schedule", "service", "detail", "terms", "pay", "next", "back",
            "confirm", "quote", "options", "status", "cancel",
        ],
    ),
    ("event", &["complete", "cancel", "delete"]),
    ("config", &["show", "set", "reset"]),
];

pub fn run_cli() -> Result<(), CliError> {
    let mode = if std::env::var_os(SCRIPT_ENV).is_some() {
        CliMode::Script
    } else {
        CliMode::Interactive
    };

    let mut context = ShellContext::new(mode)?;
    tracing::info!(?mode, home = %context.home().display(), "shell started");

    let mut source = match mode {
        CliMode::Interactive => {
            output::section("BanquetHub");
            output::hint(
                "Type `venues` to browse, `book start` to reserve, `help` for everything else.",
            );
            LineSource::editor(&context)?
        }
        CliMode::Script => LineSource::stdin(),
    };
    drive(&mut context, &mut source)
}

/// What one read from the input produced.
enum Fetched {
    Line(String),
    Interrupted,
    Finished,
}

/// Where shell lines come from: a rustyline editor or piped stdin.
enum LineSource {
    Editor(Box<Editor<CommandHelper, DefaultHistory>>),
    Stdin(Lines<StdinLock<'static>>),
}

impl LineSource {
    fn editor(context: &ShellContext) -> Result<Self, CliError> {
        let mut editor = Editor::<CommandHelper, DefaultHistory>::new()?;
        editor.set_helper(Some(CommandHelper::new(context.command_names())));
        editor.bind_sequence(KeyEvent::from('?'), Cmd::Complete);
        Ok(Self::Editor(Box::new(editor)))
    }

    fn stdin() -> Self {
        Self::Stdin(io::stdin().lock().lines())
    }

    fn fetch(&mut self, prompt: &str) -> Result<Fetched, CliError> {
        match self {
            Self::Editor(editor) => match editor.readline(prompt) {
                Ok(line) => {
                    if !line.trim().is_empty() {
                        editor.add_history_entry(line.trim()).ok();
                    }
                    Ok(Fetched::Line(line))
                }
                Err(ReadlineError::Interrupted) => Ok(Fetched::Interrupted),
                Err(ReadlineError::Eof) => {
                    output::info("Exiting shell.");
                    Ok(Fetched::Finished)
                }
                Err(err) => Err(err.into()),
            },
            Self::Stdin(lines) => match lines.next() {
                Some(line) => Ok(Fetched::Line(line?)),
                None => Ok(Fetched::Finished),
            },
        }
    }
}

fn drive(context: &mut ShellContext, source: &mut LineSource) -> Result<(), CliError> {
    while context.running {
        match source.fetch(&context.prompt())? {
            Fetched::Line(line) => {
                if let Err(err) = context.process_line(&line) {
                    context.report_error(err)?;
                }
            }
            Fetched::Interrupted => {
                if context.confirm_exit()? {
                    break;
                }
            }
            Fetched::Finished => break,
        }
    }
    Ok(())
}

/// Completes command names, then the action word of `book`, `event` and `config`.
struct CommandHelper {
    commands: Vec<&'static str>,
}

impl CommandHelper {
    fn new(mut commands: Vec<&'static str>) -> Self {
        commands.sort_unstable();
        commands.dedup();
        Self { commands }
    }

    /// Candidates for the word ending at the cursor, with the byte offset it starts at.
    fn candidates(&self, prefix: &str) -> (usize, Vec<&'static str>) {
        let start = prefix
            .rfind(char::is_whitespace)
            .map(|idx| idx + 1)
            .unwrap_or(0);
        let needle = prefix[start..].to_lowercase();
        let earlier: Vec<&str> = prefix[..start].split_whitespace().collect();

        let pool: &[&'static str] = match earlier.as_slice() {
            [] => &self.commands,
            [command] => ACTIONS
                .iter()
                .find(|(name, _)| command.eq_ignore_ascii_case(name))
                .map(|(_, actions)| *actions)
                .unwrap_or(&[]),
            _ => &[],
        };
        let matches = pool
            .iter()
            .copied()
            .filter(|word| word.starts_with(&needle))
            .collect();
        (start, matches)
    }
}

impl Helper for CommandHelper {}

impl Completer for CommandHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &ReadlineContext<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let (start, matches) = self.candidates(&line[..pos]);
        let pairs = matches
            .into_iter()
            .map(|word| Pair {
                display: word.to_string(),
                replacement: word.to_string(),
            })
            .collect();
        Ok((start, pairs))
    }
}

impl Hinter for CommandHelper {
    type Hint = String;

    /// Greyed-out rest of the word when exactly one candidate remains.
    fn hint(&self, line: &str, pos: usize, _ctx: &ReadlineContext<'_>) -> Option<String> {
        if pos < line.len() || line.ends_with(char::is_whitespace) {
            return None;
        }
        let (start, matches) = self.candidates(line);
        match matches.as_slice() {
            [only] => only.get(pos - start..).filter(|rest| !rest.is_empty()).map(str::to_string),
            _ => None,
        }
    }
}

impl Highlighter for CommandHelper {
    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Cow::Owned(hint.dimmed().to_string())
    }
}

impl Validator for CommandHelper {}

#[cfg(test)]
mod tests {
    use super::*;

    fn helper() -> CommandHelper {
        CommandHelper::new(vec!["venues", "venue", "book", "dashboard", "book"])
    }

    #[test]
    fn first_word_completes_command_names() {
        let (start, matches) = helper().candidates("ven");
        assert_eq!(start, 0);
        assert_eq!(matches, vec!["venue", "venues"]);
    }

    #[test]
    fn second_word_completes_actions() {
        let (start, matches) = helper().candidates("book c");
        assert_eq!(start, 5);
        assert_eq!(matches, vec!["confirm", "cancel"]);

        let (_, matches) = helper().candidates("EVENT d");
        assert_eq!(matches, vec!["delete"]);
    }

    #[test]
    fn arguments_past_the_action_are_not_completed() {
        assert!(helper().candidates("book venue Cry").1.is_empty());
        assert!(helper().candidates("venue Cry").1.is_empty());
    }
}
