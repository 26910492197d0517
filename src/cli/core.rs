//! Dispatch, error reporting and prompt rendering for the shell loop.

use std::io;

use bhub_config::ConfigError;
use bhub_core::CoreError;
use strsim::levenshtein;

use crate::cli::io as cli_io;
pub use crate::cli::shell_context::{CliMode, ShellContext};
use crate::errors::CliError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

pub type CommandResult = Result<(), CommandError>;

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("{0}")]
    InvalidArguments(String),
    #[error("{0}")]
    Message(String),
    #[error("No booking in progress.")]
    NoActiveBooking,
    #[error("Please log in to continue.")]
    NotSignedIn,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Core(#[from] CoreError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Dialoguer(#[from] dialoguer::Error),
    #[error("exit requested")]
    ExitRequested,
}

impl From<CommandError> for CliError {
    fn from(err: CommandError) -> Self {
        CliError::Command(err.to_string())
    }
}

impl ShellContext {
    pub(crate) fn dispatch(
        &mut self,
        command: &str,
        raw: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        if let Some(handler) = self.registry.handler(command) {
            tracing::debug!(command, args = args.len(), "dispatch");
            match handler(self, args) {
                Ok(()) => Ok(LoopControl::Continue),
                Err(CommandError::ExitRequested) => Ok(LoopControl::Exit),
                Err(err) => Err(err),
            }
        } else {
            self.suggest_command(raw);
            Ok(LoopControl::Continue)
        }
    }

    /// Tokenises and runs one input line. `#` lines are comments.
    pub(crate) fn process_line(&mut self, line: &str) -> Result<LoopControl, CommandError> {
        let tokens = match shell_words::split(line) {
            Ok(tokens) => tokens,
            Err(err) => {
                cli_io::print_warning(err);
                return Ok(LoopControl::Continue);
            }
        };
        let Some((raw, rest)) = tokens.split_first() else {
            return Ok(LoopControl::Continue);
        };
        if raw.starts_with('#') {
            return Ok(LoopControl::Continue);
        }
        let args: Vec<&str> = rest.iter().map(String::as_str).collect();

        let control = self.dispatch(&raw.to_lowercase(), raw, &args)?;
        if control == LoopControl::Exit {
            self.running = false;
        }
        Ok(control)
    }

    pub(crate) fn suggest_command(&self, input: &str) {
        cli_io::print_warning(format!(
            "Unknown command `{input}`. Type `help` to see available commands."
        ));

        let best = self
            .registry
            .names()
            .map(|name| (levenshtein(name, &input.to_lowercase()), name))
            .min_by_key(|(distance, _)| *distance);
        if let Some((distance, name)) = best {
            if distance <= 3 {
                cli_io::print_info(format!("Suggestion: `{name}`?"));
            }
        }
    }

    pub(crate) fn confirm_exit(&self) -> Result<bool, CliError> {
        if self.mode() == CliMode::Script {
            return Ok(true);
        }
        Ok(cli_io::confirm_action(self.theme(), "Exit shell?", true)?)
    }

    pub(crate) fn report_error(&self, err: CommandError) -> Result<(), CliError> {
        match err {
            CommandError::ExitRequested => {}
            // The surface already told the user.
            CommandError::Core(CoreError::Auth(_) | CoreError::Validation(_)) => {}
            CommandError::InvalidArguments(message) => {
                cli_io::print_error(message);
                cli_io::print_hint("Use `help <command>` for usage details.");
            }
            CommandError::NotSignedIn => {
                cli_io::print_error(CommandError::NotSignedIn);
                cli_io::print_hint("Try `login client@example.com client123`.");
            }
            CommandError::NoActiveBooking => {
                cli_io::print_error(CommandError::NoActiveBooking);
                cli_io::print_hint("Use `book start [venue]` to begin.");
            }
            other => cli_io::print_error(other),
        }
        Ok(())
    }

    /// `banquet-hub`, plus the signed-in role and the booking step when present.
    pub(crate) fn prompt(&self) -> String {
        let mut prompt = String::from("banquet-hub");
        if let Some(user) = self.session.user() {
            prompt.push_str(&format!(" ({})", user.role));
        }
        if let Some(wizard) = &self.wizard {
            prompt.push_str(&format!(" [book {}/5]", wizard.step().number()));
        }
        prompt.push_str("> ");
        prompt
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bhub_core::WizardStep;
    use tempfile::tempdir;

    fn context(home: &std::path::Path) -> ShellContext {
        ShellContext::with_home(CliMode::Script, home.to_path_buf()).expect("context")
    }

    #[test]
    fn unknown_commands_do_not_stop_the_loop() {
        let dir = tempdir().expect("tempdir");
        let mut shell = context(dir.path());

        let control = shell.process_line("venuse").expect("dispatch");
        assert_eq!(control, LoopControl::Continue);
    }

    #[test]
    fn exit_command_ends_the_loop() {
        let dir = tempdir().expect("tempdir");
        let mut shell = context(dir.path());

        assert_eq!(shell.process_line("exit").expect("exit"), LoopControl::Exit);
        assert!(!shell.running);
    }

    #[test]
    fn comments_and_blank_lines_are_skipped() {
        let dir = tempdir().expect("tempdir");
        let mut shell = context(dir.path());

        for line in ["", "   ", "# book start 2", "#exit"] {
            assert_eq!(shell.process_line(line).expect("skip"), LoopControl::Continue);
        }
        assert!(shell.running);
        assert!(shell.wizard.is_none());
    }

    #[test]
    fn quoted_arguments_reach_the_command() {
        let dir = tempdir().expect("tempdir");
        let mut shell = context(dir.path());

        shell
            .process_line(r#"book start "Crystal Grand Ballroom""#)
            .expect("start by name");
        assert_eq!(
            shell
                .wizard
                .as_ref()
                .and_then(|wizard| wizard.selected_venue())
                .map(|venue| venue.id.as_str()),
            Some("1")
        );
        assert!(shell.process_line("venue \"Crystal").is_ok());
    }

    #[test]
    fn prompt_tracks_booking_progress() {
        let dir = tempdir().expect("tempdir");
        let mut shell = context(dir.path());
        assert_eq!(shell.prompt(), "banquet-hub> ");

        shell.process_line("book start 2").expect("start");
        shell.process_line("book next").expect("next");
        assert_eq!(
            shell.wizard.as_ref().map(|wizard| wizard.step()),
            Some(WizardStep::ChooseSchedule)
        );
        assert_eq!(shell.prompt(), "banquet-hub [book 2/5]> ");
    }

    #[test]
    fn booking_commands_need_an_active_booking() {
        let dir = tempdir().expect("tempdir");
        let mut shell = context(dir.path());

        let err = shell.process_line("book next").expect_err("no booking");
        assert!(matches!(err, CommandError::NoActiveBooking));
    }

    #[test]
    fn dashboard_requires_sign_in() {
        let dir = tempdir().expect("tempdir");
        let mut shell = context(dir.path());

        let err = shell.process_line("event cancel event-0").expect_err("signed out");
        assert!(matches!(err, CommandError::NotSignedIn));
    }
}
