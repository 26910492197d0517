use bhub_core::{Navigator, Route, MESSAGE_SENT_BODY};
use bhub_domain::ContactMessage;

use crate::cli::commands::usage;
use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::io;
use crate::cli::registry::CommandEntry;

const CONTACT_USAGE: &str =
    "contact [--name <name>] [--email <email>] [--subject <subject>] [--message <text>]";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "contact",
        "Send a message to the BanquetHub team",
        CONTACT_USAGE,
        cmd_contact,
    )]
}

#[derive(Debug, Default, PartialEq, Eq)]
struct ContactArgs {
    name: Option<String>,
    email: Option<String>,
    subject: Option<String>,
    message: Option<String>,
}

fn parse_args(args: &[&str]) -> Result<ContactArgs, CommandError> {
    let mut parsed = ContactArgs::default();
    let mut iter = args.iter();
    while let Some(flag) = iter.next() {
        let value = iter.next().ok_or_else(|| usage(CONTACT_USAGE))?.to_string();
        match *flag {
            "--name" => parsed.name = Some(value),
            "--email" => parsed.email = Some(value),
            "--subject" => parsed.subject = Some(value),
            "--message" => parsed.message = Some(value),
            _ => return Err(usage(CONTACT_USAGE)),
        }
    }
    Ok(parsed)
}

fn field(
    context: &ShellContext,
    value: Option<String>,
    prompt: &str,
) -> Result<String, CommandError> {
    match value {
        Some(value) => Ok(value),
        None if context.can_prompt() => io::prompt_text(context.theme(), prompt),
        None => Ok(String::new()),
    }
}

fn cmd_contact(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let parsed = parse_args(args)?;
    context.surface.navigate_to(Route::Contact);

    let signed_in = context.session.user().cloned();
    let name = parsed
        .name
        .or_else(|| signed_in.as_ref().map(|user| user.name.clone()));
    let email = parsed
        .email
        .or_else(|| signed_in.as_ref().map(|user| user.email.clone()));

    let message = ContactMessage::new(
        field(context, name, "Your name")?,
        field(context, email, "Your email")?,
        field(context, parsed.subject, "Subject (optional)")?,
        field(context, parsed.message, "Message")?,
    );

    let ShellContext {
        contact, surface, ..
    } = context;
    contact.send(message, surface)?;
    io::print_info(MESSAGE_SENT_BODY);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_fill_the_message() {
        let parsed = parse_args(&["--name", "Ada", "--message", "Do you host galas?"]).expect("args");
        assert_eq!(parsed.name.as_deref(), Some("Ada"));
        assert_eq!(parsed.message.as_deref(), Some("Do you host galas?"));
        assert_eq!(parsed.email, None);
    }

    #[test]
    fn unknown_flag_is_rejected() {
        assert!(parse_args(&["--phone", "555"]).is_err());
        assert!(parse_args(&["--name"]).is_err());
    }
}
