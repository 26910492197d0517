use bhub_core::{Credentials, Navigator, Registration, Route};
use bhub_domain::UserRole;

use crate::cli::commands::usage;
use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::formatters;
use crate::cli::io;
use crate::cli::registry::CommandEntry;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "login",
            "Sign in (demo: admin@, client@, organizer@example.com)",
            "login [email] [password]",
            cmd_login,
        ),
        CommandEntry::new(
            "register",
            "Create an account and sign in",
            "register [--role client|organizer]",
            cmd_register,
        ),
        CommandEntry::new("logout", "Sign out", "logout", cmd_logout),
        CommandEntry::new("whoami", "Show the signed-in user", "whoami", cmd_whoami),
    ]
}

/// Argument at `index`, or an answer to `prompt` when it was left out.
fn arg_or_prompt(
    context: &ShellContext,
    args: &[&str],
    index: usize,
    prompt: &str,
    secret: bool,
) -> Result<String, CommandError> {
    if let Some(value) = args.get(index) {
        return Ok(value.to_string());
    }
    if !context.can_prompt() {
        return Ok(String::new());
    }
    if secret {
        io::prompt_password(context.theme(), prompt)
    } else {
        io::prompt_text(context.theme(), prompt)
    }
}

fn cmd_login(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if args.len() > 2 {
        return Err(usage("login [email] [password]"));
    }
    if args.is_empty() && context.can_prompt() {
        if let Some(last) = &context.config.last_login_email {
            io::print_hint(format!("Last signed in as {last}."));
        }
    }
    let email = arg_or_prompt(context, args, 0, "Email", false)?;
    let password = arg_or_prompt(context, args, 1, "Password", true)?;

    let ShellContext {
        auth,
        session,
        surface,
        ..
    } = context;
    let user = auth.login(Credentials::new(email, password), session, surface)?;

    context.reset_dashboard();
    let mut config = context.config.clone();
    config.last_login_email = Some(user.email.clone());
    context.replace_config(config)?;
    Ok(())
}

fn parse_role(args: &[&str]) -> Result<UserRole, CommandError> {
    match args {
        [] => Ok(UserRole::Client),
        ["--role", role] => {
            let role = role
                .parse::<UserRole>()
                .map_err(CommandError::InvalidArguments)?;
            if UserRole::SELF_SERVICE.contains(&role) {
                Ok(role)
            } else {
                Err(CommandError::InvalidArguments(format!(
                    "`{role}` accounts cannot be self-registered"
                )))
            }
        }
        _ => Err(usage("register [--role client|organizer]")),
    }
}

fn cmd_register(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let role = parse_role(args)?;
    if !context.can_prompt() {
        return Err(CommandError::Message(
            "`register` needs an interactive terminal or scripted inputs.".into(),
        ));
    }
    let registration = Registration {
        name: io::prompt_text(context.theme(), "Full name")?,
        email: io::prompt_text(context.theme(), "Email")?,
        password: io::prompt_password(context.theme(), "Password")?,
        confirm_password: io::prompt_password(context.theme(), "Confirm password")?,
        role,
    };

    let ShellContext {
        auth,
        session,
        surface,
        ..
    } = context;
    auth.register(registration, session, surface)?;
    context.reset_dashboard();
    Ok(())
}

fn cmd_logout(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    if !context.session.is_authenticated() {
        io::print_info("Not signed in.");
        return Ok(());
    }
    context.session.sign_out()?;
    context.reset_dashboard();
    io::print_success("Signed out.");
    context.surface.navigate_to(Route::Home);
    Ok(())
}

fn cmd_whoami(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    match context.session.user() {
        Some(user) => io::print_info(formatters::user_line(user)),
        None => io::print_info("Not signed in."),
    }
    Ok(())
}
