pub mod actions;
pub mod logging;
pub mod prompt;

use crate::api::DEFAULT_API_HOST;
use crate::reset::ResetLink;
use actions::Action;
use anyhow::{Context, Result};
use clap::{
    builder::styling::{AnsiColor, Effects, Styles},
    Arg, ArgMatches, ColorChoice, Command,
};
use secrecy::SecretString;

pub const CMD_CHECK_PASSWORD: &str = "check-password";
pub const CMD_RESET_PASSWORD: &str = "reset-password";
pub const CMD_LOGIN: &str = "login";

const ARG_PASSWORD: &str = "password";
const ARG_LINK: &str = "link";
const ARG_TOKEN: &str = "token";
const ARG_TENANT_DOMAIN: &str = "tenant-domain";
const ARG_EMAIL: &str = "email";
const ARG_HOST: &str = "host";
const ARG_USERNAME: &str = "username";

fn password_arg() -> Arg {
    Arg::new(ARG_PASSWORD)
        .long("password")
        .help("New password; prompted for when absent")
        .env("PENNYCTL_PASSWORD")
        .hide_env_values(true)
}

#[must_use]
pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    let command = Command::new("pennyctl")
        .about("Reset your password or log in to a Henny Penny tenant")
        .version(env!("CARGO_PKG_VERSION"))
        .color(ColorChoice::Auto)
        .styles(styles)
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new(CMD_CHECK_PASSWORD)
                .about("Show which password requirements are met and the resulting strength")
                .arg(
                    Arg::new(ARG_PASSWORD)
                        .help("Password to check; prompted for when absent")
                        .env("PENNYCTL_PASSWORD")
                        .hide_env_values(true),
                ),
        )
        .subcommand(
            Command::new(CMD_RESET_PASSWORD)
                .about("Reset your password using the link from your reset email")
                .arg(
                    Arg::new(ARG_LINK)
                        .long("link")
                        .help("The full reset link, carrying token and tenantDomain")
                        .env("PENNYCTL_RESET_LINK")
                        .conflicts_with_all([ARG_TOKEN, ARG_TENANT_DOMAIN]),
                )
                .arg(
                    Arg::new(ARG_TOKEN)
                        .long("token")
                        .help("One-time reset token")
                        .env("PENNYCTL_TOKEN")
                        .hide_env_values(true),
                )
                .arg(
                    Arg::new(ARG_TENANT_DOMAIN)
                        .long("tenant-domain")
                        .help("Base URL of your tenant, e.g. https://prod.hennypenny.com")
                        .env("PENNYCTL_TENANT_DOMAIN"),
                )
                .arg(
                    Arg::new(ARG_EMAIL)
                        .long("email")
                        .help("Account email; prompted for when absent")
                        .env("PENNYCTL_EMAIL"),
                )
                .arg(password_arg()),
        )
        .subcommand(
            Command::new(CMD_LOGIN)
                .about("Log in and show the tenant you belong to")
                .arg(
                    Arg::new(ARG_HOST)
                        .long("host")
                        .help("API host to log in against")
                        .env("PENNYCTL_HOST")
                        .default_value(DEFAULT_API_HOST),
                )
                .arg(
                    Arg::new(ARG_USERNAME)
                        .short('u')
                        .long("username")
                        .help("Username; prompted for when absent")
                        .env("PENNYCTL_USERNAME"),
                )
                .arg(password_arg().help("Password; prompted for when absent")),
        );

    logging::with_args(command)
}

fn secret(matches: &ArgMatches, id: &str) -> Option<SecretString> {
    matches
        .get_one::<String>(id)
        .cloned()
        .map(SecretString::from)
}

/// Map parsed arguments to the action to run.
///
/// # Errors
/// Returns an error if the reset link cannot be parsed.
pub fn dispatch(matches: &ArgMatches) -> Result<Action> {
    match matches.subcommand() {
        Some((CMD_CHECK_PASSWORD, sub)) => Ok(Action::CheckPassword {
            password: secret(sub, ARG_PASSWORD),
        }),
        Some((CMD_RESET_PASSWORD, sub)) => {
            let link = match sub.get_one::<String>(ARG_LINK) {
                Some(link) => ResetLink::parse(link).context("invalid reset link")?,
                None => ResetLink::new(
                    sub.get_one::<String>(ARG_TOKEN).cloned().unwrap_or_default(),
                    sub.get_one::<String>(ARG_TENANT_DOMAIN)
                        .cloned()
                        .unwrap_or_default(),
                ),
            };

            Ok(Action::ResetPassword {
                link,
                email: sub.get_one::<String>(ARG_EMAIL).cloned(),
                password: secret(sub, ARG_PASSWORD),
            })
        }
        Some((CMD_LOGIN, sub)) => Ok(Action::Login {
            host: sub
                .get_one::<String>(ARG_HOST)
                .cloned()
                .unwrap_or_else(|| DEFAULT_API_HOST.to_string()),
            username: sub.get_one::<String>(ARG_USERNAME).cloned(),
            password: secret(sub, ARG_PASSWORD),
        }),
        _ => anyhow::bail!("no command given"),
    }
}

/// Main entry point for the CLI - parses arguments, sets up logging, and returns the Action
///
/// # Errors
/// Returns an error if logging cannot be initialized or the arguments are inconsistent.
pub fn start() -> Result<Action> {
    let matches = new().get_matches();

    logging::init(matches.get_count(logging::ARG_VERBOSITY))?;

    dispatch(&matches)
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    fn action_from(args: &[&str]) -> Result<Action> {
        let matches = new().try_get_matches_from(args)?;
        dispatch(&matches)
    }

    #[test]
    fn test_new() {
        let command = new();
        assert_eq!(command.get_name(), "pennyctl");
        assert_eq!(
            command.get_version().map(ToString::to_string),
            Some(env!("CARGO_PKG_VERSION").to_string())
        );
    }

    #[test]
    fn reset_from_link() {
        let action = action_from(&[
            "pennyctl",
            "reset-password",
            "--link",
            "https://reset.hennylink.com/?token=t0k&tenantDomain=https://prod.hennypenny.com/",
            "--email",
            "cook@hennypenny.com",
        ])
        .unwrap();

        let Action::ResetPassword { link, email, .. } = action else {
            panic!("expected a reset action");
        };
        assert_eq!(link, ResetLink::new("t0k", "https://prod.hennypenny.com/"));
        assert_eq!(email.as_deref(), Some("cook@hennypenny.com"));
    }

    #[test]
    fn reset_from_parts() {
        let action = action_from(&[
            "pennyctl",
            "reset-password",
            "--token",
            "t0k",
            "--tenant-domain",
            "https://dev.hennypenny.com",
            "--password",
            "abcDEF1!",
        ])
        .unwrap();

        let Action::ResetPassword { link, password, .. } = action else {
            panic!("expected a reset action");
        };
        assert!(link.is_complete());
        assert_eq!(password.unwrap().expose_secret(), "abcDEF1!");
    }

    #[test]
    fn link_conflicts_with_parts() {
        let result = new().try_get_matches_from([
            "pennyctl",
            "reset-password",
            "--link",
            "https://reset.hennylink.com/",
            "--token",
            "t0k",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn malformed_link_is_rejected() {
        assert!(action_from(&["pennyctl", "reset-password", "--link", "nope"]).is_err());
    }

    #[test]
    fn login_defaults_to_fixed_host() {
        let action = action_from(&["pennyctl", "login", "-u", "cook"]).unwrap();

        let Action::Login { host, username, .. } = action else {
            panic!("expected a login action");
        };
        assert_eq!(host, DEFAULT_API_HOST);
        assert_eq!(username.as_deref(), Some("cook"));
    }

    #[test]
    fn verbosity_is_global() {
        let matches = new()
            .try_get_matches_from(["pennyctl", "check-password", "-vvv", "abc"])
            .unwrap();
        assert_eq!(matches.get_count(logging::ARG_VERBOSITY), 3);
    }
}
