use anyhow::{anyhow, Result};
use clap::{Arg, ArgAction, Command};
use tracing_subscriber::EnvFilter;

pub const ARG_VERBOSITY: &str = "verbosity";

#[must_use]
pub fn with_args(command: Command) -> Command {
    command.arg(
        Arg::new(ARG_VERBOSITY)
            .short('v')
            .long("verbose")
            .help("Verbosity level: -v WARN, -vv INFO, -vvv DEBUG, -vvvv TRACE (default: ERROR)")
            .global(true)
            .action(ArgAction::Count),
    )
}

/// Map verbosity count to tracing level
pub const fn verbosity_level(verbosity: u8) -> tracing::Level {
    match verbosity {
        0 => tracing::Level::ERROR,
        1 => tracing::Level::WARN,
        2 => tracing::Level::INFO,
        3 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    }
}

/// Installs the global subscriber. ``RUST_LOG`` wins over the verbosity flag when set.
///
/// # Errors
/// Returns an error if a subscriber has already been installed.
pub fn init(verbosity: u8) -> Result<()> {
    let level = verbosity_level(verbosity);
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_str().to_lowercase()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .try_init()
        .map_err(|e| anyhow!("failed to initialize logging: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_maps_to_levels() {
        assert_eq!(verbosity_level(0), tracing::Level::ERROR);
        assert_eq!(verbosity_level(1), tracing::Level::WARN);
        assert_eq!(verbosity_level(3), tracing::Level::DEBUG);
        assert_eq!(verbosity_level(9), tracing::Level::TRACE);
    }

    #[test]
    fn verbosity_is_counted() {
        let matches = with_args(Command::new("test")).get_matches_from(vec!["test", "-vv"]);
        assert_eq!(matches.get_count(ARG_VERBOSITY), 2);
    }
}
