use tracing_subscriber::EnvFilter;

use crate::error::CliError;

const LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// Installs the stderr subscriber. `RUST_LOG` wins over everything else.
pub fn init(configured: &str, verbose: u8, quiet: bool) -> Result<(), CliError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(effective_level(configured, verbose, quiet))
            .map_err(|err| CliError::Logging(err.to_string()))?,
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init()
        .map_err(|err| CliError::Logging(err.to_string()))
}

/// Shifts the configured level by `-v`/`-q`. A configured value that is not
/// a plain level (e.g. `brlcheck_core=debug`) is used as is.
fn effective_level(configured: &str, verbose: u8, quiet: bool) -> String {
    if quiet {
        return LEVELS[0].to_owned();
    }
    match LEVELS
        .iter()
        .position(|level| level.eq_ignore_ascii_case(configured))
    {
        Some(index) => LEVELS[(index + usize::from(verbose)).min(LEVELS.len() - 1)].to_owned(),
        None if verbose > 0 => LEVELS[(2 + usize::from(verbose)).min(LEVELS.len() - 1)].to_owned(),
        None => configured.to_owned(),
    }
}
