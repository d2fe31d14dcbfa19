use std::io;
use std::path::PathBuf;

use brlcheck_core::CheckError;
use config::ConfigError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("cannot read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("cannot set up logging: {0}")]
    Logging(String),
    #[error(transparent)]
    Check(#[from] CheckError),
}

impl CliError {
    /// Document line the error points at, for errors raised while walking it.
    pub fn line(&self) -> Option<usize> {
        match self {
            CliError::Check(err) => Some(err.line()),
            _ => None,
        }
    }
}
