use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Check a YAML braille translation test document against a translation engine.
///
/// Exits with 0 if every test behaved as declared, 1 if any did not and 2 if
/// the document could not be checked at all.
#[derive(Debug, Parser)]
#[command(name = "brlcheck", version)]
pub struct Cli {
    /// The YAML test document
    pub file: PathBuf,

    /// Configuration file layered over the built-in defaults
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Translation engine program, overriding `translator.program`
    #[arg(long, value_name = "PROGRAM")]
    pub translator: Option<String>,

    /// Log level or filter directive, overriding `logging.level`
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Log more; repeat for more detail
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}
