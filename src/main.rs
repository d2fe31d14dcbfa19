mod cli;
mod command;
mod error;
mod logging;
mod settings;

use std::fs;
use std::process::ExitCode;

use brlcheck_core::{check_bytes, RunReport};
use clap::Parser;

use crate::cli::Cli;
use crate::command::CommandTranslator;
use crate::error::CliError;
use crate::settings::Loader;

/// Exit status for documents that could not be checked.
const FATAL: u8 = 2;

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(report) => {
            println!("{report}");
            ExitCode::from(report.exit_code())
        }
        Err(err) => {
            let file = cli.file.display();
            match err.line() {
                Some(line) => eprintln!("{file}:{line}: error: {err}"),
                None => eprintln!("{file}: error: {err}"),
            }
            ExitCode::from(FATAL)
        }
    }
}

fn run(cli: &Cli) -> Result<RunReport, CliError> {
    let mut loader = Loader::new();
    if let Some(path) = &cli.config {
        loader = loader.with_file(path);
    }
    loader = loader.with_env();
    if let Some(program) = &cli.translator {
        loader = loader.set_override("translator.program", program.as_str())?;
    }
    if let Some(level) = &cli.log_level {
        loader = loader.set_override("logging.level", level.as_str())?;
    }
    let config = loader.build()?;
    logging::init(&config.logging.level, cli.verbose, cli.quiet)?;

    let input = fs::read(&cli.file).map_err(|source| CliError::Read {
        path: cli.file.clone(),
        source,
    })?;
    let mut translator = CommandTranslator::from_config(&config.translator);
    Ok(check_bytes(&input, &mut translator)?)
}
