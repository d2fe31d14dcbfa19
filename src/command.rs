use std::io::{ErrorKind, Write};
use std::process::{Command, Stdio};

use brlcheck_core::common::{ModeFlags, TableSet, Typeform};
use brlcheck_core::{Translator, TranslatorError};
use tracing::{debug, warn};

use crate::settings::TranslatorConfig;

/// Runs an external program, such as `lou_translate`, once per test.
///
/// The word goes to the program's stdin followed by a newline; its stdout,
/// minus trailing line breaks, is the translation.
#[derive(Debug, Clone)]
pub struct CommandTranslator {
    program: String,
    args: Vec<String>,
}

impl CommandTranslator {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        CommandTranslator {
            program: program.into(),
            args,
        }
    }

    pub fn from_config(config: &TranslatorConfig) -> Self {
        CommandTranslator::new(config.program.clone(), config.args.clone())
    }

    fn expand_args(
        &self,
        tables: &TableSet,
        mode: ModeFlags,
        typeform: Option<&Typeform>,
    ) -> Vec<String> {
        let tables = tables.descriptor();
        let mode = mode.to_string();
        let typeform = typeform.map(ToString::to_string).unwrap_or_default();
        self.args
            .iter()
            .map(|arg| {
                arg.replace("{tables}", &tables)
                    .replace("{mode}", &mode)
                    .replace("{typeform}", &typeform)
            })
            .collect()
    }

    /// Runs the engine on `word` and returns its output.
    pub fn translate(
        &self,
        tables: &TableSet,
        word: &str,
        typeform: Option<&Typeform>,
        mode: ModeFlags,
    ) -> Result<String, TranslatorError> {
        let args = self.expand_args(tables, mode, typeform);
        debug!(program = %self.program, ?args, "running translation engine");

        let mut child = Command::new(&self.program)
            .args(&args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()?;
        if let Some(mut stdin) = child.stdin.take() {
            // An engine that exits without reading is judged by its status.
            if let Err(err) = writeln!(stdin, "{word}") {
                if err.kind() != ErrorKind::BrokenPipe {
                    return Err(err.into());
                }
            }
        }
        let output = child.wait_with_output()?;

        if !output.status.success() {
            return Err(TranslatorError::Exit {
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_owned(),
            });
        }
        let stdout = String::from_utf8(output.stdout)
            .map_err(|err| TranslatorError::Engine(format!("output is not UTF-8: {err}")))?;
        Ok(stdout.trim_end_matches(['\n', '\r']).to_owned())
    }
}

impl Translator for CommandTranslator {
    fn check_translation(
        &mut self,
        tables: &TableSet,
        word: &str,
        typeform: Option<&Typeform>,
        expected: &str,
        mode: ModeFlags,
    ) -> Result<bool, TranslatorError> {
        let actual = self.translate(tables, word, typeform, mode)?;
        if actual == expected {
            return Ok(false);
        }
        warn!(word, expected, actual = %actual, "Braille Difference");
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn placeholders_are_substituted() {
        let translator = CommandTranslator::new(
            "engine",
            args(&["-t", "{tables}", "--mode={mode}", "{typeform}"]),
        );
        let tables: TableSet = ["a.ctb", "b.ctb"].into_iter().collect();
        let typeform = Typeform::new(vec![0, 1]);
        let expanded = translator.expand_args(&tables, ModeFlags::DOTS_IO, Some(&typeform));
        assert_eq!(expanded, ["-t", "a.ctb,b.ctb", "--mode=4", "01"]);

        let expanded = translator.expand_args(&tables, ModeFlags::EMPTY, None);
        assert_eq!(expanded[3], "");
    }

    #[cfg(unix)]
    #[test]
    fn cat_echoes_the_word() {
        let mut translator = CommandTranslator::new("cat", Vec::new());
        let tables = TableSet::new();
        let failed = translator
            .check_translation(&tables, "hello", None, "hello", ModeFlags::EMPTY)
            .expect("cat runs");
        assert!(!failed);
        let failed = translator
            .check_translation(&tables, "hello", None, "⠓⠑⠇⠇⠕", ModeFlags::EMPTY)
            .expect("cat runs");
        assert!(failed);
    }

    #[cfg(unix)]
    #[test]
    fn failing_engine_is_an_error() {
        let mut translator = CommandTranslator::new("false", Vec::new());
        let result =
            translator.check_translation(&TableSet::new(), "x", None, "x", ModeFlags::EMPTY);
        assert!(matches!(result, Err(TranslatorError::Exit { .. })));
    }

    #[test]
    fn missing_engine_is_an_error() {
        let mut translator = CommandTranslator::new("brlcheck-no-such-engine", Vec::new());
        let result =
            translator.check_translation(&TableSet::new(), "x", None, "x", ModeFlags::EMPTY);
        assert!(matches!(result, Err(TranslatorError::Io(_))));
    }
}
