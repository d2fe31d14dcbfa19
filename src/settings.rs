//! Configuration loading for the `brlcheck` binary.
//!
//! `defaults/brlcheck.default.toml` is embedded into the binary. A user file,
//! the environment and command-line overrides are layered on top through
//! [`Loader`] before deserializing into [`BrlcheckConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File, FileFormat, Value};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/brlcheck.default.toml");

#[derive(Debug, Clone, Deserialize)]
pub struct BrlcheckConfig {
    pub translator: TranslatorConfig,
    pub logging: LoggingConfig,
}

/// How to invoke the external translation engine.
#[derive(Debug, Clone, Deserialize)]
pub struct TranslatorConfig {
    pub program: String,
    pub args: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer `BRLCHECK_<SECTION>__<KEY>` environment variables, e.g.
    /// `BRLCHECK_TRANSLATOR__PROGRAM`.
    pub fn with_env(mut self) -> Self {
        let source = Environment::with_prefix("BRLCHECK")
            .prefix_separator("_")
            .separator("__");
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (used for CLI flags).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<Value>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    pub fn build(self) -> Result<BrlcheckConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_defaults() {
        let config = Loader::new().build().expect("defaults to deserialize");
        assert_eq!(config.translator.program, "lou_translate");
        assert_eq!(config.translator.args, ["--forward", "{tables}"]);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn file_and_overrides_layer_on_defaults() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .expect("temp file");
        writeln!(file, "[translator]\nargs = [\"-d\", \"{{tables}}\"]").expect("write config");

        let config = Loader::new()
            .with_file(file.path())
            .set_override("translator.program", "cat")
            .expect("override")
            .build()
            .expect("config");
        assert_eq!(config.translator.program, "cat");
        assert_eq!(config.translator.args, ["-d", "{tables}"]);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn missing_file_is_an_error() {
        let result = Loader::new().with_file("/nonexistent/brlcheck.toml").build();
        assert!(result.is_err());
    }
}
