//! Interpreter for YAML braille translation test documents.
//!
//! A document names the translation tables to use and lists test cases as
//! `[word, expected braille, {options}]`. The document is walked one YAML
//! event at a time; each test is handed to a [`Translator`] and its outcome
//! is compared with the test's declared expectation.
//!
//! ```yaml
//! tables: [en-us-g1.ctb]
//! tests:
//!   - [hello, ⠓⠑⠇⠇⠕]
//!   - [world, ⠺⠕⠗⠇⠙, {xfail: true, mode: [noContractions]}]
//! ```

pub use brlcheck_common as common;

pub use cursor::EventCursor;
pub use error::{CheckError, CheckResult, SourceError, TranslatorError};
pub use report::{Outcome, RunReport};
pub use source::{decode, encoded_events, yaml_events};
pub use translator::{digits_to_typeform, Translator};
pub use walker::{check_bytes, check_document, check_str};

mod cursor;
mod error;
mod report;
mod source;
mod translator;
pub mod walker;
