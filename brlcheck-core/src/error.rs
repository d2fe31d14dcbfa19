use brlcheck_common::{Event, EventKind, MarkedEvent, Marker};
use thiserror::Error;

/// A specialized `Result` type where the error is hard-wired to [`CheckError`].
pub type CheckResult<T> = Result<T, CheckError>;

/// Failure reported by the YAML scanner while producing events.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{info}")]
pub struct SourceError {
    pub mark: Marker,
    pub info: String,
}

impl SourceError {
    pub fn new(mark: Marker, info: impl Into<String>) -> Self {
        SourceError {
            mark,
            info: info.into(),
        }
    }
}

/// Failure of the translation engine itself, as opposed to a translation
/// that merely differs from the expected output.
#[derive(Debug, Error)]
pub enum TranslatorError {
    #[error("cannot run translation engine: {0}")]
    Io(#[from] std::io::Error),
    #[error("translation engine exited with {status}: {stderr}")]
    Exit { status: String, stderr: String },
    #[error("translation engine error: {0}")]
    Engine(String),
}

/// Fatal error of a document check. Every variant knows the line it was
/// raised at.
#[derive(Debug, Error)]
pub enum CheckError {
    #[error("expected {expected} (actual {actual})")]
    Unexpected {
        expected: EventKind,
        actual: EventKind,
        line: usize,
    },
    #[error("{what} expected (actual {found})")]
    Expected {
        what: &'static str,
        found: String,
        line: usize,
    },
    #[error("Unexpected event {actual}")]
    UnexpectedEvent { actual: EventKind, line: usize },
    #[error("Unsupported option {name}")]
    UnsupportedOption { name: String, line: usize },
    #[error("empty table name")]
    EmptyTable { line: usize },
    #[error("Error in YAML: {source}")]
    Source {
        #[from]
        source: SourceError,
    },
    #[error("event stream ended early")]
    EndOfStream { line: usize },
    #[error("checking {word:?} failed: {source}")]
    Translation {
        word: String,
        line: usize,
        source: TranslatorError,
    },
}

impl CheckError {
    pub(crate) fn unexpected(expected: EventKind, actual: &MarkedEvent) -> Self {
        CheckError::Unexpected {
            expected,
            actual: actual.kind(),
            line: actual.line(),
        }
    }

    pub(crate) fn expected(what: &'static str, actual: &MarkedEvent) -> Self {
        let found = match &actual.event {
            Event::Scalar(value) => format!("{} {value:?}", EventKind::Scalar),
            other => other.kind().to_string(),
        };
        CheckError::Expected {
            what,
            found,
            line: actual.line(),
        }
    }

    pub(crate) fn unexpected_event(actual: &MarkedEvent) -> Self {
        CheckError::UnexpectedEvent {
            actual: actual.kind(),
            line: actual.line(),
        }
    }

    /// Source line the error was raised at. One indexed; `0` if the stream
    /// failed before yielding anything.
    #[must_use]
    pub fn line(&self) -> usize {
        match self {
            CheckError::Unexpected { line, .. }
            | CheckError::Expected { line, .. }
            | CheckError::UnexpectedEvent { line, .. }
            | CheckError::UnsupportedOption { line, .. }
            | CheckError::EmptyTable { line }
            | CheckError::EndOfStream { line }
            | CheckError::Translation { line, .. } => *line,
            CheckError::Source { source } => source.mark.line,
        }
    }
}
