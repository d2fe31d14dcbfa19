pub mod case;
pub mod mode;

pub use case::{TableSet, TestCase, TestOptions, Typeform};
pub use mode::ModeFlags;

use std::borrow::Cow;
use std::fmt::{Display, Formatter};

/// Character encoding reported by the stream start event.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub enum Encoding {
    #[default]
    Utf8,
    Utf16Le,
    Utf16Be,
}

impl Display for Encoding {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Encoding::Utf8 => write!(f, "UTF-8"),
            Encoding::Utf16Le => write!(f, "UTF-16LE"),
            Encoding::Utf16Be => write!(f, "UTF-16BE"),
        }
    }
}

/// Position of an event in the source document.
#[derive(Default, Debug, Clone, Copy, Eq, PartialEq)]
pub struct Marker {
    /// Line of mark. One indexed.
    pub line: usize,
    /// Column of mark. Zero indexed.
    pub col: usize,
}

impl Marker {
    pub fn new(line: usize, col: usize) -> Self {
        Marker { line, col }
    }
}

/// Payload-free discriminant of an [`Event`], used when reporting what the
/// walker expected versus what it got.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub enum EventKind {
    StreamStart,
    StreamEnd,
    DocumentStart,
    DocumentEnd,
    Alias,
    Scalar,
    SequenceStart,
    SequenceEnd,
    MappingStart,
    MappingEnd,
}

impl Display for EventKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            EventKind::StreamStart => "STREAM_START",
            EventKind::StreamEnd => "STREAM_END",
            EventKind::DocumentStart => "DOCUMENT_START",
            EventKind::DocumentEnd => "DOCUMENT_END",
            EventKind::Alias => "ALIAS",
            EventKind::Scalar => "SCALAR",
            EventKind::SequenceStart => "SEQUENCE_START",
            EventKind::SequenceEnd => "SEQUENCE_END",
            EventKind::MappingStart => "MAPPING_START",
            EventKind::MappingEnd => "MAPPING_END",
        };
        f.write_str(name)
    }
}

/// A single parse event of the test document.
///
/// Only scalars carry text; anchors, tags and scalar styles are dropped
/// since the test schema never looks at them.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Event<'input> {
    StreamStart(Encoding),
    StreamEnd,
    DocumentStart,
    DocumentEnd,
    Alias,
    Scalar(Cow<'input, str>),
    SequenceStart,
    SequenceEnd,
    MappingStart,
    MappingEnd,
}

impl<'input> Event<'input> {
    #[must_use]
    pub fn kind(&self) -> EventKind {
        match self {
            Event::StreamStart(_) => EventKind::StreamStart,
            Event::StreamEnd => EventKind::StreamEnd,
            Event::DocumentStart => EventKind::DocumentStart,
            Event::DocumentEnd => EventKind::DocumentEnd,
            Event::Alias => EventKind::Alias,
            Event::Scalar(_) => EventKind::Scalar,
            Event::SequenceStart => EventKind::SequenceStart,
            Event::SequenceEnd => EventKind::SequenceEnd,
            Event::MappingStart => EventKind::MappingStart,
            Event::MappingEnd => EventKind::MappingEnd,
        }
    }

    pub fn scalar(value: impl Into<Cow<'input, str>>) -> Self {
        Event::Scalar(value.into())
    }
}

/// Renders events in the yaml-test-suite notation (`+SEQ`, `=VAL :x`, ...).
impl Display for Event<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Event::StreamStart(_) => write!(f, "+STR"),
            Event::StreamEnd => write!(f, "-STR"),
            Event::DocumentStart => write!(f, "+DOC"),
            Event::DocumentEnd => write!(f, "-DOC"),
            Event::Alias => write!(f, "=ALI"),
            Event::Scalar(value) => write!(f, "=VAL :{value}"),
            Event::SequenceStart => write!(f, "+SEQ"),
            Event::SequenceEnd => write!(f, "-SEQ"),
            Event::MappingStart => write!(f, "+MAP"),
            Event::MappingEnd => write!(f, "-MAP"),
        }
    }
}

/// An [`Event`] together with the place it started at.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct MarkedEvent<'input> {
    pub event: Event<'input>,
    pub mark: Marker,
}

impl<'input> MarkedEvent<'input> {
    pub fn new(event: Event<'input>, mark: Marker) -> Self {
        MarkedEvent { event, mark }
    }

    #[inline]
    #[must_use]
    pub fn kind(&self) -> EventKind {
        self.event.kind()
    }

    #[inline]
    #[must_use]
    pub fn line(&self) -> usize {
        self.mark.line
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_kind_matches_variant() {
        assert_eq!(Event::scalar("x").kind(), EventKind::Scalar);
        assert_eq!(
            Event::StreamStart(Encoding::Utf8).kind(),
            EventKind::StreamStart
        );
        assert_eq!(Event::MappingEnd.kind(), EventKind::MappingEnd);
    }

    #[test]
    fn events_render_in_suite_notation() {
        assert_eq!(Event::scalar("tables").to_string(), "=VAL :tables");
        assert_eq!(Event::SequenceStart.to_string(), "+SEQ");
        assert_eq!(Event::DocumentEnd.to_string(), "-DOC");
    }

    #[test]
    fn kind_names() {
        assert_eq!(EventKind::SequenceEnd.to_string(), "SEQUENCE_END");
        assert_eq!(Encoding::Utf8.to_string(), "UTF-8");
    }
}
