use std::borrow::Cow;

use brlcheck_common::{Event, EventKind, MarkedEvent, Marker};

use crate::{CheckError, CheckResult, SourceError};

/// Single pass reader over an event stream.
///
/// Every call consumes exactly one event; there is no peeking and no way
/// back. Running out of events where one is required is an error.
pub struct EventCursor<'input> {
    events: Box<dyn Iterator<Item = Result<MarkedEvent<'input>, SourceError>> + 'input>,
    last_mark: Marker,
}

impl<'input> EventCursor<'input> {
    pub fn new<I>(events: I) -> Self
    where
        I: IntoIterator<Item = Result<MarkedEvent<'input>, SourceError>>,
        I::IntoIter: 'input,
    {
        EventCursor {
            events: Box::new(events.into_iter()),
            last_mark: Marker::default(),
        }
    }

    /// Builds a cursor over already parsed events. Mostly useful for driving
    /// a single reader in isolation.
    pub fn from_events(events: Vec<MarkedEvent<'input>>) -> Self {
        EventCursor::new(events.into_iter().map(Ok))
    }

    /// Mark of the most recently consumed event.
    #[must_use]
    pub fn last_mark(&self) -> Marker {
        self.last_mark
    }

    pub fn next_event(&mut self) -> CheckResult<MarkedEvent<'input>> {
        match self.events.next() {
            Some(Ok(event)) => {
                self.last_mark = event.mark;
                Ok(event)
            }
            Some(Err(err)) => Err(err.into()),
            None => Err(CheckError::EndOfStream {
                line: self.last_mark.line,
            }),
        }
    }

    /// Consumes the next event and checks it is of the `expected` kind.
    pub fn expect(&mut self, expected: EventKind) -> CheckResult<MarkedEvent<'input>> {
        let event = self.next_event()?;
        if event.kind() == expected {
            Ok(event)
        } else {
            Err(CheckError::unexpected(expected, &event))
        }
    }

    /// Consumes the next event, which must be a scalar, and returns its text.
    pub fn expect_scalar(&mut self) -> CheckResult<Cow<'input, str>> {
        let event = self.next_event()?;
        match event.event {
            Event::Scalar(value) => Ok(value),
            _ => Err(CheckError::unexpected(EventKind::Scalar, &event)),
        }
    }

    /// Like [`EventCursor::expect_scalar`], but reports a failure as
    /// "`what` expected".
    pub fn expect_named_scalar(&mut self, what: &'static str) -> CheckResult<Cow<'input, str>> {
        let event = self.next_event()?;
        match event.event {
            Event::Scalar(value) => Ok(value),
            _ => Err(CheckError::expected(what, &event)),
        }
    }

    /// Consumes a mapping key that must be exactly `key`.
    pub fn expect_key(&mut self, key: &str, what: &'static str) -> CheckResult<()> {
        let event = self.next_event()?;
        match &event.event {
            Event::Scalar(value) if value == key => Ok(()),
            _ => Err(CheckError::expected(what, &event)),
        }
    }
}
