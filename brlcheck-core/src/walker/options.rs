use brlcheck_common::{Event, EventKind, MarkedEvent, ModeFlags, TestOptions};
use tracing::debug;

use crate::{CheckError, CheckResult, EventCursor, Translator};

/// Keys accepted in a test's option mapping.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OptionKey {
    Xfail,
    Mode,
    Typeform,
    CursorPos,
    BrlCursorPos,
    Unsupported(String),
}

impl From<&str> for OptionKey {
    fn from(key: &str) -> Self {
        match key {
            "xfail" => OptionKey::Xfail,
            "mode" => OptionKey::Mode,
            "typeform" => OptionKey::Typeform,
            "cursorPos" => OptionKey::CursorPos,
            "brlCursorPos" => OptionKey::BrlCursorPos,
            other => OptionKey::Unsupported(other.to_owned()),
        }
    }
}

/// Spellings of `xfail` that mean "expected to fail". Case-sensitive;
/// everything else means false.
const TRUTHY: [&str; 4] = ["Y", "true", "Yes", "ON"];

#[must_use]
pub fn is_truthy(value: &str) -> bool {
    TRUTHY.contains(&value)
}

/// Reads the rest of an option mapping whose `MappingStart` the caller has
/// already consumed, up to and including the `MappingEnd`.
pub fn read_options<T>(cursor: &mut EventCursor<'_>, translator: &T) -> CheckResult<TestOptions>
where
    T: Translator + ?Sized,
{
    let mut options = TestOptions::default();
    loop {
        let event = cursor.next_event()?;
        let line = event.line();
        let key = match event.event {
            Event::MappingEnd => return Ok(options),
            Event::Scalar(key) => OptionKey::from(&*key),
            _ => return Err(CheckError::unexpected(EventKind::MappingEnd, &event)),
        };

        match key {
            OptionKey::Xfail => {
                options.expected_failure = is_truthy(&cursor.expect_scalar()?);
            }
            OptionKey::Mode => options.mode |= read_mode(cursor)?,
            OptionKey::Typeform => {
                let raw = cursor.expect_scalar()?;
                options.typeform = Some(translator.convert_typeform(&raw));
            }
            OptionKey::CursorPos | OptionKey::BrlCursorPos => {
                let value = cursor.expect_scalar()?;
                debug!(line, option = ?key, value = %value, "ignoring cursor option");
            }
            OptionKey::Unsupported(name) => {
                return Err(CheckError::UnsupportedOption { name, line });
            }
        }
    }
}

/// Reads `[<mode>, ...]` into a mask.
///
/// The first token that names no mode ends the list early; the event right
/// after it must close the sequence. An unknown token is therefore accepted
/// only in last position.
pub fn read_mode(cursor: &mut EventCursor<'_>) -> CheckResult<ModeFlags> {
    cursor.expect(EventKind::SequenceStart)?;

    let mut mode = ModeFlags::EMPTY;
    loop {
        let event = cursor.next_event()?;
        let Event::Scalar(token) = &event.event else {
            return close_mode_list(&event, mode);
        };
        match ModeFlags::from_name(token) {
            Some(flag) => mode |= flag,
            None => {
                debug!(line = event.line(), token = %token, "unknown mode ends the mode list");
                let next = cursor.next_event()?;
                return close_mode_list(&next, mode);
            }
        }
    }
}

fn close_mode_list(event: &MarkedEvent<'_>, mode: ModeFlags) -> CheckResult<ModeFlags> {
    if event.kind() == EventKind::SequenceEnd {
        Ok(mode)
    } else {
        Err(CheckError::unexpected(EventKind::SequenceEnd, event))
    }
}
