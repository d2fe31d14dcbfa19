//! Recursive-descent walk over the events of a test document.
//!
//! Each reader consumes exactly the events of its production and hands the
//! cursor back positioned after the production's closing event. The expected
//! document shape is
//!
//! ```text
//! +STR +DOC +MAP
//!   tables [...]
//!   flags {...}          (optional)
//!   tests [[word, expected, {options}], ...]
//! -MAP -DOC -STR
//! ```

mod flags;
mod options;
mod tables;
mod test_case;

pub use flags::{read_flags, Flag};
pub use options::{is_truthy, read_mode, read_options, OptionKey};
pub use tables::read_tables;
pub use test_case::{parse_test, read_test, read_tests};

use brlcheck_common::{Event, EventKind};
use tracing::info;

use crate::{decode, encoded_events, yaml_events, CheckError, CheckResult, EventCursor, RunReport, Translator};

/// Walks a whole document, running every test against `translator`.
///
/// Stops at the first grammar error; mismatching tests are only counted.
pub fn check_document<T>(cursor: &mut EventCursor<'_>, translator: &mut T) -> CheckResult<RunReport>
where
    T: Translator + ?Sized,
{
    let start = cursor.expect(EventKind::StreamStart)?;
    if let Event::StreamStart(encoding) = start.event {
        info!("Encoding {encoding}");
    }
    cursor.expect(EventKind::DocumentStart)?;
    cursor.expect(EventKind::MappingStart)?;

    let tables = read_tables(cursor)?;
    info!("Tables: {tables}");

    let key = cursor.expect_scalar()?;
    match &*key {
        "flags" => {
            read_flags(cursor)?;
            cursor.expect_key("tests", "tests")?;
        }
        "tests" => {}
        _ => {
            return Err(CheckError::Expected {
                what: "flags or tests",
                found: format!("{} {key:?}", EventKind::Scalar),
                line: cursor.last_mark().line,
            })
        }
    }

    let mut report = RunReport::default();
    read_tests(cursor, &tables, translator, &mut report)?;

    cursor.expect(EventKind::MappingEnd)?;
    cursor.expect(EventKind::DocumentEnd)?;
    cursor.expect(EventKind::StreamEnd)?;

    Ok(report)
}

/// Parses `input` as YAML and checks it.
pub fn check_str<T>(input: &str, translator: &mut T) -> CheckResult<RunReport>
where
    T: Translator + ?Sized,
{
    let mut cursor = EventCursor::new(yaml_events(input));
    check_document(&mut cursor, translator)
}

/// Decodes a raw document (UTF-8, or UTF-16 with a byte order mark) and
/// checks it.
pub fn check_bytes<T>(input: &[u8], translator: &mut T) -> CheckResult<RunReport>
where
    T: Translator + ?Sized,
{
    let (text, encoding) = decode(input)?;
    let mut cursor = EventCursor::new(encoded_events(&text, encoding));
    check_document(&mut cursor, translator)
}
