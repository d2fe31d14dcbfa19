use brlcheck_common::{Event, EventKind};
use tracing::info;

use crate::{CheckError, CheckResult, EventCursor};

/// A `name: value` entry of the document's `flags` block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Flag {
    pub name: String,
    pub value: String,
}

/// Reads the `flags` mapping. Flags are reported but never change how tests
/// run.
pub fn read_flags(cursor: &mut EventCursor<'_>) -> CheckResult<Vec<Flag>> {
    cursor.expect(EventKind::MappingStart)?;

    let mut flags = Vec::new();
    loop {
        let event = cursor.next_event()?;
        match event.event {
            Event::MappingEnd => return Ok(flags),
            Event::Scalar(name) => {
                let value = cursor.expect_scalar()?;
                info!(value = %value, "Flag {name}");
                flags.push(Flag {
                    name: name.into_owned(),
                    value: value.into_owned(),
                });
            }
            _ => return Err(CheckError::unexpected(EventKind::MappingEnd, &event)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{read_flags, Flag};
    use crate::{yaml_events, CheckError, EventCursor};
    use brlcheck_common::EventKind;

    fn flags(input: &str) -> Result<Vec<Flag>, CheckError> {
        let mut cursor = EventCursor::new(yaml_events(input));
        cursor.expect(EventKind::StreamStart)?;
        cursor.expect(EventKind::DocumentStart)?;
        read_flags(&mut cursor)
    }

    #[test]
    fn collects_flag_names_and_values() {
        let flags = flags("{testmode: forward, comment: none}").expect("flags");
        let names: Vec<_> = flags.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["testmode", "comment"]);
        assert_eq!(flags[0].value, "forward");
    }

    #[test]
    fn empty_block() {
        assert!(flags("{}").expect("flags").is_empty());
    }

    #[test]
    fn nested_value_is_rejected() {
        let err = flags("{testmode: [a]}").expect_err("nested value");
        assert!(matches!(
            err,
            CheckError::Unexpected {
                expected: EventKind::Scalar,
                actual: EventKind::SequenceStart,
                ..
            }
        ));
    }

    #[test]
    fn requires_mapping() {
        let err = flags("[testmode]").expect_err("not a mapping");
        assert!(matches!(
            err,
            CheckError::Unexpected {
                expected: EventKind::MappingStart,
                ..
            }
        ));
    }
}
