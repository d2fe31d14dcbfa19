use brlcheck_common::{Event, EventKind, TableSet};

use crate::{CheckError, CheckResult, EventCursor};

/// Reads `tables: [<table>, ...]` into a [`TableSet`].
pub fn read_tables(cursor: &mut EventCursor<'_>) -> CheckResult<TableSet> {
    cursor.expect_key("tables", "tables")?;
    cursor.expect(EventKind::SequenceStart)?;

    let mut tables = TableSet::new();
    loop {
        let event = cursor.next_event()?;
        match event.event {
            Event::SequenceEnd => return Ok(tables),
            Event::Scalar(name) if name.is_empty() => {
                return Err(CheckError::EmptyTable { line: event.mark.line })
            }
            Event::Scalar(name) => tables.push(name),
            _ => return Err(CheckError::unexpected(EventKind::Scalar, &event)),
        }
    }
}
