use brlcheck_common::{Event, EventKind, TableSet, TestCase, TestOptions};
use tracing::{debug, warn};

use super::options::read_options;
use crate::{CheckError, CheckResult, EventCursor, Outcome, RunReport, Translator};

/// Reads the `tests` list and runs every entry in it.
pub fn read_tests<T>(
    cursor: &mut EventCursor<'_>,
    tables: &TableSet,
    translator: &mut T,
    report: &mut RunReport,
) -> CheckResult<()>
where
    T: Translator + ?Sized,
{
    cursor.expect(EventKind::SequenceStart)?;
    loop {
        let event = cursor.next_event()?;
        match event.kind() {
            EventKind::SequenceEnd => return Ok(()),
            EventKind::SequenceStart => {
                let outcome = read_test(cursor, tables, translator)?;
                report.record(outcome);
            }
            _ => return Err(CheckError::unexpected_event(&event)),
        }
    }
}

/// Reads one `[word, expected, {options}]` entry, whose `SequenceStart` was
/// already consumed, and checks it against the translator.
pub fn read_test<T>(
    cursor: &mut EventCursor<'_>,
    tables: &TableSet,
    translator: &mut T,
) -> CheckResult<Outcome>
where
    T: Translator + ?Sized,
{
    let line = cursor.last_mark().line;
    let case = parse_test(cursor, &*translator)?;
    run_test(&case, line, tables, translator)
}

/// Parses one test entry without running it.
pub fn parse_test<T>(cursor: &mut EventCursor<'_>, translator: &T) -> CheckResult<TestCase>
where
    T: Translator + ?Sized,
{
    let word = cursor.expect_named_scalar("Word")?.into_owned();
    let expected = cursor.expect_named_scalar("Translation")?.into_owned();

    let event = cursor.next_event()?;
    let options = match event.event {
        Event::SequenceEnd => TestOptions::default(),
        Event::MappingStart => {
            let options = read_options(cursor, translator)?;
            cursor.expect(EventKind::SequenceEnd)?;
            options
        }
        _ => return Err(CheckError::unexpected_event(&event)),
    };

    Ok(TestCase {
        word,
        expected,
        options,
    })
}

fn run_test<T>(
    case: &TestCase,
    line: usize,
    tables: &TableSet,
    translator: &mut T,
) -> CheckResult<Outcome>
where
    T: Translator + ?Sized,
{
    let options = &case.options;
    debug!(line, word = %case.word, mode = %options.mode, "checking translation");

    let failed = translator
        .check_translation(
            tables,
            &case.word,
            options.typeform.as_ref(),
            &case.expected,
            options.mode,
        )
        .map_err(|source| CheckError::Translation {
            word: case.word.clone(),
            line,
            source,
        })?;

    let outcome = Outcome::new(failed, options.expected_failure);
    match outcome {
        Outcome::Failed => warn!(
            line,
            word = %case.word,
            expected = %case.expected,
            "translation differs from expected output"
        ),
        Outcome::PassedUnexpectedly => warn!(
            line,
            word = %case.word,
            "failure expected but translation matched"
        ),
        Outcome::Passed | Outcome::FailedAsExpected => {}
    }
    Ok(outcome)
}
