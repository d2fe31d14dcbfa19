use std::fmt::Write;

use brlcheck_common::{ModeFlags, TableSet, Typeform};
use brlcheck_core::{yaml_events, Translator, TranslatorError};

///
/// Assert that for given input, the event source generates expected set of events
///
/// # Panics
///
///    Function panics if there is a difference between expected events string and one generated
///    from the input.
pub fn assert_eq_event(input: &str, events: &str) {
    let mut line = String::new();
    write_str_from_event(&mut line, input);
    assert_eq!(line, events, "Error in case: {input}");
}

/// Renders every event of `input` on its own line in yaml-test-suite
/// notation. A scanner failure ends the output with `ERR`.
pub fn write_str_from_event(line: &mut String, input: &str) {
    for ev in yaml_events(input) {
        match ev {
            Ok(ev) => {
                let _ = write!(line, "\n{}", ev.event);
            }
            Err(_) => {
                line.push_str("\nERR");
                break;
            }
        }
    }
}

/// Cells for `a` to `z`, as offsets from U+2800.
const LETTERS: [u8; 26] = [
    0x01, 0x03, 0x09, 0x19, 0x11, 0x0B, 0x1B, 0x13, 0x0A, 0x1A, // a-j
    0x05, 0x07, 0x0D, 0x1D, 0x15, 0x0F, 0x1F, 0x17, 0x0E, 0x1E, // k-t
    0x25, 0x27, 0x3A, 0x2D, 0x3D, 0x35, // u-z
];

/// Minimal uncontracted letter table, enough to drive the walker end to end
/// without a real engine.
///
/// Letters and spaces translate to Unicode braille (or dot numbers under
/// `dotsIO`); other characters pass through unchanged. A document without
/// any table is an engine error.
#[derive(Debug, Default)]
pub struct LetterTranslator {
    /// Number of translations performed.
    pub calls: usize,
}

impl LetterTranslator {
    pub fn new() -> Self {
        LetterTranslator::default()
    }

    #[must_use]
    pub fn translate(word: &str, mode: ModeFlags) -> String {
        let cells = word.chars().map(|c| match c.to_ascii_lowercase() {
            ' ' => Some(0),
            l @ 'a'..='z' => Some(LETTERS[l as usize - 'a' as usize]),
            _ => None,
        });
        if mode.contains(ModeFlags::DOTS_IO) {
            let dots: Vec<String> = cells
                .zip(word.chars())
                .map(|(cell, c)| cell.map_or_else(|| c.to_string(), dot_numbers))
                .collect();
            dots.join("-")
        } else {
            cells
                .zip(word.chars())
                .map(|(cell, c)| {
                    cell.and_then(|cell| char::from_u32(0x2800 + u32::from(cell)))
                        .unwrap_or(c)
                })
                .collect()
        }
    }
}

fn dot_numbers(cell: u8) -> String {
    if cell == 0 {
        return "0".to_owned();
    }
    (0u8..6)
        .filter(|&bit| cell & (1u8 << bit) != 0)
        .map(|bit| char::from(b'1' + bit))
        .collect()
}

impl Translator for LetterTranslator {
    fn check_translation(
        &mut self,
        tables: &TableSet,
        word: &str,
        _typeform: Option<&Typeform>,
        expected: &str,
        mode: ModeFlags,
    ) -> Result<bool, TranslatorError> {
        if tables.is_empty() {
            return Err(TranslatorError::Engine("no tables given".to_owned()));
        }
        self.calls += 1;
        Ok(LetterTranslator::translate(word, mode) != expected)
    }
}

/// Builds a document with `count` passing tests, alternating between plain
/// entries and entries carrying options.
#[must_use]
pub fn generate_document(count: usize) -> String {
    const WORDS: [&str; 4] = ["hello", "world", "braille", "table"];
    let mut doc = String::from(
        "tables: [en-us-g1.ctb, letters.ctb]\nflags: {testmode: forward}\ntests:\n",
    );
    for i in 0..count {
        let word = WORDS[i % WORDS.len()];
        let expected = LetterTranslator::translate(word, ModeFlags::EMPTY);
        if i % 2 == 0 {
            let _ = writeln!(doc, "  - [{word}, {expected}]");
        } else {
            let _ = writeln!(
                doc,
                "  - [{word}, {expected}, {{mode: [noContractions, ucBrl], typeform: '{}'}}]",
                "0".repeat(word.len())
            );
        }
    }
    doc
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_translate_to_unicode_braille() {
        assert_eq!(LetterTranslator::translate("hello", ModeFlags::EMPTY), "⠓⠑⠇⠇⠕");
        assert_eq!(LetterTranslator::translate("World", ModeFlags::EMPTY), "⠺⠕⠗⠇⠙");
        assert_eq!(LetterTranslator::translate("a b", ModeFlags::EMPTY), "⠁⠀⠃");
        assert_eq!(LetterTranslator::translate("a1", ModeFlags::EMPTY), "⠁1");
    }

    #[test]
    fn dots_io_writes_dot_numbers() {
        assert_eq!(LetterTranslator::translate("hi", ModeFlags::DOTS_IO), "125-24");
        assert_eq!(LetterTranslator::translate("z y", ModeFlags::DOTS_IO), "1356-0-13456");
    }

    #[test]
    fn generated_document_passes() {
        let doc = generate_document(10);
        let mut translator = LetterTranslator::new();
        let report = brlcheck_core::check_str(&doc, &mut translator).expect("report");
        assert_eq!(report.to_string(), "SUCCESS (10 tests 0, failures)");
        assert_eq!(translator.calls, 10);
    }
}
