use brlcheck_common::{ModeFlags, TableSet, Typeform};

use crate::TranslatorError;

/// The braille translation engine a document is checked against.
pub trait Translator {
    /// Translates `word` with `tables` and compares the result to `expected`.
    ///
    /// Returns `Ok(true)` if the translation *differs* from `expected`.
    /// An `Err` means the engine could not produce a translation at all and
    /// aborts the whole check.
    fn check_translation(
        &mut self,
        tables: &TableSet,
        word: &str,
        typeform: Option<&Typeform>,
        expected: &str,
        mode: ModeFlags,
    ) -> Result<bool, TranslatorError>;

    /// Turns the `typeform` option of a test into emphasis codes.
    fn convert_typeform(&self, raw: &str) -> Typeform {
        digits_to_typeform(raw)
    }
}

impl<T: Translator + ?Sized> Translator for &mut T {
    fn check_translation(
        &mut self,
        tables: &TableSet,
        word: &str,
        typeform: Option<&Typeform>,
        expected: &str,
        mode: ModeFlags,
    ) -> Result<bool, TranslatorError> {
        (**self).check_translation(tables, word, typeform, expected, mode)
    }

    fn convert_typeform(&self, raw: &str) -> Typeform {
        (**self).convert_typeform(raw)
    }
}

/// One code per character: decimal digits map to their value, anything else
/// to plain text (`0`).
#[must_use]
pub fn digits_to_typeform(raw: &str) -> Typeform {
    let codes = raw
        .chars()
        .map(|c| c.to_digit(10).map_or(0, |d| d as u16))
        .collect();
    Typeform::new(codes)
}
