use std::fmt::{Display, Formatter};

use crate::ModeFlags;

/// Ordered list of translation tables shared by every test in a document.
///
/// Rendered as the comma separated list the engine expects, e.g. `a,b,c`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TableSet {
    tables: Vec<String>,
}

impl TableSet {
    pub fn new() -> Self {
        TableSet::default()
    }

    /// Appends a table, keeping declaration order.
    pub fn push(&mut self, table: impl Into<String>) {
        self.tables.push(table.into());
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tables.iter().map(String::as_str)
    }

    /// The comma joined table list.
    #[must_use]
    pub fn descriptor(&self) -> String {
        self.tables.join(",")
    }
}

impl Display for TableSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.descriptor())
    }
}

impl<S: Into<String>> FromIterator<S> for TableSet {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        TableSet {
            tables: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Per character emphasis codes applied to the input word.
///
/// `0` is plain text; other values select an emphasis class of the table.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Typeform(Vec<u16>);

impl Typeform {
    pub fn new(codes: Vec<u16>) -> Self {
        Typeform(codes)
    }

    #[must_use]
    pub fn codes(&self) -> &[u16] {
        &self.0
    }
}

/// Renders one code per character, e.g. `00110`. Codes above 9 are written
/// as `[n]`.
impl Display for Typeform {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for code in &self.0 {
            if *code < 10 {
                write!(f, "{code}")?;
            } else {
                write!(f, "[{code}]")?;
            }
        }
        Ok(())
    }
}

/// Execution options of a single test.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TestOptions {
    /// The translation is declared to disagree with the expected output.
    pub expected_failure: bool,
    pub mode: ModeFlags,
    pub typeform: Option<Typeform>,
}

/// One parsed entry of the `tests` list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TestCase {
    pub word: String,
    pub expected: String,
    pub options: TestOptions,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_join_in_order() {
        let tables: TableSet = ["a", "b", "c"].into_iter().collect();
        assert_eq!(tables.descriptor(), "a,b,c");

        let mut single = TableSet::new();
        single.push("a");
        assert_eq!(single.to_string(), "a");
        assert_eq!(TableSet::new().descriptor(), "");
    }

    #[test]
    fn typeform_display() {
        assert_eq!(Typeform::new(vec![0, 0, 1, 1, 0]).to_string(), "00110");
        assert_eq!(Typeform::new(vec![12, 1]).to_string(), "[12]1");
    }

    #[test]
    fn default_options() {
        let options = TestOptions::default();
        assert!(!options.expected_failure);
        assert!(options.mode.is_empty());
        assert_eq!(options.typeform, None);
    }
}
