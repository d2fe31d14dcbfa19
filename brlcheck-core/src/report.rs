use std::fmt::{Display, Formatter};

/// Result of a single test compared to its declared expectation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Passed,
    /// Declared `xfail` and the translation did differ.
    FailedAsExpected,
    Failed,
    /// Declared `xfail` but the translation matched.
    PassedUnexpectedly,
}

impl Outcome {
    #[must_use]
    pub fn new(failed: bool, expected_failure: bool) -> Self {
        match (failed, expected_failure) {
            (false, false) => Outcome::Passed,
            (true, true) => Outcome::FailedAsExpected,
            (true, false) => Outcome::Failed,
            (false, true) => Outcome::PassedUnexpectedly,
        }
    }

    /// Whether the observed result disagrees with the expectation.
    #[must_use]
    pub fn is_mismatch(self) -> bool {
        matches!(self, Outcome::Failed | Outcome::PassedUnexpectedly)
    }
}

/// Counters accumulated over one document.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct RunReport {
    pub total: usize,
    pub failures: usize,
}

impl RunReport {
    pub fn record(&mut self, outcome: Outcome) {
        self.total += 1;
        if outcome.is_mismatch() {
            self.failures += 1;
        }
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        self.failures == 0
    }

    /// Process exit status for this report: `0` on success, `1` otherwise.
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        u8::from(!self.is_success())
    }
}

impl Display for RunReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let verdict = if self.is_success() { "SUCCESS" } else { "FAILURE" };
        write!(f, "{verdict} ({} tests {}, failures)", self.total, self.failures)
    }
}
