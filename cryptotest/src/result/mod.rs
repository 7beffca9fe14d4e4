//! Outcome records for single checks and whole category runs.


use serde::Serialize;
use std::fmt::{Display, Formatter};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum State {
    Passed,
    Failed,
}

impl Display for State {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match *self {
            State::Passed => f.write_str("PASSED"),
            State::Failed => f.write_str("FAILED"),
        }
    }
}

/// Counters a category run accumulates over the combinatorial space.
///
/// `seen` counts every unit the run walked, whatever its type. Of those,
/// units of the category's type are either `filtered` out by the include or
/// exclude patterns or `executed`. Every executed unit ends up in exactly
/// one of `passed`, `ignored` or the failure buckets of the result.
#[derive(Default, Debug, Copy, Clone, Eq, PartialEq, Serialize)]
pub struct AlgorithmStats {
    pub seen: usize,
    pub executed: usize,
    pub filtered: usize,
    pub passed: usize,
    pub ignored: usize,
}

/// Immutable outcome of a check or of a category run
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct TestResult {
    explanation: String,
    state: State,
    test: String,
    subtests: usize,
    failures: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    stats: Option<AlgorithmStats>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    log: Vec<String>,
}

impl TestResult {
    fn new(
        explanation: impl Into<String>,
        state: State,
        test: impl Into<String>,
        total: usize,
        failures: usize,
    ) -> Self {
        Self {
            explanation: explanation.into(),
            state,
            test: test.into(),
            // keeps failures <= subtests for callers reporting a bare failure
            subtests: total.max(failures),
            failures,
            stats: None,
            log: vec![],
        }
    }

    pub fn pass(explanation: impl Into<String>, test: impl Into<String>, total: usize) -> Self {
        Self::new(explanation, State::Passed, test, total, 0)
    }

    pub fn fail(
        explanation: impl Into<String>,
        test: impl Into<String>,
        total: usize,
        failures: usize,
    ) -> Self {
        Self::new(explanation, State::Failed, test, total, failures)
    }

    /// Attach the counters of a category run
    pub fn with_stats(mut self, stats: AlgorithmStats) -> Self {
        self.stats = Some(stats);
        self
    }

    /// Attach the per-unit lines a category run produced
    pub fn with_log(mut self, log: Vec<String>) -> Self {
        self.log = log;
        self
    }

    pub fn explanation(&self) -> &str {
        &self.explanation
    }

    /// Explanation prefixed with the check counts
    pub fn full_explanation(&self) -> String {
        format!(
            "Total checks: {}, failed: {}\n{}",
            self.subtests, self.failures, self.explanation
        )
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn is_passed(&self) -> bool {
        self.state == State::Passed
    }

    pub fn is_failed(&self) -> bool {
        self.state == State::Failed
    }

    /// Name of the check or category that produced this result
    pub fn test(&self) -> &str {
        &self.test
    }

    pub fn subtests(&self) -> usize {
        self.subtests
    }

    pub fn failures(&self) -> usize {
        self.failures
    }

    pub fn stats(&self) -> Option<&AlgorithmStats> {
        self.stats.as_ref()
    }

    /// Units walked by a category run, `None` for whole-provider-set checks
    pub fn seen(&self) -> Option<usize> {
        self.stats.map(|s| s.seen)
    }

    pub fn log(&self) -> &[String] {
        &self.log
    }
}

impl Display for TestResult {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.state, self.test)
    }
}
