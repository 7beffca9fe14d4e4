//! Single-use driver walking one category over every test unit.
//!
//! A run walks the full combinatorial space of the registry, counting every
//! unit as seen, and hands the units of the category's own type to its
//! check. Every outcome of the check is classified and kept local to the
//! run until the final [`TestResult`] is built.

#[cfg(test)]
mod runner_test;

use crate::config::{compile_filter, Settings};
use crate::enumerator::{generate_title, test_units, TestUnit};
use crate::registry::ProviderRegistry;
use crate::result::{AlgorithmStats, TestResult};
use crate::utilities::error::*;

use regex::Regex;
use std::any::Any;
use std::error::Error as StdError;
use std::panic::{catch_unwind, AssertUnwindSafe};
use tracing::{debug, error, info};

/// A category of checks bound to one service type
pub trait AlgorithmTest: Send + Sync {
    /// Service type this category exercises, e.g. `Cipher`
    fn tested_part(&self) -> &str;

    /// Category name, used in reports and to look up configured filters
    fn name(&self) -> String {
        format!("{}Tests", self.tested_part())
    }

    /// Names matching this pattern as a whole are skipped
    fn algorithm_exclude_list(&self) -> Option<&str> {
        None
    }

    /// When set, only names matching this pattern as a whole are executed
    fn algorithm_allow_list(&self) -> Option<&str> {
        None
    }

    /// Exercise one unit; the variant of the returned failure decides how
    /// the unit is counted
    fn check_algorithm(&self, unit: &TestUnit) -> std::result::Result<(), Failure>;
}

/// Drives one [`AlgorithmTest`] exactly once; [`AlgorithmRunner::run`] consumes it
pub struct AlgorithmRunner {
    test: Box<dyn AlgorithmTest>,
    registry: ProviderRegistry,
    test_aliases: bool,
    print_stacks: bool,
    include: Option<Regex>,
    exclude: Option<Regex>,
}

impl std::fmt::Debug for AlgorithmRunner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AlgorithmRunner")
            .field("test", &self.test.name())
            .field("include", &self.include.as_ref().map(Regex::as_str))
            .field("exclude", &self.exclude.as_ref().map(Regex::as_str))
            .finish()
    }
}

impl AlgorithmRunner {
    /// Bind `test` to `registry`. Filters configured for the category take
    /// precedence over the ones the category declares itself.
    pub fn new(
        test: Box<dyn AlgorithmTest>,
        registry: &ProviderRegistry,
        settings: &Settings,
    ) -> Result<Self> {
        let name = test.name();
        let filter = settings.filter(&name);
        let include = filter
            .and_then(|f| f.include.as_deref())
            .or_else(|| test.algorithm_allow_list())
            .map(compile_filter)
            .transpose()?;
        let exclude = filter
            .and_then(|f| f.exclude.as_deref())
            .or_else(|| test.algorithm_exclude_list())
            .map(compile_filter)
            .transpose()?;

        Ok(Self {
            test,
            registry: registry.clone(),
            test_aliases: settings.test_aliases,
            print_stacks: settings.verbosity.print_stacks,
            include,
            exclude,
        })
    }

    pub fn name(&self) -> String {
        self.test.name()
    }

    pub fn tested_part(&self) -> &str {
        self.test.tested_part()
    }

    fn is_filtered(&self, name: &str) -> bool {
        if let Some(exclude) = &self.exclude {
            if exclude.is_match(name) {
                return true;
            }
        }
        if let Some(include) = &self.include {
            if !include.is_match(name) {
                return true;
            }
        }
        false
    }

    fn check(&self, unit: &TestUnit) -> std::result::Result<(), Failure> {
        catch_unwind(AssertUnwindSafe(|| self.test.check_algorithm(unit)))
            .unwrap_or_else(|panic| Err(Failure::Other(Error::Other(panic_message(panic)))))
    }

    /// Walk every unit of the registry once and return the category result
    pub fn run(self) -> TestResult {
        let name = self.test.name();
        info!("running: {}", name);

        let part = self.test.tested_part().to_string();
        let mut stats = AlgorithmStats::default();
        let mut failed_runs = vec![];
        let mut failed_inits = vec![];
        let mut error_runs = vec![];
        let mut log = vec![];

        for unit in test_units(&self.registry, self.test_aliases) {
            stats.seen += 1;
            if unit.service_type() != part {
                continue;
            }
            if self.is_filtered(&unit.name) {
                stats.filtered += 1;
                continue;
            }
            stats.executed += 1;
            let title = generate_title(stats.executed, &unit);
            debug!("{}", title);
            log.push(title.clone());

            let failure = match self.check(&unit) {
                Ok(()) => {
                    stats.passed += 1;
                    log.push("Passed".to_string());
                    continue;
                }
                Err(Failure::Ignored(reason)) => {
                    stats.ignored += 1;
                    debug!("ignored {}: {}", unit.name, reason);
                    log.push(format!("Ignored: {reason}"));
                    continue;
                }
                Err(failure) => failure,
            };

            let (verdict, bucket) = match failure {
                Failure::Run(_) => (
                    format!("failed to use: {} from {}", unit.algorithm(), unit.provider.name()),
                    &mut failed_runs,
                ),
                Failure::Instantiation(_) => (
                    format!("Failed to init: {} from {}", unit.algorithm(), unit.provider.name()),
                    &mut failed_inits,
                ),
                _ => (
                    format!("Error: {} from {}", unit.algorithm(), unit.provider.name()),
                    &mut error_runs,
                ),
            };
            let report = describe(&title, &failure);
            if self.print_stacks {
                error!("{}", report);
            }
            log.push(failure.to_string());
            log.push(verdict);
            log.push(match failure {
                Failure::Run(_) | Failure::Instantiation(_) => "Failed".to_string(),
                _ => "Error".to_string(),
            });
            bucket.push(report);
        }

        let failed = failed_runs.len() + failed_inits.len() + error_runs.len();
        let result = if failed == 0 {
            TestResult::pass(format!("All {part} passed"), name, stats.executed)
        } else {
            let mut explanation = format!("{failed} {part} failed\n");
            for (label, bucket) in [
                ("failed runs", &failed_runs),
                ("failed inits", &failed_inits),
                ("error runs", &error_runs),
            ] {
                explanation.push_str(&format!("** {}: {} **\n", label, bucket.len()));
                for report in bucket {
                    explanation.push_str(report);
                    explanation.push('\n');
                }
            }
            TestResult::fail(explanation, name, stats.executed, failed)
        };

        result.with_stats(stats).with_log(log)
    }
}

/// Unit title followed by the failure and every error it was caused by
fn describe(title: &str, failure: &Failure) -> String {
    let mut report = format!("{title}\n{failure}");
    // the failure already displays its direct source
    let mut source = StdError::source(failure).and_then(|err| err.source());
    while let Some(err) = source {
        report.push_str(&format!("\ncaused by: {err}"));
        source = err.source();
    }
    report
}

fn panic_message(panic: Box<dyn Any + Send>) -> String {
    if let Some(message) = panic.downcast_ref::<&str>() {
        format!("panicked: {message}")
    } else if let Some(message) = panic.downcast_ref::<String>() {
        format!("panicked: {message}")
    } else {
        "panicked".to_string()
    }
}
