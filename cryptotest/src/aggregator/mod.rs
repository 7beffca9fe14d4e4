//! Top level run: every discovered category, the whole-provider-set checks
//! and the cross-category invariants, merged into one [`Report`].

#[cfg(test)]
mod aggregator_test;

use crate::checks::{TestProviders, TestServices};
use crate::config::Settings;
use crate::discovery::{Registration, TestCatalog};
use crate::enumerator::test_units;
use crate::registry::ProviderRegistry;
use crate::result::TestResult;
use crate::runner::AlgorithmRunner;
use crate::utilities::error::*;

use serde::Serialize;
use std::fmt::Write;
use tracing::{info, warn};

pub const CONSTANT_SERVICES: &str = "ConstantServices";
pub const NO_ALGORITHM_MISSED: &str = "NoAlgorithmMissed";

const SEPARATOR: &str = "----------------------------------";

/// A category ready to run, or the result explaining why it cannot
enum Slot {
    Ready(AlgorithmRunner),
    Rejected(TestResult),
}

impl Slot {
    fn run(self) -> TestResult {
        match self {
            Slot::Ready(runner) => runner.run(),
            Slot::Rejected(result) => result,
        }
    }
}

pub struct CryptoTest {
    registry: ProviderRegistry,
    settings: Settings,
    catalog: TestCatalog,
    only: Vec<String>,
}

impl CryptoTest {
    /// Run the bundled categories against `registry`
    pub fn new(registry: ProviderRegistry, settings: Settings) -> Self {
        Self {
            registry,
            settings,
            catalog: TestCatalog::builtin(),
            only: vec![],
        }
    }

    pub fn with_catalog(mut self, catalog: TestCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// Restrict the run to the named categories, an empty list runs all
    pub fn with_only(mut self, only: Vec<String>) -> Self {
        self.only = only;
        self
    }

    pub fn registry(&self) -> &ProviderRegistry {
        &self.registry
    }

    /// Categories the run would execute, in discovery order
    pub fn categories(&self) -> Vec<Registration> {
        self.catalog
            .discover()
            .into_iter()
            .filter(|r| self.only.is_empty() || self.only.iter().any(|o| o == r.name))
            .collect()
    }

    /// Run everything once and collect the results.
    ///
    /// Failures of single units or categories never abort the run; only a
    /// category thread dying in parallel mode is returned as an error.
    pub fn run_all(&self) -> Result<Report> {
        let registrations = self.categories();
        info!("Loaded test categories: {}", registrations.len());

        let mut covered = vec![];
        let mut slots = vec![];
        for registration in &registrations {
            let Some(test) = registration.instantiate(&self.settings) else {
                continue;
            };
            covered.push(test.tested_part().to_string());
            let name = test.name();
            slots.push(
                match AlgorithmRunner::new(test, &self.registry, &self.settings) {
                    Ok(runner) => Slot::Ready(runner),
                    Err(err) => {
                        warn!("cannot run {}: {}", name, err);
                        Slot::Rejected(TestResult::fail(err.to_string(), name, 0, 1))
                    }
                },
            );
        }

        let mut results = if self.settings.parallel {
            run_parallel(slots)?
        } else {
            slots.into_iter().map(Slot::run).collect()
        };

        results.push(TestProviders::new(&self.settings).run(&self.registry));
        let inventory = TestServices::new(&self.settings)
            .run(&self.registry, covered.iter().map(String::as_str));
        results.push(inventory.result);

        let seen: Vec<usize> = results.iter().filter_map(|r| r.seen()).collect();
        results.push(constant_services(&seen));

        let total_seen = match seen.iter().max() {
            Some(max) => *max,
            None => test_units(&self.registry, self.settings.test_aliases).len(),
        };
        let executed = results
            .iter()
            .filter_map(|r| r.stats())
            .map(|s| s.executed)
            .sum::<usize>()
            + inventory.uncovered_units;
        results.push(no_algorithm_missed(executed, total_seen));

        Ok(Report::new(results))
    }
}

fn run_parallel(slots: Vec<Slot>) -> Result<Vec<TestResult>> {
    std::thread::scope(|scope| {
        let handles: Vec<_> = slots
            .into_iter()
            .map(|slot| scope.spawn(move || slot.run()))
            .collect();
        handles
            .into_iter()
            .map(|handle| {
                handle
                    .join()
                    .map_err(|_| Error::Other("category thread panicked".to_string()))
            })
            .collect()
    })
}

/// Every category walks the same space, so every `seen` must be equal
fn constant_services(seen: &[usize]) -> TestResult {
    match (seen.iter().min(), seen.iter().max()) {
        (Some(min), Some(max)) if min != max => TestResult::fail(
            format!("Number of checked services changed during test run: from {min} to {max}"),
            CONSTANT_SERVICES,
            1,
            1,
        ),
        (_, max) => TestResult::pass(
            format!(
                "Number of checked services was constant: {}",
                max.copied().unwrap_or_default()
            ),
            CONSTANT_SERVICES,
            1,
        ),
    }
}

/// Every unit must be executed by exactly one category or belong to a type
/// no category covers. Filtered units count as missed.
fn no_algorithm_missed(executed: usize, seen: usize) -> TestResult {
    if executed == seen {
        TestResult::pass(
            format!("Tested all {executed} algorithms"),
            NO_ALGORITHM_MISSED,
            1,
        )
    } else {
        TestResult::fail(
            format!("Some algorithms missed! Checked {executed} from {seen}"),
            NO_ALGORITHM_MISSED,
            1,
            1,
        )
    }
}

/// Everything a run produced
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    results: Vec<TestResult>,
    runs: usize,
    failed: usize,
    checks: usize,
}

impl Report {
    pub fn new(results: Vec<TestResult>) -> Self {
        let failed = results.iter().filter(|r| r.is_failed()).count();
        let checks = results
            .iter()
            .filter_map(|r| r.stats())
            .map(|s| s.executed)
            .sum();
        Self {
            runs: results.len(),
            failed,
            checks,
            results,
        }
    }

    pub fn results(&self) -> &[TestResult] {
        &self.results
    }

    pub fn get(&self, test: &str) -> Option<&TestResult> {
        self.results.iter().find(|r| r.test() == test)
    }

    /// Number of results, categories and checks alike
    pub fn runs(&self) -> usize {
        self.runs
    }

    /// Number of failed results
    pub fn failed(&self) -> usize {
        self.failed
    }

    /// Units executed over all categories
    pub fn checks(&self) -> usize {
        self.checks
    }

    pub fn is_passed(&self) -> bool {
        self.failed == 0
    }

    /// Human readable report
    pub fn render(&self) -> String {
        let mut out = String::new();
        for result in &self.results {
            for line in result.log() {
                let _ = writeln!(out, "{line}");
            }
            let _ = writeln!(out, "{}", result.full_explanation());
            let _ = writeln!(out, "{result}");
        }
        let _ = writeln!(out, "{SEPARATOR}");
        for result in &self.results {
            let _ = writeln!(out, "{result}");
        }
        let _ = writeln!(out, "Checked units: {}", self.checks);
        let _ = write!(out, "Test runs: {}; failed :{}", self.runs, self.failed);
        out
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
